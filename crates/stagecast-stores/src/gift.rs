// SPDX-License-Identifier: Apache-2.0
//! Gift catalog and gift traffic for one room.

use std::sync::Arc;

use serde::Serialize;
use stagecast_bridge::{replace, ActionCallbacks, Bridge, Domain, Field, Store};
use stagecast_proto::records::GiftCategory;
use stagecast_proto::{ScopeError, ScopeKey, StoreKind};

/// Discrete event: a gift landed in the room. Payload decodes to
/// [`stagecast_proto::events::GiftReceived`].
pub const EVENT_RECEIVE_GIFT: &str = "onReceiveGift";

/// Mirrored gift state.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct GiftState {
    /// Catalog of sendable gifts, grouped by category.
    pub usable_gifts: Vec<GiftCategory>,
}

/// Wiring of the gift store into the bridge.
pub enum GiftDomain {}

impl Domain for GiftDomain {
    type State = GiftState;
    const KIND: StoreKind = StoreKind::Gift;
    const FIELDS: &'static [Field<GiftState>] = &[Field {
        name: "usableGifts",
        apply: |state, payload| replace(&mut state.usable_gifts, payload),
    }];
    const EVENTS: &'static [&'static str] = &[EVENT_RECEIVE_GIFT];
}

/// Operations the gift facade routes to the engine.
pub const OPERATIONS: &[&str] = &["refreshUsableGifts", "sendGift"];

/// Parameters for `sendGift`.
#[derive(Debug, Clone, Default, Serialize)]
pub struct SendGiftOptions {
    /// Gift to send.
    #[serde(rename = "giftID")]
    pub gift_id: String,
    /// How many to send at once.
    pub count: u32,
}

/// Resolve the gift store for a room, binding on first use.
pub fn store(bridge: &Bridge, scope: &ScopeKey) -> Result<Arc<Store<GiftDomain>>, ScopeError> {
    bridge.store::<GiftDomain>(scope)
}

/// Re-fetch the gift catalog.
pub fn refresh_usable_gifts(bridge: &Bridge, callbacks: ActionCallbacks) {
    bridge.invoke("refreshUsableGifts", serde_json::json!({}), callbacks);
}

/// Send a gift into the room.
pub fn send_gift(bridge: &Bridge, options: &SendGiftOptions, callbacks: ActionCallbacks) {
    bridge.invoke_serialized("sendGift", options, callbacks);
}
