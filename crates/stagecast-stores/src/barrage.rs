// SPDX-License-Identifier: Apache-2.0
//! Chat messages for one room.

use std::sync::Arc;

use serde::Serialize;
use stagecast_bridge::{replace, ActionCallbacks, Bridge, Domain, Field, Store};
use stagecast_proto::records::BarrageMessage;
use stagecast_proto::{ScopeError, ScopeKey, StoreKind};

/// Mirrored chat state.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct BarrageState {
    /// Message backlog, engine-bounded.
    pub message_list: Vec<BarrageMessage>,
    /// Whether the local user may send messages.
    pub allow_send_message: bool,
}

/// Wiring of the chat store into the bridge.
pub enum BarrageDomain {}

impl Domain for BarrageDomain {
    type State = BarrageState;
    const KIND: StoreKind = StoreKind::Barrage;
    const FIELDS: &'static [Field<BarrageState>] = &[
        Field {
            name: "messageList",
            apply: |state, payload| replace(&mut state.message_list, payload),
        },
        Field {
            name: "allowSendMessage",
            apply: |state, payload| replace(&mut state.allow_send_message, payload),
        },
    ];
    const EVENTS: &'static [&'static str] = &[];
}

/// Operations the chat facade routes to the engine.
pub const OPERATIONS: &[&str] = &["sendTextMessage", "sendCustomMessage"];

/// Parameters for `sendTextMessage`.
#[derive(Debug, Clone, Default, Serialize)]
pub struct SendTextMessageOptions {
    /// Message body.
    pub text: String,
}

/// Parameters for `sendCustomMessage`.
#[derive(Debug, Clone, Default, Serialize)]
pub struct SendCustomMessageOptions {
    /// Business tag identifying the payload schema.
    #[serde(rename = "businessID")]
    pub business_id: String,
    /// Opaque payload, usually JSON-encoded.
    pub data: String,
}

/// Resolve the chat store for a room, binding on first use.
pub fn store(bridge: &Bridge, scope: &ScopeKey) -> Result<Arc<Store<BarrageDomain>>, ScopeError> {
    bridge.store::<BarrageDomain>(scope)
}

/// Send a plain text message.
pub fn send_text_message(
    bridge: &Bridge,
    options: &SendTextMessageOptions,
    callbacks: ActionCallbacks,
) {
    bridge.invoke_serialized("sendTextMessage", options, callbacks);
}

/// Send a custom (tagged) message.
pub fn send_custom_message(
    bridge: &Bridge,
    options: &SendCustomMessageOptions,
    callbacks: ActionCallbacks,
) {
    bridge.invoke_serialized("sendCustomMessage", options, callbacks);
}
