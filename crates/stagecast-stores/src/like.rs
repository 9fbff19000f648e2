// SPDX-License-Identifier: Apache-2.0
//! Like counter and like traffic for one room.

use std::sync::Arc;

use serde::Serialize;
use stagecast_bridge::{replace, ActionCallbacks, Bridge, Domain, Field, Store};
use stagecast_proto::{ScopeError, ScopeKey, StoreKind};

/// Discrete event: a batch of likes arrived. Payload decodes to
/// [`stagecast_proto::events::LikesReceived`].
pub const EVENT_RECEIVE_LIKES: &str = "onReceiveLikesMessage";

/// Mirrored like state.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct LikeState {
    /// Total likes across the stream's lifetime.
    pub total_like_count: u64,
}

/// Wiring of the like store into the bridge.
pub enum LikeDomain {}

impl Domain for LikeDomain {
    type State = LikeState;
    const KIND: StoreKind = StoreKind::Like;
    const FIELDS: &'static [Field<LikeState>] = &[Field {
        name: "totalLikeCount",
        apply: |state, payload| replace(&mut state.total_like_count, payload),
    }];
    const EVENTS: &'static [&'static str] = &[EVENT_RECEIVE_LIKES];
}

/// Operations the like facade routes to the engine.
pub const OPERATIONS: &[&str] = &["sendLike"];

/// Parameters for `sendLike`.
#[derive(Debug, Clone, Default, Serialize)]
pub struct SendLikeOptions {
    /// Likes in this batch.
    pub count: u32,
}

/// Resolve the like store for a room, binding on first use.
pub fn store(bridge: &Bridge, scope: &ScopeKey) -> Result<Arc<Store<LikeDomain>>, ScopeError> {
    bridge.store::<LikeDomain>(scope)
}

/// Send likes into the room.
pub fn send_like(bridge: &Bridge, options: &SendLikeOptions, callbacks: ActionCallbacks) {
    bridge.invoke_serialized("sendLike", options, callbacks);
}
