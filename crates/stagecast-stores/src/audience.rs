// SPDX-License-Identifier: Apache-2.0
//! Audience roster and moderation for one room.

use std::sync::Arc;

use serde::Serialize;
use stagecast_bridge::{replace, ActionCallbacks, Bridge, Domain, Field, Store};
use stagecast_proto::records::LiveUserInfo;
use stagecast_proto::{ScopeError, ScopeKey, StoreKind};

/// Discrete event: a viewer entered the room.
pub const EVENT_AUDIENCE_JOINED: &str = "onAudienceJoined";
/// Discrete event: a viewer left the room.
pub const EVENT_AUDIENCE_LEFT: &str = "onAudienceLeft";

/// Mirrored audience state.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct AudienceState {
    /// Fetched page of viewers.
    pub audience_list: Vec<LiveUserInfo>,
    /// Viewers currently in the room.
    pub audience_count: u64,
}

/// Wiring of the audience store into the bridge.
pub enum AudienceDomain {}

impl Domain for AudienceDomain {
    type State = AudienceState;
    const KIND: StoreKind = StoreKind::Audience;
    const FIELDS: &'static [Field<AudienceState>] = &[
        Field {
            name: "audienceList",
            apply: |state, payload| replace(&mut state.audience_list, payload),
        },
        Field {
            name: "audienceCount",
            apply: |state, payload| replace(&mut state.audience_count, payload),
        },
    ];
    const EVENTS: &'static [&'static str] = &[EVENT_AUDIENCE_JOINED, EVENT_AUDIENCE_LEFT];
}

/// Operations the audience facade routes to the engine.
pub const OPERATIONS: &[&str] = &[
    "fetchAudienceList",
    "setAdministrator",
    "revokeAdministrator",
    "kickUserOutOfRoom",
    "disableSendMessage",
];

/// Parameters for `fetchAudienceList`.
#[derive(Debug, Clone, Default, Serialize)]
pub struct FetchAudienceListOptions {
    /// Cursor from the previous page.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cursor: Option<String>,
    /// Page size.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub count: Option<u32>,
}

/// Parameters for `setAdministrator`.
#[derive(Debug, Clone, Default, Serialize)]
pub struct SetAdministratorOptions {
    /// Viewer to promote.
    #[serde(rename = "userID")]
    pub user_id: String,
}

/// Parameters for `revokeAdministrator`.
#[derive(Debug, Clone, Default, Serialize)]
pub struct RevokeAdministratorOptions {
    /// Admin to demote.
    #[serde(rename = "userID")]
    pub user_id: String,
}

/// Parameters for `kickUserOutOfRoom`.
#[derive(Debug, Clone, Default, Serialize)]
pub struct KickUserOutOfRoomOptions {
    /// Viewer to remove.
    #[serde(rename = "userID")]
    pub user_id: String,
}

/// Parameters for `disableSendMessage`.
#[derive(Debug, Clone, Default, Serialize)]
pub struct DisableSendMessageOptions {
    /// Viewer to mute or unmute.
    #[serde(rename = "userID")]
    pub user_id: String,
    /// `true` mutes, `false` restores.
    pub disable: bool,
}

/// Resolve the audience store for a room, binding on first use.
pub fn store(bridge: &Bridge, scope: &ScopeKey) -> Result<Arc<Store<AudienceDomain>>, ScopeError> {
    bridge.store::<AudienceDomain>(scope)
}

/// Fetch a page of the viewer roster.
pub fn fetch_audience_list(
    bridge: &Bridge,
    options: &FetchAudienceListOptions,
    callbacks: ActionCallbacks,
) {
    bridge.invoke_serialized("fetchAudienceList", options, callbacks);
}

/// Promote a viewer to room admin.
pub fn set_administrator(
    bridge: &Bridge,
    options: &SetAdministratorOptions,
    callbacks: ActionCallbacks,
) {
    bridge.invoke_serialized("setAdministrator", options, callbacks);
}

/// Demote a room admin.
pub fn revoke_administrator(
    bridge: &Bridge,
    options: &RevokeAdministratorOptions,
    callbacks: ActionCallbacks,
) {
    bridge.invoke_serialized("revokeAdministrator", options, callbacks);
}

/// Remove a viewer from the room.
pub fn kick_user_out_of_room(
    bridge: &Bridge,
    options: &KickUserOutOfRoomOptions,
    callbacks: ActionCallbacks,
) {
    bridge.invoke_serialized("kickUserOutOfRoom", options, callbacks);
}

/// Mute or unmute a viewer's chat.
pub fn disable_send_message(
    bridge: &Bridge,
    options: &DisableSendMessageOptions,
    callbacks: ActionCallbacks,
) {
    bridge.invoke_serialized("disableSendMessage", options, callbacks);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn count_and_list_update_independently() {
        let mut state = AudienceState::default();
        let count = AudienceDomain::FIELDS
            .iter()
            .find(|field| field.name == "audienceCount")
            .unwrap();
        (count.apply)(&mut state, "37");
        assert_eq!(state.audience_count, 37);
        assert!(state.audience_list.is_empty());
    }
}
