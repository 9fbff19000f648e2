// SPDX-License-Identifier: Apache-2.0
//! Room directory: the live list, its paging cursor and the current room.
//!
//! This is also where the room-lifecycle notifications surface: the
//! stream ending under the local user, or the local user being removed.

use std::sync::Arc;

use serde::Serialize;
use stagecast_bridge::{replace, ActionCallbacks, Bridge, Domain, Field, Store};
use stagecast_proto::codes::TakeSeatMode;
use stagecast_proto::records::LiveInfo;
use stagecast_proto::{ScopeError, ScopeKey, StoreKind};

/// Discrete event: the stream ended while the local user was in it.
pub const EVENT_LIVE_ENDED: &str = "onLiveEnded";
/// Discrete event: the local user was removed from the room.
pub const EVENT_KICKED_OUT_OF_LIVE: &str = "onKickedOutOfLive";

/// Mirrored live-directory state.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct LiveListState {
    /// Fetched page of rooms.
    pub live_list: Vec<LiveInfo>,
    /// Cursor for the next page, empty when exhausted.
    pub live_list_cursor: String,
    /// Room the local user is currently in, if any.
    pub current_live: Option<LiveInfo>,
}

/// Wiring of the live-list store into the bridge.
pub enum LiveListDomain {}

impl Domain for LiveListDomain {
    type State = LiveListState;
    const KIND: StoreKind = StoreKind::LiveList;
    const FIELDS: &'static [Field<LiveListState>] = &[
        Field {
            name: "liveList",
            apply: |state, payload| replace(&mut state.live_list, payload),
        },
        Field {
            name: "liveListCursor",
            apply: |state, payload| replace(&mut state.live_list_cursor, payload),
        },
        Field {
            name: "currentLive",
            apply: |state, payload| replace(&mut state.current_live, payload),
        },
    ];
    const EVENTS: &'static [&'static str] = &[EVENT_LIVE_ENDED, EVENT_KICKED_OUT_OF_LIVE];
}

/// Operations the live-list facade routes to the engine.
pub const OPERATIONS: &[&str] = &[
    "fetchLiveList",
    "createLive",
    "joinLive",
    "leaveLive",
    "endLive",
    "updateLiveInfo",
    "callExperimentalAPI",
];

/// Parameters for `fetchLiveList`.
#[derive(Debug, Clone, Default, Serialize)]
pub struct FetchLiveListOptions {
    /// Cursor from the previous page, empty for the first.
    pub cursor: String,
    /// Page size.
    pub count: u32,
}

/// Parameters for `createLive`.
#[derive(Debug, Clone, Default, Serialize)]
pub struct CreateLiveOptions {
    /// Room id to create under, engine-assigned when absent.
    #[serde(rename = "liveID", skip_serializing_if = "Option::is_none")]
    pub live_id: Option<String>,
    /// Room title.
    #[serde(rename = "liveName", skip_serializing_if = "Option::is_none")]
    pub live_name: Option<String>,
    /// Cover image URL.
    #[serde(rename = "coverURL", skip_serializing_if = "Option::is_none")]
    pub cover_url: Option<String>,
    /// Pinned notice text.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub notice: Option<String>,
    /// Enable the seat grid.
    #[serde(rename = "isSeatEnabled", skip_serializing_if = "Option::is_none")]
    pub is_seat_enabled: Option<bool>,
    /// Seat grid capacity.
    #[serde(rename = "maxSeatCount", skip_serializing_if = "Option::is_none")]
    pub max_seat_count: Option<u32>,
    /// How seats are taken.
    #[serde(rename = "seatMode", skip_serializing_if = "Option::is_none")]
    pub seat_mode: Option<TakeSeatMode>,
}

/// Parameters for `joinLive`.
#[derive(Debug, Clone, Default, Serialize)]
pub struct JoinLiveOptions {
    /// Room to join.
    #[serde(rename = "liveID")]
    pub live_id: String,
}

/// Parameters for `updateLiveInfo`.
#[derive(Debug, Clone, Default, Serialize)]
pub struct UpdateLiveInfoOptions {
    /// Room to update.
    #[serde(rename = "liveID")]
    pub live_id: String,
    /// New title.
    #[serde(rename = "liveName", skip_serializing_if = "Option::is_none")]
    pub live_name: Option<String>,
    /// New notice text.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub notice: Option<String>,
    /// New cover image URL.
    #[serde(rename = "coverURL", skip_serializing_if = "Option::is_none")]
    pub cover_url: Option<String>,
}

/// Parameters for `callExperimentalAPI`.
#[derive(Debug, Clone, Default, Serialize)]
pub struct CallExperimentalApiOptions {
    /// JSON-encoded request forwarded verbatim to the engine.
    #[serde(rename = "jsonParams")]
    pub json_params: String,
}

/// Resolve the global live-list store, binding on first use.
pub fn store(bridge: &Bridge) -> Result<Arc<Store<LiveListDomain>>, ScopeError> {
    bridge.store::<LiveListDomain>(&ScopeKey::Global)
}

/// Fetch a page of the live directory.
pub fn fetch_live_list(bridge: &Bridge, options: &FetchLiveListOptions, callbacks: ActionCallbacks) {
    bridge.invoke_serialized("fetchLiveList", options, callbacks);
}

/// Create and start a room.
pub fn create_live(bridge: &Bridge, options: &CreateLiveOptions, callbacks: ActionCallbacks) {
    bridge.invoke_serialized("createLive", options, callbacks);
}

/// Join a room as audience.
pub fn join_live(bridge: &Bridge, options: &JoinLiveOptions, callbacks: ActionCallbacks) {
    bridge.invoke_serialized("joinLive", options, callbacks);
}

/// Leave the current room.
pub fn leave_live(bridge: &Bridge, callbacks: ActionCallbacks) {
    bridge.invoke("leaveLive", serde_json::json!({}), callbacks);
}

/// End the current room (owner only).
pub fn end_live(bridge: &Bridge, callbacks: ActionCallbacks) {
    bridge.invoke("endLive", serde_json::json!({}), callbacks);
}

/// Update room metadata.
pub fn update_live_info(
    bridge: &Bridge,
    options: &UpdateLiveInfoOptions,
    callbacks: ActionCallbacks,
) {
    bridge.invoke_serialized("updateLiveInfo", options, callbacks);
}

/// Forward an arbitrary request to the engine's experimental surface.
///
/// The response arrives through the success callback; when none is
/// supplied the outcome is logged, as with any other operation.
pub fn call_experimental_api(
    bridge: &Bridge,
    options: &CallExperimentalApiOptions,
    callbacks: ActionCallbacks,
) {
    bridge.invoke_serialized("callExperimentalAPI", options, callbacks);
}

#[cfg(test)]
mod tests {
    use super::*;

    fn apply(state: &mut LiveListState, name: &str, payload: &str) {
        let field = LiveListDomain::FIELDS
            .iter()
            .find(|field| field.name == name)
            .unwrap();
        (field.apply)(state, payload);
    }

    #[test]
    fn list_and_cursor_update_independently() {
        let mut state = LiveListState::default();
        apply(&mut state, "liveList", r#"[{"liveID":"a"},{"liveID":"b"}]"#);
        apply(&mut state, "liveListCursor", "\"page-2\"");
        assert_eq!(state.live_list.len(), 2);
        assert_eq!(state.live_list_cursor, "page-2");
        apply(&mut state, "liveList", "[]");
        assert!(state.live_list.is_empty());
        assert_eq!(state.live_list_cursor, "page-2");
    }

    #[test]
    fn current_live_clears_on_null() {
        let mut state = LiveListState::default();
        apply(&mut state, "currentLive", r#"{"liveID":"a","liveName":"t"}"#);
        assert!(state.current_live.is_some());
        apply(&mut state, "currentLive", "null");
        assert_eq!(state.current_live, None);
    }

    #[test]
    fn create_options_skip_unset_fields() {
        let value = serde_json::to_value(CreateLiveOptions {
            live_name: Some("show".into()),
            ..CreateLiveOptions::default()
        })
        .unwrap();
        let object = value.as_object().unwrap();
        assert_eq!(object.len(), 1);
        assert_eq!(object["liveName"], "show");
    }
}
