// SPDX-License-Identifier: Apache-2.0
//! Seat grid, layout canvas and speaking volumes for one room.
//!
//! The admin device events carry unusual payloads: the open variants are
//! a bare device-control-policy code, the closed variants are empty.

use std::collections::BTreeMap;
use std::sync::Arc;

use serde::Serialize;
use stagecast_bridge::{replace, ActionCallbacks, Bridge, Domain, Field, Store};
use stagecast_proto::records::{LiveCanvas, SeatInfo};
use stagecast_proto::{ScopeError, ScopeKey, StoreKind};

/// Discrete event: an admin opened the local camera. Payload is a bare
/// [`stagecast_proto::codes::DeviceControlPolicy`] code.
pub const EVENT_LOCAL_CAMERA_OPENED_BY_ADMIN: &str = "onLocalCameraOpenedByAdmin";
/// Discrete event: an admin closed the local camera. Empty payload.
pub const EVENT_LOCAL_CAMERA_CLOSED_BY_ADMIN: &str = "onLocalCameraClosedByAdmin";
/// Discrete event: an admin opened the local microphone. Payload is a
/// bare [`stagecast_proto::codes::DeviceControlPolicy`] code.
pub const EVENT_LOCAL_MICROPHONE_OPENED_BY_ADMIN: &str = "onLocalMicrophoneOpenedByAdmin";
/// Discrete event: an admin closed the local microphone. Empty payload.
pub const EVENT_LOCAL_MICROPHONE_CLOSED_BY_ADMIN: &str = "onLocalMicrophoneClosedByAdmin";

/// Mirrored seat state.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SeatState {
    /// The seat grid.
    pub seat_list: Vec<SeatInfo>,
    /// Layout canvas, unset until the engine publishes one.
    pub canvas: Option<LiveCanvas>,
    /// Speaking users, user id → volume 0–100.
    pub speaking_users: BTreeMap<String, u32>,
}

/// Wiring of the seat store into the bridge.
pub enum SeatDomain {}

impl Domain for SeatDomain {
    type State = SeatState;
    const KIND: StoreKind = StoreKind::Seat;
    const FIELDS: &'static [Field<SeatState>] = &[
        Field {
            name: "seatList",
            apply: |state, payload| replace(&mut state.seat_list, payload),
        },
        Field {
            name: "canvas",
            apply: |state, payload| replace(&mut state.canvas, payload),
        },
        Field {
            name: "speakingUsers",
            apply: |state, payload| replace(&mut state.speaking_users, payload),
        },
    ];
    const EVENTS: &'static [&'static str] = &[
        EVENT_LOCAL_CAMERA_OPENED_BY_ADMIN,
        EVENT_LOCAL_CAMERA_CLOSED_BY_ADMIN,
        EVENT_LOCAL_MICROPHONE_OPENED_BY_ADMIN,
        EVENT_LOCAL_MICROPHONE_CLOSED_BY_ADMIN,
    ];
}

/// Operations the seat facade routes to the engine.
pub const OPERATIONS: &[&str] = &[
    "takeSeat",
    "leaveSeat",
    "muteMicrophone",
    "unmuteMicrophone",
    "kickUserOutOfSeat",
    "moveUserToSeat",
    "lockSeat",
    "unlockSeat",
    "openRemoteCamera",
    "closeRemoteCamera",
    "openRemoteMicrophone",
    "closeRemoteMicrophone",
];

/// Parameters for `takeSeat`.
#[derive(Debug, Clone, Default, Serialize)]
pub struct TakeSeatOptions {
    /// Seat to occupy.
    #[serde(rename = "seatIndex")]
    pub seat_index: u32,
    /// Seconds to wait for approval in apply mode.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub timeout: Option<u32>,
}

/// Parameters for `kickUserOutOfSeat`.
#[derive(Debug, Clone, Default, Serialize)]
pub struct KickUserOutOfSeatOptions {
    /// Seat to vacate.
    #[serde(rename = "seatIndex")]
    pub seat_index: u32,
}

/// Parameters for `moveUserToSeat`.
#[derive(Debug, Clone, Default, Serialize)]
pub struct MoveUserToSeatOptions {
    /// Seat the user currently occupies.
    #[serde(rename = "fromSeatIndex")]
    pub from_seat_index: u32,
    /// Seat to move them to.
    #[serde(rename = "toSeatIndex")]
    pub to_seat_index: u32,
}

/// Parameters for `lockSeat` and `unlockSeat`.
#[derive(Debug, Clone, Default, Serialize)]
pub struct SeatLockOptions {
    /// Seat to lock or unlock.
    #[serde(rename = "seatIndex")]
    pub seat_index: u32,
}

/// Parameters for the remote device operations.
#[derive(Debug, Clone, Default, Serialize)]
pub struct RemoteDeviceOptions {
    /// Seat whose occupant is targeted.
    #[serde(rename = "seatIndex")]
    pub seat_index: u32,
}

/// Resolve the seat store for a room, binding on first use.
pub fn store(bridge: &Bridge, scope: &ScopeKey) -> Result<Arc<Store<SeatDomain>>, ScopeError> {
    bridge.store::<SeatDomain>(scope)
}

/// Take a seat.
pub fn take_seat(bridge: &Bridge, options: &TakeSeatOptions, callbacks: ActionCallbacks) {
    bridge.invoke_serialized("takeSeat", options, callbacks);
}

/// Leave the occupied seat.
pub fn leave_seat(bridge: &Bridge, callbacks: ActionCallbacks) {
    bridge.invoke("leaveSeat", serde_json::json!({}), callbacks);
}

/// Mute the local microphone on the seat.
pub fn mute_microphone(bridge: &Bridge, callbacks: ActionCallbacks) {
    bridge.invoke("muteMicrophone", serde_json::json!({}), callbacks);
}

/// Unmute the local microphone on the seat.
pub fn unmute_microphone(bridge: &Bridge, callbacks: ActionCallbacks) {
    bridge.invoke("unmuteMicrophone", serde_json::json!({}), callbacks);
}

/// Remove a user from their seat.
pub fn kick_user_out_of_seat(
    bridge: &Bridge,
    options: &KickUserOutOfSeatOptions,
    callbacks: ActionCallbacks,
) {
    bridge.invoke_serialized("kickUserOutOfSeat", options, callbacks);
}

/// Move a seated user to another seat.
pub fn move_user_to_seat(
    bridge: &Bridge,
    options: &MoveUserToSeatOptions,
    callbacks: ActionCallbacks,
) {
    bridge.invoke_serialized("moveUserToSeat", options, callbacks);
}

/// Lock a seat against taking.
pub fn lock_seat(bridge: &Bridge, options: &SeatLockOptions, callbacks: ActionCallbacks) {
    bridge.invoke_serialized("lockSeat", options, callbacks);
}

/// Unlock a seat.
pub fn unlock_seat(bridge: &Bridge, options: &SeatLockOptions, callbacks: ActionCallbacks) {
    bridge.invoke_serialized("unlockSeat", options, callbacks);
}

/// Ask a seated user to open their camera.
pub fn open_remote_camera(
    bridge: &Bridge,
    options: &RemoteDeviceOptions,
    callbacks: ActionCallbacks,
) {
    bridge.invoke_serialized("openRemoteCamera", options, callbacks);
}

/// Close a seated user's camera.
pub fn close_remote_camera(
    bridge: &Bridge,
    options: &RemoteDeviceOptions,
    callbacks: ActionCallbacks,
) {
    bridge.invoke_serialized("closeRemoteCamera", options, callbacks);
}

/// Ask a seated user to open their microphone.
pub fn open_remote_microphone(
    bridge: &Bridge,
    options: &RemoteDeviceOptions,
    callbacks: ActionCallbacks,
) {
    bridge.invoke_serialized("openRemoteMicrophone", options, callbacks);
}

/// Close a seated user's microphone.
pub fn close_remote_microphone(
    bridge: &Bridge,
    options: &RemoteDeviceOptions,
    callbacks: ActionCallbacks,
) {
    bridge.invoke_serialized("closeRemoteMicrophone", options, callbacks);
}

#[cfg(test)]
mod tests {
    use super::*;

    fn apply(state: &mut SeatState, name: &str, payload: &str) {
        let field = SeatDomain::FIELDS
            .iter()
            .find(|field| field.name == name)
            .unwrap();
        (field.apply)(state, payload);
    }

    #[test]
    fn seat_list_replaces_not_merges() {
        let mut state = SeatState::default();
        apply(
            &mut state,
            "seatList",
            r#"[{"index":0,"isLocked":false,"userInfo":{"userID":"u1","liveID":"r1"}}]"#,
        );
        assert_eq!(state.seat_list.len(), 1);
        apply(&mut state, "seatList", "[]");
        assert!(state.seat_list.is_empty());
    }

    #[test]
    fn speaking_users_decode_as_volume_map() {
        let mut state = SeatState::default();
        apply(&mut state, "speakingUsers", r#"{"u1":80,"u2":15}"#);
        assert_eq!(state.speaking_users.get("u1"), Some(&80));
        assert_eq!(state.speaking_users.len(), 2);
    }

    #[test]
    fn canvas_updates_and_clears() {
        let mut state = SeatState::default();
        apply(&mut state, "canvas", r#"{"templateID":7,"w":720.0,"h":1280.0}"#);
        assert_eq!(state.canvas.as_ref().unwrap().template_id, 7);
        apply(&mut state, "canvas", "null");
        assert_eq!(state.canvas, None);
    }
}
