// SPDX-License-Identifier: Apache-2.0
//! Guest seat signaling for one room: applications from guests,
//! invitations from hosts, and the resulting roster.
//!
//! Events split into a guest side (what happens to the local user's own
//! application/invitation) and a host side (what guests are doing), the
//! way the engine reports them.

use std::sync::Arc;

use serde::Serialize;
use stagecast_bridge::{replace, ActionCallbacks, Bridge, Domain, Field, Store};
use stagecast_proto::records::{LiveUserInfo, SeatUserInfo};
use stagecast_proto::{ScopeError, ScopeKey, StoreKind};

/// Discrete event (guest side): the host invited the local user to a seat.
pub const EVENT_HOST_INVITATION_RECEIVED: &str = "onHostInvitationReceived";
/// Discrete event (guest side): the host withdrew their invitation.
pub const EVENT_HOST_INVITATION_CANCELLED: &str = "onHostInvitationCancelled";
/// Discrete event (guest side): the host answered the local application.
pub const EVENT_GUEST_APPLICATION_RESPONDED: &str = "onGuestApplicationResponded";
/// Discrete event (guest side): the local application expired.
pub const EVENT_GUEST_APPLICATION_NO_RESPONSE: &str = "onGuestApplicationNoResponse";
/// Discrete event (guest side): an admin removed the local user from
/// their seat.
pub const EVENT_KICKED_OFF_SEAT: &str = "onKickedOffSeat";
/// Discrete event (host side): a guest applied for a seat.
pub const EVENT_GUEST_APPLICATION_RECEIVED: &str = "onGuestApplicationReceived";
/// Discrete event (host side): a guest withdrew their application.
pub const EVENT_GUEST_APPLICATION_CANCELLED: &str = "onGuestApplicationCancelled";
/// Discrete event (host side): another admin handled the application.
pub const EVENT_GUEST_APPLICATION_PROCESSED_BY_OTHER_HOST: &str =
    "onGuestApplicationProcessedByOtherHost";
/// Discrete event (host side): a guest answered the host's invitation.
pub const EVENT_HOST_INVITATION_RESPONDED: &str = "onHostInvitationResponded";
/// Discrete event (host side): the host's invitation expired.
pub const EVENT_HOST_INVITATION_NO_RESPONSE: &str = "onHostInvitationNoResponse";

/// Mirrored co-guest state.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CoGuestState {
    /// Guests currently seated.
    pub connected: Vec<SeatUserInfo>,
    /// Users invited to a seat.
    pub invitees: Vec<LiveUserInfo>,
    /// Users applying for a seat.
    pub applicants: Vec<LiveUserInfo>,
    /// Users available to invite.
    pub candidates: Vec<LiveUserInfo>,
}

/// Wiring of the co-guest store into the bridge.
pub enum CoGuestDomain {}

impl Domain for CoGuestDomain {
    type State = CoGuestState;
    const KIND: StoreKind = StoreKind::CoGuest;
    const FIELDS: &'static [Field<CoGuestState>] = &[
        Field {
            name: "connected",
            apply: |state, payload| replace(&mut state.connected, payload),
        },
        Field {
            name: "invitees",
            apply: |state, payload| replace(&mut state.invitees, payload),
        },
        Field {
            name: "applicants",
            apply: |state, payload| replace(&mut state.applicants, payload),
        },
        Field {
            name: "candidates",
            apply: |state, payload| replace(&mut state.candidates, payload),
        },
    ];
    const EVENTS: &'static [&'static str] = &[
        EVENT_HOST_INVITATION_RECEIVED,
        EVENT_HOST_INVITATION_CANCELLED,
        EVENT_GUEST_APPLICATION_RESPONDED,
        EVENT_GUEST_APPLICATION_NO_RESPONSE,
        EVENT_KICKED_OFF_SEAT,
        EVENT_GUEST_APPLICATION_RECEIVED,
        EVENT_GUEST_APPLICATION_CANCELLED,
        EVENT_GUEST_APPLICATION_PROCESSED_BY_OTHER_HOST,
        EVENT_HOST_INVITATION_RESPONDED,
        EVENT_HOST_INVITATION_NO_RESPONSE,
    ];
}

/// Operations the co-guest facade routes to the engine.
pub const OPERATIONS: &[&str] = &[
    "applyForSeat",
    "cancelApplication",
    "acceptApplication",
    "rejectApplication",
    "inviteToSeat",
    "cancelInvitation",
    "acceptInvitation",
    "rejectInvitation",
    "disconnect",
];

/// Parameters for `applyForSeat`.
#[derive(Debug, Clone, Default, Serialize)]
pub struct ApplyForSeatOptions {
    /// Seat to apply for.
    #[serde(rename = "seatIndex")]
    pub seat_index: u32,
    /// Seconds before the application expires.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub timeout: Option<u32>,
    /// Opaque extension data carried with the application.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub extension: Option<String>,
}

/// Parameters for `acceptApplication`.
#[derive(Debug, Clone, Default, Serialize)]
pub struct AcceptApplicationOptions {
    /// Applying guest.
    #[serde(rename = "userID")]
    pub user_id: String,
    /// Seat to place them on, engine-chosen when absent.
    #[serde(rename = "seatIndex", skip_serializing_if = "Option::is_none")]
    pub seat_index: Option<u32>,
}

/// Parameters for `rejectApplication`.
#[derive(Debug, Clone, Default, Serialize)]
pub struct RejectApplicationOptions {
    /// Applying guest.
    #[serde(rename = "userID")]
    pub user_id: String,
}

/// Parameters for `inviteToSeat`.
#[derive(Debug, Clone, Default, Serialize)]
pub struct InviteToSeatOptions {
    /// User to invite.
    #[serde(rename = "userID")]
    pub user_id: String,
    /// Seat to offer.
    #[serde(rename = "seatIndex")]
    pub seat_index: u32,
    /// Seconds before the invitation expires.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub timeout: Option<u32>,
    /// Opaque extension data carried with the invitation.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub extension: Option<String>,
}

/// Parameters for `cancelInvitation`.
#[derive(Debug, Clone, Default, Serialize)]
pub struct CancelInvitationOptions {
    /// Invited user.
    #[serde(rename = "inviteeID")]
    pub invitee_id: String,
}

/// Parameters for `acceptInvitation`.
#[derive(Debug, Clone, Default, Serialize)]
pub struct AcceptInvitationOptions {
    /// Inviting host.
    #[serde(rename = "inviterID")]
    pub inviter_id: String,
}

/// Parameters for `rejectInvitation`.
#[derive(Debug, Clone, Default, Serialize)]
pub struct RejectInvitationOptions {
    /// Inviting host.
    #[serde(rename = "inviterID")]
    pub inviter_id: String,
}

/// Resolve the co-guest store for a room, binding on first use.
pub fn store(bridge: &Bridge, scope: &ScopeKey) -> Result<Arc<Store<CoGuestDomain>>, ScopeError> {
    bridge.store::<CoGuestDomain>(scope)
}

/// Apply for a seat.
pub fn apply_for_seat(bridge: &Bridge, options: &ApplyForSeatOptions, callbacks: ActionCallbacks) {
    bridge.invoke_serialized("applyForSeat", options, callbacks);
}

/// Withdraw the local seat application.
pub fn cancel_application(bridge: &Bridge, callbacks: ActionCallbacks) {
    bridge.invoke("cancelApplication", serde_json::json!({}), callbacks);
}

/// Accept a guest's seat application.
pub fn accept_application(
    bridge: &Bridge,
    options: &AcceptApplicationOptions,
    callbacks: ActionCallbacks,
) {
    bridge.invoke_serialized("acceptApplication", options, callbacks);
}

/// Decline a guest's seat application.
pub fn reject_application(
    bridge: &Bridge,
    options: &RejectApplicationOptions,
    callbacks: ActionCallbacks,
) {
    bridge.invoke_serialized("rejectApplication", options, callbacks);
}

/// Invite a user to a seat.
pub fn invite_to_seat(bridge: &Bridge, options: &InviteToSeatOptions, callbacks: ActionCallbacks) {
    bridge.invoke_serialized("inviteToSeat", options, callbacks);
}

/// Withdraw a seat invitation.
pub fn cancel_invitation(
    bridge: &Bridge,
    options: &CancelInvitationOptions,
    callbacks: ActionCallbacks,
) {
    bridge.invoke_serialized("cancelInvitation", options, callbacks);
}

/// Accept the host's seat invitation.
pub fn accept_invitation(
    bridge: &Bridge,
    options: &AcceptInvitationOptions,
    callbacks: ActionCallbacks,
) {
    bridge.invoke_serialized("acceptInvitation", options, callbacks);
}

/// Decline the host's seat invitation.
pub fn reject_invitation(
    bridge: &Bridge,
    options: &RejectInvitationOptions,
    callbacks: ActionCallbacks,
) {
    bridge.invoke_serialized("rejectInvitation", options, callbacks);
}

/// Leave the seat session.
pub fn disconnect(bridge: &Bridge, callbacks: ActionCallbacks) {
    bridge.invoke("disconnect", serde_json::json!({}), callbacks);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rosters_replace_wholesale() {
        let mut state = CoGuestState::default();
        let connected = CoGuestDomain::FIELDS
            .iter()
            .find(|field| field.name == "connected")
            .unwrap();
        (connected.apply)(&mut state, r#"[{"userID":"g1","liveID":"r1"}]"#);
        (connected.apply)(&mut state, "[]");
        assert!(state.connected.is_empty());
    }

    #[test]
    fn invite_options_use_wire_names() {
        let value = serde_json::to_value(InviteToSeatOptions {
            user_id: "g1".into(),
            seat_index: 2,
            timeout: Some(30),
            extension: None,
        })
        .unwrap();
        assert_eq!(value["userID"], "g1");
        assert_eq!(value["seatIndex"], 2);
        assert_eq!(value["timeout"], 30);
        assert!(value.get("extension").is_none());
    }
}
