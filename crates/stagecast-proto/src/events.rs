// SPDX-License-Identifier: Apache-2.0
//! Typed payload records for discrete events.
//!
//! Discrete events are one-shot notifications delivered to registered
//! listeners, never stored in a cache. Listeners receive the parsed JSON
//! value; these records give consumers a typed view of each event's
//! payload. `onLocalCameraClosedByAdmin` and
//! `onLocalMicrophoneClosedByAdmin` carry an empty payload and the
//! admin-open variants carry a bare [`DeviceControlPolicy`] code, so no
//! record exists for those four.

use serde::{Deserialize, Serialize};

use crate::codes::{KickedOutReason, LiveEndedReason, NoResponseReason};
use crate::records::{Gift, LiveUserInfo, SeatUserInfo};

/// `onReceiveGift`: someone sent a gift into the room.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct GiftReceived {
    /// Room the gift landed in.
    #[serde(rename = "liveID")]
    pub live_id: String,
    /// The gift sent.
    pub gift: Gift,
    /// How many were sent at once.
    pub count: u32,
    /// Who sent it.
    pub sender: LiveUserInfo,
}

/// `onReceiveLikesMessage`: a batch of likes arrived.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct LikesReceived {
    /// Room the likes landed in.
    #[serde(rename = "liveID")]
    pub live_id: String,
    /// Likes in this batch.
    pub count: u32,
    /// Who sent them.
    pub sender: LiveUserInfo,
}

/// `onCoHostRequestReceived`: another host asks to connect.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CoHostRequestReceived {
    /// The requesting host.
    pub inviter: SeatUserInfo,
    /// Opaque extension data attached to the request.
    #[serde(rename = "extensionInfo")]
    pub extension_info: String,
}

/// `onCoHostRequestCancelled`: a pending host request was withdrawn.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CoHostRequestCancelled {
    /// The host who cancelled.
    pub inviter: SeatUserInfo,
    /// The invited host, when the engine reports one.
    pub invitee: Option<SeatUserInfo>,
}

/// `onCoHostRequestAccepted`: the invited host accepted.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CoHostRequestAccepted {
    /// The host who accepted.
    pub invitee: SeatUserInfo,
}

/// `onCoHostRequestRejected`: the invited host declined.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CoHostRequestRejected {
    /// The host who declined.
    pub invitee: SeatUserInfo,
}

/// `onCoHostRequestTimeout`: a host request expired unanswered.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CoHostRequestTimeout {
    /// The requesting host.
    pub inviter: SeatUserInfo,
    /// The invited host.
    pub invitee: SeatUserInfo,
}

/// `onCoHostUserJoined`: a connected host joined the session.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CoHostUserJoined {
    /// The host who joined.
    pub user: SeatUserInfo,
}

/// `onCoHostUserLeft`: a connected host left the session.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CoHostUserLeft {
    /// The host who left.
    pub user: SeatUserInfo,
}

/// `onHostInvitationReceived`: the host invited the local guest to a seat.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct HostInvitationReceived {
    /// The inviting host.
    #[serde(rename = "hostUser")]
    pub host_user: LiveUserInfo,
}

/// `onHostInvitationCancelled`: the host withdrew their invitation.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct HostInvitationCancelled {
    /// The host who withdrew.
    #[serde(rename = "hostUser")]
    pub host_user: LiveUserInfo,
}

/// `onGuestApplicationResponded`: the host answered the local guest's
/// seat application.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct GuestApplicationResponded {
    /// Whether the application was accepted.
    #[serde(rename = "isAccept")]
    pub is_accept: bool,
    /// The host who answered.
    #[serde(rename = "hostUser")]
    pub host_user: LiveUserInfo,
}

/// `onGuestApplicationNoResponse`: the local guest's application expired.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct GuestApplicationNoResponse {
    /// Why no response was recorded.
    pub reason: Option<NoResponseReason>,
}

/// `onKickedOffSeat`: an admin removed the local user from their seat.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct KickedOffSeat {
    /// Seat the user was removed from.
    #[serde(rename = "seatIndex")]
    pub seat_index: u32,
    /// The admin who removed them.
    #[serde(rename = "hostUser")]
    pub host_user: LiveUserInfo,
}

/// `onGuestApplicationReceived`: a guest applied for a seat (host side).
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct GuestApplicationReceived {
    /// The applying guest.
    #[serde(rename = "guestUser")]
    pub guest_user: LiveUserInfo,
}

/// `onGuestApplicationCancelled`: a guest withdrew their application
/// (host side).
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct GuestApplicationCancelled {
    /// The guest who withdrew.
    #[serde(rename = "guestUser")]
    pub guest_user: LiveUserInfo,
}

/// `onGuestApplicationProcessedByOtherHost`: another admin handled the
/// application first (host side).
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct GuestApplicationProcessedByOtherHost {
    /// The applying guest.
    #[serde(rename = "guestUser")]
    pub guest_user: LiveUserInfo,
    /// The admin who handled it.
    #[serde(rename = "hostUser")]
    pub host_user: LiveUserInfo,
}

/// `onHostInvitationResponded`: a guest answered the host's invitation
/// (host side).
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct HostInvitationResponded {
    /// Whether the invitation was accepted.
    #[serde(rename = "isAccept")]
    pub is_accept: bool,
    /// The guest who answered.
    #[serde(rename = "guestUser")]
    pub guest_user: LiveUserInfo,
}

/// `onHostInvitationNoResponse`: the host's invitation expired (host
/// side).
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct HostInvitationNoResponse {
    /// The invited guest.
    #[serde(rename = "guestUser")]
    pub guest_user: LiveUserInfo,
    /// Why no response was recorded.
    pub reason: Option<NoResponseReason>,
}

/// `onAudienceJoined`: a viewer entered the room.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AudienceJoined {
    /// Room the viewer entered.
    #[serde(rename = "liveID")]
    pub live_id: String,
    /// The viewer.
    pub user: LiveUserInfo,
}

/// `onAudienceLeft`: a viewer left the room.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AudienceLeft {
    /// Room the viewer left.
    #[serde(rename = "liveID")]
    pub live_id: String,
    /// The viewer.
    pub user: LiveUserInfo,
}

/// `onLiveEnded`: the stream ended while the local user was in it.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct LiveEnded {
    /// The ended room.
    #[serde(rename = "liveID")]
    pub live_id: String,
    /// Why it ended.
    pub reason: Option<LiveEndedReason>,
    /// Human-readable detail from the engine.
    pub message: String,
}

/// `onKickedOutOfLive`: the local user was removed from the room.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct KickedOutOfLive {
    /// The room the user was removed from.
    #[serde(rename = "liveID")]
    pub live_id: String,
    /// Why they were removed.
    pub reason: Option<KickedOutReason>,
    /// Human-readable detail from the engine.
    pub message: String,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::codes::DeviceStatus;

    #[test]
    fn kicked_off_seat_decodes_wire_shape() {
        let payload = r#"{"seatIndex":2,"hostUser":{"userID":"admin_1","userName":"Admin"}}"#;
        let event: KickedOffSeat = serde_json::from_str(payload).unwrap();
        assert_eq!(event.seat_index, 2);
        assert_eq!(event.host_user.user_id, "admin_1");
    }

    #[test]
    fn live_ended_maps_reason_code() {
        let payload = r#"{"liveID":"live_9","reason":1,"message":"stream terminated"}"#;
        let event: LiveEnded = serde_json::from_str(payload).unwrap();
        assert_eq!(event.reason, Some(LiveEndedReason::EndedByServer));
        assert_eq!(event.message, "stream terminated");
    }

    #[test]
    fn co_host_request_carries_seat_user() {
        let payload = r#"{"inviter":{"userID":"h1","liveID":"live_2","cameraStatus":"ON"}}"#;
        let event: CoHostRequestReceived = serde_json::from_str(payload).unwrap();
        assert_eq!(event.inviter.user_id, "h1");
        assert_eq!(event.inviter.camera_status, Some(DeviceStatus::On));
        assert_eq!(event.extension_info, "");
    }

    #[test]
    fn unknown_reason_code_is_a_decode_error() {
        let payload = r#"{"liveID":"live_9","reason":42,"message":""}"#;
        assert!(serde_json::from_str::<LiveEnded>(payload).is_err());
    }
}
