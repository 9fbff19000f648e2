// SPDX-License-Identifier: Apache-2.0
//! Host↔host connection signaling for one room.

use std::sync::Arc;

use serde::Serialize;
use stagecast_bridge::{
    enum_code_opt, replace, ActionCallbacks, Bridge, Domain, Field, Store,
};
use stagecast_proto::codes::CoHostStatus;
use stagecast_proto::records::SeatUserInfo;
use stagecast_proto::{ScopeError, ScopeKey, StoreKind};

/// Discrete event: another host asks to connect.
pub const EVENT_REQUEST_RECEIVED: &str = "onCoHostRequestReceived";
/// Discrete event: a pending request was withdrawn.
pub const EVENT_REQUEST_CANCELLED: &str = "onCoHostRequestCancelled";
/// Discrete event: the invited host accepted.
pub const EVENT_REQUEST_ACCEPTED: &str = "onCoHostRequestAccepted";
/// Discrete event: the invited host declined.
pub const EVENT_REQUEST_REJECTED: &str = "onCoHostRequestRejected";
/// Discrete event: a request expired unanswered.
pub const EVENT_REQUEST_TIMEOUT: &str = "onCoHostRequestTimeout";
/// Discrete event: a connected host joined the session.
pub const EVENT_USER_JOINED: &str = "onCoHostUserJoined";
/// Discrete event: a connected host left the session.
pub const EVENT_USER_LEFT: &str = "onCoHostUserLeft";

/// Mirrored co-host state.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CoHostState {
    /// Connection state, unset until the engine first reports it.
    pub co_host_status: Option<CoHostStatus>,
    /// Hosts currently connected with the local host.
    pub connected: Vec<SeatUserInfo>,
    /// Hosts the local host has invited.
    pub invitees: Vec<SeatUserInfo>,
    /// Host currently requesting a connection, if any.
    pub applicant: Option<SeatUserInfo>,
    /// Hosts available to invite.
    pub candidates: Vec<SeatUserInfo>,
}

/// Wiring of the co-host store into the bridge.
pub enum CoHostDomain {}

impl Domain for CoHostDomain {
    type State = CoHostState;
    const KIND: StoreKind = StoreKind::CoHost;
    const FIELDS: &'static [Field<CoHostState>] = &[
        Field {
            name: "coHostStatus",
            apply: |state, payload| enum_code_opt(&mut state.co_host_status, payload),
        },
        Field {
            name: "connected",
            apply: |state, payload| replace(&mut state.connected, payload),
        },
        Field {
            name: "invitees",
            apply: |state, payload| replace(&mut state.invitees, payload),
        },
        Field {
            name: "applicant",
            apply: |state, payload| replace(&mut state.applicant, payload),
        },
        Field {
            name: "candidates",
            apply: |state, payload| replace(&mut state.candidates, payload),
        },
    ];
    const EVENTS: &'static [&'static str] = &[
        EVENT_REQUEST_RECEIVED,
        EVENT_REQUEST_CANCELLED,
        EVENT_REQUEST_ACCEPTED,
        EVENT_REQUEST_REJECTED,
        EVENT_REQUEST_TIMEOUT,
        EVENT_USER_JOINED,
        EVENT_USER_LEFT,
    ];
}

/// Operations the co-host facade routes to the engine.
pub const OPERATIONS: &[&str] = &[
    "requestHostConnection",
    "cancelHostConnection",
    "acceptHostConnection",
    "rejectHostConnection",
    "exitHostConnection",
];

/// Parameters for `requestHostConnection`.
#[derive(Debug, Clone, Default, Serialize)]
pub struct RequestHostConnectionOptions {
    /// Target host's room.
    #[serde(rename = "toHostLiveID", skip_serializing_if = "Option::is_none")]
    pub to_host_live_id: Option<String>,
    /// Seconds before the request expires.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub timeout: Option<u32>,
    /// Opaque extension data carried with the request.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub extension: Option<String>,
}

/// Parameters for `cancelHostConnection`.
#[derive(Debug, Clone, Default, Serialize)]
pub struct CancelHostConnectionOptions {
    /// Room of the host the request was sent to.
    #[serde(rename = "toHostLiveID")]
    pub to_host_live_id: String,
}

/// Parameters for `acceptHostConnection`.
#[derive(Debug, Clone, Default, Serialize)]
pub struct AcceptHostConnectionOptions {
    /// Room of the requesting host.
    #[serde(rename = "fromHostLiveID")]
    pub from_host_live_id: String,
}

/// Parameters for `rejectHostConnection`.
#[derive(Debug, Clone, Default, Serialize)]
pub struct RejectHostConnectionOptions {
    /// Room of the requesting host.
    #[serde(rename = "fromHostLiveID")]
    pub from_host_live_id: String,
}

/// Resolve the co-host store for a room, binding on first use.
pub fn store(bridge: &Bridge, scope: &ScopeKey) -> Result<Arc<Store<CoHostDomain>>, ScopeError> {
    bridge.store::<CoHostDomain>(scope)
}

/// Ask another host to connect.
pub fn request_host_connection(
    bridge: &Bridge,
    options: &RequestHostConnectionOptions,
    callbacks: ActionCallbacks,
) {
    bridge.invoke_serialized("requestHostConnection", options, callbacks);
}

/// Withdraw a pending connection request.
pub fn cancel_host_connection(
    bridge: &Bridge,
    options: &CancelHostConnectionOptions,
    callbacks: ActionCallbacks,
) {
    bridge.invoke_serialized("cancelHostConnection", options, callbacks);
}

/// Accept an incoming connection request.
pub fn accept_host_connection(
    bridge: &Bridge,
    options: &AcceptHostConnectionOptions,
    callbacks: ActionCallbacks,
) {
    bridge.invoke_serialized("acceptHostConnection", options, callbacks);
}

/// Decline an incoming connection request.
pub fn reject_host_connection(
    bridge: &Bridge,
    options: &RejectHostConnectionOptions,
    callbacks: ActionCallbacks,
) {
    bridge.invoke_serialized("rejectHostConnection", options, callbacks);
}

/// Leave the host connection.
pub fn exit_host_connection(bridge: &Bridge, callbacks: ActionCallbacks) {
    bridge.invoke("exitHostConnection", serde_json::json!({}), callbacks);
}
