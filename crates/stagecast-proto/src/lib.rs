// SPDX-License-Identifier: Apache-2.0
//! Wire schema for the Stagecast engine bridge.
//!
//! Everything that crosses the engine boundary is described here: the
//! `(name, JSON payload)` [`Envelope`], the scope model ([`ScopeKey`]),
//! the set of domain stores ([`StoreKind`]), the closed integer→symbol
//! code tables ([`codes`]), and the shared record and event-payload
//! types ([`records`], [`events`]).
#![forbid(unsafe_code)]

use serde::{Deserialize, Serialize};
use thiserror::Error;

pub mod codes;
pub mod events;
pub mod records;

/// The wire unit crossing the engine boundary.
///
/// `payload` is a JSON-encoded value whose shape is implied by `name`;
/// there is no length prefix and no schema tag beyond the name. An empty
/// payload is legal (some discrete events carry no body).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Envelope {
    /// Field or event name the payload belongs to.
    pub name: String,
    /// JSON-encoded payload text. May be empty.
    pub payload: String,
}

impl Envelope {
    /// Build an envelope from a name and raw payload text.
    pub fn new(name: impl Into<String>, payload: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            payload: payload.into(),
        }
    }
}

/// Which kind of context a store binds to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ScopeKind {
    /// One process-wide instance, independent of any room.
    Global,
    /// One instance per joined room.
    Room,
}

/// The logical context a store instance is bound to.
///
/// A `Room` key for room `R` is distinct from one for room `R'`; global
/// stores all share the single [`ScopeKey::Global`] sentinel.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum ScopeKey {
    /// The fixed sentinel shared by all global-store consumers.
    Global,
    /// A specific room, identified by its non-empty live id.
    Room(String),
}

impl ScopeKey {
    /// Build a room scope key. The id must be non-empty.
    pub fn room(id: impl Into<String>) -> Result<Self, ScopeError> {
        let id = id.into();
        if id.is_empty() {
            return Err(ScopeError::EmptyRoomId);
        }
        Ok(Self::Room(id))
    }

    /// Which kind of scope this key denotes.
    pub fn kind(&self) -> ScopeKind {
        match self {
            Self::Global => ScopeKind::Global,
            Self::Room(_) => ScopeKind::Room,
        }
    }

    /// Room id for room keys, `None` for the global sentinel.
    pub fn room_id(&self) -> Option<&str> {
        match self {
            Self::Global => None,
            Self::Room(id) => Some(id),
        }
    }
}

impl std::fmt::Display for ScopeKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Global => f.write_str("global"),
            Self::Room(id) => write!(f, "room:{id}"),
        }
    }
}

/// Errors in scope construction or store resolution.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ScopeError {
    /// A room scope key was built from an empty id.
    #[error("room scope requires a non-empty room id")]
    EmptyRoomId,
    /// A store was resolved with a scope of the wrong kind.
    #[error("store `{kind}` is {expected:?}-scoped but was resolved with a {got:?} scope")]
    KindMismatch {
        /// The store kind being resolved.
        kind: StoreKind,
        /// The scope kind the store requires.
        expected: ScopeKind,
        /// The scope kind the caller supplied.
        got: ScopeKind,
    },
}

/// The functional domains mirrored through the bridge, one store each.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum StoreKind {
    /// Account session and self profile.
    Login,
    /// Local capture devices (microphone, camera, screen) and network info.
    Device,
    /// Room directory: list, cursor, current room.
    LiveList,
    /// Post-stream statistics.
    Summary,
    /// Gift catalog and gift traffic.
    Gift,
    /// Like counter and like traffic.
    Like,
    /// Chat messages.
    Barrage,
    /// Basic beauty filter levels.
    Beauty,
    /// Voice changer, reverb and ear monitor.
    AudioEffect,
    /// Host↔host connection signaling.
    CoHost,
    /// Guest seat application/invitation signaling.
    CoGuest,
    /// Audience roster and moderation.
    Audience,
    /// Seat grid, canvas layout and speaking volumes.
    Seat,
}

impl StoreKind {
    /// Which scope kind instances of this store bind to.
    pub fn scope_kind(self) -> ScopeKind {
        match self {
            Self::Login | Self::Device | Self::LiveList | Self::Summary => ScopeKind::Global,
            Self::Gift
            | Self::Like
            | Self::Barrage
            | Self::Beauty
            | Self::AudioEffect
            | Self::CoHost
            | Self::CoGuest
            | Self::Audience
            | Self::Seat => ScopeKind::Room,
        }
    }

    /// Stable lowercase name used in logs and diagnostics.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Login => "login",
            Self::Device => "device",
            Self::LiveList => "liveList",
            Self::Summary => "summary",
            Self::Gift => "gift",
            Self::Like => "like",
            Self::Barrage => "barrage",
            Self::Beauty => "beauty",
            Self::AudioEffect => "audioEffect",
            Self::CoHost => "coHost",
            Self::CoGuest => "coGuest",
            Self::Audience => "audience",
            Self::Seat => "seat",
        }
    }
}

impl std::fmt::Display for StoreKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}
