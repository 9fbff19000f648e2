// SPDX-License-Identifier: Apache-2.0
//! Basic beauty filter levels for one room. Levels run 0–9; 0 is off.

use std::sync::Arc;

use serde::Serialize;
use stagecast_bridge::{replace, ActionCallbacks, Bridge, Domain, Field, Store};
use stagecast_proto::{ScopeError, ScopeKey, StoreKind};

/// Mirrored beauty state.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct BeautyState {
    /// Skin smoothing level.
    pub smooth_level: u32,
    /// Whitening level.
    pub whiteness_level: u32,
    /// Rosiness level.
    pub ruddy_level: u32,
}

/// Wiring of the beauty store into the bridge.
pub enum BeautyDomain {}

impl Domain for BeautyDomain {
    type State = BeautyState;
    const KIND: StoreKind = StoreKind::Beauty;
    const FIELDS: &'static [Field<BeautyState>] = &[
        Field {
            name: "smoothLevel",
            apply: |state, payload| replace(&mut state.smooth_level, payload),
        },
        Field {
            name: "whitenessLevel",
            apply: |state, payload| replace(&mut state.whiteness_level, payload),
        },
        Field {
            name: "ruddyLevel",
            apply: |state, payload| replace(&mut state.ruddy_level, payload),
        },
    ];
    const EVENTS: &'static [&'static str] = &[];
}

/// Operations the beauty facade routes to the engine.
pub const OPERATIONS: &[&str] = &["setSmoothLevel", "setWhitenessLevel", "setRuddyLevel"];

/// Parameters for `setSmoothLevel`.
#[derive(Debug, Clone, Default, Serialize)]
pub struct SetSmoothLevelOptions {
    /// Level, 0–9.
    #[serde(rename = "smoothLevel")]
    pub smooth_level: u32,
}

/// Parameters for `setWhitenessLevel`.
#[derive(Debug, Clone, Default, Serialize)]
pub struct SetWhitenessLevelOptions {
    /// Level, 0–9.
    #[serde(rename = "whitenessLevel")]
    pub whiteness_level: u32,
}

/// Parameters for `setRuddyLevel`.
#[derive(Debug, Clone, Default, Serialize)]
pub struct SetRuddyLevelOptions {
    /// Level, 0–9.
    #[serde(rename = "ruddyLevel")]
    pub ruddy_level: u32,
}

/// Resolve the beauty store for a room, binding on first use.
pub fn store(bridge: &Bridge, scope: &ScopeKey) -> Result<Arc<Store<BeautyDomain>>, ScopeError> {
    bridge.store::<BeautyDomain>(scope)
}

/// Set the skin smoothing level.
pub fn set_smooth_level(
    bridge: &Bridge,
    options: &SetSmoothLevelOptions,
    callbacks: ActionCallbacks,
) {
    bridge.invoke_serialized("setSmoothLevel", options, callbacks);
}

/// Set the whitening level.
pub fn set_whiteness_level(
    bridge: &Bridge,
    options: &SetWhitenessLevelOptions,
    callbacks: ActionCallbacks,
) {
    bridge.invoke_serialized("setWhitenessLevel", options, callbacks);
}

/// Set the rosiness level.
pub fn set_ruddy_level(bridge: &Bridge, options: &SetRuddyLevelOptions, callbacks: ActionCallbacks) {
    bridge.invoke_serialized("setRuddyLevel", options, callbacks);
}
