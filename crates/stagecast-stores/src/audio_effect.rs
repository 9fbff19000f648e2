// SPDX-License-Identifier: Apache-2.0
//! Voice changer, reverb and ear monitor for one room.
//!
//! Changer and reverb types are enum-coded on the wire; an unmapped code
//! leaves the current preset in place rather than snapping back to
//! `NONE`.

use std::sync::Arc;

use serde::Serialize;
use stagecast_bridge::{enum_code, replace, ActionCallbacks, Bridge, Domain, Field, Store};
use stagecast_proto::codes::{AudioChangerType, AudioReverbType};
use stagecast_proto::{ScopeError, ScopeKey, StoreKind};

use crate::device::VolumeOptions;

/// Mirrored audio-effect state.
#[derive(Debug, Clone, PartialEq)]
pub struct AudioEffectState {
    /// Whether the ear monitor is on.
    pub is_ear_monitor_opened: bool,
    /// Ear monitor volume, 0–100.
    pub ear_monitor_volume: u32,
    /// Active voice changer preset.
    pub changer_type: AudioChangerType,
    /// Active reverb preset.
    pub reverb_type: AudioReverbType,
}

impl Default for AudioEffectState {
    fn default() -> Self {
        Self {
            is_ear_monitor_opened: false,
            ear_monitor_volume: 0,
            changer_type: AudioChangerType::None,
            reverb_type: AudioReverbType::None,
        }
    }
}

/// Wiring of the audio-effect store into the bridge.
pub enum AudioEffectDomain {}

impl Domain for AudioEffectDomain {
    type State = AudioEffectState;
    const KIND: StoreKind = StoreKind::AudioEffect;
    const FIELDS: &'static [Field<AudioEffectState>] = &[
        Field {
            name: "isEarMonitorOpened",
            apply: |state, payload| replace(&mut state.is_ear_monitor_opened, payload),
        },
        Field {
            name: "earMonitorVolume",
            apply: |state, payload| replace(&mut state.ear_monitor_volume, payload),
        },
        Field {
            name: "audioChangerType",
            apply: |state, payload| enum_code(&mut state.changer_type, payload),
        },
        Field {
            name: "audioReverbType",
            apply: |state, payload| enum_code(&mut state.reverb_type, payload),
        },
    ];
    const EVENTS: &'static [&'static str] = &[];
}

/// Operations the audio-effect facade routes to the engine.
pub const OPERATIONS: &[&str] = &[
    "setAudioChangerType",
    "setAudioReverbType",
    "setVoiceEarMonitorEnable",
    "setVoiceEarMonitorVolume",
];

/// Parameters for `setAudioChangerType`.
#[derive(Debug, Clone, Serialize)]
pub struct SetAudioChangerTypeOptions {
    /// Preset to apply.
    #[serde(rename = "changerType")]
    pub changer_type: AudioChangerType,
}

/// Parameters for `setAudioReverbType`.
#[derive(Debug, Clone, Serialize)]
pub struct SetAudioReverbTypeOptions {
    /// Preset to apply.
    #[serde(rename = "reverbType")]
    pub reverb_type: AudioReverbType,
}

/// Parameters for `setVoiceEarMonitorEnable`.
#[derive(Debug, Clone, Default, Serialize)]
pub struct SetVoiceEarMonitorEnableOptions {
    /// Turn the ear monitor on or off.
    pub enable: bool,
}

/// Resolve the audio-effect store for a room, binding on first use.
pub fn store(
    bridge: &Bridge,
    scope: &ScopeKey,
) -> Result<Arc<Store<AudioEffectDomain>>, ScopeError> {
    bridge.store::<AudioEffectDomain>(scope)
}

/// Apply a voice changer preset.
pub fn set_audio_changer_type(
    bridge: &Bridge,
    options: &SetAudioChangerTypeOptions,
    callbacks: ActionCallbacks,
) {
    bridge.invoke_serialized("setAudioChangerType", options, callbacks);
}

/// Apply a reverb preset.
pub fn set_audio_reverb_type(
    bridge: &Bridge,
    options: &SetAudioReverbTypeOptions,
    callbacks: ActionCallbacks,
) {
    bridge.invoke_serialized("setAudioReverbType", options, callbacks);
}

/// Turn the ear monitor on or off.
pub fn set_voice_ear_monitor_enable(
    bridge: &Bridge,
    options: &SetVoiceEarMonitorEnableOptions,
    callbacks: ActionCallbacks,
) {
    bridge.invoke_serialized("setVoiceEarMonitorEnable", options, callbacks);
}

/// Set the ear monitor volume.
pub fn set_voice_ear_monitor_volume(
    bridge: &Bridge,
    options: &VolumeOptions,
    callbacks: ActionCallbacks,
) {
    bridge.invoke_serialized("setVoiceEarMonitorVolume", options, callbacks);
}
