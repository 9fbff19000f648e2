// SPDX-License-Identifier: Apache-2.0
//! Local capture devices: microphone, camera, screen share, audio route
//! and network measurements.
//!
//! Device state is global: it describes the local hardware, not a room.
//! Status and error fields are enum-coded on the wire and stay unset
//! until the engine first reports them.

use std::sync::Arc;

use serde::Serialize;
use stagecast_bridge::{
    enum_code_opt, replace, ActionCallbacks, Bridge, Domain, Field, Store,
};
use stagecast_proto::codes::{
    AudioRoute, DeviceError, DeviceStatus, MirrorType, VideoQuality,
};
use stagecast_proto::records::NetworkInfo;
use stagecast_proto::{ScopeError, ScopeKey, StoreKind};

/// Mirrored device state.
#[derive(Debug, Clone, PartialEq)]
pub struct DeviceState {
    /// Microphone open/closed, unset until first report.
    pub microphone_status: Option<DeviceStatus>,
    /// Last microphone error, unset until first report.
    pub microphone_last_error: Option<DeviceError>,
    /// Whether audio publishing is currently permitted.
    pub has_publish_audio_permission: bool,
    /// Capture volume, 0–100.
    pub capture_volume: u32,
    /// Live microphone level, 0–100.
    pub current_mic_volume: u32,
    /// Playback volume, 0–100.
    pub output_volume: u32,
    /// Camera open/closed, unset until first report.
    pub camera_status: Option<DeviceStatus>,
    /// Last camera error, unset until first report.
    pub camera_last_error: Option<DeviceError>,
    /// Whether the front camera is active.
    pub is_front_camera: Option<bool>,
    /// Local preview mirroring mode.
    pub local_mirror_type: Option<MirrorType>,
    /// Published video quality tier.
    pub local_video_quality: Option<VideoQuality>,
    /// Current audio output route.
    pub current_audio_route: Option<AudioRoute>,
    /// Screen share open/closed, unset until first report.
    pub screen_status: Option<DeviceStatus>,
    /// Latest network measurement.
    pub network_info: Option<NetworkInfo>,
}

impl Default for DeviceState {
    fn default() -> Self {
        Self {
            microphone_status: None,
            microphone_last_error: None,
            has_publish_audio_permission: true,
            capture_volume: 0,
            current_mic_volume: 0,
            output_volume: 0,
            camera_status: None,
            camera_last_error: None,
            is_front_camera: None,
            local_mirror_type: None,
            local_video_quality: None,
            current_audio_route: None,
            screen_status: None,
            network_info: None,
        }
    }
}

/// Wiring of the device store into the bridge.
pub enum DeviceDomain {}

impl Domain for DeviceDomain {
    type State = DeviceState;
    const KIND: StoreKind = StoreKind::Device;
    const FIELDS: &'static [Field<DeviceState>] = &[
        Field {
            name: "microphoneStatus",
            apply: |state, payload| enum_code_opt(&mut state.microphone_status, payload),
        },
        Field {
            name: "microphoneLastError",
            apply: |state, payload| enum_code_opt(&mut state.microphone_last_error, payload),
        },
        Field {
            name: "hasPublishAudioPermission",
            apply: |state, payload| replace(&mut state.has_publish_audio_permission, payload),
        },
        Field {
            name: "captureVolume",
            apply: |state, payload| replace(&mut state.capture_volume, payload),
        },
        Field {
            name: "currentMicVolume",
            apply: |state, payload| replace(&mut state.current_mic_volume, payload),
        },
        Field {
            name: "outputVolume",
            apply: |state, payload| replace(&mut state.output_volume, payload),
        },
        Field {
            name: "cameraStatus",
            apply: |state, payload| enum_code_opt(&mut state.camera_status, payload),
        },
        Field {
            name: "cameraLastError",
            apply: |state, payload| enum_code_opt(&mut state.camera_last_error, payload),
        },
        Field {
            name: "isFrontCamera",
            apply: |state, payload| replace(&mut state.is_front_camera, payload),
        },
        Field {
            name: "localMirrorType",
            apply: |state, payload| enum_code_opt(&mut state.local_mirror_type, payload),
        },
        Field {
            name: "localVideoQuality",
            apply: |state, payload| enum_code_opt(&mut state.local_video_quality, payload),
        },
        Field {
            name: "currentAudioRoute",
            apply: |state, payload| enum_code_opt(&mut state.current_audio_route, payload),
        },
        Field {
            name: "screenStatus",
            apply: |state, payload| enum_code_opt(&mut state.screen_status, payload),
        },
        Field {
            name: "networkInfo",
            apply: |state, payload| replace(&mut state.network_info, payload),
        },
    ];
    const EVENTS: &'static [&'static str] = &[];
}

/// Operations the device facade routes to the engine.
pub const OPERATIONS: &[&str] = &[
    "openLocalMicrophone",
    "closeLocalMicrophone",
    "setCaptureVolume",
    "setOutputVolume",
    "setAudioRoute",
    "openLocalCamera",
    "closeLocalCamera",
    "switchCamera",
    "switchMirror",
    "updateVideoQuality",
    "startScreenShare",
    "stopScreenShare",
];

/// Parameters for `openLocalMicrophone`.
#[derive(Debug, Clone, Default, Serialize)]
pub struct OpenLocalMicrophoneOptions {}

/// Volume parameter shared by the capture/output/ear-monitor setters.
#[derive(Debug, Clone, Default, Serialize)]
pub struct VolumeOptions {
    /// Target volume, 0–100.
    pub volume: u32,
}

/// Parameters for `setAudioRoute`.
#[derive(Debug, Clone, Serialize)]
pub struct SetAudioRouteOptions {
    /// Output route to switch to.
    pub route: AudioRoute,
}

/// Parameters for `openLocalCamera`.
#[derive(Debug, Clone, Default, Serialize)]
pub struct OpenLocalCameraOptions {
    /// Open the front camera instead of the default.
    #[serde(rename = "isFront", skip_serializing_if = "Option::is_none")]
    pub is_front: Option<bool>,
}

/// Parameters for `switchCamera`.
#[derive(Debug, Clone, Default, Serialize)]
pub struct SwitchCameraOptions {
    /// Switch to the front camera.
    #[serde(rename = "isFront")]
    pub is_front: bool,
}

/// Parameters for `switchMirror`.
#[derive(Debug, Clone, Serialize)]
pub struct SwitchMirrorOptions {
    /// Mirroring mode to apply.
    #[serde(rename = "mirrorType")]
    pub mirror_type: MirrorType,
}

/// Parameters for `updateVideoQuality`.
#[derive(Debug, Clone, Serialize)]
pub struct UpdateVideoQualityOptions {
    /// Quality tier to publish.
    pub quality: VideoQuality,
}

/// Resolve the global device store, binding on first use.
pub fn store(bridge: &Bridge) -> Result<Arc<Store<DeviceDomain>>, ScopeError> {
    bridge.store::<DeviceDomain>(&ScopeKey::Global)
}

/// Open the local microphone.
pub fn open_local_microphone(
    bridge: &Bridge,
    options: &OpenLocalMicrophoneOptions,
    callbacks: ActionCallbacks,
) {
    bridge.invoke_serialized("openLocalMicrophone", options, callbacks);
}

/// Close the local microphone.
pub fn close_local_microphone(bridge: &Bridge, callbacks: ActionCallbacks) {
    bridge.invoke("closeLocalMicrophone", serde_json::json!({}), callbacks);
}

/// Set the capture volume.
pub fn set_capture_volume(bridge: &Bridge, options: &VolumeOptions, callbacks: ActionCallbacks) {
    bridge.invoke_serialized("setCaptureVolume", options, callbacks);
}

/// Set the playback volume.
pub fn set_output_volume(bridge: &Bridge, options: &VolumeOptions, callbacks: ActionCallbacks) {
    bridge.invoke_serialized("setOutputVolume", options, callbacks);
}

/// Switch the audio output route.
pub fn set_audio_route(bridge: &Bridge, options: &SetAudioRouteOptions, callbacks: ActionCallbacks) {
    bridge.invoke_serialized("setAudioRoute", options, callbacks);
}

/// Open the local camera.
pub fn open_local_camera(
    bridge: &Bridge,
    options: &OpenLocalCameraOptions,
    callbacks: ActionCallbacks,
) {
    bridge.invoke_serialized("openLocalCamera", options, callbacks);
}

/// Close the local camera.
pub fn close_local_camera(bridge: &Bridge, callbacks: ActionCallbacks) {
    bridge.invoke("closeLocalCamera", serde_json::json!({}), callbacks);
}

/// Switch between front and back camera.
pub fn switch_camera(bridge: &Bridge, options: &SwitchCameraOptions, callbacks: ActionCallbacks) {
    bridge.invoke_serialized("switchCamera", options, callbacks);
}

/// Change local preview mirroring.
pub fn switch_mirror(bridge: &Bridge, options: &SwitchMirrorOptions, callbacks: ActionCallbacks) {
    bridge.invoke_serialized("switchMirror", options, callbacks);
}

/// Change the published video quality.
pub fn update_video_quality(
    bridge: &Bridge,
    options: &UpdateVideoQualityOptions,
    callbacks: ActionCallbacks,
) {
    bridge.invoke_serialized("updateVideoQuality", options, callbacks);
}

/// Start sharing the screen.
pub fn start_screen_share(bridge: &Bridge, callbacks: ActionCallbacks) {
    bridge.invoke("startScreenShare", serde_json::json!({}), callbacks);
}

/// Stop sharing the screen.
pub fn stop_screen_share(bridge: &Bridge, callbacks: ActionCallbacks) {
    bridge.invoke("stopScreenShare", serde_json::json!({}), callbacks);
}
