// SPDX-License-Identifier: Apache-2.0
//! The decode pipeline end to end: defaults, enum tables, wholesale
//! replacement, and malformed input.

use std::sync::Arc;

use stagecast_bridge::Bridge;
use stagecast_proto::codes::DeviceStatus;
use stagecast_proto::records::{SeatInfo, SeatUserInfo};
use stagecast_proto::{ScopeKey, StoreKind};
use stagecast_stores::{device, seat};
use stagecast_testkit::FakeEngine;

fn bridge_with_engine() -> (FakeEngine, Bridge) {
    // Capture bridge diagnostics in test output; the decode paths under
    // test are the logging-heavy ones.
    let _ = tracing_subscriber::fmt().with_test_writer().try_init();
    let engine = FakeEngine::new();
    let bridge = Bridge::new(Arc::new(engine.clone()));
    (engine, bridge)
}

#[test]
fn fresh_device_cache_reports_defaults() {
    let (_engine, bridge) = bridge_with_engine();
    let store = device::store(&bridge).unwrap();
    let state = store.snapshot();
    assert_eq!(state.microphone_status, None);
    assert_eq!(state.capture_volume, 0);
}

#[test]
fn camera_status_code_one_maps_to_on() {
    let (engine, bridge) = bridge_with_engine();
    let store = device::store(&bridge).unwrap();
    engine.emit(StoreKind::Device, &ScopeKey::Global, "cameraStatus", "1");
    assert_eq!(store.snapshot().camera_status, Some(DeviceStatus::On));
}

#[test]
fn unmapped_code_leaves_field_unchanged() {
    let (engine, bridge) = bridge_with_engine();
    let store = device::store(&bridge).unwrap();
    engine.emit(StoreKind::Device, &ScopeKey::Global, "cameraStatus", "1");
    engine.emit(StoreKind::Device, &ScopeKey::Global, "cameraStatus", "99");
    assert_eq!(store.snapshot().camera_status, Some(DeviceStatus::On));
}

#[test]
fn malformed_payloads_never_corrupt_the_cache() {
    let (engine, bridge) = bridge_with_engine();
    let store = device::store(&bridge).unwrap();
    engine.emit(StoreKind::Device, &ScopeKey::Global, "captureVolume", "80");
    engine.emit(StoreKind::Device, &ScopeKey::Global, "captureVolume", "");
    engine.emit(
        StoreKind::Device,
        &ScopeKey::Global,
        "captureVolume",
        "not-json",
    );
    engine.emit(
        StoreKind::Device,
        &ScopeKey::Global,
        "captureVolume",
        "{\"nested\":true}",
    );
    assert_eq!(store.snapshot().capture_volume, 80);
}

#[test]
fn unknown_field_names_are_dropped() {
    let (engine, bridge) = bridge_with_engine();
    let store = device::store(&bridge).unwrap();
    engine.emit(StoreKind::Device, &ScopeKey::Global, "noSuchField", "1");
    assert_eq!(store.snapshot(), device::DeviceState::default());
}

#[test]
fn seat_list_replaces_wholesale_not_merged() {
    let (engine, bridge) = bridge_with_engine();
    let room = ScopeKey::room("room_1").unwrap();
    let store = seat::store(&bridge, &room).unwrap();

    let occupied = vec![SeatInfo {
        index: 0,
        is_locked: false,
        user_info: SeatUserInfo {
            user_id: "host_1".into(),
            live_id: "room_1".into(),
            ..SeatUserInfo::default()
        },
        ..SeatInfo::default()
    }];
    engine.emit_record(StoreKind::Seat, &room, "seatList", &occupied);
    assert_eq!(store.snapshot().seat_list.len(), 1);

    engine.emit(StoreKind::Seat, &room, "seatList", "[]");
    assert!(store.snapshot().seat_list.is_empty());
}

#[test]
fn envelopes_for_an_unresolved_store_are_dropped() {
    let (engine, bridge) = bridge_with_engine();
    let room = ScopeKey::room("room_1").unwrap();
    // Nothing resolved: the fake engine has no sink, so the envelope
    // goes nowhere and later resolution starts from defaults.
    engine.emit(StoreKind::Seat, &room, "seatList", r#"[{"index":0}]"#);
    let store = seat::store(&bridge, &room).unwrap();
    assert!(store.snapshot().seat_list.is_empty());
}

#[test]
fn watchers_mirror_applied_updates() {
    let (engine, bridge) = bridge_with_engine();
    let store = device::store(&bridge).unwrap();
    let seen = Arc::new(std::sync::Mutex::new(Vec::new()));
    let sink = Arc::clone(&seen);
    store.observe(Arc::new(move |field: &str, state: &device::DeviceState| {
        sink.lock().unwrap().push((field.to_string(), state.output_volume));
    }));
    engine.emit(StoreKind::Device, &ScopeKey::Global, "outputVolume", "40");
    engine.emit(StoreKind::Device, &ScopeKey::Global, "outputVolume", "oops");
    let seen = seen.lock().unwrap();
    assert_eq!(seen.as_slice(), &[("outputVolume".to_string(), 40)]);
}
