// SPDX-License-Identifier: Apache-2.0
//! Action dispatch end to end: typed facades, callback injection, and
//! every failure path landing in the failure callback.

use std::sync::{Arc, Mutex};

use stagecast_bridge::{
    ActionCallbacks, Bridge, EngineConnector, EnvelopeSink, OperationTable,
    ERR_UNKNOWN_OPERATION,
};
use stagecast_proto::{ScopeKey, StoreKind};
use stagecast_stores::{gift, live_list, login, seat};
use stagecast_testkit::FakeEngine;

fn bridge_with_engine() -> (FakeEngine, Bridge) {
    let engine = FakeEngine::new();
    let bridge = Bridge::new(Arc::new(engine.clone()));
    (engine, bridge)
}

#[test]
fn facades_serialize_wire_shaped_params() {
    let (engine, bridge) = bridge_with_engine();
    gift::send_gift(
        &bridge,
        &gift::SendGiftOptions {
            gift_id: "rose".into(),
            count: 3,
        },
        ActionCallbacks::new(),
    );
    let calls = engine.calls_for("sendGift");
    assert_eq!(calls.len(), 1);
    assert_eq!(calls[0].params["giftID"], "rose");
    assert_eq!(calls[0].params["count"], 3);
}

#[test]
fn success_callback_receives_scripted_payload() {
    let (engine, bridge) = bridge_with_engine();
    engine.script_response("callExperimentalAPI", r#"{"echo":true}"#);

    let response = Arc::new(Mutex::new(None));
    let sink = Arc::clone(&response);
    live_list::call_experimental_api(
        &bridge,
        &live_list::CallExperimentalApiOptions {
            json_params: r#"{"api":"setTestParam"}"#.into(),
        },
        ActionCallbacks::new().on_success(move |payload| {
            *sink.lock().unwrap() = payload;
        }),
    );
    assert_eq!(
        response.lock().unwrap().as_deref(),
        Some(r#"{"echo":true}"#)
    );
}

#[test]
fn scripted_failure_reaches_the_failure_callback() {
    let (engine, bridge) = bridge_with_engine();
    engine.script_failure("takeSeat", 10_102, "seat already taken");

    let failure = Arc::new(Mutex::new(None));
    let sink = Arc::clone(&failure);
    seat::take_seat(
        &bridge,
        &seat::TakeSeatOptions {
            seat_index: 1,
            timeout: Some(30),
        },
        ActionCallbacks::new().on_fail(move |code, message| {
            *sink.lock().unwrap() = Some((code, message));
        }),
    );
    let failure = failure.lock().unwrap();
    let (code, message) = failure.as_ref().unwrap();
    assert_eq!(*code, 10_102);
    assert!(message.contains("seat already taken"));
}

#[test]
fn missing_callbacks_are_injected_and_never_panic() {
    let (engine, bridge) = bridge_with_engine();
    engine.script_failure("sendLike", -1, "not joined");
    // No callbacks supplied: outcomes go to the log, nothing escapes.
    stagecast_stores::like::send_like(
        &bridge,
        &stagecast_stores::like::SendLikeOptions { count: 1 },
        ActionCallbacks::new(),
    );
    login::logout(&bridge, ActionCallbacks::new());
    assert_eq!(engine.calls_for("sendLike").len(), 1);
    assert_eq!(engine.calls_for("logout").len(), 1);
}

/// A connector with no operations and no fan-out, standing in for an
/// engine whose call surface never came up.
struct DeadEngine;

impl EngineConnector for DeadEngine {
    fn attach(&self, _kind: StoreKind, _scope: &ScopeKey, _sink: EnvelopeSink) {}
    fn register_operations(&self, _table: &mut OperationTable) {}
}

#[test]
fn unavailable_surface_fails_with_synthesized_error() {
    let bridge = Bridge::new(Arc::new(DeadEngine));
    let failure = Arc::new(Mutex::new(None));
    let sink = Arc::clone(&failure);
    login::login(
        &bridge,
        &login::LoginOptions {
            sdk_app_id: 1,
            user_id: "u1".into(),
            user_sig: "sig".into(),
        },
        ActionCallbacks::new().on_fail(move |code, message| {
            *sink.lock().unwrap() = Some((code, message));
        }),
    );
    let failure = failure.lock().unwrap();
    let (code, message) = failure.as_ref().unwrap();
    assert_eq!(*code, ERR_UNKNOWN_OPERATION);
    assert!(!message.is_empty());
}

#[test]
fn completion_is_not_correlated_with_state_updates() {
    let (engine, bridge) = bridge_with_engine();
    let room = ScopeKey::room("room_1").unwrap();
    let store = gift::store(&bridge, &room).unwrap();

    let succeeded = Arc::new(Mutex::new(false));
    let sink = Arc::clone(&succeeded);
    gift::refresh_usable_gifts(
        &bridge,
        ActionCallbacks::new().on_success(move |_| {
            *sink.lock().unwrap() = true;
        }),
    );
    // The call acknowledged, but the catalog only changes when the
    // engine later emits a field update on its own channel.
    assert!(*succeeded.lock().unwrap());
    assert!(store.snapshot().usable_gifts.is_empty());
    engine.emit(
        StoreKind::Gift,
        &room,
        "usableGifts",
        r#"[{"categoryID":"c1"}]"#,
    );
    assert_eq!(store.snapshot().usable_gifts.len(), 1);
}
