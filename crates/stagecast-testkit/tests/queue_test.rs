// SPDX-License-Identifier: Apache-2.0
//! Cross-thread marshaling: background producers enqueue, the owning
//! thread drains, and per-field ordering survives the trip.

use std::sync::Arc;
use std::thread;

use stagecast_bridge::{Bridge, EnvelopeQueue};
use stagecast_proto::{Envelope, ScopeKey, StoreKind};
use stagecast_stores::like;
use stagecast_testkit::FakeEngine;

#[test]
fn background_envelopes_apply_on_drain_in_order() {
    let engine = FakeEngine::new();
    let bridge = Bridge::new(Arc::new(engine));
    let room = ScopeKey::room("room_1").unwrap();
    let store = like::store(&bridge, &room).unwrap();

    let queue = EnvelopeQueue::new();
    let sink = queue.sink(StoreKind::Like, room.clone());
    let producer = thread::spawn(move || {
        for count in 1..=100u32 {
            sink(Envelope::new("totalLikeCount", count.to_string()));
        }
    });
    producer.join().unwrap();

    // Nothing lands until the owning thread drains.
    assert_eq!(store.snapshot().total_like_count, 0);
    assert_eq!(queue.drain(&bridge), 100);
    assert_eq!(store.snapshot().total_like_count, 100);
}

#[test]
fn drained_envelopes_for_unresolved_stores_are_dropped() {
    let engine = FakeEngine::new();
    let bridge = Bridge::new(Arc::new(engine));
    let room = ScopeKey::room("room_ghost").unwrap();

    let queue = EnvelopeQueue::new();
    let sink = queue.sink(StoreKind::Like, room.clone());
    sink(Envelope::new("totalLikeCount", "7"));
    assert_eq!(queue.drain(&bridge), 1);

    // Resolution after the fact starts from defaults.
    let store = like::store(&bridge, &room).unwrap();
    assert_eq!(store.snapshot().total_like_count, 0);
}

#[test]
fn sinks_from_several_threads_interleave_safely() {
    let engine = FakeEngine::new();
    let bridge = Bridge::new(Arc::new(engine));
    let room = ScopeKey::room("room_1").unwrap();
    let store = like::store(&bridge, &room).unwrap();

    let queue = EnvelopeQueue::new();
    let handles: Vec<_> = (0..4)
        .map(|_| {
            let sink = queue.sink(StoreKind::Like, room.clone());
            thread::spawn(move || {
                for _ in 0..50 {
                    sink(Envelope::new("totalLikeCount", "1"));
                }
            })
        })
        .collect();
    for handle in handles {
        handle.join().unwrap();
    }

    assert_eq!(queue.drain(&bridge), 200);
    // Last write wins; every envelope carried the same value.
    assert_eq!(store.snapshot().total_like_count, 1);
}
