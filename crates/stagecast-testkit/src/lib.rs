// SPDX-License-Identifier: Apache-2.0
//! Shared test doubles and fixtures for the Stagecast crates.
//!
//! The centerpiece is [`FakeEngine`], a scriptable in-memory engine
//! connector: it records every attach and every action call, lets tests
//! script per-operation failures and success payloads, and lets tests
//! emit envelopes into whatever the bridge has bound.
#![forbid(unsafe_code)]

mod engine;

pub use engine::{FakeEngine, RecordedCall};
