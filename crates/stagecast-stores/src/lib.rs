// SPDX-License-Identifier: Apache-2.0
//! Declarative domain store tables and typed facades.
//!
//! One module per functional domain. Each declares its typed cache
//! record, its field dispatch table and discrete event names, and thin
//! facade functions that serialize typed options through the bridge's
//! operation router, the Rust counterpart of the scripting layer's
//! per-domain state hooks.
//!
//! Global domains ([`login`], [`device`], [`live_list`], [`summary`])
//! resolve against the global sentinel; everything else takes a room
//! scope.
#![forbid(unsafe_code)]

pub mod audience;
pub mod audio_effect;
pub mod barrage;
pub mod beauty;
pub mod co_guest;
pub mod co_host;
pub mod device;
pub mod gift;
pub mod like;
pub mod live_list;
pub mod login;
pub mod ops;
pub mod seat;
pub mod summary;
