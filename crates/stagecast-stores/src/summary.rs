// SPDX-License-Identifier: Apache-2.0
//! Post-stream statistics.
//!
//! The engine publishes the summary record as one opaque JSON value and
//! does not expose its schema, so the cache keeps it untyped. There are
//! no operations; the store is read-only.

use std::sync::Arc;

use stagecast_bridge::{replace, Bridge, Domain, Field, Store};
use stagecast_proto::{ScopeError, ScopeKey, StoreKind};

/// Mirrored summary state.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SummaryState {
    /// Engine-defined statistics record, unset until published.
    pub summary_data: Option<serde_json::Value>,
}

/// Wiring of the summary store into the bridge.
pub enum SummaryDomain {}

impl Domain for SummaryDomain {
    type State = SummaryState;
    const KIND: StoreKind = StoreKind::Summary;
    const FIELDS: &'static [Field<SummaryState>] = &[Field {
        name: "summaryData",
        apply: |state, payload| replace(&mut state.summary_data, payload),
    }];
    const EVENTS: &'static [&'static str] = &[];
}

/// Operations the summary facade routes to the engine. There are none;
/// the store only mirrors.
pub const OPERATIONS: &[&str] = &[];

/// Resolve the global summary store, binding on first use.
pub fn store(bridge: &Bridge) -> Result<Arc<Store<SummaryDomain>>, ScopeError> {
    bridge.store::<SummaryDomain>(&ScopeKey::Global)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn summary_holds_opaque_record() {
        let mut state = SummaryState::default();
        let field = &SummaryDomain::FIELDS[0];
        (field.apply)(&mut state, r#"{"durationSec":620,"peakViewers":48}"#);
        let data = state.summary_data.unwrap();
        assert_eq!(data["peakViewers"], 48);
    }
}
