// SPDX-License-Identifier: Apache-2.0
//! First-bind tracking per `(store kind, scope)` pair.
//!
//! Binding is per store and scope, not per UI consumer: any number of
//! consumers resolving the same store converge on a single connector
//! attachment. There is no unbind; rebinding is "attach again", and this
//! set makes the second and later attempts no-ops.

use std::collections::HashSet;
use std::sync::Mutex;

use stagecast_proto::{ScopeKey, StoreKind};

#[derive(Debug, Default)]
pub(crate) struct BindingSet {
    bound: Mutex<HashSet<(StoreKind, ScopeKey)>>,
}

impl BindingSet {
    /// Record a bind attempt; `true` only on the first call for the pair.
    pub(crate) fn first_bind(&self, kind: StoreKind, scope: &ScopeKey) -> bool {
        let mut bound = match self.bound.lock() {
            Ok(bound) => bound,
            Err(poisoned) => poisoned.into_inner(),
        };
        bound.insert((kind, scope.clone()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn only_first_bind_reports_new() {
        let set = BindingSet::default();
        let scope = ScopeKey::room("r1").unwrap();
        assert!(set.first_bind(StoreKind::Gift, &scope));
        assert!(!set.first_bind(StoreKind::Gift, &scope));
        // A different kind or scope is its own binding.
        assert!(set.first_bind(StoreKind::Seat, &scope));
        assert!(set.first_bind(StoreKind::Gift, &ScopeKey::room("r2").unwrap()));
    }
}
