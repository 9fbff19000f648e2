// SPDX-License-Identifier: Apache-2.0
//! Lookup-or-create store registry keyed by kind and scope.
//!
//! Resolving the same `(kind, scope)` pair twice returns the same
//! instance; different rooms get distinct instances. There is no
//! eviction: the native layer provides no "scope closed" signal, so
//! entries persist for the process lifetime and the registry grows with
//! the number of rooms ever visited.

use std::any::{Any, TypeId};
use std::collections::HashMap;
use std::sync::{Arc, Mutex};

use stagecast_proto::{ScopeError, ScopeKey, StoreKind};
use tracing::debug;

use crate::store::{Domain, EnvelopeTarget, Store};

/// Process-wide registry of domain stores.
#[derive(Default)]
pub struct StoreRegistry {
    inner: Mutex<Maps>,
}

#[derive(Default)]
struct Maps {
    /// Typed handles, keyed by the domain marker's type.
    stores: HashMap<(TypeId, ScopeKey), Arc<dyn Any + Send + Sync>>,
    /// Type-erased delivery handles, keyed by wire identity.
    targets: HashMap<(StoreKind, ScopeKey), Arc<dyn EnvelopeTarget>>,
}

impl StoreRegistry {
    /// Create an empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Return the store for `(D::KIND, scope)`, creating it at default
    /// values on first resolution.
    pub fn resolve<D: Domain>(&self, scope: &ScopeKey) -> Result<Arc<Store<D>>, ScopeError> {
        let expected = D::KIND.scope_kind();
        if scope.kind() != expected {
            return Err(ScopeError::KindMismatch {
                kind: D::KIND,
                expected,
                got: scope.kind(),
            });
        }
        let mut maps = match self.inner.lock() {
            Ok(maps) => maps,
            Err(poisoned) => poisoned.into_inner(),
        };
        let key = (TypeId::of::<D>(), scope.clone());
        if let Some(existing) = maps.stores.get(&key) {
            // The downcast cannot fail: the key includes the domain's
            // TypeId. The error arm only satisfies the signature.
            return Arc::clone(existing).downcast::<Store<D>>().map_err(|_| {
                ScopeError::KindMismatch {
                    kind: D::KIND,
                    expected,
                    got: scope.kind(),
                }
            });
        }
        let store = Arc::new(Store::<D>::new(scope.clone()));
        maps.stores
            .insert(key, Arc::clone(&store) as Arc<dyn Any + Send + Sync>);
        maps.targets
            .entry((D::KIND, scope.clone()))
            .or_insert_with(|| Arc::clone(&store) as Arc<dyn EnvelopeTarget>);
        debug!(kind = %D::KIND, scope = %scope, "store created");
        Ok(store)
    }

    /// Type-erased delivery handle for envelope routing, if the store has
    /// been resolved before.
    pub(crate) fn target(
        &self,
        kind: StoreKind,
        scope: &ScopeKey,
    ) -> Option<Arc<dyn EnvelopeTarget>> {
        let maps = match self.inner.lock() {
            Ok(maps) => maps,
            Err(poisoned) => poisoned.into_inner(),
        };
        maps.targets.get(&(kind, scope.clone())).map(Arc::clone)
    }

    /// Number of stores resolved so far, across all kinds and scopes.
    pub fn len(&self) -> usize {
        match self.inner.lock() {
            Ok(maps) => maps.stores.len(),
            Err(poisoned) => poisoned.into_inner().stores.len(),
        }
    }

    /// Whether no store has been resolved yet.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl std::fmt::Debug for StoreRegistry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("StoreRegistry")
            .field("stores", &self.len())
            .finish()
    }
}
