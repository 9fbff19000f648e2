// SPDX-License-Identifier: Apache-2.0
//! The assembled bridge façade.
//!
//! One `Bridge` owns the store registry, the first-bind set, and the
//! operation router, all wired to a single engine connector. Resolving a
//! store attaches the connector's fan-out for that `(kind, scope)` pair
//! exactly once, no matter how many consumers resolve it.

use std::sync::Arc;

use serde::Serialize;
use serde_json::Value;
use stagecast_proto::{Envelope, ScopeError, ScopeKey, StoreKind};
use tracing::{debug, info};

use crate::actions::{ActionCallbacks, ActionRouter, OperationTable};
use crate::binding::BindingSet;
use crate::connector::{EngineConnector, EnvelopeSink};
use crate::registry::StoreRegistry;
use crate::store::{Domain, Store};

/// Construction options. Defaults are production-safe.
#[derive(Debug, Clone, Copy, Default)]
pub struct BridgeOptions {
    /// Log action parameters when dispatching. Off by default since
    /// params may carry user content.
    pub log_action_params: bool,
}

/// The scripting-layer's single handle onto the native engine.
pub struct Bridge {
    connector: Arc<dyn EngineConnector>,
    registry: StoreRegistry,
    bindings: BindingSet,
    router: ActionRouter,
}

impl Bridge {
    /// Build a bridge over `connector` with default options.
    pub fn new(connector: Arc<dyn EngineConnector>) -> Self {
        Self::with_options(connector, BridgeOptions::default())
    }

    /// Build a bridge over `connector`.
    ///
    /// The connector's operations are registered here, once; duplicates
    /// are rejected at registration time.
    pub fn with_options(connector: Arc<dyn EngineConnector>, options: BridgeOptions) -> Self {
        let mut table = OperationTable::new();
        connector.register_operations(&mut table);
        info!(operations = table.len(), "engine operation table registered");
        Self {
            connector,
            registry: StoreRegistry::new(),
            bindings: BindingSet::default(),
            router: ActionRouter::new(table, options.log_action_params),
        }
    }

    /// Resolve the store for `(D::KIND, scope)`, binding the connector's
    /// fan-out on first use.
    ///
    /// Subsequent calls for the same pair return the same instance and do
    /// not attach again, so any number of UI consumers converge on one
    /// subscription and one cache.
    pub fn store<D: Domain>(&self, scope: &ScopeKey) -> Result<Arc<Store<D>>, ScopeError> {
        let store = self.registry.resolve::<D>(scope)?;
        if self.bindings.first_bind(D::KIND, scope) {
            let sink_store = Arc::clone(&store);
            let sink: EnvelopeSink = Box::new(move |envelope| sink_store.apply_envelope(&envelope));
            self.connector.attach(D::KIND, scope, sink);
            debug!(kind = %D::KIND, scope = %scope, "fan-out attached");
        }
        Ok(store)
    }

    /// Dispatch a native operation with raw JSON params.
    ///
    /// Fire-and-forget: every outcome, including dispatch failure, is
    /// reported through the callbacks (or logged defaults), never
    /// returned.
    pub fn invoke(&self, operation: &str, params: Value, callbacks: ActionCallbacks) {
        self.router.invoke(operation, params, callbacks);
    }

    /// Dispatch a native operation with typed params.
    ///
    /// A params-encoding failure is a marshaling error routed to the
    /// failure callback.
    pub fn invoke_serialized<P: Serialize>(
        &self,
        operation: &str,
        params: &P,
        callbacks: ActionCallbacks,
    ) {
        self.router.invoke_serialized(operation, params, callbacks);
    }

    /// Route one tagged envelope to its store, if resolved.
    ///
    /// Envelopes for never-resolved stores are dropped quietly: nothing
    /// has subscribed, so there is nothing to update.
    pub fn apply(&self, kind: StoreKind, scope: &ScopeKey, envelope: &Envelope) {
        match self.registry.target(kind, scope) {
            Some(target) => target.deliver(envelope),
            None => {
                debug!(kind = %kind, scope = %scope, name = %envelope.name, "envelope for unresolved store dropped");
            }
        }
    }

    /// The registry, for diagnostics.
    pub fn registry(&self) -> &StoreRegistry {
        &self.registry
    }
}

impl std::fmt::Debug for Bridge {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Bridge")
            .field("registry", &self.registry)
            .finish_non_exhaustive()
    }
}
