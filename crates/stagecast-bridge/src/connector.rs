// SPDX-License-Identifier: Apache-2.0
//! The engine-side attachment contract.
//!
//! A connector is the bridge's only view of the native engine. For each
//! `(store kind, scope)` pair it is handed a sink exactly once and is
//! expected to keep emitting envelopes into it for the lifetime of the
//! native store: one state-field-update per observed property change
//! (at-least-once is fine, wholesale replacement makes duplicates
//! idempotent) and each discrete event exactly once. Connectors that
//! produce on background threads should route through an
//! [`EnvelopeQueue`](crate::queue::EnvelopeQueue) so envelopes apply on
//! the owning thread in delivery order.

use stagecast_proto::{Envelope, ScopeKey, StoreKind};

use crate::actions::OperationTable;

/// Where a connector pushes envelopes for one bound store.
pub type EnvelopeSink = Box<dyn Fn(Envelope) + Send + Sync>;

/// The native engine as seen by the bridge.
pub trait EngineConnector: Send + Sync {
    /// Start the observer fan-out for one store and scope.
    ///
    /// Called at most once per `(kind, scope)` pair. If the native
    /// context for `scope` does not exist yet this must not fail;
    /// envelopes simply do not arrive until it does.
    fn attach(&self, kind: StoreKind, scope: &ScopeKey, sink: EnvelopeSink);

    /// Contribute the native operations to the bridge's table.
    ///
    /// Called once at bridge construction.
    fn register_operations(&self, table: &mut OperationTable);
}
