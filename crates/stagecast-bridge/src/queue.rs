// SPDX-License-Identifier: Apache-2.0
//! Cross-thread envelope marshaling.
//!
//! Cache application is single-threaded from the UI's perspective, but
//! connectors observe the engine from their own threads. The queue gives
//! a connector cheap `Send` sinks that tag and enqueue envelopes from
//! anywhere, while the owning thread drains them into the bridge in
//! delivery order.

use std::sync::mpsc::{self, Receiver, Sender};

use stagecast_proto::{Envelope, ScopeKey, StoreKind};

use crate::bridge::Bridge;
use crate::connector::EnvelopeSink;

struct TaggedEnvelope {
    kind: StoreKind,
    scope: ScopeKey,
    envelope: Envelope,
}

/// Unbounded envelope channel owned by the applying thread.
pub struct EnvelopeQueue {
    tx: Sender<TaggedEnvelope>,
    rx: Receiver<TaggedEnvelope>,
}

impl EnvelopeQueue {
    /// Create an empty queue.
    pub fn new() -> Self {
        let (tx, rx) = mpsc::channel();
        Self { tx, rx }
    }

    /// A sink that tags envelopes with `(kind, scope)` and enqueues them.
    ///
    /// Sinks may outlive the queue; sends after the queue is dropped are
    /// silently discarded, matching the no-teardown binding model.
    pub fn sink(&self, kind: StoreKind, scope: ScopeKey) -> EnvelopeSink {
        let tx = self.tx.clone();
        Box::new(move |envelope| {
            let _ = tx.send(TaggedEnvelope {
                kind,
                scope: scope.clone(),
                envelope,
            });
        })
    }

    /// Apply every queued envelope to the bridge, in delivery order.
    /// Returns how many were applied.
    pub fn drain(&self, bridge: &Bridge) -> usize {
        let mut applied = 0;
        while let Ok(tagged) = self.rx.try_recv() {
            bridge.apply(tagged.kind, &tagged.scope, &tagged.envelope);
            applied += 1;
        }
        applied
    }
}

impl Default for EnvelopeQueue {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Debug for EnvelopeQueue {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("EnvelopeQueue").finish_non_exhaustive()
    }
}
