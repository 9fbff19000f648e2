// SPDX-License-Identifier: Apache-2.0
//! Scriptable in-memory engine connector.

use std::collections::HashMap;
use std::sync::{Arc, Mutex};

use serde::Serialize;
use serde_json::Value;
use stagecast_bridge::{
    EngineConnector, EnvelopeSink, OperationError, OperationTable,
};
use stagecast_proto::{Envelope, ScopeKey, StoreKind};

/// One action call the fake engine received.
#[derive(Debug, Clone)]
pub struct RecordedCall {
    /// Operation name.
    pub operation: String,
    /// Params as dispatched.
    pub params: Value,
}

#[derive(Default)]
struct FakeInner {
    sinks: Mutex<HashMap<(StoreKind, ScopeKey), Vec<EnvelopeSink>>>,
    calls: Mutex<Vec<RecordedCall>>,
    failures: Mutex<HashMap<String, (i32, String)>>,
    responses: Mutex<HashMap<String, String>>,
}

/// A scriptable [`EngineConnector`] for tests.
///
/// Every operation in the canonical roster is registered. By default a
/// call records itself and succeeds with no payload; tests can script a
/// failure or a success payload per operation. Envelopes are emitted
/// synchronously on the caller's thread, which plays the role of the UI
/// thread.
#[derive(Clone, Default)]
pub struct FakeEngine {
    inner: Arc<FakeInner>,
}

impl FakeEngine {
    /// A fresh engine with no scripted behavior.
    pub fn new() -> Self {
        Self::default()
    }

    /// Script `operation` to fail with `code` and `message`.
    pub fn script_failure(&self, operation: &str, code: i32, message: &str) {
        self.inner
            .failures
            .lock()
            .unwrap()
            .insert(operation.to_string(), (code, message.to_string()));
    }

    /// Script `operation` to succeed with a JSON payload.
    pub fn script_response(&self, operation: &str, payload: &str) {
        self.inner
            .responses
            .lock()
            .unwrap()
            .insert(operation.to_string(), payload.to_string());
    }

    /// How many sinks are attached for `(kind, scope)`.
    pub fn attach_count(&self, kind: StoreKind, scope: &ScopeKey) -> usize {
        self.inner
            .sinks
            .lock()
            .unwrap()
            .get(&(kind, scope.clone()))
            .map_or(0, Vec::len)
    }

    /// Every action call received so far.
    pub fn calls(&self) -> Vec<RecordedCall> {
        self.inner.calls.lock().unwrap().clone()
    }

    /// Calls for one operation.
    pub fn calls_for(&self, operation: &str) -> Vec<RecordedCall> {
        self.calls()
            .into_iter()
            .filter(|call| call.operation == operation)
            .collect()
    }

    /// Push one envelope through every sink attached for `(kind, scope)`.
    /// Does nothing when the bridge never bound that store.
    pub fn emit(&self, kind: StoreKind, scope: &ScopeKey, name: &str, payload: &str) {
        let sinks = self.inner.sinks.lock().unwrap();
        if let Some(attached) = sinks.get(&(kind, scope.clone())) {
            for sink in attached {
                sink(Envelope::new(name, payload));
            }
        }
    }

    /// Serialize `record` and emit it as `name`.
    pub fn emit_record<T: Serialize>(
        &self,
        kind: StoreKind,
        scope: &ScopeKey,
        name: &str,
        record: &T,
    ) {
        let payload = serde_json::to_string(record).unwrap();
        self.emit(kind, scope, name, &payload);
    }
}

impl EngineConnector for FakeEngine {
    fn attach(&self, kind: StoreKind, scope: &ScopeKey, sink: EnvelopeSink) {
        self.inner
            .sinks
            .lock()
            .unwrap()
            .entry((kind, scope.clone()))
            .or_default()
            .push(sink);
    }

    fn register_operations(&self, table: &mut OperationTable) {
        for operation in stagecast_stores::ops::all_operations() {
            let inner = Arc::clone(&self.inner);
            let name = operation.to_string();
            table.register(
                operation,
                Box::new(move |params, completion| {
                    inner.calls.lock().unwrap().push(RecordedCall {
                        operation: name.clone(),
                        params: params.clone(),
                    });
                    if let Some((code, message)) = inner.failures.lock().unwrap().get(&name) {
                        return Err(OperationError::Rejected {
                            code: *code,
                            message: message.clone(),
                        });
                    }
                    let payload = inner.responses.lock().unwrap().get(&name).cloned();
                    completion.succeed(payload);
                    Ok(())
                }),
            );
        }
    }
}

impl std::fmt::Debug for FakeEngine {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("FakeEngine")
            .field("calls", &self.inner.calls.lock().unwrap().len())
            .finish_non_exhaustive()
    }
}
