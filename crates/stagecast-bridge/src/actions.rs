// SPDX-License-Identifier: Apache-2.0
//! Operation table, router, and completion callbacks.
//!
//! Action calls are fire-and-forget: nothing is returned to the caller,
//! and the outcome is reported only through the call's completion
//! callbacks. The router guarantees that no failure (unknown operation,
//! parameter marshaling, handler error, even a handler panic) ever
//! escapes to the caller; every failure path ends in the failure callback
//! with a synthesized code and message. Completion and any eventual state
//! update travel on independent channels with no request id linking them.

use std::collections::HashMap;
use std::panic::{catch_unwind, AssertUnwindSafe};
use std::sync::{Arc, Mutex};

use serde::Serialize;
use serde_json::Value;
use thiserror::Error;
use tracing::{debug, warn};

/// Generic failure reported by a handler without a native code.
pub const ERR_OPERATION_FAILED: i32 = -1;
/// The operation name is not in the table.
pub const ERR_UNKNOWN_OPERATION: i32 = -2;
/// The typed parameters could not be encoded.
pub const ERR_BAD_PARAMS: i32 = -3;
/// The handler panicked and was contained.
pub const ERR_OPERATION_PANICKED: i32 = -4;
/// The engine rejected the call as unavailable.
pub const ERR_ENGINE_UNAVAILABLE: i32 = -5;

/// Success callback: optional JSON result text from the engine.
pub type SuccessCallback = Box<dyn FnOnce(Option<String>) + Send>;
/// Failure callback: error code and message.
pub type FailureCallback = Box<dyn FnOnce(i32, String) + Send>;

/// Per-call completion callbacks. Both are optional; an omitted callback
/// is replaced by one that logs the outcome.
#[derive(Default)]
pub struct ActionCallbacks {
    /// Invoked once on success.
    pub on_success: Option<SuccessCallback>,
    /// Invoked once on failure.
    pub on_fail: Option<FailureCallback>,
}

impl ActionCallbacks {
    /// Callbacks that only log.
    pub fn new() -> Self {
        Self::default()
    }

    /// Attach a success callback.
    pub fn on_success(mut self, callback: impl FnOnce(Option<String>) + Send + 'static) -> Self {
        self.on_success = Some(Box::new(callback));
        self
    }

    /// Attach a failure callback.
    pub fn on_fail(mut self, callback: impl FnOnce(i32, String) + Send + 'static) -> Self {
        self.on_fail = Some(Box::new(callback));
        self
    }
}

impl std::fmt::Debug for ActionCallbacks {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ActionCallbacks")
            .field("on_success", &self.on_success.is_some())
            .field("on_fail", &self.on_fail.is_some())
            .finish()
    }
}

/// At-most-once completion handle for one action call.
///
/// Handlers may complete synchronously or hold a clone and complete
/// later; the second and later firings are ignored.
#[derive(Clone)]
pub struct Completion {
    inner: Arc<Mutex<CompletionInner>>,
}

struct CompletionInner {
    operation: String,
    callbacks: Option<ActionCallbacks>,
}

impl Completion {
    pub(crate) fn new(operation: &str, callbacks: ActionCallbacks) -> Self {
        Self {
            inner: Arc::new(Mutex::new(CompletionInner {
                operation: operation.to_string(),
                callbacks: Some(callbacks),
            })),
        }
    }

    /// Report success, with an optional JSON result from the engine.
    pub fn succeed(&self, payload: Option<String>) {
        let Some((operation, callbacks)) = self.take() else {
            return;
        };
        match callbacks.on_success {
            Some(callback) => callback(payload),
            None => debug!(%operation, ?payload, "operation succeeded"),
        }
    }

    /// Report failure with a code and message.
    pub fn fail(&self, code: i32, message: impl Into<String>) {
        let message = message.into();
        let Some((operation, callbacks)) = self.take() else {
            return;
        };
        match callbacks.on_fail {
            Some(callback) => callback(code, message),
            None => warn!(%operation, code, %message, "operation failed"),
        }
    }

    fn take(&self) -> Option<(String, ActionCallbacks)> {
        let mut inner = match self.inner.lock() {
            Ok(inner) => inner,
            Err(poisoned) => poisoned.into_inner(),
        };
        match inner.callbacks.take() {
            Some(callbacks) => Some((inner.operation.clone(), callbacks)),
            None => {
                debug!(operation = %inner.operation, "duplicate completion ignored");
                None
            }
        }
    }
}

impl std::fmt::Debug for Completion {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Completion").finish_non_exhaustive()
    }
}

/// A handler's way of refusing an action call.
#[derive(Debug, Error)]
pub enum OperationError {
    /// The engine rejected the call with a native code and message.
    #[error("{message} ({code})")]
    Rejected {
        /// Native error code.
        code: i32,
        /// Native error message.
        message: String,
    },
    /// The engine's call surface is not available.
    #[error("engine unavailable: {0}")]
    Unavailable(String),
}

impl OperationError {
    /// Error code reported through the failure callback.
    pub fn code(&self) -> i32 {
        match self {
            Self::Rejected { code, .. } => *code,
            Self::Unavailable(_) => ERR_ENGINE_UNAVAILABLE,
        }
    }
}

/// One registered native operation.
///
/// Handlers receive the (possibly empty) JSON params and the call's
/// completion handle. Returning an error routes to the failure callback.
pub type OperationHandler =
    Box<dyn Fn(&Value, &Completion) -> Result<(), OperationError> + Send + Sync>;

/// Name→handler table built once at bridge construction.
#[derive(Default)]
pub struct OperationTable {
    handlers: HashMap<String, OperationHandler>,
}

impl OperationTable {
    /// Create an empty table.
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a handler. A duplicate name is rejected and logged; the
    /// first registration wins.
    pub fn register(&mut self, name: impl Into<String>, handler: OperationHandler) {
        let name = name.into();
        if self.handlers.contains_key(&name) {
            warn!(operation = name, "duplicate operation registration ignored");
            return;
        }
        self.handlers.insert(name, handler);
    }

    /// Whether `name` is registered.
    pub fn contains(&self, name: &str) -> bool {
        self.handlers.contains_key(name)
    }

    /// Number of registered operations.
    pub fn len(&self) -> usize {
        self.handlers.len()
    }

    /// Whether the table is empty.
    pub fn is_empty(&self) -> bool {
        self.handlers.is_empty()
    }
}

impl std::fmt::Debug for OperationTable {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("OperationTable")
            .field("operations", &self.handlers.len())
            .finish()
    }
}

/// Looks operations up by name and shields callers from every failure
/// mode of dispatch.
pub(crate) struct ActionRouter {
    table: OperationTable,
    log_params: bool,
}

impl ActionRouter {
    pub(crate) fn new(table: OperationTable, log_params: bool) -> Self {
        Self { table, log_params }
    }

    pub(crate) fn invoke(&self, operation: &str, params: Value, callbacks: ActionCallbacks) {
        if self.log_params {
            debug!(operation, %params, "dispatching operation");
        } else {
            debug!(operation, "dispatching operation");
        }
        let completion = Completion::new(operation, callbacks);
        let Some(handler) = self.table.handlers.get(operation) else {
            warn!(operation, "unknown operation");
            completion.fail(
                ERR_UNKNOWN_OPERATION,
                format!("unknown operation `{operation}`"),
            );
            return;
        };
        match catch_unwind(AssertUnwindSafe(|| handler(&params, &completion))) {
            Ok(Ok(())) => {}
            Ok(Err(err)) => completion.fail(err.code(), err.to_string()),
            Err(_) => {
                warn!(operation, "operation handler panicked");
                completion.fail(
                    ERR_OPERATION_PANICKED,
                    format!("operation `{operation}` panicked"),
                );
            }
        }
    }

    pub(crate) fn invoke_serialized<P: Serialize>(
        &self,
        operation: &str,
        params: &P,
        callbacks: ActionCallbacks,
    ) {
        match serde_json::to_value(params) {
            Ok(value) => self.invoke(operation, value, callbacks),
            Err(err) => Completion::new(operation, callbacks).fail(
                ERR_BAD_PARAMS,
                format!("failed to encode params for `{operation}`: {err}"),
            ),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::{AtomicUsize, Ordering};

    fn router_with(handler: OperationHandler) -> ActionRouter {
        let mut table = OperationTable::new();
        table.register("op", handler);
        ActionRouter::new(table, false)
    }

    #[test]
    fn unknown_operation_fails_with_message() {
        let router = ActionRouter::new(OperationTable::new(), false);
        let failures = Arc::new(Mutex::new(Vec::new()));
        let sink = Arc::clone(&failures);
        router.invoke(
            "missing",
            Value::Null,
            ActionCallbacks::new().on_fail(move |code, message| {
                sink.lock().unwrap().push((code, message));
            }),
        );
        let failures = failures.lock().unwrap();
        assert_eq!(failures.len(), 1);
        assert_eq!(failures[0].0, ERR_UNKNOWN_OPERATION);
        assert!(!failures[0].1.is_empty());
    }

    #[test]
    fn missing_callbacks_never_panic() {
        let router = ActionRouter::new(OperationTable::new(), false);
        router.invoke("missing", Value::Null, ActionCallbacks::new());
        let router = router_with(Box::new(|_, completion| {
            completion.succeed(None);
            Ok(())
        }));
        router.invoke("op", Value::Null, ActionCallbacks::new());
    }

    #[test]
    fn handler_error_routes_to_failure_callback() {
        let router = router_with(Box::new(|_, _| {
            Err(OperationError::Rejected {
                code: 10_017,
                message: "room not joined".into(),
            })
        }));
        let seen = Arc::new(Mutex::new(None));
        let sink = Arc::clone(&seen);
        router.invoke(
            "op",
            Value::Null,
            ActionCallbacks::new().on_fail(move |code, message| {
                *sink.lock().unwrap() = Some((code, message));
            }),
        );
        assert_eq!(
            *seen.lock().unwrap(),
            Some((10_017, "room not joined (10017)".to_string()))
        );
    }

    #[test]
    fn panicking_handler_is_contained() {
        let router = router_with(Box::new(|_, _| panic!("native surface missing")));
        let code = Arc::new(AtomicUsize::new(0));
        let sink = Arc::clone(&code);
        router.invoke(
            "op",
            Value::Null,
            ActionCallbacks::new().on_fail(move |code, _| {
                sink.store(code.unsigned_abs() as usize, Ordering::SeqCst);
            }),
        );
        assert_eq!(
            code.load(Ordering::SeqCst),
            ERR_OPERATION_PANICKED.unsigned_abs() as usize
        );
    }

    #[test]
    fn completion_fires_at_most_once() {
        let router = router_with(Box::new(|_, completion| {
            completion.succeed(Some("first".into()));
            completion.succeed(Some("second".into()));
            completion.fail(ERR_OPERATION_FAILED, "late failure");
            Ok(())
        }));
        let calls = Arc::new(AtomicUsize::new(0));
        let fails = Arc::new(AtomicUsize::new(0));
        let success_sink = Arc::clone(&calls);
        let fail_sink = Arc::clone(&fails);
        router.invoke(
            "op",
            Value::Null,
            ActionCallbacks::new()
                .on_success(move |payload| {
                    assert_eq!(payload.as_deref(), Some("first"));
                    success_sink.fetch_add(1, Ordering::SeqCst);
                })
                .on_fail(move |_, _| {
                    fail_sink.fetch_add(1, Ordering::SeqCst);
                }),
        );
        assert_eq!(calls.load(Ordering::SeqCst), 1);
        assert_eq!(fails.load(Ordering::SeqCst), 0);
    }

    #[test]
    fn deferred_completion_still_fires() {
        let parked: Arc<Mutex<Option<Completion>>> = Arc::new(Mutex::new(None));
        let slot = Arc::clone(&parked);
        let router = router_with(Box::new(move |_, completion| {
            *slot.lock().unwrap() = Some(completion.clone());
            Ok(())
        }));
        let seen = Arc::new(Mutex::new(None));
        let sink = Arc::clone(&seen);
        router.invoke(
            "op",
            Value::Null,
            ActionCallbacks::new().on_success(move |payload| {
                *sink.lock().unwrap() = payload;
            }),
        );
        assert!(seen.lock().unwrap().is_none());
        parked
            .lock()
            .unwrap()
            .take()
            .unwrap()
            .succeed(Some("{\"ok\":true}".into()));
        assert_eq!(seen.lock().unwrap().as_deref(), Some("{\"ok\":true}"));
    }

    #[test]
    fn duplicate_registration_keeps_first_handler() {
        let mut table = OperationTable::new();
        table.register(
            "op",
            Box::new(|_, completion| {
                completion.succeed(Some("first".into()));
                Ok(())
            }),
        );
        table.register(
            "op",
            Box::new(|_, completion| {
                completion.succeed(Some("second".into()));
                Ok(())
            }),
        );
        assert_eq!(table.len(), 1);
        let router = ActionRouter::new(table, false);
        let seen = Arc::new(Mutex::new(None));
        let sink = Arc::clone(&seen);
        router.invoke(
            "op",
            Value::Null,
            ActionCallbacks::new().on_success(move |payload| {
                *sink.lock().unwrap() = payload;
            }),
        );
        assert_eq!(seen.lock().unwrap().as_deref(), Some("first"));
    }

    #[test]
    fn unencodable_params_route_to_failure() {
        #[derive(Debug)]
        struct Bad;
        impl Serialize for Bad {
            fn serialize<S: serde::Serializer>(&self, _: S) -> Result<S::Ok, S::Error> {
                Err(serde::ser::Error::custom("no wire form"))
            }
        }
        let router = router_with(Box::new(|_, completion| {
            completion.succeed(None);
            Ok(())
        }));
        let seen = Arc::new(Mutex::new(None));
        let sink = Arc::clone(&seen);
        router.invoke_serialized(
            "op",
            &Bad,
            ActionCallbacks::new().on_fail(move |code, message| {
                *sink.lock().unwrap() = Some((code, message));
            }),
        );
        let seen = seen.lock().unwrap();
        let (code, message) = seen.as_ref().unwrap();
        assert_eq!(*code, ERR_BAD_PARAMS);
        assert!(message.contains("op"));
    }
}
