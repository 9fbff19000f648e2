// SPDX-License-Identifier: Apache-2.0
//! Typed store handles: one cache, its watchers, and its event listeners.
//!
//! A store is created by the registry on first resolution and lives for
//! the rest of the process. The decode pipeline is its only writer; UI
//! consumers read snapshots or subscribe to changes. Discrete events are
//! fanned out to listeners in registration order and are never stored.

use std::collections::HashMap;
use std::panic::{catch_unwind, AssertUnwindSafe};
use std::sync::{Arc, Mutex};

use serde_json::Value;
use stagecast_proto::{Envelope, ScopeKey, StoreKind};
use tracing::{debug, warn};

use crate::cache::{Applied, Field};
use crate::decode::{parse_event_payload, snippet};

/// A domain's declarative wiring into the bridge.
///
/// Implemented once per domain store by an uninhabited marker type; the
/// engine never instantiates it.
pub trait Domain: 'static {
    /// Typed cache record, with every field at its declared default.
    type State: Default + Clone + Send + 'static;
    /// Which store instances of this domain bind to.
    const KIND: StoreKind;
    /// Field dispatch table, one entry per wire field.
    const FIELDS: &'static [Field<Self::State>];
    /// Discrete event names this domain can deliver.
    const EVENTS: &'static [&'static str];
}

/// Listener for one discrete event. Removal matches by `Arc` identity.
pub type EventListener = Arc<dyn Fn(&Value) + Send + Sync>;

/// Watcher notified after each applied field update with the field's wire
/// name and a fresh snapshot.
pub type StateWatcher<S> = Arc<dyn Fn(&str, &S) + Send + Sync>;

/// One domain store bound to one scope.
pub struct Store<D: Domain> {
    scope: ScopeKey,
    state: Mutex<D::State>,
    listeners: Mutex<HashMap<String, Vec<EventListener>>>,
    watchers: Mutex<Vec<StateWatcher<D::State>>>,
}

impl<D: Domain> Store<D> {
    pub(crate) fn new(scope: ScopeKey) -> Self {
        Self {
            scope,
            state: Mutex::new(D::State::default()),
            listeners: Mutex::new(HashMap::new()),
            watchers: Mutex::new(Vec::new()),
        }
    }

    /// The scope this store is bound to.
    pub fn scope(&self) -> &ScopeKey {
        &self.scope
    }

    /// A copy of the current cache record.
    pub fn snapshot(&self) -> D::State {
        match self.state.lock() {
            Ok(state) => state.clone(),
            Err(poisoned) => poisoned.into_inner().clone(),
        }
    }

    /// Subscribe to field updates. Watchers live as long as the store.
    pub fn observe(&self, watcher: StateWatcher<D::State>) {
        if let Ok(mut watchers) = self.watchers.lock() {
            watchers.push(watcher);
        }
    }

    /// Register `listener` for a discrete event. Listeners run in
    /// registration order; the same listener may be registered for
    /// several events.
    pub fn add_listener(&self, event: &str, listener: EventListener) {
        if !D::EVENTS.contains(&event) {
            warn!(kind = %D::KIND, scope = %self.scope, event, "listener for unknown event");
        }
        if let Ok(mut listeners) = self.listeners.lock() {
            listeners.entry(event.to_string()).or_default().push(listener);
        }
    }

    /// Remove a previously added listener, matching by `Arc` identity.
    pub fn remove_listener(&self, event: &str, listener: &EventListener) {
        if let Ok(mut listeners) = self.listeners.lock() {
            if let Some(registered) = listeners.get_mut(event) {
                registered.retain(|existing| !Arc::ptr_eq(existing, listener));
            }
        }
    }

    /// Apply one state-field-update envelope to the cache.
    ///
    /// Unknown field names and undecodable payloads are logged and
    /// dropped; the cache keeps its current value. Watchers fire only on
    /// an actual replacement.
    pub fn apply_update(&self, field: &str, payload: &str) {
        let Some(entry) = D::FIELDS.iter().find(|entry| entry.name == field) else {
            warn!(kind = %D::KIND, scope = %self.scope, field, "update for unknown field");
            return;
        };
        let applied = {
            let mut state = match self.state.lock() {
                Ok(state) => state,
                Err(poisoned) => poisoned.into_inner(),
            };
            (entry.apply)(&mut state, payload)
        };
        match applied {
            Applied::Replaced => self.notify_watchers(field),
            Applied::EmptyPayload => {
                debug!(kind = %D::KIND, scope = %self.scope, field, "empty payload dropped");
            }
            Applied::BadPayload => {
                warn!(
                    kind = %D::KIND,
                    scope = %self.scope,
                    field,
                    payload = snippet(payload),
                    "undecodable payload dropped"
                );
            }
            Applied::UnknownCode(code) => {
                warn!(
                    kind = %D::KIND,
                    scope = %self.scope,
                    field,
                    code,
                    "unmapped enum code, field left unchanged"
                );
            }
        }
    }

    /// Decode one discrete-event envelope and fan it out to listeners.
    ///
    /// Listeners run in registration order; a panicking listener is
    /// contained and logged so its siblings still run.
    pub fn apply_event(&self, event: &str, payload: &str) {
        if !D::EVENTS.contains(&event) {
            warn!(kind = %D::KIND, scope = %self.scope, event, "unknown event dropped");
            return;
        }
        let Some(value) = parse_event_payload(payload) else {
            warn!(
                kind = %D::KIND,
                scope = %self.scope,
                event,
                payload = snippet(payload),
                "undecodable event payload dropped"
            );
            return;
        };
        let listeners: Vec<EventListener> = match self.listeners.lock() {
            Ok(listeners) => listeners.get(event).cloned().unwrap_or_default(),
            Err(_) => Vec::new(),
        };
        for listener in listeners {
            if catch_unwind(AssertUnwindSafe(|| listener(&value))).is_err() {
                warn!(kind = %D::KIND, scope = %self.scope, event, "event listener panicked");
            }
        }
    }

    /// Route one envelope to the field or event path by name.
    pub fn apply_envelope(&self, envelope: &Envelope) {
        let name = envelope.name.as_str();
        if D::FIELDS.iter().any(|entry| entry.name == name) {
            self.apply_update(name, &envelope.payload);
        } else if D::EVENTS.contains(&name) {
            self.apply_event(name, &envelope.payload);
        } else {
            warn!(kind = %D::KIND, scope = %self.scope, name, "unroutable envelope dropped");
        }
    }

    fn notify_watchers(&self, field: &str) {
        let watchers: Vec<StateWatcher<D::State>> = match self.watchers.lock() {
            Ok(watchers) => watchers.clone(),
            Err(_) => Vec::new(),
        };
        if watchers.is_empty() {
            return;
        }
        let state = self.snapshot();
        for watcher in watchers {
            watcher(field, &state);
        }
    }
}

impl<D: Domain> std::fmt::Debug for Store<D> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Store")
            .field("kind", &D::KIND)
            .field("scope", &self.scope)
            .finish_non_exhaustive()
    }
}

/// Type-erased envelope delivery, used by the registry's routing map.
pub(crate) trait EnvelopeTarget: Send + Sync {
    fn deliver(&self, envelope: &Envelope);
}

impl<D: Domain> EnvelopeTarget for Store<D> {
    fn deliver(&self, envelope: &Envelope) {
        self.apply_envelope(envelope);
    }
}
