// SPDX-License-Identifier: Apache-2.0
//! Parse-with-fallback JSON decoding.
//!
//! Every inbound envelope passes through here. Failure is silent to the
//! caller and loud to the log: the result is always a concrete value, so
//! a cache can never be observed in a corrupt state.

use serde::de::DeserializeOwned;
use tracing::warn;

/// Longest payload prefix echoed into diagnostics.
const SNIPPET_LEN: usize = 80;

/// Decode `payload` as JSON, returning `fallback` on any failure.
///
/// Empty payloads resolve to the fallback without logging; malformed
/// payloads are logged and swallowed. Never panics or errors.
pub fn decode_or<T: DeserializeOwned>(payload: &str, fallback: T) -> T {
    if payload.is_empty() {
        return fallback;
    }
    match serde_json::from_str(payload) {
        Ok(value) => value,
        Err(err) => {
            warn!(payload = snippet(payload), %err, "json decode failed, using fallback");
            fallback
        }
    }
}

/// Parse an event payload into a JSON value.
///
/// An empty payload is legal (some discrete events carry no body) and
/// maps to JSON `null`. Returns `None` for malformed text; the caller
/// owns the diagnostic since it knows the event name.
pub(crate) fn parse_event_payload(payload: &str) -> Option<serde_json::Value> {
    if payload.is_empty() {
        return Some(serde_json::Value::Null);
    }
    serde_json::from_str(payload).ok()
}

/// Truncate a payload for log output.
pub(crate) fn snippet(payload: &str) -> &str {
    match payload.char_indices().nth(SNIPPET_LEN) {
        Some((idx, _)) => &payload[..idx],
        None => payload,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn valid_json_decodes() {
        assert_eq!(decode_or("42", 0u32), 42);
        assert_eq!(decode_or("\"hi\"", String::new()), "hi");
        assert_eq!(decode_or("[1,2]", Vec::<u32>::new()), vec![1, 2]);
    }

    #[test]
    fn empty_and_malformed_fall_back() {
        assert_eq!(decode_or("", 7u32), 7);
        assert_eq!(decode_or("not-json", 7u32), 7);
        assert_eq!(decode_or("{", Vec::<u32>::new()), Vec::<u32>::new());
    }

    #[test]
    fn null_is_a_value_for_options() {
        assert_eq!(decode_or::<Option<u32>>("null", Some(3)), None);
        assert_eq!(decode_or::<Option<u32>>("5", None), Some(5));
    }

    #[test]
    fn event_payload_parses_empty_as_null() {
        assert_eq!(parse_event_payload(""), Some(serde_json::Value::Null));
        assert_eq!(parse_event_payload("null"), Some(serde_json::Value::Null));
        assert!(parse_event_payload("{nope").is_none());
    }
}
