// SPDX-License-Identifier: Apache-2.0
//! Field dispatch tables and the two decode policies.
//!
//! Each domain declares its cache as a plain record plus a const slice of
//! [`Field`] entries, one per wire field. The entry's apply function owns
//! that field's decode policy:
//!
//! - [`replace`]: wholesale replacement. A well-formed payload overwrites
//!   the slot, a malformed one leaves it untouched.
//! - [`enum_code`] / [`enum_code_opt`]: closed-table mapping. The payload
//!   must be a raw integer code; a code outside the table leaves the slot
//!   untouched so a transient protocol mismatch cannot flap a valid value
//!   to a wrong one.

use serde::de::DeserializeOwned;
use stagecast_proto::codes::CodeEnum;

/// One cache field: wire name plus decode-and-store function.
#[derive(Debug, Clone, Copy)]
pub struct Field<S> {
    /// Wire name of the field (envelope `name`).
    pub name: &'static str,
    /// Applies one payload to the owning record.
    pub apply: fn(&mut S, &str) -> Applied,
}

/// Outcome of applying one payload to one field.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Applied {
    /// The field was replaced with the decoded value.
    Replaced,
    /// The payload was empty; the field keeps its current value.
    EmptyPayload,
    /// The payload did not decode; the field keeps its current value.
    BadPayload,
    /// The payload was an integer outside the field's closed code table;
    /// the field keeps its current value.
    UnknownCode(i64),
}

/// Wholesale-replace policy.
pub fn replace<T: DeserializeOwned>(slot: &mut T, payload: &str) -> Applied {
    if payload.is_empty() {
        return Applied::EmptyPayload;
    }
    match serde_json::from_str(payload) {
        Ok(value) => {
            *slot = value;
            Applied::Replaced
        }
        Err(_) => Applied::BadPayload,
    }
}

/// Closed-table policy for enum-coded fields with a concrete default.
pub fn enum_code<E: CodeEnum>(slot: &mut E, payload: &str) -> Applied {
    match decode_code::<E>(payload) {
        CodeOutcome::Mapped(value) => {
            *slot = value;
            Applied::Replaced
        }
        CodeOutcome::Empty => Applied::EmptyPayload,
        CodeOutcome::Bad => Applied::BadPayload,
        CodeOutcome::Unknown(code) => Applied::UnknownCode(code),
    }
}

/// Closed-table policy for enum-coded fields that start out unset.
pub fn enum_code_opt<E: CodeEnum>(slot: &mut Option<E>, payload: &str) -> Applied {
    match decode_code::<E>(payload) {
        CodeOutcome::Mapped(value) => {
            *slot = Some(value);
            Applied::Replaced
        }
        CodeOutcome::Empty => Applied::EmptyPayload,
        CodeOutcome::Bad => Applied::BadPayload,
        CodeOutcome::Unknown(code) => Applied::UnknownCode(code),
    }
}

enum CodeOutcome<E> {
    Mapped(E),
    Empty,
    Bad,
    Unknown(i64),
}

fn decode_code<E: CodeEnum>(payload: &str) -> CodeOutcome<E> {
    if payload.is_empty() {
        return CodeOutcome::Empty;
    }
    let Ok(code) = serde_json::from_str::<i64>(payload) else {
        return CodeOutcome::Bad;
    };
    match E::from_code(code) {
        Some(value) => CodeOutcome::Mapped(value),
        None => CodeOutcome::Unknown(code),
    }
}
