// Path: crates/services/src/delegator/calls.rs
//! Builders for raw `Delegator` request bytes.

use super::{SetTargetParams, SET_TARGET, TARGET};
use dnote_types::app::{AccountId, CallData};

pub fn set_target(target: AccountId) -> Vec<u8> {
    CallData::new(SET_TARGET, &SetTargetParams { target }).to_bytes()
}

pub fn target() -> Vec<u8> {
    CallData::new(TARGET, &()).to_bytes()
}
