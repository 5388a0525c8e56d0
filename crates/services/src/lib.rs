// Path: crates/services/src/lib.rs
//! Contracts deployable on the dnote host.
//!
//! - [`note_store::NoteStore`]: id-allocating record store with soft delete.
//! - [`delegator::Delegator`]: stable-address proxy relaying raw requests to a
//!   rebindable target.
//! - [`string_handler`]: string equality/concatenation primitives, also
//!   deployable as a library contract.

pub mod delegator;
pub mod note_store;
pub mod string_handler;
