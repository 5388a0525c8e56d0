// Path: crates/api/src/contract/context.rs
//! Defines the stable context for one contract invocation.

use dnote_types::app::AccountId;

/// Provides read-only identity context to a contract during execution.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CallContext {
    /// The acting caller of this invocation. For a top-level call this is the
    /// external caller; for a nested call it is the address of the contract
    /// that made it. This is the authoritative identity for ownership.
    pub caller: AccountId,
    /// The address of the contract being executed.
    pub address: AccountId,
    /// Nesting depth: 1 for a top-level call.
    pub depth: u32,
    /// If true, the call is a query and its writes are discarded.
    pub simulation: bool,
}
