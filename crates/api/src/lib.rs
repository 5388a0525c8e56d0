// Path: crates/api/src/lib.rs
#![forbid(unsafe_code)]
#![deny(missing_docs)]

//! # dnote API
//!
//! Core traits that connect contracts to the execution host:
//!
//! - [`state::StateAccess`]: the key-value interface every state view implements.
//! - [`state::StateOverlay`]: the copy-on-write buffer that makes a call atomic.
//! - [`state::NamespacedStateAccess`]: a contract's private slice of the state.
//! - [`contract::Contract`]: a deployable unit of logic dispatched by method selector.
//! - [`contract::ContractHost`]: what a running contract may ask of the host,
//!   including calling another contract by address.

/// Contract, host-environment and access-policy traits.
pub mod contract;
/// Key-value state traits and the views built on them.
pub mod state;
