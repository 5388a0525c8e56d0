// Path: crates/execution/src/lib.rs
#![forbid(unsafe_code)]

//! # dnote Execution
//!
//! The host that owns committed state and the deployed contracts, and runs
//! calls one at a time.
//!
//! Every top-level [`Host::call`] executes inside a fresh
//! [`StateOverlay`](dnote_api::state::StateOverlay). Nested contract-to-contract
//! calls write into the same overlay, so a forwarded operation and everything
//! it triggers commit together or not at all.

mod frame;
pub mod genesis;
mod host;

pub use genesis::{deploy_standard, Deployment};
pub use host::{ExecutionLimits, Host};
