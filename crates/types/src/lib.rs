// Path: crates/types/src/lib.rs
#![forbid(unsafe_code)]
#![deny(missing_docs)]

//! # dnote Types
//!
//! The foundational library for dnote, containing the identities, call
//! envelope, canonical codec, error enums and configuration objects shared by
//! every other crate in the workspace.
//!
//! ## Architectural Role
//!
//! As the base crate, `dnote-types` has minimal dependencies. Contracts, the
//! execution host and the CLI all agree on wire and state bytes by going
//! through [`codec`].

/// Application-level data structures like `AccountId` and `CallData`.
pub mod app;
/// The canonical, deterministic binary codec for wire and state bytes.
pub mod codec;
/// Shared configuration structures (e.g., `HostConfig`).
pub mod config;
/// A unified set of all error types used across the workspace.
pub mod error;
/// Method permission levels consulted by the access policy hook.
pub mod service_configs;
