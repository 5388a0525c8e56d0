// Path: crates/telemetry/src/lib.rs
//! Observability for dnote binaries.

pub mod init;

pub use init::init_tracing;
