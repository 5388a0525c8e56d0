// Path: crates/api/src/state/mod.rs
//! Key-value state access and the views the host layers over it.
//!
//! - `StateAccess`: basic key-value store operations.
//! - `StateOverlay`: buffers a call's writes until the host commits or drops them.
//! - `NamespacedStateAccess`: confines a contract to its own key prefix.
//! - `InMemoryState`: the committed backing map used by the host.

pub use dnote_types::error::StateError;

mod accessor;
mod memory;
pub mod namespaced;
mod overlay;

pub use accessor::*;
pub use memory::*;
pub use namespaced::{contract_namespace_prefix, NamespacedStateAccess};
pub use overlay::*;
