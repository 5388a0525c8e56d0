// Path: crates/types/src/service_configs.rs

//! Permission levels attached to contract methods.

use parity_scale_codec::{Decode, Encode};
use serde::{Deserialize, Serialize};

/// Defines the permission level a contract declares for one of its methods.
///
/// The declaration is advisory: it is handed to the host's access policy,
/// which decides whether it is enforced.
#[derive(Serialize, Deserialize, Encode, Decode, Clone, Copy, Debug, PartialEq, Eq)]
pub enum MethodPermission {
    /// Callable by any caller.
    User,
    /// Intended for an administrative caller (e.g. rebinding a proxy target).
    Governance,
}
