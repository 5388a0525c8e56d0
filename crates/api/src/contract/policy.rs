// Path: crates/api/src/contract/policy.rs

//! The capability-check hook consulted before privileged contract methods.

use crate::contract::CallContext;
use dnote_types::error::TransactionError;
use dnote_types::service_configs::MethodPermission;

/// Decides whether the acting caller may invoke a method.
pub trait AccessPolicy: Send + Sync {
    /// Returns `Ok(())` to allow the call or an `Unauthorized` error to reject it.
    fn check(
        &self,
        ctx: &CallContext,
        contract_id: &str,
        method: &str,
        permission: MethodPermission,
    ) -> Result<(), TransactionError>;
}

/// Allows every call regardless of the declared permission.
///
/// This is the policy the host installs by default. In particular anyone may
/// rebind a delegator's target; that is a known gap, kept visible here rather
/// than papered over.
#[derive(Debug, Clone, Copy, Default)]
pub struct PermissiveAccessPolicy;

impl AccessPolicy for PermissiveAccessPolicy {
    fn check(
        &self,
        ctx: &CallContext,
        contract_id: &str,
        method: &str,
        permission: MethodPermission,
    ) -> Result<(), TransactionError> {
        if permission != MethodPermission::User {
            tracing::debug!(
                target: "access",
                caller = %ctx.caller,
                contract = contract_id,
                method,
                ?permission,
                "Privileged method allowed by permissive policy"
            );
        }
        Ok(())
    }
}
