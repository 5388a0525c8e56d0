// Path: crates/api/src/contract/mod.rs
//! Traits for deployable contracts and the host environment they run in.

use crate::state::NamespacedStateAccess;
use dnote_types::app::{AccountId, CallData};
use dnote_types::codec;
use dnote_types::error::TransactionError;
use dnote_types::service_configs::MethodPermission;
use std::any::Any;

pub mod access;
pub mod context;
pub mod policy;

pub use access::ContractDirectory;
pub use context::CallContext;
pub use policy::{AccessPolicy, PermissiveAccessPolicy};

/// The environment a running contract sees.
///
/// The host hands one of these to every invocation. It scopes storage to the
/// executing contract and lets the contract call other contracts by address
/// without knowing their concrete types.
pub trait ContractHost {
    /// Identities and depth of the current invocation.
    fn context(&self) -> &CallContext;

    /// The executing contract's private, namespaced state. All writes are
    /// buffered in the enclosing call's overlay.
    fn storage(&mut self) -> NamespacedStateAccess<'_>;

    /// Runs the host's access policy for one of the executing contract's
    /// methods, using the permission the contract declares in its ABI.
    fn authorize(&self, method: &str) -> Result<(), TransactionError>;

    /// Calls the contract deployed at `target` with raw request bytes.
    ///
    /// The callee sees the executing contract's address as its caller. The
    /// callee's result bytes are returned untouched, and its error is
    /// returned as-is.
    fn call_contract(
        &mut self,
        target: AccountId,
        input: &[u8],
    ) -> Result<Vec<u8>, TransactionError>;
}

/// The base trait for any contract deployable on the host.
pub trait Contract: Any + Send + Sync {
    /// A unique, static, lowercase identifier for the contract type.
    fn id(&self) -> &str;

    /// The version of the call ABI the contract implements.
    fn abi_version(&self) -> u32;

    /// A string identifying the schema of the state this contract reads/writes.
    fn state_schema(&self) -> &str;

    /// The contract's public methods and the permission each one declares.
    fn abi(&self) -> &'static [(&'static str, MethodPermission)];

    /// Provides access to the concrete type for downcasting.
    fn as_any(&self) -> &dyn Any;

    /// Handles a decoded call.
    ///
    /// # Default Implementation
    /// Returns an `Unsupported` error. Contracts override this to expose
    /// callable methods.
    fn handle_call(
        &self,
        host: &mut dyn ContractHost,
        method: &str,
        params: &[u8],
    ) -> Result<Vec<u8>, TransactionError> {
        let _ = (host, params);
        Err(TransactionError::Unsupported(format!(
            "Contract '{}' does not implement method '{}'",
            self.id(),
            method
        )))
    }

    /// Entry point for raw request bytes. The host always enters a contract
    /// through here.
    ///
    /// # Default Implementation
    /// Decodes a [`CallData`] envelope, consults the access policy and
    /// dispatches to [`Contract::handle_call`]. Contracts that must see the
    /// undecoded bytes (such as a forwarder) override this.
    fn handle_raw(
        &self,
        host: &mut dyn ContractHost,
        input: &[u8],
    ) -> Result<Vec<u8>, TransactionError> {
        let call: CallData = codec::from_bytes_canonical(input)?;
        host.authorize(&call.method)?;
        self.handle_call(host, &call.method, &call.params)
    }

    /// Looks up the permission declared for `method`, if it is part of the ABI.
    fn method_permission(&self, method: &str) -> Option<MethodPermission> {
        self.abi()
            .iter()
            .find(|(name, _)| *name == method)
            .map(|(_, permission)| *permission)
    }
}
