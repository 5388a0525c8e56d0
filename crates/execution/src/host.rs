// Path: crates/execution/src/host.rs

//! The serial execution host.

use crate::frame::{dispatch, Env};
use dnote_api::contract::{
    AccessPolicy, CallContext, Contract, ContractDirectory, PermissiveAccessPolicy,
};
use dnote_api::state::{InMemoryState, StateAccess, StateOverlay};
use dnote_types::app::AccountId;
use dnote_types::config::HostConfig;
use dnote_types::error::{ErrorCode, TransactionError};
use std::sync::Arc;

/// Resource ceilings applied to every call. Hitting one aborts the whole
/// top-level call with full rollback.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ExecutionLimits {
    /// Maximum nesting depth; a top-level call has depth 1.
    pub max_call_depth: u32,
    /// Maximum raw request size accepted at any depth.
    pub max_input_bytes: usize,
}

impl From<&HostConfig> for ExecutionLimits {
    fn from(config: &HostConfig) -> Self {
        Self {
            max_call_depth: config.max_call_depth,
            max_input_bytes: config.max_input_bytes,
        }
    }
}

impl Default for ExecutionLimits {
    fn default() -> Self {
        Self::from(&HostConfig::default())
    }
}

/// Owns the committed state and the deployed contracts and executes calls
/// one at a time.
///
/// Mutating entry points take `&mut self`, which is what gives the system its
/// total serial order: a call runs to commit or rollback before the next one
/// can start.
pub struct Host<S: StateAccess = InMemoryState> {
    state: S,
    directory: ContractDirectory,
    policy: Arc<dyn AccessPolicy>,
    limits: ExecutionLimits,
    deploy_nonce: u64,
}

impl Host<InMemoryState> {
    /// Creates a host over fresh in-memory state.
    pub fn in_memory(config: &HostConfig) -> Self {
        Self::new(InMemoryState::new(), config)
    }
}

impl<S: StateAccess> Host<S> {
    /// Creates a host over `state` with the permissive access policy.
    pub fn new(state: S, config: &HostConfig) -> Self {
        Self {
            state,
            directory: ContractDirectory::new(),
            policy: Arc::new(PermissiveAccessPolicy),
            limits: ExecutionLimits::from(config),
            deploy_nonce: 0,
        }
    }

    /// Replaces the access policy consulted by privileged contract methods.
    pub fn with_policy(mut self, policy: Arc<dyn AccessPolicy>) -> Self {
        self.policy = policy;
        self
    }

    /// Deploys a contract instance at a fresh address and returns it.
    pub fn deploy(&mut self, contract: Arc<dyn Contract>) -> AccountId {
        let address = AccountId::for_contract(self.deploy_nonce);
        self.deploy_nonce += 1;
        tracing::info!(
            target: "host",
            contract = contract.id(),
            abi_version = contract.abi_version(),
            state_schema = contract.state_schema(),
            %address,
            "Contract deployed"
        );
        self.directory.insert(address, contract);
        address
    }

    /// The deployed contracts.
    pub fn directory(&self) -> &ContractDirectory {
        &self.directory
    }

    /// The committed state.
    pub fn state(&self) -> &S {
        &self.state
    }

    /// Executes a call from `caller` to the contract at `target` and commits
    /// its writes if, and only if, the call and every nested call succeed.
    pub fn call(
        &mut self,
        caller: AccountId,
        target: AccountId,
        input: &[u8],
    ) -> Result<Vec<u8>, TransactionError> {
        let (output, (inserts, deletes)) = {
            let mut overlay = StateOverlay::new(&self.state);
            let output = self.run(&mut overlay, caller, target, input, false)?;
            (output, overlay.into_ordered_batch())
        };
        self.state.batch_apply(&inserts, &deletes)?;
        tracing::info!(
            target: "host",
            %caller,
            %target,
            writes = inserts.len() + deletes.len(),
            output_len = output.len(),
            "Call committed"
        );
        Ok(output)
    }

    /// Executes a call exactly like [`Host::call`] but always discards its
    /// writes.
    pub fn query(
        &self,
        caller: AccountId,
        target: AccountId,
        input: &[u8],
    ) -> Result<Vec<u8>, TransactionError> {
        let mut overlay = StateOverlay::new(&self.state);
        self.run(&mut overlay, caller, target, input, true)
    }

    fn run(
        &self,
        overlay: &mut StateOverlay<'_>,
        caller: AccountId,
        target: AccountId,
        input: &[u8],
        simulation: bool,
    ) -> Result<Vec<u8>, TransactionError> {
        let env = Env {
            directory: &self.directory,
            policy: &*self.policy,
            limits: self.limits,
        };
        let ctx = CallContext {
            caller,
            address: target,
            depth: 1,
            simulation,
        };
        dispatch(overlay, &env, ctx, input).map_err(|e| {
            tracing::warn!(
                target: "host",
                %caller,
                %target,
                simulation,
                code = e.code(),
                error = %e,
                "Call rolled back"
            );
            e
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use dnote_services::note_store::{calls, NoteStore};

    fn caller() -> AccountId {
        AccountId([0x11; 32])
    }

    #[test]
    fn test_deploy_assigns_distinct_addresses() {
        let mut host = Host::in_memory(&HostConfig::default());
        let a = host.deploy(Arc::new(NoteStore));
        let b = host.deploy(Arc::new(NoteStore));
        assert_ne!(a, b);
        assert_eq!(host.directory().len(), 2);
        assert!(host.directory().get_as::<NoteStore>(&a).is_some());
    }

    #[test]
    fn test_call_to_unknown_address_fails() {
        let mut host = Host::in_memory(&HostConfig::default());
        let nowhere = AccountId([0x99; 32]);
        let err = host
            .call(caller(), nowhere, &calls::get_note_count())
            .unwrap_err();
        assert_eq!(err, TransactionError::UnknownContract(nowhere));
    }

    #[test]
    fn test_oversized_input_is_rejected_without_writes() {
        let config = HostConfig {
            max_input_bytes: 16,
            ..HostConfig::default()
        };
        let mut host = Host::in_memory(&config);
        let store = host.deploy(Arc::new(NoteStore));

        let input = calls::create_note("a title longer than the limit", "c", "t");
        let err = host.call(caller(), store, &input).unwrap_err();
        assert!(matches!(err, TransactionError::InputTooLarge { max: 16, .. }));
        assert!(host.state().is_empty());
    }

    #[test]
    fn test_query_discards_writes() {
        let mut host = Host::in_memory(&HostConfig::default());
        let store = host.deploy(Arc::new(NoteStore));

        let id = host
            .query(caller(), store, &calls::create_note("t", "c", "g"))
            .unwrap();
        assert_eq!(id, 1u64.to_le_bytes().to_vec());
        assert!(host.state().is_empty());

        host.call(caller(), store, &calls::create_note("t", "c", "g"))
            .unwrap();
        assert!(!host.state().is_empty());
    }

    #[test]
    fn test_malformed_envelope_is_a_decode_error() {
        let mut host = Host::in_memory(&HostConfig::default());
        let store = host.deploy(Arc::new(NoteStore));
        let err = host.call(caller(), store, &[0xff, 0x01]).unwrap_err();
        assert!(matches!(err, TransactionError::Deserialization(_)));
    }
}
