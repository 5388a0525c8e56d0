// Path: crates/execution/src/frame.rs

//! One invocation of a contract, and the recursive dispatcher that creates them.

use crate::host::ExecutionLimits;
use dnote_api::contract::{AccessPolicy, CallContext, Contract, ContractDirectory, ContractHost};
use dnote_api::state::{NamespacedStateAccess, StateAccess};
use dnote_types::app::AccountId;
use dnote_types::error::TransactionError;
use dnote_types::service_configs::MethodPermission;

/// Everything that stays fixed for the duration of a top-level call.
pub(crate) struct Env<'a> {
    pub directory: &'a ContractDirectory,
    pub policy: &'a dyn AccessPolicy,
    pub limits: ExecutionLimits,
}

/// The `ContractHost` handed to a running contract.
struct CallFrame<'a> {
    state: &'a mut dyn StateAccess,
    env: &'a Env<'a>,
    contract: &'a dyn Contract,
    ctx: CallContext,
}

impl<'a> ContractHost for CallFrame<'a> {
    fn context(&self) -> &CallContext {
        &self.ctx
    }

    fn storage(&mut self) -> NamespacedStateAccess<'_> {
        NamespacedStateAccess::new(&mut *self.state, &self.ctx.address)
    }

    fn authorize(&self, method: &str) -> Result<(), TransactionError> {
        let permission = self
            .contract
            .method_permission(method)
            .unwrap_or(MethodPermission::User);
        self.env
            .policy
            .check(&self.ctx, self.contract.id(), method, permission)
    }

    fn call_contract(
        &mut self,
        target: AccountId,
        input: &[u8],
    ) -> Result<Vec<u8>, TransactionError> {
        let ctx = CallContext {
            caller: self.ctx.address,
            address: target,
            depth: self.ctx.depth.saturating_add(1),
            simulation: self.ctx.simulation,
        };
        dispatch(&mut *self.state, self.env, ctx, input)
    }
}

/// Runs the contract at `ctx.address` against `state`.
///
/// Limits are checked before the contract is looked up, so a runaway
/// forwarding loop fails with `CallDepthExceeded` even if its target is bogus.
pub(crate) fn dispatch(
    state: &mut dyn StateAccess,
    env: &Env<'_>,
    ctx: CallContext,
    input: &[u8],
) -> Result<Vec<u8>, TransactionError> {
    if ctx.depth > env.limits.max_call_depth {
        return Err(TransactionError::CallDepthExceeded(env.limits.max_call_depth));
    }
    if input.len() > env.limits.max_input_bytes {
        return Err(TransactionError::InputTooLarge {
            len: input.len(),
            max: env.limits.max_input_bytes,
        });
    }

    let contract = env
        .directory
        .get(&ctx.address)
        .ok_or(TransactionError::UnknownContract(ctx.address))?;

    tracing::debug!(
        target: "host",
        depth = ctx.depth,
        contract = contract.id(),
        caller = %ctx.caller,
        address = %ctx.address,
        "Dispatching call"
    );

    let mut frame = CallFrame {
        state,
        env,
        contract: &**contract,
        ctx,
    };
    contract.handle_raw(&mut frame, input)
}
