// Path: crates/services/src/delegator/mod.rs
use dnote_api::contract::{Contract, ContractHost};
use dnote_api::state::StateAccess;
use dnote_types::app::{AccountId, CallData};
use dnote_types::codec;
use dnote_types::error::{StateError, TransactionError};
use dnote_types::service_configs::MethodPermission;
use parity_scale_codec::{Decode, Encode};
use std::any::Any;

pub mod calls;

// The address currently receiving forwarded requests. Absent means zero.
const TARGET_KEY: &[u8] = b"delegator::target";

pub const SET_TARGET: &str = "set_target@v1";
pub const TARGET: &str = "target@v1";

#[derive(Encode, Decode, Debug, Clone, PartialEq, Eq)]
pub struct SetTargetParams {
    pub target: AccountId,
}

/// A stable-address proxy in front of a rebindable backend contract.
///
/// Only `set_target@v1` and `target@v1` are handled locally. Every other
/// input, including bytes that are not a call envelope at all, is relayed
/// verbatim to the current target through [`ContractHost::call_contract`].
/// The backend therefore sees the delegator, not the original caller, as
/// its acting caller: notes created through the delegator are owned by the
/// delegator's address.
#[derive(Debug, Clone, Default)]
pub struct Delegator;

impl Delegator {
    pub fn target(state: &dyn StateAccess) -> Result<AccountId, TransactionError> {
        match state.get(TARGET_KEY)? {
            Some(bytes) => codec::from_bytes_canonical(&bytes)
                .map_err(|e| TransactionError::State(StateError::Decode(e))),
            None => Ok(AccountId::default()),
        }
    }

    /// Unconditionally overwrites the target. The address is not checked
    /// for a deployed contract.
    pub fn set_target(
        state: &mut dyn StateAccess,
        target: AccountId,
    ) -> Result<(), TransactionError> {
        state.insert(TARGET_KEY, &target.encode())?;
        Ok(())
    }

    fn forward(
        &self,
        host: &mut dyn ContractHost,
        input: &[u8],
    ) -> Result<Vec<u8>, TransactionError> {
        let target = Self::target(&host.storage())?;
        let ctx = *host.context();
        tracing::debug!(
            target: "delegator",
            delegator = %ctx.address,
            origin = %ctx.caller,
            to = %target,
            input_len = input.len(),
            "Forwarding call"
        );

        host.call_contract(target, input).map_err(|e| {
            tracing::warn!(target: "delegator", to = %target, error = %e, "Forwarded call failed");
            e
        })
    }
}

impl Contract for Delegator {
    fn id(&self) -> &str {
        "delegator"
    }

    fn abi_version(&self) -> u32 {
        1
    }

    fn state_schema(&self) -> &str {
        "v1"
    }

    fn abi(&self) -> &'static [(&'static str, MethodPermission)] {
        &[
            (SET_TARGET, MethodPermission::Governance),
            (TARGET, MethodPermission::User),
        ]
    }

    fn as_any(&self) -> &dyn Any {
        self
    }

    fn handle_call(
        &self,
        host: &mut dyn ContractHost,
        method: &str,
        params: &[u8],
    ) -> Result<Vec<u8>, TransactionError> {
        match method {
            SET_TARGET => {
                let p: SetTargetParams = codec::from_bytes_canonical(params)?;
                let previous = Self::target(&host.storage())?;
                Self::set_target(&mut host.storage(), p.target)?;
                tracing::info!(
                    target: "delegator",
                    caller = %host.context().caller,
                    %previous,
                    new_target = %p.target,
                    "Delegator target updated"
                );
                Ok(Vec::new())
            }
            TARGET => {
                codec::from_bytes_canonical::<()>(params)?;
                Ok(Self::target(&host.storage())?.encode())
            }
            _ => Err(TransactionError::Unsupported(format!(
                "Delegator does not support method '{}'",
                method
            ))),
        }
    }

    fn handle_raw(
        &self,
        host: &mut dyn ContractHost,
        input: &[u8],
    ) -> Result<Vec<u8>, TransactionError> {
        match codec::from_bytes_canonical::<CallData>(input) {
            Ok(call) if self.method_permission(&call.method).is_some() => {
                host.authorize(&call.method)?;
                self.handle_call(host, &call.method, &call.params)
            }
            // Not ours, or not an envelope at all: relay untouched.
            _ => self.forward(host, input),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use dnote_api::state::InMemoryState;

    #[test]
    fn test_target_defaults_to_zero() {
        let state = InMemoryState::new();
        assert!(Delegator::target(&state).unwrap().is_zero());
    }

    #[test]
    fn test_set_target_overwrites_unconditionally() {
        let mut state = InMemoryState::new();
        let first = AccountId::for_contract(1);
        let second = AccountId([0x42; 32]);

        Delegator::set_target(&mut state, first).unwrap();
        assert_eq!(Delegator::target(&state).unwrap(), first);
        Delegator::set_target(&mut state, second).unwrap();
        assert_eq!(Delegator::target(&state).unwrap(), second);
        Delegator::set_target(&mut state, AccountId::default()).unwrap();
        assert!(Delegator::target(&state).unwrap().is_zero());
    }

    #[test]
    fn test_only_proxy_methods_are_local() {
        let delegator = Delegator;
        assert_eq!(
            delegator.method_permission(SET_TARGET),
            Some(MethodPermission::Governance)
        );
        assert_eq!(delegator.method_permission(TARGET), Some(MethodPermission::User));
        assert_eq!(delegator.method_permission("create_note@v1"), None);
    }
}
