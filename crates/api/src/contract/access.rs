// Path: crates/api/src/contract/access.rs

//! Address-based lookup of deployed contracts.

use crate::contract::Contract;
use dnote_types::app::AccountId;
use std::collections::BTreeMap;
use std::fmt;
use std::sync::Arc;

/// The registry of deployed contract instances, keyed by address.
#[derive(Clone, Default)]
pub struct ContractDirectory {
    by_address: BTreeMap<AccountId, Arc<dyn Contract>>,
}

impl fmt::Debug for ContractDirectory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ContractDirectory")
            .field("contract_count", &self.by_address.len())
            .finish()
    }
}

impl ContractDirectory {
    /// Creates an empty directory.
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers `contract` at `address`, returning the instance it replaced.
    pub fn insert(
        &mut self,
        address: AccountId,
        contract: Arc<dyn Contract>,
    ) -> Option<Arc<dyn Contract>> {
        self.by_address.insert(address, contract)
    }

    /// Gets the contract deployed at `address`.
    pub fn get(&self, address: &AccountId) -> Option<&Arc<dyn Contract>> {
        self.by_address.get(address)
    }

    /// Gets the contract deployed at `address` as its concrete type.
    pub fn get_as<T: Contract>(&self, address: &AccountId) -> Option<&T> {
        self.get(address)
            .and_then(|contract| contract.as_any().downcast_ref::<T>())
    }

    /// Number of deployed contracts.
    pub fn len(&self) -> usize {
        self.by_address.len()
    }

    /// Returns true if nothing is deployed.
    pub fn is_empty(&self) -> bool {
        self.by_address.is_empty()
    }

    /// Iterates deployed contracts in address order.
    pub fn iter(&self) -> impl Iterator<Item = (&AccountId, &Arc<dyn Contract>)> {
        self.by_address.iter()
    }
}
