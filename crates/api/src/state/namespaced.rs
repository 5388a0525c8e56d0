// Path: crates/api/src/state/namespaced.rs

//! A state access wrapper that confines a contract to its own keyspace.

use crate::state::{StateAccess, StateError};
use dnote_types::app::AccountId;

const CONTRACT_DATA_PREFIX: &[u8] = b"_contract_data::";

/// Returns the physical key prefix under which the contract deployed at
/// `address` stores its data: `_contract_data::{address}::`.
pub fn contract_namespace_prefix(address: &AccountId) -> Vec<u8> {
    [CONTRACT_DATA_PREFIX, address.as_ref(), b"::"].concat()
}

/// A wrapper that provides namespaced, isolated access to a `StateAccess` object.
///
/// Every key `k` a contract touches is physically stored as
/// `_contract_data::{address}::{k}`. Two instances of the same contract type
/// therefore never see each other's records, and a contract cannot address
/// another contract's raw keys.
pub struct NamespacedStateAccess<'a> {
    inner: &'a mut dyn StateAccess,
    prefix: Vec<u8>,
}

impl<'a> NamespacedStateAccess<'a> {
    /// Creates a namespaced accessor for the contract deployed at `address`.
    pub fn new(inner: &'a mut dyn StateAccess, address: &AccountId) -> Self {
        Self {
            inner,
            prefix: contract_namespace_prefix(address),
        }
    }

    #[inline]
    fn qualify(&self, key: &[u8]) -> Result<Vec<u8>, StateError> {
        if key.starts_with(CONTRACT_DATA_PREFIX) {
            return Err(StateError::PermissionDenied(format!(
                "attempted to access raw contract data key '{}'",
                String::from_utf8_lossy(key)
            )));
        }
        Ok([self.prefix.as_slice(), key].concat())
    }
}

impl<'a> StateAccess for NamespacedStateAccess<'a> {
    fn get(&self, key: &[u8]) -> Result<Option<Vec<u8>>, StateError> {
        self.inner.get(&self.qualify(key)?)
    }

    fn insert(&mut self, key: &[u8], value: &[u8]) -> Result<(), StateError> {
        let key = self.qualify(key)?;
        self.inner.insert(&key, value)
    }

    fn delete(&mut self, key: &[u8]) -> Result<(), StateError> {
        let key = self.qualify(key)?;
        self.inner.delete(&key)
    }

    fn batch_apply(
        &mut self,
        inserts: &[(Vec<u8>, Vec<u8>)],
        deletes: &[Vec<u8>],
    ) -> Result<(), StateError> {
        let mapped_inserts: Vec<(Vec<u8>, Vec<u8>)> = inserts
            .iter()
            .map(|(k, v)| self.qualify(k).map(|qk| (qk, v.clone())))
            .collect::<Result<_, _>>()?;
        let mapped_deletes: Vec<Vec<u8>> = deletes
            .iter()
            .map(|k| self.qualify(k))
            .collect::<Result<_, _>>()?;
        self.inner.batch_apply(&mapped_inserts, &mapped_deletes)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::InMemoryState;

    #[test]
    fn test_instances_are_isolated() {
        let mut base = InMemoryState::new();
        let a = AccountId::for_contract(0);
        let b = AccountId::for_contract(1);

        NamespacedStateAccess::new(&mut base, &a)
            .insert(b"count", b"1")
            .unwrap();
        NamespacedStateAccess::new(&mut base, &b)
            .insert(b"count", b"2")
            .unwrap();

        let view_a = NamespacedStateAccess::new(&mut base, &a);
        assert_eq!(view_a.get(b"count").unwrap(), Some(b"1".to_vec()));

        let physical = [contract_namespace_prefix(&b), b"count".to_vec()].concat();
        assert_eq!(base.get(&physical).unwrap(), Some(b"2".to_vec()));
    }

    #[test]
    fn test_raw_contract_keys_are_denied() {
        let mut base = InMemoryState::new();
        let other = AccountId::for_contract(7);
        let raw = [contract_namespace_prefix(&other), b"count".to_vec()].concat();

        let view = NamespacedStateAccess::new(&mut base, &AccountId::for_contract(0));
        assert!(matches!(
            view.get(&raw),
            Err(StateError::PermissionDenied(_))
        ));
    }
}
