// Path: crates/execution/src/genesis.rs

//! The standard deployment: string library, note store, then the delegator.

use crate::host::Host;
use dnote_api::state::StateAccess;
use dnote_services::delegator::Delegator;
use dnote_services::note_store::NoteStore;
use dnote_services::string_handler::StringHandler;
use dnote_types::app::AccountId;
use serde::Serialize;
use std::sync::Arc;

/// Addresses produced by [`deploy_standard`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Deployment {
    pub string_handler: AccountId,
    pub note_store: AccountId,
    pub delegator: AccountId,
}

/// Deploys the three standard contracts in dependency order.
///
/// The delegator starts with no target; binding it is an ordinary
/// `set_target@v1` call.
pub fn deploy_standard<S: StateAccess>(host: &mut Host<S>) -> Deployment {
    let string_handler = host.deploy(Arc::new(StringHandler));
    let note_store = host.deploy(Arc::new(NoteStore));
    let delegator = host.deploy(Arc::new(Delegator));
    Deployment {
        string_handler,
        note_store,
        delegator,
    }
}
