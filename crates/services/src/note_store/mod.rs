// Path: crates/services/src/note_store/mod.rs
use crate::string_handler;
use dnote_api::contract::{Contract, ContractHost};
use dnote_api::state::StateAccess;
use dnote_types::app::AccountId;
use dnote_types::codec;
use dnote_types::error::{StateError, TransactionError};
use dnote_types::service_configs::MethodPermission;
use parity_scale_codec::{Decode, Encode};
use serde::{Deserialize, Serialize};
use std::any::Any;

pub mod calls;

// Next unallocated id. Absent means 1.
const NEXT_ID_KEY: &[u8] = b"notes::next_id";
// Number of live (not yet deleted) notes. Absent means 0.
const LIVE_COUNT_KEY: &[u8] = b"notes::live_count";
// Canonical prefix for note slots: notes::record::{id_be}
const NOTE_KEY_PREFIX: &[u8] = b"notes::record::";

pub const CREATE_NOTE: &str = "create_note@v1";
pub const MODIFY_NOTE: &str = "modify_note@v1";
pub const DELETE_NOTE: &str = "delete_note@v1";
pub const GET_NOTE_BY_ID: &str = "get_note_by_id@v1";
pub const GET_NOTE_COUNT: &str = "get_note_count@v1";

#[derive(Encode, Decode, Debug, Clone, PartialEq, Eq)]
pub struct CreateNoteParams {
    pub title: String,
    pub content: String,
    pub tag: String,
}

#[derive(Encode, Decode, Debug, Clone, PartialEq, Eq)]
pub struct ModifyNoteParams {
    pub id: u64,
    pub title: String,
    pub content: String,
}

#[derive(Encode, Decode, Debug, Clone, PartialEq, Eq)]
pub struct DeleteNoteParams {
    pub id: u64,
}

#[derive(Encode, Decode, Debug, Clone, PartialEq, Eq)]
pub struct GetNoteParams {
    pub id: u64,
}

/// The `(owner, title, content, tag)` tuple returned by `get_note_by_id@v1`.
#[derive(Encode, Decode, Serialize, Deserialize, Debug, Clone, Default, PartialEq, Eq)]
pub struct NoteView {
    pub owner: AccountId,
    pub title: String,
    pub content: String,
    pub tag: String,
}

/// A note slot as stored. Slots are written once on create and never removed.
#[derive(Encode, Decode, Debug, Clone, PartialEq, Eq)]
struct NoteRecord {
    id: u64,
    owner: AccountId,
    title: String,
    content: String,
    tag: String,
    /// Cleared by the first delete. Tracked explicitly because a note may be
    /// created with empty text and still count as live.
    live: bool,
}

impl NoteRecord {
    fn is_blank(&self) -> bool {
        string_handler::equals(&self.title, "")
            && string_handler::equals(&self.content, "")
            && string_handler::equals(&self.tag, "")
    }

    fn view(&self) -> NoteView {
        NoteView {
            owner: self.owner,
            title: self.title.clone(),
            content: self.content.clone(),
            tag: self.tag.clone(),
        }
    }
}

fn missing_slot(id: u64) -> TransactionError {
    TransactionError::State(StateError::Backend(format!(
        "allocated note slot {} is missing",
        id
    )))
}

fn note_key(id: u64) -> Vec<u8> {
    [NOTE_KEY_PREFIX, &id.to_be_bytes()].concat()
}

fn read_u64(state: &dyn StateAccess, key: &[u8], default: u64) -> Result<u64, TransactionError> {
    match state.get(key)? {
        Some(bytes) => codec::from_bytes_canonical(&bytes)
            .map_err(|e| TransactionError::State(StateError::Decode(e))),
        None => Ok(default),
    }
}

/// Keyed note store with an id allocator, a live-note counter and soft delete.
///
/// Ids start at 1 and are never reused. Deleting a note blanks its text but
/// keeps its slot and owner, so `get_note_by_id` on a deleted id still reports
/// who created it.
#[derive(Debug, Clone, Default)]
pub struct NoteStore;

impl NoteStore {
    pub fn next_id(state: &dyn StateAccess) -> Result<u64, TransactionError> {
        read_u64(state, NEXT_ID_KEY, 1)
    }

    pub fn live_count(state: &dyn StateAccess) -> Result<u64, TransactionError> {
        read_u64(state, LIVE_COUNT_KEY, 0)
    }

    fn load(state: &dyn StateAccess, id: u64) -> Result<Option<NoteRecord>, TransactionError> {
        match state.get(&note_key(id))? {
            Some(bytes) => codec::from_bytes_canonical(&bytes)
                .map(Some)
                .map_err(|e| TransactionError::State(StateError::Decode(e))),
            None => Ok(None),
        }
    }

    /// Loads the slot for an id that must already be allocated.
    fn load_allocated(state: &dyn StateAccess, id: u64) -> Result<NoteRecord, TransactionError> {
        let next_id = Self::next_id(state)?;
        if id == 0 || id >= next_id {
            return Err(TransactionError::OutOfRangeId { id, next_id });
        }
        Self::load(state, id)?.ok_or_else(|| missing_slot(id))
    }

    fn store(state: &mut dyn StateAccess, record: &NoteRecord) -> Result<(), TransactionError> {
        state.insert(&note_key(record.id), &record.encode())?;
        Ok(())
    }

    pub fn create_note(
        state: &mut dyn StateAccess,
        owner: AccountId,
        params: CreateNoteParams,
    ) -> Result<u64, TransactionError> {
        let id = Self::next_id(state)?;
        let next_id = id
            .checked_add(1)
            .ok_or_else(|| TransactionError::Overflow("note id allocator".into()))?;
        let live_count = Self::live_count(state)?
            .checked_add(1)
            .ok_or_else(|| TransactionError::Overflow("live note count".into()))?;

        let record = NoteRecord {
            id,
            owner,
            title: params.title,
            content: params.content,
            tag: params.tag,
            live: true,
        };
        Self::store(state, &record)?;
        state.insert(NEXT_ID_KEY, &next_id.encode())?;
        state.insert(LIVE_COUNT_KEY, &live_count.encode())?;

        tracing::info!(target: "note_store", id, %owner, live_count, "Note created");
        Ok(id)
    }

    /// Overwrites title and content. Tag, owner and liveness are untouched,
    /// so modifying a deleted slot writes its text without reviving it.
    pub fn modify_note(
        state: &mut dyn StateAccess,
        params: ModifyNoteParams,
    ) -> Result<(), TransactionError> {
        let mut record = Self::load_allocated(state, params.id)?;
        record.title = params.title;
        record.content = params.content;
        Self::store(state, &record)?;

        tracing::debug!(target: "note_store", id = record.id, live = record.live, "Note modified");
        Ok(())
    }

    /// Blanks title, content and tag. The live count drops only if the note
    /// was live before this call.
    pub fn delete_note(
        state: &mut dyn StateAccess,
        params: DeleteNoteParams,
    ) -> Result<(), TransactionError> {
        let mut record = Self::load_allocated(state, params.id)?;
        if !record.live && record.is_blank() {
            tracing::debug!(target: "note_store", id = record.id, "Note already deleted");
            return Ok(());
        }

        let was_live = record.live;
        record.title.clear();
        record.content.clear();
        record.tag.clear();
        record.live = false;
        Self::store(state, &record)?;

        if was_live {
            // A live slot implies a positive count; a zero here means the
            // counter and the slots disagree.
            let live_count = Self::live_count(state)?.checked_sub(1).ok_or_else(|| {
                TransactionError::State(StateError::Backend(
                    "live note count underflow".into(),
                ))
            })?;
            state.insert(LIVE_COUNT_KEY, &live_count.encode())?;
            tracing::info!(target: "note_store", id = record.id, live_count, "Note deleted");
        }
        Ok(())
    }

    /// Pure read. Ids outside `[1, next_id)` yield the default view instead
    /// of an error; a missing slot inside the range is a backend fault.
    pub fn get_note_by_id(state: &dyn StateAccess, id: u64) -> Result<NoteView, TransactionError> {
        let next_id = Self::next_id(state)?;
        if id == 0 || id >= next_id {
            return Ok(NoteView::default());
        }
        Self::load(state, id)?
            .map(|record| record.view())
            .ok_or_else(|| missing_slot(id))
    }

    pub fn get_note_count(state: &dyn StateAccess) -> Result<u64, TransactionError> {
        Self::live_count(state)
    }
}

impl Contract for NoteStore {
    fn id(&self) -> &str {
        "note_store"
    }

    fn abi_version(&self) -> u32 {
        1
    }

    fn state_schema(&self) -> &str {
        "v1"
    }

    fn abi(&self) -> &'static [(&'static str, MethodPermission)] {
        &[
            (CREATE_NOTE, MethodPermission::User),
            (MODIFY_NOTE, MethodPermission::User),
            (DELETE_NOTE, MethodPermission::User),
            (GET_NOTE_BY_ID, MethodPermission::User),
            (GET_NOTE_COUNT, MethodPermission::User),
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
        let caller = host.context().caller;
        let mut state = host.storage();

        match method {
            CREATE_NOTE => {
                let p: CreateNoteParams = codec::from_bytes_canonical(params)?;
                let id = Self::create_note(&mut state, caller, p)?;
                Ok(id.encode())
            }
            MODIFY_NOTE => {
                let p: ModifyNoteParams = codec::from_bytes_canonical(params)?;
                Self::modify_note(&mut state, p)?;
                Ok(Vec::new())
            }
            DELETE_NOTE => {
                let p: DeleteNoteParams = codec::from_bytes_canonical(params)?;
                Self::delete_note(&mut state, p)?;
                Ok(Vec::new())
            }
            GET_NOTE_BY_ID => {
                let p: GetNoteParams = codec::from_bytes_canonical(params)?;
                Ok(Self::get_note_by_id(&state, p.id)?.encode())
            }
            GET_NOTE_COUNT => {
                codec::from_bytes_canonical::<()>(params)?;
                Ok(Self::get_note_count(&state)?.encode())
            }
            _ => Err(TransactionError::Unsupported(format!(
                "NoteStore does not support method '{}'",
                method
            ))),
        }
    }
}
