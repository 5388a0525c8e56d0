// Path: crates/services/src/note_store/calls.rs
//! Builders for raw `NoteStore` request bytes.

use super::{
    CreateNoteParams, DeleteNoteParams, GetNoteParams, ModifyNoteParams, CREATE_NOTE,
    DELETE_NOTE, GET_NOTE_BY_ID, GET_NOTE_COUNT, MODIFY_NOTE,
};
use dnote_types::app::CallData;

pub fn create_note(title: &str, content: &str, tag: &str) -> Vec<u8> {
    CallData::new(
        CREATE_NOTE,
        &CreateNoteParams {
            title: title.to_string(),
            content: content.to_string(),
            tag: tag.to_string(),
        },
    )
    .to_bytes()
}

pub fn modify_note(id: u64, title: &str, content: &str) -> Vec<u8> {
    CallData::new(
        MODIFY_NOTE,
        &ModifyNoteParams {
            id,
            title: title.to_string(),
            content: content.to_string(),
        },
    )
    .to_bytes()
}

pub fn delete_note(id: u64) -> Vec<u8> {
    CallData::new(DELETE_NOTE, &DeleteNoteParams { id }).to_bytes()
}

pub fn get_note_by_id(id: u64) -> Vec<u8> {
    CallData::new(GET_NOTE_BY_ID, &GetNoteParams { id }).to_bytes()
}

pub fn get_note_count() -> Vec<u8> {
    CallData::new(GET_NOTE_COUNT, &()).to_bytes()
}
