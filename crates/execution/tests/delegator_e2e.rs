// Path: crates/execution/tests/delegator_e2e.rs
//! The note lifecycle driven through the delegator, checked against the
//! note store's own view of its state.

use anyhow::Result;
use dnote_execution::{deploy_standard, Deployment, Host};
use dnote_services::delegator;
use dnote_services::note_store::{calls, NoteView};
use dnote_types::app::AccountId;
use dnote_types::codec;
use dnote_types::config::HostConfig;

fn user() -> AccountId {
    AccountId([0x0a; 32])
}

fn setup() -> Result<(Host, Deployment)> {
    let mut host = Host::in_memory(&HostConfig::default());
    let deployment = deploy_standard(&mut host);
    host.call(
        user(),
        deployment.delegator,
        &delegator::calls::set_target(deployment.note_store),
    )?;
    Ok((host, deployment))
}

fn note(host: &Host, store: AccountId, id: u64) -> Result<NoteView> {
    let bytes = host.query(user(), store, &calls::get_note_by_id(id))?;
    codec::from_bytes_canonical(&bytes).map_err(anyhow::Error::msg)
}

fn count(host: &Host, store: AccountId) -> Result<u64> {
    let bytes = host.query(user(), store, &calls::get_note_count())?;
    codec::from_bytes_canonical(&bytes).map_err(anyhow::Error::msg)
}

#[test]
fn test_delegator_note_lifecycle() -> Result<()> {
    let (mut host, d) = setup()?;

    // Fresh store.
    assert_eq!(count(&host, d.note_store)?, 0);

    // Target is readable through the proxy-local accessor.
    let target_bytes = host.query(user(), d.delegator, &delegator::calls::target())?;
    let target: AccountId = codec::from_bytes_canonical(&target_bytes).map_err(anyhow::Error::msg)?;
    assert_eq!(target, d.note_store);

    // Create through the proxy: the proxy, not the user, owns the note.
    let title = "my first blockchain note2";
    let content = "experience the on-chain note2";
    let tag = "blockchain2";
    let id_bytes = host.call(user(), d.delegator, &calls::create_note(title, content, tag))?;
    let id: u64 = codec::from_bytes_canonical(&id_bytes).map_err(anyhow::Error::msg)?;
    assert_eq!(id, 1);
    assert_eq!(
        note(&host, d.note_store, 1)?,
        NoteView {
            owner: d.delegator,
            title: title.into(),
            content: content.into(),
            tag: tag.into(),
        }
    );

    // Modify through the proxy.
    let out = host.call(user(), d.delegator, &calls::modify_note(1, "new title", "new content"))?;
    assert!(out.is_empty());
    let modified = note(&host, d.note_store, 1)?;
    assert_eq!(modified.title, "new title");
    assert_eq!(modified.content, "new content");
    assert_eq!(modified.tag, tag);
    assert_eq!(modified.owner, d.delegator);
    assert_eq!(count(&host, d.note_store)?, 1);

    // Delete through the proxy.
    host.call(user(), d.delegator, &calls::delete_note(1))?;
    let deleted = note(&host, d.note_store, 1)?;
    assert_eq!(deleted.title, "");
    assert_eq!(deleted.content, "");
    assert_eq!(deleted.tag, "");
    assert_eq!(deleted.owner, d.delegator);
    assert_eq!(count(&host, d.note_store)?, 0);

    Ok(())
}

#[test]
fn test_direct_and_proxied_reads_return_identical_bytes() -> Result<()> {
    let (mut host, d) = setup()?;
    host.call(user(), d.note_store, &calls::create_note("t", "c", "g"))?;

    for input in [calls::get_note_by_id(1), calls::get_note_by_id(5), calls::get_note_count()] {
        let direct = host.query(user(), d.note_store, &input)?;
        let proxied = host.query(user(), d.delegator, &input)?;
        assert_eq!(direct, proxied);
    }
    Ok(())
}

#[test]
fn test_direct_caller_owns_its_notes() -> Result<()> {
    let (mut host, d) = setup()?;
    host.call(user(), d.note_store, &calls::create_note("direct", "c", "g"))?;
    host.call(user(), d.delegator, &calls::create_note("proxied", "c", "g"))?;

    assert_eq!(note(&host, d.note_store, 1)?.owner, user());
    assert_eq!(note(&host, d.note_store, 2)?.owner, d.delegator);
    assert_eq!(count(&host, d.note_store)?, 2);
    Ok(())
}

#[test]
fn test_ids_are_not_reused_across_deletes() -> Result<()> {
    let (mut host, d) = setup()?;
    for expected in 1..=3u64 {
        let bytes = host.call(user(), d.delegator, &calls::create_note("t", "c", "g"))?;
        assert_eq!(codec::from_bytes_canonical::<u64>(&bytes).map_err(anyhow::Error::msg)?, expected);
    }
    host.call(user(), d.delegator, &calls::delete_note(3))?;
    host.call(user(), d.delegator, &calls::delete_note(3))?;
    assert_eq!(count(&host, d.note_store)?, 2);

    let bytes = host.call(user(), d.delegator, &calls::create_note("t", "c", "g"))?;
    assert_eq!(codec::from_bytes_canonical::<u64>(&bytes).map_err(anyhow::Error::msg)?, 4);
    assert_eq!(count(&host, d.note_store)?, 3);
    Ok(())
}
