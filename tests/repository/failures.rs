//! Behavior when the store refuses reads or writes.

use crate::common::*;
use intake::Error;

fn flaky_repo() -> (FlakyStore<MemoryStore>, FormRepository<FlakyStore<MemoryStore>>) {
    init_tracing();
    let store = FlakyStore::new(MemoryStore::new());
    let repo = FormRepository::open(store.clone(), RepositoryOptions::default()).unwrap();
    (store, repo)
}

#[test]
fn failed_save_keeps_memory_and_reports() {
    let (store, mut repo) = flaky_repo();
    repo.update_current_draft([("nombre", "Ana")]).unwrap();

    store.fail_writes(true);
    let err = repo.save_current_draft().unwrap_err();
    assert!(err.is_persistence());
    assert!(matches!(&err, Error::Persistence { key, .. } if key == "santaRosaForms"));

    assert_eq!(repo.len(), 1);
    assert!(!repo.is_durable());
    assert_eq!(repo.pending_writes(), vec!["santaRosaForms"]);
}

#[test]
fn flush_retries_pending_writes() {
    let (store, mut repo) = flaky_repo();
    store.fail_writes(true);
    let _ = repo.update_current_draft([("nombre", "Ana")]);
    let _ = repo.save_current_draft();
    assert_eq!(repo.pending_writes().len(), 2);

    assert!(repo.flush().is_err());
    store.fail_writes(false);
    repo.flush().unwrap();
    assert!(repo.is_durable());

    let restored = FormRepository::open(store.inner().clone(), RepositoryOptions::default()).unwrap();
    assert_eq!(restored.len(), 1);
    assert_eq!(restored.current_draft().text("nombre"), "Ana");
}

#[test]
fn later_successful_write_clears_pending() {
    let (store, mut repo) = flaky_repo();
    store.fail_next_writes(1);
    assert!(repo.update_current_draft([("nombre", "Ana")]).is_err());
    assert!(!repo.is_durable());

    repo.update_current_draft([("dni", "111")]).unwrap();
    assert!(repo.is_durable());
}

#[test]
fn quota_exceeded_is_a_persistence_error() {
    init_tracing();
    let store = MemoryStore::with_quota(64);
    let mut repo = reopen(&store);
    let long = "x".repeat(200);
    let err = repo.update_current_draft([("nombre", long.as_str())]).unwrap_err();
    assert!(err.is_persistence());
    assert_eq!(repo.current_draft().text("nombre"), long);
}

#[test]
fn unreadable_store_fails_open() {
    init_tracing();
    let store = FlakyStore::new(MemoryStore::new());
    store.fail_reads(true);
    let err = FormRepository::open(store, RepositoryOptions::default()).unwrap_err();
    assert!(err.is_persistence());
}
