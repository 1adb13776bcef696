//! End-to-end repository walkthroughs of the front-desk workflow.

use crate::common::*;
use intake::ChangeEvent;
use std::sync::{Arc, Mutex};

#[test]
fn save_then_lookup() {
    let mut repo = memory_repo();
    assert!(repo.is_empty());

    repo.update_current_draft([("nombre", "Ana"), ("dni", "111")])
        .unwrap();
    let id = repo.save_current_draft().unwrap();

    assert_eq!(repo.len(), 1);
    let saved = repo.get_by_id(&id).unwrap();
    assert_eq!(saved.get("nombre"), Some(&FieldValue::from("Ana")));
    assert_eq!(saved.text("dni"), "111");
}

#[test]
fn saving_twice_does_not_duplicate() {
    let mut repo = memory_repo();
    repo.update_current_draft([("nombre", "Ana")]).unwrap();
    let first = repo.save_current_draft().unwrap();
    let second = repo.save_current_draft().unwrap();

    assert_eq!(first, second);
    assert_eq!(repo.len(), 1);
}

#[test]
fn new_draft_discards_unsaved_edits() {
    let mut repo = memory_repo();
    repo.update_current_draft([("nombre", "Ana")]).unwrap();
    let saved = repo.save_current_draft().unwrap();
    let before = repo.forms().to_vec();

    repo.update_current_draft([("nombre", "Ana Maria")]).unwrap();
    let fresh = repo.create_new_draft().unwrap();

    assert_ne!(fresh, saved);
    assert!(repo.current_draft().fields.is_empty());
    assert_eq!(repo.forms(), before.as_slice());
    assert_eq!(repo.get_by_id(&saved).unwrap().text("nombre"), "Ana");
}

#[test]
fn edit_saved_form_and_save_again() {
    let mut repo = memory_repo();
    let id = save_named(&mut repo, "Ana");
    save_named(&mut repo, "Juan");
    let created = repo.get_by_id(&id).unwrap().submitted_at;

    assert!(repo.load_into_draft(&id).unwrap());
    repo.update_current_draft([("telefono", "555-1234")]).unwrap();
    repo.save_current_draft().unwrap();

    assert_eq!(repo.len(), 2);
    let edited = repo.get_by_id(&id).unwrap();
    assert_eq!(edited.text("telefono"), "555-1234");
    assert_eq!(edited.text("nombre"), "Ana");
    assert_eq!(edited.submitted_at, created);
    // the edited form keeps its slot
    assert_eq!(repo.forms()[0].id, id);
}

#[test]
fn load_unknown_id_leaves_draft_alone() {
    let mut repo = memory_repo();
    repo.update_current_draft([("nombre", "Ana")]).unwrap();
    let draft = repo.current_draft().clone();

    assert!(!repo.load_into_draft(&FormId::from("nope")).unwrap());
    assert_eq!(repo.current_draft(), &draft);
}

#[test]
fn delete_all_resets_everything() {
    let mut repo = memory_repo();
    let ids: Vec<FormId> = ["Ana", "Juan", "Pedro", "Lucia", "Mariana"]
        .iter()
        .map(|n| save_named(&mut repo, n))
        .collect();
    let old_draft = repo.current_draft().id.clone();
    assert_eq!(repo.len(), 5);

    assert_eq!(repo.delete_all().unwrap(), 5);

    assert!(repo.is_empty());
    let draft = &repo.current_draft().id;
    assert_ne!(draft, &old_draft);
    assert!(ids.iter().all(|id| id != draft));
}

#[test]
fn deleting_the_draft_form_replaces_the_draft() {
    let mut repo = memory_repo();
    repo.update_current_draft([("nombre", "Ana")]).unwrap();
    let id = repo.save_current_draft().unwrap();

    assert!(repo.delete_by_id(&id).unwrap());

    assert!(repo.get_by_id(&id).is_none());
    assert_ne!(repo.current_draft().id, id);
    assert!(repo.current_draft().fields.is_empty());
}

#[test]
fn deleting_another_form_keeps_the_draft() {
    let mut repo = memory_repo();
    let other = save_named(&mut repo, "Juan");
    repo.update_current_draft([("nombre", "Ana")]).unwrap();
    let draft = repo.current_draft().clone();

    assert!(repo.delete_by_id(&other).unwrap());
    assert_eq!(repo.current_draft(), &draft);
    assert!(!repo.delete_by_id(&other).unwrap());
}

#[test]
fn observers_see_every_change_in_order() {
    let mut repo = memory_repo();
    let events = Arc::new(Mutex::new(Vec::new()));
    let sink = Arc::clone(&events);
    repo.subscribe(move |e| sink.lock().unwrap().push(e.clone()));

    repo.update_current_draft([("nombre", "Ana")]).unwrap();
    let id = repo.save_current_draft().unwrap();
    repo.delete_by_id(&id).unwrap();
    repo.delete_all().unwrap();

    let events = events.lock().unwrap();
    assert!(matches!(events[0], ChangeEvent::DraftUpdated { .. }));
    assert_eq!(events[1], ChangeEvent::FormSaved { id: id.clone() });
    assert!(events.contains(&ChangeEvent::FormDeleted { id }));
    let n = events.len();
    assert_eq!(events[n - 2], ChangeEvent::AllDeleted { removed: 0 });
    assert!(matches!(events[n - 1], ChangeEvent::DraftReplaced { .. }));
}
