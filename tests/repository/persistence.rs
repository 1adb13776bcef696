//! Restoring state across sessions, through memory and file stores.

use crate::common::*;
use intake::Error;

#[test]
fn state_survives_reopen() {
    init_tracing();
    let store = MemoryStore::new();
    let (saved, draft) = {
        let mut repo = reopen(&store);
        let saved = save_named(&mut repo, "Ana");
        repo.update_current_draft([("nombre", "Juan")]).unwrap();
        (saved, repo.current_draft().clone())
    };

    let repo = reopen(&store);
    assert_eq!(repo.len(), 1);
    assert_eq!(repo.get_by_id(&saved).unwrap().text("nombre"), "Ana");
    assert_eq!(repo.current_draft(), &draft);
    assert!(repo.restore_issues().is_empty());
}

#[test]
fn opening_does_not_write() {
    let store = MemoryStore::new();
    let _repo = reopen(&store);
    assert!(store.is_empty());
}

#[test]
fn blobs_live_under_the_configured_keys() {
    let store = MemoryStore::new();
    let mut repo = reopen(&store);
    save_named(&mut repo, "Ana");

    let forms = store.read("santaRosaForms").unwrap().unwrap();
    let draft = store.read("currentForm").unwrap().unwrap();
    let parsed: Vec<FormRecord> = serde_json::from_str(&forms).unwrap();
    assert_eq!(parsed, repo.forms());
    let parsed: FormRecord = serde_json::from_str(&draft).unwrap();
    assert_eq!(&parsed, repo.current_draft());
}

#[test]
fn malformed_forms_fall_back_to_empty() {
    init_tracing();
    let store = MemoryStore::new();
    store.write("santaRosaForms", "{not json").unwrap();

    let mut repo = reopen(&store);
    assert!(repo.is_empty());
    assert_eq!(repo.restore_issues().len(), 1);
    assert!(matches!(
        &repo.restore_issues()[0],
        Error::MalformedState { key, .. } if key == "santaRosaForms"
    ));

    // the session keeps working and overwrites the bad blob
    save_named(&mut repo, "Ana");
    let repo = reopen(&store);
    assert_eq!(repo.len(), 1);
    assert!(repo.restore_issues().is_empty());
}

#[test]
fn malformed_draft_falls_back_to_fresh() {
    let store = MemoryStore::new();
    store.write("currentForm", "[1,2,3]").unwrap();
    let repo = reopen(&store);
    assert!(repo.current_draft().fields.is_empty());
    assert_eq!(repo.restore_issues().len(), 1);
}

#[test]
fn legacy_layout_is_restored() {
    let store = MemoryStore::new();
    store
        .write(
            "santaRosaForms",
            r#"[{"id":"1709649000000","fecha":"2024-03-05T14:30:00.000Z","datos":{"nombre":"Ana","cemento":true}}]"#,
        )
        .unwrap();
    let repo = reopen(&store);
    let form = repo.get_by_id(&FormId::from("1709649000000")).unwrap();
    assert_eq!(form.text("nombre"), "Ana");
    assert!(form.is_set("cemento"));
}

#[test]
fn duplicate_ids_collapse_on_restore() {
    let store = MemoryStore::new();
    let form = FormRecord::new().with_field("nombre", "Ana");
    let mut copy = form.clone();
    copy.fields.insert("nombre".into(), "Otra".into());
    let blob = serde_json::to_string(&vec![form.clone(), copy]).unwrap();
    store.write("santaRosaForms", &blob).unwrap();

    let repo = reopen(&store);
    assert_eq!(repo.len(), 1);
    assert_eq!(repo.get_by_id(&form.id).unwrap().text("nombre"), "Ana");
}

#[test]
fn file_backed_intake_round_trip() {
    let mut test = TestIntake::new();
    test.intake
        .update_current_draft([("nombre", "Ana"), ("tipoVivienda", "Casa")])
        .unwrap();
    let id = test.intake.save_current_draft().unwrap();
    assert!(test.dir.path().join("santaRosaForms.json").exists());
    assert!(test.dir.path().join("currentForm.json").exists());

    let test = test.reopen();
    assert_eq!(test.intake.forms().len(), 1);
    assert_eq!(test.intake.get_by_id(&id).unwrap().text("tipoVivienda"), "Casa");
}

#[test]
fn file_store_custom_keys() {
    init_tracing();
    let dir = tempfile::tempdir().unwrap();
    let config = IntakeConfig {
        forms_key: "forms".into(),
        draft_key: "draft".into(),
        ..IntakeConfig::default()
    };
    let mut intake = Intake::open_with_config(dir.path(), config).unwrap();
    intake.save_current_draft().unwrap();
    assert!(dir.path().join("forms.json").exists());
    assert!(!dir.path().join("santaRosaForms.json").exists());
}
