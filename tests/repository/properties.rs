//! Property tests over arbitrary operation sequences.

use crate::common::*;
use proptest::prelude::*;

#[derive(Debug, Clone)]
enum Op {
    Edit(String),
    Save,
    NewDraft,
    LoadNth(usize),
    DeleteNth(usize),
    DeleteDraftId,
}

fn op() -> impl Strategy<Value = Op> {
    prop_oneof![
        "[a-z]{1,6}".prop_map(Op::Edit),
        Just(Op::Save),
        Just(Op::NewDraft),
        (0usize..8).prop_map(Op::LoadNth),
        (0usize..8).prop_map(Op::DeleteNth),
        Just(Op::DeleteDraftId),
    ]
}

fn apply(repo: &mut FormRepository<MemoryStore>, op: &Op) {
    match op {
        Op::Edit(name) => repo.update_current_draft([("nombre", name.as_str())]).unwrap(),
        Op::Save => {
            repo.save_current_draft().unwrap();
        }
        Op::NewDraft => {
            repo.create_new_draft().unwrap();
        }
        Op::LoadNth(n) => {
            if let Some(id) = repo.forms().get(*n).map(|f| f.id.clone()) {
                assert!(repo.load_into_draft(&id).unwrap());
            }
        }
        Op::DeleteNth(n) => {
            if let Some(id) = repo.forms().get(*n).map(|f| f.id.clone()) {
                assert!(repo.delete_by_id(&id).unwrap());
            }
        }
        Op::DeleteDraftId => {
            let id = repo.current_draft().id.clone();
            repo.delete_by_id(&id).unwrap();
            assert_ne!(repo.current_draft().id, id);
        }
    }
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    #[test]
    fn saved_ids_stay_unique(ops in proptest::collection::vec(op(), 0..40)) {
        let store = MemoryStore::new();
        let mut repo = reopen(&store);
        for op in &ops {
            apply(&mut repo, op);
            let mut ids: Vec<&FormId> = repo.forms().iter().map(|f| &f.id).collect();
            let total = ids.len();
            ids.sort();
            ids.dedup();
            prop_assert_eq!(ids.len(), total);
        }

        // what was persisted is exactly what is in memory
        let restored = reopen(&store);
        prop_assert_eq!(restored.forms(), repo.forms());
        prop_assert_eq!(restored.current_draft(), repo.current_draft());
    }

    #[test]
    fn repeated_saves_are_idempotent(times in 1usize..10) {
        let mut repo = memory_repo();
        repo.update_current_draft([("nombre", "Ana")]).unwrap();
        for _ in 0..times {
            repo.save_current_draft().unwrap();
        }
        prop_assert_eq!(repo.len(), 1);
    }

    #[test]
    fn deleted_ids_are_not_found(raw in "[a-z0-9-]{0,12}", saves in 0usize..5) {
        let mut repo = memory_repo();
        for i in 0..saves {
            save_named(&mut repo, &format!("n{}", i));
        }
        let id = FormId::from(raw);
        repo.delete_by_id(&id).unwrap();
        prop_assert!(repo.get_by_id(&id).is_none());

        if let Some(existing) = repo.forms().first().map(|f| f.id.clone()) {
            repo.delete_by_id(&existing).unwrap();
            prop_assert!(repo.get_by_id(&existing).is_none());
        }
    }
}
