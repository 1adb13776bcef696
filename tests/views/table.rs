//! Response table behavior over realistic collections.

use crate::common::*;
use intake::{
    paginate, page_count, search, sort_by, CategoryFilter, EmptyState, FieldSchema,
    ResponseQuery, SortDirection, SortKey,
};
use proptest::prelude::*;

fn desk() -> Vec<FormRecord> {
    vec![
        person("Ana", "Soto", "111", "Casa"),
        person("Juan", "Perez", "222", "Departamento"),
        person("Pedro", "Ruiz", "333", "Casa"),
    ]
}

#[test]
fn search_is_case_insensitive_substring() {
    let forms = desk();
    let hits = search(&forms, &FieldSchema::default(), "an");
    let names: Vec<String> = hits.iter().map(|r| r.text("nombre")).collect();
    assert_eq!(names, vec!["Ana", "Juan"]);

    let hits = search(&forms, &FieldSchema::default(), "RUIZ");
    assert_eq!(hits.len(), 1);
    let hits = search(&forms, &FieldSchema::default(), "22");
    assert_eq!(hits[0].text("nombre"), "Juan");
}

#[test]
fn empty_search_is_identity() {
    let forms = desk();
    let all = search(&forms, &FieldSchema::default(), "");
    assert!(all.iter().zip(forms.iter()).all(|(a, b)| std::ptr::eq(*a, b)));
    assert_eq!(all.len(), forms.len());
}

#[test]
fn facade_query_end_to_end() {
    let mut test = TestIntake::new();
    for (n, a, d, t) in [
        ("Ana", "Soto", "111", "Casa"),
        ("Juan", "Perez", "222", "Departamento"),
        ("Pedro", "Ruiz", "333", "Casa"),
    ] {
        test.intake
            .update_current_draft([("nombre", n), ("apellido", a), ("dni", d), ("tipoVivienda", t)])
            .unwrap();
        test.intake.save_current_draft().unwrap();
        test.intake.create_new_draft().unwrap();
    }

    let mut query = test.intake.new_query();
    query.set_category(CategoryFilter::Only("Casa".into()));
    query.set_sort(SortKey::FullName, SortDirection::Descending);
    let page = test.intake.responses(&query);
    let names: Vec<String> = page.records.iter().map(|r| r.text("nombre")).collect();
    assert_eq!(names, vec!["Pedro", "Ana"]);
    assert_eq!(page.total, 3);
    assert_eq!(page.empty_state(), EmptyState::None);

    query.set_term("zzz");
    assert_eq!(test.intake.responses(&query).empty_state(), EmptyState::NoMatches);
}

#[test]
fn filtering_resets_to_first_page() {
    let mut query = ResponseQuery::new(1);
    query.set_page(3);
    query.set_category("Casa");
    assert_eq!(query.page(), 1);
    query.set_page(2);
    query.set_term("ana");
    assert_eq!(query.page(), 1);
}

fn housing() -> impl Strategy<Value = &'static str> {
    prop_oneof![Just("Casa"), Just("Departamento"), Just("Otro"), Just("")]
}

proptest! {
    #[test]
    fn sort_is_stable_both_ways(kinds in proptest::collection::vec(housing(), 0..30)) {
        let forms: Vec<FormRecord> = kinds
            .iter()
            .enumerate()
            .map(|(i, t)| FormRecord::new().with_field("tipoVivienda", *t).with_field("seq", i as i64))
            .collect();
        let schema = FieldSchema::default();
        for direction in [SortDirection::Ascending, SortDirection::Descending] {
            let sorted = sort_by(&forms, &schema, SortKey::HousingType, direction);
            for pair in sorted.windows(2) {
                if pair[0].text("tipoVivienda") == pair[1].text("tipoVivienda") {
                    let a = pair[0].get("seq").and_then(|v| v.as_int()).unwrap();
                    let b = pair[1].get("seq").and_then(|v| v.as_int()).unwrap();
                    prop_assert!(a < b);
                }
            }
        }
    }

    #[test]
    fn pagination_reconstructs_without_gaps(len in 0usize..60, size in 1usize..12) {
        let forms: Vec<FormRecord> = (0..len).map(|i| person(&format!("p{}", i), "", "", "Casa")).collect();
        let mut rebuilt = Vec::new();
        for page in 1..=page_count(forms.len(), size) {
            rebuilt.extend_from_slice(paginate(&forms, page, size));
        }
        prop_assert_eq!(rebuilt, forms.clone());
        prop_assert!(paginate(&forms, page_count(len, size) + 1, size).is_empty());
    }
}
