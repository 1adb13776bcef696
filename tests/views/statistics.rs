//! Statistics over saved forms.

use crate::common::*;
use intake::{catalog, count_by_category, monthly_histogram, StatisticsReport};
use proptest::prelude::*;

#[test]
fn housing_type_counts() {
    let forms = vec![
        person("Ana", "Soto", "1", "Casa"),
        person("Juan", "Perez", "2", "Casa"),
        person("Pedro", "Ruiz", "3", "Departamento"),
    ];
    let counts = count_by_category(&forms, "tipoVivienda");
    assert_eq!(counts.len(), 2);
    assert_eq!(counts.get("Casa"), 2);
    assert_eq!(counts.get("Departamento"), 1);
}

#[test]
fn empty_collection_renders_empty_state() {
    let intake = Intake::ephemeral().unwrap();
    let report = intake.statistics();
    assert!(report.is_empty());
    assert!(report.monthly.is_empty());
    assert!(report.housing_types.is_empty());
}

#[test]
fn full_report_from_facade() {
    let mut intake = Intake::ephemeral().unwrap();
    intake
        .update_current_draft([
            ("tipoVivienda", FieldValue::from("Casa")),
            ("cemento", FieldValue::from(true)),
            ("ladrillos", FieldValue::from(true)),
            ("tieneAgua", FieldValue::from("Si")),
            ("tieneGas", FieldValue::from("No")),
            ("vivienda", FieldValue::from(true)),
        ])
        .unwrap();
    intake.save_current_draft().unwrap();

    let report = intake.statistics();
    assert_eq!(report.total, 1);
    let ticked: Vec<&str> = report
        .materials
        .iter()
        .filter(|m| m.count > 0)
        .map(|m| m.field.as_str())
        .collect();
    assert_eq!(ticked, vec!["cemento", "ladrillos"]);
    assert_eq!(report.modalities.get(catalog::UNSPECIFIED), 1);
    assert_eq!((report.utilities[0].yes, report.utilities[0].no), (1, 0));
    assert_eq!((report.utilities[2].yes, report.utilities[2].no), (0, 1));
    assert_eq!(report.monthly.len(), 1);
}

#[test]
fn histogram_is_chronological() {
    let forms = vec![
        FormRecord::with_timestamp(at(2024, 2, 1)),
        FormRecord::with_timestamp(at(2023, 11, 1)),
        FormRecord::with_timestamp(at(2024, 2, 28)),
        FormRecord::with_timestamp(at(2023, 4, 1)),
    ];
    let labels: Vec<String> = monthly_histogram(&forms).into_iter().map(|b| b.label).collect();
    assert_eq!(labels, vec!["Abril 2023", "Noviembre 2023", "Febrero 2024"]);
}

proptest! {
    #[test]
    fn histogram_sums_to_len(months in proptest::collection::vec((2020i32..2026, 1u32..13), 0..50)) {
        let forms: Vec<FormRecord> = months
            .iter()
            .map(|(y, m)| FormRecord::with_timestamp(at(*y, *m, 15)))
            .collect();
        let report = StatisticsReport::build(&forms, &Default::default());
        prop_assert_eq!(report.monthly.iter().map(|b| b.count).sum::<usize>(), forms.len());
        prop_assert_eq!(report.housing_types.total(), forms.len());
    }
}
