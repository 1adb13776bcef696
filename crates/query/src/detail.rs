//! Per-form detail view
//!
//! The detail screen and its PDF export show a saved form section by
//! section. This module derives everything those renderers need that is not
//! a plain field read: the formatted date, which checklist boxes are ticked,
//! and the "No especificado" fallback.

use chrono::{DateTime, Utc};
use intake_core::catalog::{self, FieldLabel};
use intake_core::{FieldSchema, FormId, FormRecord};

/// Text shown when no checklist box is ticked
pub const NONE_SELECTED: &str = "Ninguno seleccionado";

/// `dd/mm/yyyy HH:MM`, in UTC
pub fn format_timestamp(at: &DateTime<Utc>) -> String {
    at.format("%d/%m/%Y %H:%M").to_string()
}

/// Derived view of one saved form
#[derive(Debug, Clone, PartialEq)]
pub struct FormDetail {
    /// The form itself
    pub record: FormRecord,
    /// Formatted creation time
    pub submitted: String,
    /// Given and family name, read through the field schema
    pub full_name: String,
    /// Labels of ticked material boxes, in checklist order
    pub materials: Vec<&'static str>,
    /// Labels of ticked motive boxes, in checklist order
    pub motives: Vec<&'static str>,
}

impl FormDetail {
    /// Build the detail view of `record`, naming it with `schema`'s fields
    pub fn from_record(record: &FormRecord, schema: &FieldSchema) -> Self {
        let full_name = format!(
            "{} {}",
            record.text(&schema.given_name),
            record.text(&schema.family_name)
        );
        FormDetail {
            submitted: format_timestamp(&record.submitted_at),
            full_name: full_name.trim().to_string(),
            materials: selected_labels(record, catalog::MATERIALS),
            motives: selected_labels(record, catalog::MOTIVES),
            record: record.clone(),
        }
    }

    /// Id of the underlying form
    pub fn id(&self) -> &FormId {
        &self.record.id
    }

    /// Field text, or "No especificado" when absent or empty
    pub fn text(&self, field: &str) -> String {
        let text = self.record.text(field);
        if text.is_empty() {
            catalog::UNSPECIFIED.to_string()
        } else {
            text
        }
    }

    /// Ticked materials joined with ", ", or "Ninguno seleccionado"
    pub fn materials_summary(&self) -> String {
        summary(&self.materials)
    }

    /// Ticked motives joined with ", ", or "Ninguno seleccionado"
    pub fn motives_summary(&self) -> String {
        summary(&self.motives)
    }
}

fn selected_labels(record: &FormRecord, checklist: &[FieldLabel]) -> Vec<&'static str> {
    checklist
        .iter()
        .filter(|item| record.is_set(item.key))
        .map(|item| item.label)
        .collect()
}

fn summary(labels: &[&str]) -> String {
    if labels.is_empty() {
        NONE_SELECTED.to_string()
    } else {
        labels.join(", ")
    }
}
