//! Known fields of the Santa Rosa intake form
//!
//! The repository never looks at field names. These catalogs exist for the
//! view and statistics layers, which need to know which checkbox means
//! "cemento" and how to label it.

use serde::{Deserialize, Serialize};

/// A field name paired with the label shown to people
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FieldLabel {
    /// Key inside `FormRecord::fields`
    pub key: &'static str,
    /// Human-readable label
    pub label: &'static str,
}

const fn field(key: &'static str, label: &'static str) -> FieldLabel {
    FieldLabel { key, label }
}

/// Given name
pub const NOMBRE: &str = "nombre";
/// Family name
pub const APELLIDO: &str = "apellido";
/// National identity document number
pub const DNI: &str = "dni";
/// Housing type select
pub const TIPO_VIVIENDA: &str = "tipoVivienda";
/// Assistance modality
pub const MODALIDAD: &str = "modalidad";
/// Free text for materials not in the checklist
pub const OTROS_MATERIALES: &str = "otrosMateriales";
/// Free text for motives not in the checklist
pub const OTROS_MOTIVOS: &str = "otrosMotivos";

/// Label used for absent or empty values
pub const UNSPECIFIED: &str = "No especificado";

/// Value of a Yes/No radio meaning "yes"
pub const YES: &str = "Si";
/// Value of a Yes/No radio meaning "no"
pub const NO: &str = "No";

/// Rows per page of the response table unless `intake.toml` says otherwise
pub const DEFAULT_PAGE_SIZE: usize = 10;

/// Housing type options offered by the form
pub const HOUSING_TYPES: &[&str] = &["Casa", "Departamento", "Habitación", "Otro"];

/// Building materials checklist
pub const MATERIALS: &[FieldLabel] = &[
    field("cemento", "Cemento"),
    field("ladrillos", "Ladrillos"),
    field("hierro", "Hierro"),
    field("arena", "Arena"),
    field("canto", "Canto"),
    field("ceramica", "Cerámica"),
    field("pintura", "Pintura"),
    field("tuberias", "Tuberías"),
    field("cableElectrico", "Cable Eléctrico"),
];

/// Reasons for the visit checklist
pub const MOTIVES: &[FieldLabel] = &[
    field("vivienda", "Vivienda"),
    field("materialConstruccion", "Material de construcción"),
    field("ayudaEconomica", "Ayuda económica"),
    field("asesoramientoTecnico", "Asesoramiento técnico"),
    field("subsidio", "Subsidio"),
];

/// Utilities asked about as `tiene<Name>` Yes/No radios
pub const UTILITIES: &[&str] = &["Agua", "Luz", "Gas"];

/// Key pattern for utility radios; `{}` is replaced by a utility name
pub const UTILITY_PATTERN: &str = "tiene{}";

/// Fields the response table reads: who the form is about and how to
/// categorize it
///
/// Defaults match the intake form. Overridable from `[fields]` in
/// `intake.toml` so the view layer can follow a renamed form without code
/// changes.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FieldSchema {
    /// Given name field
    pub given_name: String,
    /// Family name field
    pub family_name: String,
    /// National identity number field
    pub national_id: String,
    /// Housing type field (category filter and chart)
    pub housing_type: String,
    /// Modality field
    pub modality: String,
}

impl Default for FieldSchema {
    fn default() -> Self {
        FieldSchema {
            given_name: NOMBRE.to_string(),
            family_name: APELLIDO.to_string(),
            national_id: DNI.to_string(),
            housing_type: TIPO_VIVIENDA.to_string(),
            modality: MODALIDAD.to_string(),
        }
    }
}

impl FieldSchema {
    /// Fields matched by free-text search
    pub fn search_fields(&self) -> [&str; 3] {
        [
            self.given_name.as_str(),
            self.family_name.as_str(),
            self.national_id.as_str(),
        ]
    }
}

/// Keys of a checklist, in display order
pub fn keys(labels: &[FieldLabel]) -> Vec<&'static str> {
    labels.iter().map(|l| l.key).collect()
}

/// Label for a checklist key, if the key is part of the checklist
pub fn label_for(labels: &[FieldLabel], key: &str) -> Option<&'static str> {
    labels.iter().find(|l| l.key == key).map(|l| l.label)
}
