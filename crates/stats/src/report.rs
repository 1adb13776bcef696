//! The full statistics screen in one value

use crate::category::{count_by_category, CategoryCounts};
use crate::flags::{count_by_boolean_fields, count_by_paired_field, FlagCount, YesNoCount};
use crate::monthly::{monthly_histogram, MonthBucket};
use intake_core::catalog::{self, FieldSchema};
use intake_core::FormRecord;
use serde::{Deserialize, Serialize};

/// Every chart of the statistics screen
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StatisticsReport {
    /// Records counted
    pub total: usize,
    /// Housing type distribution
    pub housing_types: CategoryCounts,
    /// Requested building materials
    pub materials: Vec<FlagCount>,
    /// Assistance modality distribution
    pub modalities: CategoryCounts,
    /// Utility availability
    pub utilities: Vec<YesNoCount>,
    /// Reasons for the visit
    pub motives: Vec<FlagCount>,
    /// Submissions per month
    pub monthly: Vec<MonthBucket>,
}

impl StatisticsReport {
    /// Aggregate `records`
    pub fn build(records: &[FormRecord], schema: &FieldSchema) -> Self {
        StatisticsReport {
            total: records.len(),
            housing_types: count_by_category(records, &schema.housing_type),
            materials: count_by_boolean_fields(records, &catalog::keys(catalog::MATERIALS)),
            modalities: count_by_category(records, &schema.modality),
            utilities: count_by_paired_field(records, catalog::UTILITIES, catalog::UTILITY_PATTERN),
            motives: count_by_boolean_fields(records, &catalog::keys(catalog::MOTIVES)),
            monthly: monthly_histogram(records),
        }
    }

    /// Whether there is nothing to chart
    pub fn is_empty(&self) -> bool {
        self.total == 0
    }
}
