use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Organization-wide reduction over every record in the current batch.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct OrganizationMetrics {
    #[schema(example = 12)]
    pub total_employees: u32,

    #[schema(example = 510.0)]
    pub total_expected_hours: f64,

    #[schema(example = 467.5)]
    pub total_actual_hours: f64,

    /// Totals-weighted ratio, not a mean of per-employee percentages.
    #[schema(example = 92)]
    pub average_productivity: u32,

    #[schema(example = 8)]
    pub total_leaves_used: u32,

    /// Fixed allowance of 2 leaves per employee per period.
    #[schema(example = 24)]
    pub total_allowed_leaves: u32,
}

impl OrganizationMetrics {
    /// The zeroed block the dashboard serves before any batch is loaded.
    pub fn empty() -> Self {
        Self {
            total_employees: 0,
            total_expected_hours: 0.0,
            total_actual_hours: 0.0,
            average_productivity: 0,
            total_leaves_used: 0,
            total_allowed_leaves: 0,
        }
    }
}
