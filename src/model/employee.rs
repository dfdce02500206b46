use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Full reduction over one employee's records for the reporting period.
/// Always recomputed from scratch on ingest, never updated incrementally.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct EmployeeMetrics {
    #[schema(example = 42.5)]
    pub total_expected_hours: f64,

    #[schema(example = 39.0)]
    pub total_actual_hours: f64,

    #[schema(example = 1)]
    pub total_leaves: u32,

    /// Integer percentage of actual over expected hours, zero-guarded.
    #[schema(example = 92)]
    pub productivity: u32,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[schema(
    example = json!({
        "name": "Jane Doe",
        "totalExpectedHours": 42.5,
        "totalActualHours": 39.0,
        "totalLeaves": 1,
        "productivity": 92
    })
)]
pub struct Employee {
    #[schema(example = "Jane Doe")]
    pub name: String,

    #[serde(flatten)]
    pub metrics: EmployeeMetrics,
}
