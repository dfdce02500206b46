use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use strum_macros::{Display, EnumString};
use utoipa::ToSchema;

/// Closed set of attendance outcomes; nothing else is ever produced.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Display, EnumString, ToSchema,
)]
pub enum Status {
    Present,
    Leave,
    Partial,
}

/// One normalized day of attendance for one employee.
/// Built once by the record builder, never mutated afterwards.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
#[schema(
    example = json!({
        "employeeName": "Jane Doe",
        "date": "2024-01-01",
        "inTime": "10:00",
        "outTime": "18:30",
        "workedHours": 8.5,
        "expectedHours": 8.5,
        "status": "Present"
    })
)]
pub struct AttendanceRecord {
    pub employee_name: String,

    /// Attendance day, no time component.
    #[schema(example = "2024-01-01", value_type = String, format = "date")]
    pub date: NaiveDate,

    /// Canonical `HH:MM`, absent when no clock-in was recorded.
    #[schema(example = "10:00", nullable = true)]
    pub in_time: Option<String>,

    /// Canonical `HH:MM`, absent when no clock-out was recorded.
    #[schema(example = "18:30", nullable = true)]
    pub out_time: Option<String>,

    /// Hours between in and out, one decimal place, never negative.
    #[schema(example = 8.5)]
    pub worked_hours: f64,

    /// Scheduled hours for the weekday of `date`.
    #[schema(example = 8.5)]
    pub expected_hours: f64,

    #[schema(example = "Present")]
    pub status: Status,
}
