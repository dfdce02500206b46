use std::collections::{BTreeMap, HashMap};

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::model::attendance::{AttendanceRecord, Status};
use crate::model::employee::Employee;
use crate::utils::productivity::calculate_productivity;

/// Per-day productivity point for the dashboard trend line.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct TrendPoint {
    #[schema(example = "2024-01-01", value_type = String, format = "date")]
    pub date: NaiveDate,
    #[schema(example = 94)]
    pub productivity: u32,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct EmployeeLeaves {
    #[schema(example = "Jane Doe")]
    pub name: String,
    #[schema(example = 1)]
    pub leaves: u32,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct StatusCount {
    #[schema(example = "Present")]
    pub status: Status,
    #[schema(example = 18)]
    pub count: u32,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct EmployeeHours {
    #[schema(example = "Jane Doe")]
    pub name: String,
    #[schema(example = 42.5)]
    pub expected: f64,
    #[schema(example = 39.0)]
    pub actual: f64,
}

/// One record's hours on the employee detail chart.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct DailyHours {
    #[schema(example = "2024-01-01", value_type = String, format = "date")]
    pub date: NaiveDate,
    #[schema(example = 8.0)]
    pub hours: f64,
    #[schema(example = 8.5)]
    pub expected: f64,
}

/// Daily productivity across the whole batch, date-ascending. Each day is
/// its own zero-guarded ratio of summed hours.
pub fn productivity_trend(records: &[AttendanceRecord]) -> Vec<TrendPoint> {
    let mut by_day: BTreeMap<NaiveDate, (f64, f64)> = BTreeMap::new();
    for record in records {
        let day = by_day.entry(record.date).or_insert((0.0, 0.0));
        day.0 += record.expected_hours;
        day.1 += record.worked_hours;
    }

    by_day
        .into_iter()
        .map(|(date, (expected, actual))| TrendPoint {
            date,
            productivity: calculate_productivity(actual, expected),
        })
        .collect()
}

/// (name, leave count) per employee, taken from the precomputed metrics.
pub fn leaves_per_employee(employees: &[Employee]) -> Vec<EmployeeLeaves> {
    employees
        .iter()
        .map(|e| EmployeeLeaves {
            name: e.name.clone(),
            leaves: e.metrics.total_leaves,
        })
        .collect()
}

/// Record count per status. Statuses that never occur are omitted rather
/// than zero-filled.
pub fn work_status_distribution(records: &[AttendanceRecord]) -> Vec<StatusCount> {
    status_counts(records)
}

/// Expected vs actual hour totals per employee for the comparison chart.
pub fn expected_vs_actual(employees: &[Employee]) -> Vec<EmployeeHours> {
    employees
        .iter()
        .map(|e| EmployeeHours {
            name: e.name.clone(),
            expected: e.metrics.total_expected_hours,
            actual: e.metrics.total_actual_hours,
        })
        .collect()
}

/// Per-record hours for one employee's detail view, date-ascending.
pub fn daily_hours(records: &[AttendanceRecord]) -> Vec<DailyHours> {
    let mut days: Vec<DailyHours> = records
        .iter()
        .map(|r| DailyHours {
            date: r.date,
            hours: r.worked_hours,
            expected: r.expected_hours,
        })
        .collect();
    days.sort_by_key(|d| d.date);
    days
}

/// Status tally over a record set (the whole batch or one employee's slice).
pub fn status_counts(records: &[AttendanceRecord]) -> Vec<StatusCount> {
    let mut counts: HashMap<Status, u32> = HashMap::new();
    for record in records {
        *counts.entry(record.status).or_insert(0) += 1;
    }

    let mut out: Vec<StatusCount> = counts
        .into_iter()
        .map(|(status, count)| StatusCount { status, count })
        .collect();
    // HashMap order is arbitrary; keep the series stable for consumers.
    out.sort_by_key(|c| c.status.to_string());
    out
}
