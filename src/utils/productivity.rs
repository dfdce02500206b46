use crate::model::attendance::{AttendanceRecord, Status};
use crate::model::employee::EmployeeMetrics;
use crate::model::organization::OrganizationMetrics;

/// Integer productivity percentage with the divide-by-zero guard: a period
/// with nothing expected counts as fully productive.
pub fn calculate_productivity(actual_hours: f64, expected_hours: f64) -> u32 {
    if expected_hours == 0.0 {
        return 100;
    }
    (actual_hours / expected_hours * 100.0).round() as u32
}

fn round1(hours: f64) -> f64 {
    (hours * 10.0).round() / 10.0
}

fn sum_hours(records: &[AttendanceRecord]) -> (f64, f64, u32) {
    let total_expected = round1(records.iter().map(|r| r.expected_hours).sum());
    let total_actual = round1(records.iter().map(|r| r.worked_hours).sum());
    let total_leaves = records.iter().filter(|r| r.status == Status::Leave).count() as u32;
    (total_expected, total_actual, total_leaves)
}

/// Full reduction over one employee's records. Recomputed from scratch on
/// every ingest so the metrics can never drift from the records.
pub fn calculate_employee_metrics(records: &[AttendanceRecord]) -> EmployeeMetrics {
    let (total_expected_hours, total_actual_hours, total_leaves) = sum_hours(records);

    EmployeeMetrics {
        total_expected_hours,
        total_actual_hours,
        total_leaves,
        productivity: calculate_productivity(total_actual_hours, total_expected_hours),
    }
}

/// Organization-wide reduction across every record in the batch.
/// `average_productivity` is the ratio of the summed totals, not a mean of
/// per-employee percentages. Leave allowance is fixed at 2 per employee.
pub fn calculate_organization_metrics(
    employee_count: usize,
    records: &[AttendanceRecord],
) -> OrganizationMetrics {
    let (total_expected_hours, total_actual_hours, total_leaves_used) = sum_hours(records);

    OrganizationMetrics {
        total_employees: employee_count as u32,
        total_expected_hours,
        total_actual_hours,
        average_productivity: calculate_productivity(total_actual_hours, total_expected_hours),
        total_leaves_used,
        total_allowed_leaves: employee_count as u32 * 2,
    }
}
