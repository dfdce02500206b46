use std::io::Cursor;

use calamine::{Reader, Xlsx, open_workbook_from_rs};
use tracing::debug;

use crate::error::IngestError;
use crate::model::attendance::AttendanceRecord;
use crate::utils::time_norm::{self, Cell};
use crate::utils::working_hours;

/// One spreadsheet row as lifted from the sheet, before any derivation.
/// Column order is fixed: name, date, in-time, out-time.
#[derive(Debug, Clone)]
pub struct RawRow {
    pub employee_name: Cell,
    pub date: Cell,
    pub in_time: Cell,
    pub out_time: Cell,
}

/// Derive one canonical record from a raw row, or `None` when the row is
/// structurally unusable (no name, no parseable date). Rows are independent;
/// nothing here looks across the batch.
pub fn build_record(row: &RawRow) -> Option<AttendanceRecord> {
    let employee_name = match &row.employee_name {
        Cell::Text(name) => name.trim().to_string(),
        _ => {
            debug!("skipping row without employee name");
            return None;
        }
    };

    let Some(date) = time_norm::resolve_date(&row.date) else {
        debug!(employee = %employee_name, "skipping row with unparseable date");
        return None;
    };

    let in_time = time_norm::resolve_time(&row.in_time);
    let out_time = time_norm::resolve_time(&row.out_time);

    let expected_hours = working_hours::get_expected_hours(date);
    let worked_hours =
        working_hours::calculate_worked_hours(in_time.as_deref(), out_time.as_deref());
    let status = working_hours::get_attendance_status(
        in_time.as_deref(),
        out_time.as_deref(),
        expected_hours,
        worked_hours,
    );

    Some(AttendanceRecord {
        employee_name,
        date,
        in_time,
        out_time,
        worked_hours,
        expected_hours,
        status,
    })
}

/// Parse an uploaded `.xlsx` byte stream into canonical records.
///
/// Only the first sheet is read and its header row is skipped. Unusable
/// rows are dropped silently; an unreadable workbook fails the whole batch
/// with nothing applied.
pub fn parse_workbook(bytes: &[u8]) -> Result<Vec<AttendanceRecord>, IngestError> {
    let mut workbook: Xlsx<_> = open_workbook_from_rs(Cursor::new(bytes))
        .map_err(|e: calamine::XlsxError| IngestError::MalformedSource(e.to_string()))?;

    let range = workbook
        .worksheet_range_at(0)
        .ok_or_else(|| IngestError::MalformedSource("workbook has no sheets".to_string()))?
        .map_err(|e| IngestError::MalformedSource(e.to_string()))?;

    let records: Vec<AttendanceRecord> = range
        .rows()
        .skip(1) // header
        .map(|cells| RawRow {
            employee_name: cells.first().map(Cell::from).unwrap_or(Cell::Empty),
            date: cells.get(1).map(Cell::from).unwrap_or(Cell::Empty),
            in_time: cells.get(2).map(Cell::from).unwrap_or(Cell::Empty),
            out_time: cells.get(3).map(Cell::from).unwrap_or(Cell::Empty),
        })
        .filter_map(|row| build_record(&row))
        .collect();

    Ok(records)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::attendance::Status;
    use chrono::NaiveDate;

    fn row(name: &str, date: Cell, in_time: Cell, out_time: Cell) -> RawRow {
        RawRow {
            employee_name: Cell::Text(name.into()),
            date,
            in_time,
            out_time,
        }
    }

    #[test]
    fn full_monday_shift_builds_a_present_record() {
        let record = build_record(&row(
            "Jane Doe",
            Cell::Text("2024-01-01".into()),
            Cell::Text("10:00".into()),
            Cell::Text("18:30".into()),
        ))
        .unwrap();

        assert_eq!(record.employee_name, "Jane Doe");
        assert_eq!(record.date, NaiveDate::from_ymd_opt(2024, 1, 1).unwrap());
        assert_eq!(record.expected_hours, 8.5);
        assert_eq!(record.worked_hours, 8.5);
        assert_eq!(record.status, Status::Present);
    }

    #[test]
    fn missing_punches_on_a_tuesday_build_a_leave_record() {
        let record = build_record(&row(
            "Jane Doe",
            Cell::Text("2024-01-02".into()),
            Cell::Empty,
            Cell::Empty,
        ))
        .unwrap();

        assert_eq!(record.expected_hours, 8.5);
        assert_eq!(record.worked_hours, 0.0);
        assert_eq!(record.status, Status::Leave);
    }

    #[test]
    fn sunday_without_punches_is_still_present() {
        let record = build_record(&row(
            "Jane Doe",
            Cell::Text("2024-01-07".into()),
            Cell::Empty,
            Cell::Empty,
        ))
        .unwrap();

        assert_eq!(record.expected_hours, 0.0);
        assert_eq!(record.status, Status::Present);
    }

    #[test]
    fn name_is_trimmed() {
        let record = build_record(&row(
            "  Jane Doe  ",
            Cell::Text("2024-01-01".into()),
            Cell::Empty,
            Cell::Empty,
        ))
        .unwrap();
        assert_eq!(record.employee_name, "Jane Doe");
    }

    #[test]
    fn rows_without_name_or_date_are_dropped() {
        let nameless = RawRow {
            employee_name: Cell::Empty,
            date: Cell::Text("2024-01-01".into()),
            in_time: Cell::Empty,
            out_time: Cell::Empty,
        };
        assert!(build_record(&nameless).is_none());

        let dateless = row("Jane Doe", Cell::Text("someday".into()), Cell::Empty, Cell::Empty);
        assert!(build_record(&dateless).is_none());
    }

    #[test]
    fn one_bad_row_does_not_fail_the_batch() {
        let rows = vec![
            row("A", Cell::Text("2024-01-01".into()), Cell::Empty, Cell::Empty),
            row("B", Cell::Text("not a date".into()), Cell::Empty, Cell::Empty),
            row("C", Cell::Text("2024-01-02".into()), Cell::Empty, Cell::Empty),
        ];
        let records: Vec<_> = rows.iter().filter_map(build_record).collect();
        assert_eq!(records.len(), 2);
    }

    #[test]
    fn serial_date_and_fraction_times_normalize() {
        // Serial 45292 is 2024-01-01; 0.4375 is 10:30.
        let record = build_record(&row(
            "Jane Doe",
            Cell::Number(45292.0),
            Cell::Number(0.4375),
            Cell::Number(0.75),
        ))
        .unwrap();

        assert_eq!(record.date, NaiveDate::from_ymd_opt(2024, 1, 1).unwrap());
        assert_eq!(record.in_time.as_deref(), Some("10:30"));
        assert_eq!(record.out_time.as_deref(), Some("18:00"));
        assert_eq!(record.worked_hours, 7.5);
    }

    #[test]
    fn non_xlsx_bytes_are_a_malformed_source() {
        let err = parse_workbook(b"definitely not a spreadsheet").unwrap_err();
        assert!(matches!(err, IngestError::MalformedSource(_)));
    }
}
