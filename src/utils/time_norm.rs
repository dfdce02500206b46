use calamine::{Data, ExcelDateTime};
use chrono::{DateTime, NaiveDate, NaiveDateTime};

/// Ordered list of accepted textual date layouts. First match wins, so
/// an ambiguous `03/04/2024` resolves as day/month before month/day.
const DATE_FORMATS: &[&str] = &["%Y-%m-%d", "%d/%m/%Y", "%m/%d/%Y", "%d-%m-%Y", "%m-%d-%Y"];

/// Days between the Excel epoch (1899-12-30) and the Unix epoch.
const EXCEL_EPOCH_OFFSET_DAYS: f64 = 25569.0;

/// What a spreadsheet cell can carry once stripped of formatting noise.
/// Bool and error cells degrade to `Empty`; they never hold usable
/// attendance data.
#[derive(Debug, Clone, PartialEq)]
pub enum Cell {
    Text(String),
    Number(f64),
    DateTime(NaiveDateTime),
    Empty,
}

impl Cell {
    pub fn is_empty(&self) -> bool {
        matches!(self, Cell::Empty)
    }
}

impl From<&Data> for Cell {
    fn from(data: &Data) -> Self {
        match data {
            Data::String(s) => {
                let trimmed = s.trim();
                if trimmed.is_empty() {
                    Cell::Empty
                } else {
                    Cell::Text(trimmed.to_string())
                }
            }
            Data::Float(f) => Cell::Number(*f),
            Data::Int(i) => Cell::Number(*i as f64),
            Data::DateTime(dt) => from_excel_datetime(dt),
            Data::DateTimeIso(s) => from_iso_text(s),
            Data::DurationIso(s) => Cell::Text(s.trim().to_string()),
            Data::Bool(_) | Data::Error(_) | Data::Empty => Cell::Empty,
        }
    }
}

fn from_excel_datetime(dt: &ExcelDateTime) -> Cell {
    match dt.as_datetime() {
        Some(naive) => Cell::DateTime(naive),
        // Keep the raw serial; date/time resolution handles it below.
        None => Cell::Number(dt.as_f64()),
    }
}

fn from_iso_text(s: &str) -> Cell {
    NaiveDateTime::parse_from_str(s, "%Y-%m-%dT%H:%M:%S")
        .or_else(|_| NaiveDateTime::parse_from_str(s, "%Y-%m-%d %H:%M:%S"))
        .map(Cell::DateTime)
        .unwrap_or_else(|_| Cell::Text(s.trim().to_string()))
}

/// Resolve a date cell to a calendar day.
///
/// Resolution order: native date-time, then numeric day-serial against the
/// Excel epoch, then text against [`DATE_FORMATS`]. Anything else means the
/// owning row cannot be an attendance record.
pub fn resolve_date(cell: &Cell) -> Option<NaiveDate> {
    match cell {
        Cell::DateTime(dt) => Some(dt.date()),
        Cell::Number(serial) => {
            let secs = ((serial - EXCEL_EPOCH_OFFSET_DAYS) * 86400.0).round() as i64;
            DateTime::from_timestamp(secs, 0).map(|ts| ts.date_naive())
        }
        Cell::Text(s) => DATE_FORMATS
            .iter()
            .find_map(|fmt| NaiveDate::parse_from_str(s, fmt).ok()),
        Cell::Empty => None,
    }
}

/// Resolve a clock cell to a canonical zero-padded `HH:MM` string.
///
/// Text is taken as already canonical, date-times are reformatted, and a
/// bare number is read as a fraction of a 24-hour day. An empty cell is a
/// missing punch, not an error.
pub fn resolve_time(cell: &Cell) -> Option<String> {
    match cell {
        Cell::Text(s) => Some(s.clone()),
        Cell::DateTime(dt) => Some(dt.format("%H:%M").to_string()),
        Cell::Number(fraction) => {
            let hours = (fraction * 24.0).floor() as u32;
            let minutes = ((fraction * 24.0 * 60.0).floor() as u32) % 60;
            Some(format!("{hours:02}:{minutes:02}"))
        }
        Cell::Empty => None,
    }
}
