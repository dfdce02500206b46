use chrono::{Datelike, NaiveDate, NaiveTime, Weekday};

use crate::model::attendance::Status;

/// Presence threshold: at or above this share of the expected hours a day
/// still counts as fully present, tolerating minor clock drift.
const PRESENT_THRESHOLD: f64 = 0.8;

/// Scheduled hours for a calendar day under the fixed weekly roster.
/// Identical for every employee; no holidays, no overrides.
pub fn get_expected_hours(date: NaiveDate) -> f64 {
    match date.weekday() {
        Weekday::Mon | Weekday::Tue | Weekday::Wed | Weekday::Thu | Weekday::Fri => 8.5, // 10:00 - 18:30
        Weekday::Sat => 4.0, // 10:00 - 14:00
        Weekday::Sun => 0.0, // off day
    }
}

/// Elapsed hours between two canonical `HH:MM` punches.
///
/// A missing or unparseable punch yields 0.0, which the classifier later
/// reads as a leave signal. An out-time before the in-time is an overnight
/// shift and gets a day added before differencing. Result is rounded to one
/// decimal and never negative.
pub fn calculate_worked_hours(in_time: Option<&str>, out_time: Option<&str>) -> f64 {
    let (Some(in_time), Some(out_time)) = (in_time, out_time) else {
        return 0.0;
    };

    let (Ok(clock_in), Ok(clock_out)) = (
        NaiveTime::parse_from_str(in_time, "%H:%M"),
        NaiveTime::parse_from_str(out_time, "%H:%M"),
    ) else {
        return 0.0;
    };

    let mut minutes = (clock_out - clock_in).num_minutes();
    if clock_out < clock_in {
        // Shift crossed midnight.
        minutes += 24 * 60;
    }

    let hours = (minutes as f64 / 60.0 * 10.0).round() / 10.0;
    hours.max(0.0)
}

/// Classify one day of attendance. Rule order matters: a scheduled off day
/// is `Present` before the punches are even looked at.
pub fn get_attendance_status(
    in_time: Option<&str>,
    out_time: Option<&str>,
    expected_hours: f64,
    worked_hours: f64,
) -> Status {
    if expected_hours == 0.0 {
        return Status::Present;
    }

    if in_time.is_none() || out_time.is_none() {
        return Status::Leave;
    }

    // Worked hours carry one decimal; the cutoff must match that precision
    // or exact-80% days drift into Partial on float noise.
    let cutoff = (expected_hours * PRESENT_THRESHOLD * 10.0).round() / 10.0;
    if worked_hours >= cutoff {
        return Status::Present;
    }

    Status::Partial
}

#[cfg(test)]
mod tests {
    use super::*;

    fn day(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn weekly_roster_covers_all_seven_days() {
        // 2024-01-01 is a Monday.
        for offset in 0..5 {
            assert_eq!(get_expected_hours(day(2024, 1, 1 + offset)), 8.5);
        }
        assert_eq!(get_expected_hours(day(2024, 1, 6)), 4.0); // Saturday
        assert_eq!(get_expected_hours(day(2024, 1, 7)), 0.0); // Sunday
    }

    #[test]
    fn full_weekday_shift() {
        assert_eq!(calculate_worked_hours(Some("10:00"), Some("18:30")), 8.5);
    }

    #[test]
    fn overnight_shift_adds_a_day() {
        assert_eq!(calculate_worked_hours(Some("22:00"), Some("06:00")), 8.0);
    }

    #[test]
    fn missing_either_punch_is_zero_hours() {
        assert_eq!(calculate_worked_hours(None, Some("18:30")), 0.0);
        assert_eq!(calculate_worked_hours(Some("10:00"), None), 0.0);
        assert_eq!(calculate_worked_hours(None, None), 0.0);
    }

    #[test]
    fn unparseable_punch_is_zero_hours() {
        assert_eq!(calculate_worked_hours(Some("bogus"), Some("18:30")), 0.0);
    }

    #[test]
    fn duration_rounds_to_one_decimal() {
        // 7h49m = 7.8166... -> 7.8
        assert_eq!(calculate_worked_hours(Some("10:00"), Some("17:49")), 7.8);
    }

    #[test]
    fn off_day_is_present_even_without_punches() {
        assert_eq!(get_attendance_status(None, None, 0.0, 0.0), Status::Present);
    }

    #[test]
    fn missing_punch_on_a_working_day_is_leave() {
        assert_eq!(
            get_attendance_status(None, Some("18:30"), 8.5, 0.0),
            Status::Leave
        );
        assert_eq!(
            get_attendance_status(Some("10:00"), None, 8.5, 0.0),
            Status::Leave
        );
    }

    #[test]
    fn threshold_is_inclusive_at_eighty_percent() {
        // 8.5 * 0.8 = 6.8 exactly.
        assert_eq!(
            get_attendance_status(Some("10:00"), Some("16:48"), 8.5, 6.8),
            Status::Present
        );
        // One rounding step under the threshold.
        assert_eq!(
            get_attendance_status(Some("10:00"), Some("16:42"), 8.5, 6.7),
            Status::Partial
        );
    }

    #[test]
    fn exact_eighty_percent_through_the_pipeline_is_present() {
        // 10:00 to 16:48 is 6h48m, exactly 80% of a weekday.
        let worked = calculate_worked_hours(Some("10:00"), Some("16:48"));
        assert_eq!(worked, 6.8);
        assert_eq!(
            get_attendance_status(Some("10:00"), Some("16:48"), 8.5, worked),
            Status::Present
        );
        // Saturday: 3h12m is exactly 80% of 4.0.
        let worked = calculate_worked_hours(Some("10:00"), Some("13:12"));
        assert_eq!(
            get_attendance_status(Some("10:00"), Some("13:12"), 4.0, worked),
            Status::Present
        );
    }

    #[test]
    fn classifier_is_deterministic() {
        let first = get_attendance_status(Some("10:00"), Some("18:30"), 8.5, 8.5);
        let second = get_attendance_status(Some("10:00"), Some("18:30"), 8.5, 8.5);
        assert_eq!(first, second);
        assert_eq!(first, Status::Present);
    }

    #[test]
    fn overlong_shift_stays_present() {
        // Far more worked than expected is not flagged or capped.
        assert_eq!(
            get_attendance_status(Some("06:00"), Some("23:00"), 8.5, 17.0),
            Status::Present
        );
    }
}
