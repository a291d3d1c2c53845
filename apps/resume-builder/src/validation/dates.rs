use chrono::{Datelike, NaiveDate, Utc};

use crate::models::{Certification, Project, WorkExperience};
use crate::validation::fields::ValidationError;

pub const END_BEFORE_START_MESSAGE: &str = "End date must be after start date";

const DATE_FIELD: &str = "date";

/// Checks a start/end pair of `MM/YYYY` dates.
///
/// - `is_current` (ongoing role, never-expiring credential): always passes
/// - either date empty: required error
/// - end strictly before start: ordering error
///
/// Dates that do not parse as `MM/YYYY` are not compared; the per-field
/// `Date` rule reports their format.
pub fn validate_date_range(
    start_date: &str,
    end_date: &str,
    is_current: bool,
) -> Option<ValidationError> {
    if is_current {
        return None;
    }

    if start_date.is_empty() || end_date.is_empty() {
        return Some(ValidationError::required(DATE_FIELD));
    }

    let (Some(start), Some(end)) = (parse_month_year(start_date), parse_month_year(end_date))
    else {
        return None;
    };

    (end < start).then(|| ValidationError::new(DATE_FIELD, END_BEFORE_START_MESSAGE))
}

pub fn validate_experience_dates(experience: &WorkExperience) -> Option<ValidationError> {
    validate_date_range(
        &experience.start_date,
        &experience.end_date,
        experience.current,
    )
}

pub fn validate_project_dates(project: &Project) -> Option<ValidationError> {
    validate_date_range(&project.start_date, &project.end_date, project.current)
}

/// A credential that never expires needs no expiry date.
pub fn validate_certification_dates(certification: &Certification) -> Option<ValidationError> {
    validate_date_range(
        &certification.issue_date,
        &certification.expiry_date,
        certification.never_expires,
    )
}

fn parse_month_year(value: &str) -> Option<NaiveDate> {
    let (month, year) = value.trim().split_once('/')?;
    let month: u32 = month.trim().parse().ok()?;
    let year: i32 = year.trim().parse().ok()?;
    NaiveDate::from_ymd_opt(year, month, 1)
}

/// Masks raw keystrokes into `MM/YYYY`: non-digits are dropped, the slash is
/// inserted after the month and anything past six digits is cut.
pub fn format_date_input(value: &str) -> String {
    let digits: String = value.chars().filter(char::is_ascii_digit).collect();

    match digits.len() {
        0 => String::new(),
        1..=2 => digits,
        3..=6 => format!("{}/{}", &digits[..2], &digits[2..]),
        _ => format!("{}/{}", &digits[..2], &digits[2..6]),
    }
}

/// Partial-input plausibility check used while the user is still typing.
pub fn is_plausible_date(value: &str) -> bool {
    is_plausible_date_in(value, Utc::now().year())
}

fn is_plausible_date_in(value: &str, current_year: i32) -> bool {
    let digits: String = value.chars().filter(char::is_ascii_digit).collect();

    if digits.len() >= 2 {
        let month: u32 = digits[..2].parse().unwrap_or(0);
        if !(1..=12).contains(&month) {
            return false;
        }
    }

    if digits.len() >= 6 {
        let year: i32 = digits[2..6].parse().unwrap_or(0);
        if year < 1900 || year > current_year + 10 {
            return false;
        }
    }

    true
}
