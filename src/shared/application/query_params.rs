use chrono::NaiveDate;

use crate::shared::application::errors::ApplicationError;

/// Parse an optional `YYYY-MM-DD` query parameter; blank counts as absent.
pub fn parse_date(field: &str, raw: Option<&str>) -> Result<Option<NaiveDate>, ApplicationError> {
    match raw.map(str::trim).filter(|s| !s.is_empty()) {
        None => Ok(None),
        Some(value) => NaiveDate::parse_from_str(value, "%Y-%m-%d")
            .map(Some)
            .map_err(|_| {
                ApplicationError::InvalidQuery(format!("{field} must be a YYYY-MM-DD date"))
            }),
    }
}

/// Parse a date range and reject it when `start` falls after `end`.
pub fn parse_date_range(
    start: Option<&str>,
    end: Option<&str>,
) -> Result<(Option<NaiveDate>, Option<NaiveDate>), ApplicationError> {
    let start = parse_date("start_date", start)?;
    let end = parse_date("end_date", end)?;
    if let (Some(s), Some(e)) = (start, end) {
        if s > e {
            return Err(ApplicationError::InvalidQuery(
                "start_date must not be after end_date".into(),
            ));
        }
    }
    Ok((start, end))
}
