//! Sentiment label vocabulary and query-parameter value types.
//!
//! Labels are free strings produced by the external model; the only label
//! with special meaning here is [`NEGATIVE_LABEL`], used by the
//! "most negative" lookup.

use chrono::{NaiveDate, NaiveTime};
use serde::Deserialize;

use crate::error::CoreError;
use crate::types::{DbId, Timestamp};

/// Label the model assigns to negative interactions. Compared case-insensitively.
pub const NEGATIVE_LABEL: &str = "negativo";

/// Lower score bound used when a score-range query omits `min`.
pub const DEFAULT_MIN_SCORE: f64 = 0.0;

/// Upper score bound used when a score-range query omits `max`.
pub const DEFAULT_MAX_SCORE: f64 = 1.0;

/// Reject non-positive ids before they reach the database.
pub fn require_positive_id(entity: &'static str, id: DbId) -> Result<DbId, CoreError> {
    if id <= 0 {
        return Err(CoreError::Validation(format!(
            "{entity} id must be a positive integer, got {id}"
        )));
    }
    Ok(id)
}

/// Inclusive score interval. `min <= max` is the caller's responsibility.
#[derive(Debug, Clone, Copy, PartialEq, Deserialize)]
pub struct ScoreRange {
    #[serde(default = "default_min")]
    pub min: f64,
    #[serde(default = "default_max")]
    pub max: f64,
}

fn default_min() -> f64 {
    DEFAULT_MIN_SCORE
}

fn default_max() -> f64 {
    DEFAULT_MAX_SCORE
}

impl Default for ScoreRange {
    fn default() -> Self {
        Self {
            min: DEFAULT_MIN_SCORE,
            max: DEFAULT_MAX_SCORE,
        }
    }
}

/// A run of whole calendar days (UTC), half-open at the far end.
///
/// Built from two inclusive dates: every instant on `start` through the
/// last instant on `end` falls inside the window.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DayWindow {
    pub start: Timestamp,
    pub end_exclusive: Timestamp,
}

impl DayWindow {
    pub fn inclusive(start: NaiveDate, end: NaiveDate) -> Self {
        let day_after_end = end.succ_opt().unwrap_or(NaiveDate::MAX);
        Self {
            start: start.and_time(NaiveTime::default()).and_utc(),
            end_exclusive: day_after_end.and_time(NaiveTime::default()).and_utc(),
        }
    }
}

#[cfg(test)]
mod tests {
    use assert_matches::assert_matches;
    use chrono::{TimeZone, Utc};

    use super::*;

    #[test]
    fn test_positive_id_passes_through() {
        assert_eq!(require_positive_id("Agent", 7).unwrap(), 7);
    }

    #[test]
    fn test_zero_and_negative_ids_are_rejected() {
        assert_matches!(require_positive_id("Agent", 0), Err(CoreError::Validation(_)));
        assert_matches!(
            require_positive_id("Client", -3),
            Err(CoreError::Validation(msg)) if msg.contains("Client")
        );
    }

    #[test]
    fn test_score_range_defaults_to_unit_interval() {
        let range: ScoreRange = serde_json::from_str("{}").unwrap();
        assert_eq!(range, ScoreRange::default());

        let range: ScoreRange = serde_json::from_str(r#"{"max": 0.5}"#).unwrap();
        assert_eq!(range.min, DEFAULT_MIN_SCORE);
        assert_eq!(range.max, 0.5);
    }

    #[test]
    fn test_day_window_covers_whole_end_day() {
        let window = DayWindow::inclusive(
            NaiveDate::from_ymd_opt(2024, 3, 1).unwrap(),
            NaiveDate::from_ymd_opt(2024, 3, 2).unwrap(),
        );

        assert_eq!(
            window.start,
            Utc.with_ymd_and_hms(2024, 3, 1, 0, 0, 0).unwrap()
        );
        assert_eq!(
            window.end_exclusive,
            Utc.with_ymd_and_hms(2024, 3, 3, 0, 0, 0).unwrap()
        );
    }

    #[test]
    fn test_single_day_window() {
        let day = NaiveDate::from_ymd_opt(2024, 12, 31).unwrap();
        let window = DayWindow::inclusive(day, day);
        assert_eq!(
            window.end_exclusive,
            Utc.with_ymd_and_hms(2025, 1, 1, 0, 0, 0).unwrap()
        );
    }
}
