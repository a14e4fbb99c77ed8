use chrono::format::{Item, StrftimeItems};
use chrono::{TimeZone, Utc};
use serde::{Deserialize, Serialize};

use crate::error::{ChartError, ChartResult};

const ONE_SECOND_MS: f64 = 1_000.0;
const ONE_MINUTE_MS: f64 = 60.0 * ONE_SECOND_MS;
const ONE_HOUR_MS: f64 = 60.0 * ONE_MINUTE_MS;
const ONE_DAY_MS: f64 = 24.0 * ONE_HOUR_MS;
const ONE_MONTH_MS: f64 = 30.0 * ONE_DAY_MS;
const ONE_YEAR_MS: f64 = 365.0 * ONE_DAY_MS;

/// Granularity used to express elapsed-time offsets.
///
/// A render selects one unit from its largest X offset and keeps it for every
/// axis tick and tooltip title, so labels within a chart never mix units.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum TimeUnit {
    Seconds,
    Minutes,
    Hours,
    Days,
    Months,
    Years,
}

impl TimeUnit {
    /// Unit that keeps the given offset readable as a small whole number.
    #[must_use]
    pub fn for_offset(offset_ms: f64) -> Self {
        let magnitude = offset_ms.abs();
        if magnitude < ONE_MINUTE_MS {
            TimeUnit::Seconds
        } else if magnitude < ONE_HOUR_MS {
            TimeUnit::Minutes
        } else if magnitude < ONE_DAY_MS {
            TimeUnit::Hours
        } else if magnitude < ONE_MONTH_MS {
            TimeUnit::Days
        } else if magnitude < ONE_YEAR_MS {
            TimeUnit::Months
        } else {
            TimeUnit::Years
        }
    }

    const fn divisor_ms(self) -> f64 {
        match self {
            TimeUnit::Seconds => ONE_SECOND_MS,
            TimeUnit::Minutes => ONE_MINUTE_MS,
            TimeUnit::Hours => ONE_HOUR_MS,
            TimeUnit::Days => ONE_DAY_MS,
            TimeUnit::Months => ONE_MONTH_MS,
            TimeUnit::Years => ONE_YEAR_MS,
        }
    }

    const fn noun(self, plural: bool) -> &'static str {
        match (self, plural) {
            (TimeUnit::Seconds, false) => "second",
            (TimeUnit::Seconds, true) => "seconds",
            (TimeUnit::Minutes, false) => "minute",
            (TimeUnit::Minutes, true) => "minutes",
            (TimeUnit::Hours, false) => "hour",
            (TimeUnit::Hours, true) => "hours",
            (TimeUnit::Days, false) => "day",
            (TimeUnit::Days, true) => "days",
            (TimeUnit::Months, false) => "month",
            (TimeUnit::Months, true) => "months",
            (TimeUnit::Years, false) => "year",
            (TimeUnit::Years, true) => "years",
        }
    }
}

/// Formats an elapsed offset in the given unit, e.g. `"3 months"`.
#[must_use]
pub fn format_timeline(offset_ms: f64, unit: TimeUnit) -> String {
    let count = (offset_ms / unit.divisor_ms()).floor() as i64;
    format!("{count} {}", unit.noun(count != 1))
}

/// Rejects strftime patterns chrono cannot render before any drawing starts.
pub fn validate_date_format(pattern: &str) -> ChartResult<()> {
    let has_error = StrftimeItems::new(pattern).any(|item| matches!(item, Item::Error));
    if has_error {
        return Err(ChartError::InvalidOptions(format!(
            "unsupported date format pattern: `{pattern}`"
        )));
    }
    Ok(())
}

/// Formats a unix-millisecond X value with a pre-validated strftime pattern.
#[must_use]
pub fn format_date(unix_ms: f64, pattern: &str) -> String {
    let date = Utc
        .timestamp_millis_opt(unix_ms as i64)
        .single()
        .unwrap_or(chrono::DateTime::UNIX_EPOCH);
    date.format(pattern).to_string()
}

/// Plain integer formatting for star counts on the Y axis.
#[must_use]
pub fn format_count(value: f64) -> String {
    format!("{}", value.round() as i64)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unit_thresholds_step_through_granularities() {
        assert_eq!(TimeUnit::for_offset(30.0 * 1_000.0), TimeUnit::Seconds);
        assert_eq!(TimeUnit::for_offset(5.0 * 60_000.0), TimeUnit::Minutes);
        assert_eq!(TimeUnit::for_offset(7.0 * 3_600_000.0), TimeUnit::Hours);
        assert_eq!(TimeUnit::for_offset(10.0 * 86_400_000.0), TimeUnit::Days);
        assert_eq!(TimeUnit::for_offset(90.0 * 86_400_000.0), TimeUnit::Months);
        assert_eq!(TimeUnit::for_offset(400.0 * 86_400_000.0), TimeUnit::Years);
    }

    #[test]
    fn timeline_formatting_pluralizes() {
        assert_eq!(
            format_timeline(86_400_000.0, TimeUnit::Days),
            "1 day".to_owned()
        );
        assert_eq!(
            format_timeline(3.0 * 86_400_000.0, TimeUnit::Days),
            "3 days".to_owned()
        );
    }

    #[test]
    fn bad_strftime_pattern_is_rejected() {
        assert!(validate_date_format("%b %d, %Y").is_ok());
        assert!(validate_date_format("%Q nope").is_err());
    }

    #[test]
    fn dates_format_with_default_pattern() {
        // 2020-05-01T00:00:00Z
        assert_eq!(
            format_date(1_588_291_200_000.0, "%b %d, %Y"),
            "May 01, 2020".to_owned()
        );
    }
}
