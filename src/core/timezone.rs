use chrono::{DateTime, FixedOffset, NaiveDateTime, Offset, TimeZone, Utc};

use crate::core::{AppError, Result};

/// Business timezone handling.
/// Timestamps are carried as UTC; weekday and hour-of-day rules are evaluated
/// in the operator's local offset.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BusinessTimezone {
    offset: FixedOffset,
}

impl BusinessTimezone {
    /// Build from a whole-hour offset east of UTC (e.g. 7 for Asia/Ho_Chi_Minh)
    pub fn from_utc_offset_hours(hours: i32) -> Result<Self> {
        hours
            .checked_mul(3600)
            .and_then(FixedOffset::east_opt)
            .map(|offset| Self { offset })
            .ok_or_else(|| AppError::Configuration(format!("Invalid UTC offset: {}h", hours)))
    }

    pub fn utc() -> Self {
        Self { offset: Utc.fix() }
    }

    /// Convert UTC timestamp to the business timezone
    pub fn to_local(&self, utc_time: DateTime<Utc>) -> DateTime<FixedOffset> {
        utc_time.with_timezone(&self.offset)
    }

    /// Parse a request timestamp.
    ///
    /// Accepts RFC 3339 (`2025-11-01T10:00:00Z`, `2025-11-01T17:00:00+07:00`) and
    /// naive ISO 8601 date-times (`2025-11-01T17:00:00`), the latter read as
    /// business-local wall clock time.
    pub fn parse_timestamp(&self, raw: &str) -> Result<DateTime<Utc>> {
        let raw = raw.trim();

        if let Ok(parsed) = DateTime::parse_from_rfc3339(raw) {
            return Ok(parsed.with_timezone(&Utc));
        }

        for format in ["%Y-%m-%dT%H:%M:%S%.f", "%Y-%m-%dT%H:%M", "%Y-%m-%d %H:%M:%S"] {
            if let Ok(naive) = NaiveDateTime::parse_from_str(raw, format) {
                return self
                    .offset
                    .from_local_datetime(&naive)
                    .single()
                    .map(|local| local.with_timezone(&Utc))
                    .ok_or_else(|| AppError::invalid_range(format!("ambiguous timestamp '{}'", raw)));
            }
        }

        Err(AppError::invalid_range(format!("unparsable timestamp '{}'", raw)))
    }
}

impl Default for BusinessTimezone {
    fn default() -> Self {
        Self::from_utc_offset_hours(7).unwrap_or_else(|_| Self::utc())
    }
}
