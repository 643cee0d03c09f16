use chrono::{DateTime, Utc};
use serde::Deserialize;

use crate::core::{AppError, BusinessTimezone, Currency, Result};

/// Body of `POST /bookings/price`
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PriceQuoteRequest {
    pub vehicle_id: String,
    pub start_at: String,
    pub end_at: String,
    #[serde(default)]
    pub insurance_premium: bool,
    #[serde(default)]
    pub currency: Currency,
}

/// Validated rental interval. `end` is strictly after `start`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BookingWindow {
    start: DateTime<Utc>,
    end: DateTime<Utc>,
}

impl BookingWindow {
    pub fn new(start: DateTime<Utc>, end: DateTime<Utc>) -> Result<Self> {
        if end <= start {
            return Err(AppError::invalid_range(format!(
                "endAt ({}) must be after startAt ({})",
                end.to_rfc3339(),
                start.to_rfc3339()
            )));
        }

        Ok(Self { start, end })
    }

    /// Parse raw request timestamps in the business timezone and validate the range
    pub fn parse(start_at: &str, end_at: &str, timezone: &BusinessTimezone) -> Result<Self> {
        let start = timezone.parse_timestamp(start_at)?;
        let end = timezone.parse_timestamp(end_at)?;
        Self::new(start, end)
    }

    pub fn start(&self) -> DateTime<Utc> {
        self.start
    }

    pub fn end(&self) -> DateTime<Utc> {
        self.end
    }

    /// Elapsed milliseconds, always positive
    pub fn elapsed_ms(&self) -> i64 {
        (self.end - self.start).num_milliseconds()
    }
}
