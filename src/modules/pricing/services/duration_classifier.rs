use crate::core::{AppError, Result};
use crate::modules::pricing::models::rental_duration::ceil_div;
use crate::modules::pricing::models::{
    BookingWindow, PricingPolicy, RateSchedule, RentalDuration, RentalType, MS_PER_DAY,
    MS_PER_HOUR,
};

/// Decides between hourly and daily billing
#[derive(Debug, Clone, Copy)]
pub struct DurationClassifier {
    max_rental_days: i64,
}

impl DurationClassifier {
    /// `max_rental_days` is capped at `PricingPolicy::MAX_RENTAL_DAYS_LIMIT`
    pub fn new(max_rental_days: i64) -> Self {
        Self {
            max_rental_days: max_rental_days.min(PricingPolicy::MAX_RENTAL_DAYS_LIMIT),
        }
    }

    /// Rentals of 24h or more are billed daily when the schedule has a daily rate.
    /// Otherwise every started hour is billed.
    pub fn classify(&self, window: &BookingWindow, rates: &RateSchedule) -> Result<RentalDuration> {
        let elapsed_ms = window.elapsed_ms();

        if elapsed_ms <= 0 {
            return Err(AppError::invalid_range("endAt must be after startAt"));
        }

        let max_elapsed_ms = self
            .max_rental_days
            .checked_mul(MS_PER_DAY)
            .unwrap_or(i64::MAX);

        if elapsed_ms > max_elapsed_ms {
            return Err(AppError::invalid_range(format!(
                "rental exceeds the maximum of {} days",
                self.max_rental_days
            )));
        }

        let hours = ceil_div(elapsed_ms, MS_PER_HOUR);

        let duration = if elapsed_ms >= MS_PER_DAY && rates.has_daily_rate() {
            RentalDuration {
                rental_type: RentalType::Daily,
                elapsed_ms,
                hours,
                days: ceil_div(elapsed_ms, MS_PER_DAY),
            }
        } else {
            RentalDuration {
                rental_type: RentalType::Hourly,
                elapsed_ms,
                hours,
                days: 0,
            }
        };

        Ok(duration)
    }
}
