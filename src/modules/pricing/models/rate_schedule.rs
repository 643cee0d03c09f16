use rust_decimal::Decimal;

use crate::core::Currency;

/// Hourly and daily base prices attached to a vehicle
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RateSchedule {
    pub hourly: Decimal,
    pub daily: Decimal,
    pub currency: Currency,
}

impl RateSchedule {
    /// Fallback hourly rate when a vehicle carries no pricing (USD)
    pub const DEFAULT_HOURLY: Decimal = Decimal::from_parts(20, 0, 0, false, 0);
    /// Fallback daily rate when a vehicle carries no pricing (USD)
    pub const DEFAULT_DAILY: Decimal = Decimal::from_parts(135, 0, 0, false, 0);

    pub fn new(hourly: Decimal, daily: Decimal, currency: Currency) -> Self {
        Self {
            hourly,
            daily,
            currency,
        }
    }

    /// Same schedule expressed in another currency at `rate` target units per source unit
    pub fn converted(&self, rate: Decimal, target: Currency) -> Self {
        Self {
            hourly: self.hourly * rate,
            daily: self.daily * rate,
            currency: target,
        }
    }

    pub fn has_daily_rate(&self) -> bool {
        !self.daily.is_zero()
    }
}

impl Default for RateSchedule {
    fn default() -> Self {
        Self::new(Self::DEFAULT_HOURLY, Self::DEFAULT_DAILY, Currency::USD)
    }
}
