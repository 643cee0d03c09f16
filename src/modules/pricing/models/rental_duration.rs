use rust_decimal::Decimal;
use serde::Serialize;

pub const MS_PER_HOUR: i64 = 3_600_000;
pub const MS_PER_DAY: i64 = 24 * MS_PER_HOUR;

/// How a rental is billed
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum RentalType {
    Hourly,
    Daily,
}

/// Classified length of a rental
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RentalDuration {
    pub rental_type: RentalType,
    pub elapsed_ms: i64,
    /// Started hours, `ceil(elapsed / 1h)`
    pub hours: i64,
    /// Started days for daily rentals, `ceil(elapsed / 24h)`; 0 for hourly rentals
    pub days: i64,
}

impl RentalDuration {
    /// Number of units the tariff accumulator iterates over
    pub fn billed_units(&self) -> i64 {
        match self.rental_type {
            RentalType::Hourly => self.hours,
            RentalType::Daily => self.days,
        }
    }

    pub fn unit_ms(&self) -> i64 {
        match self.rental_type {
            RentalType::Hourly => MS_PER_HOUR,
            RentalType::Daily => MS_PER_DAY,
        }
    }

    /// Share of the last unit actually used, in `(0, 1]`
    pub fn final_unit_fraction(&self) -> Decimal {
        let unit_ms = self.unit_ms();
        let used = self.elapsed_ms - (self.billed_units() - 1) * unit_ms;
        if used >= unit_ms {
            Decimal::ONE
        } else {
            Decimal::from(used) / Decimal::from(unit_ms)
        }
    }
}

/// Ceiling division for positive operands
pub(crate) fn ceil_div(value: i64, unit: i64) -> i64 {
    (value + unit - 1) / unit
}
