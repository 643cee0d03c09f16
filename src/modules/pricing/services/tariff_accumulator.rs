use chrono::{DateTime, Duration, Utc};
use rust_decimal::Decimal;

use crate::core::BusinessTimezone;
use crate::modules::pricing::models::{
    BillingUnit, PartialUnitPolicy, RateSchedule, RentalDuration, RentalType, TariffRule,
};

/// Sums per-unit charges, applying every matching rule of the multiplier table
#[derive(Debug, Clone)]
pub struct TariffAccumulator {
    rules: Vec<TariffRule>,
    timezone: BusinessTimezone,
    partial_unit: PartialUnitPolicy,
}

impl TariffAccumulator {
    pub fn new(
        rules: Vec<TariffRule>,
        timezone: BusinessTimezone,
        partial_unit: PartialUnitPolicy,
    ) -> Self {
        Self {
            rules,
            timezone,
            partial_unit,
        }
    }

    /// Product of the multipliers of all rules matching a unit starting at `unit_start`
    pub fn multiplier(&self, unit: BillingUnit, unit_start: DateTime<Utc>) -> Decimal {
        let local = self.timezone.to_local(unit_start);

        self.rules
            .iter()
            .filter(|rule| rule.applies(unit, &local))
            .fold(Decimal::ONE, |acc, rule| acc * rule.multiplier)
    }

    /// Base price of the rental before insurance, tax and deposit
    pub fn accumulate(
        &self,
        start: DateTime<Utc>,
        duration: &RentalDuration,
        rates: &RateSchedule,
    ) -> Decimal {
        let (unit, unit_rate) = match duration.rental_type {
            RentalType::Hourly => (BillingUnit::Hour, rates.hourly),
            RentalType::Daily => (BillingUnit::Day, rates.daily),
        };
        let unit_ms = duration.unit_ms();
        let units = duration.billed_units();

        let mut total = Decimal::ZERO;
        for i in 0..units {
            let unit_start = start + Duration::milliseconds(i * unit_ms);
            let mut charge = unit_rate * self.multiplier(unit, unit_start);

            if i == units - 1 && self.partial_unit == PartialUnitPolicy::Prorated {
                charge *= duration.final_unit_fraction();
            }

            total += charge;
        }

        total
    }
}
