use rust_decimal::Decimal;
use std::str::FromStr;

use super::tariff_rule::{default_rules, TariffRule};
use crate::core::BusinessTimezone;

/// How the last, partially used billing unit is charged
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PartialUnitPolicy {
    /// Any started hour or day is billed in full
    #[default]
    FullUnit,
    /// The final unit is billed pro rata to the time actually used
    Prorated,
}

impl FromStr for PartialUnitPolicy {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "full" | "full_unit" => Ok(PartialUnitPolicy::FullUnit),
            "prorated" | "prorate" => Ok(PartialUnitPolicy::Prorated),
            other => Err(format!("Invalid partial unit policy: {}", other)),
        }
    }
}

/// Percentages applied on top of the base price
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CostRates {
    pub insurance_rate: Decimal,
    pub tax_rate: Decimal,
    pub deposit_rate: Decimal,
}

impl Default for CostRates {
    fn default() -> Self {
        Self {
            insurance_rate: Decimal::new(10, 2),
            tax_rate: Decimal::new(10, 2),
            deposit_rate: Decimal::new(20, 2),
        }
    }
}

/// Everything the price calculator needs besides the request itself
#[derive(Debug, Clone)]
pub struct PricingPolicy {
    pub timezone: BusinessTimezone,
    pub rules: Vec<TariffRule>,
    pub partial_unit: PartialUnitPolicy,
    pub cost_rates: CostRates,
    pub max_rental_days: i64,
}

impl PricingPolicy {
    pub const DEFAULT_MAX_RENTAL_DAYS: i64 = 365;
    /// Longest bookable rental, whatever is configured
    pub const MAX_RENTAL_DAYS_LIMIT: i64 = 3650;

    pub fn with_timezone(mut self, timezone: BusinessTimezone) -> Self {
        self.timezone = timezone;
        self
    }

    pub fn with_rule(mut self, rule: TariffRule) -> Self {
        self.rules.push(rule);
        self
    }

    pub fn with_partial_unit(mut self, partial_unit: PartialUnitPolicy) -> Self {
        self.partial_unit = partial_unit;
        self
    }
}

impl Default for PricingPolicy {
    fn default() -> Self {
        Self {
            timezone: BusinessTimezone::default(),
            rules: default_rules(),
            partial_unit: PartialUnitPolicy::default(),
            cost_rates: CostRates::default(),
            max_rental_days: Self::DEFAULT_MAX_RENTAL_DAYS,
        }
    }
}
