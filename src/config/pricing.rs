use chrono::NaiveDate;
use rust_decimal::Decimal;
use std::str::FromStr;
use std::sync::Arc;
use std::time::Duration;

use crate::core::{AppError, BusinessTimezone, Result};
use crate::modules::pricing::models::{CostRates, PartialUnitPolicy, PricingPolicy, TariffRule};
use crate::modules::pricing::services::{ExchangeRateProvider, FixedRateProvider, HttpRateProvider};

/// Pricing knobs read from the environment
#[derive(Debug, Clone)]
pub struct PricingConfig {
    pub utc_offset_hours: i32,
    pub tax_rate: Decimal,
    pub insurance_rate: Decimal,
    pub deposit_rate: Decimal,
    pub usd_vnd_rate: Decimal,
    pub partial_unit: PartialUnitPolicy,
    pub max_rental_days: i64,
    pub holidays: Vec<NaiveDate>,
    pub holiday_multiplier: Decimal,
    pub exchange_rate_url: Option<String>,
    pub exchange_rate_retries: u32,
}

fn parse_or<T: FromStr>(
    lookup: &impl Fn(&str) -> Option<String>,
    key: &str,
    default: T,
) -> Result<T> {
    match lookup(key) {
        Some(raw) if !raw.trim().is_empty() => raw
            .trim()
            .parse()
            .map_err(|_| AppError::Configuration(format!("Invalid {}", key))),
        _ => Ok(default),
    }
}

impl PricingConfig {
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build from any key lookup; missing keys fall back to the standard tariff
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self> {
        let defaults = CostRates::default();

        let holidays = match lookup("PRICING_HOLIDAYS") {
            Some(raw) => raw
                .split(',')
                .map(str::trim)
                .filter(|s| !s.is_empty())
                .map(|s| {
                    NaiveDate::parse_from_str(s, "%Y-%m-%d").map_err(|_| {
                        AppError::Configuration(format!("Invalid PRICING_HOLIDAYS date: {}", s))
                    })
                })
                .collect::<Result<Vec<_>>>()?,
            None => Vec::new(),
        };

        let partial_unit = match lookup("PARTIAL_UNIT_POLICY") {
            Some(raw) => raw.parse().map_err(AppError::Configuration)?,
            None => PartialUnitPolicy::default(),
        };

        Ok(Self {
            utc_offset_hours: parse_or(&lookup, "PRICING_UTC_OFFSET_HOURS", 7)?,
            tax_rate: parse_or(&lookup, "PRICING_TAX_RATE", defaults.tax_rate)?,
            insurance_rate: parse_or(&lookup, "PRICING_INSURANCE_RATE", defaults.insurance_rate)?,
            deposit_rate: parse_or(&lookup, "PRICING_DEPOSIT_RATE", defaults.deposit_rate)?,
            usd_vnd_rate: parse_or(
                &lookup,
                "PRICING_USD_VND_RATE",
                FixedRateProvider::DEFAULT_USD_TO_VND,
            )?,
            partial_unit,
            max_rental_days: parse_or(
                &lookup,
                "MAX_RENTAL_DAYS",
                PricingPolicy::DEFAULT_MAX_RENTAL_DAYS,
            )?,
            holidays,
            holiday_multiplier: parse_or(
                &lookup,
                "PRICING_HOLIDAY_MULTIPLIER",
                Decimal::new(15, 1),
            )?,
            exchange_rate_url: lookup("EXCHANGE_RATE_URL").filter(|s| !s.trim().is_empty()),
            exchange_rate_retries: parse_or(&lookup, "EXCHANGE_RATE_RETRIES", 2)?,
        })
    }

    pub fn validate(&self) -> Result<()> {
        for (name, rate) in [
            ("PRICING_TAX_RATE", self.tax_rate),
            ("PRICING_INSURANCE_RATE", self.insurance_rate),
            ("PRICING_DEPOSIT_RATE", self.deposit_rate),
        ] {
            if rate < Decimal::ZERO || rate > Decimal::ONE {
                return Err(AppError::Configuration(format!(
                    "{} must be between 0 and 1",
                    name
                )));
            }
        }

        if self.usd_vnd_rate <= Decimal::ZERO {
            return Err(AppError::Configuration(
                "PRICING_USD_VND_RATE must be positive".to_string(),
            ));
        }

        if self.holiday_multiplier <= Decimal::ZERO {
            return Err(AppError::Configuration(
                "PRICING_HOLIDAY_MULTIPLIER must be positive".to_string(),
            ));
        }

        if !(1..=PricingPolicy::MAX_RENTAL_DAYS_LIMIT).contains(&self.max_rental_days) {
            return Err(AppError::Configuration(format!(
                "MAX_RENTAL_DAYS must be between 1 and {}",
                PricingPolicy::MAX_RENTAL_DAYS_LIMIT
            )));
        }

        BusinessTimezone::from_utc_offset_hours(self.utc_offset_hours)?;
        Ok(())
    }

    /// Tariff table, timezone and cost rates for the calculator
    pub fn policy(&self) -> Result<PricingPolicy> {
        let mut policy = PricingPolicy {
            timezone: BusinessTimezone::from_utc_offset_hours(self.utc_offset_hours)?,
            partial_unit: self.partial_unit,
            cost_rates: CostRates {
                insurance_rate: self.insurance_rate,
                tax_rate: self.tax_rate,
                deposit_rate: self.deposit_rate,
            },
            max_rental_days: self.max_rental_days,
            ..PricingPolicy::default()
        };

        if !self.holidays.is_empty() {
            policy = policy.with_rule(TariffRule::holidays(
                self.holidays.clone(),
                self.holiday_multiplier,
            ));
        }

        Ok(policy)
    }

    /// Live provider when `EXCHANGE_RATE_URL` is set, fixed table otherwise
    pub fn exchange_rate_provider(&self) -> Result<Arc<dyn ExchangeRateProvider>> {
        match &self.exchange_rate_url {
            Some(url) => Ok(Arc::new(HttpRateProvider::new(
                url.clone(),
                self.exchange_rate_retries,
                Duration::from_secs(5),
            )?)),
            None => Ok(Arc::new(FixedRateProvider::new(self.usd_vnd_rate)?)),
        }
    }
}
