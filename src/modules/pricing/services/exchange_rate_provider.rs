use async_trait::async_trait;
use rust_decimal::Decimal;

use crate::core::{AppError, Currency, Result};

/// Source of conversion rates between quote currencies
#[async_trait]
pub trait ExchangeRateProvider: Send + Sync {
    /// Units of `to` per one unit of `from`
    async fn rate(&self, from: Currency, to: Currency) -> Result<Decimal>;

    /// Provider name for logs
    fn name(&self) -> &str;
}

/// Flat, non-authoritative USD/VND table
#[derive(Debug, Clone)]
pub struct FixedRateProvider {
    usd_to_vnd: Decimal,
}

impl FixedRateProvider {
    /// Rate used when nothing else is configured
    pub const DEFAULT_USD_TO_VND: Decimal = Decimal::from_parts(26_000, 0, 0, false, 0);

    pub fn new(usd_to_vnd: Decimal) -> Result<Self> {
        if usd_to_vnd <= Decimal::ZERO {
            return Err(AppError::Configuration(
                "USD to VND rate must be positive".to_string(),
            ));
        }

        Ok(Self { usd_to_vnd })
    }
}

impl Default for FixedRateProvider {
    fn default() -> Self {
        Self {
            usd_to_vnd: Self::DEFAULT_USD_TO_VND,
        }
    }
}

#[async_trait]
impl ExchangeRateProvider for FixedRateProvider {
    async fn rate(&self, from: Currency, to: Currency) -> Result<Decimal> {
        Ok(match (from, to) {
            (Currency::USD, Currency::VND) => self.usd_to_vnd,
            (Currency::VND, Currency::USD) => Decimal::ONE / self.usd_to_vnd,
            _ => Decimal::ONE,
        })
    }

    fn name(&self) -> &str {
        "fixed"
    }
}
