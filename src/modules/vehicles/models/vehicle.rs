use rust_decimal::Decimal;
use sqlx::FromRow;

use crate::core::{AppError, Currency, Result};
use crate::modules::pricing::models::RateSchedule;

/// Vehicle as seen by the pricing service. Only price-related fields are loaded.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Vehicle {
    pub id: String,
    /// Explicit rate schedule, takes precedence over the legacy per-unit prices
    pub pricing: Option<RateSchedule>,
    /// Legacy hourly price in USD
    pub price_per_hour: Option<Decimal>,
    /// Legacy daily price in USD
    pub price_per_day: Option<Decimal>,
}

impl Vehicle {
    /// Vehicle with no pricing at all; quotes use the default schedule
    pub fn unpriced(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            pricing: None,
            price_per_hour: None,
            price_per_day: None,
        }
    }

    pub fn with_pricing(mut self, pricing: RateSchedule) -> Self {
        self.pricing = Some(pricing);
        self
    }

    pub fn with_legacy_prices(mut self, per_hour: Option<Decimal>, per_day: Option<Decimal>) -> Self {
        self.price_per_hour = per_hour;
        self.price_per_day = per_day;
        self
    }
}

/// Row shape of the `vehicles` table
#[derive(Debug, Clone, FromRow)]
pub struct VehicleRow {
    pub id: String,
    pub price_per_hour: Option<Decimal>,
    pub price_per_day: Option<Decimal>,
    pub pricing_hourly: Option<Decimal>,
    pub pricing_daily: Option<Decimal>,
    pub pricing_currency: Option<String>,
}

impl TryFrom<VehicleRow> for Vehicle {
    type Error = AppError;

    fn try_from(row: VehicleRow) -> Result<Self> {
        let pricing = if row.pricing_hourly.is_some() || row.pricing_daily.is_some() {
            let currency = match row.pricing_currency.as_deref() {
                Some(code) => code.parse::<Currency>().map_err(|e| {
                    AppError::internal(format!("vehicle {} has bad pricing currency: {}", row.id, e))
                })?,
                None => Currency::USD,
            };

            Some(RateSchedule::new(
                row.pricing_hourly.unwrap_or(RateSchedule::DEFAULT_HOURLY),
                row.pricing_daily.unwrap_or(RateSchedule::DEFAULT_DAILY),
                currency,
            ))
        } else {
            None
        };

        Ok(Vehicle {
            id: row.id,
            pricing,
            price_per_hour: row.price_per_hour,
            price_per_day: row.price_per_day,
        })
    }
}
