use rust_decimal::Decimal;
use serde::Serialize;

use super::rate_schedule::RateSchedule;
use super::rental_duration::{RentalDuration, RentalType};
use crate::core::Currency;

/// Unrounded output of the cost aggregator
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CostSummary {
    pub base_price: Decimal,
    pub insurance_price: Decimal,
    pub taxes: Decimal,
    pub total_price: Decimal,
    pub deposit: Decimal,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RentalDetails {
    pub rental_type: RentalType,
    pub hours: i64,
    pub days: i64,
}

/// Price quote returned to clients.
///
/// Field names follow the public API (`hourly_rate` next to `basePrice`).
/// Amounts are rounded to the currency scale and serialized as JSON numbers.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PriceBreakdown {
    #[serde(with = "rust_decimal::serde::arbitrary_precision")]
    pub hourly_rate: Decimal,
    #[serde(with = "rust_decimal::serde::arbitrary_precision")]
    pub daily_rate: Decimal,
    pub currency: Currency,
    #[serde(with = "rust_decimal::serde::arbitrary_precision")]
    pub deposit: Decimal,
    #[serde(rename = "basePrice", with = "rust_decimal::serde::arbitrary_precision")]
    pub base_price: Decimal,
    #[serde(rename = "insurancePrice", with = "rust_decimal::serde::arbitrary_precision")]
    pub insurance_price: Decimal,
    #[serde(with = "rust_decimal::serde::arbitrary_precision")]
    pub taxes: Decimal,
    #[serde(rename = "totalPrice", with = "rust_decimal::serde::arbitrary_precision")]
    pub total_price: Decimal,
    pub details: RentalDetails,
}

impl PriceBreakdown {
    /// Round every amount to the schedule's currency and assemble the quote
    pub fn new(rates: &RateSchedule, duration: &RentalDuration, costs: &CostSummary) -> Self {
        let currency = rates.currency;

        Self {
            hourly_rate: currency.round(rates.hourly),
            daily_rate: currency.round(rates.daily),
            currency,
            deposit: currency.round(costs.deposit),
            base_price: currency.round(costs.base_price),
            insurance_price: currency.round(costs.insurance_price),
            taxes: currency.round(costs.taxes),
            total_price: currency.round(costs.total_price),
            details: RentalDetails {
                rental_type: duration.rental_type,
                hours: duration.hours,
                days: duration.days,
            },
        }
    }
}

/// Success envelope `{ success: true, data: ... }`
#[derive(Debug, Serialize)]
pub struct PriceQuoteResponse {
    pub success: bool,
    pub data: PriceBreakdown,
}

impl From<PriceBreakdown> for PriceQuoteResponse {
    fn from(data: PriceBreakdown) -> Self {
        Self {
            success: true,
            data,
        }
    }
}
