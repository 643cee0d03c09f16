use std::sync::Arc;

use super::exchange_rate_provider::ExchangeRateProvider;
use crate::core::{Currency, Result};
use crate::modules::pricing::models::RateSchedule;

/// Re-expresses a rate schedule in the currency the client asked for
#[derive(Clone)]
pub struct CurrencyConverter {
    provider: Arc<dyn ExchangeRateProvider>,
}

impl CurrencyConverter {
    pub fn new(provider: Arc<dyn ExchangeRateProvider>) -> Self {
        Self { provider }
    }

    /// Convert both rates into `target`. No rounding happens here.
    pub async fn convert(&self, rates: RateSchedule, target: Currency) -> Result<RateSchedule> {
        if rates.currency == target {
            return Ok(rates);
        }

        let rate = self.provider.rate(rates.currency, target).await?;

        tracing::debug!(
            provider = self.provider.name(),
            from = %rates.currency,
            to = %target,
            %rate,
            "Converting rate schedule"
        );

        Ok(rates.converted(rate, target))
    }
}
