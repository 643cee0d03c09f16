use crate::core::Result;
use crate::modules::pricing::models::{
    BookingWindow, PriceBreakdown, PricingPolicy, RateSchedule,
};

use super::cost_aggregator::CostAggregator;
use super::duration_classifier::DurationClassifier;
use super::tariff_accumulator::TariffAccumulator;

/// Pure price computation: classify → accumulate → aggregate → round.
/// Rates must already be in the quote currency.
#[derive(Debug, Clone)]
pub struct PriceCalculator {
    policy: PricingPolicy,
    classifier: DurationClassifier,
    accumulator: TariffAccumulator,
    aggregator: CostAggregator,
}

impl PriceCalculator {
    pub fn new(policy: PricingPolicy) -> Self {
        let classifier = DurationClassifier::new(policy.max_rental_days);
        let accumulator =
            TariffAccumulator::new(policy.rules.clone(), policy.timezone, policy.partial_unit);
        let aggregator = CostAggregator::new(policy.cost_rates);

        Self {
            policy,
            classifier,
            accumulator,
            aggregator,
        }
    }

    /// Parse and validate raw `startAt`/`endAt` in the business timezone
    pub fn booking_window(&self, start_at: &str, end_at: &str) -> Result<BookingWindow> {
        BookingWindow::parse(start_at, end_at, &self.policy.timezone)
    }

    pub fn calculate(
        &self,
        rates: &RateSchedule,
        window: &BookingWindow,
        insurance_premium: bool,
    ) -> Result<PriceBreakdown> {
        let duration = self.classifier.classify(window, rates)?;
        let base_price = self.accumulator.accumulate(window.start(), &duration, rates);
        let costs = self.aggregator.aggregate(base_price, insurance_premium);

        tracing::debug!(
            rental_type = ?duration.rental_type,
            units = duration.billed_units(),
            hourly = %rates.hourly,
            daily = %rates.daily,
            currency = %rates.currency,
            base_price = %costs.base_price,
            total_price = %costs.total_price,
            "Computed booking price"
        );

        Ok(PriceBreakdown::new(rates, &duration, &costs))
    }
}

impl Default for PriceCalculator {
    fn default() -> Self {
        Self::new(PricingPolicy::default())
    }
}
