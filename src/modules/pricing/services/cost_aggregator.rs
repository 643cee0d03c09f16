use rust_decimal::Decimal;

use crate::modules::pricing::models::{CostRates, CostSummary};

/// Adds insurance, tax and deposit on top of the base price
#[derive(Debug, Clone, Copy)]
pub struct CostAggregator {
    rates: CostRates,
}

impl CostAggregator {
    pub fn new(rates: CostRates) -> Self {
        Self { rates }
    }

    /// insurance = base × insurance_rate (if opted in)
    /// taxes     = (base + insurance) × tax_rate
    /// total     = base + insurance + taxes
    /// deposit   = total × deposit_rate
    pub fn aggregate(&self, base_price: Decimal, insurance_premium: bool) -> CostSummary {
        let insurance_price = if insurance_premium {
            base_price * self.rates.insurance_rate
        } else {
            Decimal::ZERO
        };

        let subtotal = base_price + insurance_price;
        let taxes = subtotal * self.rates.tax_rate;
        let total_price = subtotal + taxes;
        let deposit = total_price * self.rates.deposit_rate;

        CostSummary {
            base_price,
            insurance_price,
            taxes,
            total_price,
            deposit,
        }
    }
}

impl Default for CostAggregator {
    fn default() -> Self {
        Self::new(CostRates::default())
    }
}
