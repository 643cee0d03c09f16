use rust_decimal::{Decimal, RoundingStrategy};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Supported quote currencies with their decimal precision rules
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Currency {
    /// US Dollar (2 decimal places)
    #[default]
    USD,
    /// Vietnamese Dong (no decimal places)
    VND,
}

impl Currency {
    /// Returns the decimal scale for this currency
    /// - USD: 2
    /// - VND: 0
    pub fn scale(&self) -> u32 {
        match self {
            Currency::USD => 2,
            Currency::VND => 0,
        }
    }

    /// Rounds a decimal value to the scale of this currency, half away from zero.
    ///
    /// The result always carries exactly `scale()` decimal places, so `44`
    /// in USD becomes `44.00`.
    pub fn round(&self, amount: Decimal) -> Decimal {
        let mut rounded =
            amount.round_dp_with_strategy(self.scale(), RoundingStrategy::MidpointAwayFromZero);
        rounded.rescale(self.scale());
        rounded
    }

    /// Formats an amount for display with the correct decimal places
    pub fn format_amount(&self, amount: Decimal) -> String {
        format!("{} {}", self, self.round(amount))
    }

    pub fn code(&self) -> &'static str {
        match self {
            Currency::USD => "USD",
            Currency::VND => "VND",
        }
    }
}

impl fmt::Display for Currency {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

impl std::str::FromStr for Currency {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_uppercase().as_str() {
            "USD" => Ok(Currency::USD),
            "VND" => Ok(Currency::VND),
            _ => Err(format!("Invalid currency: {}", s)),
        }
    }
}
