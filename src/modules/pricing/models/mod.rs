pub mod booking_request;
pub mod price_breakdown;
pub mod pricing_policy;
pub mod rate_schedule;
pub mod rental_duration;
pub mod tariff_rule;

pub use booking_request::{BookingWindow, PriceQuoteRequest};
pub use price_breakdown::{CostSummary, PriceBreakdown, PriceQuoteResponse, RentalDetails};
pub use pricing_policy::{CostRates, PartialUnitPolicy, PricingPolicy};
pub use rate_schedule::RateSchedule;
pub use rental_duration::{RentalDuration, RentalType, MS_PER_DAY, MS_PER_HOUR};
pub use tariff_rule::{default_rules, BillingUnit, RuleCondition, TariffRule};
