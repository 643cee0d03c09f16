pub mod controllers;
pub mod models;
pub mod services;

pub use controllers::configure;
pub use models::{PriceBreakdown, PriceQuoteRequest, PricingPolicy, RateSchedule};
pub use services::{ExchangeRateProvider, FixedRateProvider, PriceCalculator, PricingService};
