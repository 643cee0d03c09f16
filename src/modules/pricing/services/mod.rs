pub mod cost_aggregator;
pub mod currency_converter;
pub mod duration_classifier;
pub mod exchange_rate_provider;
pub mod http_rate_provider;
pub mod price_calculator;
pub mod pricing_service;
pub mod rate_resolver;
pub mod tariff_accumulator;

pub use cost_aggregator::CostAggregator;
pub use currency_converter::CurrencyConverter;
pub use duration_classifier::DurationClassifier;
pub use exchange_rate_provider::{ExchangeRateProvider, FixedRateProvider};
pub use http_rate_provider::HttpRateProvider;
pub use price_calculator::PriceCalculator;
pub use pricing_service::PricingService;
pub use rate_resolver::resolve_rates;
pub use tariff_accumulator::TariffAccumulator;
