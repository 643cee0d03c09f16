// Integration tests for the full quote flow:
// vehicle lookup → rate resolution → currency conversion → calculation

#[path = "../helpers/mod.rs"]
mod helpers;

use std::sync::Arc;

use async_trait::async_trait;
use chrono::NaiveDate;
use rust_decimal::Decimal;
use rust_decimal_macros::dec;

use evrent_pricing::core::{AppError, BusinessTimezone, Currency, Result};
use evrent_pricing::pricing::models::{PartialUnitPolicy, RentalType, TariffRule};
use evrent_pricing::pricing::services::{
    CurrencyConverter, ExchangeRateProvider, FixedRateProvider, PriceCalculator, PricingService,
};
use evrent_pricing::vehicles::{InMemoryVehicleRepository, Vehicle, VehicleRepository};
use helpers::*;

#[tokio::test]
async fn test_unpriced_vehicle_uses_default_schedule() {
    let service = pricing_service(utc_policy());
    let quote = service
        .quote(quote_request(
            UNPRICED_VEHICLE,
            "2025-11-03T10:00:00Z",
            "2025-11-03T12:00:00Z",
        ))
        .await
        .unwrap();

    assert_eq!(quote.hourly_rate, dec!(20));
    assert_eq!(quote.daily_rate, dec!(135));
    assert_eq!(quote.total_price, dec!(44.00));
}

#[tokio::test]
async fn test_explicit_pricing_is_used() {
    let service = pricing_service(utc_policy());
    let quote = service
        .quote(quote_request(
            PRICED_VEHICLE,
            "2025-11-04T00:00:00Z",
            "2025-11-05T00:00:00Z",
        ))
        .await
        .unwrap();

    assert_eq!(quote.details.rental_type, RentalType::Daily);
    assert_eq!(quote.base_price, dec!(150));
    assert_eq!(quote.total_price, dec!(165));
    assert_eq!(quote.deposit, dec!(33));
}

#[tokio::test]
async fn test_legacy_price_with_default_daily() {
    let service = pricing_service(utc_policy());

    let hourly = service
        .quote(quote_request(
            LEGACY_VEHICLE,
            "2025-11-04T10:00:00Z",
            "2025-11-04T13:00:00Z",
        ))
        .await
        .unwrap();
    assert_eq!(hourly.base_price, dec!(54));

    let daily = service
        .quote(quote_request(
            LEGACY_VEHICLE,
            "2025-11-04T10:00:00Z",
            "2025-11-05T10:00:00Z",
        ))
        .await
        .unwrap();
    assert_eq!(daily.daily_rate, dec!(135));
    assert_eq!(daily.base_price, dec!(135));
}

#[tokio::test]
async fn test_vnd_vehicle_quoted_in_usd() {
    let service = pricing_service(utc_policy());
    let quote = service
        .quote(quote_request(
            VND_VEHICLE,
            "2025-11-04T10:00:00Z",
            "2025-11-04T11:00:00Z",
        ))
        .await
        .unwrap();

    // 500 000 VND at 26 000 VND per USD
    assert_eq!(quote.currency, Currency::USD);
    assert_eq!(quote.hourly_rate, dec!(19.23));
    assert_eq!(quote.base_price, dec!(19.23));
    assert_eq!(quote.total_price, dec!(21.15));
}

#[tokio::test]
async fn test_vnd_vehicle_quoted_in_vnd_is_not_converted() {
    let service = pricing_service(utc_policy());
    let mut request = quote_request(VND_VEHICLE, "2025-11-04T10:00:00Z", "2025-11-04T11:00:00Z");
    request.currency = Currency::VND;

    let quote = service.quote(request).await.unwrap();
    assert_eq!(quote.hourly_rate, dec!(500000));
    assert_eq!(quote.total_price, dec!(550000));
}

#[tokio::test]
async fn test_hourly_only_vehicle_never_goes_daily() {
    let service = pricing_service(utc_policy());
    let quote = service
        .quote(quote_request(
            HOURLY_ONLY_VEHICLE,
            "2025-11-04T10:00:00Z",
            "2025-11-05T10:00:00Z",
        ))
        .await
        .unwrap();

    // 24 hours on a Tuesday, four of them peak
    assert_eq!(quote.details.rental_type, RentalType::Hourly);
    assert_eq!(quote.details.hours, 24);
    assert_eq!(quote.base_price, dec!(520));
}

#[tokio::test]
async fn test_insurance_premium_flows_through() {
    let service = pricing_service(utc_policy());
    let mut request = quote_request(
        UNPRICED_VEHICLE,
        "2025-11-03T10:00:00Z",
        "2025-11-03T12:00:00Z",
    );
    request.insurance_premium = true;

    let quote = service.quote(request).await.unwrap();
    assert_eq!(quote.insurance_price, dec!(4.00));
    assert_eq!(quote.taxes, dec!(4.40));
    assert_eq!(quote.total_price, dec!(48.40));
    assert_eq!(quote.deposit, dec!(9.68));
}

#[tokio::test]
async fn test_holiday_rule_from_policy() {
    let holiday = NaiveDate::from_ymd_opt(2025, 11, 4).unwrap();
    let policy = utc_policy().with_rule(TariffRule::holidays(vec![holiday], dec!(1.5)));
    let service = pricing_service(policy);

    let quote = service
        .quote(quote_request(
            UNPRICED_VEHICLE,
            "2025-11-04T00:00:00Z",
            "2025-11-06T00:00:00Z",
        ))
        .await
        .unwrap();

    // 135 × 1.5 on the holiday + 135
    assert_eq!(quote.base_price, dec!(337.50));
}

#[tokio::test]
async fn test_prorated_final_unit() {
    let service = pricing_service(utc_policy().with_partial_unit(PartialUnitPolicy::Prorated));
    let quote = service
        .quote(quote_request(
            UNPRICED_VEHICLE,
            "2025-11-04T10:00:00Z",
            "2025-11-04T11:30:00Z",
        ))
        .await
        .unwrap();

    assert_eq!(quote.details.hours, 2);
    assert_eq!(quote.base_price, dec!(30));
}

#[tokio::test]
async fn test_naive_timestamps_read_in_business_timezone() {
    // 07:00-09:00 local in UTC+7 is the morning peak
    let policy = utc_policy().with_timezone(BusinessTimezone::default());
    let service = pricing_service(policy);
    let quote = service
        .quote(quote_request(
            UNPRICED_VEHICLE,
            "2025-11-04T07:00:00",
            "2025-11-04T09:00:00",
        ))
        .await
        .unwrap();

    assert_eq!(quote.base_price, dec!(60));
}

#[tokio::test]
async fn test_error_ordering() {
    let service = pricing_service(utc_policy());

    let bad_range = service
        .quote(quote_request("ev-missing", "2025-11-04T11:00:00Z", "2025-11-04T10:00:00Z"))
        .await
        .unwrap_err();
    assert!(matches!(bad_range, AppError::InvalidRange(_)));

    let missing = service
        .quote(quote_request("ev-missing", "2025-11-04T10:00:00Z", "2025-11-04T11:00:00Z"))
        .await
        .unwrap_err();
    assert!(matches!(missing, AppError::NotFound(_)));

    let blank = service
        .quote(quote_request("  ", "2025-11-04T10:00:00Z", "2025-11-04T11:00:00Z"))
        .await
        .unwrap_err();
    assert!(matches!(blank, AppError::Validation(_)));
}

#[tokio::test]
async fn test_vehicle_added_after_startup_is_quoted() {
    let repo = Arc::new(InMemoryVehicleRepository::new());
    let service = pricing_service_with(repo.clone(), utc_policy());

    let request = quote_request("ev-new", "2025-11-04T10:00:00Z", "2025-11-04T11:00:00Z");
    assert!(service.quote(request.clone()).await.is_err());

    repo.insert(Vehicle::unpriced("ev-new")).await;
    let quote = service.quote(request).await.unwrap();
    assert_eq!(quote.base_price, dec!(20));
}

struct FailingProvider;

#[async_trait]
impl ExchangeRateProvider for FailingProvider {
    async fn rate(&self, _from: Currency, _to: Currency) -> Result<Decimal> {
        Err(AppError::exchange_rate("upstream unavailable"))
    }

    fn name(&self) -> &str {
        "failing"
    }
}

#[tokio::test]
async fn test_exchange_rate_failure_surfaces() {
    let repo: Arc<dyn VehicleRepository> = vehicle_repository();
    let service = PricingService::new(
        repo,
        CurrencyConverter::new(Arc::new(FailingProvider)),
        PriceCalculator::new(utc_policy()),
    );

    // Same-currency quotes never reach the provider
    let usd = service
        .quote(quote_request(UNPRICED_VEHICLE, "2025-11-04T10:00:00Z", "2025-11-04T11:00:00Z"))
        .await;
    assert!(usd.is_ok());

    let mut request = quote_request(UNPRICED_VEHICLE, "2025-11-04T10:00:00Z", "2025-11-04T11:00:00Z");
    request.currency = Currency::VND;
    let err = service.quote(request).await.unwrap_err();
    assert!(matches!(err, AppError::ExchangeRate(_)));
}

#[tokio::test]
async fn test_custom_fixed_rate() {
    let repo: Arc<dyn VehicleRepository> = vehicle_repository();
    let service = PricingService::new(
        repo,
        CurrencyConverter::new(Arc::new(FixedRateProvider::new(dec!(25000)).unwrap())),
        PriceCalculator::new(utc_policy()),
    );

    let mut request = quote_request(UNPRICED_VEHICLE, "2025-11-04T10:00:00Z", "2025-11-04T11:00:00Z");
    request.currency = Currency::VND;
    let quote = service.quote(request).await.unwrap();

    assert_eq!(quote.hourly_rate, dec!(500000));
}
