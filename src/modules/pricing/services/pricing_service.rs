use std::sync::Arc;

use crate::core::{AppError, Result};
use crate::modules::pricing::models::{PriceBreakdown, PriceQuoteRequest};
use crate::modules::vehicles::VehicleRepository;

use super::currency_converter::CurrencyConverter;
use super::price_calculator::PriceCalculator;
use super::rate_resolver::resolve_rates;

/// Service for booking price quotes
pub struct PricingService {
    vehicle_repo: Arc<dyn VehicleRepository>,
    converter: CurrencyConverter,
    calculator: PriceCalculator,
}

impl PricingService {
    pub fn new(
        vehicle_repo: Arc<dyn VehicleRepository>,
        converter: CurrencyConverter,
        calculator: PriceCalculator,
    ) -> Self {
        Self {
            vehicle_repo,
            converter,
            calculator,
        }
    }

    /// Quote a booking.
    ///
    /// The time range is validated before the vehicle lookup, so a malformed
    /// request never reaches the store.
    pub async fn quote(&self, request: PriceQuoteRequest) -> Result<PriceBreakdown> {
        let vehicle_id = request.vehicle_id.trim();
        if vehicle_id.is_empty() {
            return Err(AppError::validation("vehicleId is required"));
        }

        let window = self
            .calculator
            .booking_window(&request.start_at, &request.end_at)?;

        let vehicle = self
            .vehicle_repo
            .find_by_id(vehicle_id)
            .await?
            .ok_or_else(|| AppError::not_found("Vehicle not found"))?;

        let base_rates = resolve_rates(&vehicle);
        let rates = self.converter.convert(base_rates, request.currency).await?;

        let breakdown = self
            .calculator
            .calculate(&rates, &window, request.insurance_premium)?;

        tracing::info!(
            vehicle_id = %vehicle.id,
            rental_type = ?breakdown.details.rental_type,
            currency = %breakdown.currency,
            total_price = %breakdown.currency.format_amount(breakdown.total_price),
            "Quoted booking price"
        );

        Ok(breakdown)
    }
}
