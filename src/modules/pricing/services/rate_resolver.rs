use crate::core::Currency;
use crate::modules::pricing::models::RateSchedule;
use crate::modules::vehicles::Vehicle;

/// Resolve the base rate schedule of a vehicle.
///
/// Precedence: explicit `pricing`, then the legacy per-hour/per-day prices
/// (each defaulting independently, always USD), then the default schedule.
pub fn resolve_rates(vehicle: &Vehicle) -> RateSchedule {
    if let Some(pricing) = vehicle.pricing {
        return pricing;
    }

    if vehicle.price_per_hour.is_none() && vehicle.price_per_day.is_none() {
        return RateSchedule::default();
    }

    RateSchedule::new(
        vehicle.price_per_hour.unwrap_or(RateSchedule::DEFAULT_HOURLY),
        vehicle.price_per_day.unwrap_or(RateSchedule::DEFAULT_DAILY),
        Currency::USD,
    )
}
