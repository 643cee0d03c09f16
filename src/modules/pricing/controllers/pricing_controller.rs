use std::sync::Arc;

use actix_web::{error::JsonPayloadError, web, HttpRequest, HttpResponse};
use tracing::Instrument;

use crate::core::error::AppError;
use crate::middleware::RequestIdValue;
use crate::modules::pricing::models::{PriceQuoteRequest, PriceQuoteResponse};
use crate::modules::pricing::services::PricingService;

/// Quote a booking price
/// POST /bookings/price
pub async fn quote_price(
    service: web::Data<Arc<PricingService>>,
    request: web::Json<PriceQuoteRequest>,
    request_id: RequestIdValue,
) -> Result<HttpResponse, AppError> {
    let request = request.into_inner();
    let span = tracing::info_span!(
        "quote_price",
        request_id = %request_id,
        vehicle_id = %request.vehicle_id
    );

    let breakdown = service.quote(request).instrument(span).await?;

    Ok(HttpResponse::Ok().json(PriceQuoteResponse::from(breakdown)))
}

/// Malformed bodies are answered with the same envelope as other client errors
fn json_error_handler(err: JsonPayloadError, _req: &HttpRequest) -> actix_web::Error {
    AppError::validation(err.to_string()).into()
}

pub fn json_config() -> web::JsonConfig {
    web::JsonConfig::default()
        .limit(16 * 1024)
        .error_handler(json_error_handler)
}

/// Configure pricing routes
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/bookings")
            .app_data(json_config())
            .route("/price", web::post().to(quote_price)),
    );
}
