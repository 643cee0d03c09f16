use std::sync::Arc;

use actix_cors::Cors;
use actix_web::{web, App, HttpServer};
use anyhow::Context;
use tracing_actix_web::TracingLogger;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use evrent_pricing::config::Config;
use evrent_pricing::middleware::{RateLimiter, RequestId};
use evrent_pricing::modules;
use evrent_pricing::pricing::services::{CurrencyConverter, PriceCalculator, PricingService};
use evrent_pricing::vehicles::{MySqlVehicleRepository, VehicleRepository};

fn init_tracing(config: &Config) {
    let filter = tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        format!(
            "evrent_pricing={},actix_web=info",
            config.app.log_level
        )
        .into()
    });

    let registry = tracing_subscriber::registry().with(filter);
    if config.app.log_format.eq_ignore_ascii_case("json") {
        registry.with(tracing_subscriber::fmt::layer().json()).init();
    } else {
        registry.with(tracing_subscriber::fmt::layer()).init();
    }
}

fn cors(config: &Config) -> Cors {
    if !config.is_production() && config.security.allowed_origins.is_empty() {
        return Cors::permissive();
    }

    config
        .security
        .allowed_origins
        .iter()
        .fold(Cors::default(), |cors, origin| cors.allowed_origin(origin))
        .allowed_methods(vec!["GET", "POST"])
        .allow_any_header()
        .max_age(3600)
}

#[actix_web::main]
async fn main() -> anyhow::Result<()> {
    // Load configuration
    let config = Config::from_env().context("Failed to load configuration")?;
    config.validate().context("Configuration validation failed")?;

    init_tracing(&config);

    tracing::info!("Starting EV rental pricing service");
    tracing::info!("Environment: {}", config.app.env);
    tracing::info!("Server binding to: {}", config.server.bind_address());

    let db_pool = config
        .database
        .create_pool()
        .await
        .context("Failed to create database pool")?;

    tracing::info!(
        "Database pool initialized ({} connections)",
        config.database.max_connections
    );

    let vehicle_repo: Arc<dyn VehicleRepository> = Arc::new(MySqlVehicleRepository::new(db_pool));

    let provider = config.pricing.exchange_rate_provider()?;
    tracing::info!("Exchange rate provider: {}", provider.name());

    let pricing_service = Arc::new(PricingService::new(
        vehicle_repo.clone(),
        CurrencyConverter::new(provider),
        PriceCalculator::new(config.pricing.policy()?),
    ));

    let rate_limiter = RateLimiter::new(config.security.rate_limit_per_minute)
        .trust_proxy_headers(config.security.trust_proxy_headers);
    let bind_address = config.server.bind_address();
    let workers = config.server.workers;
    let server_config = config.clone();

    let server = HttpServer::new(move || {
        App::new()
            .wrap(rate_limiter.clone())
            .wrap(cors(&server_config))
            .wrap(RequestId)
            .wrap(TracingLogger::default())
            .app_data(web::Data::new(pricing_service.clone()))
            .app_data(web::Data::new(vehicle_repo.clone()))
            .configure(modules::configure)
    })
    .workers(workers)
    .bind(&bind_address)?
    .run();

    tracing::info!("Server started at http://{}", bind_address);

    server.await?;
    Ok(())
}
