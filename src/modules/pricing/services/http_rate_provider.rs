use async_trait::async_trait;
use reqwest_middleware::{ClientBuilder, ClientWithMiddleware};
use reqwest_retry::{policies::ExponentialBackoff, RetryTransientMiddleware};
use rust_decimal::prelude::FromPrimitive;
use rust_decimal::Decimal;
use serde::Deserialize;
use std::collections::HashMap;
use std::time::Duration;

use super::exchange_rate_provider::ExchangeRateProvider;
use crate::core::{AppError, Currency, Result};

/// Body returned by the rates endpoint: `{ "base": "USD", "rates": { "VND": 25950.5 } }`
#[derive(Debug, Deserialize)]
struct RatesResponse {
    #[serde(default)]
    base: Option<String>,
    rates: HashMap<String, f64>,
}

/// Live exchange rates fetched over HTTP, retried on transient failures
pub struct HttpRateProvider {
    client: ClientWithMiddleware,
    url: String,
}

impl HttpRateProvider {
    pub fn new(url: impl Into<String>, max_retries: u32, timeout: Duration) -> Result<Self> {
        let inner = reqwest::Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| AppError::Configuration(format!("Failed to build HTTP client: {}", e)))?;

        let retry_policy = ExponentialBackoff::builder().build_with_max_retries(max_retries);
        let client = ClientBuilder::new(inner)
            .with(RetryTransientMiddleware::new_with_policy(retry_policy))
            .build();

        Ok(Self {
            client,
            url: url.into(),
        })
    }
}

/// Pick the `to` rate out of a response quoted in `from`
fn rate_from_body(body: &RatesResponse, from: Currency, to: Currency) -> Result<Decimal> {
    if let Some(base) = body.base.as_deref() {
        if !base.eq_ignore_ascii_case(from.code()) {
            return Err(AppError::exchange_rate(format!(
                "expected rates based on {}, got {}",
                from, base
            )));
        }
    }

    let raw = body
        .rates
        .get(to.code())
        .copied()
        .ok_or_else(|| AppError::exchange_rate(format!("no {} rate in response", to)))?;

    match Decimal::from_f64(raw) {
        Some(rate) if rate > Decimal::ZERO => Ok(rate),
        _ => Err(AppError::exchange_rate(format!("invalid {} rate: {}", to, raw))),
    }
}

#[async_trait]
impl ExchangeRateProvider for HttpRateProvider {
    async fn rate(&self, from: Currency, to: Currency) -> Result<Decimal> {
        if from == to {
            return Ok(Decimal::ONE);
        }

        let response = self
            .client
            .get(&self.url)
            .query(&[("base", from.code())])
            .send()
            .await
            .map_err(|e| AppError::exchange_rate(format!("rates request failed: {}", e)))?;

        if !response.status().is_success() {
            return Err(AppError::exchange_rate(format!(
                "rates endpoint returned {}",
                response.status()
            )));
        }

        let body: RatesResponse = response
            .json()
            .await
            .map_err(|e| AppError::exchange_rate(format!("Failed to parse rates: {}", e)))?;

        let rate = rate_from_body(&body, from, to)?;
        tracing::debug!(%from, %to, %rate, "Fetched exchange rate");
        Ok(rate)
    }

    fn name(&self) -> &str {
        "http"
    }
}
