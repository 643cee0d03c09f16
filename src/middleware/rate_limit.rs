use actix_web::{
    dev::{forward_ready, Service, ServiceRequest, ServiceResponse, Transform},
    Error, ResponseError,
};
use futures_util::future::LocalBoxFuture;
use governor::{DefaultKeyedRateLimiter, Quota, RateLimiter as GovernorRateLimiter};
use std::future::{ready, Ready};
use std::net::{IpAddr, SocketAddr};
use std::num::NonZeroU32;
use std::rc::Rc;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;

use crate::core::AppError;

/// Paths that are never throttled (probes)
const EXEMPT_PATHS: [&str; 2] = ["/health", "/ready"];

/// Idle client entries are dropped every this many checks
const PRUNE_EVERY: u64 = 1024;

/// Per-client rate limiting middleware using governor.
///
/// Clients are keyed by peer IP. Behind a reverse proxy every client shares
/// the proxy's address; enable `trust_proxy_headers` there so the key comes
/// from `Forwarded` / `X-Forwarded-For` instead. Only do so when the proxy
/// overwrites those headers, otherwise clients can pick their own key.
#[derive(Clone)]
pub struct RateLimiter {
    limiter: Arc<DefaultKeyedRateLimiter<String>>,
    requests_per_minute: u32,
    checks: Arc<AtomicU64>,
    prune_every: u64,
    trust_proxy_headers: bool,
}

impl RateLimiter {
    /// Create a new rate limiter with specified requests per minute per client
    pub fn new(requests_per_minute: u32) -> Self {
        let per_minute = NonZeroU32::new(requests_per_minute).unwrap_or(NonZeroU32::MIN);
        Self::from_quota(Quota::per_minute(per_minute), per_minute.get(), PRUNE_EVERY)
    }

    fn from_quota(quota: Quota, requests_per_minute: u32, prune_every: u64) -> Self {
        Self {
            limiter: Arc::new(GovernorRateLimiter::keyed(quota)),
            requests_per_minute,
            checks: Arc::new(AtomicU64::new(0)),
            prune_every: prune_every.max(1),
            trust_proxy_headers: false,
        }
    }

    /// Key clients by the proxy-reported address instead of the socket peer
    pub fn trust_proxy_headers(mut self, trust: bool) -> Self {
        self.trust_proxy_headers = trust;
        self
    }

    /// Number of clients currently tracked
    pub fn tracked_clients(&self) -> usize {
        self.limiter.len()
    }

    /// Forget clients whose quota has fully replenished
    pub fn prune(&self) {
        self.limiter.retain_recent();
        self.limiter.shrink_to_fit();
    }

    fn client_key(&self, req: &ServiceRequest) -> String {
        if self.trust_proxy_headers {
            if let Some(addr) = req.connection_info().realip_remote_addr() {
                return normalize_address(addr);
            }
        }

        req.peer_addr()
            .map(|addr| addr.ip().to_string())
            .unwrap_or_else(|| "unknown".to_string())
    }

    /// Returns false when the client is over quota
    fn check(&self, client: &str) -> bool {
        let allowed = self.limiter.check_key(&client.to_string()).is_ok();

        let checks = self.checks.fetch_add(1, Ordering::Relaxed) + 1;
        if checks % self.prune_every == 0 {
            self.prune();
            tracing::debug!(clients = self.tracked_clients(), "Pruned idle rate limit entries");
        }

        allowed
    }
}

/// Strip the port so one client maps to one key
fn normalize_address(raw: &str) -> String {
    if let Ok(addr) = raw.parse::<SocketAddr>() {
        return addr.ip().to_string();
    }
    if let Ok(ip) = raw.trim_matches(|c| c == '[' || c == ']').parse::<IpAddr>() {
        return ip.to_string();
    }
    raw.to_string()
}

impl<S, B> Transform<S, ServiceRequest> for RateLimiter
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = Error> + 'static,
    S::Future: 'static,
    B: 'static,
{
    type Response = ServiceResponse<actix_web::body::EitherBody<actix_web::body::BoxBody, B>>;
    type Error = Error;
    type InitError = ();
    type Transform = RateLimiterMiddleware<S>;
    type Future = Ready<std::result::Result<Self::Transform, Self::InitError>>;

    fn new_transform(&self, service: S) -> Self::Future {
        ready(Ok(RateLimiterMiddleware {
            service: Rc::new(service),
            limiter: self.clone(),
        }))
    }
}

pub struct RateLimiterMiddleware<S> {
    service: Rc<S>,
    limiter: RateLimiter,
}

impl<S, B> Service<ServiceRequest> for RateLimiterMiddleware<S>
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = Error> + 'static,
    S::Future: 'static,
    B: 'static,
{
    type Response = ServiceResponse<actix_web::body::EitherBody<actix_web::body::BoxBody, B>>;
    type Error = Error;
    type Future = LocalBoxFuture<'static, std::result::Result<Self::Response, Self::Error>>;

    forward_ready!(service);

    fn call(&self, req: ServiceRequest) -> Self::Future {
        let svc = self.service.clone();

        if EXEMPT_PATHS.contains(&req.path()) {
            return Box::pin(async move { svc.call(req).await.map(|res| res.map_into_right_body()) });
        }

        let client = self.limiter.client_key(&req);
        if self.limiter.check(&client) {
            return Box::pin(async move { svc.call(req).await.map(|res| res.map_into_right_body()) });
        }

        tracing::warn!(client = %client, path = %req.path(), "Rate limit exceeded");
        let error = AppError::RateLimitExceeded(format!(
            "Maximum {} requests per minute",
            self.limiter.requests_per_minute
        ));
        let response = req.into_response(error.error_response()).map_into_left_body();
        Box::pin(async move { Ok(response) })
    }
}
