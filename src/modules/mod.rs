use actix_web::web;

pub mod health;
pub mod pricing;
pub mod vehicles;

/// Register every HTTP route of the service
pub fn configure(cfg: &mut web::ServiceConfig) {
    health::configure(cfg);
    pricing::configure(cfg);
}
