//! EV rental booking price service
//!
//! Quotes bookings for the rental fleet: rate resolution, currency conversion,
//! hourly/daily classification, peak and weekend tariffs, insurance, tax and deposit.

pub mod config;
pub mod core;
pub mod middleware;
pub mod modules;

// Re-export commonly used types
pub use modules::pricing;
pub use modules::vehicles;
