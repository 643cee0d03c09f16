pub mod models;
pub mod repositories;

pub use models::Vehicle;
pub use repositories::{InMemoryVehicleRepository, MySqlVehicleRepository, VehicleRepository};
