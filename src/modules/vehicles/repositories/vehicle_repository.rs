use async_trait::async_trait;
use sqlx::MySqlPool;
use std::collections::HashMap;
use tokio::sync::RwLock;

use crate::core::Result;
use crate::modules::vehicles::models::{Vehicle, VehicleRow};

/// Read access to the vehicle store owned by the fleet service
#[async_trait]
pub trait VehicleRepository: Send + Sync {
    /// Find vehicle by ID
    async fn find_by_id(&self, id: &str) -> Result<Option<Vehicle>>;

    /// Check the store is reachable
    async fn ping(&self) -> Result<()>;
}

/// MySQL-backed vehicle lookup
#[derive(Clone)]
pub struct MySqlVehicleRepository {
    pool: MySqlPool,
}

impl MySqlVehicleRepository {
    pub fn new(pool: MySqlPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl VehicleRepository for MySqlVehicleRepository {
    async fn find_by_id(&self, id: &str) -> Result<Option<Vehicle>> {
        let row = sqlx::query_as::<_, VehicleRow>(
            r#"
            SELECT id, price_per_hour, price_per_day,
                   pricing_hourly, pricing_daily, pricing_currency
            FROM vehicles
            WHERE id = ?
            "#,
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;

        row.map(Vehicle::try_from).transpose()
    }

    async fn ping(&self) -> Result<()> {
        sqlx::query("SELECT 1").execute(&self.pool).await?;
        Ok(())
    }
}

/// In-process vehicle store, used for local runs and tests
#[derive(Default)]
pub struct InMemoryVehicleRepository {
    vehicles: RwLock<HashMap<String, Vehicle>>,
}

impl InMemoryVehicleRepository {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_vehicles(vehicles: impl IntoIterator<Item = Vehicle>) -> Self {
        let map = vehicles
            .into_iter()
            .map(|vehicle| (vehicle.id.clone(), vehicle))
            .collect();

        Self {
            vehicles: RwLock::new(map),
        }
    }

    pub async fn insert(&self, vehicle: Vehicle) {
        self.vehicles
            .write()
            .await
            .insert(vehicle.id.clone(), vehicle);
    }
}

#[async_trait]
impl VehicleRepository for InMemoryVehicleRepository {
    async fn find_by_id(&self, id: &str) -> Result<Option<Vehicle>> {
        Ok(self.vehicles.read().await.get(id).cloned())
    }

    async fn ping(&self) -> Result<()> {
        Ok(())
    }
}
