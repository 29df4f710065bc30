//! Storage collaborator for the car resource and its SQLite implementation.

use crate::error::StoreError;
use crate::model::{Car, CarId, NewCar};
use crate::sql;
use async_trait::async_trait;
use sqlx::sqlite::{SqlitePool, SqlitePoolOptions};

/// Narrow storage interface consumed by `CarService`. Implementations must bind every value
/// as a parameter.
#[async_trait]
pub trait CarStore: Send + Sync {
    /// Insert one row and return the generated id.
    async fn insert(&self, car: &NewCar) -> Result<CarId, StoreError>;

    /// Fetch one row by id.
    async fn query_one(&self, id: CarId) -> Result<Option<Car>, StoreError>;

    /// Fetch every row in store order.
    async fn query_all(&self) -> Result<Vec<Car>, StoreError>;

    /// Replace the writable columns of one row. Returns the affected-row count.
    async fn update_row(&self, id: CarId, car: &NewCar) -> Result<u64, StoreError>;

    /// Delete one row. Returns the affected-row count.
    async fn delete_row(&self, id: CarId) -> Result<u64, StoreError>;

    /// Connectivity check for readiness.
    async fn ping(&self) -> Result<(), StoreError> {
        Ok(())
    }
}

/// Open a SQLite pool.
pub async fn connect(database_url: &str, max_connections: u32) -> Result<SqlitePool, StoreError> {
    let pool = SqlitePoolOptions::new()
        .max_connections(max_connections)
        .connect(database_url)
        .await?;
    Ok(pool)
}

#[derive(Clone)]
pub struct SqliteCarStore {
    pool: SqlitePool,
}

impl SqliteCarStore {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl CarStore for SqliteCarStore {
    async fn insert(&self, car: &NewCar) -> Result<CarId, StoreError> {
        let q = sql::insert();
        tracing::debug!(sql = %q, "query");
        let result = sqlx::query(&q)
            .bind(&car.car_name)
            .bind(car.car_year)
            .bind(&car.car_image)
            .execute(&self.pool)
            .await?;
        Ok(CarId(result.last_insert_rowid()))
    }

    async fn query_one(&self, id: CarId) -> Result<Option<Car>, StoreError> {
        let q = sql::select_by_id();
        tracing::debug!(sql = %q, id = %id, "query");
        let row = sqlx::query_as::<_, Car>(&q)
            .bind(id.0)
            .fetch_optional(&self.pool)
            .await?;
        Ok(row)
    }

    async fn query_all(&self) -> Result<Vec<Car>, StoreError> {
        let q = sql::select_all();
        tracing::debug!(sql = %q, "query");
        let rows = sqlx::query_as::<_, Car>(&q).fetch_all(&self.pool).await?;
        Ok(rows)
    }

    async fn update_row(&self, id: CarId, car: &NewCar) -> Result<u64, StoreError> {
        let q = sql::update_by_id();
        tracing::debug!(sql = %q, id = %id, "query");
        let result = sqlx::query(&q)
            .bind(&car.car_name)
            .bind(car.car_year)
            .bind(&car.car_image)
            .bind(id.0)
            .execute(&self.pool)
            .await?;
        Ok(result.rows_affected())
    }

    async fn delete_row(&self, id: CarId) -> Result<u64, StoreError> {
        let q = sql::delete_by_id();
        tracing::debug!(sql = %q, id = %id, "query");
        let result = sqlx::query(&q).bind(id.0).execute(&self.pool).await?;
        Ok(result.rows_affected())
    }

    async fn ping(&self) -> Result<(), StoreError> {
        sqlx::query("SELECT 1").fetch_optional(&self.pool).await?;
        Ok(())
    }
}
