//! Shared fixtures: in-memory SQLite service and store doubles.

#![allow(dead_code)]

use async_trait::async_trait;
use car_resource::{apply_migrations, connect, Car, CarId, CarService, CarStore, NewCar, SqliteCarStore, StoreError};
use serde_json::{json, Value};
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

/// Service over a fresh in-memory database. One connection, so every query sees the same db.
pub async fn sqlite_service() -> CarService {
    let pool = connect("sqlite::memory:", 1).await.unwrap();
    apply_migrations(&pool).await.unwrap();
    CarService::new(Arc::new(SqliteCarStore::new(pool)))
}

pub fn candidate(name: &str, year: i64, image: &str) -> Value {
    json!({ "carName": name, "carYear": year, "carImage": image })
}

pub fn model_3() -> Value {
    candidate("Model 3", 2024, "http://x/y.png")
}

/// Store that counts calls and answers as if it held exactly one car, id 1.
#[derive(Default)]
pub struct RecordingStore {
    pub calls: AtomicUsize,
}

impl RecordingStore {
    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }

    fn hit(&self) {
        self.calls.fetch_add(1, Ordering::SeqCst);
    }
}

#[async_trait]
impl CarStore for RecordingStore {
    async fn insert(&self, _car: &NewCar) -> Result<CarId, StoreError> {
        self.hit();
        Ok(CarId(1))
    }

    async fn query_one(&self, id: CarId) -> Result<Option<Car>, StoreError> {
        self.hit();
        Ok((id == CarId(1)).then(|| Car {
            id,
            car_name: "Golf".into(),
            car_year: 1999,
            car_image: "golf.png".into(),
        }))
    }

    async fn query_all(&self) -> Result<Vec<Car>, StoreError> {
        self.hit();
        Ok(Vec::new())
    }

    async fn update_row(&self, id: CarId, _car: &NewCar) -> Result<u64, StoreError> {
        self.hit();
        Ok(u64::from(id == CarId(1)))
    }

    async fn delete_row(&self, id: CarId) -> Result<u64, StoreError> {
        self.hit();
        Ok(u64::from(id == CarId(1)))
    }
}

/// Store whose every call fails with the same driver error.
pub struct FailingStore(pub &'static str);

impl FailingStore {
    fn error(&self) -> sqlx::Error {
        sqlx::Error::Protocol(self.0.to_string())
    }

    /// Text the service and HTTP layer must pass through unchanged.
    pub fn message(&self) -> String {
        self.error().to_string()
    }

    fn fail<T>(&self) -> Result<T, StoreError> {
        Err(StoreError::Db(self.error()))
    }
}

#[async_trait]
impl CarStore for FailingStore {
    async fn insert(&self, _car: &NewCar) -> Result<CarId, StoreError> {
        self.fail()
    }

    async fn query_one(&self, _id: CarId) -> Result<Option<Car>, StoreError> {
        self.fail()
    }

    async fn query_all(&self) -> Result<Vec<Car>, StoreError> {
        self.fail()
    }

    async fn update_row(&self, _id: CarId, _car: &NewCar) -> Result<u64, StoreError> {
        self.fail()
    }

    async fn delete_row(&self, _id: CarId) -> Result<u64, StoreError> {
        self.fail()
    }

    async fn ping(&self) -> Result<(), StoreError> {
        self.fail()
    }
}
