//! CarService: validated CRUD over an injected `CarStore`.

use crate::error::{AppError, ValidationError};
use crate::model::{Car, CarId, NewCar, UpdateOutcome};
use crate::service::CarValidator;
use crate::store::CarStore;
use serde_json::Value;
use std::sync::Arc;

/// Stateless: every call is an independent unit of work against the store.
#[derive(Clone)]
pub struct CarService {
    store: Arc<dyn CarStore>,
}

impl CarService {
    pub fn new(store: Arc<dyn CarStore>) -> Self {
        Self { store }
    }

    pub fn store(&self) -> &Arc<dyn CarStore> {
        &self.store
    }

    pub fn validate(&self, candidate: &Value) -> Result<NewCar, ValidationError> {
        CarValidator::validate(candidate)
    }

    /// Validate and insert. Returns the store-generated id.
    pub async fn create(&self, candidate: &Value) -> Result<CarId, AppError> {
        let car = self.validate(candidate)?;
        let id = self.store.insert(&car).await?;
        tracing::info!(id = %id, "car created");
        Ok(id)
    }

    /// All cars in store order.
    pub async fn get_all(&self) -> Result<Vec<Car>, AppError> {
        Ok(self.store.query_all().await?)
    }

    pub async fn get_by_id(&self, id: CarId) -> Result<Car, AppError> {
        self.store.query_one(id).await?.ok_or(AppError::NotFound)
    }

    /// Full replace of the writable fields. Invalid input is rejected before any store call;
    /// a missing id shows up as zero affected rows.
    pub async fn update(&self, id: CarId, candidate: &Value) -> Result<UpdateOutcome, AppError> {
        let car = self.validate(candidate)?;
        let changes = self.store.update_row(id, &car).await?;
        if changes == 0 {
            tracing::warn!(id = %id, "update matched no car");
            return Err(AppError::NotFound);
        }
        tracing::info!(id = %id, changes, "car updated");
        Ok(UpdateOutcome { changes })
    }

    /// Looks the row up before deleting it. A row removed between the lookup and the delete
    /// yields `changes: 0`.
    pub async fn delete(&self, id: CarId) -> Result<UpdateOutcome, AppError> {
        if self.store.query_one(id).await?.is_none() {
            tracing::warn!(id = %id, "delete of unknown car");
            return Err(AppError::NotFound);
        }
        let changes = self.store.delete_row(id).await?;
        tracing::info!(id = %id, changes, "car deleted");
        Ok(UpdateOutcome { changes })
    }
}
