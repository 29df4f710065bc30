//! Car CRUD handlers: list, create, read, update, delete, plus the route test probe.

use crate::error::AppError;
use crate::model::{Car, CarId};
use crate::response::{changes, created};
use crate::state::AppState;
use axum::{
    body::Bytes,
    extract::{Path, State},
    response::IntoResponse,
    Json,
};
use serde_json::Value;

/// Body as untyped JSON. Empty or malformed bodies become `{}` so the validator, not the
/// extractor, reports what is wrong.
fn body_to_value(body: &Bytes) -> Value {
    match serde_json::from_slice::<Value>(body) {
        Ok(v @ Value::Object(_)) => v,
        _ => Value::Object(serde_json::Map::new()),
    }
}

pub async fn route_test() -> Json<Value> {
    Json(serde_json::json!({ "msg": "cars route test ok !!" }))
}

pub async fn list(State(state): State<AppState>) -> Result<Json<Vec<Car>>, AppError> {
    let cars = state.cars.get_all().await?;
    Ok(Json(cars))
}

pub async fn create(
    State(state): State<AppState>,
    body: Bytes,
) -> Result<impl IntoResponse, AppError> {
    let body = body_to_value(&body);
    let id = state.cars.create(&body).await?;
    Ok(created(id))
}

pub async fn read(
    State(state): State<AppState>,
    Path(id_str): Path<String>,
) -> Result<Json<Car>, AppError> {
    let id = CarId::parse(&id_str).ok_or(AppError::NotFound)?;
    let car = state.cars.get_by_id(id).await?;
    Ok(Json(car))
}

pub async fn update(
    State(state): State<AppState>,
    Path(id_str): Path<String>,
    body: Bytes,
) -> Result<impl IntoResponse, AppError> {
    let body = body_to_value(&body);
    let outcome = match CarId::parse(&id_str) {
        Some(id) => state.cars.update(id, &body).await?,
        None => {
            // Invalid input still reports 400 ahead of the unknown id.
            state.cars.validate(&body)?;
            return Err(AppError::NotFound);
        }
    };
    Ok(changes(outcome))
}

pub async fn delete(
    State(state): State<AppState>,
    Path(id_str): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    let id = CarId::parse(&id_str).ok_or(AppError::NotFound)?;
    let outcome = state.cars.delete(id).await?;
    Ok(changes(outcome))
}
