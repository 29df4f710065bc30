//! Success bodies of the car routes.

use crate::model::{CarId, UpdateOutcome};
use axum::Json;
use serde::Serialize;

#[derive(Serialize)]
pub struct CreatedBody {
    pub id: CarId,
}

#[derive(Serialize)]
pub struct ChangesBody {
    pub changes: u64,
}

pub fn created(id: CarId) -> Json<CreatedBody> {
    Json(CreatedBody { id })
}

pub fn changes(outcome: UpdateOutcome) -> Json<ChangesBody> {
    Json(ChangesBody {
        changes: outcome.changes,
    })
}
