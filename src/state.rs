//! Shared application state for all routes.

use crate::service::CarService;

#[derive(Clone)]
pub struct AppState {
    pub cars: CarService,
}

impl AppState {
    pub fn new(cars: CarService) -> Self {
        Self { cars }
    }
}
