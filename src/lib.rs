//! Car resource: validated CRUD over a SQLite `cars` table, exposed through axum.

pub mod config;
pub mod error;
pub mod handlers;
pub mod migration;
pub mod model;
pub mod response;
pub mod routes;
pub mod service;
pub mod sql;
pub mod state;
pub mod store;

pub use config::ServerConfig;
pub use error::{AppError, ConfigError, StoreError, ValidationError};
pub use migration::apply_migrations;
pub use model::{Car, CarId, NewCar, UpdateOutcome};
pub use routes::{app, car_routes, common_routes};
pub use service::{CarService, CarValidator};
pub use state::AppState;
pub use store::{connect, CarStore, SqliteCarStore};
