//! HTTP handlers for the car resource.

pub mod car;
pub use car::*;
