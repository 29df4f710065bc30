//! Car resource types shared by the service, store and HTTP layers.

use serde::Serialize;

/// Store-generated primary key of a car.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, sqlx::Type)]
#[serde(transparent)]
#[sqlx(transparent)]
pub struct CarId(pub i64);

impl CarId {
    /// Parse a path segment. Anything that is not a plain integer resolves to no car.
    pub fn parse(s: &str) -> Option<Self> {
        s.parse::<i64>().ok().map(CarId)
    }
}

impl std::fmt::Display for CarId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Stored car row.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, sqlx::FromRow)]
#[serde(rename_all = "camelCase")]
#[sqlx(rename_all = "camelCase")]
pub struct Car {
    pub id: CarId,
    pub car_name: String,
    pub car_year: i64,
    pub car_image: String,
}

/// Validated car fields, ready to be written. Only `CarValidator` produces these from input.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct NewCar {
    pub car_name: String,
    pub car_year: i64,
    pub car_image: String,
}

impl NewCar {
    pub fn with_id(self, id: CarId) -> Car {
        Car {
            id,
            car_name: self.car_name,
            car_year: self.car_year,
            car_image: self.car_image,
        }
    }
}

/// Affected-row count of an update or delete.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub struct UpdateOutcome {
    pub changes: u64,
}
