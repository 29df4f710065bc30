//! CarService: car CRUD behind the validation gate.

mod crud;
mod validation;
pub use crud::CarService;
pub use validation::CarValidator;
