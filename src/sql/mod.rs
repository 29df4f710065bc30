//! Safe SQL builder: identifiers are constants, values are always bound parameters.

mod builder;
pub use builder::*;
