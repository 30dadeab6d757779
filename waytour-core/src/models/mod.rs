//! Contains the data model: points, their comparison semantics, and tours.

mod common;
pub use self::common::*;

mod point;
pub use self::point::*;

mod tour;
pub use self::tour::*;
