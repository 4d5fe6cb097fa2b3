//! Domain model types

pub mod basket;
pub mod field;
pub mod material;
pub mod numeric;

pub use basket::{Basket, BasketCandidate};
pub use field::{FieldErrors, FieldPath};
pub use material::{Material, MaterialCandidate, MaterialRecord};
pub use numeric::NumericInput;
