//! Domain services

pub mod total_calculator;
pub mod validator;

pub use total_calculator::{compute_running_total, compute_total};
pub use validator::{validate_basket, validate_material};
