//! Domain layer: material model, schema validation, and the transport seam

pub mod model;
pub mod repository;
pub mod service;

pub use model::*;
pub use repository::{MaterialRepository, TransportResponse};
