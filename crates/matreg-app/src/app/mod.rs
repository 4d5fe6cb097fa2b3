//! Application Layer
//!
//! This module provides the application layer that orchestrates between
//! the CLI and the domain/infrastructure layers.
//!
//! The app layer contains:
//! - `registration_service`: Core use case for registering one material

pub mod registration_service;

pub use registration_service::{
    check_material, register_material, register_material_with, CheckedMaterial,
    RegistrationOutcome, RegistrationServiceError,
};
