//! Transport implementations
//!
//! This module provides network implementations of the repository traits.

mod http_material_repo;

pub use http_material_repo::HttpMaterialRepository;
