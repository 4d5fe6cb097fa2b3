//! Infrastructure layer - transport implementations

pub mod transport;

pub use transport::HttpMaterialRepository;
