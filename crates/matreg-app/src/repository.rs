//! Repository adapters for the transport layer

use matreg_infra::HttpMaterialRepository;
use matreg_types::Result;

use crate::config::Config;

/// Open the HTTP repository for the configured creation endpoint
pub fn open_material_repo(config: &Config) -> Result<HttpMaterialRepository> {
    HttpMaterialRepository::new(&config.endpoint, config.timeout()).map_err(Into::into)
}
