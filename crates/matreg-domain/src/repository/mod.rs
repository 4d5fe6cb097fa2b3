//! Repository trait definitions for the material creation endpoint

use matreg_types::TransportError;
use serde::{Deserialize, Serialize};

use crate::model::MaterialRecord;

/// Outcome reported by the transport for one request
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct TransportResponse {
    pub status: u16,
}

impl TransportResponse {
    pub fn new(status: u16) -> Self {
        Self { status }
    }

    /// True for any 2xx status
    pub fn is_ok(&self) -> bool {
        (200..300).contains(&self.status)
    }
}

/// Sink for registered materials.
///
/// Only creation exists; records are never read back, updated or deleted.
#[allow(async_fn_in_trait)]
pub trait MaterialRepository {
    /// Send one record as a single creation request
    async fn create(&self, record: &MaterialRecord) -> Result<TransportResponse, TransportError>;
}
