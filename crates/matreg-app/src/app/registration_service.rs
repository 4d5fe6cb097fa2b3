//! Registration Service - Core Use Case for Material Registration
//!
//! This service runs one registration end to end:
//! 1. Load the candidate into a fresh form
//! 2. Validate and assemble the record (via the form controller)
//! 3. Post it to the creation endpoint
//! 4. Notify and report the outcome

use chrono::NaiveDate;
use matreg_domain::{FieldErrors, MaterialCandidate, MaterialRecord, MaterialRepository};
use matreg_types::Error;
use serde::Serialize;
use thiserror::Error;
use tracing::info;

use crate::config::Config;
use crate::form::{FormController, SubmissionReport, SubmitError};
use crate::notification::Notifier;
use crate::repository::open_material_repo;

/// Errors specific to the registration service
#[derive(Debug, Error)]
pub enum RegistrationServiceError {
    #[error("Validation failed:\n{0}")]
    Validation(FieldErrors),

    #[error("A submission is already in flight")]
    InFlight,

    #[error("Transport setup failed: {0}")]
    Transport(String),

    #[error("Configuration error: {0}")]
    ConfigError(String),
}

impl From<Error> for RegistrationServiceError {
    fn from(err: Error) -> Self {
        match err {
            Error::Transport(e) => RegistrationServiceError::Transport(e.to_string()),
            Error::Config(e) => RegistrationServiceError::ConfigError(e.to_string()),
            _ => RegistrationServiceError::Transport(err.to_string()),
        }
    }
}

impl From<SubmitError> for RegistrationServiceError {
    fn from(err: SubmitError) -> Self {
        match err {
            SubmitError::Validation(errors) => RegistrationServiceError::Validation(errors),
            SubmitError::InFlight => RegistrationServiceError::InFlight,
        }
    }
}

/// Result of one registration run
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RegistrationOutcome {
    /// Total shown on the form right before submitting
    pub displayed_total: f64,

    pub report: SubmissionReport,
}

/// Validated record plus its total, as the form would send it
pub type CheckedMaterial = MaterialRecord;

/// Validate a candidate with the same coercion rules as a submission, without
/// sending anything
pub fn check_material(
    candidate: MaterialCandidate,
    today: NaiveDate,
) -> std::result::Result<CheckedMaterial, FieldErrors> {
    let form = FormController::from_candidate(candidate, today);
    form.validate(today).map(|material| material.into_record())
}

/// Main entry point: register a material at the configured endpoint
pub async fn register_material<N: Notifier>(
    candidate: MaterialCandidate,
    config: &Config,
    notifier: &N,
    today: NaiveDate,
) -> std::result::Result<RegistrationOutcome, RegistrationServiceError> {
    let repository = open_material_repo(config)?;
    info!(endpoint = %config.endpoint, "Registering material");
    register_material_with(candidate, &repository, notifier, today).await
}

/// Register a material through any repository
pub async fn register_material_with<R, N>(
    candidate: MaterialCandidate,
    repository: &R,
    notifier: &N,
    today: NaiveDate,
) -> std::result::Result<RegistrationOutcome, RegistrationServiceError>
where
    R: MaterialRepository,
    N: Notifier,
{
    let mut form = FormController::from_candidate(candidate, today);
    let displayed_total = form.total_cost();
    let report = form.submit(repository, notifier, today).await?;

    Ok(RegistrationOutcome {
        displayed_total,
        report,
    })
}
