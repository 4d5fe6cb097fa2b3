//! Form controller - owns the material draft and the submission lifecycle
//!
//! Lifecycle of one submission:
//! 1. Validate the draft (base fields plus coerced additional costs)
//! 2. Assemble the outbound record with a freshly computed total
//! 3. Hand the record to the repository and await the outcome
//! 4. Notify success or failure exactly once
//! 5. Reset to a blank draft, whatever the outcome
//!
//! Transport errors are logged and end the attempt without a notification.

use chrono::NaiveDate;
use matreg_domain::service::{compute_running_total, validate_material};
use matreg_domain::{
    FieldErrors, Material, MaterialCandidate, MaterialRecord, MaterialRepository, NumericInput,
    TransportResponse,
};
use matreg_types::TransportError;
use serde::Serialize;
use thiserror::Error;
use tracing::{debug, error, info, warn};

use super::additional_costs::AdditionalCosts;
use crate::notification::{Notification, Notifier};

/// Errors from editing the draft
#[derive(Debug, Error, PartialEq)]
pub enum FormError {
    #[error("Additional cost index {index} out of range (len {len})")]
    CostIndexOutOfRange { index: usize, len: usize },
}

/// Reasons a submission never reached the transport
#[derive(Debug, Error, PartialEq)]
pub enum SubmitError {
    #[error("Validation failed:\n{0}")]
    Validation(FieldErrors),

    #[error("A submission is already in flight")]
    InFlight,
}

/// Editable base fields of the draft
#[derive(Debug, Clone, PartialEq)]
pub struct MaterialDraft {
    pub code: String,
    pub description: String,
    pub unit_cost: NumericInput,
    pub quantity: NumericInput,
    pub acquisition_date: Option<NaiveDate>,
    pub supplier: String,
}

impl MaterialDraft {
    pub fn blank(today: NaiveDate) -> Self {
        Self {
            code: String::new(),
            description: String::new(),
            unit_cost: NumericInput::Number(0.0),
            quantity: NumericInput::Number(0.0),
            acquisition_date: Some(today),
            supplier: String::new(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum SubmissionState {
    Idle,
    Submitting,
}

/// A validated record waiting for its transport outcome
#[derive(Debug, Clone, PartialEq)]
pub struct PreparedSubmission {
    pub record: MaterialRecord,
}

/// What a finished submission attempt did
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "outcome", rename_all = "snake_case")]
pub enum SubmissionReport {
    /// Endpoint accepted the record
    Created { code: String, total_cost: f64 },
    /// Endpoint answered with a non-2xx status
    Rejected { code: String, status: u16 },
    /// Request never completed
    TransportFailed { reason: String },
}

/// Holds the draft of one registration form
#[derive(Debug, Clone)]
pub struct FormController {
    draft: MaterialDraft,
    additional_costs: AdditionalCosts,
    total_cost: f64,
    state: SubmissionState,
}

impl FormController {
    pub fn new(today: NaiveDate) -> Self {
        Self {
            draft: MaterialDraft::blank(today),
            additional_costs: AdditionalCosts::new(),
            total_cost: 0.0,
            state: SubmissionState::Idle,
        }
    }

    /// Controller pre-filled from a candidate, e.g. read from a file
    pub fn from_candidate(candidate: MaterialCandidate, today: NaiveDate) -> Self {
        let mut controller = Self::new(today);
        controller.load_candidate(candidate);
        controller
    }

    pub fn draft(&self) -> &MaterialDraft {
        &self.draft
    }

    pub fn additional_costs(&self) -> &[NumericInput] {
        self.additional_costs.as_slice()
    }

    /// Running total as currently displayed
    pub fn total_cost(&self) -> f64 {
        self.total_cost
    }

    pub fn is_submitting(&self) -> bool {
        self.state == SubmissionState::Submitting
    }

    pub fn set_code(&mut self, code: impl Into<String>) {
        self.draft.code = code.into();
    }

    pub fn set_description(&mut self, description: impl Into<String>) {
        self.draft.description = description.into();
    }

    pub fn set_supplier(&mut self, supplier: impl Into<String>) {
        self.draft.supplier = supplier.into();
    }

    pub fn set_acquisition_date(&mut self, date: Option<NaiveDate>) {
        self.draft.acquisition_date = date;
    }

    pub fn set_unit_cost(&mut self, unit_cost: impl Into<NumericInput>) {
        self.draft.unit_cost = unit_cost.into();
        self.recompute_total();
    }

    pub fn set_quantity(&mut self, quantity: impl Into<NumericInput>) {
        self.draft.quantity = quantity.into();
        self.recompute_total();
    }

    /// Add a cost row holding 0; returns its index
    pub fn append_cost(&mut self) -> usize {
        let index = self.additional_costs.append();
        self.recompute_total();
        index
    }

    /// Remove a cost row; later rows shift down.
    ///
    /// The last remaining row can still be removed here; hiding the control is
    /// up to the presentation layer via [`can_remove_cost`](Self::can_remove_cost).
    pub fn remove_cost_at(&mut self, index: usize) -> Result<NumericInput, FormError> {
        let len = self.additional_costs.len();
        let removed = self
            .additional_costs
            .remove_at(index)
            .ok_or(FormError::CostIndexOutOfRange { index, len })?;
        self.recompute_total();
        Ok(removed)
    }

    pub fn update_cost_at(
        &mut self,
        index: usize,
        value: impl Into<NumericInput>,
    ) -> Result<(), FormError> {
        let len = self.additional_costs.len();
        self.additional_costs
            .update_at(index, value.into())
            .ok_or(FormError::CostIndexOutOfRange { index, len })?;
        self.recompute_total();
        Ok(())
    }

    pub fn can_remove_cost(&self) -> bool {
        self.additional_costs.can_remove()
    }

    /// Replace every field, additional costs included, with the candidate's
    pub fn load_candidate(&mut self, candidate: MaterialCandidate) {
        self.draft = MaterialDraft {
            code: candidate.code,
            description: candidate.description,
            unit_cost: candidate.unit_cost,
            quantity: candidate.quantity,
            acquisition_date: candidate.acquisition_date,
            supplier: candidate.supplier,
        };
        self.additional_costs = candidate.additional_cost.into();
        self.recompute_total();
    }

    /// Current state as the validator sees it: base fields as typed, additional
    /// costs already coerced with non-numeric entries as 0
    pub fn candidate(&self) -> MaterialCandidate {
        MaterialCandidate {
            code: self.draft.code.clone(),
            description: self.draft.description.clone(),
            unit_cost: self.draft.unit_cost.clone(),
            quantity: self.draft.quantity.clone(),
            acquisition_date: self.draft.acquisition_date,
            supplier: self.draft.supplier.clone(),
            additional_cost: self
                .additional_costs
                .coerced()
                .into_iter()
                .map(NumericInput::Number)
                .collect(),
        }
    }

    pub fn validate(&self, today: NaiveDate) -> Result<Material, FieldErrors> {
        validate_material(&self.candidate(), today)
    }

    /// Back to a blank draft with no cost rows
    pub fn reset(&mut self, today: NaiveDate) {
        self.draft = MaterialDraft::blank(today);
        self.additional_costs.clear();
        self.state = SubmissionState::Idle;
        self.recompute_total();
    }

    /// Validate and assemble the outbound record, entering the submitting state.
    ///
    /// On a validation failure the draft is kept as is.
    pub fn prepare_submission(
        &mut self,
        today: NaiveDate,
    ) -> Result<PreparedSubmission, SubmitError> {
        if self.is_submitting() {
            warn!("Submit ignored: previous submission still in flight");
            return Err(SubmitError::InFlight);
        }

        let material = self.validate(today).map_err(|errors| {
            debug!("Draft rejected by validation ({} fields)", errors.len());
            SubmitError::Validation(errors)
        })?;

        self.state = SubmissionState::Submitting;
        let record = material.into_record();
        info!(code = %record.code(), total_cost = record.total_cost, "Submitting material");
        Ok(PreparedSubmission { record })
    }

    /// Apply the transport outcome: notify once, then reset
    pub fn complete_submission<N: Notifier>(
        &mut self,
        prepared: PreparedSubmission,
        outcome: Result<TransportResponse, TransportError>,
        notifier: &N,
        today: NaiveDate,
    ) -> SubmissionReport {
        let code = prepared.record.material.code;

        let report = match outcome {
            Ok(response) if response.is_ok() => {
                info!(code = %code, status = response.status, "Material registered");
                notifier.notify(&Notification::material_created(&code));
                SubmissionReport::Created {
                    code,
                    total_cost: prepared.record.total_cost,
                }
            }
            Ok(response) => {
                warn!(code = %code, status = response.status, "Endpoint rejected material");
                notifier.notify(&Notification::registration_failed());
                SubmissionReport::Rejected {
                    code,
                    status: response.status,
                }
            }
            Err(err) => {
                error!(code = %code, "Material submission failed: {}", err);
                SubmissionReport::TransportFailed {
                    reason: err.to_string(),
                }
            }
        };

        self.reset(today);
        report
    }

    /// Run the whole lifecycle against a repository.
    ///
    /// Dropping the future before the transport answers leaves the draft as
    /// it was and returns the form to idle.
    pub async fn submit<R, N>(
        &mut self,
        repository: &R,
        notifier: &N,
        today: NaiveDate,
    ) -> Result<SubmissionReport, SubmitError>
    where
        R: MaterialRepository,
        N: Notifier,
    {
        let prepared = self.prepare_submission(today)?;
        let mut guard = InFlightGuard { form: self };
        let outcome = repository.create(&prepared.record).await;
        let report = guard
            .form
            .complete_submission(prepared, outcome, notifier, today);
        Ok(report)
    }

    fn recompute_total(&mut self) {
        self.total_cost = compute_running_total(
            &self.draft.unit_cost,
            &self.draft.quantity,
            self.additional_costs.as_slice(),
        );
        debug!(total_cost = self.total_cost, "Total recomputed");
    }
}

/// Clears the submitting state if a submission is abandoned mid-flight
struct InFlightGuard<'a> {
    form: &'a mut FormController,
}

impl Drop for InFlightGuard<'_> {
    fn drop(&mut self) {
        if self.form.is_submitting() {
            warn!("Submission abandoned before the transport answered");
            self.form.state = SubmissionState::Idle;
        }
    }
}
