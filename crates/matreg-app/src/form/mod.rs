//! Registration form state

pub mod additional_costs;
pub mod controller;

pub use additional_costs::AdditionalCosts;
pub use controller::{
    FormController, FormError, MaterialDraft, PreparedSubmission, SubmissionReport, SubmitError,
};
