//! Material-related type definitions

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::numeric::NumericInput;
use crate::service::total_calculator::compute_total;

/// A material as typed into the registration form, not yet validated
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct MaterialCandidate {
    pub code: String,
    pub description: String,
    pub unit_cost: NumericInput,
    pub quantity: NumericInput,
    #[serde(alias = "aquisitionDate")]
    pub acquisition_date: Option<NaiveDate>,
    pub supplier: String,
    pub additional_cost: Vec<NumericInput>,
}

impl Default for MaterialCandidate {
    fn default() -> Self {
        Self {
            code: String::new(),
            description: String::new(),
            unit_cost: NumericInput::Number(0.0),
            quantity: NumericInput::Number(0.0),
            acquisition_date: None,
            supplier: String::new(),
            additional_cost: Vec::new(),
        }
    }
}

impl MaterialCandidate {
    /// The empty draft a freshly mounted form starts from
    pub fn blank(today: NaiveDate) -> Self {
        Self {
            acquisition_date: Some(today),
            ..Default::default()
        }
    }
}

/// A validated material
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Material {
    pub code: String,
    pub description: String,
    pub unit_cost: f64,
    pub quantity: f64,
    pub acquisition_date: NaiveDate,
    pub supplier: String,
    pub additional_cost: Vec<f64>,
}

impl Material {
    /// unit cost × quantity + Σ additional costs
    pub fn total_cost(&self) -> f64 {
        compute_total(self.unit_cost, self.quantity, &self.additional_cost)
    }

    pub fn into_record(self) -> MaterialRecord {
        MaterialRecord::new(self)
    }
}

/// The record posted to the creation endpoint
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MaterialRecord {
    #[serde(flatten)]
    pub material: Material,
    pub total_cost: f64,
}

impl MaterialRecord {
    pub fn new(material: Material) -> Self {
        let total_cost = material.total_cost();
        Self {
            material,
            total_cost,
        }
    }

    pub fn code(&self) -> &str {
        &self.material.code
    }
}
