//! Basket type definitions
//!
//! A basket groups materials under one category with its own value, cost and
//! tax lines. Nothing in the registration flow builds one; the schema exists
//! so other callers can validate baskets with the same material rules.

use serde::{Deserialize, Serialize};

use super::material::{Material, MaterialCandidate};
use super::numeric::NumericInput;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct BasketCandidate {
    pub code: String,
    pub description: String,
    pub value: NumericInput,
    pub quantity: NumericInput,
    pub materials: Vec<MaterialCandidate>,
    pub total_cost: NumericInput,
    #[serde(alias = "aditionalCost")]
    pub additional_cost: Vec<NumericInput>,
    pub taxes: Vec<NumericInput>,
    pub category: String,
}

impl Default for BasketCandidate {
    fn default() -> Self {
        Self {
            code: String::new(),
            description: String::new(),
            value: NumericInput::Number(0.0),
            quantity: NumericInput::Number(0.0),
            materials: Vec::new(),
            total_cost: NumericInput::Number(0.0),
            additional_cost: Vec::new(),
            taxes: Vec::new(),
            category: String::new(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Basket {
    pub code: String,
    pub description: String,
    pub value: f64,
    pub quantity: f64,
    pub materials: Vec<Material>,
    pub total_cost: f64,
    pub additional_cost: Vec<f64>,
    pub taxes: Vec<f64>,
    pub category: String,
}
