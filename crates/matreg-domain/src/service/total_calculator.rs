//! Total cost calculation for materials

use crate::model::NumericInput;

/// unit cost × quantity + Σ additional costs
pub fn compute_total(unit_cost: f64, quantity: f64, additional_cost: &[f64]) -> f64 {
    unit_cost * quantity + additional_cost.iter().sum::<f64>()
}

/// Total over raw form input; non-numeric or empty operands count as zero
pub fn compute_running_total(
    unit_cost: &NumericInput,
    quantity: &NumericInput,
    additional_cost: &[NumericInput],
) -> f64 {
    let extras: f64 = additional_cost.iter().map(NumericInput::or_zero).sum();
    unit_cost.or_zero() * quantity.or_zero() + extras
}
