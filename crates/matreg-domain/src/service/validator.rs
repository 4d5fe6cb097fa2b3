//! Schema validation for materials and baskets
//!
//! Validation is a pure function of the candidate and the current date. Every
//! violated rule is collected; nothing stops at the first failure.

use chrono::NaiveDate;

use crate::model::{
    Basket, BasketCandidate, FieldErrors, FieldPath, Material, MaterialCandidate, NumericInput,
};

pub const CODE_REQUIRED: &str = "Código é obrigatório";
pub const DESCRIPTION_REQUIRED: &str = "Descrição é obrigatória";
pub const UNIT_COST_POSITIVE: &str = "Custo unitário deve ser maior que zero";
pub const QUANTITY_POSITIVE: &str = "Quantidade deve ser maior que zero";
pub const DATE_REQUIRED: &str = "Data de aquisição é obrigatória";
pub const DATE_IN_FUTURE: &str = "Data de aquisição não pode ser no futuro";
pub const ADDITIONAL_COST_NON_NEGATIVE: &str = "Custo adicional deve ser maior que zero";
pub const VALUE_NON_NEGATIVE: &str = "Valor deve ser maior que zero";
pub const CATEGORY_REQUIRED: &str = "Categoria é obrigatória";
pub const NOT_A_NUMBER: &str = "Valor numérico inválido";
pub const TOTAL_OUT_OF_RANGE: &str = "Custo total excede o limite suportado";

/// Validate a material draft against the material schema.
///
/// `today` is the boundary for the acquisition date: the date may equal it
/// but not be later. Strings are kept as typed, without trimming.
pub fn validate_material(
    candidate: &MaterialCandidate,
    today: NaiveDate,
) -> Result<Material, FieldErrors> {
    let mut errors = FieldErrors::new();

    require_text(&candidate.code, FieldPath::Code, CODE_REQUIRED, &mut errors);
    require_text(
        &candidate.description,
        FieldPath::Description,
        DESCRIPTION_REQUIRED,
        &mut errors,
    );

    let unit_cost = number_where(
        &candidate.unit_cost,
        |n| n > 0.0,
        FieldPath::UnitCost,
        UNIT_COST_POSITIVE,
        &mut errors,
    );
    let quantity = number_where(
        &candidate.quantity,
        |n| n > 0.0,
        FieldPath::Quantity,
        QUANTITY_POSITIVE,
        &mut errors,
    );

    let acquisition_date = match candidate.acquisition_date {
        None => {
            errors.add(FieldPath::AcquisitionDate, DATE_REQUIRED);
            None
        }
        Some(date) if date > today => {
            errors.add(FieldPath::AcquisitionDate, DATE_IN_FUTURE);
            None
        }
        Some(date) => Some(date),
    };

    let additional_cost = number_list_where(
        &candidate.additional_cost,
        |n| n >= 0.0,
        FieldPath::AdditionalCost,
        ADDITIONAL_COST_NON_NEGATIVE,
        &mut errors,
    );

    let material = match (unit_cost, quantity, acquisition_date, additional_cost) {
        (Some(unit_cost), Some(quantity), Some(acquisition_date), Some(additional_cost))
            if errors.is_empty() =>
        {
            Material {
                code: candidate.code.clone(),
                description: candidate.description.clone(),
                unit_cost,
                quantity,
                acquisition_date,
                supplier: candidate.supplier.clone(),
                additional_cost,
            }
        }
        _ => return Err(errors),
    };

    // Finite inputs can still overflow once multiplied and summed
    if !material.total_cost().is_finite() {
        errors.add(FieldPath::UnitCost, TOTAL_OUT_OF_RANGE);
        return Err(errors);
    }

    Ok(material)
}

/// Validate a basket, applying the material schema to each nested material.
///
/// Errors of nested materials are reported under `materials.<index>.<field>`.
pub fn validate_basket(candidate: &BasketCandidate, today: NaiveDate) -> Result<Basket, FieldErrors> {
    let mut errors = FieldErrors::new();

    require_text(&candidate.code, FieldPath::Code, CODE_REQUIRED, &mut errors);
    require_text(
        &candidate.description,
        FieldPath::Description,
        DESCRIPTION_REQUIRED,
        &mut errors,
    );
    let value = number_where(
        &candidate.value,
        |n| n >= 0.0,
        FieldPath::Value,
        VALUE_NON_NEGATIVE,
        &mut errors,
    );
    let quantity = number_where(
        &candidate.quantity,
        |n| n >= 0.0,
        FieldPath::Quantity,
        QUANTITY_POSITIVE,
        &mut errors,
    );

    let mut materials = Vec::with_capacity(candidate.materials.len());
    for (index, material) in candidate.materials.iter().enumerate() {
        match validate_material(material, today) {
            Ok(valid) => materials.push(valid),
            Err(nested) => errors.merge_nested(index, nested),
        }
    }

    let total_cost = number_where(
        &candidate.total_cost,
        |_| true,
        FieldPath::TotalCost,
        NOT_A_NUMBER,
        &mut errors,
    );
    let additional_cost = number_list_where(
        &candidate.additional_cost,
        |_| true,
        FieldPath::AdditionalCost,
        NOT_A_NUMBER,
        &mut errors,
    );
    let taxes = number_list_where(
        &candidate.taxes,
        |_| true,
        FieldPath::Taxes,
        NOT_A_NUMBER,
        &mut errors,
    );
    require_text(&candidate.category, FieldPath::Category, CATEGORY_REQUIRED, &mut errors);

    match (value, quantity, total_cost, additional_cost, taxes) {
        (Some(value), Some(quantity), Some(total_cost), Some(additional_cost), Some(taxes))
            if errors.is_empty() =>
        {
            Ok(Basket {
                code: candidate.code.clone(),
                description: candidate.description.clone(),
                value,
                quantity,
                materials,
                total_cost,
                additional_cost,
                taxes,
                category: candidate.category.clone(),
            })
        }
        _ => Err(errors),
    }
}

fn require_text(value: &str, field: FieldPath, message: &str, errors: &mut FieldErrors) {
    if value.is_empty() {
        errors.add(field, message);
    }
}

/// Coerce and range-check one numeric field. A non-numeric value reports
/// `NOT_A_NUMBER` only.
fn number_where(
    input: &NumericInput,
    accept: impl Fn(f64) -> bool,
    field: FieldPath,
    message: &str,
    errors: &mut FieldErrors,
) -> Option<f64> {
    match input.coerce() {
        None => {
            errors.add(field, NOT_A_NUMBER);
            None
        }
        Some(n) if !accept(n) => {
            errors.add(field, message);
            None
        }
        Some(n) => Some(n),
    }
}

fn number_list_where(
    inputs: &[NumericInput],
    accept: impl Fn(f64) -> bool,
    field: impl Fn(usize) -> FieldPath,
    message: &str,
    errors: &mut FieldErrors,
) -> Option<Vec<f64>> {
    let values: Vec<Option<f64>> = inputs
        .iter()
        .enumerate()
        .map(|(i, input)| number_where(input, &accept, field(i), message, errors))
        .collect();
    values.into_iter().collect()
}
