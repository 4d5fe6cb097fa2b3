//! Field paths and per-field validation errors

use std::collections::BTreeMap;

use serde::{Serialize, Serializer};

/// Names a field of a material or basket, including list positions.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum FieldPath {
    Code,
    Description,
    UnitCost,
    Quantity,
    AcquisitionDate,
    Supplier,
    AdditionalCost(usize),
    Value,
    Category,
    TotalCost,
    Taxes(usize),
    /// A field of the material at the given position inside a basket
    Materials(usize, Box<FieldPath>),
}

impl std::fmt::Display for FieldPath {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            FieldPath::Code => write!(f, "code"),
            FieldPath::Description => write!(f, "description"),
            FieldPath::UnitCost => write!(f, "unitCost"),
            FieldPath::Quantity => write!(f, "quantity"),
            FieldPath::AcquisitionDate => write!(f, "acquisitionDate"),
            FieldPath::Supplier => write!(f, "supplier"),
            FieldPath::AdditionalCost(i) => write!(f, "additionalCost.{}", i),
            FieldPath::Value => write!(f, "value"),
            FieldPath::Category => write!(f, "category"),
            FieldPath::TotalCost => write!(f, "totalCost"),
            FieldPath::Taxes(i) => write!(f, "taxes.{}", i),
            FieldPath::Materials(i, inner) => write!(f, "materials.{}.{}", i, inner),
        }
    }
}

/// Every violated constraint, grouped by field.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FieldErrors(BTreeMap<FieldPath, Vec<String>>);

impl FieldErrors {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add(&mut self, field: FieldPath, message: impl Into<String>) {
        self.0.entry(field).or_default().push(message.into());
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Number of fields with at least one error
    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn get(&self, field: &FieldPath) -> Option<&[String]> {
        self.0.get(field).map(Vec::as_slice)
    }

    pub fn contains(&self, field: &FieldPath) -> bool {
        self.0.contains_key(field)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&FieldPath, &[String])> {
        self.0.iter().map(|(k, v)| (k, v.as_slice()))
    }

    /// Fold the errors of a basket's material into this set under `materials.<index>.`
    pub fn merge_nested(&mut self, index: usize, nested: FieldErrors) {
        for (field, messages) in nested.0 {
            self.0
                .entry(FieldPath::Materials(index, Box::new(field)))
                .or_default()
                .extend(messages);
        }
    }
}

impl std::fmt::Display for FieldErrors {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for (field, messages) in &self.0 {
            for message in messages {
                writeln!(f, "  {}: {}", field, message)?;
            }
        }
        Ok(())
    }
}

impl std::error::Error for FieldErrors {}

impl Serialize for FieldErrors {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_map(self.0.iter().map(|(k, v)| (k.to_string(), v)))
    }
}
