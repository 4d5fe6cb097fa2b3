//! The repeatable additional-cost rows of the form

use matreg_domain::NumericInput;

/// Ordered list of additional-cost entries.
///
/// Indices are positional: removing an entry shifts every later entry down by
/// one.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct AdditionalCosts {
    entries: Vec<NumericInput>,
}

impl AdditionalCosts {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a new entry holding 0 and return its index
    pub fn append(&mut self) -> usize {
        self.entries.push(NumericInput::Number(0.0));
        self.entries.len() - 1
    }

    pub fn remove_at(&mut self, index: usize) -> Option<NumericInput> {
        (index < self.entries.len()).then(|| self.entries.remove(index))
    }

    /// Replace the entry at `index`, returning the previous value
    pub fn update_at(&mut self, index: usize, value: NumericInput) -> Option<NumericInput> {
        self.entries
            .get_mut(index)
            .map(|slot| std::mem::replace(slot, value))
    }

    /// Rows offer a remove control only while more than one exists
    pub fn can_remove(&self) -> bool {
        self.entries.len() > 1
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn as_slice(&self) -> &[NumericInput] {
        &self.entries
    }

    /// Snapshot with every entry coerced; non-numeric entries become 0
    pub fn coerced(&self) -> Vec<f64> {
        self.entries.iter().map(NumericInput::or_zero).collect()
    }

    pub fn clear(&mut self) {
        self.entries.clear();
    }
}

impl From<Vec<NumericInput>> for AdditionalCosts {
    fn from(entries: Vec<NumericInput>) -> Self {
        Self { entries }
    }
}
