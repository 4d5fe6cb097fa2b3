//! Raw numeric field input

use serde::{Deserialize, Serialize};

/// A numeric form field as the user left it.
///
/// Values arrive either already numeric, as text that still has to be
/// coerced, or empty. JSON maps onto this untagged: `10`, `"10,5"`, `null`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum NumericInput {
    Number(f64),
    Text(String),
    #[default]
    Empty,
}

impl NumericInput {
    /// Coerce to a finite number, or `None` when the input is not numeric.
    ///
    /// Text is trimmed and a single decimal comma is read as a decimal point.
    pub fn coerce(&self) -> Option<f64> {
        match self {
            NumericInput::Number(n) if n.is_finite() => Some(*n),
            NumericInput::Number(_) => None,
            NumericInput::Text(s) => parse_decimal(s),
            NumericInput::Empty => None,
        }
    }

    /// Coerce, treating anything non-numeric as zero.
    pub fn or_zero(&self) -> f64 {
        self.coerce().unwrap_or(0.0)
    }

    pub fn is_empty(&self) -> bool {
        match self {
            NumericInput::Empty => true,
            NumericInput::Text(s) => s.trim().is_empty(),
            NumericInput::Number(_) => false,
        }
    }
}

fn parse_decimal(raw: &str) -> Option<f64> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return None;
    }

    let normalized = if !trimmed.contains('.') && trimmed.matches(',').count() == 1 {
        trimmed.replace(',', ".")
    } else {
        trimmed.to_string()
    };

    normalized.parse::<f64>().ok().filter(|n| n.is_finite())
}

impl From<f64> for NumericInput {
    fn from(value: f64) -> Self {
        NumericInput::Number(value)
    }
}

impl From<&str> for NumericInput {
    fn from(value: &str) -> Self {
        if value.trim().is_empty() {
            NumericInput::Empty
        } else {
            NumericInput::Text(value.to_string())
        }
    }
}

impl From<String> for NumericInput {
    fn from(value: String) -> Self {
        NumericInput::from(value.as_str())
    }
}

impl std::fmt::Display for NumericInput {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            NumericInput::Number(n) => write!(f, "{}", n),
            NumericInput::Text(s) => write!(f, "{}", s),
            NumericInput::Empty => Ok(()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_number_passes_through() {
        assert_eq!(NumericInput::Number(10.5).coerce(), Some(10.5));
        assert_eq!(NumericInput::Number(-3.0).coerce(), Some(-3.0));
    }

    #[test]
    fn test_non_finite_number_is_rejected() {
        assert_eq!(NumericInput::Number(f64::NAN).coerce(), None);
        assert_eq!(NumericInput::Number(f64::INFINITY).coerce(), None);
    }

    #[test]
    fn test_text_is_parsed() {
        assert_eq!(NumericInput::from("12").coerce(), Some(12.0));
        assert_eq!(NumericInput::from(" 12.25 ").coerce(), Some(12.25));
        assert_eq!(NumericInput::from("10,5").coerce(), Some(10.5));
    }

    #[test]
    fn test_garbage_text_is_rejected() {
        assert_eq!(NumericInput::from("abc").coerce(), None);
        assert_eq!(NumericInput::from("1,2,3").coerce(), None);
        assert_eq!(NumericInput::from("NaN").coerce(), None);
        assert_eq!(NumericInput::from("inf").coerce(), None);
    }

    #[test]
    fn test_empty_input() {
        assert_eq!(NumericInput::from("   "), NumericInput::Empty);
        assert!(NumericInput::Empty.is_empty());
        assert_eq!(NumericInput::Empty.coerce(), None);
        assert_eq!(NumericInput::Empty.or_zero(), 0.0);
    }

    #[test]
    fn test_or_zero_for_garbage() {
        assert_eq!(NumericInput::from("x").or_zero(), 0.0);
    }

    #[test]
    fn test_deserialize_untagged() {
        let values: Vec<NumericInput> = serde_json::from_str(r#"[10, "2,5", null]"#).unwrap();
        assert_eq!(
            values,
            vec![
                NumericInput::Number(10.0),
                NumericInput::Text("2,5".to_string()),
                NumericInput::Empty,
            ]
        );
    }
}
