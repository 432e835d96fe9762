//! Declarative validation rules for mapped properties

use regex::Regex;

use crate::coerce::Measure;
use crate::{format_message, Error, Result};

/// A check run on a property after it has been read from its cell
///
/// Custom messages may use `{0}` for the column, `{1}` for the limit or
/// minimum and `{2}` for the maximum.
#[derive(Debug, Clone)]
pub enum Rule {
    Required {
        message: Option<String>,
    },
    MinLength {
        min: usize,
        message: Option<String>,
    },
    MaxLength {
        max: usize,
        message: Option<String>,
    },
    Range {
        min: f64,
        max: f64,
        message: Option<String>,
    },
    Pattern {
        regex: Regex,
        message: Option<String>,
    },
}

impl Rule {
    pub fn required() -> Self {
        Rule::Required { message: None }
    }

    pub fn min_length(min: usize) -> Self {
        Rule::MinLength { min, message: None }
    }

    pub fn max_length(max: usize) -> Self {
        Rule::MaxLength { max, message: None }
    }

    /// Inclusive numeric bounds
    pub fn range(min: f64, max: f64) -> Self {
        Rule::Range {
            min,
            max,
            message: None,
        }
    }

    /// Text must match `pattern` in full
    pub fn pattern(pattern: &str) -> Result<Self> {
        let regex = Regex::new(&format!("^(?:{})$", pattern))
            .map_err(|e| Error::Configuration(format!("invalid pattern '{}': {}", pattern, e)))?;
        Ok(Rule::Pattern {
            regex,
            message: None,
        })
    }

    /// Replace the default failure message
    pub fn with_message<S: Into<String>>(mut self, text: S) -> Self {
        let text = Some(text.into());
        match &mut self {
            Rule::Required { message }
            | Rule::MinLength { message, .. }
            | Rule::MaxLength { message, .. }
            | Rule::Range { message, .. }
            | Rule::Pattern { message, .. } => *message = text,
        }
        self
    }

    /// Failure message for `value` in `column`, or `None` when it passes
    pub fn check(&self, column: &str, value: &Measure<'_>) -> Option<String> {
        if let Rule::Required { message } = self {
            let missing = match value {
                Measure::Null => true,
                Measure::Text(s) => s.trim().is_empty(),
                _ => false,
            };
            return missing.then(|| {
                render(message, "The {0} field is required.", &[&column])
            });
        }

        match (self, value) {
            (_, Measure::Null) => None,
            (Rule::MinLength { min, message }, Measure::Text(s)) if s.chars().count() < *min => {
                Some(render(
                    message,
                    "The field {0} must be a string with a minimum length of '{1}'.",
                    &[&column, min],
                ))
            }
            (Rule::MaxLength { max, message }, Measure::Text(s)) if s.chars().count() > *max => {
                Some(render(
                    message,
                    "The field {0} must be a string with a maximum length of '{1}'.",
                    &[&column, max],
                ))
            }
            (Rule::Range { min, max, message }, measure) => {
                let number = match measure {
                    Measure::Number(n) => Some(*n),
                    Measure::Text(s) => s.trim().parse::<f64>().ok(),
                    _ => None,
                };
                match number {
                    Some(n) if n >= *min && n <= *max => None,
                    _ => Some(render(
                        message,
                        "The field {0} must be between {1} and {2}.",
                        &[&column, min, max],
                    )),
                }
            }
            (Rule::Pattern { regex, message }, Measure::Text(s)) if !regex.is_match(s) => {
                Some(render(
                    message,
                    "The field {0} must match the regular expression '{1}'.",
                    &[&column, &regex.as_str()],
                ))
            }
            _ => None,
        }
    }
}

fn render(custom: &Option<String>, default: &str, args: &[&dyn std::fmt::Display]) -> String {
    format_message(custom.as_deref().unwrap_or(default), args)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_required() {
        let rule = Rule::required();
        assert!(rule.check("Barcode", &Measure::Text("123")).is_none());
        assert_eq!(
            rule.check("Barcode", &Measure::Text("  ")).as_deref(),
            Some("The Barcode field is required.")
        );
        assert!(rule.check("Barcode", &Measure::Null).is_some());
    }

    #[test]
    fn test_range_with_custom_message() {
        let rule = Rule::range(10.0, f64::MAX).with_message("Please enter a value bigger than {1}");
        assert!(rule.check("Quantity", &Measure::Number(10.0)).is_none());
        assert_eq!(
            rule.check("Quantity", &Measure::Number(3.0)).as_deref(),
            Some("Please enter a value bigger than 10")
        );
        // Absent optional values skip everything but Required
        assert!(rule.check("Quantity", &Measure::Null).is_none());
    }

    #[test]
    fn test_lengths() {
        assert!(Rule::min_length(3).check("Code", &Measure::Text("ab")).is_some());
        assert!(Rule::min_length(3).check("Code", &Measure::Text("abc")).is_none());
        assert!(Rule::max_length(3).check("Code", &Measure::Text("abcd")).is_some());
        assert!(Rule::max_length(3).check("Code", &Measure::Number(12345.0)).is_none());
    }

    #[test]
    fn test_pattern() {
        let rule = Rule::pattern("[0-9]+").unwrap();
        assert!(rule.check("Barcode", &Measure::Text("0123")).is_none());
        assert!(rule.check("Barcode", &Measure::Text("12a")).is_some());
        assert!(Rule::pattern("(").is_err());
    }
}
