//! Exercise field validation

use serde::{Deserialize, Serialize, Serializer};

use super::ValidationError;

/// Maximum length for exercise descriptions
const MAX_DESCRIPTION_LEN: usize = 512;

/// Validated exercise description
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Description(String);

impl Description {
    /// Create a new description.
    ///
    /// # Rules
    /// - Non-empty (after trimming whitespace)
    /// - Max 512 characters
    pub fn new(s: &str) -> Result<Self, ValidationError> {
        let trimmed = s.trim();

        if trimmed.is_empty() {
            return Err(ValidationError::Empty {
                field: "description",
            });
        }

        if trimmed.chars().count() > MAX_DESCRIPTION_LEN {
            return Err(ValidationError::TooLong {
                field: "description",
                max: MAX_DESCRIPTION_LEN,
            });
        }

        Ok(Self(trimmed.to_owned()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn into_string(self) -> String {
        self.0
    }
}

/// Number field as it arrives on the wire.
///
/// JSON bodies carry numbers, form bodies carry strings; both are accepted.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(untagged)]
pub enum RawNumber {
    Number(f64),
    Text(String),
}

/// Largest float that still converts exactly to an integer
const MAX_EXACT_INT: f64 = 9_007_199_254_740_992.0;

/// Exercise duration in minutes (positive, fractions allowed)
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, sqlx::Type)]
#[sqlx(transparent)]
pub struct Minutes(f64);

impl Minutes {
    /// Create a duration from a minute count.
    ///
    /// # Example
    /// ```
    /// use extrack_server::models::Minutes;
    ///
    /// assert_eq!(Minutes::new(12.5).unwrap().get(), 12.5);
    /// assert!(Minutes::new(0.0).is_err());
    /// ```
    pub fn new(minutes: f64) -> Result<Self, ValidationError> {
        if !minutes.is_finite() {
            return Err(ValidationError::InvalidFormat {
                field: "duration",
                reason: "must be a finite number of minutes",
            });
        }
        if minutes <= 0.0 {
            return Err(ValidationError::OutOfRange {
                field: "duration",
                value: minutes.to_string(),
            });
        }
        Ok(Self(minutes))
    }

    /// Parse the wire form of a duration.
    pub fn parse(raw: &RawNumber) -> Result<Self, ValidationError> {
        match raw {
            RawNumber::Number(n) => Self::new(*n),
            RawNumber::Text(s) => {
                let s = s.trim();
                if s.is_empty() {
                    return Err(ValidationError::Empty { field: "duration" });
                }
                let n: f64 = s.parse().map_err(|_| ValidationError::InvalidFormat {
                    field: "duration",
                    reason: "must be a number of minutes",
                })?;
                Self::new(n)
            }
        }
    }

    pub fn get(self) -> f64 {
        self.0
    }
}

/// Whole values render without a fraction: `30`, not `30.0`.
impl Serialize for Minutes {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        if self.0.fract() == 0.0 && self.0 <= MAX_EXACT_INT {
            serializer.serialize_i64(self.0 as i64)
        } else {
            serializer.serialize_f64(self.0)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn description_rules() {
        assert_eq!(Description::new("  test run ").unwrap().as_str(), "test run");
        assert!(matches!(
            Description::new("").unwrap_err(),
            ValidationError::Empty { .. }
        ));
        assert!(Description::new(&"x".repeat(512)).is_ok());
        assert!(matches!(
            Description::new(&"x".repeat(513)).unwrap_err(),
            ValidationError::TooLong { max: 512, .. }
        ));
    }

    #[test]
    fn duration_from_json_number() {
        assert_eq!(Minutes::parse(&RawNumber::Number(30.0)).unwrap().get(), 30.0);
        assert_eq!(Minutes::parse(&RawNumber::Number(12.5)).unwrap().get(), 12.5);
    }

    #[test]
    fn duration_from_form_text() {
        assert_eq!(
            Minutes::parse(&RawNumber::Text("60".into())).unwrap().get(),
            60.0
        );
        assert_eq!(
            Minutes::parse(&RawNumber::Text(" 7.25 ".into())).unwrap().get(),
            7.25
        );
        assert!(matches!(
            Minutes::parse(&RawNumber::Text("an hour".into())).unwrap_err(),
            ValidationError::InvalidFormat { .. }
        ));
        assert!(matches!(
            Minutes::parse(&RawNumber::Text("".into())).unwrap_err(),
            ValidationError::Empty { .. }
        ));
    }

    #[test]
    fn duration_rejects_non_positive_and_non_finite() {
        assert!(matches!(
            Minutes::new(0.0).unwrap_err(),
            ValidationError::OutOfRange { .. }
        ));
        assert!(Minutes::new(-5.0).is_err());
        assert!(matches!(
            Minutes::parse(&RawNumber::Text("NaN".into())).unwrap_err(),
            ValidationError::InvalidFormat { .. }
        ));
        assert!(Minutes::parse(&RawNumber::Text("inf".into())).is_err());
    }

    #[test]
    fn duration_renders_unchanged() {
        let whole = serde_json::to_value(Minutes::new(30.0).unwrap()).unwrap();
        assert_eq!(whole, serde_json::json!(30));
        let fraction = serde_json::to_value(Minutes::new(12.5).unwrap()).unwrap();
        assert_eq!(fraction, serde_json::json!(12.5));
    }

    #[test]
    fn raw_number_deserializes_both_shapes() {
        let n: RawNumber = serde_json::from_str("30").unwrap();
        assert_eq!(n, RawNumber::Number(30.0));
        let f: RawNumber = serde_json::from_str("12.5").unwrap();
        assert_eq!(f, RawNumber::Number(12.5));
        let s: RawNumber = serde_json::from_str(r#""30""#).unwrap();
        assert_eq!(s, RawNumber::Text("30".into()));
    }
}
