use serde::Serialize;
use std::fmt;

/// Numeric coercion of the free-text patient id field.
///
/// Text that does not read as an integer is kept as "not a number" instead
/// of being rejected: it goes over the wire as `null` in JSON bodies and as
/// `NaN` in paths, and the backend decides what to do with it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(transparent)]
pub struct PatientId(Option<i64>);

impl PatientId {
    pub fn new(id: i64) -> Self {
        PatientId(Some(id))
    }

    pub fn nan() -> Self {
        PatientId(None)
    }

    /// Blank input is `0`, integers and integral decimals (`7.0`, `1e2`) keep
    /// their value, everything else is NaN.
    pub fn coerce(raw: &str) -> Self {
        let trimmed = raw.trim();
        if trimmed.is_empty() {
            return PatientId(Some(0));
        }

        if let Ok(id) = trimmed.parse::<i64>() {
            return PatientId(Some(id));
        }

        match trimmed.parse::<f64>() {
            Ok(value) if value.is_finite() && value.fract() == 0.0 && value.abs() < i64::MAX as f64 => {
                PatientId(Some(value as i64))
            }
            _ => PatientId(None),
        }
    }

    pub fn value(&self) -> Option<i64> {
        self.0
    }

    pub fn is_nan(&self) -> bool {
        self.0.is_none()
    }
}

impl From<i64> for PatientId {
    fn from(id: i64) -> Self {
        PatientId::new(id)
    }
}

impl fmt::Display for PatientId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.0 {
            Some(id) => write!(f, "{}", id),
            None => write!(f, "NaN"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn integers_are_kept() {
        assert_eq!(PatientId::coerce("42"), PatientId::new(42));
        assert_eq!(PatientId::coerce("  7 "), PatientId::new(7));
        assert_eq!(PatientId::coerce("-3"), PatientId::new(-3));
        assert_eq!(PatientId::coerce("+5"), PatientId::new(5));
    }

    #[test]
    fn blank_input_is_zero() {
        assert_eq!(PatientId::coerce(""), PatientId::new(0));
        assert_eq!(PatientId::coerce("   "), PatientId::new(0));
    }

    #[test]
    fn integral_decimals_are_integers() {
        assert_eq!(PatientId::coerce("7.0"), PatientId::new(7));
        assert_eq!(PatientId::coerce("1e2"), PatientId::new(100));
    }

    #[test]
    fn everything_else_is_nan() {
        for raw in ["abc", "1.5", "12abc", "NaN", "inf", "--1"] {
            assert!(PatientId::coerce(raw).is_nan(), "{raw:?} should be NaN");
        }
    }

    #[test]
    fn serializes_like_json_stringify() {
        assert_eq!(serde_json::to_string(&PatientId::new(1)).unwrap(), "1");
        assert_eq!(serde_json::to_string(&PatientId::nan()).unwrap(), "null");
    }

    #[test]
    fn displays_for_paths() {
        assert_eq!(PatientId::new(42).to_string(), "42");
        assert_eq!(PatientId::nan().to_string(), "NaN");
    }
}
