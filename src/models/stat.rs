use serde::{Serialize, Serializer};

pub const INSUFFICIENT_DATA: &str = "insufficient data";

/// A computed statistic, or the marker that the window held too few rows.
///
/// Serializes as a bare JSON number or as the string `"insufficient data"`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Stat {
    Value(f64),
    InsufficientData,
}

impl Stat {
    pub fn value(&self) -> Option<f64> {
        match self {
            Stat::Value(v) => Some(*v),
            Stat::InsufficientData => None,
        }
    }

    pub fn is_insufficient(&self) -> bool {
        matches!(self, Stat::InsufficientData)
    }
}

impl From<Option<f64>> for Stat {
    fn from(value: Option<f64>) -> Self {
        value.map_or(Stat::InsufficientData, Stat::Value)
    }
}

impl Serialize for Stat {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            Stat::Value(v) => serializer.serialize_f64(*v),
            Stat::InsufficientData => serializer.serialize_str(INSUFFICIENT_DATA),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_value_serializes_as_number() {
        assert_eq!(serde_json::to_value(Stat::Value(1.25)).unwrap(), json!(1.25));
    }

    #[test]
    fn test_insufficient_serializes_as_sentinel() {
        assert_eq!(
            serde_json::to_value(Stat::InsufficientData).unwrap(),
            json!("insufficient data")
        );
    }

    #[test]
    fn test_from_option() {
        assert_eq!(Stat::from(Some(2.0)), Stat::Value(2.0));
        assert!(Stat::from(None).is_insufficient());
        assert_eq!(Stat::InsufficientData.value(), None);
    }
}
