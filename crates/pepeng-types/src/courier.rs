//! Courier definitions.

use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// Shipping carrier.
///
/// The set is closed: the form only ever offers these three.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "UPPERCASE")]
pub enum Courier {
    /// JNE Express.
    #[default]
    Jne,
    /// TIKI (Titipan Kilat).
    Tiki,
    /// POS Indonesia.
    Pos,
}

impl Courier {
    /// Returns the courier code as a string slice.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Jne => "JNE",
            Self::Tiki => "TIKI",
            Self::Pos => "POS",
        }
    }

    /// Returns the label shown in the courier picker.
    #[must_use]
    pub const fn label(&self) -> &'static str {
        match self {
            Self::Jne => "JNE",
            Self::Tiki => "TIKI",
            Self::Pos => "POS Indonesia",
        }
    }

    /// Returns all couriers in picker order.
    #[must_use]
    pub const fn all() -> &'static [Self] {
        &[Self::Jne, Self::Tiki, Self::Pos]
    }
}

impl std::fmt::Display for Courier {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for Courier {
    type Err = CourierParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "jne" => Ok(Self::Jne),
            "tiki" => Ok(Self::Tiki),
            "pos" | "pos indonesia" => Ok(Self::Pos),
            _ => Err(CourierParseError(s.to_string())),
        }
    }
}

/// Error returned when parsing an unknown courier code.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CourierParseError(String);

impl CourierParseError {
    /// Returns the rejected input.
    #[must_use]
    pub fn input(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for CourierParseError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "invalid courier '{}', expected one of: JNE, TIKI, POS",
            self.0
        )
    }
}

impl std::error::Error for CourierParseError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_courier_parse() {
        assert_eq!("JNE".parse::<Courier>().unwrap(), Courier::Jne);
        assert_eq!("tiki".parse::<Courier>().unwrap(), Courier::Tiki);
        assert_eq!(" Pos ".parse::<Courier>().unwrap(), Courier::Pos);
        assert_eq!("POS Indonesia".parse::<Courier>().unwrap(), Courier::Pos);
        assert!("SICEPAT".parse::<Courier>().is_err());
        assert!("".parse::<Courier>().is_err());
    }

    #[test]
    fn test_courier_labels() {
        assert_eq!(Courier::Pos.as_str(), "POS");
        assert_eq!(Courier::Pos.label(), "POS Indonesia");
        assert_eq!(Courier::Tiki.to_string(), "TIKI");
        assert_eq!(Courier::default(), Courier::Jne);
        assert_eq!(Courier::all().len(), 3);
    }

    #[test]
    fn test_courier_serde_uses_code() {
        let json = serde_json::to_string(&Courier::Tiki).unwrap();
        assert_eq!(json, "\"TIKI\"");
        let parsed: Courier = serde_json::from_str("\"POS\"").unwrap();
        assert_eq!(parsed, Courier::Pos);
    }

    #[test]
    fn test_parse_error_message() {
        let err = "DHL".parse::<Courier>().unwrap_err();
        assert_eq!(err.input(), "DHL");
        assert!(err.to_string().contains("expected one of"));
    }
}
