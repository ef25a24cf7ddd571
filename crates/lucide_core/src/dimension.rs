//! Icon dimensions

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::element::AttrValue;

/// A width/height value: either a plain number of user units or any CSS length
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Dimension {
    Number(f32),
    Css(String),
}

impl Dimension {
    /// The numeric value, if this dimension is one
    ///
    /// Strings holding a bare number (`"48"`) count as numeric; lengths with
    /// units (`"1em"`, `"50%"`) do not.
    pub fn as_number(&self) -> Option<f32> {
        match self {
            Dimension::Number(n) => Some(*n),
            Dimension::Css(s) => s.trim().parse::<f32>().ok(),
        }
    }
}

impl fmt::Display for Dimension {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Dimension::Number(n) => write!(f, "{}", n),
            Dimension::Css(s) => f.write_str(s),
        }
    }
}

impl From<f32> for Dimension {
    fn from(value: f32) -> Self {
        Dimension::Number(value)
    }
}

impl From<i32> for Dimension {
    fn from(value: i32) -> Self {
        Dimension::Number(value as f32)
    }
}

impl From<&str> for Dimension {
    fn from(value: &str) -> Self {
        Dimension::Css(value.to_string())
    }
}

impl From<String> for Dimension {
    fn from(value: String) -> Self {
        Dimension::Css(value)
    }
}

impl From<Dimension> for AttrValue {
    fn from(value: Dimension) -> Self {
        match value {
            Dimension::Number(n) => AttrValue::Number(n),
            Dimension::Css(s) => AttrValue::Text(s),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_numeric_strings_parse() {
        assert_eq!(Dimension::from("48").as_number(), Some(48.0));
        assert_eq!(Dimension::from(" 12.5 ").as_number(), Some(12.5));
        assert_eq!(Dimension::from(24).as_number(), Some(24.0));
    }

    #[test]
    fn test_css_lengths_are_not_numeric() {
        assert_eq!(Dimension::from("1em").as_number(), None);
        assert_eq!(Dimension::from("50%").as_number(), None);
    }

    #[test]
    fn test_display() {
        assert_eq!(Dimension::from(24).to_string(), "24");
        assert_eq!(Dimension::from(1.5).to_string(), "1.5");
        assert_eq!(Dimension::from("2rem").to_string(), "2rem");
    }

    #[test]
    fn test_deserialize_untagged() {
        #[derive(Deserialize)]
        struct Holder {
            size: Dimension,
        }

        let n: Holder = toml::from_str("size = 32").unwrap();
        assert_eq!(n.size, Dimension::Number(32.0));

        let s: Holder = toml::from_str("size = \"1.5em\"").unwrap();
        assert_eq!(s.size, Dimension::Css("1.5em".into()));
    }
}
