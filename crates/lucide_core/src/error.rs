//! Icon error types

use thiserror::Error;

/// Errors raised while loading or looking up icons
///
/// Rendering never fails; only getting hold of an icon can.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum IconError {
    /// Malformed SVG/XML source
    #[error("SVG parsing error: {0}")]
    Parse(String),

    /// No icon is registered under the requested name
    #[error("unknown icon: {0}")]
    UnknownIcon(String),
}

impl From<roxmltree::Error> for IconError {
    fn from(err: roxmltree::Error) -> Self {
        IconError::Parse(err.to_string())
    }
}
