//! Style registry errors.

/// Error returned by style registry lookups.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StyleError {
    /// A referenced style name is not registered.
    UnknownStyle { name: String },
    /// The current style has no group with the requested name.
    MissingGroup { group: String, style: String },
    /// The current style has no top-level value with the requested name.
    MissingValue { value: String, style: String },
    /// A top-level value exists but is not numeric.
    NotANumber { value: String, style: String },
}

impl std::fmt::Display for StyleError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            StyleError::UnknownStyle { name } => {
                write!(f, "unknown style '{}'", name)
            }
            StyleError::MissingGroup { group, style } => {
                write!(f, "style '{}' has no group '{}'", style, group)
            }
            StyleError::MissingValue { value, style } => {
                write!(f, "style '{}' has no value '{}'", style, value)
            }
            StyleError::NotANumber { value, style } => {
                write!(f, "value '{}' in style '{}' is not a number", value, style)
            }
        }
    }
}

impl std::error::Error for StyleError {}
