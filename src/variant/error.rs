//! Variant table validation errors.

/// Error returned when variant table validation fails.
///
/// Resolution itself is total and never produces these; they are only
/// surfaced by [`crate::VariantSet::validate`] for callers that want table
/// mistakes caught early instead of silently falling back to defaults.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum VariantError {
    /// Two axes in the same set share a name
    DuplicateAxis { name: String },
    /// An axis declares the same key twice
    DuplicateKey { axis: String, key: String },
    /// An axis names a default key that has no table entry
    MissingDefault { axis: String, default_key: String },
}

impl std::fmt::Display for VariantError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            VariantError::DuplicateAxis { name } => {
                write!(f, "axis '{}' is declared more than once", name)
            }
            VariantError::DuplicateKey { axis, key } => {
                write!(f, "axis '{}' declares key '{}' more than once", axis, key)
            }
            VariantError::MissingDefault { axis, default_key } => {
                write!(
                    f,
                    "axis '{}' names default key '{}' but has no entry for it",
                    axis, default_key
                )
            }
        }
    }
}

impl std::error::Error for VariantError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_duplicate_axis_display() {
        let err = VariantError::DuplicateAxis {
            name: "size".to_string(),
        };
        assert!(err.to_string().contains("size"));
    }

    #[test]
    fn test_duplicate_key_display() {
        let err = VariantError::DuplicateKey {
            axis: "variant".to_string(),
            key: "ghost".to_string(),
        };
        let msg = err.to_string();
        assert!(msg.contains("variant"));
        assert!(msg.contains("ghost"));
    }

    #[test]
    fn test_missing_default_display() {
        let err = VariantError::MissingDefault {
            axis: "size".to_string(),
            default_key: "md".to_string(),
        };
        let msg = err.to_string();
        assert!(msg.contains("size"));
        assert!(msg.contains("md"));
    }
}
