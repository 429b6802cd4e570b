use thiserror::Error;

/// Why a single raw field was rejected.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ValidationReason {
    #[error("is required")]
    Missing,

    #[error("'{0}' is not a number")]
    NotANumber(String),

    #[error("must be a finite number")]
    NotFinite,

    #[error("must be a positive number, got {0}")]
    NotPositive(f64),

    #[error("must be a non-negative number, got {0}")]
    Negative(f64),

    #[error("'{value}' is not one of: {}", .allowed.join(", "))]
    UnknownOption {
        value: String,
        allowed: &'static [&'static str],
    },

    #[error("must be at least {min} characters")]
    TooShort { min: usize },
}

/// A rejected field with the reason, suitable for re-prompting the user.
#[derive(Debug, Clone, PartialEq, Error)]
#[error("{field} {reason}")]
pub struct ValidationError {
    pub field: &'static str,
    pub reason: ValidationReason,
}

/// Every field error found in one submission.
///
/// Never empty when returned by the normalizer.
#[derive(Debug, Clone, PartialEq, Error)]
#[error("invalid proposal fields: {}", .0.iter().map(ToString::to_string).collect::<Vec<_>>().join("; "))]
pub struct ValidationErrors(pub Vec<ValidationError>);

impl ValidationErrors {
    pub fn errors(&self) -> &[ValidationError] {
        &self.0
    }

    /// Names of the offending fields, in the order they were checked.
    pub fn fields(&self) -> Vec<&'static str> {
        self.0.iter().map(|e| e.field).collect()
    }

    /// Returns the reason `field` was rejected, if it was.
    pub fn reason_for(
        &self,
        field: &str,
    ) -> Option<&ValidationReason> {
        self.0.iter().find(|e| e.field == field).map(|e| &e.reason)
    }
}

impl IntoIterator for ValidationErrors {
    type Item = ValidationError;
    type IntoIter = std::vec::IntoIter<ValidationError>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn validation_error_names_field_and_reason() {
        let error = ValidationError {
            field: "systemSize",
            reason: ValidationReason::NotPositive(0.0),
        };

        assert_eq!(error.to_string(), "systemSize must be a positive number, got 0");
    }

    #[test]
    fn unknown_option_lists_allowed_labels() {
        let reason = ValidationReason::UnknownOption {
            value: "Industrial".to_string(),
            allowed: &["Residential", "Commercial"],
        };

        assert_eq!(
            reason.to_string(),
            "'Industrial' is not one of: Residential, Commercial"
        );
    }

    #[test]
    fn validation_errors_join_every_error() {
        let errors = ValidationErrors(vec![
            ValidationError {
                field: "name",
                reason: ValidationReason::TooShort { min: 2 },
            },
            ValidationError {
                field: "monthlyBill",
                reason: ValidationReason::Missing,
            },
        ]);

        assert_eq!(
            errors.to_string(),
            "invalid proposal fields: name must be at least 2 characters; monthlyBill is required"
        );
        assert_eq!(errors.fields(), vec!["name", "monthlyBill"]);
        assert_eq!(errors.reason_for("monthlyBill"), Some(&ValidationReason::Missing));
    }
}
