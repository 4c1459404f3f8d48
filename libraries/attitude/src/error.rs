use thiserror::Error;

/// Primary error type for the attitude crate
#[derive(Error, Debug, Clone, PartialEq)]
pub enum AttitudeError {
    /// The rotation sequence is unknown or has no conversion implemented
    #[error("Sequence not supported: {sequence}")]
    UnsupportedSequence {
        /// Sequence token as given by the caller
        sequence: String,
    },

    /// Input outside the domain of the conversion (negative radicand,
    /// asin argument outside [-1, 1], non-finite result)
    #[error("Domain error in {component}: {message}")]
    DomainError {
        /// Detailed error message
        message: String,
        /// Step of the conversion that failed
        component: String,
    },

    /// Configuration errors
    #[error("Configuration error: {message}")]
    ConfigurationError {
        /// Detailed error message
        message: String,
        /// Configuration parameter that caused the error
        parameter: Option<String>,
    },
}

/// Helper functions for creating common errors
pub mod helpers {
    use super::*;
    use crate::Quaternion;

    /// Create an unsupported sequence error
    pub fn unsupported_sequence(sequence: impl Into<String>) -> AttitudeError {
        AttitudeError::UnsupportedSequence {
            sequence: sequence.into(),
        }
    }

    /// Create a domain error
    pub fn domain_error(message: impl Into<String>, component: impl Into<String>) -> AttitudeError {
        AttitudeError::DomainError {
            message: message.into(),
            component: component.into(),
        }
    }

    /// Create a configuration error
    pub fn config_error(
        message: impl Into<String>,
        parameter: Option<impl Into<String>>,
    ) -> AttitudeError {
        AttitudeError::ConfigurationError {
            message: message.into(),
            parameter: parameter.map(|p| p.into()),
        }
    }

    /// Check that every value is finite
    pub fn check_values_finite(values: &[f64], name: &str) -> Result<(), AttitudeError> {
        if values.iter().any(|v| !v.is_finite()) {
            Err(domain_error(
                format!("{} contains NaN or infinite values", name),
                name,
            ))
        } else {
            Ok(())
        }
    }

    /// Check that a quaternion contains only finite components
    pub fn check_quaternion_finite(q: &Quaternion, name: &str) -> Result<(), AttitudeError> {
        check_values_finite(q.coords.as_slice(), name)
    }
}

/// Type alias for Result with AttitudeError
pub type AttitudeResult<T> = Result<T, AttitudeError>;
