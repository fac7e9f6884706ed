//! # Error Types
//!
//! Domain-specific error types for aura-core.
//!
//! ## Error Hierarchy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Error Types                                     │
//! │                                                                         │
//! │  aura-core errors (this file)                                          │
//! │  ├── CoreError        - Domain errors (catalog, session)               │
//! │  └── ValidationError  - Input validation failures                      │
//! │                                                                         │
//! │  aura-db errors (separate crate)                                       │
//! │  └── DbError          - Database operation failures                    │
//! │                                                                         │
//! │  storefront errors (in app)                                            │
//! │  └── ApiError         - What the frontend sees (serialized)            │
//! │                                                                         │
//! │  Flow: ValidationError → CoreError → ApiError → Frontend               │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Cart and wishlist mutations have no error paths at all: invalid input is
//! ignored and the store is left unchanged.

use thiserror::Error;

// =============================================================================
// Core Error
// =============================================================================

/// Core domain errors.
#[derive(Debug, Error)]
pub enum CoreError {
    /// Product id is not in the catalog.
    #[error("Product not found: {0}")]
    ProductNotFound(String),

    /// Two catalog entries share an id.
    #[error("Duplicate product id: {0}")]
    DuplicateProduct(String),

    /// Login attempted with an empty email or password.
    ///
    /// ## User Workflow
    /// ```text
    /// Login form (email: "", password: "secret")
    ///      │
    ///      ▼
    /// resolve_login() → InvalidCredentials
    ///      │
    ///      ▼
    /// Form shows: "Invalid credentials"
    /// ```
    #[error("Invalid credentials")]
    InvalidCredentials,

    /// Operation needs a logged-in user and there is none.
    #[error("Not authenticated")]
    NotAuthenticated,

    /// Validation error (wraps ValidationError).
    #[error("Validation error: {0}")]
    Validation(#[from] ValidationError),
}

// =============================================================================
// Validation Error
// =============================================================================

/// Input validation errors.
#[derive(Debug, Error)]
pub enum ValidationError {
    /// A required field is missing or empty.
    #[error("{field} is required")]
    Required { field: String },

    /// Field value is too long.
    #[error("{field} must be at most {max} characters")]
    TooLong { field: String, max: usize },

    /// Numeric value is out of range.
    #[error("{field} must be between {min} and {max}")]
    OutOfRange { field: String, min: i64, max: i64 },

    /// Value must be positive.
    #[error("{field} must be positive")]
    MustBePositive { field: String },

    /// Invalid format.
    #[error("{field} has invalid format: {reason}")]
    InvalidFormat { field: String, reason: String },

    /// Duplicate value within a collection.
    #[error("{field} '{value}' already exists")]
    Duplicate { field: String, value: String },
}

// =============================================================================
// Result Type Alias
// =============================================================================

/// Convenience type alias for Results with CoreError.
pub type CoreResult<T> = Result<T, CoreError>;

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_messages() {
        assert_eq!(CoreError::InvalidCredentials.to_string(), "Invalid credentials");
        assert_eq!(
            CoreError::ProductNotFound("42".to_string()).to_string(),
            "Product not found: 42"
        );
    }

    #[test]
    fn test_validation_error_messages() {
        let err = ValidationError::Required {
            field: "sizes".to_string(),
        };
        assert_eq!(err.to_string(), "sizes is required");

        let err = ValidationError::Duplicate {
            field: "product id".to_string(),
            value: "7".to_string(),
        };
        assert_eq!(err.to_string(), "product id '7' already exists");
    }

    #[test]
    fn test_validation_converts_to_core_error() {
        let validation_err = ValidationError::Required {
            field: "name".to_string(),
        };
        let core_err: CoreError = validation_err.into();
        assert!(matches!(core_err, CoreError::Validation(_)));
    }
}
