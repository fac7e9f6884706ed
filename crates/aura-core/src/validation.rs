//! # Validation Module
//!
//! Input validation for catalog entries and session forms.
//!
//! ## Validation Strategy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                      Validation Layers                                  │
//! │                                                                         │
//! │  Layer 1: Frontend forms                                               │
//! │  ├── Required fields, input types                                      │
//! │  └── Immediate user feedback                                           │
//! │           │                                                             │
//! │           ▼                                                             │
//! │  Layer 2: Storefront commands (Rust)                                   │
//! │  ├── Type validation (deserialization)                                 │
//! │  └── THIS MODULE: catalog invariants, credential presence              │
//! │           │                                                             │
//! │           ▼                                                             │
//! │  Layer 3: Database (SQLite)                                            │
//! │  └── PRIMARY KEY / NOT NULL constraints                                │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Cart quantities are deliberately *not* validated here: the cart ignores
//! non-positive quantities instead of reporting them.

use crate::error::ValidationError;
use crate::types::Product;

/// Result type for validation operations.
pub type ValidationResult<T> = Result<T, ValidationError>;

// =============================================================================
// String Validators
// =============================================================================

/// Checks that a form field is present (non-empty after trimming).
///
/// ```rust
/// use aura_core::validation::validate_required;
///
/// assert!(validate_required("email", "a@b.c").is_ok());
/// assert!(validate_required("email", "   ").is_err());
/// ```
pub fn validate_required(field: &str, value: &str) -> ValidationResult<()> {
    if value.trim().is_empty() {
        return Err(ValidationError::Required {
            field: field.to_string(),
        });
    }
    Ok(())
}

/// Validates a product name: non-empty, at most 200 characters.
pub fn validate_product_name(name: &str) -> ValidationResult<()> {
    validate_required("name", name)?;

    if name.trim().chars().count() > 200 {
        return Err(ValidationError::TooLong {
            field: "name".to_string(),
            max: 200,
        });
    }

    Ok(())
}

/// Normalizes a search query: trimmed and lowercased. Any length is
/// accepted; empty input stays empty.
pub fn normalize_search_query(query: &str) -> String {
    query.trim().to_lowercase()
}

// =============================================================================
// Numeric Validators
// =============================================================================

/// Validates a price in cents. Zero is allowed, negative is not.
///
/// ```rust
/// use aura_core::validation::validate_price_cents;
///
/// assert!(validate_price_cents(4999).is_ok());
/// assert!(validate_price_cents(0).is_ok());
/// assert!(validate_price_cents(-100).is_err());
/// ```
pub fn validate_price_cents(cents: i64) -> ValidationResult<()> {
    if cents < 0 {
        return Err(ValidationError::OutOfRange {
            field: "price".to_string(),
            min: 0,
            max: i64::MAX,
        });
    }

    Ok(())
}

// =============================================================================
// Product Validator
// =============================================================================

/// Validates a single product against the catalog invariants that do not
/// depend on other products (id uniqueness is checked by the catalog).
///
/// ## Rules
/// - id and name present
/// - price >= 0
/// - at least one size and one color, none blank
pub fn validate_product(product: &Product) -> ValidationResult<()> {
    validate_required("id", &product.id)?;
    validate_product_name(&product.name)?;
    validate_price_cents(product.price_cents)?;
    validate_options("sizes", &product.sizes)?;
    validate_options("colors", &product.colors)?;
    Ok(())
}

fn validate_options(field: &str, options: &[String]) -> ValidationResult<()> {
    if options.is_empty() {
        return Err(ValidationError::Required {
            field: field.to_string(),
        });
    }

    if options.iter().any(|o| o.trim().is_empty()) {
        return Err(ValidationError::InvalidFormat {
            field: field.to_string(),
            reason: "options must not be blank".to_string(),
        });
    }

    Ok(())
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::ProductFlags;

    fn tee() -> Product {
        Product {
            id: "1".to_string(),
            name: "Classic Black Tee".to_string(),
            price_cents: 4999,
            description: String::new(),
            category: "t-shirts".to_string(),
            image: String::new(),
            images: Vec::new(),
            colors: vec!["#000000".to_string()],
            sizes: vec!["S".to_string(), "M".to_string()],
            flags: ProductFlags::default(),
        }
    }

    #[test]
    fn test_validate_required() {
        assert!(validate_required("password", "admin123").is_ok());
        assert!(validate_required("password", "").is_err());
        assert!(validate_required("password", " \t").is_err());
    }

    #[test]
    fn test_validate_product_name() {
        assert!(validate_product_name("Classic Black Tee").is_ok());
        assert!(validate_product_name("").is_err());
        assert!(validate_product_name(&"A".repeat(300)).is_err());
    }

    #[test]
    fn test_normalize_search_query() {
        assert_eq!(normalize_search_query("  HoOdie "), "hoodie");
        assert_eq!(normalize_search_query(""), "");
        assert_eq!(normalize_search_query(&"x".repeat(300)).len(), 300);
    }

    #[test]
    fn test_validate_price_cents() {
        assert!(validate_price_cents(0).is_ok());
        assert!(validate_price_cents(8999).is_ok());
        assert!(validate_price_cents(-1).is_err());
    }

    #[test]
    fn test_validate_product() {
        assert!(validate_product(&tee()).is_ok());

        let mut no_sizes = tee();
        no_sizes.sizes.clear();
        assert!(matches!(
            validate_product(&no_sizes),
            Err(ValidationError::Required { ref field }) if field == "sizes"
        ));

        let mut blank_color = tee();
        blank_color.colors.push("  ".to_string());
        assert!(validate_product(&blank_color).is_err());

        let mut negative = tee();
        negative.price_cents = -5;
        assert!(validate_product(&negative).is_err());
    }
}
