//! # Validation Module
//!
//! Form rules applied by the coordinator before any store call.
//!
//! ## Save vs. Modify
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                      Validation per Action                              │
//! │                                                                         │
//! │  Save (validate_new_product)                                           │
//! │  ├── 1. name matches ^[A-Za-z]+(?:[ _-][A-Za-z]+)*$                    │
//! │  └── 2. name and price non-empty                                       │
//! │         (step 2 can only fail on price: an empty name already failed   │
//! │          step 1. The order is kept so the user sees the same dialog.)  │
//! │                                                                         │
//! │  Modify (validate_product_update)                                      │
//! │  ├── 1. name and price non-empty                                       │
//! │  └── 2. name pattern, ONLY when ValidationPolicy says so               │
//! │                                                                         │
//! │  Quantity (parse_quantity, both actions)                               │
//! │  └── blank → 0, otherwise a whole number, any sign, no range           │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//! ```rust
//! use vivero_core::validation::{parse_quantity, validate_product_name};
//!
//! validate_product_name("Rosa Roja").unwrap();
//! assert_eq!(parse_quantity("").unwrap(), 0);
//! assert!(parse_quantity("diez").is_err());
//! ```

use regex::Regex;
use std::sync::LazyLock;

use crate::error::ValidationError;
use crate::types::ProductDraft;
use crate::DEFAULT_QUANTITY;

/// Result type for validation operations.
pub type ValidationResult<T> = Result<T, ValidationError>;

/// Field names reported in validation errors.
pub const FIELD_NAME: &str = "name";
pub const FIELD_QUANTITY: &str = "quantity";
pub const FIELD_PRICE: &str = "price";

/// One or more ASCII letter runs joined by a single space, underscore or hyphen.
static NAME_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[A-Za-z]+(?:[ _-][A-Za-z]+)*$").expect("name pattern is a valid regex")
});

// =============================================================================
// Policy
// =============================================================================

/// Switches for validation behavior that differs between actions.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ValidationPolicy {
    /// Re-check the name pattern on Modify. Off by default: Modify only
    /// requires name and price to be present.
    pub check_name_on_modify: bool,
}

impl ValidationPolicy {
    /// Policy that applies the name pattern to both Save and Modify.
    pub const fn strict() -> Self {
        ValidationPolicy {
            check_name_on_modify: true,
        }
    }
}

// =============================================================================
// Field Validators
// =============================================================================

/// Validates a product name against the name pattern.
///
/// ## Example
/// ```rust
/// use vivero_core::validation::validate_product_name;
///
/// assert!(validate_product_name("Rosa Roja").is_ok());
/// assert!(validate_product_name("helecho-serrucho").is_ok());
/// assert!(validate_product_name("Rosa  Roja").is_err());
/// assert!(validate_product_name("").is_err());
/// ```
pub fn validate_product_name(name: &str) -> ValidationResult<()> {
    if NAME_PATTERN.is_match(name) {
        Ok(())
    } else {
        Err(ValidationError::invalid_format(
            FIELD_NAME,
            "must be letters only, in words separated by a single space, '_' or '-'",
        ))
    }
}

/// Fails with `Required` when `value` is the empty string.
///
/// Whitespace counts as content.
pub fn validate_required(field: &str, value: &str) -> ValidationResult<()> {
    if value.is_empty() {
        return Err(ValidationError::required(field));
    }
    Ok(())
}

/// Parses the quantity field.
///
/// ## Rules
/// - Surrounding whitespace is ignored
/// - Blank reads as [`DEFAULT_QUANTITY`]
/// - Otherwise a whole number; zero and negatives are accepted
pub fn parse_quantity(raw: &str) -> ValidationResult<i64> {
    let raw = raw.trim();
    if raw.is_empty() {
        return Ok(DEFAULT_QUANTITY);
    }

    raw.parse::<i64>()
        .map_err(|_| ValidationError::invalid_format(FIELD_QUANTITY, "must be a whole number"))
}

// =============================================================================
// Action Validators
// =============================================================================

/// Validates a draft about to be inserted (Save).
pub fn validate_new_product(draft: &ProductDraft) -> ValidationResult<()> {
    validate_product_name(&draft.name)?;

    validate_required(FIELD_NAME, &draft.name)?;
    validate_required(FIELD_PRICE, draft.price.as_str())?;

    Ok(())
}

/// Validates a draft about to overwrite an existing row (Modify).
pub fn validate_product_update(
    draft: &ProductDraft,
    policy: ValidationPolicy,
) -> ValidationResult<()> {
    validate_required(FIELD_NAME, &draft.name)?;
    validate_required(FIELD_PRICE, draft.price.as_str())?;

    if policy.check_name_on_modify {
        validate_product_name(&draft.name)?;
    }

    Ok(())
}

// =============================================================================
// Unit Tests
// =============================================================================
