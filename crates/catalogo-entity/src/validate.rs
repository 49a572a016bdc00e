//! Explicit domain validation.
//!
//! Write paths call these functions before any SQL is issued; a non-empty
//! violation list aborts the request with a validation error. Field names in
//! violations match the serialized field names of the drafts.

use catalogo_core::error::AppError;

use crate::category::CategoryDraft;
use crate::product::ProductDraft;

/// A single field-level validation failure.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct FieldViolation {
    /// Serialized name of the offending field.
    pub field: String,
    /// Human-readable description of the rule that failed.
    pub message: String,
}

impl FieldViolation {
    fn new(field: &str, message: impl Into<String>) -> Self {
        Self {
            field: field.to_string(),
            message: message.into(),
        }
    }
}

/// Collapse a violation list into a single validation error, or pass.
pub fn into_result(violations: Vec<FieldViolation>) -> Result<(), AppError> {
    if violations.is_empty() {
        return Ok(());
    }
    let detail = violations
        .iter()
        .map(|v| format!("{}: {}", v.field, v.message))
        .collect::<Vec<_>>()
        .join("; ");
    Err(AppError::validation(detail))
}

/// Validate a category draft, returning every rule it breaks.
pub fn validate_category(draft: &CategoryDraft) -> Vec<FieldViolation> {
    let mut violations = Vec::new();

    check_length(&mut violations, "name", &draft.name, 1, 100);
    check_length(&mut violations, "image_url", &draft.image_url, 1, 300);

    violations
}

/// Validate a product draft, returning every rule it breaks.
pub fn validate_product(draft: &ProductDraft) -> Vec<FieldViolation> {
    let mut violations = Vec::new();

    check_length(&mut violations, "name", &draft.name, 2, 100);
    if let Some(first) = draft.name.chars().next() {
        if first.is_lowercase() {
            violations.push(FieldViolation::new(
                "name",
                "the first letter of the product name must be uppercase",
            ));
        }
    }

    check_length(&mut violations, "description", &draft.description, 5, 300);
    check_length(&mut violations, "image_url", &draft.image_url, 1, 300);

    if draft.stock <= 0.0 {
        violations.push(FieldViolation::new(
            "stock",
            "stock must be greater than zero",
        ));
    }

    violations
}

fn check_length(
    violations: &mut Vec<FieldViolation>,
    field: &str,
    value: &str,
    min: usize,
    max: usize,
) {
    let len = value.chars().count();
    if len < min || len > max {
        violations.push(FieldViolation::new(
            field,
            format!("must be between {min} and {max} characters"),
        ));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal::Decimal;

    fn product_draft() -> ProductDraft {
        ProductDraft {
            name: "Café Pelé".to_string(),
            description: "Café torrado e moído".to_string(),
            price: Decimal::new(59900, 4),
            image_url: "cafe.jpg".to_string(),
            stock: 50.0,
            category_id: 1,
        }
    }

    fn category_draft() -> CategoryDraft {
        CategoryDraft {
            name: "Bebidas".to_string(),
            image_url: "bebidas.jpg".to_string(),
        }
    }

    #[test]
    fn valid_drafts_produce_no_violations() {
        assert!(validate_category(&category_draft()).is_empty());
        assert!(validate_product(&product_draft()).is_empty());
    }

    #[test]
    fn empty_category_fields_are_flagged() {
        let draft = CategoryDraft {
            name: String::new(),
            image_url: String::new(),
        };
        let violations = validate_category(&draft);
        let fields: Vec<_> = violations.iter().map(|v| v.field.as_str()).collect();
        assert_eq!(fields, vec!["name", "image_url"]);
    }

    #[test]
    fn lowercase_product_name_is_rejected() {
        let mut draft = product_draft();
        draft.name = "café pelé".to_string();
        let violations = validate_product(&draft);
        assert_eq!(violations.len(), 1);
        assert_eq!(violations[0].field, "name");
        assert!(violations[0].message.contains("uppercase"));
    }

    #[test]
    fn non_letter_first_character_passes() {
        let mut draft = product_draft();
        draft.name = "12 ovos".to_string();
        assert!(validate_product(&draft).is_empty());
    }

    #[test]
    fn single_char_name_is_too_short() {
        let mut draft = product_draft();
        draft.name = "X".to_string();
        let violations = validate_product(&draft);
        assert_eq!(violations[0].field, "name");
        assert!(violations[0].message.contains("between 2 and 100"));
    }

    #[test]
    fn zero_stock_is_rejected() {
        let mut draft = product_draft();
        draft.stock = 0.0;
        let violations = validate_product(&draft);
        assert_eq!(violations.len(), 1);
        assert_eq!(violations[0].field, "stock");
        assert!(violations[0].message.contains("greater than zero"));
    }

    #[test]
    fn short_description_is_rejected() {
        let mut draft = product_draft();
        draft.description = "abc".to_string();
        let violations = validate_product(&draft);
        assert_eq!(violations[0].field, "description");
    }

    #[test]
    fn multiple_violations_are_all_reported() {
        let draft = ProductDraft {
            name: "x".to_string(),
            description: "ab".to_string(),
            price: Decimal::ZERO,
            image_url: String::new(),
            stock: -1.0,
            category_id: 1,
        };
        let violations = validate_product(&draft);
        // short name, lowercase name, short description, empty image, bad stock
        assert_eq!(violations.len(), 5);
    }

    #[test]
    fn into_result_joins_messages() {
        let draft = CategoryDraft {
            name: String::new(),
            image_url: "ok.jpg".to_string(),
        };
        let err = into_result(validate_category(&draft)).unwrap_err();
        assert_eq!(err.kind, catalogo_core::error::ErrorKind::Validation);
        assert!(err.message.starts_with("name:"));
        assert!(into_result(Vec::new()).is_ok());
    }
}
