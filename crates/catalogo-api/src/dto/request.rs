//! Request DTOs.
//!
//! Shape constraints (presence, email format) are declared with `validator`;
//! the domain rules live in `catalogo_entity::validate` and run after the
//! payload is converted into a draft.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use validator::Validate;

use catalogo_core::error::AppError;
use catalogo_entity::category::CategoryDraft;
use catalogo_entity::product::ProductDraft;

/// Account registration body.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct RegisterRequest {
    /// Login email.
    #[validate(email(message = "must be a valid email address"))]
    pub email: String,
    /// Plaintext password; length is checked against configuration.
    #[validate(length(min = 1, message = "password is required"))]
    pub password: String,
}

/// Login body.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct LoginRequest {
    /// Login email.
    #[validate(email(message = "must be a valid email address"))]
    pub email: String,
    /// Plaintext password.
    #[validate(length(min = 1, message = "password is required"))]
    pub password: String,
}

/// Category create/update body.
///
/// `id` is ignored on create; on update it must match the route id when
/// present.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CategoryPayload {
    /// Entity id, echoed by clients on full updates.
    pub id: Option<i32>,
    /// Category name.
    pub name: String,
    /// Image reference.
    pub image_url: String,
}

impl CategoryPayload {
    /// Convert into a draft for validation and persistence.
    pub fn into_draft(self) -> CategoryDraft {
        CategoryDraft {
            name: self.name,
            image_url: self.image_url,
        }
    }
}

/// Product create/update body.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProductPayload {
    /// Entity id, echoed by clients on full updates.
    pub id: Option<i32>,
    /// Product name.
    pub name: String,
    /// Product description.
    pub description: String,
    /// Unit price.
    pub price: Decimal,
    /// Image reference.
    pub image_url: String,
    /// Stock quantity.
    pub stock: f32,
    /// Owning category.
    pub category_id: i32,
}

impl ProductPayload {
    /// Convert into a draft for validation and persistence.
    pub fn into_draft(self) -> ProductDraft {
        ProductDraft {
            name: self.name,
            description: self.description,
            price: self.price,
            image_url: self.image_url,
            stock: self.stock,
            category_id: self.category_id,
        }
    }
}

/// Reject a full update whose body id contradicts the route id.
pub fn check_id_match(route_id: i32, body_id: Option<i32>) -> Result<(), AppError> {
    match body_id {
        Some(id) if id != route_id => Err(AppError::validation(format!(
            "Route id {route_id} does not match payload id {id}"
        ))),
        _ => Ok(()),
    }
}

/// Run `validator` constraints, folding failures into the app taxonomy.
pub fn check_shape<T: Validate>(payload: &T) -> Result<(), AppError> {
    payload
        .validate()
        .map_err(|e| AppError::validation(e.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn mismatched_ids_are_rejected_before_any_write() {
        let err = check_id_match(3, Some(4)).unwrap_err();
        assert_eq!(err.kind, catalogo_core::ErrorKind::Validation);
        assert!(err.message.contains('3') && err.message.contains('4'));
    }

    #[test]
    fn matching_or_absent_body_id_passes() {
        assert!(check_id_match(3, Some(3)).is_ok());
        assert!(check_id_match(3, None).is_ok());
    }

    #[test]
    fn register_request_validates_email_shape() {
        let bad = RegisterRequest {
            email: "not-an-email".to_string(),
            password: "secret".to_string(),
        };
        assert!(check_shape(&bad).is_err());

        let good = RegisterRequest {
            email: "ana@example.com".to_string(),
            password: "secret".to_string(),
        };
        assert!(check_shape(&good).is_ok());
    }

    #[test]
    fn payload_to_draft_keeps_fields() {
        let draft = CategoryPayload {
            id: Some(1),
            name: "Bebidas".to_string(),
            image_url: "bebidas.jpg".to_string(),
        }
        .into_draft();
        assert_eq!(draft.name, "Bebidas");
        assert_eq!(draft.image_url, "bebidas.jpg");
    }
}
