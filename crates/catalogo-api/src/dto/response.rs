//! Response DTOs and the `X-Pagination` metadata header.

use axum::http::header::{HeaderName, HeaderValue};
use axum::response::{IntoResponse, Response};
use axum::Json;
use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use catalogo_core::error::AppError;
use catalogo_core::types::pagination::PageResponse;
use catalogo_entity::category::{Category, CategoryWithProducts};
use catalogo_entity::product::Product;
use catalogo_entity::user::User;

/// Response header carrying pagination metadata as serialized JSON.
pub static X_PAGINATION: HeaderName = HeaderName::from_static("x-pagination");

/// Category transfer object.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CategoryDto {
    /// Entity id.
    pub id: i32,
    /// Category name.
    pub name: String,
    /// Image reference.
    pub image_url: String,
}

impl From<Category> for CategoryDto {
    fn from(c: Category) -> Self {
        Self {
            id: c.id,
            name: c.name,
            image_url: c.image_url,
        }
    }
}

/// Product transfer object.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProductDto {
    /// Entity id.
    pub id: i32,
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
    /// Registration timestamp.
    pub registered_at: DateTime<Utc>,
    /// Owning category.
    pub category_id: i32,
}

impl From<Product> for ProductDto {
    fn from(p: Product) -> Self {
        Self {
            id: p.id,
            name: p.name,
            description: p.description,
            price: p.price,
            image_url: p.image_url,
            stock: p.stock,
            registered_at: p.registered_at,
            category_id: p.category_id,
        }
    }
}

/// Category with nested products.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CategoryWithProductsDto {
    /// Entity id.
    pub id: i32,
    /// Category name.
    pub name: String,
    /// Image reference.
    pub image_url: String,
    /// Products belonging to this category.
    pub products: Vec<ProductDto>,
}

impl From<CategoryWithProducts> for CategoryWithProductsDto {
    fn from(c: CategoryWithProducts) -> Self {
        Self {
            id: c.category.id,
            name: c.category.name,
            image_url: c.category.image_url,
            products: c.products.into_iter().map(ProductDto::from).collect(),
        }
    }
}

/// User summary, returned on registration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UserDto {
    /// User id.
    pub id: Uuid,
    /// Login email.
    pub email: String,
    /// Account creation time.
    pub created_at: DateTime<Utc>,
}

impl From<User> for UserDto {
    fn from(u: User) -> Self {
        Self {
            id: u.id,
            email: u.email,
            created_at: u.created_at,
        }
    }
}

/// Bearer token issued by the login endpoint.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TokenResponse {
    /// The signed bearer token.
    pub token: String,
    /// When the token expires.
    pub expires_at: DateTime<Utc>,
    /// Email the token was issued to.
    pub email: String,
}

/// Health check response.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthResponse {
    /// Overall status.
    pub status: String,
    /// Crate version.
    pub version: String,
    /// Database connectivity.
    pub database: String,
}

/// Pagination metadata serialized into the `X-Pagination` header.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PaginationMetadata {
    /// Total number of items across all pages.
    pub total_count: u64,
    /// Items per page.
    pub page_size: u64,
    /// Current page (1-based).
    pub current_page: u64,
    /// Total number of pages.
    pub total_pages: u64,
    /// Whether there is a next page.
    pub has_next: bool,
    /// Whether there is a previous page.
    pub has_previous: bool,
}

impl<T> From<&PageResponse<T>> for PaginationMetadata {
    fn from(page: &PageResponse<T>) -> Self {
        Self {
            total_count: page.total_items,
            page_size: page.page_size,
            current_page: page.page,
            total_pages: page.total_pages,
            has_next: page.has_next,
            has_previous: page.has_previous,
        }
    }
}

/// Build a response whose body is the page's item array and whose
/// `X-Pagination` header describes the whole sequence.
pub fn paged_response<T, D>(page: PageResponse<T>) -> Result<Response, AppError>
where
    D: From<T> + Serialize,
{
    let metadata = PaginationMetadata::from(&page);
    let header = serde_json::to_string(&metadata)?;
    let header = HeaderValue::from_str(&header)
        .map_err(|e| AppError::internal(format!("Invalid pagination header: {e}")))?;

    let items: Vec<D> = page.items.into_iter().map(D::from).collect();

    let mut response = Json(items).into_response();
    response.headers_mut().insert(X_PAGINATION.clone(), header);
    Ok(response)
}

#[cfg(test)]
mod tests {
    use super::*;
    use catalogo_core::types::pagination::PageRequest;

    #[test]
    fn pagination_metadata_mirrors_the_page() {
        let request = PageRequest::new(2, 3).unwrap();
        let page = PageResponse::new(vec![1, 2, 3], &request, 10);
        let meta = PaginationMetadata::from(&page);

        assert_eq!(meta.total_count, 10);
        assert_eq!(meta.current_page, 2);
        assert_eq!(meta.total_pages, 4);
        assert!(meta.has_next);
        assert!(meta.has_previous);
    }

    #[test]
    fn metadata_serializes_with_stable_field_names() {
        let request = PageRequest::new(1, 3).unwrap();
        let page: PageResponse<i32> = PageResponse::new(vec![], &request, 0);
        let json = serde_json::to_value(PaginationMetadata::from(&page)).unwrap();

        assert_eq!(json["total_count"], 0);
        assert_eq!(json["current_page"], 1);
        assert_eq!(json["total_pages"], 1);
        assert_eq!(json["has_next"], false);
        assert_eq!(json["has_previous"], false);
    }

    #[test]
    fn paged_response_sets_the_header() {
        let request = PageRequest::new(1, 2).unwrap();
        let page = PageResponse::new(vec![7, 8], &request, 5);
        let response = paged_response::<i32, i32>(page).unwrap();

        let header = response.headers().get(&X_PAGINATION).unwrap();
        let meta: PaginationMetadata =
            serde_json::from_str(header.to_str().unwrap()).unwrap();
        assert_eq!(meta.total_count, 5);
        assert_eq!(meta.total_pages, 3);
    }
}
