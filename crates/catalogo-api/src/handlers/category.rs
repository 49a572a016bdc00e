//! Category handlers under /categorias.

use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::response::Response;
use axum::Json;
use tracing::info;

use catalogo_core::traits::Repository;
use catalogo_core::AppError;
use catalogo_database::UnitOfWork;
use catalogo_entity::category::{Category, CategoryWithProducts};
use catalogo_entity::validate;

use crate::dto::request::{check_id_match, CategoryPayload};
use crate::dto::response::{paged_response, CategoryDto, CategoryWithProductsDto};
use crate::error::ApiError;
use crate::extractors::{AuthUser, PaginationParams};
use crate::state::AppState;

/// GET /categorias
pub async fn list(
    State(state): State<AppState>,
    _auth: AuthUser,
    Query(params): Query<PaginationParams>,
) -> Result<Response, ApiError> {
    let page = params.into_page_request()?;

    let mut uow = UnitOfWork::begin(state.db.pool()).await?;
    let categories = uow.categories().list(&page).await?;

    Ok(paged_response::<Category, CategoryDto>(categories)?)
}

/// GET /categorias/produtos
pub async fn list_with_products(
    State(state): State<AppState>,
    _auth: AuthUser,
    Query(params): Query<PaginationParams>,
) -> Result<Response, ApiError> {
    let page = params.into_page_request()?;

    let mut uow = UnitOfWork::begin(state.db.pool()).await?;
    let categories = uow.categories().list_with_products(&page).await?;

    Ok(paged_response::<CategoryWithProducts, CategoryWithProductsDto>(categories)?)
}

/// GET /categorias/{id}
pub async fn get(
    State(state): State<AppState>,
    _auth: AuthUser,
    Path(id): Path<i32>,
) -> Result<Json<CategoryDto>, ApiError> {
    let mut uow = UnitOfWork::begin(state.db.pool()).await?;
    let category = uow
        .categories()
        .find_by_id(id)
        .await?
        .ok_or_else(|| AppError::not_found(format!("Category with id {id} not found")))?;

    Ok(Json(category.into()))
}

/// POST /categorias
pub async fn create(
    State(state): State<AppState>,
    auth: AuthUser,
    Json(payload): Json<CategoryPayload>,
) -> Result<(StatusCode, Json<CategoryDto>), ApiError> {
    let draft = payload.into_draft();
    validate::into_result(validate::validate_category(&draft))?;

    let mut uow = UnitOfWork::begin(state.db.pool()).await?;
    let category = uow.categories().create(&draft).await?;
    uow.commit().await?;

    info!(id = category.id, name = %category.name, user_id = %auth.user_id(), "Category created");
    Ok((StatusCode::CREATED, Json(category.into())))
}

/// PUT /categorias/{id}
pub async fn update(
    State(state): State<AppState>,
    auth: AuthUser,
    Path(id): Path<i32>,
    Json(payload): Json<CategoryPayload>,
) -> Result<Json<CategoryDto>, ApiError> {
    check_id_match(id, payload.id)?;
    let draft = payload.into_draft();
    validate::into_result(validate::validate_category(&draft))?;

    let mut uow = UnitOfWork::begin(state.db.pool()).await?;
    let category = uow.categories().update(id, &draft).await?;
    uow.commit().await?;

    info!(id, user_id = %auth.user_id(), "Category updated");
    Ok(Json(category.into()))
}

/// DELETE /categorias/{id}
pub async fn delete(
    State(state): State<AppState>,
    auth: AuthUser,
    Path(id): Path<i32>,
) -> Result<Json<CategoryDto>, ApiError> {
    let mut uow = UnitOfWork::begin(state.db.pool()).await?;
    let category = uow
        .categories()
        .delete(id)
        .await?
        .ok_or_else(|| AppError::not_found(format!("Category with id {id} not found")))?;
    uow.commit().await?;

    info!(id, user_id = %auth.user_id(), "Category deleted");
    Ok(Json(category.into()))
}
