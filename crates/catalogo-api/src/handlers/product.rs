//! Product handlers under /produtos.

use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::response::Response;
use axum::Json;
use tracing::info;

use catalogo_core::traits::Repository;
use catalogo_core::AppError;
use catalogo_database::UnitOfWork;
use catalogo_entity::product::Product;
use catalogo_entity::validate;

use crate::dto::request::{check_id_match, ProductPayload};
use crate::dto::response::{paged_response, ProductDto};
use crate::error::ApiError;
use crate::extractors::{AuthUser, PaginationParams};
use crate::state::AppState;

/// GET /produtos
pub async fn list(
    State(state): State<AppState>,
    _auth: AuthUser,
    Query(params): Query<PaginationParams>,
) -> Result<Response, ApiError> {
    let page = params.into_page_request()?;

    let mut uow = UnitOfWork::begin(state.db.pool()).await?;
    let products = uow.products().list(&page).await?;

    Ok(paged_response::<Product, ProductDto>(products)?)
}

/// GET /produtos/menorpreco
pub async fn list_by_price(
    State(state): State<AppState>,
    _auth: AuthUser,
) -> Result<Json<Vec<ProductDto>>, ApiError> {
    let mut uow = UnitOfWork::begin(state.db.pool()).await?;
    let products = uow.products().list_by_price().await?;

    Ok(Json(products.into_iter().map(ProductDto::from).collect()))
}

/// GET /produtos/{id}
pub async fn get(
    State(state): State<AppState>,
    _auth: AuthUser,
    Path(id): Path<i32>,
) -> Result<Json<ProductDto>, ApiError> {
    let mut uow = UnitOfWork::begin(state.db.pool()).await?;
    let product = uow
        .products()
        .find_by_id(id)
        .await?
        .ok_or_else(|| AppError::not_found(format!("Product with id {id} not found")))?;

    Ok(Json(product.into()))
}

/// POST /produtos
pub async fn create(
    State(state): State<AppState>,
    auth: AuthUser,
    Json(payload): Json<ProductPayload>,
) -> Result<(StatusCode, Json<ProductDto>), ApiError> {
    let draft = payload.into_draft();
    validate::into_result(validate::validate_product(&draft))?;

    let mut uow = UnitOfWork::begin(state.db.pool()).await?;
    let product = uow.products().create(&draft).await?;
    uow.commit().await?;

    info!(id = product.id, name = %product.name, user_id = %auth.user_id(), "Product created");
    Ok((StatusCode::CREATED, Json(product.into())))
}

/// PUT /produtos/{id}
pub async fn update(
    State(state): State<AppState>,
    auth: AuthUser,
    Path(id): Path<i32>,
    Json(payload): Json<ProductPayload>,
) -> Result<Json<ProductDto>, ApiError> {
    check_id_match(id, payload.id)?;
    let draft = payload.into_draft();
    validate::into_result(validate::validate_product(&draft))?;

    let mut uow = UnitOfWork::begin(state.db.pool()).await?;
    let product = uow.products().update(id, &draft).await?;
    uow.commit().await?;

    info!(id, user_id = %auth.user_id(), "Product updated");
    Ok(Json(product.into()))
}

/// DELETE /produtos/{id}
pub async fn delete(
    State(state): State<AppState>,
    auth: AuthUser,
    Path(id): Path<i32>,
) -> Result<Json<ProductDto>, ApiError> {
    let mut uow = UnitOfWork::begin(state.db.pool()).await?;
    let product = uow
        .products()
        .delete(id)
        .await?
        .ok_or_else(|| AppError::not_found(format!("Product with id {id} not found")))?;
    uow.commit().await?;

    info!(id, user_id = %auth.user_id(), "Product deleted");
    Ok(Json(product.into()))
}
