//! Category repository implementation.

use std::collections::HashMap;

use async_trait::async_trait;
use sqlx::PgConnection;

use catalogo_core::result::AppResult;
use catalogo_core::traits::Repository;
use catalogo_core::types::pagination::{PageRequest, PageResponse};
use catalogo_entity::category::{Category, CategoryDraft, CategoryWithProducts};
use catalogo_entity::product::Product;

use super::map_db_err;

/// Repository for category CRUD and listing queries.
///
/// Borrows the unit of work's transaction; every statement issued here is
/// staged on that shared session and persists only on commit.
pub struct CategoryRepository<'c> {
    conn: &'c mut PgConnection,
}

impl<'c> CategoryRepository<'c> {
    pub(crate) fn new(conn: &'c mut PgConnection) -> Self {
        Self { conn }
    }

    /// List categories ordered by id ascending, paginated.
    pub async fn list(&mut self, page: &PageRequest) -> AppResult<PageResponse<Category>> {
        self.find_all(page).await
    }

    /// List categories with their products eagerly loaded.
    ///
    /// Pagination applies to the categories; each category on the page
    /// carries its full product list.
    pub async fn list_with_products(
        &mut self,
        page: &PageRequest,
    ) -> AppResult<PageResponse<CategoryWithProducts>> {
        let categories = self.find_all(page).await?;

        let ids: Vec<i32> = categories.items.iter().map(|c| c.id).collect();
        let products = sqlx::query_as::<_, Product>(
            "SELECT * FROM products WHERE category_id = ANY($1) ORDER BY id ASC",
        )
        .bind(&ids)
        .fetch_all(&mut *self.conn)
        .await
        .map_err(|e| map_db_err("Failed to load products for categories", e))?;

        let mut by_category: HashMap<i32, Vec<Product>> = HashMap::new();
        for product in products {
            by_category.entry(product.category_id).or_default().push(product);
        }

        Ok(categories.map(|category| {
            let products = by_category.remove(&category.id).unwrap_or_default();
            CategoryWithProducts { category, products }
        }))
    }
}

#[async_trait]
impl Repository<Category, CategoryDraft, i32> for CategoryRepository<'_> {
    async fn find_by_id(&mut self, id: i32) -> AppResult<Option<Category>> {
        sqlx::query_as::<_, Category>("SELECT * FROM categories WHERE id = $1")
            .bind(id)
            .fetch_optional(&mut *self.conn)
            .await
            .map_err(|e| map_db_err("Failed to find category by id", e))
    }

    async fn find_all(&mut self, page: &PageRequest) -> AppResult<PageResponse<Category>> {
        let total = self.count().await?;

        let categories = sqlx::query_as::<_, Category>(
            "SELECT * FROM categories ORDER BY id ASC LIMIT $1 OFFSET $2",
        )
        .bind(page.limit() as i64)
        .bind(page.offset() as i64)
        .fetch_all(&mut *self.conn)
        .await
        .map_err(|e| map_db_err("Failed to list categories", e))?;

        Ok(PageResponse::new(categories, page, total))
    }

    async fn create(&mut self, draft: &CategoryDraft) -> AppResult<Category> {
        sqlx::query_as::<_, Category>(
            "INSERT INTO categories (name, image_url) VALUES ($1, $2) RETURNING *",
        )
        .bind(&draft.name)
        .bind(&draft.image_url)
        .fetch_one(&mut *self.conn)
        .await
        .map_err(|e| map_db_err("Failed to create category", e))
    }

    async fn update(&mut self, id: i32, draft: &CategoryDraft) -> AppResult<Category> {
        sqlx::query_as::<_, Category>(
            "UPDATE categories SET name = $2, image_url = $3 WHERE id = $1 RETURNING *",
        )
        .bind(id)
        .bind(&draft.name)
        .bind(&draft.image_url)
        .fetch_optional(&mut *self.conn)
        .await
        .map_err(|e| map_db_err("Failed to update category", e))?
        .ok_or_else(|| {
            catalogo_core::AppError::not_found(format!("Category with id {id} not found"))
        })
    }

    async fn delete(&mut self, id: i32) -> AppResult<Option<Category>> {
        sqlx::query_as::<_, Category>("DELETE FROM categories WHERE id = $1 RETURNING *")
            .bind(id)
            .fetch_optional(&mut *self.conn)
            .await
            .map_err(|e| map_db_err("Failed to delete category", e))
    }

    async fn count(&mut self) -> AppResult<u64> {
        let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM categories")
            .fetch_one(&mut *self.conn)
            .await
            .map_err(|e| map_db_err("Failed to count categories", e))?;
        Ok(count as u64)
    }
}
