//! Product repository implementation.

use async_trait::async_trait;
use sqlx::PgConnection;

use catalogo_core::result::AppResult;
use catalogo_core::traits::Repository;
use catalogo_core::types::pagination::{PageRequest, PageResponse};
use catalogo_entity::product::{Product, ProductDraft};

use super::map_db_err;

/// Repository for product CRUD and listing queries.
///
/// Borrows the unit of work's transaction; every statement issued here is
/// staged on that shared session and persists only on commit.
pub struct ProductRepository<'c> {
    conn: &'c mut PgConnection,
}

impl<'c> ProductRepository<'c> {
    pub(crate) fn new(conn: &'c mut PgConnection) -> Self {
        Self { conn }
    }

    /// List products ordered by id ascending, paginated.
    pub async fn list(&mut self, page: &PageRequest) -> AppResult<PageResponse<Product>> {
        self.find_all(page).await
    }

    /// List every product ordered by ascending price, unpaginated.
    pub async fn list_by_price(&mut self) -> AppResult<Vec<Product>> {
        sqlx::query_as::<_, Product>("SELECT * FROM products ORDER BY price ASC, id ASC")
            .fetch_all(&mut *self.conn)
            .await
            .map_err(|e| map_db_err("Failed to list products by price", e))
    }
}

#[async_trait]
impl Repository<Product, ProductDraft, i32> for ProductRepository<'_> {
    async fn find_by_id(&mut self, id: i32) -> AppResult<Option<Product>> {
        sqlx::query_as::<_, Product>("SELECT * FROM products WHERE id = $1")
            .bind(id)
            .fetch_optional(&mut *self.conn)
            .await
            .map_err(|e| map_db_err("Failed to find product by id", e))
    }

    async fn find_all(&mut self, page: &PageRequest) -> AppResult<PageResponse<Product>> {
        let total = self.count().await?;

        let products = sqlx::query_as::<_, Product>(
            "SELECT * FROM products ORDER BY id ASC LIMIT $1 OFFSET $2",
        )
        .bind(page.limit() as i64)
        .bind(page.offset() as i64)
        .fetch_all(&mut *self.conn)
        .await
        .map_err(|e| map_db_err("Failed to list products", e))?;

        Ok(PageResponse::new(products, page, total))
    }

    async fn create(&mut self, draft: &ProductDraft) -> AppResult<Product> {
        sqlx::query_as::<_, Product>(
            "INSERT INTO products (name, description, price, image_url, stock, category_id) \
             VALUES ($1, $2, $3, $4, $5, $6) \
             RETURNING *",
        )
        .bind(&draft.name)
        .bind(&draft.description)
        .bind(draft.price)
        .bind(&draft.image_url)
        .bind(draft.stock)
        .bind(draft.category_id)
        .fetch_one(&mut *self.conn)
        .await
        .map_err(|e| map_db_err("Failed to create product", e))
    }

    async fn update(&mut self, id: i32, draft: &ProductDraft) -> AppResult<Product> {
        sqlx::query_as::<_, Product>(
            "UPDATE products SET name = $2, description = $3, price = $4, \
                                 image_url = $5, stock = $6, category_id = $7 \
             WHERE id = $1 RETURNING *",
        )
        .bind(id)
        .bind(&draft.name)
        .bind(&draft.description)
        .bind(draft.price)
        .bind(&draft.image_url)
        .bind(draft.stock)
        .bind(draft.category_id)
        .fetch_optional(&mut *self.conn)
        .await
        .map_err(|e| map_db_err("Failed to update product", e))?
        .ok_or_else(|| {
            catalogo_core::AppError::not_found(format!("Product with id {id} not found"))
        })
    }

    async fn delete(&mut self, id: i32) -> AppResult<Option<Product>> {
        sqlx::query_as::<_, Product>("DELETE FROM products WHERE id = $1 RETURNING *")
            .bind(id)
            .fetch_optional(&mut *self.conn)
            .await
            .map_err(|e| map_db_err("Failed to delete product", e))
    }

    async fn count(&mut self) -> AppResult<u64> {
        let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM products")
            .fetch_one(&mut *self.conn)
            .await
            .map_err(|e| map_db_err("Failed to count products", e))?;
        Ok(count as u64)
    }
}
