//! Generic repository trait for database access.

use async_trait::async_trait;

use crate::result::AppResult;
use crate::types::pagination::{PageRequest, PageResponse};

/// Generic CRUD repository contract.
///
/// Parameterized so each entity gets a strongly typed repository without
/// duplicating the CRUD surface. Entity-specific queries (ordering choices,
/// relationship loading) live on the concrete repository structs, since only
/// there is the consumption pattern known.
///
/// Methods take `&mut self` because concrete repositories are views over a
/// single shared database session; persistence failures surface when the
/// owning unit of work commits or when the statement itself fails.
#[async_trait]
pub trait Repository<Entity, Draft, Id>: Send
where
    Entity: Send + Sync + 'static,
    Draft: Send + Sync + 'static,
    Id: Send + Sync + 'static,
{
    /// Find an entity by its primary key.
    async fn find_by_id(&mut self, id: Id) -> AppResult<Option<Entity>>;

    /// Find all entities, ordered by primary key, with pagination.
    async fn find_all(&mut self, page: &PageRequest) -> AppResult<PageResponse<Entity>>;

    /// Stage a new entity and return the stored row.
    async fn create(&mut self, draft: &Draft) -> AppResult<Entity>;

    /// Fully update an existing entity and return the updated row.
    async fn update(&mut self, id: Id, draft: &Draft) -> AppResult<Entity>;

    /// Delete an entity by primary key, returning the deleted row if any.
    async fn delete(&mut self, id: Id) -> AppResult<Option<Entity>>;

    /// Count total entities.
    async fn count(&mut self) -> AppResult<u64>;
}
