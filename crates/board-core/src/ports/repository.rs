use async_trait::async_trait;

use crate::domain::Post;
use crate::error::RepoError;

/// Generic repository trait defining standard CRUD operations.
#[async_trait]
pub trait BaseRepository<T, ID>: Send + Sync {
    /// List all entities, in store order.
    async fn find_all(&self) -> Result<Vec<T>, RepoError>;

    /// Find an entity by its unique ID.
    async fn find_by_id(&self, id: ID) -> Result<Option<T>, RepoError>;

    /// Save an entity (insert when the id is absent, overwrite otherwise).
    async fn save(&self, entity: T) -> Result<T, RepoError>;

    /// Delete an entity by its ID. A no-op when the id does not exist.
    async fn delete_by_id(&self, id: ID) -> Result<(), RepoError>;
}

/// Post repository - the store the board service runs against.
///
/// A marker over [`BaseRepository`] so the backing engine (Postgres,
/// in-memory) stays swappable without touching the service or API layers.
pub trait BoardRepository: BaseRepository<Post, i64> {}
