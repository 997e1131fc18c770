//! In-memory board repository - used as fallback when no database is
//! configured, and by tests.

use std::collections::BTreeMap;
use std::sync::atomic::{AtomicI64, Ordering};

use async_trait::async_trait;
use tokio::sync::RwLock;

use board_core::domain::Post;
use board_core::error::RepoError;
use board_core::ports::{BaseRepository, BoardRepository};

/// Map-backed store with an atomic counter emulating auto-increment ids.
///
/// Note: Data is lost on process restart.
pub struct InMemoryBoardRepository {
    store: RwLock<BTreeMap<i64, Post>>,
    next_id: AtomicI64,
}

impl InMemoryBoardRepository {
    pub fn new() -> Self {
        Self {
            store: RwLock::new(BTreeMap::new()),
            next_id: AtomicI64::new(1),
        }
    }
}

impl Default for InMemoryBoardRepository {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl BaseRepository<Post, i64> for InMemoryBoardRepository {
    async fn find_all(&self) -> Result<Vec<Post>, RepoError> {
        let store = self.store.read().await;
        // BTreeMap iteration yields ascending ids, i.e. insertion order.
        Ok(store.values().cloned().collect())
    }

    async fn find_by_id(&self, id: i64) -> Result<Option<Post>, RepoError> {
        let store = self.store.read().await;
        Ok(store.get(&id).cloned())
    }

    async fn save(&self, mut entity: Post) -> Result<Post, RepoError> {
        let id = match entity.id {
            Some(id) => id,
            None => self.next_id.fetch_add(1, Ordering::Relaxed),
        };
        entity.id = Some(id);

        let mut store = self.store.write().await;
        store.insert(id, entity.clone());
        Ok(entity)
    }

    async fn delete_by_id(&self, id: i64) -> Result<(), RepoError> {
        let mut store = self.store.write().await;
        store.remove(&id);
        Ok(())
    }
}

impl BoardRepository for InMemoryBoardRepository {}

#[cfg(test)]
mod tests {
    use super::*;

    fn post(title: &str) -> Post {
        Post::new(title.to_owned(), None, None)
    }

    #[tokio::test]
    async fn save_assigns_sequential_ids() {
        let repo = InMemoryBoardRepository::new();

        let first = repo.save(post("first")).await.unwrap();
        let second = repo.save(post("second")).await.unwrap();

        assert_eq!(first.id, Some(1));
        assert_eq!(second.id, Some(2));
    }

    #[tokio::test]
    async fn save_with_id_overwrites() {
        let repo = InMemoryBoardRepository::new();

        let mut saved = repo.save(post("before")).await.unwrap();
        saved.title = "after".to_owned();
        let resaved = repo.save(saved.clone()).await.unwrap();

        assert_eq!(resaved.id, saved.id);
        let found = repo.find_by_id(saved.id.unwrap()).await.unwrap().unwrap();
        assert_eq!(found.title, "after");
        assert_eq!(repo.find_all().await.unwrap().len(), 1);
    }

    #[tokio::test]
    async fn find_all_returns_insertion_order() {
        let repo = InMemoryBoardRepository::new();

        repo.save(post("a")).await.unwrap();
        repo.save(post("b")).await.unwrap();
        repo.save(post("c")).await.unwrap();

        let titles: Vec<String> = repo
            .find_all()
            .await
            .unwrap()
            .into_iter()
            .map(|p| p.title)
            .collect();
        assert_eq!(titles, ["a", "b", "c"]);
    }

    #[tokio::test]
    async fn delete_missing_id_is_a_noop() {
        let repo = InMemoryBoardRepository::new();

        repo.delete_by_id(123).await.unwrap();
    }

    #[tokio::test]
    async fn delete_removes_the_post() {
        let repo = InMemoryBoardRepository::new();
        let saved = repo.save(post("gone")).await.unwrap();

        repo.delete_by_id(saved.id.unwrap()).await.unwrap();

        assert!(repo.find_by_id(saved.id.unwrap()).await.unwrap().is_none());
    }
}
