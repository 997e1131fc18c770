//! Board service - entity lifecycle rules on top of the repository port.

use std::sync::Arc;

use chrono::Utc;

use crate::domain::{Post, PostUpdate};
use crate::error::DomainError;
use crate::ports::BoardRepository;

/// Mediates between the API layer and the store: stamps timestamps, performs
/// existence checks, and applies field-level updates.
#[derive(Clone)]
pub struct BoardService {
    repo: Arc<dyn BoardRepository>,
}

impl BoardService {
    pub fn new(repo: Arc<dyn BoardRepository>) -> Self {
        Self { repo }
    }

    /// Return all posts, in store order.
    pub async fn find_all(&self) -> Result<Vec<Post>, DomainError> {
        Ok(self.repo.find_all().await?)
    }

    /// Return the post with the given id, or `NotFound`.
    pub async fn find_by_id(&self, id: i64) -> Result<Post, DomainError> {
        self.repo
            .find_by_id(id)
            .await?
            .ok_or(DomainError::NotFound { id })
    }

    /// Persist a new post. The id is assigned by the store and `created_at`
    /// by the server; caller-supplied values for either are discarded.
    pub async fn add_board(&self, mut post: Post) -> Result<Post, DomainError> {
        post.id = None;
        post.created_at = Utc::now();
        post.updated_at = None;

        let saved = self.repo.save(post).await?;
        tracing::info!(title = %saved.title, "board post added");
        Ok(saved)
    }

    /// Overwrite `title`, `name` and `text` of an existing post and stamp
    /// `updated_at`. Fails with `NotFound` when the id does not exist.
    pub async fn modify_board(&self, id: i64, update: PostUpdate) -> Result<Post, DomainError> {
        let mut post = self
            .repo
            .find_by_id(id)
            .await?
            .ok_or(DomainError::NotFound { id })?;

        post.title = update.title;
        post.name = update.name;
        post.text = update.text;
        post.updated_at = Some(Utc::now());

        let saved = self.repo.save(post).await?;
        tracing::info!(id, "board post modified");
        Ok(saved)
    }

    /// Delete the post with the given id. Succeeds silently when the id does
    /// not exist, mirroring the store's delete semantics.
    pub async fn delete_board(&self, id: i64) -> Result<(), DomainError> {
        self.repo.delete_by_id(id).await?;
        tracing::info!(id, "board post deleted");
        Ok(())
    }
}
