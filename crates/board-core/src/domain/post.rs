use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Post entity - a single board entry.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Post {
    /// Store-assigned primary key. `None` until the post has been persisted.
    pub id: Option<i64>,
    pub title: String,
    pub name: Option<String>,
    pub text: Option<String>,
    pub created_at: DateTime<Utc>,
    /// `None` until the first modification.
    pub updated_at: Option<DateTime<Utc>>,
}

impl Post {
    /// Create a new, not-yet-persisted post. The store assigns the id on save.
    pub fn new(title: String, name: Option<String>, text: Option<String>) -> Self {
        Self {
            id: None,
            title,
            name,
            text,
            created_at: Utc::now(),
            updated_at: None,
        }
    }
}

/// Field-level update applied by `modify_board`. Everything outside these
/// three fields is server-owned.
#[derive(Debug, Clone, PartialEq)]
pub struct PostUpdate {
    pub title: String,
    pub name: Option<String>,
    pub text: Option<String>,
}
