//! Data Transfer Objects - request/response types for the API.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Request to create a post. Identity and timestamps are server-assigned.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BoardCreateRequest {
    pub title: String,
    pub name: Option<String>,
    pub text: Option<String>,
}

/// Request to update a post. Carries the full replacement value for each
/// caller-editable field.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BoardUpdateRequest {
    pub title: String,
    pub name: Option<String>,
    pub text: Option<String>,
}

/// A post as returned by the API.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BoardResponse {
    pub id: i64,
    pub title: String,
    pub name: Option<String>,
    pub text: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: Option<DateTime<Utc>>,
}
