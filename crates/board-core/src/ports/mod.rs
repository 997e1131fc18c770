//! Ports - trait seams implemented by the infrastructure layer.

mod repository;

pub use repository::{BaseRepository, BoardRepository};
