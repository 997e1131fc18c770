//! # Board Infrastructure
//!
//! Concrete implementations of the ports defined in `board-core`.
//!
//! ## Feature Flags
//!
//! - `postgres` (default) - PostgreSQL store via SeaORM
//!
//! The in-memory store is always available and carries no external
//! dependencies.

pub mod database;

pub use database::InMemoryBoardRepository;

#[cfg(feature = "postgres")]
pub use database::PostgresBoardRepository;
