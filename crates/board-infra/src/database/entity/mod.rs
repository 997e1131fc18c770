//! SeaORM entities backing the repository implementations.

pub mod board;
