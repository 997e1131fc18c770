//! # Board Shared
//!
//! Wire types shared between the backend and any future client.

pub mod dto;
pub mod response;

pub use response::ErrorResponse;
