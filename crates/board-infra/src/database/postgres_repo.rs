//! PostgreSQL repository implementations.

use board_core::ports::BoardRepository;

use super::entity::board::Entity as BoardEntity;
use super::postgres_base::PostgresBaseRepository;

/// PostgreSQL board repository.
pub type PostgresBoardRepository = PostgresBaseRepository<BoardEntity>;

impl BoardRepository for PostgresBoardRepository {}
