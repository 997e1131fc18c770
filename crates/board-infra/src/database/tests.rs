use chrono::Utc;
use sea_orm::{DatabaseBackend, DbErr, MockDatabase, MockExecResult, RuntimeErr};

use board_core::domain::Post;
use board_core::error::RepoError;
use board_core::ports::{BaseRepository, BoardRepository};

use crate::database::entity::board;
use crate::database::postgres_repo::PostgresBoardRepository;

fn row(id: i64, title: &str) -> board::Model {
    board::Model {
        id,
        title: title.to_owned(),
        name: Some("author".to_owned()),
        text: Some("body".to_owned()),
        created_at: Utc::now().into(),
        updated_at: None,
    }
}

#[tokio::test]
async fn find_by_id_maps_the_row() {
    let db = MockDatabase::new(DatabaseBackend::Postgres)
        .append_query_results(vec![vec![row(1, "Test Post")]])
        .into_connection();

    let repo = PostgresBoardRepository::new(db);

    let result: Option<Post> = repo.find_by_id(1).await.unwrap();

    let post = result.unwrap();
    assert_eq!(post.id, Some(1));
    assert_eq!(post.title, "Test Post");
    assert!(post.updated_at.is_none());
}

#[tokio::test]
async fn find_by_missing_id_is_none() {
    let db = MockDatabase::new(DatabaseBackend::Postgres)
        .append_query_results(vec![Vec::<board::Model>::new()])
        .into_connection();

    let repo = PostgresBoardRepository::new(db);

    let result: Option<Post> = repo.find_by_id(99).await.unwrap();
    assert!(result.is_none());
}

#[tokio::test]
async fn find_all_maps_every_row() {
    let db = MockDatabase::new(DatabaseBackend::Postgres)
        .append_query_results(vec![vec![row(1, "first"), row(2, "second")]])
        .into_connection();

    let repo = PostgresBoardRepository::new(db);

    let posts: Vec<Post> = repo.find_all().await.unwrap();

    assert_eq!(posts.len(), 2);
    assert_eq!(posts[0].id, Some(1));
    assert_eq!(posts[1].title, "second");
}

#[tokio::test]
async fn connection_failures_map_to_connection_errors() {
    let db = MockDatabase::new(DatabaseBackend::Postgres)
        .append_query_errors(vec![DbErr::Conn(RuntimeErr::Internal(
            "pool timed out".to_owned(),
        ))])
        .into_connection();

    let repo = PostgresBoardRepository::new(db);

    let result: Result<Option<Post>, _> = repo.find_by_id(1).await;
    assert!(matches!(result.unwrap_err(), RepoError::Connection(_)));
}

#[tokio::test]
async fn delete_ignores_missing_rows() {
    let db = MockDatabase::new(DatabaseBackend::Postgres)
        .append_exec_results(vec![MockExecResult {
            last_insert_id: 0,
            rows_affected: 0,
        }])
        .into_connection();

    // Through the object-safe port, the way the service uses it.
    let repo: Box<dyn BoardRepository> = Box::new(PostgresBoardRepository::new(db));

    repo.delete_by_id(404).await.unwrap();
}
