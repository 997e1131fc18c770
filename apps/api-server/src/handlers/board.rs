//! Board CRUD handlers - thin pass-throughs to the board service.

use actix_web::{HttpResponse, web};

use board_core::domain::{Post, PostUpdate};
use board_shared::dto::{BoardCreateRequest, BoardResponse, BoardUpdateRequest};

use crate::middleware::error::AppResult;
use crate::state::AppState;

fn to_response(post: Post) -> BoardResponse {
    BoardResponse {
        // Posts coming back from the store always carry an id.
        id: post.id.unwrap_or_default(),
        title: post.title,
        name: post.name,
        text: post.text,
        created_at: post.created_at,
        updated_at: post.updated_at,
    }
}

/// GET /api/board
pub async fn list(state: web::Data<AppState>) -> AppResult<HttpResponse> {
    let posts = state.boards.find_all().await?;
    let body: Vec<BoardResponse> = posts.into_iter().map(to_response).collect();

    Ok(HttpResponse::Ok().json(body))
}

/// GET /api/board/{id}
pub async fn get(state: web::Data<AppState>, path: web::Path<i64>) -> AppResult<HttpResponse> {
    let post = state.boards.find_by_id(path.into_inner()).await?;

    Ok(HttpResponse::Ok().json(to_response(post)))
}

/// POST /api/board
pub async fn create(
    state: web::Data<AppState>,
    body: web::Json<BoardCreateRequest>,
) -> AppResult<HttpResponse> {
    let req = body.into_inner();

    let post = Post::new(req.title, req.name, req.text);
    let saved = state.boards.add_board(post).await?;

    Ok(HttpResponse::Created().json(to_response(saved)))
}

/// PUT /api/board/{id}
pub async fn update(
    state: web::Data<AppState>,
    path: web::Path<i64>,
    body: web::Json<BoardUpdateRequest>,
) -> AppResult<HttpResponse> {
    let req = body.into_inner();

    let updated = state
        .boards
        .modify_board(
            path.into_inner(),
            PostUpdate {
                title: req.title,
                name: req.name,
                text: req.text,
            },
        )
        .await?;

    Ok(HttpResponse::Ok().json(to_response(updated)))
}

/// DELETE /api/board/{id}
pub async fn delete(state: web::Data<AppState>, path: web::Path<i64>) -> AppResult<HttpResponse> {
    state.boards.delete_board(path.into_inner()).await?;

    Ok(HttpResponse::NoContent().finish())
}
