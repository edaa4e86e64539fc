//! Board handlers - list, CRUD, and search.

use actix_web::{HttpResponse, http::header, web};
use serde::Deserialize;

use board_core::domain::Post;
use board_shared::ApiResponse;
use board_shared::dto::{PageResponse, PostRequest, PostResponse};

use crate::middleware::error::AppResult;
use crate::state::AppState;

#[derive(Debug, Deserialize)]
pub struct ListQuery {
    page: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct SearchQuery {
    keyword: String,
}

fn to_response(post: Post) -> PostResponse {
    PostResponse {
        // posts coming out of the store always carry an id
        id: post.id.unwrap_or_default(),
        title: post.title,
        content: post.content,
        writer: post.writer,
        created_at: post.created_at,
        modified_at: post.modified_at,
    }
}

fn redirect_to_list() -> HttpResponse {
    HttpResponse::SeeOther()
        .insert_header((header::LOCATION, "/"))
        .finish()
}

/// GET /?page=<n>
///
/// One page of the board, newest first, plus the navigation strip.
/// Missing or malformed page numbers clamp to 1 - they come from the
/// address bar, not from code.
pub async fn list(state: web::Data<AppState>, query: web::Query<ListQuery>) -> AppResult<HttpResponse> {
    let page = query
        .page
        .as_deref()
        .and_then(|p| p.parse::<u64>().ok())
        .unwrap_or(1);

    let view = state.board.get_page(page).await?;

    Ok(HttpResponse::Ok().json(ApiResponse::ok(PageResponse {
        items: view.items.into_iter().map(to_response).collect(),
        page_links: view.page_links,
    })))
}

/// POST /post
pub async fn create(
    state: web::Data<AppState>,
    body: web::Json<PostRequest>,
) -> AppResult<HttpResponse> {
    let req = body.into_inner();
    state
        .board
        .save(Post::new(req.title, req.content, req.writer))
        .await?;

    Ok(redirect_to_list())
}

/// GET /post/{id}
pub async fn detail(state: web::Data<AppState>, path: web::Path<i64>) -> AppResult<HttpResponse> {
    let post = state.board.get_post(path.into_inner()).await?;
    Ok(HttpResponse::Ok().json(ApiResponse::ok(to_response(post))))
}

/// GET /post/edit/{id}
///
/// The post as it would be loaded into the edit form.
pub async fn edit(state: web::Data<AppState>, path: web::Path<i64>) -> AppResult<HttpResponse> {
    let post = state.board.get_post(path.into_inner()).await?;
    Ok(HttpResponse::Ok().json(ApiResponse::ok(to_response(post))))
}

/// PUT /post/edit/{id}
///
/// Full overwrite of title/content/writer; `created_at` is preserved,
/// `modified_at` refreshed. Responds with the saved post.
pub async fn update(
    state: web::Data<AppState>,
    path: web::Path<i64>,
    body: web::Json<PostRequest>,
) -> AppResult<HttpResponse> {
    let id = path.into_inner();
    let req = body.into_inner();

    let mut post = state.board.get_post(id).await?;
    post.title = req.title;
    post.content = req.content;
    post.writer = req.writer;

    let saved = state.board.save(post).await?;
    Ok(HttpResponse::Ok().json(ApiResponse::ok(to_response(saved))))
}

/// DELETE /post/{id}
pub async fn delete(state: web::Data<AppState>, path: web::Path<i64>) -> AppResult<HttpResponse> {
    state.board.delete(path.into_inner()).await?;
    Ok(redirect_to_list())
}

/// GET /board/search?keyword=<s>
///
/// Title substring search, unpaginated. No matches is an empty list.
pub async fn search(
    state: web::Data<AppState>,
    query: web::Query<SearchQuery>,
) -> AppResult<HttpResponse> {
    let hits = state.board.search(&query.keyword).await?;

    Ok(HttpResponse::Ok().json(ApiResponse::ok(
        hits.into_iter().map(to_response).collect::<Vec<_>>(),
    )))
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use actix_web::{App, test};
    use board_core::{BoardService, Pager};
    use board_infra::database::InMemoryPostRepository;
    use board_shared::dto::PageResponse;

    use super::*;
    use crate::handlers::configure_routes;
    use crate::state::AppState;

    async fn app_state(seed: usize) -> AppState {
        let repo = Arc::new(InMemoryPostRepository::new());
        let board = Arc::new(BoardService::new(repo, Pager::new(4, 5)));
        for i in 0..seed {
            board
                .save(Post::new(
                    format!("post {i}"),
                    "content".to_string(),
                    "writer".to_string(),
                ))
                .await
                .unwrap();
        }
        AppState { board }
    }

    #[actix_web::test]
    async fn list_returns_page_and_links() {
        let app = test::init_service(
            App::new()
                .app_data(web::Data::new(app_state(9).await))
                .configure(configure_routes),
        )
        .await;

        let req = test::TestRequest::get().uri("/?page=1").to_request();
        let body: ApiResponse<PageResponse> = test::call_and_read_body_json(&app, req).await;

        let page = body.data.unwrap();
        assert_eq!(page.items.len(), 4);
        assert_eq!(page.page_links, vec![1, 2, 3]);
    }

    #[actix_web::test]
    async fn list_with_garbage_page_falls_back_to_first() {
        let app = test::init_service(
            App::new()
                .app_data(web::Data::new(app_state(9).await))
                .configure(configure_routes),
        )
        .await;

        let req = test::TestRequest::get().uri("/?page=banana").to_request();
        let body: ApiResponse<PageResponse> = test::call_and_read_body_json(&app, req).await;

        assert_eq!(body.data.unwrap().items.len(), 4);
    }

    #[actix_web::test]
    async fn list_past_end_keeps_links() {
        let app = test::init_service(
            App::new()
                .app_data(web::Data::new(app_state(9).await))
                .configure(configure_routes),
        )
        .await;

        let req = test::TestRequest::get().uri("/?page=99").to_request();
        let body: ApiResponse<PageResponse> = test::call_and_read_body_json(&app, req).await;

        let page = body.data.unwrap();
        assert!(page.items.is_empty());
        assert_eq!(page.page_links, vec![1, 2, 3]);
    }

    #[actix_web::test]
    async fn list_with_u64_max_page_is_empty_not_an_error() {
        let app = test::init_service(
            App::new()
                .app_data(web::Data::new(app_state(9).await))
                .configure(configure_routes),
        )
        .await;

        let req = test::TestRequest::get()
            .uri("/?page=18446744073709551615")
            .to_request();
        let body: ApiResponse<PageResponse> = test::call_and_read_body_json(&app, req).await;

        let page = body.data.unwrap();
        assert!(page.items.is_empty());
        assert_eq!(page.page_links, vec![1, 2, 3]);
    }

    #[actix_web::test]
    async fn create_redirects_to_list() {
        let app = test::init_service(
            App::new()
                .app_data(web::Data::new(app_state(0).await))
                .configure(configure_routes),
        )
        .await;

        let req = test::TestRequest::post()
            .uri("/post")
            .set_json(PostRequest {
                title: "hello".to_string(),
                content: "body".to_string(),
                writer: "alice".to_string(),
            })
            .to_request();
        let resp = test::call_service(&app, req).await;

        assert_eq!(resp.status(), actix_web::http::StatusCode::SEE_OTHER);
        assert_eq!(resp.headers().get(header::LOCATION).unwrap(), "/");
    }

    #[actix_web::test]
    async fn detail_of_missing_post_is_404() {
        let app = test::init_service(
            App::new()
                .app_data(web::Data::new(app_state(0).await))
                .configure(configure_routes),
        )
        .await;

        let req = test::TestRequest::get().uri("/post/123").to_request();
        let resp = test::call_service(&app, req).await;

        assert_eq!(resp.status(), actix_web::http::StatusCode::NOT_FOUND);
    }

    #[actix_web::test]
    async fn update_roundtrip() {
        let state = app_state(1).await;
        let app = test::init_service(
            App::new()
                .app_data(web::Data::new(state))
                .configure(configure_routes),
        )
        .await;

        let req = test::TestRequest::put()
            .uri("/post/edit/1")
            .set_json(PostRequest {
                title: "edited".to_string(),
                content: "new body".to_string(),
                writer: "bob".to_string(),
            })
            .to_request();
        let body: ApiResponse<PostResponse> = test::call_and_read_body_json(&app, req).await;

        let post = body.data.unwrap();
        assert_eq!(post.id, 1);
        assert_eq!(post.title, "edited");
    }

    #[actix_web::test]
    async fn delete_missing_post_is_404() {
        let app = test::init_service(
            App::new()
                .app_data(web::Data::new(app_state(0).await))
                .configure(configure_routes),
        )
        .await;

        let req = test::TestRequest::delete().uri("/post/9").to_request();
        let resp = test::call_service(&app, req).await;

        assert_eq!(resp.status(), actix_web::http::StatusCode::NOT_FOUND);
    }

    #[actix_web::test]
    async fn search_without_matches_is_empty_list() {
        let app = test::init_service(
            App::new()
                .app_data(web::Data::new(app_state(3).await))
                .configure(configure_routes),
        )
        .await;

        let req = test::TestRequest::get()
            .uri("/board/search?keyword=zzz")
            .to_request();
        let body: ApiResponse<Vec<PostResponse>> = test::call_and_read_body_json(&app, req).await;

        assert!(body.data.unwrap().is_empty());
    }
}
