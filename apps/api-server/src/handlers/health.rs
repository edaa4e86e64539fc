//! Health check endpoint.

use actix_web::{HttpResponse, web};
use serde::Serialize;

use crate::state::AppState;

#[derive(Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
    pub service: &'static str,
    pub version: &'static str,
    pub timestamp: String,
}

/// Health check endpoint - returns board server status.
///
/// GET /api/health
pub async fn health_check(_state: web::Data<AppState>) -> HttpResponse {
    let response = HealthResponse {
        status: "ok",
        service: "board-api",
        version: env!("CARGO_PKG_VERSION"),
        timestamp: chrono::Utc::now().to_rfc3339(),
    };

    HttpResponse::Ok().json(response)
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use actix_web::{App, test};
    use board_core::{BoardService, Pager};
    use board_infra::database::InMemoryPostRepository;

    use super::*;
    use crate::handlers::configure_routes;

    #[actix_web::test]
    async fn health_reports_this_service() {
        let board = Arc::new(BoardService::new(
            Arc::new(InMemoryPostRepository::new()),
            Pager::new(4, 5),
        ));
        let app = test::init_service(
            App::new()
                .app_data(web::Data::new(AppState { board }))
                .configure(configure_routes),
        )
        .await;

        let req = test::TestRequest::get().uri("/api/health").to_request();
        let body: serde_json::Value = test::call_and_read_body_json(&app, req).await;

        assert_eq!(body["status"], "ok");
        assert_eq!(body["service"], "board-api");
    }
}
