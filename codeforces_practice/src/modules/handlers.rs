use crate::modules::{page::ProblemListPage, pipeline::collect_required_problems};
use askama::Template;
use axum::{extract::Extension, http::StatusCode, response::Html, routing, Json, Router};
use codeforces_practice_libs::{api::ProblemListResponse, CodeforcesClient};
use std::sync::Arc;
use tokio::time::Instant;
use tower_http::trace::TraceLayer;

pub struct AppState {
    pub client: CodeforcesClient,
    pub recent_size: usize,
}

pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/", routing::get(index))
        .route("/api/problems", routing::get(problems))
        .route("/api/liveness", routing::get(liveness))
        .layer(Extension(Arc::new(state)))
        .layer(TraceLayer::new_for_http())
}

/// The page never shows an upstream failure; it renders an empty list instead.
pub async fn index(
    Extension(state): Extension<Arc<AppState>>,
) -> Result<Html<String>, StatusCode> {
    let start_process = Instant::now();

    let page = match collect_required_problems(&state.client, state.recent_size).await {
        Ok(problems) => ProblemListPage::new(problems),
        Err(e) => {
            tracing::error!("failed to collect problems cause: {:?}", e);
            ProblemListPage::empty()
        }
    };

    tracing::info!(
        "elapsed_time={} count={}",
        start_process.elapsed().as_millis(),
        page.count
    );

    page.render().map(Html).map_err(|e| {
        tracing::error!("failed to render page cause: {:?}", e);
        StatusCode::INTERNAL_SERVER_ERROR
    })
}

pub async fn problems(
    Extension(state): Extension<Arc<AppState>>,
) -> (StatusCode, Json<ProblemListResponse>) {
    match collect_required_problems(&state.client, state.recent_size).await {
        Ok(problems) => (StatusCode::OK, Json(ProblemListResponse::new(problems))),
        Err(e) => {
            tracing::error!("failed to collect problems cause: {:?}", e);
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(ProblemListResponse::error(e)),
            )
        }
    }
}

pub async fn liveness() -> StatusCode {
    StatusCode::OK
}
