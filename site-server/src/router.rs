use crate::error::ServerError;
use axum::extract::State;
use axum::handler::Handler;
use axum::http::{StatusCode, Uri};
use axum::response::Html;
use axum::Router;
use site_content::Route;
use std::path::Path;
use std::sync::Arc;
use tower_http::services::ServeDir;
use tower_http::trace::TraceLayer;

#[derive(Clone)]
struct ShellState {
    shell: Arc<str>,
}

/// Files under `dist` are served as-is. Any other path gets the app shell:
/// 200 when the route table knows it, 404 otherwise so crawlers see a miss.
pub fn site_router(dist: &Path) -> Result<Router, ServerError> {
    let shell_path = dist.join("index.html");
    let shell = std::fs::read_to_string(&shell_path).map_err(|source| ServerError::MissingShell {
        path: shell_path.clone(),
        source,
    })?;
    let state = ShellState {
        shell: Arc::from(shell),
    };

    let files = ServeDir::new(dist).fallback(serve_shell.with_state(state));
    Ok(Router::new()
        .fallback_service(files)
        .layer(TraceLayer::new_for_http()))
}

pub fn status_for(path: &str) -> StatusCode {
    if Route::resolve(path).is_known() {
        StatusCode::OK
    } else {
        StatusCode::NOT_FOUND
    }
}

async fn serve_shell(State(state): State<ShellState>, uri: Uri) -> (StatusCode, Html<String>) {
    let status = status_for(uri.path());
    tracing::debug!(path = uri.path(), %status, "serving app shell");
    (status, Html(state.shell.to_string()))
}
