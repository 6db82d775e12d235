use axum::{http::StatusCode, response::IntoResponse};

/// Handler for paths not registered in `configure`
/// 返回404和请求的uri，不记录日志
pub async fn fallback(uri: axum::http::Uri) -> impl IntoResponse {
    (StatusCode::NOT_FOUND, format!("No route {}", uri))
}
