use axum::extract::State;
use tracing::{event, Level};

use crate::api::AppState;

/// Handler for `/` GET
/// 确认后端可以访问，返回固定字符串
pub async fn root(State(state): State<AppState>) -> String {
    event!(Level::INFO, "{} root endpoint called", state.name);
    format!("{} ok", state.name)
}
