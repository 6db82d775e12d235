use axum::extract::State;
use tokio::time::sleep;
use tracing::{event, Level};

use crate::api::{AppState, WORK_DELAY};
use crate::api::error::DemoError;

/// Handler for `/work` GET
/// 等待`WORK_DELAY`模拟耗时操作，只挂起当前请求的task，不影响其他请求
/// 客户端断开时axum直接drop这个future，服务停止时返回`RequestInterrupted`
pub async fn work(State(state): State<AppState>) -> Result<String, DemoError> {
    event!(Level::INFO, "{} work endpoint called", state.name);
    tokio::select! {
        _ = sleep(WORK_DELAY) => Ok(format!("{} work done", state.name)),
        _ = state.shutdown.cancelled() => {
            event!(Level::WARN, "{} work interrupted by shutdown", state.name);
            Err(DemoError::RequestInterrupted{path: "/work".to_string()})
        },
    }
}
