use std::io;

use axum::{
    http::StatusCode,
    response::{Response, IntoResponse},
};
use thiserror::Error;

/// 自定义的错误类型，方便传递错误
#[derive(Debug, Error)]
pub enum DemoError {
    // 请求等待期间服务停止
    #[error("Error - {path} interrupted before the work finished")]
    RequestInterrupted{path: String},

    // 参数使用错误
    #[error("Error - {para}")]
    ParaError{para: String},

    // 监听地址错误
    #[error("Error - bind {addr}: {error}")]
    BindError{addr: String, error: io::Error},

    // http服务错误
    #[error("Error - serve: {error}")]
    ServeError{error: io::Error},
}

/// 为DemoError实现IntoResponse，这样在axum中也可以使用
impl IntoResponse for DemoError {
    fn into_response(self) -> Response {
        (StatusCode::INTERNAL_SERVER_ERROR, format!("{}", self)).into_response()
    }
}
