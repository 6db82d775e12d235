use std::sync::Arc;
use std::time::Duration;

use axum::{
    extract::{Request, State},
    middleware::{self, Next},
    response::Response,
    routing::get,
    Router,
};
use tokio::net::TcpListener;
use tokio_util::{sync::CancellationToken, task::TaskTracker};
use tracing::{event, Level};

pub mod parse_paras;
pub mod error;
pub mod ctrlc;

mod handlers;

/// handlers: 每个路由的函数
/// error: 定义的错误类型，用于错误传递
use handlers::{
    root::root,
    work::work,
    fallback::fallback,
};
use error::DemoError;

/// `/work`模拟耗时操作的时长
pub const WORK_DELAY: Duration = Duration::from_millis(100);

/// 每个handler共享的状态，请求之间不共享业务数据
#[derive(Clone, Debug)]
pub struct AppState {
    pub name:     Arc<str>,          // 返回内容和日志中使用的名称，默认springboot-nginx-demo
    pub shutdown: CancellationToken, // 停止服务时取消，正在等待的`/work`请求会被中断
    pub inflight: TaskTracker,       // 正在处理的请求，停止服务时等待这些请求返回后再关闭连接
}

impl AppState {
    pub fn new(name: &str) -> Self {
        AppState{
            name: Arc::from(name),
            shutdown: CancellationToken::new(),
            inflight: TaskTracker::new(),
        }
    }
}

/// 创建路由
/// 在main中直接调用这个函数创建路由
pub fn configure(state: AppState) -> Router {
    Router::new()
        .route("/", get(root)) // GET /，返回`<name> ok`
        .route("/work", get(work)) // GET /work，等待100ms后返回`<name> work done`
        .fallback(fallback) // 没有匹配到任何路由，执行fallback
        .layer(middleware::from_fn_with_state(state.inflight.clone(), track_request)) // 记录正在处理的请求
        .with_state(state)
}

/// 请求返回之前一直计入`inflight`
async fn track_request(State(inflight): State<TaskTracker>, req: Request, next: Next) -> Response {
    inflight.track_future(next.run(req)).await
}

/// 开启http服务
/// `state.shutdown`被取消后，先等正在处理的请求都返回（`/work`返回`RequestInterrupted`），再停止接收新连接并关闭已有连接
/// 连接关闭不能直接用`state.shutdown`，否则hyper会在500写出之前断开连接
pub async fn serve(listener: TcpListener, state: AppState) -> Result<(), DemoError> {
    let shutdown = state.shutdown.clone();
    let inflight = state.inflight.clone();
    let drained = async move {
        shutdown.cancelled().await;
        inflight.close();
        inflight.wait().await;
    };
    let router = configure(state);
    if let Err(e) = axum::serve(listener, router.into_make_service())
        .with_graceful_shutdown(drained)
        .await
    {
        return Err(DemoError::ServeError{error: e})
    }
    event!(Level::INFO, "Server shutdown complete");
    Ok(())
}
