use tracing::{event, Level};

/// 监听`ctrl-c`，unix下同时监听容器停止时发送的SIGTERM，收到任意一个即返回
/// 无法注册信号时记录错误，该信号对应的future永不返回
pub async fn wait_for_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            event!(Level::ERROR, "install Ctrl-C handler: {}", e);
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut s) => {
                s.recv().await;
            },
            Err(e) => {
                event!(Level::ERROR, "install SIGTERM handler: {}", e);
                std::future::pending::<()>().await;
            },
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        () = ctrl_c => {
            event!(Level::INFO, "Received Ctrl-C, shutting down");
        },
        () = terminate => {
            event!(Level::INFO, "Received SIGTERM, shutting down");
        },
    }
}
