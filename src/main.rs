use std::net::{IpAddr, SocketAddr};
use std::process::exit;

use tokio::net::TcpListener;
use tracing::{event, Level};
use tracing_subscriber::EnvFilter;

/// parse_para: 解析命令行参数
/// serve: 开启http服务
/// wait_for_signal: 监听停止信号
use nginx_demo::{
    parse_paras::parse_para,
    error::DemoError,
    ctrlc::wait_for_signal,
    serve,
    AppState,
};

#[tokio::main]
async fn main() {
    // Start tracing，默认INFO，可以通过RUST_LOG修改
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let paras = match parse_para() {
        Ok(p) => p,
        Err(e) => {
            println!("{}", e); // 这里不要用`{:?}`，会打印结构体而不是打印指定的错误信息
            exit(1);
        },
    };

    // 定义监听地址和端口
    let addr = SocketAddr::new(IpAddr::V4(paras.addr), paras.port);
    let listener = match TcpListener::bind(addr).await {
        Ok(l) => l,
        Err(e) => {
            println!("{}", DemoError::BindError{addr: addr.to_string(), error: e});
            exit(1);
        },
    };
    event!(Level::INFO, "Running on http://{}:{}", paras.addr_str, paras.port);

    // 监听`ctrl-c`和SIGTERM，收到后停止接收新连接，正在等待的`/work`请求返回错误
    let state = AppState::new(&paras.name);
    let shutdown = state.shutdown.clone();
    tokio::spawn(async move {
        wait_for_signal().await;
        shutdown.cancel();
    });

    // 开启http服务
    if let Err(e) = serve(listener, state).await {
        println!("{}", e);
        exit(1);
    }
}
