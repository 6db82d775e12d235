mod api;

/// parse_paras: 命令行参数
/// error: 定义的错误类型
/// ctrlc: 监听停止信号
/// configure/serve: 路由和http服务
pub use api::{
    parse_paras,
    error,
    ctrlc,
    configure,
    serve,
    AppState,
    WORK_DELAY,
};
