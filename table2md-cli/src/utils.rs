/// 设置日志记录系统
///
/// - 库代码只使用 tracing 宏记录日志
/// - 在应用入口配置日志输出行为
/// - 支持 RUST_LOG 环境变量控制日志级别
/// - 日志写到 stderr，避免和 stdout 的 Markdown 输出混在一起
pub fn setup_logging(verbose: bool) {
    use tracing_subscriber::{EnvFilter, fmt};

    // 根据verbose参数和环境变量确定日志级别
    let default_level = if verbose { "debug" } else { "info" };
    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    fmt()
        .with_env_filter(env_filter)
        .with_writer(std::io::stderr)
        .with_target(false) // 不显示模块路径
        .with_thread_names(false) // 不显示线程名
        .with_line_number(false) // 不显示行号
        .without_time() // 不显示时间戳
        .compact() // 使用紧凑格式
        .init();
}
