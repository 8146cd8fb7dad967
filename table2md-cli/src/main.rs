use clap::Parser;
use table2md_cli::{Cli, run, setup_logging};
use tracing::error;

#[tokio::main]
async fn main() {
    // 解析命令行参数
    let cli = Cli::parse();

    // 设置日志记录
    setup_logging(cli.verbose);

    // 运行转换
    if let Err(e) = run(cli).await {
        error!("❌ 转换失败: {e:#}");
        std::process::exit(1);
    }
}
