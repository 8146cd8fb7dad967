use std::path::Path;

use anyhow::{Context, Result};
use tokio::io::{AsyncReadExt, AsyncWriteExt};
use tracing::debug;

use crate::cli::Cli;

/// 执行一次完整的转换: 读入 -> 转换 -> 写出
pub async fn run(cli: Cli) -> Result<()> {
    let sql = read_input(cli.input.as_deref()).await?;
    debug!("读取输入完成, {} 字节", sql.len());

    let markdown = table2md_core::convert_sql_to_markdown(&sql)?;

    write_output(cli.output.as_deref(), &markdown).await
}

async fn read_input(path: Option<&Path>) -> Result<String> {
    match path {
        Some(path) => tokio::fs::read_to_string(path)
            .await
            .with_context(|| format!("无法读取输入文件: {}", path.display())),
        None => {
            let mut sql = String::new();
            tokio::io::stdin()
                .read_to_string(&mut sql)
                .await
                .context("无法读取标准输入")?;
            Ok(sql)
        }
    }
}

async fn write_output(path: Option<&Path>, markdown: &str) -> Result<()> {
    match path {
        Some(path) => tokio::fs::write(path, markdown)
            .await
            .with_context(|| format!("无法写入输出文件: {}", path.display())),
        None => {
            let mut stdout = tokio::io::stdout();
            stdout
                .write_all(markdown.as_bytes())
                .await
                .context("无法写入标准输出")?;
            stdout.flush().await.context("无法写入标准输出")?;
            Ok(())
        }
    }
}
