use clap::Parser;
use std::path::PathBuf;

/// table2md - 把 CREATE TABLE DDL 转换成 Markdown 文档表格
#[derive(Parser, Debug)]
#[command(name = "table2md")]
#[command(version)]
#[command(about = "把 CREATE TABLE DDL 转换成 Markdown 文档表格")]
pub struct Cli {
    /// 输入文件，默认读取标准输入
    #[arg(short, long)]
    pub input: Option<PathBuf>,

    /// 输出文件，默认写到标准输出
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// 详细输出
    #[arg(short, long)]
    pub verbose: bool,
}
