//! # 命令行接口模块
//!
//! 使用 `clap` 定义了程序的命令行结构，包括子命令和参数。
//! 所有用户通过命令行与程序交互的入口点都在此模块中定义。

use crate::constants::DEFAULT_REQUESTED_BITS;
use clap::Parser;
use std::path::PathBuf;

/// 一款 LSB (最低有效位) 隐写容量分析命令行工具，用于评估无损格式图像 (如 PNG, BMP) 各像素可安全嵌入的数据量。
#[derive(Parser, Debug)]
#[command(
    version,
    about,
    long_about = "一款 LSB (最低有效位) 隐写容量分析命令行工具，用于评估无损格式图像 (如 PNG, BMP) 各像素可安全嵌入的数据量。"
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

/// 可用的子命令：analyze (容量摘要) 和 map (容量图)。
#[derive(Parser, Debug)]
pub enum Commands {
    /// 统计图像的总嵌入容量并打印摘要。
    Analyze(AnalyzeArgs),

    /// 逐像素生成容量图并保存为灰度图像。
    Map(MapArgs),
}

/// 'analyze' 命令所需的参数。
#[derive(Parser, Debug)]
pub struct AnalyzeArgs {
    /// 待分析的输入图像文件路径 (如 PNG, BMP)。
    #[arg(short, long)]
    pub image: PathBuf,

    /// 每个像素请求嵌入的位数。
    #[arg(short, long, default_value_t = DEFAULT_REQUESTED_BITS)]
    pub bits: i32,
}

/// 'map' 命令所需的参数。
#[derive(Parser, Debug)]
pub struct MapArgs {
    /// 待分析的输入图像文件路径 (如 PNG, BMP)。
    #[arg(short, long)]
    pub image: PathBuf,

    /// 保存容量图的输出路径。缺省时在输入文件旁生成 capacity_<名称>.png。
    #[arg(short, long)]
    pub dest: Option<PathBuf>,

    /// 每个像素请求嵌入的位数。
    #[arg(short, long, default_value_t = DEFAULT_REQUESTED_BITS)]
    pub bits: i32,

    /// 覆盖已存在的输出文件。
    #[arg(short, long)]
    pub force: bool,
}
