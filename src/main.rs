use clap::Parser;

use lsb_capacity::{
    cli::{Cli, Commands},
    handler::{handle_analyze, handle_map},
};

/// 程序的主入口点
///
/// 负责解析命令行参数，并根据指定的子命令（`analyze` 或 `map`）
/// 将执行分派到相应的处理函数
fn main() -> anyhow::Result<()> {
    // 解析命令行参数
    let cli = Cli::parse();

    // 根据子命令调用相应的处理函数
    match cli.command {
        Commands::Analyze(args) => handle_analyze(args),
        Commands::Map(args) => handle_map(args),
    }
}
