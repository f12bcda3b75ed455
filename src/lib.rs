//! # lsb_capacity 库
//!
//! 本库包含 LSB 隐写容量分析工具的核心逻辑。

// 声明库包含的所有模块。

pub mod cli;
pub mod constants;
pub mod grid;
pub mod handler;
pub mod predictor;
