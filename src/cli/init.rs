//! # init 子命令 CLI 定义
//!
//! ## 依赖关系
//! - 被 `cli/mod.rs` 使用
//! - 参数传递给 `commands/init.rs`

use clap::Args;
use std::path::PathBuf;

/// init 子命令参数
#[derive(Args, Debug)]
pub struct InitArgs {
    /// Path of the configuration file to write
    #[arg(short, long, default_value = "alloyband.toml")]
    pub output: PathBuf,

    /// Overwrite an existing file
    #[arg(long, default_value_t = false)]
    pub force: bool,
}
