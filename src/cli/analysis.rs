//! # 能带分析子命令 CLI 定义
//!
//! - `run`: 完整流程
//! - `gap`: 带隙弯曲
//! - `bands`: 能带边
//! - `mass`: 有效质量
//!
//! ## 依赖关系
//! - 被 `cli/mod.rs` 使用
//! - 参数传递给 `commands/` 相应模块

use super::common::CommonArgs;
use clap::Args;

/// run 子命令参数
#[derive(Args, Debug)]
pub struct RunArgs {
    #[command(flatten)]
    pub common: CommonArgs,
}

/// gap 子命令参数
#[derive(Args, Debug)]
pub struct GapArgs {
    #[command(flatten)]
    pub common: CommonArgs,

    /// Compositions to tabulate (comma separated, e.g. "0,0.25,0.5")
    #[arg(long, value_delimiter = ',', default_value = "0,0.25,0.5,0.75,1")]
    pub at: Vec<f64>,
}

/// bands 子命令参数
#[derive(Args, Debug)]
pub struct BandsArgs {
    #[command(flatten)]
    pub common: CommonArgs,

    /// Temperatures in K (repeatable; overrides the config list)
    #[arg(short, long = "temperature")]
    pub temperatures: Vec<f64>,

    /// Ignore temperature dependence (single run at 0 K)
    #[arg(long, default_value_t = false, conflicts_with = "temperatures")]
    pub no_temperature: bool,
}

/// mass 子命令参数
#[derive(Args, Debug)]
pub struct MassArgs {
    #[command(flatten)]
    pub common: CommonArgs,
}
