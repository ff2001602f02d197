//! # well 子命令 CLI 定义
//!
//! ## 依赖关系
//! - 被 `cli/mod.rs` 使用
//! - 参数传递给 `commands/well.rs`

use super::common::CommonArgs;
use clap::Args;

/// well 子命令参数
#[derive(Args, Debug)]
pub struct WellArgs {
    #[command(flatten)]
    pub common: CommonArgs,

    /// Well widths in Å (repeatable; overrides the config list)
    #[arg(short, long = "width")]
    pub widths: Vec<f64>,

    /// Well compositions in [0, 1] (repeatable; overrides the config list)
    #[arg(long = "composition")]
    pub compositions: Vec<f64>,

    /// Temperatures in K (repeatable; overrides the config list)
    #[arg(short, long = "temperature")]
    pub temperatures: Vec<f64>,

    /// Only print transition energies, skip plot generation
    #[arg(long, default_value_t = false)]
    pub no_plot: bool,
}
