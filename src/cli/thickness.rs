//! # thickness 子命令 CLI 定义
//!
//! ## 依赖关系
//! - 被 `cli/mod.rs` 使用
//! - 参数传递给 `commands/thickness.rs`

use super::common::CommonArgs;
use clap::Args;

/// thickness 子命令参数
#[derive(Args, Debug)]
pub struct ThicknessArgs {
    #[command(flatten)]
    pub common: CommonArgs,

    /// Convergence tolerance on |f(h)| (overrides the config)
    #[arg(long)]
    pub tolerance: Option<f64>,

    /// Initial bracket in Å (e.g., "10-7000"; overrides the config)
    #[arg(long)]
    pub bracket: Option<String>,

    /// Maximum bisection iterations per composition (overrides the config)
    #[arg(long)]
    pub max_iterations: Option<usize>,
}
