//! # 公共参数
//!
//! 所有计算子命令共享的配置和输出参数。
//!
//! ## 依赖关系
//! - 被 `cli/` 各子命令 flatten
//! - 由 `commands/session.rs` 应用到配置上

use crate::models::ImageFormat;

use clap::Args;
use std::path::PathBuf;

/// 配置与输出参数
#[derive(Args, Debug, Clone, Default)]
pub struct CommonArgs {
    /// Material configuration file (TOML); built-in InAsSb defaults if omitted
    #[arg(short, long, env = "ALLOYBAND_CONFIG")]
    pub config: Option<PathBuf>,

    /// Directory for plots and data files (overrides the config)
    #[arg(short, long)]
    pub output_dir: Option<PathBuf>,

    /// Image format (overrides the config)
    #[arg(short, long, value_enum)]
    pub format: Option<ImageFormat>,

    /// Also export every plotted series as CSV
    #[arg(long, default_value_t = false)]
    pub csv: bool,
}
