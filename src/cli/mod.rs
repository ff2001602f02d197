//! # CLI 模块
//!
//! 使用 `clap` 定义命令行参数和子命令。
//!
//! ## 命令结构
//! - `run`: 完整计算流程
//! - `gap`: 带隙弯曲曲线
//! - `bands`: 应变能带边（可选温度依赖）
//! - `well`: 量子阱剖面
//! - `thickness`: 临界厚度
//! - `mass`: 有效质量
//! - `init`: 写出默认配置文件
//!
//! ## 依赖关系
//! - 被 `main.rs` 使用
//! - 子模块: common, analysis, well, thickness, init

pub mod analysis;
pub mod common;
pub mod init;
pub mod thickness;
pub mod well;

use clap::{Parser, Subcommand};

/// alloyband - 三元合金能带计算工具
#[derive(Parser)]
#[command(name = "alloyband")]
#[command(author = "Changjiang Wu")]
#[command(version)]
#[command(about = "Band-structure toolkit for III-V ternary semiconductor alloys", long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

/// 可用的子命令
#[derive(Subcommand)]
pub enum Commands {
    /// Run the full pipeline: bowing, critical thickness, bands, wells, masses
    Run(analysis::RunArgs),

    /// Plot bandgap bowing curves for every symmetry point
    Gap(analysis::GapArgs),

    /// Plot unstrained and strained band edges
    Bands(analysis::BandsArgs),

    /// Build quantum-well profiles and report transition energies
    Well(well::WellArgs),

    /// Compute the Matthews-Blakeslee critical thickness
    Thickness(thickness::ThicknessArgs),

    /// Plot electron, light-hole and heavy-hole effective masses
    Mass(analysis::MassArgs),

    /// Write the default material configuration as TOML
    Init(init::InitArgs),
}
