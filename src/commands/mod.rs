//! # 命令执行模块
//!
//! 实现各子命令的业务逻辑。
//!
//! ## 依赖关系
//! - 被 `main.rs` 调用
//! - 使用 `cli/`, `models/`, `physics/`, `render/`, `utils/`
//! - 子模块: session, run, gap, bands, well, thickness, mass, init

pub mod bands;
pub mod gap;
pub mod init;
pub mod mass;
pub mod run;
pub mod session;
pub mod thickness;
pub mod well;

use crate::cli::Commands;
use crate::error::Result;

/// 执行命令
pub fn run(cmd: Commands) -> Result<()> {
    match cmd {
        Commands::Run(args) => run::execute(args),
        Commands::Gap(args) => gap::execute(args),
        Commands::Bands(args) => bands::execute(args),
        Commands::Well(args) => well::execute(args),
        Commands::Thickness(args) => thickness::execute(args),
        Commands::Mass(args) => mass::execute(args),
        Commands::Init(args) => init::execute(args),
    }
}
