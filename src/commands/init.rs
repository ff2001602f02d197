//! # init 子命令实现
//!
//! 把内置的 InAsSb/InAs 参数写成 TOML 配置文件，作为自定义材料的起点。
//!
//! ## 依赖关系
//! - 使用 `cli/init.rs` 定义的 InitArgs
//! - 使用 `models/config.rs` 序列化配置

use crate::cli::init::InitArgs;
use crate::commands::session::ensure_dir;
use crate::error::{AlloyBandError, Result};
use crate::models::MaterialConfig;
use crate::utils::output;

use std::fs;

/// 执行 init 子命令
pub fn execute(args: InitArgs) -> Result<()> {
    output::print_header("Write Default Configuration");

    if args.output.exists() && !args.force {
        return Err(AlloyBandError::FileExists {
            path: args.output.display().to_string(),
        });
    }

    if let Some(parent) = args.output.parent() {
        if !parent.as_os_str().is_empty() {
            ensure_dir(parent)?;
        }
    }

    let content = MaterialConfig::default().to_toml_string()?;
    fs::write(&args.output, content).map_err(|e| AlloyBandError::FileWriteError {
        path: args.output.display().to_string(),
        source: e,
    })?;

    output::print_success(&format!("Config written to '{}'", args.output.display()));
    Ok(())
}
