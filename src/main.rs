//! # alloyband - 三元半导体合金能带计算工具
//!
//! 计算 III-V 三元合金（默认 InAs_x Sb_(1-x) / InAs 衬底）的能带参数随组分的变化，
//! 并输出图表。
//!
//! ## 子命令
//! - `run`       - 完整流程
//! - `gap`       - 带隙弯曲曲线
//! - `bands`     - 应变能带边（可选 Varshni 温度修正）
//! - `well`      - 量子阱剖面与跃迁能量
//! - `thickness` - Matthews–Blakeslee 临界厚度
//! - `mass`      - 有效质量
//! - `init`      - 写出默认配置
//!
//! ## 依赖关系
//! ```text
//! main.rs
//!   ├── cli/        (命令行参数定义)
//!   ├── commands/   (命令执行逻辑)
//!   │     ├── physics/   (能带物理计算)
//!   │     ├── render/    (图表与 CSV 输出)
//!   │     └── models/    (网格、参数与配置)
//!   ├── utils/      (工具函数)
//!   └── error.rs    (错误处理)
//! ```

mod cli;
mod commands;
mod error;
mod models;
mod physics;
mod render;
mod utils;

use clap::Parser;
use cli::Cli;

fn main() {
    // Initialize colored output for Windows compatibility
    #[cfg(windows)]
    colored::control::set_virtual_terminal(true).ok();

    let cli = Cli::parse();

    if let Err(e) = commands::run(cli.command) {
        utils::output::print_error(&format!("{}", e));
        std::process::exit(1);
    }
}
