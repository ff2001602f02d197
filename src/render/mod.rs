//! # 图表与数据输出模块
//!
//! ## 子模块
//! - `chart`: 通用折线图
//! - `well`: 量子阱双子图
//! - `export`: CSV 导出
//!
//! ## 依赖关系
//! - 被 `commands/` 使用
//! - 使用 `physics/` 的计算结果

pub mod chart;
pub mod export;
pub mod well;
