//! # 数据模型模块
//!
//! 定义采样网格、材料参数和完整配置。
//!
//! ## 依赖关系
//! - 被 `physics/`、`render/` 和 `commands/` 使用
//! - 子模块: grid, material, config

pub mod config;
pub mod grid;
pub mod material;

pub use config::{ImageFormat, MaterialConfig, OutputConfig};
pub use grid::{CompositionGrid, PositionGrid};
pub use material::{
    BandParameters, CriticalParameters, GapParameters, MassParameters, TemperatureParameters,
};
