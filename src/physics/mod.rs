//! # 能带物理计算模块
//!
//! 所有公式都是组分的闭式函数，在固定网格上逐点求值。
//!
//! ## 子模块
//! - `bandgap`: 带隙弯曲
//! - `temperature`: Varshni 温度修正
//! - `strain`: 能带边与应变
//! - `bisection`: 二分法求根
//! - `critical`: Matthews–Blakeslee 临界厚度
//! - `well`: 量子阱剖面
//! - `mass`: 有效质量
//!
//! ## 依赖关系
//! - 被 `commands/` 使用
//! - 使用 `models/` 的网格和参数

pub mod bandgap;
pub mod bisection;
pub mod critical;
pub mod mass;
pub mod strain;
pub mod temperature;
pub mod well;

pub use bisection::Bisection;
pub use critical::{critical_thickness, CriticalThickness};
pub use mass::{effective_masses, EffectiveMasses};
pub use strain::BandSet;
pub use well::WellProfile;
