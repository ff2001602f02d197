//! # 带隙弯曲计算
//!
//! E(x) = a + b x + c x²，其中 c 为弯曲参数，b = E(1) - a - c。
//!
//! ## 依赖关系
//! - 被 `commands/gap.rs`, `commands/run.rs` 调用
//! - 使用 `models/material.rs` 的 GapParameters

use crate::models::{CompositionGrid, GapParameters};

/// 单点能量
pub fn energy_at(a: f64, b: f64, c: f64, x: f64) -> f64 {
    a + b * x + c * x * x
}

/// 在组分网格上计算能量
pub fn energy_series(a: f64, b: f64, c: f64, grid: &CompositionGrid) -> Vec<f64> {
    grid.points()
        .iter()
        .map(|&x| energy_at(a, b, c, x))
        .collect()
}

/// 计算某一对称点的带隙曲线
pub fn gap_series(params: &GapParameters, grid: &CompositionGrid) -> Vec<f64> {
    let (a, b, c) = params.coefficients();
    energy_series(a, b, c, grid)
}
