//! # 带隙温度依赖（Varshni 公式）
//!
//! E_g(T) = E_g(0) - α T² / (T + β)，α、β 按组分线性插值。
//!
//! ## 依赖关系
//! - 被 `commands/bands.rs`, `commands/well.rs`, `commands/run.rs` 调用
//! - 使用 `models/material.rs` 的 TemperatureParameters

use crate::models::{CompositionGrid, TemperatureParameters};

/// 对带隙序列应用温度修正
pub fn varshni(
    gap: &[f64],
    grid: &CompositionGrid,
    params: &TemperatureParameters,
    temperature: f64,
) -> Vec<f64> {
    let alpha = params.alpha.interpolate(grid);
    let beta = params.beta.interpolate(grid);

    gap.iter()
        .zip(alpha.iter().zip(&beta))
        .map(|(e, (a, b))| e - a * temperature * temperature / (temperature + b))
        .collect()
}
