//! # 有效质量
//!
//! 电子有效质量线性插值；空穴有效质量由 Luttinger 参数给出：
//! m_lh = 1 / (γ1 + 2γ2)，m_hh = 1 / (γ1 - 2γ2)，单位为自由电子质量。
//!
//! ## 依赖关系
//! - 被 `commands/mass.rs`, `commands/run.rs` 调用

use crate::models::{CompositionGrid, MassParameters};

/// 有效质量序列（m_e）
#[derive(Debug, Clone)]
pub struct EffectiveMasses {
    pub electron: Vec<f64>,
    pub light_hole: Vec<f64>,
    pub heavy_hole: Vec<f64>,
}

pub fn effective_masses(grid: &CompositionGrid, params: &MassParameters) -> EffectiveMasses {
    let gamma_1 = params.gamma_1.interpolate(grid);
    let gamma_2 = params.gamma_2.interpolate(grid);

    let (light_hole, heavy_hole): (Vec<f64>, Vec<f64>) = gamma_1
        .iter()
        .zip(&gamma_2)
        .map(|(g1, g2)| (1.0 / (g1 + 2.0 * g2), 1.0 / (g1 - 2.0 * g2)))
        .unzip();

    EffectiveMasses {
        electron: params.electron_mass.interpolate(grid),
        light_hole,
        heavy_hole,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_endpoint_masses() {
        let grid = CompositionGrid::standard();
        let masses = effective_masses(&grid, &MassParameters::default());

        assert_relative_eq!(masses.electron[0], 0.0135);
        assert_relative_eq!(masses.electron[100], 0.026);
        assert_relative_eq!(masses.light_hole[0], 1.0 / 65.8, epsilon = 1e-12);
        assert_relative_eq!(masses.heavy_hole[0], 1.0 / 3.8, epsilon = 1e-12);
        assert_relative_eq!(masses.light_hole[100], 1.0 / 37.0, epsilon = 1e-12);
        assert_relative_eq!(masses.heavy_hole[100], 1.0 / 3.0, epsilon = 1e-12);
    }

    #[test]
    fn test_heavy_holes_heavier_than_light_holes() {
        let grid = CompositionGrid::standard();
        let masses = effective_masses(&grid, &MassParameters::default());
        assert_eq!(masses.heavy_hole.len(), grid.len());
        for i in 0..grid.len() {
            assert!(masses.heavy_hole[i] > masses.light_hole[i]);
        }
    }
}
