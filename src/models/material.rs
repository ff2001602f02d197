//! # 材料参数数据模型
//!
//! 三元合金 A_x B_(1-x) C 的端点参数及其线性插值。
//! 所有成对参数的第一个值对应 x = 0（B_C），第二个值对应 x = 1（A_C）。
//!
//! ## 依赖关系
//! - 被 `models/config.rs` 组合成完整配置
//! - 被 `physics/` 所有计算使用

use crate::models::grid::CompositionGrid;
use serde::{Deserialize, Serialize};

/// 端点参数对 (x = 0 的值, x = 1 的值)
///
/// 配置文件中写作两元素数组，例如 `c11 = [684.7, 832.9]`。
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "Vec<f64>", into = "(f64, f64)")]
pub struct ParameterPair {
    pub at_zero: f64,
    pub at_one: f64,
}

impl ParameterPair {
    pub const fn new(at_zero: f64, at_one: f64) -> Self {
        Self { at_zero, at_one }
    }

    /// 单点线性插值: v0 (1 - x) + v1 x
    pub fn at(&self, x: f64) -> f64 {
        self.at_zero * (1.0 - x) + self.at_one * x
    }

    /// 在整个组分网格上插值
    pub fn interpolate(&self, grid: &CompositionGrid) -> Vec<f64> {
        grid.points().iter().map(|&x| self.at(x)).collect()
    }
}

impl TryFrom<Vec<f64>> for ParameterPair {
    type Error = String;

    fn try_from(values: Vec<f64>) -> Result<Self, Self::Error> {
        match values.as_slice() {
            [at_zero, at_one] => Ok(Self::new(*at_zero, *at_one)),
            _ => Err(format!(
                "expected [at_zero, at_one], got {} values",
                values.len()
            )),
        }
    }
}

impl From<ParameterPair> for (f64, f64) {
    fn from(pair: ParameterPair) -> Self {
        (pair.at_zero, pair.at_one)
    }
}

/// 单个对称点的带隙参数
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct GapParameters {
    /// 对称点标签（Γ, X, L ...）
    pub label: String,
    /// x = 0 端点的带隙（eV）
    pub e_at_zero: f64,
    /// x = 1 端点的带隙（eV）
    pub e_at_one: f64,
    /// 弯曲参数（eV）
    pub bowing: f64,
}

impl GapParameters {
    pub fn new(label: impl Into<String>, e_at_zero: f64, e_at_one: f64, bowing: f64) -> Self {
        Self {
            label: label.into(),
            e_at_zero,
            e_at_one,
            bowing,
        }
    }

    /// 二次式 E = a + b x + c x² 的系数，其中 b = E(1) - a - c
    pub fn coefficients(&self) -> (f64, f64, f64) {
        let a = self.e_at_zero;
        let c = self.bowing;
        let b = self.e_at_one - a - c;
        (a, b, c)
    }
}

/// 能带与应变参数
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct BandParameters {
    /// 是否输出能带图
    pub plot: bool,
    /// 价带偏移 VBO（eV）
    pub vbo: ParameterPair,
    /// 剪切形变势 b（eV）
    pub b: ParameterPair,
    /// 导带静水压形变势 a_c（eV）
    pub a_c: ParameterPair,
    /// 价带静水压形变势 a_v（eV）
    pub a_v: ParameterPair,
    /// 弹性常数 C11（GPa）
    pub c11: ParameterPair,
    /// 弹性常数 C12（GPa）
    pub c12: ParameterPair,
    /// 晶格常数（Å）
    pub lattice_a: ParameterPair,
    /// 衬底晶格常数（Å）
    pub lattice_a0: f64,
}

impl Default for BandParameters {
    fn default() -> Self {
        Self {
            plot: true,
            vbo: ParameterPair::new(0.0, -0.59),
            b: ParameterPair::new(-2.0, -1.8),
            a_c: ParameterPair::new(-6.94, -5.08),
            a_v: ParameterPair::new(-0.36, -1.00),
            c11: ParameterPair::new(684.7, 832.9),
            c12: ParameterPair::new(373.5, 452.6),
            lattice_a: ParameterPair::new(6.4794, 6.0583),
            lattice_a0: 6.0583,
        }
    }
}

impl BandParameters {
    /// 量子阱能量参考点：x = 1 端点的价带偏移
    pub fn reference_energy(&self) -> f64 {
        self.vbo.at_one
    }
}

/// Varshni 温度参数
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct TemperatureParameters {
    /// 是否考虑温度依赖
    pub enabled: bool,
    /// 计算温度列表（K）
    pub temperatures: Vec<f64>,
    /// α（eV/K）
    pub alpha: ParameterPair,
    /// β（K）
    pub beta: ParameterPair,
}

impl Default for TemperatureParameters {
    fn default() -> Self {
        Self {
            enabled: true,
            temperatures: vec![0.0, 10.0, 300.0],
            alpha: ParameterPair::new(0.32e-3, 0.276e-3),
            beta: ParameterPair::new(170.0, 93.0),
        }
    }
}

impl TemperatureParameters {
    /// 实际计算的温度；关闭温度依赖时只在 0 K 计算一次
    pub fn effective_temperatures(&self) -> Vec<f64> {
        if self.enabled {
            self.temperatures.clone()
        } else {
            vec![0.0]
        }
    }
}

/// 量子阱参数
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct WellParameters {
    /// 阱宽（Å）
    pub widths: Vec<f64>,
    /// 阱区组分
    pub compositions: Vec<f64>,
    /// 势垒组分（默认 x = 1，即衬底材料）
    pub barrier_composition: f64,
}

impl Default for WellParameters {
    fn default() -> Self {
        Self {
            widths: vec![100.0, 200.0, 300.0],
            compositions: vec![0.25, 0.5, 0.75],
            barrier_composition: 1.0,
        }
    }
}

/// 有效质量参数
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct MassParameters {
    /// Luttinger 参数 γ1
    pub gamma_1: ParameterPair,
    /// Luttinger 参数 γ2
    pub gamma_2: ParameterPair,
    /// 电子有效质量（m_e）
    pub electron_mass: ParameterPair,
}

impl Default for MassParameters {
    fn default() -> Self {
        Self {
            gamma_1: ParameterPair::new(34.8, 20.0),
            gamma_2: ParameterPair::new(15.5, 8.5),
            electron_mass: ParameterPair::new(0.0135, 0.026),
        }
    }
}

/// 临界厚度求根参数
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct CriticalParameters {
    /// 二分法初始区间下限（Å）
    pub h_min: f64,
    /// 二分法初始区间上限（Å）
    pub h_max: f64,
    /// |f(h)| 收敛容差
    pub tolerance: f64,
    /// 最大迭代次数
    pub max_iterations: usize,
}

impl Default for CriticalParameters {
    fn default() -> Self {
        Self {
            h_min: 10.0,
            h_max: 7000.0,
            tolerance: 1e-12,
            max_iterations: 500,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_interpolate_endpoints() {
        let grid = CompositionGrid::standard();
        let pair = ParameterPair::new(684.7, 832.9);
        let values = pair.interpolate(&grid);

        assert_eq!(values.len(), grid.len());
        assert_relative_eq!(values[0], 684.7);
        assert_relative_eq!(values[100], 832.9);
    }

    #[test]
    fn test_interpolate_is_affine() {
        let grid = CompositionGrid::standard();
        let pair = ParameterPair::new(-6.94, -5.08);
        let values = pair.interpolate(&grid);

        // 任意两个网格点的加权组合等于加权位置处的插值
        for (i, j, t) in [(10, 30, 0.5), (0, 100, 0.25), (40, 90, 0.8)] {
            let x = (1.0 - t) * grid.points()[i] + t * grid.points()[j];
            let blended = (1.0 - t) * values[i] + t * values[j];
            assert_relative_eq!(pair.at(x), blended, epsilon = 1e-12);
        }

        // 单调
        assert!(values.windows(2).all(|w| w[1] >= w[0]));
    }

    #[test]
    fn test_pair_requires_two_values() {
        assert_eq!(
            ParameterPair::try_from(vec![6.47, 6.06]).unwrap(),
            ParameterPair::new(6.47, 6.06)
        );
        let err = ParameterPair::try_from(vec![1.0, 2.0, 3.0]).unwrap_err();
        assert_eq!(err, "expected [at_zero, at_one], got 3 values");
        assert!(ParameterPair::try_from(vec![1.0]).is_err());
        assert!(ParameterPair::try_from(Vec::new()).is_err());
    }

    #[test]
    fn test_gap_coefficients() {
        let gamma = GapParameters::new("Γ", 0.235, 0.417, 0.67);
        let (a, b, c) = gamma.coefficients();
        assert_relative_eq!(a, 0.235);
        assert_relative_eq!(b, -0.488, epsilon = 1e-12);
        assert_relative_eq!(c, 0.67);
    }

    #[test]
    fn test_effective_temperatures() {
        let mut params = TemperatureParameters::default();
        assert_eq!(params.effective_temperatures(), vec![0.0, 10.0, 300.0]);
        params.enabled = false;
        assert_eq!(params.effective_temperatures(), vec![0.0]);
    }

    #[test]
    fn test_reference_energy() {
        assert_relative_eq!(BandParameters::default().reference_energy(), -0.59);
    }
}
