//! # 能带边与应变
//!
//! 由带隙序列构造未应变的价带/导带，再按双轴应变计算
//! 应变后的导带、重空穴带和轻空穴带。
//!
//! ## 公式
//! - ε_x = (a0 - a(x)) / a(x)
//! - ε_z = -2 ε_x C12 / C11
//! - ΔE_s  = -b (ε_z - ε_x)
//! - ΔE_hc = a_c (2ε_x + ε_z)
//! - ΔE_hv = a_v (2ε_x + ε_z)
//!
//! ## 依赖关系
//! - 被 `commands/bands.rs`, `commands/well.rs`, `commands/run.rs` 调用
//! - 使用 `models/material.rs` 的 BandParameters

use crate::models::{BandParameters, CompositionGrid};

/// 每个组分点的应变量
#[derive(Debug, Clone)]
pub struct StrainProfile {
    /// 面内应变 ε_x
    pub eps_x: Vec<f64>,
    /// 生长方向应变 ε_z
    pub eps_z: Vec<f64>,
    /// 应变劈裂 ΔE_s（eV）
    pub split: Vec<f64>,
    /// 导带静水压位移 ΔE_hc（eV）
    pub hydrostatic_conduction: Vec<f64>,
    /// 价带静水压位移 ΔE_hv（eV）
    pub hydrostatic_valence: Vec<f64>,
}

/// 计算应变量
pub fn strain_profile(grid: &CompositionGrid, bands: &BandParameters) -> StrainProfile {
    let lattice = bands.lattice_a.interpolate(grid);
    let c11 = bands.c11.interpolate(grid);
    let c12 = bands.c12.interpolate(grid);
    let b = bands.b.interpolate(grid);
    let a_c = bands.a_c.interpolate(grid);
    let a_v = bands.a_v.interpolate(grid);

    let n = grid.len();
    let mut profile = StrainProfile {
        eps_x: Vec::with_capacity(n),
        eps_z: Vec::with_capacity(n),
        split: Vec::with_capacity(n),
        hydrostatic_conduction: Vec::with_capacity(n),
        hydrostatic_valence: Vec::with_capacity(n),
    };

    for i in 0..n {
        let eps_x = (bands.lattice_a0 - lattice[i]) / lattice[i];
        let eps_z = eps_x * -2.0 * (c12[i] / c11[i]);
        let volume = 2.0 * eps_x + eps_z;

        profile.eps_x.push(eps_x);
        profile.eps_z.push(eps_z);
        profile.split.push(-b[i] * (eps_z - eps_x));
        profile.hydrostatic_conduction.push(a_c[i] * volume);
        profile.hydrostatic_valence.push(a_v[i] * volume);
    }

    profile
}

/// 未应变的 (价带, 导带)
pub fn unstrained_bands(
    gap: &[f64],
    grid: &CompositionGrid,
    bands: &BandParameters,
) -> (Vec<f64>, Vec<f64>) {
    let valence = bands.vbo.interpolate(grid);
    let conduction = valence.iter().zip(gap).map(|(v, g)| v + g).collect();
    (valence, conduction)
}

/// 同一网格上的全部能带边
#[derive(Debug, Clone)]
pub struct BandSet {
    /// 价带 E_V
    pub valence: Vec<f64>,
    /// 导带 E_C
    pub conduction: Vec<f64>,
    /// 应变导带
    pub strained_conduction: Vec<f64>,
    /// 重空穴带 E_HH
    pub heavy_hole: Vec<f64>,
    /// 轻空穴带 E_LH
    pub light_hole: Vec<f64>,
}

impl BandSet {
    /// 由带隙序列构造所有能带边
    pub fn compose(gap: &[f64], grid: &CompositionGrid, bands: &BandParameters) -> Self {
        let (valence, conduction) = unstrained_bands(gap, grid, bands);
        let strain = strain_profile(grid, bands);

        let strained_conduction = conduction
            .iter()
            .zip(&strain.hydrostatic_conduction)
            .map(|(c, dc)| c + dc)
            .collect();

        let (heavy_hole, light_hole): (Vec<f64>, Vec<f64>) = valence
            .iter()
            .zip(strain.hydrostatic_valence.iter().zip(&strain.split))
            .map(|(v, (dv, ds))| (v + dv + ds, v + dv - ds))
            .unzip();

        Self {
            valence,
            conduction,
            strained_conduction,
            heavy_hole,
            light_hole,
        }
    }
}
