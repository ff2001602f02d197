//! # 临界厚度（Matthews–Blakeslee 模型）
//!
//! 对每个组分点求解
//!
//! ```text
//! g(h) = b / (2π f) · (1 - ν/4) / (1 + ν) · (ln(h / b) + 1) - h = 0
//! ```
//!
//! 其中 b = a(x)/√2 为 Burgers 矢量长度，ν = C12 / (C11 + C12)，
//! f = |a0 - a(x)| / a(x) 为晶格失配。
//!
//! 最后一个组分点（通常与衬底晶格匹配，f = 0）不求解，取前一点的 3 倍。
//!
//! ## 依赖关系
//! - 被 `commands/thickness.rs`, `commands/run.rs` 调用
//! - 使用 `physics/bisection.rs` 求根

use crate::models::{BandParameters, CompositionGrid};
use crate::physics::bisection::{Bisection, BisectionError};

use std::f64::consts::{PI, SQRT_2};

/// 最后一点的外推倍数
const EXTRAPOLATION_FACTOR: f64 = 3.0;

/// 单个组分点的 Matthews–Blakeslee 模型
#[derive(Debug, Clone, Copy)]
pub struct MatthewsBlakeslee {
    /// Burgers 矢量长度（Å）
    pub burgers: f64,
    /// 泊松比
    pub poisson: f64,
    /// 晶格失配（绝对值）
    pub mismatch: f64,
}

impl MatthewsBlakeslee {
    /// 网格第 index 点的模型参数
    pub fn at_index(grid: &CompositionGrid, bands: &BandParameters, index: usize) -> Self {
        let x = grid.points()[index];
        let lattice = bands.lattice_a.at(x);
        let c11 = bands.c11.at(x);
        let c12 = bands.c12.at(x);

        Self {
            burgers: lattice / SQRT_2,
            poisson: c12 / (c11 + c12),
            mismatch: ((bands.lattice_a0 - lattice) / lattice).abs(),
        }
    }

    /// 零点方程 g(h)
    pub fn residual(&self, h_c: f64) -> f64 {
        let b = self.burgers;
        let v = self.poisson;
        (b / (2.0 * self.mismatch * PI)) * ((1.0 - 0.25 * v) / (1.0 + v)) * ((h_c / b).ln() + 1.0)
            - h_c
    }
}

/// 临界厚度序列
#[derive(Debug, Clone)]
pub struct CriticalThickness {
    /// 每个组分点的临界厚度（Å），求根失败为 None
    pub values: Vec<Option<f64>>,
    /// 求根失败的点 (索引, 原因)
    pub failures: Vec<(usize, BisectionError)>,
}

impl CriticalThickness {
    /// 求根成功的点数（不含外推的最后一点）
    pub fn converged(&self) -> usize {
        self.values.len().saturating_sub(1) - self.failures.len()
    }
}

/// 计算整个组分网格上的临界厚度
///
/// `on_point` 在每个求根点之后调用一次（用于进度显示）。
pub fn critical_thickness<P>(
    grid: &CompositionGrid,
    bands: &BandParameters,
    solver: &Bisection,
    bracket: (f64, f64),
    mut on_point: P,
) -> CriticalThickness
where
    P: FnMut(usize),
{
    let solved = grid.len().saturating_sub(1);
    let mut values = Vec::with_capacity(grid.len());
    let mut failures = Vec::new();

    for index in 0..solved {
        let model = MatthewsBlakeslee::at_index(grid, bands, index);
        match solver.find_root(|h| model.residual(h), bracket.0, bracket.1) {
            Ok(h_c) => values.push(Some(h_c)),
            Err(e) => {
                values.push(None);
                failures.push((index, e));
            }
        }
        on_point(index);
    }

    if solved > 0 {
        let last = values[solved - 1].map(|h| EXTRAPOLATION_FACTOR * h);
        values.push(last);
    }

    CriticalThickness { values, failures }
}
