//! # 量子阱能带剖面
//!
//! 在 1001 点的位置网格上构造阶梯形能带剖面：
//! 阱区 [trunc(500 - w/2), trunc(501 + w/2)) 取阱材料组分处的能带值，
//! 阱外取势垒组分处的能带值，二者都以参考能量（x = 1 端点的 VBO）为零点。
//!
//! 阱外的五条能带（包括导带）都取自同一个势垒组分，默认 x = 1 即衬底本身。
//! 阱外导带因此等于势垒材料的带隙（InAs 在 0 K 为 0.417 eV），
//! 而不是某个对称点带隙曲线在 x = 0 处的常数值（L 点为 0.93 eV）。
//!
//! ## 依赖关系
//! - 被 `commands/well.rs`, `commands/run.rs` 调用
//! - 使用 `physics/strain.rs` 的 BandSet
//! - 使用 `models/grid.rs` 的网格

use crate::error::Result;
use crate::models::grid::WELL_CENTER;
use crate::models::{CompositionGrid, PositionGrid};
use crate::physics::strain::BandSet;

/// 阱中心处的跃迁能量（eV）
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Transitions {
    /// 应变：E_C(strained) - E_HH
    pub strained: f64,
    /// 无应变：E_C - E_V
    pub unstrained: f64,
}

/// 某一组分点上的五条能带边（已减去参考能量）
#[derive(Debug, Clone, Copy, PartialEq)]
struct BandLevels {
    conduction: f64,
    heavy_hole: f64,
    light_hole: f64,
    conduction_unstrained: f64,
    valence_unstrained: f64,
}

impl BandLevels {
    fn at(bands: &BandSet, index: usize, reference: f64) -> Self {
        Self {
            conduction: bands.strained_conduction[index] - reference,
            heavy_hole: bands.heavy_hole[index] - reference,
            light_hole: bands.light_hole[index] - reference,
            conduction_unstrained: bands.conduction[index] - reference,
            valence_unstrained: bands.valence[index] - reference,
        }
    }
}

/// 量子阱剖面
#[derive(Debug, Clone)]
pub struct WellProfile {
    /// 阱宽（Å）
    pub width: f64,
    /// 阱区组分（已对齐到网格）
    pub composition: f64,
    /// 位置（Å）
    pub positions: Vec<f64>,
    /// 应变导带
    pub conduction: Vec<f64>,
    /// 重空穴带
    pub heavy_hole: Vec<f64>,
    /// 轻空穴带
    pub light_hole: Vec<f64>,
    /// 无应变导带
    pub conduction_unstrained: Vec<f64>,
    /// 无应变价带
    pub valence_unstrained: Vec<f64>,
}

impl WellProfile {
    /// 构造量子阱剖面
    ///
    /// 组分超出 [0, 1] 时返回 `CompositionOutOfRange`。
    pub fn build(
        bands: &BandSet,
        grid: &CompositionGrid,
        positions: &PositionGrid,
        width: f64,
        composition: f64,
        barrier_composition: f64,
        reference: f64,
    ) -> Result<Self> {
        let well_index = grid.index_of(composition)?;
        let barrier_index = grid.index_of(barrier_composition)?;

        let inside = BandLevels::at(bands, well_index, reference);
        let outside = BandLevels::at(bands, barrier_index, reference);
        let window = positions.well_window(width);

        let n = positions.len();
        let level = |pick: fn(&BandLevels) -> f64| -> Vec<f64> {
            (0..n)
                .map(|i| {
                    if window.contains(&i) {
                        pick(&inside)
                    } else {
                        pick(&outside)
                    }
                })
                .collect()
        };

        Ok(Self {
            width,
            composition: grid.points()[well_index],
            positions: positions.points().to_vec(),
            conduction: level(|l| l.conduction),
            heavy_hole: level(|l| l.heavy_hole),
            light_hole: level(|l| l.light_hole),
            conduction_unstrained: level(|l| l.conduction_unstrained),
            valence_unstrained: level(|l| l.valence_unstrained),
        })
    }

    /// 阱中心（位置 500）处的跃迁能量
    pub fn transitions(&self) -> Transitions {
        let c = WELL_CENTER.min(self.positions.len().saturating_sub(1));
        Transitions {
            strained: self.conduction[c] - self.heavy_hole[c],
            unstrained: self.conduction_unstrained[c] - self.valence_unstrained[c],
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::AlloyBandError;
    use crate::models::{BandParameters, GapParameters};
    use crate::physics::bandgap;
    use approx::assert_relative_eq;

    fn band_set(grid: &CompositionGrid) -> BandSet {
        let gap = bandgap::gap_series(&GapParameters::new("Γ", 0.235, 0.417, 0.67), grid);
        BandSet::compose(&gap, grid, &BandParameters::default())
    }

    fn build(width: f64, composition: f64) -> Result<WellProfile> {
        let grid = CompositionGrid::standard();
        let bands = band_set(&grid);
        WellProfile::build(
            &bands,
            &grid,
            &PositionGrid::standard(),
            width,
            composition,
            1.0,
            -0.59,
        )
    }

    #[test]
    fn test_window_for_200_angstrom() {
        let grid = CompositionGrid::standard();
        let bands = band_set(&grid);
        let profile = build(200.0, 0.5).unwrap();

        assert_eq!(profile.positions.len(), 1001);

        let inside = bands.heavy_hole[50] + 0.59;
        let outside = bands.heavy_hole[100] + 0.59;
        for (i, value) in profile.heavy_hole.iter().enumerate() {
            if (400..601).contains(&i) {
                assert_relative_eq!(*value, inside);
            } else {
                assert_relative_eq!(*value, outside);
            }
        }
    }

    #[test]
    fn test_barrier_is_substrate() {
        let profile = build(100.0, 0.25).unwrap();
        // InAs 势垒：价带在零点，导带为 InAs 带隙
        assert_relative_eq!(profile.valence_unstrained[0], 0.0, epsilon = 1e-12);
        assert_relative_eq!(profile.heavy_hole[1000], 0.0, epsilon = 1e-12);
        assert_relative_eq!(profile.conduction_unstrained[0], 0.417, epsilon = 1e-12);
        assert_relative_eq!(profile.conduction[0], 0.417, epsilon = 1e-12);
    }

    #[test]
    fn test_exterior_follows_barrier_composition() {
        let grid = CompositionGrid::standard();
        let bands = band_set(&grid);
        let profile = WellProfile::build(
            &bands,
            &grid,
            &PositionGrid::standard(),
            200.0,
            0.5,
            0.0,
            -0.59,
        )
        .unwrap();

        // InSb 势垒：导带为 InSb 的 Γ 带隙加上应变修正
        assert_relative_eq!(
            profile.conduction[0],
            bands.strained_conduction[0] + 0.59,
            epsilon = 1e-12
        );
        assert_relative_eq!(
            profile.conduction_unstrained[1000] - profile.valence_unstrained[1000],
            0.235,
            epsilon = 1e-12
        );
        // InSb 的 VBO 为 0，相对 InAs VBO 抬高 0.59 eV
        assert_relative_eq!(profile.conduction_unstrained[0], 0.825, epsilon = 1e-12);
    }

    #[test]
    fn test_window_symmetric_about_center() {
        for width in [100.0, 200.0, 300.0] {
            let profile = build(width, 0.75).unwrap();
            let well_level = profile.heavy_hole[500];
            let inside: Vec<usize> = (0..profile.heavy_hole.len())
                .filter(|i| profile.heavy_hole[*i] == well_level)
                .collect();
            let left = 500 - inside[0];
            let right = inside[inside.len() - 1] - 500;
            assert_eq!(left, right);
            assert_eq!(inside.len(), width as usize + 1);
        }
    }

    #[test]
    fn test_transitions_at_center() {
        let grid = CompositionGrid::standard();
        let bands = band_set(&grid);
        let profile = build(300.0, 0.5).unwrap();
        let t = profile.transitions();

        assert_relative_eq!(
            t.strained,
            bands.strained_conduction[50] - bands.heavy_hole[50],
            epsilon = 1e-12
        );
        assert_relative_eq!(
            t.unstrained,
            bands.conduction[50] - bands.valence[50],
            epsilon = 1e-12
        );
    }

    #[test]
    fn test_composition_out_of_range() {
        let err = build(200.0, 1.5).unwrap_err();
        assert!(matches!(err, AlloyBandError::CompositionOutOfRange(_)));
    }
}
