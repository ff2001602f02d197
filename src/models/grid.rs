//! # 采样网格
//!
//! 组分网格（101 点，步长 0.01）和量子阱位置网格（1001 点，单位 Å）。
//!
//! ## 依赖关系
//! - 被 `physics/` 所有计算使用
//! - 被 `render/` 用作横轴

use crate::error::{AlloyBandError, Result};

/// 组分网格点数
pub const COMPOSITION_POINTS: usize = 101;

/// 位置网格点数
pub const POSITION_POINTS: usize = 1001;

/// 量子阱中心位置（Å）
pub const WELL_CENTER: usize = 500;

/// 组分网格 x ∈ [0, 1]
#[derive(Debug, Clone, PartialEq)]
pub struct CompositionGrid {
    points: Vec<f64>,
}

impl CompositionGrid {
    /// 标准网格: x = i / 100, i = 0..=100
    pub fn standard() -> Self {
        let steps = (COMPOSITION_POINTS - 1) as f64;
        Self {
            points: (0..COMPOSITION_POINTS).map(|i| i as f64 / steps).collect(),
        }
    }

    pub fn points(&self) -> &[f64] {
        &self.points
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    /// 组分对应的网格索引（取最近的网格点）
    ///
    /// 四舍五入而不是截断：0.29 * 100 在浮点下为 28.999999999999996，
    /// 截断会落到 28，同时改变量子阱文件名中的组分编号。
    pub fn index_of(&self, composition: f64) -> Result<usize> {
        if !(0.0..=1.0).contains(&composition) {
            return Err(AlloyBandError::CompositionOutOfRange(composition));
        }
        let steps = (self.points.len() - 1) as f64;
        Ok((composition * steps).round() as usize)
    }

    /// 网格前半部分（临界厚度简化图使用）
    pub fn first_half(&self) -> &[f64] {
        &self.points[..(self.points.len() - 1) / 2]
    }
}

impl Default for CompositionGrid {
    fn default() -> Self {
        Self::standard()
    }
}

/// 量子阱位置网格（整数位置，单位 Å）
#[derive(Debug, Clone, PartialEq)]
pub struct PositionGrid {
    points: Vec<f64>,
}

impl PositionGrid {
    pub fn standard() -> Self {
        Self {
            points: (0..POSITION_POINTS).map(|p| p as f64).collect(),
        }
    }

    pub fn points(&self) -> &[f64] {
        &self.points
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    /// 阱区窗口 [trunc(500 - w/2), trunc(501 + w/2))
    pub fn well_window(&self, width: f64) -> std::ops::Range<usize> {
        let center = WELL_CENTER as f64;
        let start = (center - width / 2.0).trunc().max(0.0) as usize;
        let end = (center + 1.0 + width / 2.0).trunc().max(0.0) as usize;
        start.min(self.points.len())..end.min(self.points.len())
    }
}

impl Default for PositionGrid {
    fn default() -> Self {
        Self::standard()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_standard_grid_shape() {
        let grid = CompositionGrid::standard();
        assert_eq!(grid.len(), 101);
        assert_eq!(grid.points()[0], 0.0);
        assert_eq!(grid.points()[100], 1.0);
        assert_eq!(grid.points()[50], 0.5);
    }

    #[test]
    fn test_index_of() {
        let grid = CompositionGrid::standard();
        assert_eq!(grid.index_of(0.25).unwrap(), 25);
        // 舍入到最近点，截断会给出 28
        assert_eq!(grid.index_of(0.29).unwrap(), 29);
        assert_eq!(grid.index_of(0.284).unwrap(), 28);
        assert_eq!(grid.index_of(0.286).unwrap(), 29);
        assert_eq!(grid.index_of(1.0).unwrap(), 100);
        assert!(matches!(
            grid.index_of(1.2),
            Err(AlloyBandError::CompositionOutOfRange(_))
        ));
        assert!(grid.index_of(-0.01).is_err());
    }

    #[test]
    fn test_first_half() {
        let grid = CompositionGrid::standard();
        assert_eq!(grid.first_half().len(), 50);
    }

    #[test]
    fn test_well_window() {
        let positions = PositionGrid::standard();
        assert_eq!(positions.len(), 1001);
        assert_eq!(positions.well_window(200.0), 400..601);
        assert_eq!(positions.well_window(100.0), 450..551);
        // 奇数宽度按截断取整
        assert_eq!(positions.well_window(75.0), 462..538);
        // 超宽的阱被裁剪到网格内
        assert_eq!(positions.well_window(5000.0), 0..1001);
    }
}
