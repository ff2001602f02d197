//! # 量子阱图
//!
//! 左右两个子图："With tension"（应变导带、重/轻空穴带）
//! 与 "Without tension"（无应变导带、价带）。
//!
//! ## 依赖关系
//! - 被 `commands/well.rs`, `commands/run.rs` 调用
//! - 使用 `render/chart.rs` 绘制子图
//! - 使用 `physics/well.rs` 的 WellProfile

use crate::error::Result;
use crate::models::ImageFormat;
use crate::physics::WellProfile;
use crate::render::chart::{draw_line_chart, plot_err, ChartStyle, LegendPosition, LineChart, Series};

use plotters::coord::Shift;
use plotters::prelude::*;
use std::path::Path;

const POSITION_DESC: &str = "Position [Å]";
const ENERGY_DESC: &str = "Energy [eV]";

/// 应变子图的三条曲线
pub fn strained_series(profile: &WellProfile) -> Vec<Series> {
    vec![
        Series::new("E_V (heavy holes)", &profile.heavy_hole),
        Series::new("E_V (light holes)", &profile.light_hole),
        Series::new("E_C (with tension)", &profile.conduction),
    ]
}

/// 无应变子图的两条曲线
pub fn unstrained_series(profile: &WellProfile) -> Vec<Series> {
    vec![
        Series::new("E_V", &profile.valence_unstrained),
        Series::new("E_C", &profile.conduction_unstrained),
    ]
}

/// 生成量子阱图
pub fn generate_well_chart(
    profile: &WellProfile,
    title: &str,
    style: &ChartStyle,
    output_path: &Path,
) -> Result<()> {
    match style.format {
        ImageFormat::Png => {
            let root =
                BitMapBackend::new(output_path, (style.width, style.height)).into_drawing_area();
            draw_well_chart(&root, profile, title, style)?;
            root.present().map_err(plot_err)?;
        }
        ImageFormat::Svg => {
            let root = SVGBackend::new(output_path, (style.width, style.height)).into_drawing_area();
            draw_well_chart(&root, profile, title, style)?;
            root.present().map_err(plot_err)?;
        }
    }
    Ok(())
}

fn draw_well_chart<DB: DrawingBackend>(
    root: &DrawingArea<DB, Shift>,
    profile: &WellProfile,
    title: &str,
    style: &ChartStyle,
) -> Result<()>
where
    DB::ErrorType: 'static,
{
    root.fill(&WHITE).map_err(plot_err)?;

    let body = root
        .titled(title, ("sans-serif", style.font_size).into_font())
        .map_err(plot_err)?;
    let panels = body.split_evenly((1, 2));

    let strained = strained_series(profile);
    let unstrained = unstrained_series(profile);

    draw_line_chart(
        &panels[0],
        &LineChart {
            title: "With tension",
            x_desc: POSITION_DESC,
            y_desc: ENERGY_DESC,
            x: &profile.positions,
            series: &strained,
            legend: LegendPosition::MiddleLeft,
        },
        style,
    )?;

    draw_line_chart(
        &panels[1],
        &LineChart {
            title: "Without tension",
            x_desc: POSITION_DESC,
            y_desc: "",
            x: &profile.positions,
            series: &unstrained,
            legend: LegendPosition::MiddleRight,
        },
        style,
    )?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{BandParameters, CompositionGrid, GapParameters, PositionGrid};
    use crate::physics::{bandgap, BandSet};

    #[test]
    fn test_panel_series() {
        let grid = CompositionGrid::standard();
        let gap = bandgap::gap_series(&GapParameters::new("Γ", 0.235, 0.417, 0.67), &grid);
        let bands = BandSet::compose(&gap, &grid, &BandParameters::default());
        let profile = WellProfile::build(
            &bands,
            &grid,
            &PositionGrid::standard(),
            200.0,
            0.5,
            1.0,
            -0.59,
        )
        .unwrap();

        let strained = strained_series(&profile);
        let unstrained = unstrained_series(&profile);
        assert_eq!(strained.len(), 3);
        assert_eq!(unstrained.len(), 2);
        assert!(strained
            .iter()
            .chain(&unstrained)
            .all(|s| s.values.len() == 1001));
    }
}
