//! # 折线图生成
//!
//! 使用 `plotters` 库把若干条共享横轴的能量/质量/厚度曲线画在同一张图上。
//!
//! ## 功能
//! - 任意条带标签的曲线，自动配色并绘制图例
//! - 曲线中的缺失值（None）会断开连线
//! - 支持 PNG 和 SVG 输出
//!
//! ## 依赖关系
//! - 被 `commands/` 调用
//! - 被 `render/well.rs` 复用绘制子图
//! - 使用 `plotters` 渲染图表

use crate::error::{AlloyBandError, Result};
use crate::models::{ImageFormat, OutputConfig};

use plotters::coord::Shift;
use plotters::prelude::*;
use std::path::Path;

/// 曲线配色
const PALETTE: [RGBColor; 10] = [
    RGBColor(0, 102, 204),
    RGBColor(204, 0, 0),
    RGBColor(0, 153, 51),
    RGBColor(204, 0, 204),
    RGBColor(0, 170, 190),
    RGBColor(230, 120, 0),
    RGBColor(102, 51, 153),
    RGBColor(120, 120, 120),
    RGBColor(153, 102, 51),
    RGBColor(0, 0, 0),
];

/// 一条带标签的曲线
#[derive(Debug, Clone)]
pub struct Series {
    pub label: String,
    pub values: Vec<Option<f64>>,
}

impl Series {
    /// 完整曲线
    pub fn new(label: impl Into<String>, values: &[f64]) -> Self {
        Self {
            label: label.into(),
            values: values.iter().map(|v| Some(*v)).collect(),
        }
    }

    /// 可能有缺失值的曲线
    pub fn with_gaps(label: impl Into<String>, values: &[Option<f64>]) -> Self {
        Self {
            label: label.into(),
            values: values.to_vec(),
        }
    }

    /// 截取前 n 个点
    pub fn truncated(&self, n: usize) -> Self {
        Self {
            label: self.label.clone(),
            values: self.values.iter().take(n).cloned().collect(),
        }
    }

    /// 连续的有限值片段
    fn segments(&self, x: &[f64]) -> Vec<Vec<(f64, f64)>> {
        let mut segments = Vec::new();
        let mut current = Vec::new();
        for (xi, yi) in x.iter().zip(&self.values) {
            match yi {
                Some(y) if y.is_finite() => current.push((*xi, *y)),
                _ => {
                    if !current.is_empty() {
                        segments.push(std::mem::take(&mut current));
                    }
                }
            }
        }
        if !current.is_empty() {
            segments.push(current);
        }
        segments
    }
}

/// 图像尺寸与字体
#[derive(Debug, Clone, Copy)]
pub struct ChartStyle {
    pub width: u32,
    pub height: u32,
    pub font_size: u32,
    pub format: ImageFormat,
}

impl From<&OutputConfig> for ChartStyle {
    fn from(output: &OutputConfig) -> Self {
        Self {
            width: output.width,
            height: output.height,
            font_size: output.font_size,
            format: output.format,
        }
    }
}

impl ChartStyle {
    /// 刻度字号（比正文小 6 号）
    fn tick_size(&self) -> u32 {
        self.font_size.saturating_sub(6).max(8)
    }
}

/// 图例位置
#[derive(Debug, Clone, Copy, Default)]
pub enum LegendPosition {
    #[default]
    UpperRight,
    UpperLeft,
    MiddleLeft,
    MiddleRight,
}

impl LegendPosition {
    fn to_plotters(self) -> SeriesLabelPosition {
        match self {
            LegendPosition::UpperRight => SeriesLabelPosition::UpperRight,
            LegendPosition::UpperLeft => SeriesLabelPosition::UpperLeft,
            LegendPosition::MiddleLeft => SeriesLabelPosition::MiddleLeft,
            LegendPosition::MiddleRight => SeriesLabelPosition::MiddleRight,
        }
    }
}

/// 一张折线图（或一个子图）的内容
#[derive(Debug, Clone)]
pub struct LineChart<'a> {
    pub title: &'a str,
    pub x_desc: &'a str,
    pub y_desc: &'a str,
    pub x: &'a [f64],
    pub series: &'a [Series],
    pub legend: LegendPosition,
}

pub(crate) fn plot_err<E: std::fmt::Debug>(e: E) -> AlloyBandError {
    AlloyBandError::Plot(format!("{:?}", e))
}

/// 生成折线图
pub fn generate_line_chart(chart: &LineChart, style: &ChartStyle, output_path: &Path) -> Result<()> {
    match style.format {
        ImageFormat::Png => {
            let root =
                BitMapBackend::new(output_path, (style.width, style.height)).into_drawing_area();
            root.fill(&WHITE).map_err(plot_err)?;
            draw_line_chart(&root, chart, style)?;
            root.present().map_err(plot_err)?;
        }
        ImageFormat::Svg => {
            let root = SVGBackend::new(output_path, (style.width, style.height)).into_drawing_area();
            root.fill(&WHITE).map_err(plot_err)?;
            draw_line_chart(&root, chart, style)?;
            root.present().map_err(plot_err)?;
        }
    }
    Ok(())
}

/// 纵轴范围（留 5% 边距）
fn value_range(chart: &LineChart) -> (f64, f64) {
    let values = chart
        .series
        .iter()
        .flat_map(|s| s.values.iter().flatten())
        .filter(|v| v.is_finite());

    let (min, max) = values.fold((f64::INFINITY, f64::NEG_INFINITY), |(lo, hi), v| {
        (lo.min(*v), hi.max(*v))
    });

    if !min.is_finite() || !max.is_finite() {
        return (0.0, 1.0);
    }

    let span = max - min;
    if span.abs() < 1e-12 {
        let pad = if min.abs() > 1e-12 { min.abs() * 0.1 } else { 0.1 };
        return (min - pad, max + pad);
    }
    (min - 0.05 * span, max + 0.05 * span)
}

/// 在给定区域上绘制折线图的核心逻辑
pub(crate) fn draw_line_chart<DB: DrawingBackend>(
    area: &DrawingArea<DB, Shift>,
    chart: &LineChart,
    style: &ChartStyle,
) -> Result<()>
where
    DB::ErrorType: 'static,
{
    let x_min = chart.x.first().copied().unwrap_or(0.0);
    let x_max = chart
        .x
        .last()
        .copied()
        .filter(|x| *x > x_min)
        .unwrap_or(x_min + 1.0);
    let (y_min, y_max) = value_range(chart);

    let font = style.font_size;
    let mut ctx = ChartBuilder::on(area)
        .caption(chart.title, ("sans-serif", font).into_font())
        .margin(20)
        .x_label_area_size((font * 3) as i32)
        .y_label_area_size((font * 4) as i32)
        .build_cartesian_2d(x_min..x_max, y_min..y_max)
        .map_err(plot_err)?;

    ctx.configure_mesh()
        .x_desc(chart.x_desc)
        .y_desc(chart.y_desc)
        .x_label_style(("sans-serif", style.tick_size()))
        .y_label_style(("sans-serif", style.tick_size()))
        .axis_desc_style(("sans-serif", font))
        .draw()
        .map_err(plot_err)?;

    for (i, series) in chart.series.iter().enumerate() {
        let color = PALETTE[i % PALETTE.len()];
        let mut labelled = false;

        for segment in series.segments(chart.x) {
            let drawn = ctx
                .draw_series(LineSeries::new(segment, color.stroke_width(2)))
                .map_err(plot_err)?;

            // 图例只登记第一段
            if !labelled {
                drawn.label(series.label.as_str()).legend(move |(x, y)| {
                    PathElement::new(vec![(x, y), (x + 20, y)], color.stroke_width(2))
                });
                labelled = true;
            }
        }
    }

    if chart.series.iter().any(|s| !s.label.is_empty()) {
        ctx.configure_series_labels()
            .position(chart.legend.to_plotters())
            .label_font(("sans-serif", style.tick_size()))
            .background_style(&WHITE.mix(0.8))
            .border_style(&BLACK)
            .draw()
            .map_err(plot_err)?;
    }

    Ok(())
}
