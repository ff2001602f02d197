//! # 计算会话
//!
//! 加载材料配置、应用命令行覆盖项、建立网格与图表样式，
//! 并负责把图表（以及可选的 CSV）写入输出目录。
//!
//! ## 依赖关系
//! - 被所有计算子命令使用
//! - 使用 `cli/common.rs` 的 CommonArgs
//! - 使用 `models/` 的配置与网格
//! - 使用 `render/` 生成图表和 CSV

use crate::cli::common::CommonArgs;
use crate::error::{AlloyBandError, Result};
use crate::models::{CompositionGrid, MaterialConfig, OutputConfig, PositionGrid};
use crate::physics::WellProfile;
use crate::render::chart::{generate_line_chart, ChartStyle, LineChart};
use crate::render::export::series_to_csv;
use crate::render::well::{generate_well_chart, strained_series, unstrained_series};
use crate::utils::output;

use std::fs;
use std::path::{Path, PathBuf};

/// 一次命令执行的上下文
#[derive(Debug)]
pub struct Session {
    pub config: MaterialConfig,
    pub grid: CompositionGrid,
    pub positions: PositionGrid,
    pub style: ChartStyle,
}

impl Session {
    /// 根据公共参数加载配置
    pub fn load(common: &CommonArgs) -> Result<Self> {
        let mut config = match &common.config {
            Some(path) => {
                output::print_info(&format!("Loading material config '{}'", path.display()));
                MaterialConfig::from_file(path)?
            }
            None => {
                output::print_info("No config given, using built-in InAsSb/InAs parameters");
                MaterialConfig::default()
            }
        };

        if let Some(dir) = &common.output_dir {
            config.output.directory = dir.clone();
        }
        if let Some(format) = common.format {
            config.output.format = format;
        }
        if common.csv {
            config.output.csv = true;
        }

        Self::from_config(config)
    }

    /// 校验配置并准备输出目录
    pub fn from_config(config: MaterialConfig) -> Result<Self> {
        config.validate()?;
        ensure_dir(&config.output.directory)?;

        Ok(Self {
            style: ChartStyle::from(&config.output),
            grid: CompositionGrid::standard(),
            positions: PositionGrid::standard(),
            config,
        })
    }

    /// 图表标题
    pub fn title(&self) -> &str {
        &self.config.material.title
    }

    /// 组分轴描述
    pub fn x_label(&self) -> &str {
        &self.config.material.x_label
    }

    /// 写出一张以组分为横轴的图表，返回图片路径
    pub fn save_chart(&self, stem: &str, chart: &LineChart) -> Result<PathBuf> {
        let path = self.config.output.chart_path(stem);

        // 数据先于图片写出，渲染失败时数据仍然保留
        if self.config.output.csv {
            let csv_path = OutputConfig::csv_path(&path);
            series_to_csv("x", chart.x, chart.series, &csv_path)?;
            output::print_saved("data", &csv_path.display().to_string());
        }

        generate_line_chart(chart, &self.style, &path)?;
        output::print_saved("chart", &path.display().to_string());

        Ok(path)
    }

    /// 写出一张量子阱图，返回图片路径
    pub fn save_well_chart(&self, stem: &str, title: &str, profile: &WellProfile) -> Result<PathBuf> {
        ensure_dir(&self.config.output.well_dir())?;
        let path = self.config.output.well_chart_path(stem);

        if self.config.output.csv {
            let mut series = strained_series(profile);
            series.extend(unstrained_series(profile));
            series_to_csv(
                "position",
                &profile.positions,
                &series,
                &OutputConfig::csv_path(&path),
            )?;
        }

        generate_well_chart(profile, title, &self.style, &path)?;
        Ok(path)
    }
}

/// 创建目录（已存在时不做任何事）
pub fn ensure_dir(path: &Path) -> Result<()> {
    fs::create_dir_all(path).map_err(|e| AlloyBandError::FileWriteError {
        path: path.display().to_string(),
        source: e,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::ImageFormat;
    use crate::render::chart::{LegendPosition, Series};
    use tempfile::tempdir;

    #[test]
    fn test_overrides_applied() {
        let dir = tempdir().unwrap();
        let out = dir.path().join("plots");
        let common = CommonArgs {
            config: None,
            output_dir: Some(out.clone()),
            format: Some(ImageFormat::Svg),
            csv: true,
        };

        let session = Session::load(&common).unwrap();
        assert!(out.is_dir());
        assert_eq!(session.config.output.format, ImageFormat::Svg);
        assert!(session.config.output.csv);
        assert_eq!(session.grid.len(), 101);
        assert_eq!(session.positions.len(), 1001);
    }

    #[test]
    fn test_load_from_file() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("material.toml");
        fs::write(&path, "[material]\ntitle = \"GaInAs\"\n").unwrap();

        let common = CommonArgs {
            config: Some(path),
            output_dir: Some(dir.path().to_path_buf()),
            ..Default::default()
        };
        let session = Session::load(&common).unwrap();
        assert_eq!(session.title(), "GaInAs");
        assert_eq!(session.config.symmetry_points.len(), 3);
    }

    #[test]
    fn test_invalid_config_rejected() {
        let dir = tempdir().unwrap();
        let mut config = MaterialConfig::default();
        config.output.directory = dir.path().to_path_buf();
        config.well.widths = vec![-5.0];
        let err = Session::from_config(config).unwrap_err();
        assert!(matches!(err, AlloyBandError::InvalidConfig(_)));
    }

    #[test]
    fn test_save_chart_with_csv() {
        let dir = tempdir().unwrap();
        let mut config = MaterialConfig::default();
        config.output.directory = dir.path().to_path_buf();
        config.output.format = ImageFormat::Svg;
        config.output.csv = true;
        let session = Session::from_config(config).unwrap();

        let x = session.grid.points().to_vec();
        let series = [Series::new("x", &x)];
        let chart = LineChart {
            title: "t",
            x_desc: "x",
            y_desc: "y",
            x: &x,
            series: &series,
            legend: LegendPosition::default(),
        };

        let saved = session.save_chart("linear", &chart);

        // CSV 不依赖字体，总能检查
        let mut rdr = csv::Reader::from_path(dir.path().join("linear.csv")).unwrap();
        assert_eq!(rdr.headers().unwrap().iter().collect::<Vec<_>>(), vec!["x", "x"]);
        assert_eq!(rdr.records().count(), 101);

        match saved {
            Ok(path) => {
                assert!(path.ends_with("linear.svg"));
                assert!(path.is_file());
            }
            // 无系统字体的环境无法排版文字
            Err(AlloyBandError::Plot(msg)) if msg.contains("Font") => {}
            Err(e) => panic!("save failed: {}", e),
        }
    }
}
