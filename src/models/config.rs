//! # 材料配置
//!
//! 整个计算流程的不可变配置，启动时读取一次，以引用方式传入各计算函数。
//! 默认值为 InAs_x Sb_(1-x) / InAs 衬底体系。
//!
//! 配置文件为 TOML，每个段落都有默认值，文件中只需写出要覆盖的字段：
//!
//! ```toml
//! [material]
//! title = "InAs(x)Sb(1-x)"
//!
//! [[symmetry_points]]
//! label = "Γ"
//! e_at_zero = 0.235
//! e_at_one = 0.417
//! bowing = 0.67
//!
//! [bands]
//! c11 = [684.7, 832.9]
//! ```
//!
//! ## 依赖关系
//! - 被 `commands/` 加载和校验
//! - 使用 `models/material.rs` 的参数结构
//! - 使用 `serde` + `toml` 读写

use crate::error::{AlloyBandError, Result};
use crate::models::material::{
    BandParameters, CriticalParameters, GapParameters, MassParameters, TemperatureParameters,
    WellParameters,
};

use clap::ValueEnum;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

/// 材料描述（用于图表标题）
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct MaterialInfo {
    /// 合金名称，用作图表标题
    pub title: String,
    /// 组分轴标签
    pub x_label: String,
    /// 衬底名称
    pub substrate: String,
    /// x 对应的元素（量子阱标题中使用）
    pub element_x: String,
    /// 1 - x 对应的元素
    pub element_rest: String,
}

impl Default for MaterialInfo {
    fn default() -> Self {
        Self {
            title: "InAs(x)Sb(1-x)".to_string(),
            x_label: "x value of As(x) composition".to_string(),
            substrate: "InAs".to_string(),
            element_x: "InAs".to_string(),
            element_rest: "Sb".to_string(),
        }
    }
}

/// 图像输出格式
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum ImageFormat {
    /// PNG image
    #[default]
    Png,
    /// SVG vector image
    Svg,
}

impl ImageFormat {
    pub fn extension(&self) -> &'static str {
        match self {
            ImageFormat::Png => "png",
            ImageFormat::Svg => "svg",
        }
    }
}

impl std::fmt::Display for ImageFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.extension())
    }
}

/// 输出设置
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct OutputConfig {
    /// 输出目录
    pub directory: PathBuf,
    /// 量子阱图的子目录
    pub well_directory: String,
    /// 图像格式
    pub format: ImageFormat,
    /// 图像宽度（像素）
    pub width: u32,
    /// 图像高度（像素）
    pub height: u32,
    /// 字号
    pub font_size: u32,
    /// 同时导出 CSV 数据
    pub csv: bool,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            directory: PathBuf::from("."),
            well_directory: "quantum_well_plots".to_string(),
            format: ImageFormat::Png,
            width: 1400,
            height: 1000,
            font_size: 20,
            csv: false,
        }
    }
}

impl OutputConfig {
    /// 图表文件路径
    pub fn chart_path(&self, stem: &str) -> PathBuf {
        self.directory
            .join(format!("{}.{}", stem, self.format.extension()))
    }

    /// 量子阱图表文件路径
    pub fn well_chart_path(&self, stem: &str) -> PathBuf {
        self.well_dir()
            .join(format!("{}.{}", stem, self.format.extension()))
    }

    /// 与图表同名的 CSV 路径
    pub fn csv_path(chart_path: &Path) -> PathBuf {
        chart_path.with_extension("csv")
    }

    pub fn well_dir(&self) -> PathBuf {
        self.directory.join(&self.well_directory)
    }
}

/// 完整材料配置
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct MaterialConfig {
    pub material: MaterialInfo,
    /// 每个对称点一组带隙参数，第一个视为 Γ 点
    pub symmetry_points: Vec<GapParameters>,
    pub bands: BandParameters,
    pub temperature: TemperatureParameters,
    pub well: WellParameters,
    pub masses: MassParameters,
    pub critical: CriticalParameters,
    pub output: OutputConfig,
}

impl Default for MaterialConfig {
    fn default() -> Self {
        Self {
            material: MaterialInfo::default(),
            symmetry_points: vec![
                GapParameters::new("Γ", 0.235, 0.417, 0.67),
                GapParameters::new("X", 0.63, 1.433, 0.6),
                GapParameters::new("L", 0.93, 1.133, 0.6),
            ],
            bands: BandParameters::default(),
            temperature: TemperatureParameters::default(),
            well: WellParameters::default(),
            masses: MassParameters::default(),
            critical: CriticalParameters::default(),
            output: OutputConfig::default(),
        }
    }
}

impl MaterialConfig {
    /// 从 TOML 文件加载并校验
    pub fn from_file(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path).map_err(|e| AlloyBandError::FileReadError {
            path: path.display().to_string(),
            source: e,
        })?;
        let config = Self::from_toml_str(&content).map_err(|e| match e {
            AlloyBandError::ConfigParse { reason, .. } => AlloyBandError::ConfigParse {
                path: path.display().to_string(),
                reason,
            },
            other => other,
        })?;
        Ok(config)
    }

    /// 从 TOML 字符串解析并校验
    pub fn from_toml_str(content: &str) -> Result<Self> {
        let config: MaterialConfig =
            toml::from_str(content).map_err(|e| AlloyBandError::ConfigParse {
                path: "<inline>".to_string(),
                reason: e.to_string(),
            })?;
        config.validate()?;
        Ok(config)
    }

    /// 序列化为 TOML
    pub fn to_toml_string(&self) -> Result<String> {
        toml::to_string_pretty(self).map_err(|e| AlloyBandError::InvalidConfig(e.to_string()))
    }

    /// Γ 点（第一个对称点）
    pub fn gamma_point(&self) -> Result<&GapParameters> {
        self.symmetry_points
            .first()
            .ok_or_else(|| AlloyBandError::InvalidConfig("no symmetry points defined".to_string()))
    }

    /// 校验配置的物理合理性
    pub fn validate(&self) -> Result<()> {
        if self.symmetry_points.is_empty() {
            return Err(AlloyBandError::InvalidConfig(
                "at least one symmetry point is required".to_string(),
            ));
        }

        for composition in self
            .well
            .compositions
            .iter()
            .chain(std::iter::once(&self.well.barrier_composition))
        {
            if !(0.0..=1.0).contains(composition) {
                return Err(AlloyBandError::InvalidConfig(format!(
                    "well composition {} is outside [0, 1]",
                    composition
                )));
            }
        }

        if let Some(width) = self.well.widths.iter().find(|w| **w <= 0.0) {
            return Err(AlloyBandError::InvalidConfig(format!(
                "well width must be positive, got {}",
                width
            )));
        }

        if let Some(t) = self.temperature.temperatures.iter().find(|t| **t < 0.0) {
            return Err(AlloyBandError::InvalidConfig(format!(
                "temperature must be non-negative, got {} K",
                t
            )));
        }

        let elastic = [
            self.bands.c11.at_zero,
            self.bands.c11.at_one,
            self.bands.c12.at_zero,
            self.bands.c12.at_one,
            self.bands.lattice_a.at_zero,
            self.bands.lattice_a.at_one,
            self.bands.lattice_a0,
        ];
        if elastic.iter().any(|v| *v <= 0.0) {
            return Err(AlloyBandError::InvalidConfig(
                "elastic constants and lattice constants must be positive".to_string(),
            ));
        }

        if self.critical.h_min <= 0.0 || self.critical.h_max <= self.critical.h_min {
            return Err(AlloyBandError::InvalidConfig(format!(
                "critical thickness bracket must satisfy 0 < min < max, got {}-{}",
                self.critical.h_min, self.critical.h_max
            )));
        }

        if self.critical.tolerance <= 0.0 {
            return Err(AlloyBandError::InvalidConfig(
                "bisection tolerance must be positive".to_string(),
            ));
        }

        if self.critical.max_iterations == 0 {
            return Err(AlloyBandError::InvalidConfig(
                "bisection max_iterations must be at least 1".to_string(),
            ));
        }

        if self.output.width == 0 || self.output.height == 0 || self.output.font_size == 0 {
            return Err(AlloyBandError::InvalidConfig(
                "image width, height and font size must be non-zero".to_string(),
            ));
        }

        Ok(())
    }
}
