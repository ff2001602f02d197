//! # bands 子命令实现
//!
//! 由 Γ 点带隙构造无应变/应变能带边并绘图。
//!
//! ## 功能
//! - 不考虑温度：一张 `Energy_bands_with_strain` 图
//! - 考虑温度：每个温度一张 `Energy_bands_with_strain_for_{T}K` 图，
//!   另加一张汇总所有温度导带的 `Energy_bands_with_strain_and_temperature` 图
//!
//! ## 依赖关系
//! - 使用 `cli/analysis.rs` 定义的 BandsArgs
//! - 使用 `physics/temperature.rs`, `physics/strain.rs`
//! - 被 `commands/well.rs`, `commands/run.rs` 复用

use crate::cli::analysis::BandsArgs;
use crate::commands::session::Session;
use crate::error::{AlloyBandError, Result};
use crate::models::TemperatureParameters;
use crate::physics::{bandgap, temperature, BandSet};
use crate::render::chart::{LegendPosition, LineChart, Series};
use crate::utils::{format_number, output};

use tabled::{Table, Tabled};

/// 能带汇总表的一行
#[derive(Tabled)]
struct BandRow {
    #[tabled(rename = "T (K)")]
    temperature: String,
    #[tabled(rename = "x")]
    composition: String,
    #[tabled(rename = "E_C - E_V (eV)")]
    unstrained: String,
    #[tabled(rename = "E_C,s - E_HH (eV)")]
    strained: String,
    #[tabled(rename = "E_HH - E_LH (eV)")]
    splitting: String,
}

/// 执行 bands 子命令
pub fn execute(args: BandsArgs) -> Result<()> {
    output::print_header("Band Edges with Strain");

    let session = Session::load(&args.common)?;
    let plan = temperature_plan(
        &session.config.temperature,
        &args.temperatures,
        args.no_temperature,
    )?;

    let sets = plot_bands(&session, plan.as_deref())?;

    let mut rows = Vec::new();
    for (t, set) in &sets {
        for index in [0, 50, 100] {
            rows.push(BandRow {
                temperature: format_number(*t),
                composition: format!("{:.2}", session.grid.points()[index]),
                unstrained: format!("{:.4}", set.conduction[index] - set.valence[index]),
                strained: format!(
                    "{:.4}",
                    set.strained_conduction[index] - set.heavy_hole[index]
                ),
                splitting: format!("{:.4}", set.heavy_hole[index] - set.light_hole[index]),
            });
        }
    }
    println!();
    println!("{}", Table::new(&rows));

    Ok(())
}

/// 决定计算哪些温度；`None` 表示不考虑温度依赖
///
/// 命令行给出的温度优先于配置，即使配置中关闭了温度依赖。
pub(crate) fn temperature_plan(
    params: &TemperatureParameters,
    overrides: &[f64],
    disabled: bool,
) -> Result<Option<Vec<f64>>> {
    if disabled {
        return Ok(None);
    }

    if let Some(t) = overrides.iter().find(|t| **t < 0.0 || !t.is_finite()) {
        return Err(AlloyBandError::InvalidArgument(format!(
            "temperature must be a non-negative number, got {}",
            t
        )));
    }

    let temperatures = if !overrides.is_empty() {
        overrides.to_vec()
    } else if params.enabled {
        params.temperatures.clone()
    } else {
        return Ok(None);
    };

    if temperatures.is_empty() {
        return Err(AlloyBandError::InvalidConfig(
            "temperature dependence is enabled but no temperatures are listed".to_string(),
        ));
    }

    Ok(Some(temperatures))
}

/// Γ 点带隙曲线
pub(crate) fn gamma_gap(session: &Session) -> Result<Vec<f64>> {
    Ok(bandgap::gap_series(
        session.config.gamma_point()?,
        &session.grid,
    ))
}

/// 各温度下的能带集合；温度依赖关闭时只在 0 K 计算一次
pub(crate) fn band_sets(session: &Session, temperatures: &[f64]) -> Result<Vec<(f64, BandSet)>> {
    let gap = gamma_gap(session)?;
    let bands = &session.config.bands;

    Ok(temperatures
        .iter()
        .map(|t| {
            let corrected = temperature::varshni(&gap, &session.grid, &session.config.temperature, *t);
            (*t, BandSet::compose(&corrected, &session.grid, bands))
        })
        .collect())
}

/// 计算并绘制能带边，返回每个温度的能带集合
pub(crate) fn plot_bands(
    session: &Session,
    temperatures: Option<&[f64]>,
) -> Result<Vec<(f64, BandSet)>> {
    match temperatures {
        None => {
            output::print_info("Temperature dependence disabled, computing bands at 0 K");
            let sets = band_sets(session, &[0.0])?;
            if let Some((_, set)) = sets.first() {
                let series = vec![
                    Series::new("E_V", &set.valence),
                    Series::new("E_C", &set.conduction),
                    Series::new("E_C-with-strain", &set.strained_conduction),
                    Series::new("E_HH", &set.heavy_hole),
                    Series::new("E_LH", &set.light_hole),
                ];
                save_bands(session, "Energy_bands_with_strain", &series)?;
            }
            Ok(sets)
        }
        Some(temperatures) => {
            output::print_info(&format!(
                "Computing bands at {} temperature(s): {} K",
                temperatures.len(),
                temperatures
                    .iter()
                    .map(|t| format_number(*t))
                    .collect::<Vec<_>>()
                    .join(", ")
            ));

            let sets = band_sets(session, temperatures)?;
            let mut combined: Vec<Series> = Vec::new();

            for (i, (t, set)) in sets.iter().enumerate() {
                let t_label = format_number(*t);
                let conduction = Series::new(format!("E_C ({}K)", t_label), &set.conduction);
                let strained = Series::new(
                    format!("E_C-with-strain ({}K)", t_label),
                    &set.strained_conduction,
                );
                let valence = Series::new("E_V", &set.valence);
                let heavy = Series::new("E_HH", &set.heavy_hole);
                let light = Series::new("E_LH", &set.light_hole);

                // 价带与温度无关，汇总图中只出现一次
                if i == 0 {
                    combined.extend([
                        valence.clone(),
                        conduction.clone(),
                        strained.clone(),
                        heavy.clone(),
                        light.clone(),
                    ]);
                } else {
                    combined.extend([conduction.clone(), strained.clone()]);
                }

                save_bands(
                    session,
                    &format!("Energy_bands_with_strain_for_{}K", t_label),
                    &[valence, conduction, strained, heavy, light],
                )?;
            }

            save_bands(session, "Energy_bands_with_strain_and_temperature", &combined)?;
            Ok(sets)
        }
    }
}

fn save_bands(session: &Session, stem: &str, series: &[Series]) -> Result<()> {
    session.save_chart(
        stem,
        &LineChart {
            title: session.title(),
            x_desc: session.x_label(),
            y_desc: "Energy [eV]",
            x: session.grid.points(),
            series,
            legend: LegendPosition::UpperRight,
        },
    )?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::MaterialConfig;
    use approx::assert_relative_eq;
    use tempfile::tempdir;

    #[test]
    fn test_temperature_plan() {
        let params = TemperatureParameters::default();

        assert_eq!(
            temperature_plan(&params, &[], false).unwrap(),
            Some(vec![0.0, 10.0, 300.0])
        );
        assert_eq!(
            temperature_plan(&params, &[77.0], false).unwrap(),
            Some(vec![77.0])
        );
        assert_eq!(temperature_plan(&params, &[], true).unwrap(), None);

        let disabled = TemperatureParameters {
            enabled: false,
            ..Default::default()
        };
        assert_eq!(temperature_plan(&disabled, &[], false).unwrap(), None);
        assert_eq!(
            temperature_plan(&disabled, &[4.0], false).unwrap(),
            Some(vec![4.0])
        );
    }

    #[test]
    fn test_temperature_plan_rejects_bad_values() {
        let params = TemperatureParameters::default();
        assert!(matches!(
            temperature_plan(&params, &[-1.0], false),
            Err(AlloyBandError::InvalidArgument(_))
        ));

        let empty = TemperatureParameters {
            temperatures: vec![],
            ..Default::default()
        };
        assert!(matches!(
            temperature_plan(&empty, &[], false),
            Err(AlloyBandError::InvalidConfig(_))
        ));
    }

    #[test]
    fn test_band_sets_lower_gap_with_temperature() {
        let dir = tempdir().unwrap();
        let mut config = MaterialConfig::default();
        config.output.directory = dir.path().to_path_buf();
        let session = Session::from_config(config).unwrap();

        let sets = band_sets(&session, &[0.0, 300.0]).unwrap();
        assert_eq!(sets.len(), 2);

        let (_, cold) = &sets[0];
        let (_, warm) = &sets[1];
        // 价带与温度无关
        assert_relative_eq!(cold.valence[30], warm.valence[30]);
        assert_relative_eq!(cold.heavy_hole[30], warm.heavy_hole[30]);
        for i in 0..session.grid.len() {
            assert!(warm.conduction[i] < cold.conduction[i]);
        }
    }
}
