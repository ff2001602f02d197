//! # well 子命令实现
//!
//! 对每个 (温度, 阱宽, 组分) 组合构造量子阱剖面，
//! 打印阱中心的跃迁能量，并绘制双子图。
//!
//! ## 依赖关系
//! - 使用 `cli/well.rs` 定义的 WellArgs
//! - 使用 `commands/bands.rs` 计算能带集合
//! - 使用 `physics/well.rs` 的 WellProfile
//! - 被 `commands/run.rs` 复用

use crate::cli::well::WellArgs;
use crate::commands::bands;
use crate::commands::session::Session;
use crate::error::{AlloyBandError, Result};
use crate::models::config::MaterialInfo;
use crate::physics::{BandSet, WellProfile};
use crate::utils::{format_number, output, progress};

use tabled::{Table, Tabled};

/// 跃迁能量表的一行
#[derive(Debug, Tabled)]
pub(crate) struct TransitionRow {
    #[tabled(rename = "T (K)")]
    pub temperature: String,
    #[tabled(rename = "x")]
    pub composition: String,
    #[tabled(rename = "Width (nm)")]
    pub width: String,
    #[tabled(rename = "Strained (eV)")]
    pub strained: String,
    #[tabled(rename = "Without strain (eV)")]
    pub unstrained: String,
}

/// 执行 well 子命令
pub fn execute(args: WellArgs) -> Result<()> {
    output::print_header("Quantum Well Profiles");

    let session = Session::load(&args.common)?;
    let well = &session.config.well;

    let widths = pick(&args.widths, &well.widths);
    let compositions = pick(&args.compositions, &well.compositions);
    let temperatures = pick(
        &args.temperatures,
        &session.config.temperature.effective_temperatures(),
    );

    if let Some(w) = widths.iter().find(|w| **w <= 0.0 || !w.is_finite()) {
        return Err(AlloyBandError::InvalidArgument(format!(
            "well width must be positive, got {}",
            w
        )));
    }
    if let Some(t) = temperatures.iter().find(|t| **t < 0.0 || !t.is_finite()) {
        return Err(AlloyBandError::InvalidArgument(format!(
            "temperature must be a non-negative number, got {}",
            t
        )));
    }

    let sets = bands::band_sets(&session, &temperatures)?;
    let rows = build_wells(&session, &sets, &widths, &compositions, !args.no_plot)?;
    print_transitions(&rows);

    Ok(())
}

/// 命令行给出时覆盖配置列表
fn pick(overrides: &[f64], configured: &[f64]) -> Vec<f64> {
    if overrides.is_empty() {
        configured.to_vec()
    } else {
        overrides.to_vec()
    }
}

/// 量子阱图文件名（不含扩展名）
pub(crate) fn well_stem(temperature: f64, width: f64, composition: f64) -> String {
    format!(
        "Quantum_well_{}K_{}nm_composition_{}",
        format_number(temperature),
        format_number((width / 10.0).trunc()),
        (composition * 100.0).round() as i64
    )
}

/// 量子阱图标题
pub(crate) fn well_title(
    material: &MaterialInfo,
    temperature: f64,
    width: f64,
    composition: f64,
) -> String {
    format!(
        "{}({:.2}){}({:.2}) - {} base for T = {}K and width = {} nm",
        material.element_x,
        composition,
        material.element_rest,
        1.0 - composition,
        material.substrate,
        format_number(temperature),
        format_number((width / 10.0).trunc())
    )
}

/// 构造全部量子阱，返回跃迁能量
pub(crate) fn build_wells(
    session: &Session,
    sets: &[(f64, BandSet)],
    widths: &[f64],
    compositions: &[f64],
    plot: bool,
) -> Result<Vec<TransitionRow>> {
    let reference = session.config.bands.reference_energy();
    let barrier = session.config.well.barrier_composition;
    let total = sets.len() * widths.len() * compositions.len();

    if total == 0 {
        output::print_warning("No quantum wells requested");
        return Ok(Vec::new());
    }

    output::print_info(&format!(
        "Building {} quantum well(s), barrier x = {}",
        total,
        format_number(barrier)
    ));

    let pb = progress::create_progress_bar(total as u64, "Building wells");
    let mut rows = Vec::with_capacity(total);

    for (temperature, set) in sets {
        for &width in widths {
            for &composition in compositions {
                let profile = WellProfile::build(
                    set,
                    &session.grid,
                    &session.positions,
                    width,
                    composition,
                    barrier,
                    reference,
                )?;

                if plot {
                    let stem = well_stem(*temperature, profile.width, profile.composition);
                    let title = well_title(
                        &session.config.material,
                        *temperature,
                        profile.width,
                        profile.composition,
                    );
                    session.save_well_chart(&stem, &title, &profile)?;
                }

                let t = profile.transitions();
                rows.push(TransitionRow {
                    temperature: format_number(*temperature),
                    composition: format!("{:.2}", profile.composition),
                    width: format_number(profile.width / 10.0),
                    strained: format!("{:.6}", t.strained),
                    unstrained: format!("{:.6}", t.unstrained),
                });
                pb.inc(1);
            }
        }
    }

    pb.finish_with_message("Wells done");

    if plot {
        output::print_success(&format!(
            "{} well plot(s) written to '{}'",
            total,
            session.config.output.well_dir().display()
        ));
    }

    Ok(rows)
}

/// 打印阱中心的跃迁能量表
pub(crate) fn print_transitions(rows: &[TransitionRow]) {
    if rows.is_empty() {
        return;
    }
    output::print_info("Transition energies at the well centre:");
    println!("{}", Table::new(rows));
}
