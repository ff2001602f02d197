//! # mass 子命令实现
//!
//! 绘制电子、轻空穴和重空穴有效质量随组分的变化。
//!
//! ## 依赖关系
//! - 使用 `cli/analysis.rs` 定义的 MassArgs
//! - 使用 `physics/mass.rs`
//! - 被 `commands/run.rs` 复用

use crate::cli::analysis::MassArgs;
use crate::commands::session::Session;
use crate::error::Result;
use crate::physics::{effective_masses, EffectiveMasses};
use crate::render::chart::{LegendPosition, LineChart, Series};
use crate::utils::output;

use tabled::{Table, Tabled};

/// 有效质量表的一行
#[derive(Tabled)]
struct MassRow {
    #[tabled(rename = "x")]
    composition: String,
    #[tabled(rename = "m_e")]
    electron: String,
    #[tabled(rename = "m_lh")]
    light_hole: String,
    #[tabled(rename = "m_hh")]
    heavy_hole: String,
}

/// 执行 mass 子命令
pub fn execute(args: MassArgs) -> Result<()> {
    output::print_header("Effective Masses");

    let session = Session::load(&args.common)?;
    let masses = plot_masses(&session)?;

    let rows: Vec<MassRow> = [0, 25, 50, 75, 100]
        .into_iter()
        .map(|i| MassRow {
            composition: format!("{:.2}", session.grid.points()[i]),
            electron: format!("{:.4}", masses.electron[i]),
            light_hole: format!("{:.4}", masses.light_hole[i]),
            heavy_hole: format!("{:.4}", masses.heavy_hole[i]),
        })
        .collect();
    println!();
    println!("{}", Table::new(&rows));

    Ok(())
}

/// 计算并绘制有效质量
pub(crate) fn plot_masses(session: &Session) -> Result<EffectiveMasses> {
    let masses = effective_masses(&session.grid, &session.config.masses);

    let series = [
        Series::new("electrons", &masses.electron),
        Series::new("light holes", &masses.light_hole),
        Series::new("heavy holes", &masses.heavy_hole),
    ];
    let material = &session.config.material;
    let title = format!("{} - {} base", material.title, material.substrate);

    session.save_chart(
        "Effective_mass_plot",
        &LineChart {
            title: &title,
            x_desc: session.x_label(),
            y_desc: "Effective mass [m_e]",
            x: session.grid.points(),
            series: &series,
            legend: LegendPosition::UpperRight,
        },
    )?;

    Ok(masses)
}
