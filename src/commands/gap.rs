//! # gap 子命令实现
//!
//! 计算每个对称点的带隙弯曲曲线，绘制 `energy_plot`，
//! 并按 `--at` 给出的组分打印带隙表。
//!
//! ## 依赖关系
//! - 使用 `cli/analysis.rs` 定义的 GapArgs
//! - 使用 `physics/bandgap.rs` 计算曲线
//! - 被 `commands/run.rs` 复用

use crate::cli::analysis::GapArgs;
use crate::commands::session::Session;
use crate::error::{AlloyBandError, Result};
use crate::physics::bandgap;
use crate::render::chart::{LegendPosition, LineChart, Series};
use crate::utils::output;

use tabled::{Table, Tabled};

/// 带隙表的一行
#[derive(Tabled)]
struct GapRow {
    #[tabled(rename = "x")]
    composition: String,
    #[tabled(rename = "Point")]
    point: String,
    #[tabled(rename = "a (eV)")]
    a: String,
    #[tabled(rename = "b (eV)")]
    b: String,
    #[tabled(rename = "E_g (eV)")]
    energy: String,
}

/// 执行 gap 子命令
pub fn execute(args: GapArgs) -> Result<()> {
    output::print_header("Bandgap Bowing");

    let session = Session::load(&args.common)?;
    plot_gap_curves(&session)?;

    let rows = tabulate(&session, &args.at)?;
    println!();
    println!("{}", Table::new(&rows));

    Ok(())
}

/// 计算并绘制全部对称点的带隙曲线，返回各曲线（第一条为 Γ 点）
pub(crate) fn plot_gap_curves(session: &Session) -> Result<Vec<Vec<f64>>> {
    let points = &session.config.symmetry_points;
    output::print_info(&format!(
        "Bowing curves for {} symmetry point(s) on {} compositions",
        points.len(),
        session.grid.len()
    ));

    let gaps: Vec<Vec<f64>> = points
        .iter()
        .map(|p| bandgap::gap_series(p, &session.grid))
        .collect();

    let series: Vec<Series> = points
        .iter()
        .zip(&gaps)
        .map(|(p, gap)| Series::new(p.label.as_str(), gap))
        .collect();

    session.save_chart(
        "energy_plot",
        &LineChart {
            title: session.title(),
            x_desc: session.x_label(),
            y_desc: "Energy [eV]",
            x: session.grid.points(),
            series: &series,
            legend: LegendPosition::UpperRight,
        },
    )?;

    Ok(gaps)
}

/// 在任意组分上求带隙（不限于网格点）
fn tabulate(session: &Session, compositions: &[f64]) -> Result<Vec<GapRow>> {
    let mut rows = Vec::with_capacity(compositions.len() * session.config.symmetry_points.len());

    for &x in compositions {
        if !(0.0..=1.0).contains(&x) {
            return Err(AlloyBandError::CompositionOutOfRange(x));
        }
        for point in &session.config.symmetry_points {
            let (a, b, c) = point.coefficients();
            rows.push(GapRow {
                composition: format!("{:.3}", x),
                point: point.label.clone(),
                a: format!("{:.4}", a),
                b: format!("{:.4}", b),
                energy: format!("{:.4}", bandgap::energy_at(a, b, c, x)),
            });
        }
    }

    Ok(rows)
}
