//! # thickness 子命令实现
//!
//! 用二分法逐点求解 Matthews–Blakeslee 方程，绘制完整曲线
//! 和只含前一半组分的 "reduced" 曲线。
//!
//! ## 依赖关系
//! - 使用 `cli/thickness.rs` 定义的 ThicknessArgs
//! - 使用 `physics/critical.rs`, `physics/bisection.rs`
//! - 被 `commands/run.rs` 复用

use crate::cli::thickness::ThicknessArgs;
use crate::commands::session::Session;
use crate::error::{AlloyBandError, Result};
use crate::models::CriticalParameters;
use crate::physics::{critical_thickness, Bisection, CriticalThickness};
use crate::render::chart::{LegendPosition, LineChart, Series};
use crate::utils::{output, progress};

use tabled::{Table, Tabled};

/// 最多逐条列出的失败点数
const MAX_LISTED_FAILURES: usize = 5;

/// 临界厚度表的一行
#[derive(Tabled)]
struct ThicknessRow {
    #[tabled(rename = "x")]
    composition: String,
    #[tabled(rename = "h_c (Å)")]
    angstrom: String,
    #[tabled(rename = "h_c (nm)")]
    nanometre: String,
}

/// 执行 thickness 子命令
pub fn execute(args: ThicknessArgs) -> Result<()> {
    output::print_header("Critical Thickness (Matthews-Blakeslee)");

    let session = Session::load(&args.common)?;
    let (solver, bracket) = solver_settings(&session.config.critical, &args)?;

    let result = solve_and_plot(&session, &solver, bracket)?;

    let rows: Vec<ThicknessRow> = session
        .grid
        .points()
        .iter()
        .zip(&result.values)
        .step_by(10)
        .map(|(x, h)| ThicknessRow {
            composition: format!("{:.2}", x),
            angstrom: h.map_or_else(|| "-".to_string(), |h| format!("{:.2}", h)),
            nanometre: h.map_or_else(|| "-".to_string(), |h| format!("{:.3}", h / 10.0)),
        })
        .collect();
    println!();
    println!("{}", Table::new(&rows));

    Ok(())
}

/// 解析区间参数（如 "10-7000"）
pub fn parse_bracket(range: &str) -> Result<(f64, f64)> {
    let parts: Vec<&str> = range.split('-').collect();
    if parts.len() != 2 {
        return Err(AlloyBandError::InvalidRange(format!(
            "Invalid bracket '{}', expected format 'MIN-MAX'",
            range
        )));
    }

    let min: f64 = parts[0].trim().parse().map_err(|_| {
        AlloyBandError::InvalidRange(format!("Invalid minimum value: '{}'", parts[0]))
    })?;
    let max: f64 = parts[1].trim().parse().map_err(|_| {
        AlloyBandError::InvalidRange(format!("Invalid maximum value: '{}'", parts[1]))
    })?;

    if min <= 0.0 || min >= max {
        return Err(AlloyBandError::InvalidRange(format!(
            "Bracket must satisfy 0 < min < max, got {}-{}",
            min, max
        )));
    }

    Ok((min, max))
}

/// 合并配置与命令行，得到求解器和初始区间
fn solver_settings(
    params: &CriticalParameters,
    args: &ThicknessArgs,
) -> Result<(Bisection, (f64, f64))> {
    let tolerance = args.tolerance.unwrap_or(params.tolerance);
    if tolerance <= 0.0 || !tolerance.is_finite() {
        return Err(AlloyBandError::InvalidArgument(format!(
            "tolerance must be positive, got {}",
            tolerance
        )));
    }

    let max_iterations = args.max_iterations.unwrap_or(params.max_iterations);
    if max_iterations == 0 {
        return Err(AlloyBandError::InvalidArgument(
            "max-iterations must be at least 1".to_string(),
        ));
    }

    let bracket = match &args.bracket {
        Some(range) => parse_bracket(range)?,
        None => (params.h_min, params.h_max),
    };

    Ok((Bisection::new(tolerance, max_iterations), bracket))
}

/// 求解临界厚度并写出两张图
pub(crate) fn solve_and_plot(
    session: &Session,
    solver: &Bisection,
    bracket: (f64, f64),
) -> Result<CriticalThickness> {
    let grid = &session.grid;
    output::print_info(&format!(
        "Solving on [{}, {}] Å, tolerance {:e}, at most {} iterations",
        bracket.0, bracket.1, solver.tolerance, solver.max_iterations
    ));

    let pb = progress::create_progress_bar(
        grid.len().saturating_sub(1) as u64,
        "Matthews-Blakeslee",
    );
    let result = critical_thickness(grid, &session.config.bands, solver, bracket, |_| pb.inc(1));
    pb.finish_with_message("Solved");

    report_failures(session, &result);

    let material = &session.config.material;
    let series = Series::with_gaps("h_c", &result.values);
    let full_title = format!("Critical thickness for {} on {}", material.title, material.substrate);
    session.save_chart(
        "Critical_thickness",
        &LineChart {
            title: &full_title,
            x_desc: session.x_label(),
            y_desc: "Critical thickness [Å]",
            x: grid.points(),
            series: std::slice::from_ref(&series),
            legend: LegendPosition::UpperLeft,
        },
    )?;

    let reduced_x = grid.first_half();
    let reduced = [series.truncated(reduced_x.len())];
    let reduced_title = format!("{} - reduced", full_title);
    session.save_chart(
        "Critical_thickness_reduced",
        &LineChart {
            title: &reduced_title,
            x_desc: session.x_label(),
            y_desc: "Critical thickness [Å]",
            x: reduced_x,
            series: &reduced,
            legend: LegendPosition::UpperLeft,
        },
    )?;

    Ok(result)
}

fn report_failures(session: &Session, result: &CriticalThickness) {
    let solved = session.grid.len().saturating_sub(1);
    if result.failures.is_empty() {
        output::print_success(&format!("All {} compositions converged", solved));
        return;
    }

    output::print_warning(&format!(
        "{} of {} compositions converged, the rest are left blank",
        result.converged(),
        solved
    ));
    for (index, err) in result.failures.iter().take(MAX_LISTED_FAILURES) {
        output::print_warning(&format!(
            "  x = {:.2}: {}",
            session.grid.points()[*index],
            err
        ));
    }
    if result.failures.len() > MAX_LISTED_FAILURES {
        output::print_warning(&format!(
            "  ... and {} more",
            result.failures.len() - MAX_LISTED_FAILURES
        ));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cli::common::CommonArgs;

    fn args(tolerance: Option<f64>, bracket: Option<&str>, max_iterations: Option<usize>) -> ThicknessArgs {
        ThicknessArgs {
            common: CommonArgs::default(),
            tolerance,
            bracket: bracket.map(str::to_string),
            max_iterations,
        }
    }

    #[test]
    fn test_parse_bracket() {
        assert_eq!(parse_bracket("10-7000").unwrap(), (10.0, 7000.0));
        assert_eq!(parse_bracket(" 5.5 - 20 ").unwrap(), (5.5, 20.0));
        assert!(parse_bracket("10").is_err());
        assert!(parse_bracket("a-7000").is_err());
        assert!(parse_bracket("7000-10").is_err());
        assert!(parse_bracket("0-10").is_err());
    }

    #[test]
    fn test_solver_settings_defaults_and_overrides() {
        let params = CriticalParameters::default();

        let (solver, bracket) = solver_settings(&params, &args(None, None, None)).unwrap();
        assert_eq!(solver.tolerance, 1e-12);
        assert_eq!(solver.max_iterations, 500);
        assert_eq!(bracket, (10.0, 7000.0));

        let (solver, bracket) =
            solver_settings(&params, &args(Some(1e-6), Some("20-500"), Some(50))).unwrap();
        assert_eq!(solver.tolerance, 1e-6);
        assert_eq!(solver.max_iterations, 50);
        assert_eq!(bracket, (20.0, 500.0));
    }

    #[test]
    fn test_solver_settings_rejects_bad_values() {
        let params = CriticalParameters::default();
        assert!(matches!(
            solver_settings(&params, &args(Some(0.0), None, None)),
            Err(AlloyBandError::InvalidArgument(_))
        ));
        assert!(matches!(
            solver_settings(&params, &args(None, None, Some(0))),
            Err(AlloyBandError::InvalidArgument(_))
        ));
        assert!(matches!(
            solver_settings(&params, &args(None, Some("7000-10"), None)),
            Err(AlloyBandError::InvalidRange(_))
        ));
    }
}
