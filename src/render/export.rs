//! # 数据导出
//!
//! 把图表数据导出为 CSV：第一列为横轴，其后每条曲线一列，缺失值留空。
//!
//! ## 依赖关系
//! - 被 `commands/` 调用（--csv）
//! - 使用 `render/chart.rs` 的 Series
//! - 使用 `csv` 库写入 CSV 文件

use crate::error::{AlloyBandError, Result};
use crate::render::chart::Series;

use std::path::Path;

/// 导出曲线为 CSV
pub fn series_to_csv(
    x_header: &str,
    x: &[f64],
    series: &[Series],
    output_path: &Path,
) -> Result<()> {
    let mut wtr = csv::Writer::from_path(output_path)?;

    let mut header = vec![x_header.to_string()];
    header.extend(series.iter().map(|s| s.label.clone()));
    wtr.write_record(&header)?;

    for (i, xi) in x.iter().enumerate() {
        let mut record = Vec::with_capacity(series.len() + 1);
        record.push(format!("{:.6}", xi));
        for s in series {
            record.push(match s.values.get(i).copied().flatten() {
                Some(v) => format!("{:.10}", v),
                None => String::new(),
            });
        }
        wtr.write_record(&record)?;
    }

    wtr.flush().map_err(|e| AlloyBandError::FileWriteError {
        path: output_path.display().to_string(),
        source: e,
    })?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn test_csv_with_gaps() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("thickness.csv");
        let x = [0.0, 0.5, 1.0];
        let series = [
            Series::new("E_V", &[0.0, -0.295, -0.59]),
            Series::with_gaps("h_c", &[Some(17.8), None, Some(3.0)]),
        ];

        series_to_csv("x", &x, &series, &path).unwrap();

        let mut rdr = csv::Reader::from_path(&path).unwrap();
        let headers = rdr.headers().unwrap().clone();
        assert_eq!(headers.iter().collect::<Vec<_>>(), vec!["x", "E_V", "h_c"]);

        let rows: Vec<csv::StringRecord> = rdr.records().map(|r| r.unwrap()).collect();
        assert_eq!(rows.len(), 3);
        assert_eq!(&rows[1][0], "0.500000");
        assert_eq!(&rows[1][2], "");
        let v: f64 = rows[2][1].parse().unwrap();
        assert!((v + 0.59).abs() < 1e-9);
    }
}
