//! # 扩散数据导出
//!
//! 导出计算结果到 CSV 和 XY 格式。
//!
//! ## 支持格式
//! - CSV: x_A, x_B, D_AB, D_base, Γ, D_exp, 相对误差
//! - XY: 两列 (x_A, D_AB)，带注释头
//!
//! ## 依赖关系
//! - 被 `commands/compute.rs`, `commands/sweep.rs` 调用
//! - 使用 `models/mixture.rs` 的 DiffusionResult
//! - 使用 `csv` 库写入 CSV 文件

use crate::error::{MixdiffError, Result};
use crate::models::{DiffusionInputs, DiffusionResult};

use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

/// 导出结果为 CSV 格式（每个结果一行）
pub fn to_csv(results: &[DiffusionResult], output_path: &Path) -> Result<()> {
    let mut wtr = csv::Writer::from_path(output_path)?;

    wtr.write_record([
        "x_A",
        "x_B",
        "D_AB",
        "D_base",
        "thermodynamic_factor",
        "D_exp",
        "relative_error",
    ])?;

    for r in results {
        wtr.write_record(&[
            format!("{:.6}", r.x_a),
            format!("{:.6}", r.x_b),
            format!("{:.8e}", r.d_ab),
            format!("{:.8e}", r.base_diffusivity),
            format!("{:.8}", r.thermodynamic_factor),
            format!("{:.8e}", r.d_exp),
            format!("{:.8}", r.relative_error),
        ])?;
    }

    wtr.flush().map_err(|e| MixdiffError::FileWriteError {
        path: output_path.display().to_string(),
        source: e,
    })?;

    Ok(())
}

/// 导出组成曲线为 XY 格式
pub fn to_xy(
    results: &[DiffusionResult],
    inputs: &DiffusionInputs,
    output_path: &Path,
) -> Result<()> {
    let write_err = |e: std::io::Error| MixdiffError::FileWriteError {
        path: output_path.display().to_string(),
        source: e,
    };

    let file = File::create(output_path).map_err(write_err)?;
    let mut out = BufWriter::new(file);

    writeln!(out, "# Mutual diffusion coefficient vs composition").map_err(write_err)?;
    writeln!(
        out,
        "# T = {} K, D_AB0 = {:e}, D_BA0 = {:e}",
        inputs.temperature, inputs.d_ab0, inputs.d_ba0
    )
    .map_err(write_err)?;
    writeln!(
        out,
        "# UNIQUAC: r = ({}, {}), q = ({}, {}), a_AB = {}, a_BA = {}",
        inputs.r_a, inputs.r_b, inputs.q_a, inputs.q_b, inputs.a_ab, inputs.a_ba
    )
    .map_err(write_err)?;
    writeln!(out, "# Columns: x_A, D_AB").map_err(write_err)?;
    writeln!(out, "#").map_err(write_err)?;

    for r in results {
        writeln!(out, "{:.6}\t{:.8e}", r.x_a, r.d_ab).map_err(write_err)?;
    }

    out.flush().map_err(write_err)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::diffusion::sweep;
    use std::fs;

    fn temp_path(name: &str) -> std::path::PathBuf {
        std::env::temp_dir().join(format!("mixdiff_{}_{}", std::process::id(), name))
    }

    #[test]
    fn test_csv_export() {
        let inputs = DiffusionInputs::default();
        let curve = sweep::sweep(&inputs, 0.0, 1.0, 3).unwrap();
        let path = temp_path("curve.csv");

        to_csv(&curve, &path).unwrap();
        let content = fs::read_to_string(&path).unwrap();
        fs::remove_file(&path).ok();

        let lines: Vec<&str> = content.lines().collect();
        assert_eq!(lines.len(), 4);
        assert!(lines[0].starts_with("x_A,x_B,D_AB"));
        assert!(lines[1].starts_with("0.000000,1.000000,"));
    }

    #[test]
    fn test_xy_export() {
        let inputs = DiffusionInputs::default();
        let curve = sweep::sweep(&inputs, 0.0, 1.0, 5).unwrap();
        let path = temp_path("curve.xy");

        to_xy(&curve, &inputs, &path).unwrap();
        let content = fs::read_to_string(&path).unwrap();
        fs::remove_file(&path).ok();

        let data: Vec<&str> = content.lines().filter(|l| !l.starts_with('#')).collect();
        assert_eq!(data.len(), 5);
        assert!(content.contains("T = 313.13 K"));
        let cols: Vec<&str> = data[4].split('\t').collect();
        assert_eq!(cols[0], "1.000000");
    }
}
