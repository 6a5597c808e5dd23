//! # 组成扫描
//!
//! 在 x_A 等间距网格上重复核心计算，得到 D_AB(x_A) 曲线。
//!
//! ## 功能
//! - 每个网格点独立计算，使用 rayon 并行
//! - 结果按 x_A 升序排列
//! - 任意一点出现定义域错误则整个扫描失败
//!
//! ## 依赖关系
//! - 被 `commands/sweep.rs` 调用
//! - 使用 `diffusion/calculator.rs`

use crate::diffusion::calculator;
use crate::error::{MixdiffError, Result};
use crate::models::{DiffusionInputs, DiffusionResult};

use rayon::prelude::*;

/// 生成等间距组成网格，端点精确等于 x_min 和 x_max
pub fn composition_grid(x_min: f64, x_max: f64, points: usize) -> Result<Vec<f64>> {
    if points < 2 {
        return Err(MixdiffError::InvalidArgument(format!(
            "a sweep needs at least 2 points (got {})",
            points
        )));
    }
    if !(0.0..=1.0).contains(&x_min) || !(0.0..=1.0).contains(&x_max) || x_max <= x_min {
        return Err(MixdiffError::InvalidRange(format!(
            "{}-{} (must be 0 <= min < max <= 1)",
            x_min, x_max
        )));
    }

    let step = (x_max - x_min) / (points - 1) as f64;
    let mut grid: Vec<f64> = (0..points).map(|i| x_min + i as f64 * step).collect();
    grid[points - 1] = x_max;
    Ok(grid)
}

/// 并行计算整条组成曲线
pub fn sweep(
    inputs: &DiffusionInputs,
    x_min: f64,
    x_max: f64,
    points: usize,
) -> Result<Vec<DiffusionResult>> {
    let grid = composition_grid(x_min, x_max, points)?;

    grid.par_iter()
        .map(|&x_a| calculator::compute(&inputs.with_x_a(x_a)))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_grid_endpoints() {
        let grid = composition_grid(0.0, 1.0, 11).unwrap();
        assert_eq!(grid.len(), 11);
        assert_eq!(grid[0], 0.0);
        assert_eq!(grid[10], 1.0);
        assert!((grid[3] - 0.3).abs() < 1e-12);
    }

    #[test]
    fn test_grid_rejects_bad_arguments() {
        assert!(composition_grid(0.0, 1.0, 1).is_err());
        assert!(composition_grid(0.5, 0.5, 10).is_err());
        assert!(composition_grid(-0.1, 0.5, 10).is_err());
        assert!(composition_grid(0.2, 1.5, 10).is_err());
    }

    #[test]
    fn test_sweep_is_ordered_and_hits_pure_limits() {
        let ideal = DiffusionInputs {
            a_ab: 0.0,
            a_ba: 0.0,
            ..Default::default()
        };
        let curve = sweep(&ideal, 0.0, 1.0, 21).unwrap();

        assert_eq!(curve.len(), 21);
        for pair in curve.windows(2) {
            assert!(pair[1].x_a > pair[0].x_a);
            assert!(pair[1].d_ab >= pair[0].d_ab);
        }
        assert_eq!(curve[0].d_ab, ideal.d_ab0);
        assert_eq!(curve[20].d_ab, ideal.d_ba0);
    }

    #[test]
    fn test_sweep_matches_single_calls() {
        let inputs = DiffusionInputs::default();
        let curve = sweep(&inputs, 0.1, 0.9, 5).unwrap();
        for point in &curve {
            let single = calculator::compute(&inputs.with_x_a(point.x_a)).unwrap();
            assert_eq!(single.d_ab.to_bits(), point.d_ab.to_bits());
        }
    }

    #[test]
    fn test_sweep_propagates_domain_error() {
        let inputs = DiffusionInputs {
            temperature: 0.0,
            ..Default::default()
        };
        let err = sweep(&inputs, 0.0, 1.0, 5).unwrap_err();
        assert!(err.is_domain_error());
    }
}
