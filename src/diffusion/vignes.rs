//! # Vignes 关联式
//!
//! 在两个无限稀释扩散系数之间做对数线性插值：
//! ```text
//! D_base = D_AB0^x_B · D_BA0^x_A
//! ```
//!
//! ## 依赖关系
//! - 被 `diffusion/calculator.rs` 使用

use crate::diffusion::ensure_finite;
use crate::error::Result;

/// Vignes 基础扩散系数
pub fn base_diffusivity(x_a: f64, d_ab0: f64, d_ba0: f64) -> Result<f64> {
    let x_b = 1.0 - x_a;
    ensure_finite(
        d_ab0.powf(x_b) * d_ba0.powf(x_a),
        "Vignes base diffusivity",
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pure_limits() {
        assert_eq!(base_diffusivity(0.0, 2.1e-5, 2.67e-5).unwrap(), 2.1e-5);
        assert_eq!(base_diffusivity(1.0, 2.1e-5, 2.67e-5).unwrap(), 2.67e-5);
    }

    #[test]
    fn test_geometric_mean_at_equimolar() {
        let d = base_diffusivity(0.5, 1.0e-5, 4.0e-5).unwrap();
        assert!((d - 2.0e-5).abs() < 1e-18);
    }

    #[test]
    fn test_monotonic_between_limits() {
        let (d_ab0, d_ba0) = (2.1e-5, 2.67e-5);
        let values: Vec<f64> = (0..=20)
            .map(|i| base_diffusivity(i as f64 / 20.0, d_ab0, d_ba0).unwrap())
            .collect();

        for pair in values.windows(2) {
            assert!(pair[1] >= pair[0]);
        }
        assert!(values.iter().all(|d| *d >= d_ab0 && *d <= d_ba0));
    }

    #[test]
    fn test_negative_base_is_domain_error() {
        let err = base_diffusivity(0.3, -1.0e-5, 2.0e-5).unwrap_err();
        assert!(err.is_domain_error());
    }
}
