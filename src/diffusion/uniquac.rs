//! # UNIQUAC 活度系数模型
//!
//! 二元体系的 UNIQUAC 局部组成模型。
//!
//! ## 公式
//! ```text
//! τ_ij = exp(-a_ij / T)
//! θ_A  = x_A q_A / (x_A q_A + x_B q_B)
//! Φ_A  = x_A r_A / (x_A r_A + x_B r_B)
//!
//! ln γ_A^R = -q_A ln(θ_A + θ_B τ_BA)
//!            + θ_B q_A [τ_BA / (θ_A + θ_B τ_BA) - τ_AB / (θ_B + θ_A τ_AB)]
//!
//! ln γ_A^C = ln(Φ_A / x_A) + (z/2) q_A ln(θ_A / Φ_A) + Φ_B (l_A - r_A/r_B l_B)
//! l_i      = (z/2)(r_i - q_i) - (r_i - 1),  z = 10
//!
//! Γ = 1 + ∂ln γ_A^R / ∂ln x_A
//! ```
//!
//! 热力学因子只取剩余项，理想混合 (a_AB = a_BA = 0) 时 Γ 恒为 1。
//! 组合项只用于活度系数输出。
//!
//! ## 参考
//! - Abrams & Prausnitz, AIChE J. 21 (1975) 116
//! - Poling, Prausnitz & O'Connell, The Properties of Gases and Liquids, 5th ed., §8
//!
//! ## 依赖关系
//! - 被 `diffusion/calculator.rs`, `commands/compute.rs` 使用
//! - 使用 `models/mixture.rs`

use crate::diffusion::ensure_finite;
use crate::error::{MixdiffError, Result};
use crate::models::DiffusionInputs;

/// 晶格配位数 z
pub const COORDINATION_NUMBER: f64 = 10.0;

/// 二元交互参数 τ = exp(-a / T)
pub fn interaction_parameter(a: f64, temperature: f64) -> Result<f64> {
    if !(temperature > 0.0 && temperature.is_finite()) {
        return Err(MixdiffError::DomainError(format!(
            "temperature must be positive and finite (got {})",
            temperature
        )));
    }
    ensure_finite((-a / temperature).exp(), "interaction parameter τ")
}

/// 表面积分数 (θ_A, θ_B)
pub fn surface_fractions(x_a: f64, q_a: f64, q_b: f64) -> Result<(f64, f64)> {
    let weighted = x_a * q_a + (1.0 - x_a) * q_b;
    if weighted == 0.0 {
        return Err(MixdiffError::DomainError(
            "x_A·q_A + x_B·q_B is zero, surface fractions undefined".to_string(),
        ));
    }
    let theta_a = ensure_finite(x_a * q_a / weighted, "surface fraction θ_A")?;
    Ok((theta_a, 1.0 - theta_a))
}

/// 体积（链节）分数 (Φ_A, Φ_B)
pub fn segment_fractions(x_a: f64, r_a: f64, r_b: f64) -> Result<(f64, f64)> {
    let weighted = x_a * r_a + (1.0 - x_a) * r_b;
    if weighted == 0.0 {
        return Err(MixdiffError::DomainError(
            "x_A·r_A + x_B·r_B is zero, segment fractions undefined".to_string(),
        ));
    }
    let phi_a = ensure_finite(x_a * r_a / weighted, "segment fraction Φ_A")?;
    Ok((phi_a, 1.0 - phi_a))
}

/// 剩余项 ln γ_i^R（i 为目标组分，j 为另一组分）
fn residual_ln_gamma(q_i: f64, theta_i: f64, theta_j: f64, tau_ij: f64, tau_ji: f64) -> f64 {
    let s_i = theta_i + theta_j * tau_ji;
    let s_j = theta_j + theta_i * tau_ij;
    -q_i * s_i.ln() + theta_j * q_i * (tau_ji / s_i - tau_ij / s_j)
}

/// 组合项 ln γ_i^C
///
/// 比值写成 r_i / Σr 与 q_i Σr / (r_i Σq) 的形式，x_i → 0 时仍然有限。
fn combinatorial_ln_gamma(x_i: f64, r_i: f64, r_j: f64, q_i: f64, q_j: f64) -> f64 {
    let x_j = 1.0 - x_i;
    let sum_r = x_i * r_i + x_j * r_j;
    let sum_q = x_i * q_i + x_j * q_j;
    let phi_j = x_j * r_j / sum_r;

    let half_z = COORDINATION_NUMBER / 2.0;
    let l_i = half_z * (r_i - q_i) - (r_i - 1.0);
    let l_j = half_z * (r_j - q_j) - (r_j - 1.0);

    (r_i / sum_r).ln()
        + half_z * q_i * (q_i * sum_r / (r_i * sum_q)).ln()
        + phi_j * (l_i - r_i / r_j * l_j)
}

/// 热力学因子 Γ = 1 + x_A · d ln γ_A^R / dx_A
///
/// 对 θ_A 解析求导，再乘以 dθ_A/dx_A = q_A q_B / (x_A q_A + x_B q_B)²。
pub fn thermodynamic_factor(x_a: f64, q_a: f64, q_b: f64, tau_ab: f64, tau_ba: f64) -> Result<f64> {
    let (theta_a, theta_b) = surface_fractions(x_a, q_a, q_b)?;
    let weighted = x_a * q_a + (1.0 - x_a) * q_b;

    let s_a = theta_a + theta_b * tau_ba;
    let s_b = theta_b + theta_a * tau_ab;
    if s_a == 0.0 || s_b == 0.0 {
        return Err(MixdiffError::DomainError(
            "degenerate UNIQUAC local-composition denominator".to_string(),
        ));
    }

    let d_ln_gamma_d_theta = -q_a * (1.0 - tau_ba) / s_a
        + q_a
            * (-(tau_ba / s_a - tau_ab / s_b)
                + theta_b
                    * (-tau_ba * (1.0 - tau_ba) / (s_a * s_a)
                        + tau_ab * (tau_ab - 1.0) / (s_b * s_b)));
    let d_theta_dx = q_a * q_b / (weighted * weighted);

    ensure_finite(
        1.0 + x_a * d_ln_gamma_d_theta * d_theta_dx,
        "thermodynamic factor Γ",
    )
}

/// 二元体系活度系数
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ActivityCoefficients {
    pub ln_gamma_a: f64,
    pub ln_gamma_b: f64,
    pub gamma_a: f64,
    pub gamma_b: f64,
}

/// 完整 UNIQUAC 活度系数（组合项 + 剩余项）
pub fn activity_coefficients(inputs: &DiffusionInputs) -> Result<ActivityCoefficients> {
    let tau_ab = interaction_parameter(inputs.a_ab, inputs.temperature)?;
    let tau_ba = interaction_parameter(inputs.a_ba, inputs.temperature)?;
    let (theta_a, theta_b) = surface_fractions(inputs.x_a, inputs.q_a, inputs.q_b)?;
    segment_fractions(inputs.x_a, inputs.r_a, inputs.r_b)?;

    let ln_gamma_a = combinatorial_ln_gamma(
        inputs.x_a,
        inputs.r_a,
        inputs.r_b,
        inputs.q_a,
        inputs.q_b,
    ) + residual_ln_gamma(inputs.q_a, theta_a, theta_b, tau_ab, tau_ba);
    let ln_gamma_b = combinatorial_ln_gamma(
        inputs.x_b(),
        inputs.r_b,
        inputs.r_a,
        inputs.q_b,
        inputs.q_a,
    ) + residual_ln_gamma(inputs.q_b, theta_b, theta_a, tau_ba, tau_ab);

    let ln_gamma_a = ensure_finite(ln_gamma_a, "ln γ_A")?;
    let ln_gamma_b = ensure_finite(ln_gamma_b, "ln γ_B")?;

    Ok(ActivityCoefficients {
        ln_gamma_a,
        ln_gamma_b,
        gamma_a: ensure_finite(ln_gamma_a.exp(), "γ_A")?,
        gamma_b: ensure_finite(ln_gamma_b.exp(), "γ_B")?,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn default_taus() -> (f64, f64) {
        let inputs = DiffusionInputs::default();
        (
            interaction_parameter(inputs.a_ab, inputs.temperature).unwrap(),
            interaction_parameter(inputs.a_ba, inputs.temperature).unwrap(),
        )
    }

    #[test]
    fn test_interaction_parameter() {
        let tau = interaction_parameter(0.0, 300.0).unwrap();
        assert_eq!(tau, 1.0);

        let tau = interaction_parameter(194.5302, 313.13).unwrap();
        assert!((tau - (-194.5302_f64 / 313.13).exp()).abs() < 1e-15);
    }

    #[test]
    fn test_zero_temperature_is_domain_error() {
        let err = interaction_parameter(10.0, 0.0).unwrap_err();
        assert!(err.is_domain_error());

        let err = interaction_parameter(10.0, -5.0).unwrap_err();
        assert!(err.is_domain_error());
    }

    #[test]
    fn test_tau_overflow_is_domain_error() {
        let err = interaction_parameter(-1.0e6, 1.0).unwrap_err();
        assert!(err.is_domain_error());
    }

    #[test]
    fn test_surface_fractions() {
        let (theta_a, theta_b) = surface_fractions(0.25, 1.432, 1.4).unwrap();
        assert!((theta_a - 0.358 / 1.408).abs() < 1e-12);
        assert!((theta_a + theta_b - 1.0).abs() < 1e-15);

        assert!(surface_fractions(0.5, 0.0, 0.0).unwrap_err().is_domain_error());
    }

    #[test]
    fn test_ideal_mixture_factor_is_one() {
        for &x in &[0.0, 0.1, 0.37, 0.5, 0.9, 1.0] {
            for &(qa, qb) in &[(1.432, 1.4), (0.5, 3.2), (2.0, 0.7)] {
                let gamma = thermodynamic_factor(x, qa, qb, 1.0, 1.0).unwrap();
                assert!((gamma - 1.0).abs() < 1e-14, "x = {}, Γ = {}", x, gamma);
            }
        }
    }

    #[test]
    fn test_factor_matches_finite_difference() {
        let (tau_ab, tau_ba) = default_taus();
        let (qa, qb) = (1.432, 1.4);
        let ln_gamma = |x: f64| {
            let (ta, tb) = surface_fractions(x, qa, qb).unwrap();
            residual_ln_gamma(qa, ta, tb, tau_ab, tau_ba)
        };

        for &x in &[0.1, 0.25, 0.5, 0.8] {
            let h = 1e-6;
            let derivative = (ln_gamma(x + h) - ln_gamma(x - h)) / (2.0 * h);
            let expected = 1.0 + x * derivative;
            let gamma = thermodynamic_factor(x, qa, qb, tau_ab, tau_ba).unwrap();
            assert!(
                (gamma - expected).abs() < 1e-7,
                "x = {}: closed form {} vs numeric {}",
                x,
                gamma,
                expected
            );
        }
    }

    #[test]
    fn test_factor_regression_value() {
        let (tau_ab, tau_ba) = default_taus();
        let gamma = thermodynamic_factor(0.25, 1.432, 1.4, tau_ab, tau_ba).unwrap();
        assert!((gamma - 0.671_715_316).abs() < 1e-8);
    }

    #[test]
    fn test_identical_components_are_ideal() {
        let inputs = DiffusionInputs {
            x_a: 0.3,
            r_a: 1.2,
            r_b: 1.2,
            q_a: 1.1,
            q_b: 1.1,
            a_ab: 0.0,
            a_ba: 0.0,
            ..Default::default()
        };
        let act = activity_coefficients(&inputs).unwrap();
        assert!(act.ln_gamma_a.abs() < 1e-12);
        assert!(act.ln_gamma_b.abs() < 1e-12);
        assert!((act.gamma_a - 1.0).abs() < 1e-12);
    }

    #[test]
    fn test_gibbs_duhem_consistency() {
        let base = DiffusionInputs::default();
        let ln_gammas = |x: f64| {
            let act = activity_coefficients(&base.with_x_a(x)).unwrap();
            (act.ln_gamma_a, act.ln_gamma_b)
        };

        for &x in &[0.2, 0.45, 0.7] {
            let h = 1e-6;
            let (a_plus, b_plus) = ln_gammas(x + h);
            let (a_minus, b_minus) = ln_gammas(x - h);
            let d_a = (a_plus - a_minus) / (2.0 * h);
            let d_b = (b_plus - b_minus) / (2.0 * h);
            let residual = x * d_a + (1.0 - x) * d_b;
            assert!(residual.abs() < 1e-6, "x = {}: {}", x, residual);
        }
    }

    #[test]
    fn test_activity_at_pure_limits_is_finite() {
        let base = DiffusionInputs::default();
        let dilute = activity_coefficients(&base.with_x_a(0.0)).unwrap();
        assert!(dilute.gamma_a.is_finite());
        assert!(dilute.ln_gamma_b.abs() < 1e-12);

        let pure = activity_coefficients(&base.with_x_a(1.0)).unwrap();
        assert!(pure.ln_gamma_a.abs() < 1e-12);
        assert!(pure.gamma_b.is_finite());
    }
}
