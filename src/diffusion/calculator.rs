//! # 互扩散系数计算器
//!
//! 实现二元液体混合物互扩散系数的核心计算。
//!
//! ## 算法概述
//! 1. x_B = 1 - x_A
//! 2. τ_AB = exp(-a_AB/T), τ_BA = exp(-a_BA/T)
//! 3. 表面积分数 θ_A, θ_B
//! 4. UNIQUAC 热力学因子 Γ
//! 5. Vignes 基础扩散系数 D_base = D_AB0^x_B · D_BA0^x_A
//! 6. D_AB = D_base · Γ
//! 7. 相对误差 (D_AB - D_exp) / D_exp（带符号）
//!
//! 计算是纯函数：不做范围校验（由调用层负责），只拒绝数学上无定义的输入。
//!
//! ## 依赖关系
//! - 被 `diffusion/sweep.rs`, `commands/` 调用
//! - 使用 `diffusion/uniquac.rs`, `diffusion/vignes.rs`

use crate::diffusion::{ensure_finite, uniquac, vignes};
use crate::error::{MixdiffError, Result};
use crate::models::{DiffusionInputs, DiffusionResult};

/// 计算互扩散系数及其与实验值的相对误差
pub fn compute(inputs: &DiffusionInputs) -> Result<DiffusionResult> {
    let x_a = inputs.x_a;
    let x_b = inputs.x_b();

    let tau_ab = uniquac::interaction_parameter(inputs.a_ab, inputs.temperature)?;
    let tau_ba = uniquac::interaction_parameter(inputs.a_ba, inputs.temperature)?;

    let gamma = uniquac::thermodynamic_factor(x_a, inputs.q_a, inputs.q_b, tau_ab, tau_ba)?;
    let base = vignes::base_diffusivity(x_a, inputs.d_ab0, inputs.d_ba0)?;

    let d_ab = ensure_finite(base * gamma, "diffusion coefficient D_AB")?;
    let error = relative_error(d_ab, inputs.d_exp)?;

    Ok(DiffusionResult {
        x_a,
        x_b,
        d_ab,
        d_exp: inputs.d_exp,
        relative_error: error,
        thermodynamic_factor: gamma,
        base_diffusivity: base,
    })
}

/// 按表单字段顺序的标量接口，返回 (D_AB, 相对误差)
#[allow(clippy::too_many_arguments)]
pub fn calculate_diffusion_coefficient(
    x_a: f64,
    d_ab0: f64,
    d_ba0: f64,
    q_a: f64,
    q_b: f64,
    temperature: f64,
    a_ab: f64,
    a_ba: f64,
    r_a: f64,
    r_b: f64,
    d_exp: f64,
) -> Result<(f64, f64)> {
    let result = compute(&DiffusionInputs {
        x_a,
        d_ab0,
        d_ba0,
        r_a,
        r_b,
        q_a,
        q_b,
        temperature,
        a_ab,
        a_ba,
        d_exp,
    })?;
    Ok((result.d_ab, result.relative_error))
}

/// 带符号相对误差 (计算值 - 实验值) / 实验值
pub fn relative_error(computed: f64, experimental: f64) -> Result<f64> {
    if experimental == 0.0 {
        return Err(MixdiffError::DomainError(
            "experimental diffusion coefficient is zero, relative error undefined".to_string(),
        ));
    }
    ensure_finite((computed - experimental) / experimental, "relative error")
}
