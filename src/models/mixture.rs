//! # 二元液体混合物数据模型
//!
//! 存储一次扩散系数计算的输入与输出。
//!
//! ## 字段约定
//! - 扩散系数单位由调用者决定，输出与输入同单位（通常为 cm²/s）
//! - 温度为绝对温度 (K)
//! - `a_ab`, `a_ba` 为 UNIQUAC 二元交互能参数 (K)，可正可负
//!
//! ## 依赖关系
//! - 被 `diffusion/`, `parsers/`, `commands/` 使用
//! - 使用 `error.rs`

use crate::error::{MixdiffError, Result};
use serde::{Deserialize, Serialize};

/// 一次计算的全部物性输入
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DiffusionInputs {
    /// 组分 A 的摩尔分数 x_A ∈ [0, 1]
    pub x_a: f64,
    /// A 在 B 中的无限稀释扩散系数
    pub d_ab0: f64,
    /// B 在 A 中的无限稀释扩散系数
    pub d_ba0: f64,
    /// UNIQUAC 体积参数 r_A
    pub r_a: f64,
    /// UNIQUAC 体积参数 r_B
    pub r_b: f64,
    /// UNIQUAC 表面积参数 q_A
    pub q_a: f64,
    /// UNIQUAC 表面积参数 q_B
    pub q_b: f64,
    /// 绝对温度 (K)
    pub temperature: f64,
    /// 交互能参数 a_AB (K)
    pub a_ab: f64,
    /// 交互能参数 a_BA (K)
    pub a_ba: f64,
    /// 实验扩散系数，仅用于误差计算
    pub d_exp: f64,
}

impl Default for DiffusionInputs {
    fn default() -> Self {
        DiffusionInputs {
            x_a: 0.25,
            d_ab0: 2.1e-5,
            d_ba0: 2.67e-5,
            r_a: 1.4311,
            r_b: 0.92,
            q_a: 1.432,
            q_b: 1.4,
            temperature: 313.13,
            a_ab: -10.7575,
            a_ba: 194.5302,
            d_exp: 1.33e-5,
        }
    }
}

impl DiffusionInputs {
    /// 组分 B 的摩尔分数
    pub fn x_b(&self) -> f64 {
        1.0 - self.x_a
    }

    /// 返回替换了 x_A 的副本（组成扫描使用）
    pub fn with_x_a(&self, x_a: f64) -> Self {
        DiffusionInputs { x_a, ..*self }
    }

    /// 调用层输入校验
    ///
    /// 核心计算不做范围检查，这里拒绝表单层面就不合法的值。
    pub fn validate(&self) -> Result<()> {
        let fields = [
            ("x_A", self.x_a),
            ("D_AB0", self.d_ab0),
            ("D_BA0", self.d_ba0),
            ("ra", self.r_a),
            ("rb", self.r_b),
            ("q_A", self.q_a),
            ("q_B", self.q_b),
            ("T", self.temperature),
            ("a_AB", self.a_ab),
            ("a_BA", self.a_ba),
            ("D_exp", self.d_exp),
        ];
        if let Some((name, value)) = fields.iter().find(|(_, v)| !v.is_finite()) {
            return Err(MixdiffError::InvalidInput(format!(
                "{} must be a finite number (got {})",
                name, value
            )));
        }

        if !(0.0..=1.0).contains(&self.x_a) {
            return Err(MixdiffError::InvalidInput(format!(
                "mole fraction x_A must be between 0 and 1 (got {})",
                self.x_a
            )));
        }

        let positive = [
            ("D_AB0", self.d_ab0),
            ("D_BA0", self.d_ba0),
            ("ra", self.r_a),
            ("rb", self.r_b),
            ("T", self.temperature),
        ];
        if let Some((name, value)) = positive.iter().find(|(_, v)| *v <= 0.0) {
            return Err(MixdiffError::InvalidInput(format!(
                "physical values must be positive: {} = {}",
                name, value
            )));
        }

        Ok(())
    }
}

/// 一次计算的结果
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DiffusionResult {
    pub x_a: f64,
    pub x_b: f64,
    /// 计算得到的互扩散系数 D_AB
    pub d_ab: f64,
    pub d_exp: f64,
    /// 带符号相对误差 (D_AB - D_exp) / D_exp
    pub relative_error: f64,
    /// 热力学因子 Γ
    pub thermodynamic_factor: f64,
    /// Vignes 基础扩散系数 D_AB0^x_B · D_BA0^x_A
    pub base_diffusivity: f64,
}

impl DiffusionResult {
    /// 相对误差百分比
    pub fn error_percent(&self) -> f64 {
        self.relative_error * 100.0
    }
}
