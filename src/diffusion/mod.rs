//! # 扩散系数计算模块
//!
//! 二元液体混合物互扩散系数：UNIQUAC 热力学因子 × Vignes 对数线性插值。
//!
//! ## 子模块
//! - `uniquac`: 活度系数模型与热力学因子
//! - `vignes`: 无限稀释扩散系数插值
//! - `calculator`: 核心计算入口
//! - `sweep`: 组成扫描（并行）
//! - `export`: 数据导出
//! - `plot`: 图表生成
//!
//! ## 依赖关系
//! - 被 `commands/` 使用
//! - 使用 `models/mixture.rs`

pub mod calculator;
pub mod export;
pub mod plot;
pub mod sweep;
pub mod uniquac;
pub mod vignes;

pub use calculator::{calculate_diffusion_coefficient, compute};

use crate::error::{MixdiffError, Result};

/// 拒绝 NaN / Inf，避免静默传播
pub(crate) fn ensure_finite(value: f64, what: &str) -> Result<f64> {
    if value.is_finite() {
        Ok(value)
    } else {
        Err(MixdiffError::DomainError(format!(
            "{} is not finite ({})",
            what, value
        )))
    }
}
