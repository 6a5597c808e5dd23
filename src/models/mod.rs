//! # 数据模型模块
//!
//! 定义扩散系数计算的输入与结果数据模型。
//!
//! ## 依赖关系
//! - 被 `diffusion/`, `parsers/` 和 `commands/` 使用
//! - 子模块: mixture

pub mod mixture;

pub use mixture::{DiffusionInputs, DiffusionResult};
