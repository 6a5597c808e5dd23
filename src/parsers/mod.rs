//! # 解析器模块
//!
//! 读取计算参数的输入文件。
//!
//! ## 依赖关系
//! - 被 `commands/` 模块使用
//! - 使用 `models/` 数据模型
//! - 子模块: params, cases

pub mod cases;
pub mod params;

pub use params::ParamOverrides;

use crate::error::Result;
use crate::models::DiffusionInputs;
use std::path::Path;

/// 按优先级解析输入：默认值 → 参数文件 → 命令行覆盖
pub fn resolve_inputs(
    params_file: Option<&Path>,
    cli_overrides: &ParamOverrides,
) -> Result<DiffusionInputs> {
    let mut inputs = DiffusionInputs::default();

    if let Some(path) = params_file {
        inputs = params::parse_params_file(path)?.apply(inputs);
    }

    Ok(cli_overrides.apply(inputs))
}
