//! # compute 子命令 CLI 定义
//!
//! 单点计算：给定组成下的 D_AB 与相对误差。
//!
//! ## 依赖关系
//! - 被 `cli/mod.rs` 使用
//! - 参数传递给 `commands/compute.rs`

use super::params::ParamArgs;
use clap::Args;
use std::path::PathBuf;

/// compute 子命令参数
#[derive(Args, Debug)]
pub struct ComputeArgs {
    #[command(flatten)]
    pub params: ParamArgs,

    /// Also append the result to this CSV file
    #[arg(long)]
    pub csv: Option<PathBuf>,

    /// Skip the UNIQUAC activity coefficient table
    #[arg(long, default_value_t = false)]
    pub no_activity: bool,
}
