//! # batch 子命令 CLI 定义
//!
//! 从 CSV 表读取多个独立算例并行计算。
//!
//! ## 依赖关系
//! - 被 `cli/mod.rs` 使用
//! - 参数传递给 `commands/batch.rs`

use clap::Args;
use std::path::PathBuf;

/// batch 子命令参数
#[derive(Args, Debug)]
pub struct BatchArgs {
    /// CSV file with header x_a,d_ab0,d_ba0,r_a,r_b,q_a,q_b,temperature,a_ab,a_ba,d_exp
    pub input: PathBuf,

    /// Filename for the results CSV
    #[arg(short, long, default_value = "diffusion_results.csv")]
    pub output: PathBuf,

    /// Number of parallel jobs (0 = auto)
    #[arg(short, long, default_value_t = 0)]
    pub jobs: usize,

    /// Exit with an error if any case fails
    #[arg(long, default_value_t = false)]
    pub strict: bool,
}
