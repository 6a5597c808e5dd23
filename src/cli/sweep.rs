//! # sweep 子命令 CLI 定义
//!
//! 组成扫描：在 x_A 网格上计算 D_AB 并输出图表或数据文件。
//!
//! ## 依赖关系
//! - 被 `cli/mod.rs` 使用
//! - 参数传递给 `commands/sweep.rs`

use super::params::ParamArgs;
use clap::{Args, ValueEnum};
use std::path::PathBuf;

/// 扫描输出格式
#[derive(Debug, Clone, Copy, ValueEnum, PartialEq, Eq)]
pub enum SweepOutputFormat {
    /// PNG image
    Png,
    /// SVG vector image
    Svg,
    /// CSV data file (x_A, x_B, D_AB, D_base, Γ, D_exp, error)
    Csv,
    /// XY data file (x_A, D_AB)
    Xy,
}

/// sweep 子命令参数
#[derive(Args, Debug)]
pub struct SweepArgs {
    #[command(flatten)]
    pub params: ParamArgs,

    /// x_A range (e.g., "0-1" or "0.1-0.9")
    #[arg(short, long, default_value = "0-1")]
    pub range: String,

    /// Number of composition points
    #[arg(long, default_value_t = 101)]
    pub points: usize,

    /// Output file
    #[arg(short, long, default_value = "diffusion_sweep.png")]
    pub output: PathBuf,

    /// Output format (auto-detected from extension if not specified)
    #[arg(short, long, value_enum)]
    pub format: Option<SweepOutputFormat>,

    /// Title for the plot
    #[arg(long)]
    pub title: Option<String>,

    /// Figure width in pixels (for PNG) or points (for SVG)
    #[arg(long, default_value_t = 1200)]
    pub width: u32,

    /// Figure height in pixels (for PNG) or points (for SVG)
    #[arg(long, default_value_t = 800)]
    pub height: u32,

    /// Number of parallel jobs (0 = auto)
    #[arg(short, long, default_value_t = 0)]
    pub jobs: usize,
}
