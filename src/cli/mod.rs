//! # CLI 模块
//!
//! 使用 `clap` 定义命令行参数和子命令。
//!
//! ## 命令结构
//! - `compute`: 单点互扩散系数计算
//! - `sweep`: 组成扫描 D_AB(x_A)
//! - `batch`: CSV 批量算例
//! - `template`: 生成默认参数文件
//!
//! ## 依赖关系
//! - 被 `main.rs` 使用
//! - 子模块: params, compute, sweep, batch, template

pub mod batch;
pub mod compute;
pub mod params;
pub mod sweep;
pub mod template;

use clap::{Parser, Subcommand};

/// mixdiff - 二元液体混合物互扩散系数计算
#[derive(Parser)]
#[command(name = "mixdiff")]
#[command(author = "Changjiang Wu")]
#[command(version)]
#[command(
    about = "Binary liquid-mixture mutual diffusion coefficients (UNIQUAC + Vignes)",
    long_about = None
)]
#[command(propagate_version = true)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

/// 可用的子命令
#[derive(Subcommand)]
pub enum Commands {
    /// Compute D_AB at one composition and compare with the experimental value
    Compute(compute::ComputeArgs),

    /// Sweep x_A and plot or export the D_AB(x_A) curve
    Sweep(sweep::SweepArgs),

    /// Compute every case of a CSV table in parallel
    Batch(batch::BatchArgs),

    /// Write a parameter file filled with the default mixture
    Template(template::TemplateArgs),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_compute_with_negative_values() {
        let cli = Cli::try_parse_from([
            "mixdiff", "compute", "--x-a", "0.4", "--a-ab", "-25.5", "-T", "300",
        ])
        .unwrap();

        match cli.command {
            Commands::Compute(args) => {
                let overrides = args.params.to_overrides();
                assert_eq!(overrides.x_a, Some(0.4));
                assert_eq!(overrides.a_ab, Some(-25.5));
                assert_eq!(overrides.temperature, Some(300.0));
                assert_eq!(overrides.d_exp, None);
            }
            _ => panic!("expected compute"),
        }
    }

    #[test]
    fn test_parse_sweep_defaults() {
        let cli = Cli::try_parse_from(["mixdiff", "sweep"]).unwrap();
        match cli.command {
            Commands::Sweep(args) => {
                assert_eq!(args.range, "0-1");
                assert_eq!(args.points, 101);
                assert!(args.format.is_none());
            }
            _ => panic!("expected sweep"),
        }
    }

    #[test]
    fn test_batch_requires_input() {
        assert!(Cli::try_parse_from(["mixdiff", "batch"]).is_err());
    }
}
