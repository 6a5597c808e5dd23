//! # sweep 命令实现
//!
//! 在 x_A 网格上计算 D_AB(x_A) 组成曲线。
//!
//! ## 功能
//! - 并行计算（rayon）
//! - 输出高质量图像 (PNG/SVG)
//! - 导出数据文件 (CSV/XY)
//!
//! ## 依赖关系
//! - 使用 `cli/sweep.rs` 定义的 SweepArgs
//! - 使用 `batch/` 配置线程池
//! - 使用 `diffusion/` 进行计算与输出

use crate::batch::BatchRunner;
use crate::cli::sweep::{SweepArgs, SweepOutputFormat};
use crate::diffusion::{self, plot::PlotOptions};
use crate::error::{MixdiffError, Result};
use crate::models::DiffusionResult;
use crate::parsers;
use crate::utils::{output, progress};

use std::path::Path;

/// 执行组成扫描
pub fn execute(args: SweepArgs) -> Result<()> {
    output::print_header("Composition Sweep of D_AB");

    let inputs = parsers::resolve_inputs(args.params.params.as_deref(), &args.params.to_overrides())?;
    inputs.validate()?;

    let (x_min, x_max) = parse_range(&args.range)?;
    output::print_info(&format!(
        "x_A range: {} - {} ({} points)",
        x_min, x_max, args.points
    ));

    let runner = BatchRunner::new(args.jobs);
    output::print_info(&format!("Using {} threads", runner.jobs()));

    let spinner = progress::create_spinner("Computing composition curve");
    let curve = runner.install(|| diffusion::sweep::sweep(&inputs, x_min, x_max, args.points));
    spinner.finish_and_clear();
    let curve = curve??;

    output::print_success(&format!("Computed {} composition points", curve.len()));
    print_extremes(&curve);

    let format = args
        .format
        .unwrap_or_else(|| guess_format_from_extension(&args.output));

    match format {
        SweepOutputFormat::Png | SweepOutputFormat::Svg => {
            let title = args
                .title
                .clone()
                .unwrap_or_else(|| format!("Mutual diffusivity at T = {} K", inputs.temperature));
            let options = PlotOptions {
                title: &title,
                width: args.width,
                height: args.height,
                use_svg: format == SweepOutputFormat::Svg,
            };
            diffusion::plot::generate_sweep_plot(&curve, &inputs, &args.output, &options)?;
        }
        SweepOutputFormat::Csv => diffusion::export::to_csv(&curve, &args.output)?,
        SweepOutputFormat::Xy => diffusion::export::to_xy(&curve, &inputs, &args.output)?,
    }

    output::print_success(&format!("Sweep saved to '{}'", args.output.display()));
    Ok(())
}

/// 打印曲线上的极值
fn print_extremes(curve: &[DiffusionResult]) {
    let min = curve
        .iter()
        .min_by(|a, b| a.d_ab.total_cmp(&b.d_ab));
    let max = curve
        .iter()
        .max_by(|a, b| a.d_ab.total_cmp(&b.d_ab));

    if let (Some(min), Some(max)) = (min, max) {
        output::print_info(&format!(
            "D_AB min {:.4e} at x_A = {:.3}, max {:.4e} at x_A = {:.3}",
            min.d_ab, min.x_a, max.d_ab, max.x_a
        ));
    }

    if curve.iter().any(|r| r.thermodynamic_factor <= 0.0) {
        output::print_warning("Γ <= 0 somewhere on the curve: the UNIQUAC parameters predict phase splitting");
    }
}

/// 从文件扩展名推断输出格式
fn guess_format_from_extension(path: &Path) -> SweepOutputFormat {
    match path
        .extension()
        .and_then(|e| e.to_str())
        .map(|s| s.to_lowercase())
        .as_deref()
    {
        Some("svg") => SweepOutputFormat::Svg,
        Some("csv") => SweepOutputFormat::Csv,
        Some("xy") | Some("dat") | Some("txt") => SweepOutputFormat::Xy,
        _ => SweepOutputFormat::Png,
    }
}

/// 解析 x_A 范围
fn parse_range(range: &str) -> Result<(f64, f64)> {
    let parts: Vec<&str> = range.split('-').collect();
    if parts.len() != 2 {
        return Err(MixdiffError::InvalidRange(range.to_string()));
    }

    let min: f64 = parts[0]
        .trim()
        .parse()
        .map_err(|_| MixdiffError::InvalidRange(range.to_string()))?;
    let max: f64 = parts[1]
        .trim()
        .parse()
        .map_err(|_| MixdiffError::InvalidRange(range.to_string()))?;

    if min < 0.0 || max <= min || max > 1.0 {
        return Err(MixdiffError::InvalidRange(format!(
            "{} (must be 0 <= min < max <= 1)",
            range
        )));
    }

    Ok((min, max))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_range() {
        assert_eq!(parse_range("0-1").unwrap(), (0.0, 1.0));
        assert_eq!(parse_range("0.1 - 0.9").unwrap(), (0.1, 0.9));
        assert!(parse_range("0.5").is_err());
        assert!(parse_range("0.8-0.2").is_err());
        assert!(parse_range("0-1.5").is_err());
    }

    #[test]
    fn test_guess_format() {
        assert_eq!(guess_format_from_extension(Path::new("a.SVG")), SweepOutputFormat::Svg);
        assert_eq!(guess_format_from_extension(Path::new("a.csv")), SweepOutputFormat::Csv);
        assert_eq!(guess_format_from_extension(Path::new("a.dat")), SweepOutputFormat::Xy);
        assert_eq!(guess_format_from_extension(Path::new("a")), SweepOutputFormat::Png);
    }
}
