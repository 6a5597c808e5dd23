//! # batch 命令实现
//!
//! 读取 CSV 算例表，并行计算每个算例，写出结果表。
//!
//! 每个算例独立：一个算例失败（校验或定义域错误）不影响其他算例，
//! 失败行在输出中保留输入并记录错误信息。
//!
//! ## 依赖关系
//! - 使用 `cli/batch.rs` 定义的 BatchArgs
//! - 使用 `parsers/cases.rs` 读取算例
//! - 使用 `batch/` 并行执行

use crate::batch::{BatchResult, BatchRunner, ProcessResult};
use crate::cli::batch::BatchArgs;
use crate::diffusion;
use crate::error::{MixdiffError, Result};
use crate::models::{DiffusionInputs, DiffusionResult};
use crate::parsers::cases;
use crate::utils::output;

use serde::Serialize;
use std::path::Path;

/// 输出 CSV 的一行
#[derive(Debug, Serialize)]
struct ResultRow {
    case: usize,
    x_a: f64,
    d_ab0: f64,
    d_ba0: f64,
    r_a: f64,
    r_b: f64,
    q_a: f64,
    q_b: f64,
    temperature: f64,
    a_ab: f64,
    a_ba: f64,
    d_exp: f64,
    status: &'static str,
    d_ab: Option<f64>,
    relative_error: Option<f64>,
    thermodynamic_factor: Option<f64>,
    base_diffusivity: Option<f64>,
    message: String,
}

impl ResultRow {
    fn new(case: usize, inputs: &DiffusionInputs, outcome: &ProcessResult<DiffusionResult>) -> Self {
        let (status, result, message) = match outcome {
            ProcessResult::Success(r) => ("ok", Some(r), String::new()),
            ProcessResult::Failed(_, err) => ("failed", None, err.clone()),
        };
        ResultRow {
            case,
            x_a: inputs.x_a,
            d_ab0: inputs.d_ab0,
            d_ba0: inputs.d_ba0,
            r_a: inputs.r_a,
            r_b: inputs.r_b,
            q_a: inputs.q_a,
            q_b: inputs.q_b,
            temperature: inputs.temperature,
            a_ab: inputs.a_ab,
            a_ba: inputs.a_ba,
            d_exp: inputs.d_exp,
            status,
            d_ab: result.map(|r| r.d_ab),
            relative_error: result.map(|r| r.relative_error),
            thermodynamic_factor: result.map(|r| r.thermodynamic_factor),
            base_diffusivity: result.map(|r| r.base_diffusivity),
            message,
        }
    }
}

/// 执行 batch 命令
pub fn execute(args: BatchArgs) -> Result<()> {
    output::print_header("Batch Diffusion Coefficient Calculation");

    let inputs = cases::read_cases_file(&args.input)?;
    if inputs.is_empty() {
        output::print_warning(&format!("No cases found in '{}'", args.input.display()));
        return Ok(());
    }
    output::print_info(&format!(
        "Loaded {} cases from '{}'",
        inputs.len(),
        args.input.display()
    ));

    let runner = BatchRunner::new(args.jobs);
    let result = runner.run(&inputs, |i, case| compute_case(i, case))?;

    write_results(&inputs, &result, &args.output)?;

    // 打印统计
    output::print_separator();
    output::print_success(&format!(
        "Batch complete: {} success, {} failed",
        result.success, result.failed
    ));

    if !result.failures.is_empty() {
        output::print_warning("Failed cases:");
        for (case, err) in result.failures.iter().take(10) {
            output::print_error(&format!("  {}: {}", case, err));
        }
        if result.failures.len() > 10 {
            output::print_warning(&format!("  ... and {} more", result.failures.len() - 10));
        }
    }

    output::print_success(&format!("Results saved to '{}'", args.output.display()));

    if args.strict && result.failed > 0 {
        return Err(MixdiffError::Other(format!(
            "{} of {} cases failed",
            result.failed,
            result.total()
        )));
    }

    Ok(())
}

/// 计算单个算例
fn compute_case(index: usize, case: &DiffusionInputs) -> ProcessResult<DiffusionResult> {
    let label = format!("case {}", index + 1);
    match case.validate().and_then(|_| diffusion::compute(case)) {
        Ok(r) => ProcessResult::Success(r),
        Err(e) => ProcessResult::Failed(label, e.to_string()),
    }
}

/// 写出结果表（保持输入顺序）
fn write_results(
    inputs: &[DiffusionInputs],
    result: &BatchResult<DiffusionResult>,
    output_path: &Path,
) -> Result<()> {
    let mut wtr = csv::Writer::from_path(output_path)?;

    for (i, (case, outcome)) in inputs.iter().zip(&result.outcomes).enumerate() {
        wtr.serialize(ResultRow::new(i + 1, case, outcome))?;
    }

    wtr.flush().map_err(|e| MixdiffError::FileWriteError {
        path: output_path.display().to_string(),
        source: e,
    })?;

    Ok(())
}
