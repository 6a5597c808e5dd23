//! # compute 命令实现
//!
//! 解析输入 → 调用层校验 → 核心计算 → 表格输出。
//!
//! ## 依赖关系
//! - 使用 `cli/compute.rs` 定义的参数
//! - 使用 `parsers/` 解析参数来源
//! - 使用 `diffusion/` 计算

use crate::cli::compute::ComputeArgs;
use crate::diffusion::{self, uniquac};
use crate::error::{MixdiffError, Result};
use crate::models::{DiffusionInputs, DiffusionResult};
use crate::parsers;
use crate::utils::output;

use std::fs::OpenOptions;
use std::path::Path;
use tabled::{Table, Tabled};

/// 结果表格行
#[derive(Tabled)]
struct QuantityRow {
    #[tabled(rename = "Quantity")]
    name: String,
    #[tabled(rename = "Value")]
    value: String,
}

impl QuantityRow {
    fn new(name: &str, value: String) -> Self {
        QuantityRow {
            name: name.to_string(),
            value,
        }
    }
}

/// 执行 compute 命令
pub fn execute(args: ComputeArgs) -> Result<()> {
    output::print_header("Binary Mutual Diffusion Coefficient");

    if let Some(ref path) = args.params.params {
        output::print_info(&format!("Reading parameters from '{}'", path.display()));
    }
    let inputs = parsers::resolve_inputs(args.params.params.as_deref(), &args.params.to_overrides())?;
    inputs.validate()?;

    print_inputs(&inputs);

    let result = diffusion::compute(&inputs)?;
    print_result(&result);

    if !args.no_activity {
        match uniquac::activity_coefficients(&inputs) {
            Ok(act) => {
                let rows = vec![
                    QuantityRow::new("γ_A", format!("{:.6}", act.gamma_a)),
                    QuantityRow::new("γ_B", format!("{:.6}", act.gamma_b)),
                    QuantityRow::new("ln γ_A", format!("{:.6}", act.ln_gamma_a)),
                    QuantityRow::new("ln γ_B", format!("{:.6}", act.ln_gamma_b)),
                ];
                output::print_header("UNIQUAC Activity Coefficients");
                println!("{}", Table::new(&rows));
            }
            Err(e) => output::print_warning(&format!("Activity coefficients unavailable: {}", e)),
        }
    }

    if let Some(ref path) = args.csv {
        append_csv(&result, path)?;
        output::print_success(&format!("Result appended to '{}'", path.display()));
    }

    output::print_success(&format!(
        "D_AB = {:.6e} (error {})",
        result.d_ab,
        output::colored_error_percent(result.relative_error)
    ));

    Ok(())
}

/// 打印输入参数
fn print_inputs(inputs: &DiffusionInputs) {
    let rows = vec![
        QuantityRow::new("x_A", format!("{}", inputs.x_a)),
        QuantityRow::new("D_AB0", format!("{:e}", inputs.d_ab0)),
        QuantityRow::new("D_BA0", format!("{:e}", inputs.d_ba0)),
        QuantityRow::new("r_A / r_B", format!("{} / {}", inputs.r_a, inputs.r_b)),
        QuantityRow::new("q_A / q_B", format!("{} / {}", inputs.q_a, inputs.q_b)),
        QuantityRow::new("T (K)", format!("{}", inputs.temperature)),
        QuantityRow::new("a_AB / a_BA (K)", format!("{} / {}", inputs.a_ab, inputs.a_ba)),
        QuantityRow::new("D_exp", format!("{:e}", inputs.d_exp)),
    ];
    output::print_info("Inputs:");
    println!("{}", Table::new(&rows));
}

/// 打印计算结果
fn print_result(result: &DiffusionResult) {
    let rows = vec![
        QuantityRow::new("x_A", format!("{:.4}", result.x_a)),
        QuantityRow::new("x_B", format!("{:.4}", result.x_b)),
        QuantityRow::new("Γ (thermodynamic factor)", format!("{:.6}", result.thermodynamic_factor)),
        QuantityRow::new("D_base (Vignes)", format!("{:.6e}", result.base_diffusivity)),
        QuantityRow::new("D_AB", format!("{:.6e}", result.d_ab)),
        QuantityRow::new("D_exp", format!("{:.6e}", result.d_exp)),
        QuantityRow::new("Relative error", format!("{:+.4} %", result.error_percent())),
    ];
    output::print_header("Result");
    println!("{}", Table::new(&rows));
}

/// 以追加方式写入 CSV（新文件写表头）
fn append_csv(result: &DiffusionResult, path: &Path) -> Result<()> {
    let exists = path.exists();
    let file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(path)
        .map_err(|e| MixdiffError::FileWriteError {
            path: path.display().to_string(),
            source: e,
        })?;

    let mut wtr = csv::WriterBuilder::new()
        .has_headers(!exists)
        .from_writer(file);
    wtr.serialize(result)?;
    wtr.flush().map_err(|e| MixdiffError::FileWriteError {
        path: path.display().to_string(),
        source: e,
    })?;

    Ok(())
}
