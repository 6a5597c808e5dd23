//! # template 命令实现
//!
//! 写出带默认混合物的参数文件，作为 `--params` 的起点。
//!
//! ## 依赖关系
//! - 使用 `cli/template.rs` 定义的参数
//! - 使用 `parsers/params.rs` 生成文本

use crate::cli::template::TemplateArgs;
use crate::error::{MixdiffError, Result};
use crate::models::DiffusionInputs;
use crate::parsers::params;
use crate::utils::output;

use std::fs;

/// 执行 template 命令
pub fn execute(args: TemplateArgs) -> Result<()> {
    if args.output.exists() && !args.overwrite {
        return Err(MixdiffError::InvalidArgument(format!(
            "'{}' already exists (use --overwrite to replace it)",
            args.output.display()
        )));
    }

    let content = params::to_params_string(&DiffusionInputs::default());
    fs::write(&args.output, content).map_err(|e| MixdiffError::FileWriteError {
        path: args.output.display().to_string(),
        source: e,
    })?;

    output::print_success(&format!(
        "Parameter template written to '{}'",
        args.output.display()
    ));
    output::print_info(&format!(
        "Edit it, then run: mixdiff compute --params {}",
        args.output.display()
    ));

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_template_refuses_to_overwrite() {
        let path = std::env::temp_dir().join(format!("mixdiff_{}_template.params", std::process::id()));
        fs::remove_file(&path).ok();

        execute(TemplateArgs {
            output: path.clone(),
            overwrite: false,
        })
        .unwrap();
        assert!(execute(TemplateArgs {
            output: path.clone(),
            overwrite: false,
        })
        .is_err());
        execute(TemplateArgs {
            output: path.clone(),
            overwrite: true,
        })
        .unwrap();

        let parsed = params::parse_params_file(&path).unwrap();
        fs::remove_file(&path).ok();
        assert_eq!(parsed.temperature, Some(313.13));
    }
}
