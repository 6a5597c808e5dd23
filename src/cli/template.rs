//! # template 子命令 CLI 定义
//!
//! 生成默认参数文件。
//!
//! ## 依赖关系
//! - 被 `cli/mod.rs` 使用
//! - 参数传递给 `commands/template.rs`

use clap::Args;
use std::path::PathBuf;

/// template 子命令参数
#[derive(Args, Debug)]
pub struct TemplateArgs {
    /// Output parameter file
    #[arg(short, long, default_value = "mixdiff.params")]
    pub output: PathBuf,

    /// Overwrite an existing file
    #[arg(long, default_value_t = false)]
    pub overwrite: bool,
}
