//! # 命令执行模块
//!
//! 实现各子命令的业务逻辑。
//!
//! ## 依赖关系
//! - 被 `main.rs` 调用
//! - 使用 `cli/`, `parsers/`, `diffusion/`, `utils/`
//! - 子模块: compute, sweep, batch, template

pub mod batch;
pub mod compute;
pub mod sweep;
pub mod template;

use crate::cli::Commands;
use crate::error::Result;

/// 执行命令
pub fn run(cmd: Commands) -> Result<()> {
    match cmd {
        Commands::Compute(args) => compute::execute(args),
        Commands::Sweep(args) => sweep::execute(args),
        Commands::Batch(args) => batch::execute(args),
        Commands::Template(args) => template::execute(args),
    }
}
