//! # mixdiff - 二元液体混合物互扩散系数
//!
//! 由 UNIQUAC 活度系数模型的热力学因子与 Vignes 关联式计算互扩散系数，
//! 并与实验值比较。
//!
//! ## 子命令
//! - `compute`  - 单点计算
//! - `sweep`    - 组成扫描 (PNG/SVG/CSV/XY)
//! - `batch`    - CSV 批量算例
//! - `template` - 生成参数文件
//!
//! ## 依赖关系
//! ```text
//! main.rs -> lib.rs
//!   ├── cli/        (命令行参数定义)
//!   ├── commands/   (命令执行逻辑)
//!   │     ├── parsers/   (参数文件与算例表)
//!   │     ├── diffusion/ (核心计算、导出、绘图)
//!   │     ├── batch/     (并行执行)
//!   │     └── models/    (数据模型)
//!   ├── utils/      (工具函数)
//!   └── error.rs    (错误处理)
//! ```

use clap::Parser;
use mixdiff::cli::Cli;
use mixdiff::{commands, utils};

fn main() {
    // Initialize colored output for Windows compatibility
    #[cfg(windows)]
    colored::control::set_virtual_terminal(true).ok();

    let cli = Cli::parse();

    if let Err(e) = commands::run(cli.command) {
        utils::output::print_error(&format!("{}", e));
        std::process::exit(1);
    }
}
