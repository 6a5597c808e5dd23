//! # mixdiff
//!
//! 二元液体混合物互扩散系数计算库。
//!
//! 核心入口为 [`diffusion::compute`] 与按表单字段顺序的
//! [`diffusion::calculate_diffusion_coefficient`]，两者都是无状态纯函数，
//! 可在任意线程并发调用。
//!
//! ```no_run
//! use mixdiff::diffusion::calculate_diffusion_coefficient;
//!
//! let (d_ab, error) = calculate_diffusion_coefficient(
//!     0.25, 2.1e-5, 2.67e-5, 1.432, 1.4, 313.13, -10.7575, 194.5302, 1.4311, 0.92, 1.33e-5,
//! )?;
//! println!("D_AB = {:e}, error = {:+.2} %", d_ab, error * 100.0);
//! # Ok::<(), mixdiff::error::MixdiffError>(())
//! ```

pub mod batch;
pub mod cli;
pub mod commands;
pub mod diffusion;
pub mod error;
pub mod models;
pub mod parsers;
pub mod utils;
