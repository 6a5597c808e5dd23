//! # 批量处理模块
//!
//! 提供统一的批量并行计算能力。
//!
//! ## 功能
//! - 并行处理独立算例
//! - 进度反馈与统计
//!
//! ## 依赖关系
//! - 被各命令模块使用
//! - 使用 `rayon` 进行并行处理
//! - 使用 `indicatif` 显示进度

pub mod runner;

pub use runner::{BatchResult, BatchRunner, ProcessResult};
