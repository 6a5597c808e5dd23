//! # 统一错误处理模块
//!
//! 定义 mixdiff 的所有错误类型，使用 `thiserror` 派生。
//!
//! 核心计算只产生 `DomainError`；其余变体属于调用层（参数解析、输入校验、文件读写）。
//!
//! ## 依赖关系
//! - 被所有其他模块使用
//! - 无外部模块依赖

use thiserror::Error;

/// mixdiff 统一错误类型
#[derive(Error, Debug)]
pub enum MixdiffError {
    // ─────────────────────────────────────────────────────────────
    // I/O 错误
    // ─────────────────────────────────────────────────────────────
    #[error("Failed to read file: {path}")]
    FileReadError {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to write file: {path}")]
    FileWriteError {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("File not found: {path}")]
    FileNotFound { path: String },

    // ─────────────────────────────────────────────────────────────
    // 解析错误
    // ─────────────────────────────────────────────────────────────
    #[error("Failed to parse {format} file: {path}\nReason: {reason}")]
    ParseError {
        format: String,
        path: String,
        reason: String,
    },

    #[error("Invalid number for '{field}': {value}")]
    InvalidNumber { field: String, value: String },

    // ─────────────────────────────────────────────────────────────
    // 输入校验错误（调用层）
    // ─────────────────────────────────────────────────────────────
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    #[error("Invalid range format: {0}")]
    InvalidRange(String),

    // ─────────────────────────────────────────────────────────────
    // 计算错误（核心）
    // ─────────────────────────────────────────────────────────────
    #[error("Domain error: {0}")]
    DomainError(String),

    // ─────────────────────────────────────────────────────────────
    // CSV 错误
    // ─────────────────────────────────────────────────────────────
    #[error("CSV error: {0}")]
    CsvError(#[from] csv::Error),

    // ─────────────────────────────────────────────────────────────
    // 其他
    // ─────────────────────────────────────────────────────────────
    #[error("{0}")]
    Other(String),
}

impl MixdiffError {
    /// 是否为核心计算产生的定义域错误
    pub fn is_domain_error(&self) -> bool {
        matches!(self, MixdiffError::DomainError(_))
    }
}

/// Result 类型别名
pub type Result<T> = std::result::Result<T, MixdiffError>;
