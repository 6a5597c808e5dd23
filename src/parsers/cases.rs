//! # 批量算例 CSV 解析器
//!
//! 每行一个独立算例，表头为 DiffusionInputs 的字段名：
//! ```text
//! x_a,d_ab0,d_ba0,r_a,r_b,q_a,q_b,temperature,a_ab,a_ba,d_exp
//! 0.25,2.1e-5,2.67e-5,1.4311,0.92,1.432,1.4,313.13,-10.7575,194.5302,1.33e-5
//! ```
//!
//! ## 依赖关系
//! - 被 `commands/batch.rs` 使用
//! - 使用 `models/mixture.rs`
//! - 使用 `csv` + `serde` 反序列化

use crate::error::{MixdiffError, Result};
use crate::models::DiffusionInputs;

use std::fs::File;
use std::io::Read;
use std::path::Path;

/// 读取算例 CSV 文件
pub fn read_cases_file(path: &Path) -> Result<Vec<DiffusionInputs>> {
    if !path.exists() {
        return Err(MixdiffError::FileNotFound {
            path: path.display().to_string(),
        });
    }

    let file = File::open(path).map_err(|e| MixdiffError::FileReadError {
        path: path.display().to_string(),
        source: e,
    })?;

    read_cases(file, &path.display().to_string())
}

/// 从任意读取源解析算例
pub fn read_cases<R: Read>(reader: R, source_name: &str) -> Result<Vec<DiffusionInputs>> {
    let mut rdr = csv::ReaderBuilder::new().trim(csv::Trim::All).from_reader(reader);

    let mut cases = Vec::new();
    for (i, record) in rdr.deserialize::<DiffusionInputs>().enumerate() {
        let case = record.map_err(|e| MixdiffError::ParseError {
            format: "csv".to_string(),
            path: source_name.to_string(),
            reason: format!("case {}: {}", i + 1, e),
        })?;
        cases.push(case);
    }

    Ok(cases)
}

#[cfg(test)]
mod tests {
    use super::*;

    const HEADER: &str = "x_a,d_ab0,d_ba0,r_a,r_b,q_a,q_b,temperature,a_ab,a_ba,d_exp";

    #[test]
    fn test_read_cases() {
        let content = format!(
            "{}\n0.25,2.1e-5,2.67e-5,1.4311,0.92,1.432,1.4,313.13,-10.7575,194.5302,1.33e-5\n\
             0.5, 1e-5, 2e-5, 1.0, 1.0, 1.0, 1.0, 300, 0, 0, 1.5e-5\n",
            HEADER
        );
        let cases = read_cases(content.as_bytes(), "test").unwrap();

        assert_eq!(cases.len(), 2);
        assert_eq!(cases[0], DiffusionInputs::default());
        assert_eq!(cases[1].x_a, 0.5);
        assert_eq!(cases[1].temperature, 300.0);
    }

    #[test]
    fn test_missing_column() {
        let content = "x_a,d_ab0\n0.5,1e-5\n";
        let err = read_cases(content.as_bytes(), "test").unwrap_err();
        assert!(matches!(err, MixdiffError::ParseError { .. }));
    }

    #[test]
    fn test_bad_value_reports_case() {
        let content = format!("{}\n0.2,x,1,1,1,1,1,300,0,0,1\n", HEADER);
        let err = read_cases(content.as_bytes(), "test").unwrap_err();
        assert!(err.to_string().contains("case 1"));
    }
}
