//! # 参数文件解析器
//!
//! 解析 `key = value` 形式的参数文件。
//!
//! ## 格式说明
//! ```text
//! # 注释行以 # 或 ! 开头
//! x_A   = 0.25
//! D_AB0 = 2.1e-5
//! D_BA0 = 2.67e-5
//! ra    = 1.4311
//! rb    = 0.92
//! q_A   = 1.432
//! q_B   = 1.4
//! T     = 313.13
//! a_AB  = -10.7575
//! a_BA  = 194.5302
//! D_exp = 1.33e-5
//! ```
//!
//! 键名与计算表单字段一致；`r_A`, `r_B`, `temperature` 作为别名接受。
//! 文件中未出现的键保持原值。
//!
//! ## 依赖关系
//! - 被 `parsers/mod.rs`, `commands/` 使用
//! - 使用 `models/mixture.rs`
//! - 使用 `regex` 解析行

use crate::error::{MixdiffError, Result};
use crate::models::DiffusionInputs;

use regex::Regex;
use std::fs;
use std::path::Path;

/// 参数覆盖：每个字段可选，未设置则沿用下层来源
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct ParamOverrides {
    pub x_a: Option<f64>,
    pub d_ab0: Option<f64>,
    pub d_ba0: Option<f64>,
    pub r_a: Option<f64>,
    pub r_b: Option<f64>,
    pub q_a: Option<f64>,
    pub q_b: Option<f64>,
    pub temperature: Option<f64>,
    pub a_ab: Option<f64>,
    pub a_ba: Option<f64>,
    pub d_exp: Option<f64>,
}

impl ParamOverrides {
    /// 将覆盖值应用到基础输入上
    pub fn apply(&self, base: DiffusionInputs) -> DiffusionInputs {
        DiffusionInputs {
            x_a: self.x_a.unwrap_or(base.x_a),
            d_ab0: self.d_ab0.unwrap_or(base.d_ab0),
            d_ba0: self.d_ba0.unwrap_or(base.d_ba0),
            r_a: self.r_a.unwrap_or(base.r_a),
            r_b: self.r_b.unwrap_or(base.r_b),
            q_a: self.q_a.unwrap_or(base.q_a),
            q_b: self.q_b.unwrap_or(base.q_b),
            temperature: self.temperature.unwrap_or(base.temperature),
            a_ab: self.a_ab.unwrap_or(base.a_ab),
            a_ba: self.a_ba.unwrap_or(base.a_ba),
            d_exp: self.d_exp.unwrap_or(base.d_exp),
        }
    }

    /// 按键名设置字段
    fn set(&mut self, key: &str, value: f64) -> bool {
        let slot = match key {
            "x_A" | "x_a" => &mut self.x_a,
            "D_AB0" => &mut self.d_ab0,
            "D_BA0" => &mut self.d_ba0,
            "ra" | "r_A" | "r_a" => &mut self.r_a,
            "rb" | "r_B" | "r_b" => &mut self.r_b,
            "q_A" | "q_a" => &mut self.q_a,
            "q_B" | "q_b" => &mut self.q_b,
            "T" | "temperature" => &mut self.temperature,
            "a_AB" => &mut self.a_ab,
            "a_BA" => &mut self.a_ba,
            "D_exp" => &mut self.d_exp,
            _ => return false,
        };
        *slot = Some(value);
        true
    }
}

/// 解析参数文件
pub fn parse_params_file(path: &Path) -> Result<ParamOverrides> {
    if !path.exists() {
        return Err(MixdiffError::FileNotFound {
            path: path.display().to_string(),
        });
    }

    let content = fs::read_to_string(path).map_err(|e| MixdiffError::FileReadError {
        path: path.display().to_string(),
        source: e,
    })?;

    parse_params_content(&content, &path.display().to_string())
}

/// 从字符串内容解析参数
pub fn parse_params_content(content: &str, source_name: &str) -> Result<ParamOverrides> {
    let line_re = Regex::new(r"^\s*([A-Za-z_][A-Za-z0-9_]*)\s*[=:]\s*(\S+)\s*$")
        .map_err(|e| MixdiffError::Other(e.to_string()))?;

    let mut overrides = ParamOverrides::default();

    for (lineno, raw) in content.lines().enumerate() {
        let line = raw.trim();
        if line.is_empty() || line.starts_with('#') || line.starts_with('!') {
            continue;
        }

        let caps = line_re
            .captures(line)
            .ok_or_else(|| MixdiffError::ParseError {
                format: "params".to_string(),
                path: source_name.to_string(),
                reason: format!("line {}: expected 'key = value', got '{}'", lineno + 1, line),
            })?;

        let key = &caps[1];
        let value: f64 = caps[2].parse().map_err(|_| MixdiffError::InvalidNumber {
            field: key.to_string(),
            value: caps[2].to_string(),
        })?;

        if !overrides.set(key, value) {
            return Err(MixdiffError::ParseError {
                format: "params".to_string(),
                path: source_name.to_string(),
                reason: format!("line {}: unknown parameter '{}'", lineno + 1, key),
            });
        }
    }

    Ok(overrides)
}

/// 生成参数文件文本
pub fn to_params_string(inputs: &DiffusionInputs) -> String {
    let mut result = String::new();

    result.push_str("# mixdiff parameters\n");
    result.push_str("# Binary mixture A/B: UNIQUAC thermodynamic factor x Vignes correlation\n\n");
    result.push_str("# Composition\n");
    result.push_str(&format!("x_A   = {}\n\n", inputs.x_a));
    result.push_str("# Infinite-dilution diffusion coefficients\n");
    result.push_str(&format!("D_AB0 = {:e}\n", inputs.d_ab0));
    result.push_str(&format!("D_BA0 = {:e}\n\n", inputs.d_ba0));
    result.push_str("# UNIQUAC structural parameters\n");
    result.push_str(&format!("ra    = {}\n", inputs.r_a));
    result.push_str(&format!("rb    = {}\n", inputs.r_b));
    result.push_str(&format!("q_A   = {}\n", inputs.q_a));
    result.push_str(&format!("q_B   = {}\n\n", inputs.q_b));
    result.push_str("# Temperature (K) and interaction energies (K)\n");
    result.push_str(&format!("T     = {}\n", inputs.temperature));
    result.push_str(&format!("a_AB  = {}\n", inputs.a_ab));
    result.push_str(&format!("a_BA  = {}\n\n", inputs.a_ba));
    result.push_str("# Experimental value for error reporting\n");
    result.push_str(&format!("D_exp = {:e}\n", inputs.d_exp));

    result
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_params() {
        let content = r#"
# acetone / water
x_A = 0.4
T   = 298.15
ra: 2.57
! old value
a_BA = -12.5
"#;
        let overrides = parse_params_content(content, "test").unwrap();
        assert_eq!(overrides.x_a, Some(0.4));
        assert_eq!(overrides.temperature, Some(298.15));
        assert_eq!(overrides.r_a, Some(2.57));
        assert_eq!(overrides.a_ba, Some(-12.5));
        assert_eq!(overrides.d_ab0, None);

        let inputs = overrides.apply(DiffusionInputs::default());
        assert_eq!(inputs.x_a, 0.4);
        assert_eq!(inputs.d_ab0, 2.1e-5);
    }

    #[test]
    fn test_unknown_key() {
        let err = parse_params_content("pressure = 1.0\n", "test").unwrap_err();
        assert!(matches!(err, MixdiffError::ParseError { .. }));
    }

    #[test]
    fn test_bad_number() {
        let err = parse_params_content("x_A = abc\n", "test").unwrap_err();
        assert!(matches!(err, MixdiffError::InvalidNumber { .. }));
    }

    #[test]
    fn test_malformed_line() {
        let err = parse_params_content("x_A 0.3\n", "test").unwrap_err();
        assert!(matches!(err, MixdiffError::ParseError { .. }));
    }

    #[test]
    fn test_template_parses_back_to_defaults() {
        let defaults = DiffusionInputs::default();
        let text = to_params_string(&defaults);
        let parsed = parse_params_content(&text, "template")
            .unwrap()
            .apply(DiffusionInputs {
                x_a: 0.0,
                d_ab0: 0.0,
                d_ba0: 0.0,
                r_a: 0.0,
                r_b: 0.0,
                q_a: 0.0,
                q_b: 0.0,
                temperature: 0.0,
                a_ab: 0.0,
                a_ba: 0.0,
                d_exp: 0.0,
            });
        assert_eq!(parsed, defaults);
    }
}
