//! # 计算参数 CLI 定义
//!
//! `compute` 与 `sweep` 共用的物性参数。每个参数都是可选覆盖，
//! 未给出时依次回退到参数文件和默认混合物。
//!
//! ## 依赖关系
//! - 被 `cli/compute.rs`, `cli/sweep.rs` 展开使用
//! - 转换为 `parsers::ParamOverrides`

use crate::parsers::ParamOverrides;
use clap::Args;
use std::path::PathBuf;

/// 物性参数
#[derive(Args, Debug, Clone)]
pub struct ParamArgs {
    /// Parameter file with 'key = value' lines (x_A, D_AB0, D_BA0, ra, rb, q_A, q_B, T, a_AB, a_BA, D_exp)
    #[arg(short, long, env = "MIXDIFF_PARAMS")]
    pub params: Option<PathBuf>,

    /// Mole fraction of component A (0-1)
    #[arg(long)]
    pub x_a: Option<f64>,

    /// Infinite-dilution diffusivity of A in B
    #[arg(long)]
    pub d_ab0: Option<f64>,

    /// Infinite-dilution diffusivity of B in A
    #[arg(long)]
    pub d_ba0: Option<f64>,

    /// UNIQUAC volume parameter r_A
    #[arg(long)]
    pub ra: Option<f64>,

    /// UNIQUAC volume parameter r_B
    #[arg(long)]
    pub rb: Option<f64>,

    /// UNIQUAC surface-area parameter q_A
    #[arg(long)]
    pub q_a: Option<f64>,

    /// UNIQUAC surface-area parameter q_B
    #[arg(long)]
    pub q_b: Option<f64>,

    /// Absolute temperature (K)
    #[arg(short = 'T', long)]
    pub temperature: Option<f64>,

    /// UNIQUAC interaction energy a_AB (K)
    #[arg(long, allow_negative_numbers = true)]
    pub a_ab: Option<f64>,

    /// UNIQUAC interaction energy a_BA (K)
    #[arg(long, allow_negative_numbers = true)]
    pub a_ba: Option<f64>,

    /// Experimental diffusion coefficient for error reporting
    #[arg(long)]
    pub d_exp: Option<f64>,
}

impl ParamArgs {
    /// 转换为参数覆盖
    pub fn to_overrides(&self) -> ParamOverrides {
        ParamOverrides {
            x_a: self.x_a,
            d_ab0: self.d_ab0,
            d_ba0: self.d_ba0,
            r_a: self.ra,
            r_b: self.rb,
            q_a: self.q_a,
            q_b: self.q_b,
            temperature: self.temperature,
            a_ab: self.a_ab,
            a_ba: self.a_ba,
            d_exp: self.d_exp,
        }
    }
}
