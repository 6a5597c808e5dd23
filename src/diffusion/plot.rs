//! # 扩散曲线图表生成
//!
//! 使用 `plotters` 库绘制 D_AB(x_A) 组成曲线。
//!
//! ## 功能
//! - D_AB（含热力学修正）与 D_base（Vignes）两条曲线
//! - 标出实验点 (x_A, D_exp)
//! - 支持 PNG 和 SVG 输出
//!
//! ## 依赖关系
//! - 被 `commands/sweep.rs` 调用
//! - 使用 `models/mixture.rs` 的 DiffusionResult
//! - 使用 `plotters` 渲染图表

use crate::error::{MixdiffError, Result};
use crate::models::{DiffusionInputs, DiffusionResult};

use plotters::prelude::*;
use std::path::Path;

/// 图表选项
pub struct PlotOptions<'a> {
    pub title: &'a str,
    pub width: u32,
    pub height: u32,
    pub use_svg: bool,
}

/// 生成扩散系数组成曲线图
pub fn generate_sweep_plot(
    curve: &[DiffusionResult],
    inputs: &DiffusionInputs,
    output_path: &Path,
    options: &PlotOptions,
) -> Result<()> {
    if curve.is_empty() {
        return Err(MixdiffError::Other("No data to plot".to_string()));
    }

    if options.use_svg {
        let root = SVGBackend::new(output_path, (options.width, options.height)).into_drawing_area();
        draw_sweep_chart(&root, curve, inputs, options.title)?;
        root.present()
            .map_err(|e| MixdiffError::Other(e.to_string()))?;
    } else {
        let root =
            BitMapBackend::new(output_path, (options.width, options.height)).into_drawing_area();
        draw_sweep_chart(&root, curve, inputs, options.title)?;
        root.present()
            .map_err(|e| MixdiffError::Other(e.to_string()))?;
    }
    Ok(())
}

/// 选择 y 轴的十进制缩放指数，使刻度落在 1-10 量级
pub fn scale_exponent(max_value: f64) -> i32 {
    if max_value > 0.0 && max_value.is_finite() {
        max_value.log10().floor() as i32
    } else {
        0
    }
}

/// 绘制组成曲线
fn draw_sweep_chart<DB: DrawingBackend>(
    root: &DrawingArea<DB, plotters::coord::Shift>,
    curve: &[DiffusionResult],
    inputs: &DiffusionInputs,
    title: &str,
) -> Result<()>
where
    DB::ErrorType: 'static,
{
    root.fill(&WHITE)
        .map_err(|e| MixdiffError::Other(format!("{:?}", e)))?;

    let y_max_raw = curve
        .iter()
        .flat_map(|r| [r.d_ab, r.base_diffusivity])
        .chain(std::iter::once(inputs.d_exp))
        .fold(f64::NEG_INFINITY, f64::max);
    let y_min_raw = curve
        .iter()
        .flat_map(|r| [r.d_ab, r.base_diffusivity])
        .chain(std::iter::once(inputs.d_exp))
        .fold(f64::INFINITY, f64::min);

    let exponent = scale_exponent(y_max_raw);
    let scale = 10f64.powi(exponent);
    let y_max = y_max_raw / scale;
    let y_min = (y_min_raw / scale).min(0.0);
    let y_margin = (y_max - y_min).abs() * 0.1;

    let x_min = curve.first().map(|r| r.x_a).unwrap_or(0.0);
    let x_max = curve.last().map(|r| r.x_a).unwrap_or(1.0);

    let mut chart = ChartBuilder::on(root)
        .caption(title, ("sans-serif", 28).into_font())
        .margin(30)
        .x_label_area_size(50)
        .y_label_area_size(70)
        .build_cartesian_2d(x_min..x_max, y_min..(y_max + y_margin))
        .map_err(|e| MixdiffError::Other(format!("{:?}", e)))?;

    chart
        .configure_mesh()
        .x_desc("x_A")
        .y_desc(format!("D (×10^{})", exponent))
        .x_label_style(("sans-serif", 16))
        .y_label_style(("sans-serif", 16))
        .axis_desc_style(("sans-serif", 18))
        .draw()
        .map_err(|e| MixdiffError::Other(format!("{:?}", e)))?;

    // D_AB 曲线
    let line_color = RGBColor(0, 102, 204);
    chart
        .draw_series(LineSeries::new(
            curve.iter().map(|r| (r.x_a, r.d_ab / scale)),
            line_color.stroke_width(2),
        ))
        .map_err(|e| MixdiffError::Other(format!("{:?}", e)))?
        .label("D_AB (UNIQUAC-Vignes)")
        .legend(move |(x, y)| PathElement::new(vec![(x, y), (x + 20, y)], &line_color));

    // D_base 曲线
    let base_color = RGBColor(120, 120, 120);
    chart
        .draw_series(DashedLineSeries::new(
            curve.iter().map(|r| (r.x_a, r.base_diffusivity / scale)),
            6,
            4,
            base_color.stroke_width(2),
        ))
        .map_err(|e| MixdiffError::Other(format!("{:?}", e)))?
        .label("D_base (Vignes)")
        .legend(move |(x, y)| PathElement::new(vec![(x, y), (x + 20, y)], &base_color));

    // 实验点
    if inputs.x_a >= x_min && inputs.x_a <= x_max {
        chart
            .draw_series(std::iter::once(Circle::new(
                (inputs.x_a, inputs.d_exp / scale),
                6,
                RED.filled(),
            )))
            .map_err(|e| MixdiffError::Other(format!("{:?}", e)))?
            .label("D_exp")
            .legend(|(x, y)| Circle::new((x + 10, y), 5, RED.filled()));
    }

    chart
        .configure_series_labels()
        .background_style(&WHITE.mix(0.8))
        .border_style(&BLACK)
        .draw()
        .map_err(|e| MixdiffError::Other(format!("{:?}", e)))?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_scale_exponent() {
        assert_eq!(scale_exponent(2.67e-5), -5);
        assert_eq!(scale_exponent(3.2e-9), -9);
        assert_eq!(scale_exponent(1.0), 0);
        assert_eq!(scale_exponent(0.0), 0);
    }
}
