//! SVG rendering of a 1D histogram artifact.

use ev_core::Hist1DArtifact;

use crate::canvas::Canvas;
use crate::config::RenderConfig;
use crate::primitives::{LineStyle, Style, TextAnchor, TextStyle};
use crate::{RenderError, Result};

struct Margins {
    left: f64,
    right: f64,
    top: f64,
    bottom: f64,
}

/// Render a histogram artifact to an SVG string.
pub fn render(artifact: &Hist1DArtifact, config: &RenderConfig) -> Result<String> {
    if artifact.bin_content.len() != artifact.axis.n_bins {
        return Err(RenderError::Artifact(format!(
            "'{}': {} bins of content for a {}-bin axis",
            artifact.name,
            artifact.bin_content.len(),
            artifact.axis.n_bins
        )));
    }

    let margins = Margins { left: 48.0, right: 14.0, top: 26.0, bottom: 38.0 };
    let plot_w = config.width - margins.left - margins.right;
    let plot_h = config.height - margins.top - margins.bottom;
    if plot_w <= 0.0 || plot_h <= 0.0 {
        return Err(RenderError::Config(format!(
            "figure {}x{} too small for plot margins",
            config.width, config.height
        )));
    }

    let axis = artifact.axis;
    let y_max = {
        let max = artifact.max_content();
        if max > 0.0 { max * 1.15 } else { 1.0 }
    };
    let x_of = |v: f64| margins.left + (v - axis.x_min) / (axis.x_max - axis.x_min) * plot_w;
    let y_of = |c: f64| margins.top + plot_h - (c / y_max) * plot_h;

    let mut canvas = Canvas::new(config.width, config.height);
    let edges = axis.edges();

    // Bars.
    let bar_style = Style::filled(&config.bar_color);
    for (i, &content) in artifact.bin_content.iter().enumerate() {
        if content <= 0.0 {
            continue;
        }
        let x0 = x_of(edges[i]);
        let x1 = x_of(edges[i + 1]);
        let y = y_of(content);
        canvas.rect(x0, y, x1 - x0, y_of(0.0) - y, &bar_style);
    }

    // Step outline over the bin tops.
    let mut steps = Vec::with_capacity(2 * axis.n_bins + 2);
    steps.push((x_of(edges[0]), y_of(0.0)));
    for (i, &content) in artifact.bin_content.iter().enumerate() {
        steps.push((x_of(edges[i]), y_of(content.max(0.0))));
        steps.push((x_of(edges[i + 1]), y_of(content.max(0.0))));
    }
    steps.push((x_of(edges[axis.n_bins]), y_of(0.0)));
    canvas.polyline(&steps, &LineStyle::solid(&config.axis_color, 1.0));

    // Plot frame.
    canvas.rect(
        margins.left,
        margins.top,
        plot_w,
        plot_h,
        &Style::stroked(&config.axis_color, 0.8),
    );

    // Ticks and tick labels.
    let tick_style = LineStyle::solid(&config.axis_color, 0.8);
    let tick_text = TextStyle::anchored(config.tick_size, &config.axis_color, TextAnchor::Middle);
    let n_x_ticks = 5;
    for k in 0..n_x_ticks {
        let v = axis.x_min + (axis.x_max - axis.x_min) * k as f64 / (n_x_ticks - 1) as f64;
        let x = x_of(v);
        let y0 = margins.top + plot_h;
        canvas.line(x, y0, x, y0 - 4.0, &tick_style);
        canvas.text(x, y0 + config.tick_size + 3.0, &format_tick(v), &tick_text);
    }
    let right_text = TextStyle::anchored(config.tick_size, &config.axis_color, TextAnchor::End);
    let n_y_ticks = 4;
    for k in 0..=n_y_ticks {
        let c = y_max * k as f64 / n_y_ticks as f64;
        let y = y_of(c);
        canvas.line(margins.left, y, margins.left + 4.0, y, &tick_style);
        canvas.text(margins.left - 4.0, y + config.tick_size * 0.35, &format_tick(c), &right_text);
    }

    // Labels: name top-left, flow summary top-right, axis label bottom-center.
    let name_style = TextStyle {
        size: config.label_size,
        color: config.axis_color.clone(),
        anchor: TextAnchor::Start,
        bold: true,
    };
    canvas.text(margins.left, margins.top - 8.0, &artifact.name, &name_style);

    let summary = format!(
        "entries {}, underflow {}, overflow {}",
        artifact.entries,
        format_tick(artifact.underflow),
        format_tick(artifact.overflow)
    );
    canvas.text(
        config.width - margins.right,
        margins.top - 8.0,
        &summary,
        &TextStyle::anchored(config.font_size, &config.axis_color, TextAnchor::End),
    );

    canvas.text(
        margins.left + plot_w / 2.0,
        config.height - 10.0,
        &artifact.x_label,
        &TextStyle::anchored(config.label_size, &config.axis_color, TextAnchor::Middle),
    );

    Ok(canvas.into_svg())
}

/// Compact tick label: trailing zeros trimmed, at most two decimals.
fn format_tick(v: f64) -> String {
    let s = format!("{v:.2}");
    let trimmed = s.trim_end_matches('0').trim_end_matches('.');
    if trimmed.is_empty() || trimmed == "-0" { "0".to_string() } else { trimmed.to_string() }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ev_core::{Axis, Hist1D};

    fn artifact() -> Hist1DArtifact {
        let mut h = Hist1D::new(Axis::new(16, 0.0, 4.0)).unwrap();
        h.fill(1.0);
        h.fill(1.1);
        h.fill(5.0);
        Hist1DArtifact::from_hist("pt_spectrum", "pt", &h)
    }

    #[test]
    fn renders_svg_with_labels() {
        let svg = render(&artifact(), &RenderConfig::default()).unwrap();
        assert!(svg.starts_with("<svg"));
        assert!(svg.contains("pt_spectrum"));
        assert!(svg.contains("overflow 1"));
        assert!(svg.contains("<polyline"));
        assert!(svg.contains("<rect"));
    }

    #[test]
    fn empty_histogram_still_renders() {
        let h = Hist1D::new(Axis::new(4, 0.0, 1.0)).unwrap();
        let art = Hist1DArtifact::from_hist("empty", "x", &h);
        let svg = render(&art, &RenderConfig::default()).unwrap();
        assert!(svg.contains("entries 0"));
    }

    #[test]
    fn mismatched_artifact_rejected() {
        let mut art = artifact();
        art.bin_content.pop();
        assert!(matches!(
            render(&art, &RenderConfig::default()),
            Err(RenderError::Artifact(_))
        ));
    }

    #[test]
    fn tiny_figure_rejected() {
        let cfg = RenderConfig { width: 20.0, height: 20.0, ..Default::default() };
        assert!(matches!(render(&artifact(), &cfg), Err(RenderError::Config(_))));
    }

    #[test]
    fn tick_formatting() {
        assert_eq!(format_tick(0.0), "0");
        assert_eq!(format_tick(0.25), "0.25");
        assert_eq!(format_tick(1.0), "1");
        assert_eq!(format_tick(1.5), "1.5");
        assert_eq!(format_tick(-0.001), "0");
    }
}
