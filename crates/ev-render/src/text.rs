//! Terminal bar-chart rendering of a 1D histogram artifact.

use ev_core::Hist1DArtifact;

/// Render a histogram as a fixed-width terminal bar chart.
///
/// `bar_width` is the maximum bar length in characters; the tallest bin
/// always uses the full width.
pub fn render(artifact: &Hist1DArtifact, bar_width: usize) -> String {
    let mut out = String::new();
    out.push_str(&format!(
        "{}: entries {}, underflow {}, overflow {}\n",
        artifact.name,
        artifact.entries,
        format_count(artifact.underflow),
        format_count(artifact.overflow)
    ));

    let max = artifact.max_content();
    let edges = artifact.axis.edges();
    for (i, &content) in artifact.bin_content.iter().enumerate() {
        let bar_len = if max > 0.0 {
            ((content / max) * bar_width as f64).round() as usize
        } else {
            0
        };
        out.push_str(&format!(
            "[{:>7.2}, {:>7.2})  {:<width$}  {}\n",
            edges[i],
            edges[i + 1],
            "#".repeat(bar_len),
            format_count(content),
            width = bar_width
        ));
    }
    out
}

/// Integer counts print without decimals, weighted contents with three.
fn format_count(c: f64) -> String {
    if (c - c.round()).abs() < 1e-9 { format!("{c:.0}") } else { format!("{c:.3}") }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ev_core::{Axis, Hist1D, Hist1DArtifact};

    #[test]
    fn chart_shape() {
        let mut h = Hist1D::new(Axis::new(4, 0.0, 1.0)).unwrap();
        h.fill(0.1);
        h.fill(0.3);
        h.fill(0.3);
        h.fill(2.0);
        let art = Hist1DArtifact::from_hist("demo", "x", &h);

        let chart = render(&art, 10);
        let lines: Vec<&str> = chart.lines().collect();
        assert_eq!(lines.len(), 5);
        assert!(lines[0].contains("entries 4"));
        assert!(lines[0].contains("overflow 1"));
        // The tallest bin uses the full bar width, the half-height bin half of it.
        assert!(lines[2].contains(&"#".repeat(10)));
        assert!(lines[1].contains(&"#".repeat(5)));
        assert!(!lines[1].contains(&"#".repeat(6)));
    }

    #[test]
    fn empty_histogram() {
        let h = Hist1D::new(Axis::new(2, 0.0, 1.0)).unwrap();
        let art = Hist1DArtifact::from_hist("empty", "x", &h);
        let chart = render(&art, 8);
        assert!(chart.contains("entries 0"));
        assert!(!chart.contains('#'));
    }

    #[test]
    fn weighted_counts_keep_decimals() {
        assert_eq!(format_count(3.0), "3");
        assert_eq!(format_count(2.5), "2.500");
    }
}
