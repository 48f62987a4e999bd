use std::fmt::Write as FmtWrite;

use crate::primitives::{LineStyle, Style, TextStyle};

/// An SVG element stored for deferred rendering.
#[derive(Debug, Clone)]
enum SvgElement {
    Rect { x: f64, y: f64, w: f64, h: f64, style: Style },
    Line { x1: f64, y1: f64, x2: f64, y2: f64, style: LineStyle },
    Polyline { points: Vec<(f64, f64)>, style: LineStyle },
    Text { x: f64, y: f64, content: String, style: TextStyle },
}

/// Immediate-mode SVG canvas. Coordinates in points (1pt = 1/72").
pub struct Canvas {
    pub width: f64,
    pub height: f64,
    elements: Vec<SvgElement>,
}

impl Canvas {
    pub fn new(width: f64, height: f64) -> Self {
        Self { width, height, elements: Vec::new() }
    }

    pub fn rect(&mut self, x: f64, y: f64, w: f64, h: f64, style: &Style) {
        self.elements.push(SvgElement::Rect { x, y, w, h, style: style.clone() });
    }

    pub fn line(&mut self, x1: f64, y1: f64, x2: f64, y2: f64, style: &LineStyle) {
        self.elements.push(SvgElement::Line { x1, y1, x2, y2, style: style.clone() });
    }

    pub fn polyline(&mut self, points: &[(f64, f64)], style: &LineStyle) {
        self.elements.push(SvgElement::Polyline { points: points.to_vec(), style: style.clone() });
    }

    pub fn text(&mut self, x: f64, y: f64, content: &str, style: &TextStyle) {
        self.elements.push(SvgElement::Text {
            x,
            y,
            content: content.to_string(),
            style: style.clone(),
        });
    }

    /// Serialize all elements to an SVG document.
    pub fn into_svg(self) -> String {
        let mut out = String::new();
        let (w, h) = (self.width, self.height);
        out.push_str(&format!(
            concat!(
                r#"<svg xmlns="http://www.w3.org/2000/svg" "#,
                r#"width="{w:.0}" height="{h:.0}" viewBox="0 0 {w:.2} {h:.2}">"#,
                "\n"
            ),
            w = w,
            h = h
        ));
        out.push_str(&format!(
            "<rect x=\"0\" y=\"0\" width=\"{w:.2}\" height=\"{h:.2}\" fill=\"#ffffff\" />\n"
        ));
        for element in &self.elements {
            Self::write_element(&mut out, element);
        }
        out.push_str("</svg>\n");
        out
    }

    fn write_element(out: &mut String, element: &SvgElement) {
        match element {
            SvgElement::Rect { x, y, w, h, style } => {
                write!(out, r#"<rect x="{x:.2}" y="{y:.2}" width="{w:.2}" height="{h:.2}""#)
                    .unwrap();
                Self::write_style(out, style);
                out.push_str(" />\n");
            }
            SvgElement::Line { x1, y1, x2, y2, style } => {
                write!(out, r#"<line x1="{x1:.2}" y1="{y1:.2}" x2="{x2:.2}" y2="{y2:.2}""#)
                    .unwrap();
                Self::write_line_style(out, style);
                out.push_str(" />\n");
            }
            SvgElement::Polyline { points, style } => {
                out.push_str("<polyline points=\"");
                for (i, (x, y)) in points.iter().enumerate() {
                    if i > 0 {
                        out.push(' ');
                    }
                    write!(out, "{x:.2},{y:.2}").unwrap();
                }
                out.push('"');
                Self::write_line_style(out, style);
                out.push_str(r#" fill="none" />"#);
                out.push('\n');
            }
            SvgElement::Text { x, y, content, style } => {
                write!(
                    out,
                    r#"<text x="{x:.2}" y="{y:.2}" font-size="{:.1}" fill="{}" text-anchor="{}""#,
                    style.size,
                    style.color,
                    style.anchor.as_str()
                )
                .unwrap();
                if style.bold {
                    out.push_str(r#" font-weight="bold""#);
                }
                write!(out, ">{}</text>", xml_escape(content)).unwrap();
                out.push('\n');
            }
        }
    }

    fn write_style(out: &mut String, style: &Style) {
        match &style.fill {
            Some(color) => write!(out, r#" fill="{color}""#).unwrap(),
            None => out.push_str(r#" fill="none""#),
        }
        if let Some(color) = &style.stroke {
            write!(out, r#" stroke="{color}" stroke-width="{:.2}""#, style.stroke_width).unwrap();
        }
        if style.opacity < 1.0 {
            write!(out, r#" opacity="{:.2}""#, style.opacity).unwrap();
        }
    }

    fn write_line_style(out: &mut String, style: &LineStyle) {
        write!(out, r#" stroke="{}" stroke-width="{:.2}""#, style.color, style.width).unwrap();
        if let Some(dash) = &style.dash {
            write!(out, r#" stroke-dasharray="{dash}""#).unwrap();
        }
    }
}

fn xml_escape(text: &str) -> String {
    text.replace('&', "&amp;").replace('<', "&lt;").replace('>', "&gt;")
}
