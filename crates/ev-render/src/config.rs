use serde::Deserialize;

/// Rendering configuration (programmatic or from JSON).
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct RenderConfig {
    /// Figure width in points.
    pub width: f64,
    /// Figure height in points.
    pub height: f64,
    /// Base font size.
    pub font_size: f64,
    /// Axis label font size.
    pub label_size: f64,
    /// Tick label font size.
    pub tick_size: f64,
    /// Bar fill color.
    pub bar_color: String,
    /// Axis and text color.
    pub axis_color: String,
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self {
            width: 518.4,  // 7.2" * 72
            height: 302.4, // 4.2" * 72
            font_size: 10.0,
            label_size: 11.0,
            tick_size: 8.5,
            bar_color: "#4477aa".into(),
            axis_color: "#222222".into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn partial_json_overrides_defaults() {
        let cfg: RenderConfig = serde_json::from_str(r#"{"width": 200.0}"#).unwrap();
        assert_eq!(cfg.width, 200.0);
        assert_eq!(cfg.height, RenderConfig::default().height);
    }
}
