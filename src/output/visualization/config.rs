//! Plot configuration for comparison charts
//!
//! This module defines the configuration structure shared by the chart
//! rendering functions.

use plotters::prelude::*;

/// Configuration for customizing comparison charts
///
/// # Fields
///
/// - `width`, `height`: Dimensions in pixels (the default is a wide canvas
///   split into two side-by-side panels)
/// - `title`: Chart title, drawn over the left panel
/// - `xlabel`: Shared x-axis label
/// - `baseline_color`, `comparison_color`: Time-series colors (left panel)
/// - `speedup_color`, `divergence_color`: Metric-series colors (right panel)
/// - `background`: Background color
/// - `line_width`: Line thickness in pixels
/// - `marker_size`: Data-point marker radius in pixels
/// - `show_grid`: Whether to show grid lines
///
/// # Example
///
/// ```rust,ignore
/// use nbody_bench::output::visualization::PlotConfig;
/// use plotters::prelude::*;
///
/// let mut config = PlotConfig::comparison("OpenMP vs Original");
/// config.comparison_color = GREEN;
/// config.width = 1920;  // Full HD
/// config.height = 800;
/// ```
#[derive(Clone)]
pub struct PlotConfig {
    /// Image width in pixels (default: 1200)
    pub width: u32,

    /// Image height in pixels (default: 500)
    pub height: u32,

    /// Chart title (default: "Performance Comparison")
    pub title: String,

    /// X-axis label for both panels (default: "Timesteps")
    pub xlabel: String,

    /// Line color for the baseline time series (default: BLUE)
    pub baseline_color: RGBColor,

    /// Line color for the comparison time series (default: orange)
    pub comparison_color: RGBColor,

    /// Line color for the speedup series (default: BLUE)
    pub speedup_color: RGBColor,

    /// Line color for the divergence series (default: RED)
    pub divergence_color: RGBColor,

    /// Background color (default: WHITE)
    pub background: RGBColor,

    /// Line width in pixels (default: 2)
    pub line_width: u32,

    /// Marker radius in pixels for data points (default: 3)
    pub marker_size: u32,

    /// Show grid lines (default: true)
    pub show_grid: bool,
}

impl Default for PlotConfig {
    fn default() -> Self {
        Self {
            width: 1200,
            height: 500,
            title: "Performance Comparison".to_string(),
            xlabel: "Timesteps".to_string(),
            baseline_color: BLUE,
            comparison_color: RGBColor(255, 165, 0), // Orange
            speedup_color: BLUE,
            divergence_color: RED,
            background: WHITE,
            line_width: 2,
            marker_size: 3,
            show_grid: true,
        }
    }
}

/// Helper trait to accept both `String` and `None` for optional titles
pub trait IntoOptionalTitle {
    fn into_optional_title(self) -> Option<String>;
}

impl IntoOptionalTitle for &str {
    fn into_optional_title(self) -> Option<String> {
        Some(self.to_string())
    }
}

impl IntoOptionalTitle for String {
    fn into_optional_title(self) -> Option<String> {
        Some(self)
    }
}

impl<T: IntoOptionalTitle> IntoOptionalTitle for Option<T> {
    fn into_optional_title(self) -> Option<String> {
        self.and_then(|t| t.into_optional_title())
    }
}

/// Constant for no title (default title will be used)
///
/// # Example
///
/// ```rust,ignore
/// let config = PlotConfig::comparison(NO_TITLE);
/// ```
pub const NO_TITLE: Option<&str> = None;

impl PlotConfig {
    /// Create config for comparison charts with optional custom title
    ///
    /// # Arguments
    ///
    /// * `title` - Custom title (String, &str) or None for default
    ///
    /// # Examples
    ///
    /// ```rust,ignore
    /// // With custom title (no Some() needed!)
    /// let config = PlotConfig::comparison("Barnes-Hut vs Original");
    /// let config = PlotConfig::comparison(format!("{} vs {}", label, baseline));
    ///
    /// // With default title
    /// let config = PlotConfig::comparison(None::<&str>);
    /// ```
    pub fn comparison(title: impl IntoOptionalTitle) -> Self {
        let mut config = Self::default();
        config.title = title
            .into_optional_title()
            .unwrap_or_else(|| "Performance Comparison".to_string());
        config
    }
}

// =================================================================================================
// Tests
// =================================================================================================
