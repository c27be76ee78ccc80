//! Application configuration.
//!
//! Centralizes the web layer's compile-time constants. Layout breakpoints
//! and sidebar widths live in `meto_core::layout`.

// =============================================================================
// Application Metadata
// =============================================================================

/// Brand name shown in the sidebar.
pub const APP_NAME: &str = "Meto";

/// Single-letter logo mark (shown alone when the sidebar is collapsed).
pub const APP_MONOGRAM: &str = "M";

// =============================================================================
// Settings Page
// =============================================================================

/// How long the "Changes saved" notice stays visible.
pub const SAVED_NOTICE_MS: u32 = 2500;

// =============================================================================
// Analytics
// =============================================================================

/// Prefix of the exported report file (`meto-analytics-6m.json`).
pub const REPORT_FILE_PREFIX: &str = "meto-analytics";

/// MIME type of the exported report.
pub const REPORT_MIME: &str = "application/json";

// =============================================================================
// Charts
// =============================================================================

/// Chart sizing. All charts are drawn in a fixed coordinate space and
/// scaled to their container through `viewBox`.
pub mod chart {
    use meto_core::chart::PlotArea;

    /// Line, area and bar charts.
    pub const CARTESIAN: PlotArea = PlotArea {
        width: 640.0,
        height: 300.0,
        top: 16.0,
        right: 16.0,
        bottom: 32.0,
        left: 56.0,
    };

    /// Number of y axis ticks to aim for.
    pub const TICK_COUNT: usize = 5;

    /// Side of the square pie canvas.
    pub const PIE_SIZE: f64 = 240.0;

    /// Donut radii (inner, outer) on regular screens.
    pub const DONUT_RADII: (f64, f64) = (60.0, 80.0);

    /// Donut radii below [`COMPACT_QUERY`].
    pub const DONUT_RADII_COMPACT: (f64, f64) = (40.0, 60.0);

    /// Full pie radius on the analytics page.
    pub const PIE_RADIUS: f64 = 100.0;

    /// Gap between slices in degrees.
    pub const PAD_ANGLE: f64 = 5.0;

    /// Media query for compact chart radii.
    pub const COMPACT_QUERY: &str = "(max-width: 639px)";
}

// =============================================================================
// UI Configuration
// =============================================================================

/// Icon theme selection.
///
/// Available themes:
/// - `Bootstrap` - Familiar, slightly bolder (default)
/// - `Lucide` - Minimal, thin strokes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[allow(dead_code)]
pub enum IconTheme {
    #[default]
    Bootstrap,
    Lucide,
}

/// Current icon theme used throughout the application.
/// Change this value to switch icon styles globally.
pub const ICON_THEME: IconTheme = IconTheme::Bootstrap;
