//! SVG geometry for the dashboard charts.
//!
//! Components render the strings and rectangles produced here directly
//! into inline `<svg>` elements; nothing in this module touches the DOM.

use std::f64::consts::PI;

/// Drawing surface with margins reserved for axes.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PlotArea {
    pub width: f64,
    pub height: f64,
    pub top: f64,
    pub right: f64,
    pub bottom: f64,
    pub left: f64,
}

impl PlotArea {
    pub fn inner_width(&self) -> f64 {
        (self.width - self.left - self.right).max(0.0)
    }

    pub fn inner_height(&self) -> f64 {
        (self.height - self.top - self.bottom).max(0.0)
    }

    pub fn baseline(&self) -> f64 {
        self.height - self.bottom
    }

    /// `viewBox` attribute value.
    pub fn view_box(&self) -> String {
        format!("0 0 {} {}", self.width, self.height)
    }
}

/// Linear value axis starting at zero.
#[derive(Clone, Debug, PartialEq)]
pub struct LinearScale {
    pub max: f64,
    pub ticks: Vec<f64>,
}

impl LinearScale {
    /// Scale covering `values` with roughly `tick_count` evenly spaced,
    /// rounded ticks. The top tick is never below the largest value.
    pub fn for_values(values: impl IntoIterator<Item = f64>, tick_count: usize) -> Self {
        let max = values
            .into_iter()
            .filter(|v| v.is_finite())
            .fold(0.0_f64, f64::max);

        if max <= 0.0 {
            return Self {
                max: 1.0,
                ticks: vec![0.0, 1.0],
            };
        }

        let intervals = tick_count.saturating_sub(1).max(1) as f64;
        let step = nice_step(max / intervals);
        let top = (max / step).ceil() * step;
        let count = (top / step).round() as usize;
        let ticks = (0..=count).map(|i| i as f64 * step).collect();

        Self { max: top, ticks }
    }

    /// Position of `value` as a fraction of the axis, clamped to `[0, 1]`.
    pub fn ratio(&self, value: f64) -> f64 {
        (value / self.max).clamp(0.0, 1.0)
    }
}

/// Round a raw step up to 1, 2, 2.5, 5 or 10 times a power of ten.
fn nice_step(raw: f64) -> f64 {
    let magnitude = 10_f64.powi(raw.log10().floor() as i32);
    let normalized = raw / magnitude;
    let nice = if normalized <= 1.0 {
        1.0
    } else if normalized <= 2.0 {
        2.0
    } else if normalized <= 2.5 {
        2.5
    } else if normalized <= 5.0 {
        5.0
    } else {
        10.0
    };
    nice * magnitude
}

/// A bar in a bar chart.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct BarRect {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
}

/// A positioned axis label.
#[derive(Clone, Debug, PartialEq)]
pub struct AxisTick {
    pub position: f64,
    pub value: f64,
}

/// Projection of an indexed series onto a [`PlotArea`].
#[derive(Clone, Debug, PartialEq)]
pub struct Cartesian {
    pub area: PlotArea,
    pub scale: LinearScale,
    pub len: usize,
}

/// Fraction of each band left empty around a bar.
const BAR_PADDING: f64 = 0.2;

impl Cartesian {
    pub fn new(area: PlotArea, values: &[f64], tick_count: usize) -> Self {
        Self {
            area,
            scale: LinearScale::for_values(values.iter().copied(), tick_count),
            len: values.len(),
        }
    }

    /// X coordinate of point `index` for line and area series.
    pub fn point_x(&self, index: usize) -> f64 {
        if self.len <= 1 {
            return self.area.left + self.area.inner_width() / 2.0;
        }
        let step = self.area.inner_width() / (self.len - 1) as f64;
        self.area.left + step * index as f64
    }

    /// X coordinate of the centre of band `index` for bar series.
    pub fn band_center(&self, index: usize) -> f64 {
        let band = self.band_width();
        self.area.left + band * index as f64 + band / 2.0
    }

    fn band_width(&self) -> f64 {
        self.area.inner_width() / self.len.max(1) as f64
    }

    pub fn y(&self, value: f64) -> f64 {
        self.area.baseline() - self.scale.ratio(value) * self.area.inner_height()
    }

    /// `d` attribute of a polyline through every value.
    pub fn line_path(&self, values: &[f64]) -> String {
        values
            .iter()
            .enumerate()
            .map(|(i, v)| {
                let cmd = if i == 0 { 'M' } else { 'L' };
                format!("{}{:.2},{:.2}", cmd, self.point_x(i), self.y(*v))
            })
            .collect::<Vec<_>>()
            .join(" ")
    }

    /// `d` attribute of the line closed down to the baseline.
    pub fn area_path(&self, values: &[f64]) -> String {
        if values.is_empty() {
            return String::new();
        }
        let baseline = self.area.baseline();
        format!(
            "{} L{:.2},{:.2} L{:.2},{:.2} Z",
            self.line_path(values),
            self.point_x(values.len() - 1),
            baseline,
            self.point_x(0),
            baseline
        )
    }

    pub fn bars(&self, values: &[f64]) -> Vec<BarRect> {
        let band = self.band_width();
        let width = band * (1.0 - BAR_PADDING);
        values
            .iter()
            .enumerate()
            .map(|(i, v)| {
                let y = self.y(*v);
                BarRect {
                    x: self.band_center(i) - width / 2.0,
                    y,
                    width,
                    height: self.area.baseline() - y,
                }
            })
            .collect()
    }

    /// Horizontal grid lines / y axis labels.
    pub fn y_ticks(&self) -> Vec<AxisTick> {
        self.scale
            .ticks
            .iter()
            .map(|value| AxisTick {
                position: self.y(*value),
                value: *value,
            })
            .collect()
    }
}

/// Centre and radii of a pie or donut.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PieGeometry {
    pub cx: f64,
    pub cy: f64,
    /// Zero for a full pie.
    pub inner_radius: f64,
    pub outer_radius: f64,
    /// Gap between adjacent slices, in degrees.
    pub pad_angle: f64,
}

/// One sector of a pie chart.
#[derive(Clone, Debug, PartialEq)]
pub struct PieSlice {
    /// Fraction of the total, in `[0, 1]`.
    pub share: f64,
    /// Degrees clockwise from 12 o'clock.
    pub start_angle: f64,
    pub end_angle: f64,
    /// `d` attribute of the sector.
    pub path: String,
}

/// Largest sweep a single SVG arc can draw without degenerating.
const MAX_SWEEP: f64 = 359.99;

/// Lay out `values` as consecutive sectors.
///
/// Negative and non-finite values count as zero. Returns no slices when
/// the total is zero.
pub fn pie_slices(values: &[f64], geometry: PieGeometry) -> Vec<PieSlice> {
    let clean: Vec<f64> = values
        .iter()
        .map(|v| if v.is_finite() && *v > 0.0 { *v } else { 0.0 })
        .collect();
    let total: f64 = clean.iter().sum();
    if total <= 0.0 {
        return Vec::new();
    }

    let visible = clean.iter().filter(|v| **v > 0.0).count();
    let pad = if visible > 1 { geometry.pad_angle } else { 0.0 };

    let mut cursor = 0.0;
    clean
        .iter()
        .map(|value| {
            let share = value / total;
            let span = share * 360.0;
            let start = cursor;
            cursor += span;

            let inset = (pad / 2.0).min(span / 2.0);
            let from = start + inset;
            let to = (start + span - inset).min(from + MAX_SWEEP);

            PieSlice {
                share,
                start_angle: start,
                end_angle: start + span,
                path: sector_path(&geometry, from, to),
            }
        })
        .collect()
}

fn polar(geometry: &PieGeometry, radius: f64, degrees: f64) -> (f64, f64) {
    let radians = (degrees - 90.0) * PI / 180.0;
    (
        geometry.cx + radius * radians.cos(),
        geometry.cy + radius * radians.sin(),
    )
}

fn sector_path(geometry: &PieGeometry, from: f64, to: f64) -> String {
    if to <= from {
        return String::new();
    }
    let large_arc = u8::from(to - from > 180.0);
    let outer = geometry.outer_radius;
    let inner = geometry.inner_radius;
    let (ox1, oy1) = polar(geometry, outer, from);
    let (ox2, oy2) = polar(geometry, outer, to);

    if inner <= 0.0 {
        return format!(
            "M{:.2},{:.2} L{:.2},{:.2} A{},{} 0 {} 1 {:.2},{:.2} Z",
            geometry.cx, geometry.cy, ox1, oy1, outer, outer, large_arc, ox2, oy2
        );
    }

    let (ix2, iy2) = polar(geometry, inner, to);
    let (ix1, iy1) = polar(geometry, inner, from);
    format!(
        "M{:.2},{:.2} A{},{} 0 {} 1 {:.2},{:.2} L{:.2},{:.2} A{},{} 0 {} 0 {:.2},{:.2} Z",
        ox1, oy1, outer, outer, large_arc, ox2, oy2, ix2, iy2, inner, inner, large_arc, ix1, iy1
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    fn area() -> PlotArea {
        PlotArea {
            width: 600.0,
            height: 300.0,
            top: 10.0,
            right: 10.0,
            bottom: 30.0,
            left: 50.0,
        }
    }

    fn donut() -> PieGeometry {
        PieGeometry {
            cx: 100.0,
            cy: 100.0,
            inner_radius: 60.0,
            outer_radius: 80.0,
            pad_angle: 5.0,
        }
    }

    #[test]
    fn test_nice_step() {
        assert_eq!(nice_step(7000.0), 10000.0);
        assert_eq!(nice_step(1800.0), 2000.0);
        assert_eq!(nice_step(2.2), 2.5);
        assert_eq!(nice_step(45.0), 50.0);
    }

    #[test]
    fn test_scale_covers_max() {
        let scale = LinearScale::for_values([12000.0, 28000.0, 15000.0], 5);
        assert_eq!(scale.ticks.first(), Some(&0.0));
        assert!(scale.max >= 28000.0);
        assert_eq!(scale.ticks.last(), Some(&scale.max));

        let steps: Vec<f64> = scale.ticks.windows(2).map(|w| w[1] - w[0]).collect();
        assert!(steps.windows(2).all(|w| (w[0] - w[1]).abs() < 1e-9));
    }

    #[test]
    fn test_scale_for_zero_values() {
        let scale = LinearScale::for_values([0.0, 0.0], 5);
        assert_eq!(scale.max, 1.0);
        assert_eq!(scale.ratio(0.0), 0.0);
    }

    #[test]
    fn test_projection() {
        let chart = Cartesian::new(area(), &[0.0, 50.0, 100.0], 5);
        assert_eq!(chart.point_x(0), 50.0);
        assert_eq!(chart.point_x(2), 590.0);
        assert_eq!(chart.y(0.0), 270.0);
        assert_eq!(chart.y(chart.scale.max), 10.0);
    }

    #[test]
    fn test_single_point_is_centered() {
        let chart = Cartesian::new(area(), &[10.0], 5);
        assert_eq!(chart.point_x(0), 320.0);
    }

    #[test]
    fn test_line_and_area_paths() {
        let values = [10.0, 20.0, 15.0];
        let chart = Cartesian::new(area(), &values, 5);
        let line = chart.line_path(&values);
        assert!(line.starts_with("M50.00,"));
        assert_eq!(line.matches('L').count(), 2);

        let area_path = chart.area_path(&values);
        assert!(area_path.starts_with(&line));
        assert!(area_path.ends_with('Z'));
        assert!(chart.area_path(&[]).is_empty());
    }

    #[test]
    fn test_bars_sit_on_baseline() {
        let values = [120.0, 200.0, 0.0];
        let chart = Cartesian::new(area(), &values, 5);
        let bars = chart.bars(&values);
        assert_eq!(bars.len(), 3);
        for bar in &bars {
            assert!((bar.y + bar.height - 270.0).abs() < 1e-9);
            assert!(bar.width > 0.0);
        }
        assert_eq!(bars[2].height, 0.0);
        assert!(bars[1].height > bars[0].height);
    }

    #[test]
    fn test_pie_shares_and_angles() {
        let slices = pie_slices(&[35.0, 25.0, 20.0, 15.0, 5.0], donut());
        assert_eq!(slices.len(), 5);

        let total: f64 = slices.iter().map(|s| s.share).sum();
        assert!((total - 1.0).abs() < 1e-9);
        assert_eq!(slices[0].start_angle, 0.0);
        for pair in slices.windows(2) {
            assert!((pair[0].end_angle - pair[1].start_angle).abs() < 1e-9);
        }
        assert!((slices[4].end_angle - 360.0).abs() < 1e-9);
        assert!(slices.iter().all(|s| s.path.starts_with('M') && s.path.ends_with('Z')));
    }

    #[test]
    fn test_pie_large_arc_flag() {
        let slices = pie_slices(&[75.0, 25.0], donut());
        assert!(slices[0].path.contains(" 0 1 1 "));
        assert!(slices[1].path.contains(" 0 0 1 "));
    }

    #[test]
    fn test_pie_single_full_slice() {
        let geometry = PieGeometry {
            inner_radius: 0.0,
            ..donut()
        };
        let slices = pie_slices(&[42.0], geometry);
        assert_eq!(slices.len(), 1);
        assert_eq!(slices[0].share, 1.0);
        assert!(!slices[0].path.is_empty());
    }

    #[test]
    fn test_pie_zero_total() {
        assert!(pie_slices(&[0.0, -3.0, f64::NAN], donut()).is_empty());
        assert!(pie_slices(&[], donut()).is_empty());
    }
}
