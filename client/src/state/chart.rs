//! Tradespace chart datasets and plot geometry.
//!
//! DESIGN
//! ======
//! The chart holds no state beyond its two series. Both are rebuilt from the
//! table's visible rows on every draw and replace the previous series
//! wholesale, so there is no diffing or stale-point cleanup.

#[cfg(test)]
#[path = "chart_test.rs"]
mod chart_test;

use crate::net::types::TradespaceRow;
use crate::util::format;

/// One plotted design. Keeps its source row for click/hover lookups.
#[derive(Clone, Debug, PartialEq)]
pub struct ChartPoint {
    pub x: f64,
    pub y: f64,
    pub row: TradespaceRow,
}

impl ChartPoint {
    fn from_row(row: &TradespaceRow) -> Self {
        Self { x: row.cost.total, y: row.value.price, row: row.clone() }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Series {
    Valid,
    Invalid,
}

impl Series {
    pub fn label(self) -> &'static str {
        match self {
            Series::Valid => "Valid",
            Series::Invalid => "Invalid",
        }
    }

    pub fn color(self) -> &'static str {
        match self {
            Series::Valid => "#5cb85c",
            Series::Invalid => "#d9534f",
        }
    }
}

/// The two scatter series shown for the current table page.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct ChartData {
    pub valid: Vec<ChartPoint>,
    pub invalid: Vec<ChartPoint>,
}

impl ChartData {
    /// Partition rows by validity, plotting cost against price.
    pub fn rebuild(rows: &[TradespaceRow]) -> Self {
        let (valid, invalid): (Vec<_>, Vec<_>) = rows.iter().partition(|row| row.is_valid);
        Self {
            valid: valid.into_iter().map(ChartPoint::from_row).collect(),
            invalid: invalid.into_iter().map(ChartPoint::from_row).collect(),
        }
    }

    pub fn series(&self, series: Series) -> &[ChartPoint] {
        match series {
            Series::Valid => &self.valid,
            Series::Invalid => &self.invalid,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.valid.is_empty() && self.invalid.is_empty()
    }

    fn points(&self) -> impl Iterator<Item = &ChartPoint> {
        self.valid.iter().chain(self.invalid.iter())
    }

    /// Axis ranges covering every point, widened to tick-friendly bounds.
    pub fn bounds(&self) -> (AxisRange, AxisRange) {
        let xs: Vec<f64> = self.points().map(|p| p.x).collect();
        let ys: Vec<f64> = self.points().map(|p| p.y).collect();
        (AxisRange::covering(&xs), AxisRange::covering(&ys))
    }
}

/// Inclusive axis range with a tick step.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct AxisRange {
    pub min: f64,
    pub max: f64,
    pub step: f64,
}

const TARGET_TICKS: f64 = 5.0;

impl AxisRange {
    /// Nice range over `values`; `0..1` when there are no finite values.
    pub fn covering(values: &[f64]) -> Self {
        let finite = values.iter().copied().filter(|v| v.is_finite());
        let (lo, hi) = finite.fold((f64::INFINITY, f64::NEG_INFINITY), |(lo, hi), v| (lo.min(v), hi.max(v)));
        if !lo.is_finite() {
            return Self { min: 0.0, max: 1.0, step: 0.2 };
        }
        let (lo, hi) = if (hi - lo).abs() < f64::EPSILON {
            let pad = if lo == 0.0 { 1.0 } else { lo.abs() * 0.1 };
            (lo - pad, hi + pad)
        } else {
            (lo, hi)
        };
        let step = nice_step((hi - lo) / TARGET_TICKS);
        Self { min: (lo / step).floor() * step, max: (hi / step).ceil() * step, step }
    }

    pub fn ticks(&self) -> Vec<f64> {
        let count = ((self.max - self.min) / self.step).round();
        #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
        let count = count.max(0.0) as usize;
        (0..=count).map(|i| self.min + self.step * i as f64).collect()
    }

    /// Fraction of the way from `min` to `max`.
    pub fn fraction(&self, value: f64) -> f64 {
        let span = self.max - self.min;
        if span <= 0.0 { 0.0 } else { (value - self.min) / span }
    }
}

/// Round a raw step to 1, 2, 5 or 10 times a power of ten.
fn nice_step(raw: f64) -> f64 {
    if raw <= 0.0 || !raw.is_finite() {
        return 1.0;
    }
    let magnitude = 10f64.powf(raw.log10().floor());
    let residual = raw / magnitude;
    let nice = if residual <= 1.0 {
        1.0
    } else if residual <= 2.0 {
        2.0
    } else if residual <= 5.0 {
        5.0
    } else {
        10.0
    };
    nice * magnitude
}

/// Tick labels on both axes are money.
pub fn tick_label(value: f64) -> String {
    format::money(value)
}

/// Pixel frame of the plot area inside the SVG viewport.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PlotFrame {
    pub width: f64,
    pub height: f64,
    pub left: f64,
    pub right: f64,
    pub top: f64,
    pub bottom: f64,
}

impl Default for PlotFrame {
    fn default() -> Self {
        Self { width: 720.0, height: 420.0, left: 80.0, right: 20.0, top: 20.0, bottom: 60.0 }
    }
}

impl PlotFrame {
    pub fn plot_width(&self) -> f64 {
        self.width - self.left - self.right
    }

    pub fn plot_height(&self) -> f64 {
        self.height - self.top - self.bottom
    }

    pub fn x_px(&self, range: &AxisRange, value: f64) -> f64 {
        self.left + range.fraction(value) * self.plot_width()
    }

    /// SVG y grows downward, so larger values sit closer to `top`.
    pub fn y_px(&self, range: &AxisRange, value: f64) -> f64 {
        self.top + (1.0 - range.fraction(value)) * self.plot_height()
    }
}

/// Tooltip anchored at a hovered point, in chart-relative pixels.
#[derive(Clone, Debug, PartialEq)]
pub struct ChartTooltip {
    pub left: f64,
    pub top: f64,
    pub thumbnail: String,
    pub name: String,
}

impl ChartTooltip {
    pub fn at(point: &ChartPoint, frame: &PlotFrame, x_range: &AxisRange, y_range: &AxisRange) -> Self {
        Self {
            left: frame.x_px(x_range, point.x),
            top: frame.y_px(y_range, point.y),
            thumbnail: point.row.thumbnail.clone(),
            name: point.row.name.clone(),
        }
    }
}
