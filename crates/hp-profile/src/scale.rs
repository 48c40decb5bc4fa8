//! Axis scales: cumulative length → pixel x, elevation → pixel y, and ticks.

use hp_core::{Real, Tolerances, nearly_equal};
use serde::{Deserialize, Serialize};

use crate::config::ProfileConfig;
use crate::element::Element;
use crate::flatten::Flattened;

/// Elevation domain used when no element defines any elevation.
pub const DEFAULT_DOMAIN: (Real, Real) = (0.0, 100.0);

/// Upper bound on generated ticks; the step is coarsened by 10x past it.
const MAX_TICKS: Real = 1_000.0;

/// Coarsening rounds before giving up. The step overflows to infinity
/// well before this for any positive finite step.
const MAX_COARSENING: u32 = 400;

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Tick {
    pub value: Real,
    /// Drawn heavier (multiples of `tick_step * major_tick_every`).
    pub major: bool,
}

/// Linear scales for one diagram.
///
/// Pure: both mappings depend only on the data captured at build time.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Scale {
    /// Padded elevation domain.
    pub min_el: Real,
    pub max_el: Real,
    pub y_ticks: Vec<Tick>,
    cumulative: Vec<Real>,
    total_length: Real,
    x_left: Real,
    x_right: Real,
    y_top: Real,
    y_bottom: Real,
}

impl Scale {
    pub fn build(flat: &Flattened, elements: &[Element], config: &ProfileConfig) -> Self {
        let (min_el, max_el) = elevation_domain(elements, config.elevation_padding);
        let y_ticks = ticks(min_el, max_el, config.tick_step, config.major_tick_every);
        Self {
            min_el,
            max_el,
            y_ticks,
            cumulative: flat.positions.iter().map(|p| p.cumulative_length).collect(),
            total_length: flat.total_length,
            x_left: config.plot_left(),
            x_right: config.plot_right(),
            y_top: config.plot_top(),
            y_bottom: config.plot_bottom(),
        }
    }

    /// True when x positions follow pipe length rather than even spacing.
    pub fn is_proportional(&self) -> bool {
        self.total_length > 0.0 && !self.cumulative.is_empty()
    }

    pub fn total_length(&self) -> Real {
        self.total_length
    }

    pub fn component_count(&self) -> usize {
        self.cumulative.len()
    }

    /// Left and right pixel edges of the plot area.
    pub fn x_range(&self) -> (Real, Real) {
        (self.x_left, self.x_right)
    }

    /// Top and bottom pixel edges of the plot area.
    pub fn y_range(&self) -> (Real, Real) {
        (self.y_top, self.y_bottom)
    }

    /// Pixel x of the component at `index` in the position list.
    ///
    /// Indices past the end clamp to the last component.
    pub fn x(&self, index: usize) -> Real {
        let n = self.cumulative.len();
        let width = self.x_right - self.x_left;
        if n == 0 {
            return self.x_left + width / 2.0;
        }
        let index = index.min(n - 1);
        if self.is_proportional() {
            self.x_left + width * (self.cumulative[index] / self.total_length)
        } else if n == 1 {
            self.x_left + width / 2.0
        } else {
            self.x_left + width * (index as Real / (n - 1) as Real)
        }
    }

    /// Pixel x of an arbitrary cumulative length, or `None` in the
    /// evenly-spaced fallback where lengths carry no position.
    pub fn x_for_length(&self, length: Real) -> Option<Real> {
        if !self.is_proportional() {
            return None;
        }
        let fraction = (length / self.total_length).clamp(0.0, 1.0);
        Some(self.x_left + (self.x_right - self.x_left) * fraction)
    }

    /// Pixel y of an elevation; higher elevations map to smaller y.
    ///
    /// A domain narrower than float resolution at its magnitude is treated
    /// as empty and centers.
    pub fn y(&self, elevation: Real) -> Real {
        let span = self.max_el - self.min_el;
        if span <= 0.0 || nearly_equal(self.min_el, self.max_el, Tolerances::default()) {
            return (self.y_top + self.y_bottom) / 2.0;
        }
        let fraction = (elevation - self.min_el) / span;
        self.y_bottom - fraction * (self.y_bottom - self.y_top)
    }

    /// Whether an elevation lies inside the visible domain.
    pub fn contains_el(&self, elevation: Real) -> bool {
        elevation >= self.min_el && elevation <= self.max_el
    }
}

/// Union of every defined elevation, padded; [`DEFAULT_DOMAIN`] if none.
pub fn elevation_domain(elements: &[Element], padding: Real) -> (Real, Real) {
    elements
        .iter()
        .flat_map(Element::elevations)
        .fold(None, |acc: Option<(Real, Real)>, el| match acc {
            None => Some((el, el)),
            Some((lo, hi)) => Some((lo.min(el), hi.max(el))),
        })
        .map(|(lo, hi)| (lo - padding, hi + padding))
        .unwrap_or(DEFAULT_DOMAIN)
}

/// Ticks at every multiple of `step` inside `[min, max]`.
///
/// Past `MAX_TICKS` the step is multiplied by 10 until the range fits.
/// Tick indices stay in floating point so extreme elevations cannot
/// overflow an integer.
pub fn ticks(min: Real, max: Real, step: Real, major_every: u32) -> Vec<Tick> {
    if !(step > 0.0) || !step.is_finite() || !min.is_finite() || !max.is_finite() || max < min {
        return Vec::new();
    }

    let mut factor: Real = 1.0;
    for _ in 0..MAX_COARSENING {
        let effective = step * factor;
        if !effective.is_finite() {
            break;
        }
        let first = (min / effective).ceil();
        let last = (max / effective).floor();
        if last - first < MAX_TICKS {
            return tick_run(first, last, effective, factor, major_every);
        }
        factor *= 10.0;
    }
    Vec::new()
}

fn tick_run(first: Real, last: Real, effective: Real, factor: Real, major_every: u32) -> Vec<Tick> {
    if last < first {
        return Vec::new();
    }
    let count = (last - first) as usize + 1;
    let mut out: Vec<Tick> = Vec::with_capacity(count);
    for i in 0..count {
        let k = first + i as Real;
        let value = k * effective;
        // Adjacent indices collapse to one value at the edge of f64 precision.
        if out.last().is_some_and(|t| t.value == value) {
            continue;
        }
        out.push(Tick {
            value,
            major: major_every > 0 && (k * factor).rem_euclid(major_every as Real) == 0.0,
        });
    }
    out
}
