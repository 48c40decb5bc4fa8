//! Flowing grade line: accumulate solved head changes along the chain.

use hp_core::Real;
use serde::{Deserialize, Serialize};

use crate::clip::clip_polyline;
use crate::element::Element;
use crate::route::ProfilePoint;
use crate::scale::Scale;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HglPoint {
    pub x: Real,
    pub head: Real,
    pub label: String,
    /// Index in the original element chain.
    pub element_index: usize,
}

impl HglPoint {
    pub fn to_profile_point(&self) -> ProfilePoint {
        ProfilePoint::new(self.x, self.head)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FlowingHgl {
    pub start_head: Real,
    /// Unclipped polyline, two points per element in chain order.
    pub points: Vec<HglPoint>,
    /// Visible pieces of `points` inside the elevation window.
    pub runs: Vec<Vec<ProfilePoint>>,
    /// Highest head on the unclipped polyline (first one on ties).
    pub peak: HglPoint,
    /// Peak lies above the visible window; draw an overflow indicator.
    pub peak_above_window: bool,
}

impl FlowingHgl {
    pub fn end_head(&self) -> Real {
        self.points.last().map_or(self.start_head, |p| p.head)
    }
}

#[derive(Default)]
struct Walk {
    head: Real,
    components_seen: usize,
    length: Real,
    last_x: Real,
    points: Vec<HglPoint>,
}

impl Walk {
    fn emit(&mut self, x: Real, label: String, element_index: usize) {
        // connections in the evenly-spaced fallback could step back otherwise
        let x = x.max(self.last_x);
        self.last_x = x;
        self.points.push(HglPoint {
            x,
            head: self.head,
            label,
            element_index,
        });
    }
}

/// Starting head: the first component level (`max_el`), else the first
/// element's `p1_el`.
pub fn start_head(elements: &[Element]) -> Option<Real> {
    elements
        .iter()
        .filter_map(Element::as_component)
        .find_map(|c| c.max_el)
        .or_else(|| elements.first().map(Element::p1_el))
}

/// Walk the chain and clip the result to the scale's elevation window.
///
/// `None` when the chain is empty or carries no solved head changes.
pub fn flowing_hgl(elements: &[Element], scale: &Scale) -> Option<FlowingHgl> {
    if !elements.iter().any(|e| e.head_change().is_some()) {
        return None;
    }
    let start = start_head(elements)?;
    let points = walk(elements, scale, start);

    let peak = points
        .iter()
        .fold(None::<&HglPoint>, |best, p| match best {
            Some(b) if b.head >= p.head => Some(b),
            _ => Some(p),
        })?
        .clone();

    let profile: Vec<ProfilePoint> = points.iter().map(HglPoint::to_profile_point).collect();
    let runs = clip_polyline(&profile, scale.min_el, scale.max_el);

    Some(FlowingHgl {
        start_head: start,
        peak_above_window: peak.head > scale.max_el,
        points,
        runs,
        peak,
    })
}

fn walk(elements: &[Element], scale: &Scale, start: Real) -> Vec<HglPoint> {
    let (x_left, _) = scale.x_range();
    let init = Walk {
        head: start,
        last_x: x_left,
        points: Vec::with_capacity(elements.len() * 2),
        ..Walk::default()
    };

    elements
        .iter()
        .enumerate()
        .fold(init, |mut w, (element_index, element)| {
            let name = display_name(element);
            match element {
                Element::Component(c) => {
                    let x = scale.x(w.components_seen);
                    w.emit(x, format!("{name} inlet"), element_index);
                    w.head += c.head_change.unwrap_or(0.0);
                    w.emit(x, format!("{name} outlet"), element_index);
                    w.components_seen += 1;
                }
                Element::Connection(c) => {
                    let seen = w.components_seen;
                    let xs = scale
                        .x_for_length(w.length)
                        .unwrap_or_else(|| scale.x(seen.saturating_sub(1)));
                    w.length += c.axis_length();
                    let xe = scale
                        .x_for_length(w.length)
                        .unwrap_or_else(|| scale.x(seen));
                    w.emit(xs, format!("{name} start"), element_index);
                    w.head += c.head_change.unwrap_or(0.0);
                    w.emit(xe, format!("{name} end"), element_index);
                }
            }
            w
        })
        .points
}

fn display_name(element: &Element) -> &str {
    if element.name().is_empty() {
        element.id()
    } else {
        element.name()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::ProfileConfig;
    use crate::element::{Component, ComponentKind, Connection};
    use crate::flatten::flatten;

    fn scale_for(elements: &[Element]) -> Scale {
        Scale::build(&flatten(elements), elements, &ProfileConfig::default())
    }

    fn comp(id: &str, el: Real, max_el: Option<Real>, dh: Option<Real>) -> Element {
        let mut c = Component::new(id, id, ComponentKind::Other, el);
        c.max_el = max_el;
        c.head_change = dh;
        c.into()
    }

    fn pipe(id: &str, length: Real, el: Real, dh: Option<Real>) -> Element {
        let mut c = Connection::new(id, id, Some(length), el);
        c.head_change = dh;
        c.into()
    }

    #[test]
    fn empty_chain_is_none() {
        assert!(flowing_hgl(&[], &scale_for(&[])).is_none());
    }

    #[test]
    fn no_solved_data_is_none() {
        let elements = vec![comp("a", 10.0, Some(20.0), None), pipe("p", 10.0, 10.0, None)];
        assert!(flowing_hgl(&elements, &scale_for(&elements)).is_none());
    }

    #[test]
    fn start_head_prefers_first_level() {
        let elements = vec![
            pipe("lead", 5.0, 3.0, None),
            comp("a", 10.0, None, None),
            comp("b", 10.0, Some(42.0), None),
        ];
        assert_eq!(start_head(&elements), Some(42.0));

        let without: Vec<Element> = elements[..2].to_vec();
        assert_eq!(start_head(&without), Some(3.0));
        assert_eq!(start_head(&[]), None);
    }

    #[test]
    fn two_points_per_element_with_losses() {
        let elements = vec![
            comp("r", 100.0, Some(110.0), None),
            pipe("p1", 100.0, 100.0, Some(-4.0)),
            comp("v", 95.0, None, Some(-1.0)),
            pipe("p2", 300.0, 95.0, Some(-5.0)),
            comp("t", 90.0, None, None),
        ];
        let scale = scale_for(&elements);
        let hgl = flowing_hgl(&elements, &scale).unwrap();
        assert_eq!(hgl.points.len(), 10);

        let heads: Vec<Real> = hgl.points.iter().map(|p| p.head).collect();
        assert_eq!(
            heads,
            vec![110.0, 110.0, 110.0, 106.0, 106.0, 105.0, 105.0, 100.0, 100.0, 100.0]
        );
        assert!(hgl.points.windows(2).all(|w| w[0].x <= w[1].x));
        assert_eq!(hgl.points[2].x, scale.x(0));
        assert_eq!(hgl.points[3].x, scale.x(1));
        assert_eq!(hgl.points[3].label, "p1 end");
        assert_eq!(hgl.points[4].label, "v inlet");
        assert_eq!(hgl.end_head(), 100.0);
        assert_eq!(hgl.peak.label, "r inlet");
    }

    #[test]
    fn fallback_spacing_stays_monotone() {
        let elements = vec![
            comp("a", 10.0, None, Some(1.0)),
            Connection::new("c1", "c1", None, 10.0).into(),
            Connection::new("c2", "c2", None, 10.0).into(),
            comp("b", 10.0, None, None),
        ];
        let scale = scale_for(&elements);
        assert!(!scale.is_proportional());
        let hgl = flowing_hgl(&elements, &scale).unwrap();
        assert_eq!(hgl.points.len(), 8);
        assert!(hgl.points.windows(2).all(|w| w[0].x <= w[1].x));
        assert_eq!(hgl.points[2].x, scale.x(0));
        assert_eq!(hgl.points[3].x, scale.x(1));
    }

    #[test]
    fn above_window_has_no_runs_but_a_peak() {
        let elements = vec![
            comp("r", 10.0, Some(20.0), Some(500.0)),
            pipe("p", 10.0, 10.0, None),
            comp("t", 10.0, None, None),
        ];
        let cfg = ProfileConfig {
            elevation_padding: 0.0,
            ..ProfileConfig::default()
        };
        let scale = Scale::build(&flatten(&elements), &elements, &cfg);
        let hgl = flowing_hgl(&elements, &scale).unwrap();
        // the reservoir inlet touches the top of [10, 20]; everything after is above
        assert!(hgl.runs.is_empty());
        assert_eq!(hgl.peak.head, 520.0);
        assert!(hgl.peak_above_window);
    }
}
