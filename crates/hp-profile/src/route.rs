//! Segment routing: the pipe polyline between each pair of adjacent components.
//!
//! A segment holds every connection between two neighbouring components:
//!
//! - no connection: a straight line between the two port elevations
//! - one connection: a stepped path with its vertical steps at mid-span
//! - several connections: each piece gets a share of the span proportional to
//!   its length; rising pieces climb at their start, falling/flat pieces hold
//!   and drop at their end
//!
//! Output is deterministic; the drawing layer correlates hover state by
//! point and connection index.

use hp_core::Real;
use serde::{Deserialize, Serialize};
use tracing::trace;

use crate::element::{Connection, Element};
use crate::flatten::{ComponentPosition, Flattened};
use crate::scale::Scale;

/// A point in mixed space: pixel x, data-space elevation.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ProfilePoint {
    pub x: Real,
    pub elevation: Real,
}

impl ProfilePoint {
    pub const fn new(x: Real, elevation: Real) -> Self {
        Self { x, elevation }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SegmentShape {
    /// Adjacent components with nothing between them.
    Direct,
    /// Exactly one connection.
    Simple,
    /// Two or more connections in series.
    Series,
}

/// A connection's slot within its segment.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SegmentConnection {
    /// Index in the original element chain.
    pub element_index: usize,
    pub id: String,
    pub x_start: Real,
    pub x_end: Real,
    pub rising: bool,
}

/// Break-point node between two connections of a series segment.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BoundaryMarker {
    pub x: Real,
    pub elevation: Real,
    /// Element index of the connection that ends here.
    pub element_index: usize,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Segment {
    pub start_id: String,
    /// Position index of the upstream component.
    pub start_index: usize,
    pub end_id: String,
    /// Position index of the downstream component.
    pub end_index: usize,
    pub shape: SegmentShape,
    pub connections: Vec<SegmentConnection>,
    pub boundaries: Vec<BoundaryMarker>,
    /// Summed connection length.
    pub length: Real,
    pub points: Vec<ProfilePoint>,
}

/// Route every segment of the chain, in upstream→downstream order.
///
/// Connections before the first or after the last component belong to no
/// segment.
pub fn route_segments(elements: &[Element], flat: &Flattened, scale: &Scale) -> Vec<Segment> {
    flat.positions
        .windows(2)
        .enumerate()
        .map(|(start_index, pair)| {
            let (start, end) = (&pair[0], &pair[1]);
            let connections: Vec<(usize, &Connection)> = elements
                [start.element_index + 1..end.element_index]
                .iter()
                .enumerate()
                .filter_map(|(offset, el)| {
                    el.as_connection()
                        .map(|c| (start.element_index + 1 + offset, c))
                })
                .collect();
            route_segment(start, end, start_index, &connections, scale)
        })
        .collect()
}

/// Route one segment. `start_index` is the position index of `start`.
pub fn route_segment(
    start: &ComponentPosition,
    end: &ComponentPosition,
    start_index: usize,
    connections: &[(usize, &Connection)],
    scale: &Scale,
) -> Segment {
    let end_index = start_index + 1;
    let x0 = scale.x(start_index);
    let x1 = scale.x(end_index);
    let start_el = start.component.outlet_el();
    let end_el = end.component.inlet_el();

    let (shape, slots, boundaries, points) = match connections {
        [] => (
            SegmentShape::Direct,
            Vec::new(),
            Vec::new(),
            vec![ProfilePoint::new(x0, start_el), ProfilePoint::new(x1, end_el)],
        ),
        [(element_index, conn)] => {
            let (slot, points) = route_simple(*element_index, conn, x0, x1, start_el, end_el);
            (SegmentShape::Simple, vec![slot], Vec::new(), points)
        }
        _ => {
            let (slots, boundaries, points) = route_series(connections, x0, x1, start_el, end_el);
            (SegmentShape::Series, slots, boundaries, points)
        }
    };

    trace!(
        start = %start.component.id,
        end = %end.component.id,
        ?shape,
        points = points.len(),
        "routed segment"
    );

    Segment {
        start_id: start.component.id.clone(),
        start_index,
        end_id: end.component.id.clone(),
        end_index,
        shape,
        connections: slots,
        boundaries,
        length: connections.iter().map(|(_, c)| c.axis_length()).sum(),
        points,
    }
}

fn route_simple(
    element_index: usize,
    conn: &Connection,
    x0: Real,
    x1: Real,
    start_el: Real,
    end_el: Real,
) -> (SegmentConnection, Vec<ProfilePoint>) {
    let mid = (x0 + x1) / 2.0;
    let mut path = PathBuilder::start(x0, start_el);
    path.run_to(mid);
    path.step_to(conn.start_el());
    path.step_to(conn.end_el());
    path.step_to(end_el);
    path.run_to(x1);

    let slot = SegmentConnection {
        element_index,
        id: conn.id.clone(),
        x_start: x0,
        x_end: x1,
        rising: conn.is_rising(),
    };
    (slot, path.finish())
}

fn route_series(
    connections: &[(usize, &Connection)],
    x0: Real,
    x1: Real,
    start_el: Real,
    end_el: Real,
) -> (Vec<SegmentConnection>, Vec<BoundaryMarker>, Vec<ProfilePoint>) {
    let weights = series_weights(connections);
    let total: Real = weights.iter().sum();
    let span = x1 - x0;
    let last = connections.len() - 1;

    let mut path = PathBuilder::start(x0, start_el);
    let mut slots = Vec::with_capacity(connections.len());
    let mut boundaries = Vec::with_capacity(last);
    let mut consumed = 0.0;

    for (i, ((element_index, conn), weight)) in connections.iter().zip(&weights).enumerate() {
        let xs = (x0 + span * (consumed / total)).min(x1);
        consumed += weight;
        let xe = if i == last {
            x1
        } else {
            (x0 + span * (consumed / total)).min(x1)
        };

        let rising = conn.is_rising();
        path.step_to(conn.start_el());
        if rising {
            path.step_to(conn.end_el());
            path.run_to(xe);
        } else {
            path.run_to(xe);
            path.step_to(conn.end_el());
        }

        if i < last {
            boundaries.push(BoundaryMarker {
                x: xe,
                elevation: conn.end_el(),
                element_index: *element_index,
            });
        }
        slots.push(SegmentConnection {
            element_index: *element_index,
            id: conn.id.clone(),
            x_start: xs,
            x_end: xe,
            rising,
        });
    }

    path.step_to(end_el);
    path.run_to(x1);
    (slots, boundaries, path.finish())
}

/// Horizontal shares for a series segment.
///
/// Lengths are used only when every piece has one and they sum to more than
/// zero; otherwise every piece gets an equal share.
fn series_weights(connections: &[(usize, &Connection)]) -> Vec<Real> {
    let lengths: Option<Vec<Real>> = connections.iter().map(|(_, c)| c.length).collect();
    match lengths {
        Some(lengths) if lengths.iter().sum::<Real>() > 0.0 => lengths,
        _ => vec![1.0; connections.len()],
    }
}

/// Orthogonal path accumulator that only emits real moves.
struct PathBuilder {
    points: Vec<ProfilePoint>,
}

impl PathBuilder {
    fn start(x: Real, elevation: Real) -> Self {
        Self {
            points: vec![ProfilePoint::new(x, elevation)],
        }
    }

    fn current(&self) -> ProfilePoint {
        // start() seeds one point and nothing removes points
        self.points[self.points.len() - 1]
    }

    /// Vertical move at the current x.
    fn step_to(&mut self, elevation: Real) {
        let cur = self.current();
        if cur.elevation != elevation {
            self.points.push(ProfilePoint::new(cur.x, elevation));
        }
    }

    /// Horizontal move at the current elevation.
    fn run_to(&mut self, x: Real) {
        let cur = self.current();
        if cur.x != x {
            self.points.push(ProfilePoint::new(x, cur.elevation));
        }
    }

    fn finish(self) -> Vec<ProfilePoint> {
        let mut points = normalize_orthogonal(&self.points);
        if points.len() == 1 {
            points.push(points[0]);
        }
        points
    }
}

/// Drop duplicate points and interior points that sit on a straight
/// horizontal or vertical run between their neighbours.
///
/// A vertical spike that reverses direction is kept: its tip is not
/// between its neighbours.
pub fn normalize_orthogonal(points: &[ProfilePoint]) -> Vec<ProfilePoint> {
    let mut out: Vec<ProfilePoint> = Vec::with_capacity(points.len());
    for point in points {
        if out.last() == Some(point) {
            continue;
        }
        out.push(*point);
    }

    let mut i = 1usize;
    while i + 1 < out.len() {
        let (prev, curr, next) = (out[i - 1], out[i], out[i + 1]);
        let vertical = prev.x == curr.x
            && curr.x == next.x
            && between(prev.elevation, curr.elevation, next.elevation);
        let horizontal = prev.elevation == curr.elevation
            && curr.elevation == next.elevation
            && between(prev.x, curr.x, next.x);
        if vertical || horizontal {
            out.remove(i);
            // the previous point may now be redundant
            i = i.saturating_sub(1).max(1);
        } else {
            i += 1;
        }
    }

    out
}

fn between(a: Real, v: Real, b: Real) -> bool {
    v >= a.min(b) && v <= a.max(b)
}
