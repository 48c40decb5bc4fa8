//! Clip a polyline against a horizontal elevation window.

use hp_core::{Real, lerp};

use crate::route::ProfilePoint;

/// Split `points` into the runs that lie inside `[lo, hi]`.
///
/// Crossings are interpolated along the crossing edge and carry the bound
/// itself as their elevation, so runs meet the window edge exactly. Runs
/// shorter than two points are dropped. An infinite window returns the input
/// unchanged as a single run.
pub fn clip_polyline(points: &[ProfilePoint], lo: Real, hi: Real) -> Vec<Vec<ProfilePoint>> {
    let inside = |p: &ProfilePoint| p.elevation >= lo && p.elevation <= hi;
    let side_bound = |p: &ProfilePoint| if p.elevation > hi { hi } else { lo };

    let mut runs = Vec::new();
    let mut run: Vec<ProfilePoint> = Vec::new();

    for (i, p) in points.iter().enumerate() {
        let p_in = inside(p);
        if i > 0 {
            let a = &points[i - 1];
            match (inside(a), p_in) {
                (true, true) => {}
                (true, false) => {
                    let exit = crossing(a, p, side_bound(p));
                    if run.last() != Some(&exit) {
                        run.push(exit);
                    }
                    flush(&mut runs, &mut run);
                }
                (false, true) => {
                    let entry = crossing(a, p, side_bound(a));
                    if entry != *p {
                        run.push(entry);
                    }
                }
                (false, false) => {
                    let (from, to) = (side_bound(a), side_bound(p));
                    if from != to {
                        // edge passes straight through the window
                        runs.push(vec![crossing(a, p, from), crossing(a, p, to)]);
                    }
                }
            }
        }
        if p_in {
            run.push(*p);
        }
    }
    flush(&mut runs, &mut run);
    runs
}

fn flush(runs: &mut Vec<Vec<ProfilePoint>>, run: &mut Vec<ProfilePoint>) {
    if run.len() >= 2 {
        runs.push(std::mem::take(run));
    } else {
        run.clear();
    }
}

/// Point on edge `a→b` at elevation `bound`. Callers guarantee the edge
/// spans the bound, so `a` and `b` differ in elevation.
fn crossing(a: &ProfilePoint, b: &ProfilePoint, bound: Real) -> ProfilePoint {
    let t = (bound - a.elevation) / (b.elevation - a.elevation);
    ProfilePoint::new(lerp(a.x, b.x, t), bound)
}
