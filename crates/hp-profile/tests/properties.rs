//! Property tests over randomly generated chains.

use hp_profile::{
    Component, ComponentKind, Connection, Element, ProfileConfig, ProfileError, ProfilePoint,
    clip_polyline, compute,
};
use proptest::prelude::*;

#[derive(Debug, Clone)]
enum Spec {
    Comp {
        kind: ComponentKind,
        el: f64,
        max_el: Option<f64>,
        head_change: Option<f64>,
    },
    Pipe {
        length: Option<f64>,
        p1: f64,
        p2: Option<f64>,
        head_change: Option<f64>,
    },
}

fn kind() -> impl Strategy<Value = ComponentKind> {
    prop_oneof![
        Just(ComponentKind::Reservoir),
        Just(ComponentKind::Tank),
        Just(ComponentKind::Pump),
        Just(ComponentKind::Valve),
        Just(ComponentKind::Junction),
    ]
}

fn spec_in(
    el: impl Strategy<Value = f64> + Clone,
    above: impl Strategy<Value = f64> + Clone,
    length: impl Strategy<Value = f64> + Clone,
    head: impl Strategy<Value = f64> + Clone,
) -> impl Strategy<Value = Spec> {
    prop_oneof![
        (
            kind(),
            el.clone(),
            proptest::option::of(above),
            proptest::option::of(head.clone())
        )
            .prop_map(|(kind, el, above, head_change)| Spec::Comp {
                kind,
                el,
                max_el: above.map(|a| el + a),
                head_change,
            }),
        (
            proptest::option::of(length),
            el.clone(),
            proptest::option::of(el),
            proptest::option::of(head)
        )
            .prop_map(|(length, p1, p2, head_change)| Spec::Pipe {
                length,
                p1,
                p2,
                head_change,
            }),
    ]
}

fn spec() -> impl Strategy<Value = Spec> {
    spec_in(-100.0_f64..300.0, 0.0_f64..50.0, 0.0_f64..1000.0, -30.0_f64..80.0)
}

/// Elevations, heads and lengths near the edges of what validation accepts.
fn extreme_spec() -> impl Strategy<Value = Spec> {
    spec_in(
        prop_oneof![-100.0_f64..300.0, -1e30_f64..1e30],
        prop_oneof![0.0_f64..50.0, 0.0_f64..1e30],
        prop_oneof![0.0_f64..1000.0, 1e300_f64..1.7e308],
        prop_oneof![-30.0_f64..80.0, -1e30_f64..1e30],
    )
}

fn build(specs: Vec<Spec>) -> Vec<Element> {
    specs
        .into_iter()
        .enumerate()
        .map(|(i, s)| match s {
            Spec::Comp {
                kind,
                el,
                max_el,
                head_change,
            } => {
                let mut c = Component::new(format!("c{i}"), format!("C{i}"), kind, el);
                c.max_el = max_el;
                c.head_change = head_change;
                c.into()
            }
            Spec::Pipe {
                length,
                p1,
                p2,
                head_change,
            } => {
                let mut c = Connection::new(format!("p{i}"), format!("P{i}"), length, p1);
                c.p2_el = p2;
                c.head_change = head_change;
                c.into()
            }
        })
        .collect()
}

fn chain() -> impl Strategy<Value = Vec<Element>> {
    prop::collection::vec(spec(), 0..24).prop_map(build)
}

fn extreme_chain() -> impl Strategy<Value = Vec<Element>> {
    prop::collection::vec(extreme_spec(), 0..24).prop_map(build)
}

fn config() -> impl Strategy<Value = ProfileConfig> {
    (0.0_f64..2000.0, 0.0_f64..1000.0)
        .prop_map(|(w, h)| ProfileConfig::default().with_width(w).with_height(h))
}

proptest! {
    #[test]
    fn x_scale_is_non_decreasing(elements in chain(), cfg in config()) {
        let model = compute(&elements, &cfg).unwrap();
        for w in model.components.windows(2) {
            prop_assert!(w[0].x <= w[1].x);
        }
        for i in 1..model.components.len() {
            prop_assert!(model.scale.x(i - 1) <= model.scale.x(i));
        }
    }

    #[test]
    fn cumulative_length_is_non_decreasing(elements in chain()) {
        let model = compute(&elements, &ProfileConfig::default()).unwrap();
        for w in model.components.windows(2) {
            prop_assert!(w[0].position.cumulative_length <= w[1].position.cumulative_length);
        }
    }

    #[test]
    fn y_scale_is_decreasing(elements in chain(), a in -500.0_f64..500.0, b in -500.0_f64..500.0) {
        let model = compute(&elements, &ProfileConfig::default()).unwrap();
        let (lo, hi) = if a < b { (a, b) } else { (b, a) };
        prop_assert!(model.scale.y(lo) >= model.scale.y(hi));
        if hi - lo > 1e-6 {
            prop_assert!(model.scale.y(lo) > model.scale.y(hi));
        }
    }

    #[test]
    fn compute_is_idempotent(elements in chain(), cfg in config()) {
        let a = compute(&elements, &cfg).unwrap();
        let b = compute(&elements, &cfg).unwrap();
        prop_assert_eq!(a, b);
    }

    #[test]
    fn flowing_hgl_shape(elements in chain()) {
        let model = compute(&elements, &ProfileConfig::default()).unwrap();
        if let Some(hgl) = model.flowing_hgl {
            prop_assert_eq!(hgl.points.len(), elements.len() * 2);
            for (i, pair) in hgl.points.chunks(2).enumerate() {
                prop_assert_eq!(pair[0].element_index, i);
                prop_assert_eq!(pair[1].element_index, i);
            }
            for w in hgl.points.windows(2) {
                prop_assert!(w[0].x <= w[1].x);
            }
            for run in &hgl.runs {
                prop_assert!(run.len() >= 2);
                for p in run {
                    prop_assert!(p.elevation >= model.scale.min_el && p.elevation <= model.scale.max_el);
                }
            }
            prop_assert!(hgl.points.iter().all(|p| p.head <= hgl.peak.head));
        }
    }

    #[test]
    fn infinite_window_clip_round_trips(elements in chain()) {
        let model = compute(&elements, &ProfileConfig::default()).unwrap();
        if let Some(hgl) = model.flowing_hgl {
            let points: Vec<ProfilePoint> = hgl.points.iter().map(|p| p.to_profile_point()).collect();
            let runs = clip_polyline(&points, f64::NEG_INFINITY, f64::INFINITY);
            prop_assert_eq!(runs, vec![points]);
        }
    }

    #[test]
    fn routes_move_left_to_right(elements in chain(), cfg in config()) {
        let model = compute(&elements, &cfg).unwrap();
        for seg in &model.segments {
            prop_assert!(seg.points.len() >= 2);
            for w in seg.points.windows(2) {
                prop_assert!(w[0].x <= w[1].x);
            }
        }
    }

    #[test]
    fn polyline_above_window_has_no_runs(
        heads in prop::collection::vec(101.0_f64..1e6, 2..30)
    ) {
        let points: Vec<ProfilePoint> = heads
            .iter()
            .enumerate()
            .map(|(i, h)| ProfilePoint::new(i as f64, *h))
            .collect();
        prop_assert!(clip_polyline(&points, 0.0, 100.0).is_empty());
    }

    #[test]
    fn extreme_inputs_stay_finite_or_name_the_overflow(elements in extreme_chain()) {
        match compute(&elements, &ProfileConfig::default()) {
            Ok(model) => {
                prop_assert!(model.components.iter().all(|c| c.x.is_finite()));
                prop_assert!(model.scale.y_ticks.len() <= 1001);
                prop_assert!(model.scale.y_ticks.iter().all(|t| t.value.is_finite()));
                for seg in &model.segments {
                    for p in &seg.points {
                        prop_assert!(p.x.is_finite());
                        prop_assert!(model.scale.y(p.elevation).is_finite());
                    }
                }
                if let Some(hgl) = &model.flowing_hgl {
                    prop_assert!(hgl.points.iter().all(|p| p.x.is_finite() && p.head.is_finite()));
                }
            }
            Err(ProfileError::NonFinite { field, .. }) => {
                prop_assert!(field == "length" || field == "head_change");
            }
            Err(other) => prop_assert!(false, "unexpected error: {}", other),
        }
    }
}
