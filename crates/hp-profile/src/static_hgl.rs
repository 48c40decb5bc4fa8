//! No-flow grade line set by source levels and broken at the first flow-control element.

use hp_core::Real;
use serde::{Deserialize, Serialize};

use crate::classify::Classifier;
use crate::flatten::Flattened;
use crate::route::ProfilePoint;
use crate::scale::Scale;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StaticHgl {
    /// Level of the first elevated source.
    pub upstream_head: Real,
    /// Level of the last elevated source (same as upstream when only one).
    pub downstream_head: Real,
    /// X of the flow-control element where the line steps.
    pub pump_x: Real,
    /// Left edge of the plot area.
    pub x_start: Real,
    /// Right edge of the plot area.
    pub x_end: Real,
    pub upstream_source_id: String,
    pub downstream_source_id: String,
    pub flow_control_id: String,
}

impl StaticHgl {
    /// The stepped band: flat, vertical jump at `pump_x`, flat.
    pub fn points(&self) -> [ProfilePoint; 4] {
        [
            ProfilePoint::new(self.x_start, self.upstream_head),
            ProfilePoint::new(self.pump_x, self.upstream_head),
            ProfilePoint::new(self.pump_x, self.downstream_head),
            ProfilePoint::new(self.x_end, self.downstream_head),
        ]
    }

    /// Head difference across the flow-control element.
    pub fn step(&self) -> Real {
        self.downstream_head - self.upstream_head
    }
}

/// Compute the no-flow band, or `None` if the chain has no elevated source
/// or no flow-control element.
pub fn static_hgl(flat: &Flattened, scale: &Scale, classifier: &impl Classifier) -> Option<StaticHgl> {
    let mut sources = flat.positions.iter().filter_map(|p| {
        let level = p.component.max_el?;
        classifier
            .is_source(&p.component)
            .then_some((level, p.component.id.as_str()))
    });
    let (upstream_head, upstream_id) = sources.next()?;
    let (downstream_head, downstream_id) = sources.last().unwrap_or((upstream_head, upstream_id));

    let (flow_index, flow_control) = flat
        .positions
        .iter()
        .enumerate()
        .find(|(_, p)| classifier.is_flow_control(&p.component))?;

    let (x_start, x_end) = scale.x_range();
    Some(StaticHgl {
        upstream_head,
        downstream_head,
        pump_x: scale.x(flow_index),
        x_start,
        x_end,
        upstream_source_id: upstream_id.to_string(),
        downstream_source_id: downstream_id.to_string(),
        flow_control_id: flow_control.component.id.clone(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::classify::{FnClassifier, KindClassifier};
    use crate::config::ProfileConfig;
    use crate::element::{Component, ComponentKind, Connection, Element};
    use crate::flatten::flatten;

    fn source(id: &str, kind: ComponentKind, el: Real, max_el: Option<Real>) -> Element {
        let mut c = Component::new(id, id, kind, el);
        c.max_el = max_el;
        c.into()
    }

    fn pipe(id: &str) -> Element {
        Connection::new(id, id, Some(100.0), 0.0).into()
    }

    fn compute(elements: &[Element]) -> Option<StaticHgl> {
        let cfg = ProfileConfig::default();
        let flat = flatten(elements);
        let scale = Scale::build(&flat, elements, &cfg);
        static_hgl(&flat, &scale, &KindClassifier)
    }

    #[test]
    fn two_sources_and_pump() {
        let hgl = compute(&[
            source("r", ComponentKind::Reservoir, 100.0, Some(110.0)),
            pipe("p1"),
            source("pump", ComponentKind::Pump, 100.0, None),
            pipe("p2"),
            source("t", ComponentKind::Tank, 150.0, Some(160.0)),
        ])
        .unwrap();
        assert_eq!(hgl.upstream_head, 110.0);
        assert_eq!(hgl.downstream_head, 160.0);
        assert_eq!(hgl.pump_x, 415.0);
        assert_eq!(hgl.step(), 50.0);
        assert_eq!(hgl.flow_control_id, "pump");
        assert_eq!(hgl.points()[0], ProfilePoint::new(60.0, 110.0));
        assert_eq!(hgl.points()[3], ProfilePoint::new(770.0, 160.0));
    }

    #[test]
    fn single_source_is_flat() {
        let hgl = compute(&[
            source("r", ComponentKind::Reservoir, 100.0, Some(110.0)),
            pipe("p1"),
            source("pump", ComponentKind::Pump, 100.0, None),
        ])
        .unwrap();
        assert_eq!(hgl.upstream_head, hgl.downstream_head);
        assert_eq!(hgl.downstream_source_id, "r");
    }

    #[test]
    fn downstream_head_comes_from_last_source() {
        let hgl = compute(&[
            source("r", ComponentKind::Reservoir, 100.0, Some(110.0)),
            pipe("p1"),
            source("pump", ComponentKind::Pump, 100.0, None),
            pipe("p2"),
            source("mid", ComponentKind::Tank, 120.0, Some(130.0)),
            pipe("p3"),
            source("top", ComponentKind::Tank, 170.0, Some(180.0)),
        ])
        .unwrap();
        assert_eq!(hgl.upstream_source_id, "r");
        assert_eq!(hgl.downstream_source_id, "top");
        assert_eq!(hgl.downstream_head, 180.0);
        assert_eq!(hgl.step(), 70.0);
    }

    #[test]
    fn no_flow_control_is_none() {
        assert!(
            compute(&[
                source("r", ComponentKind::Reservoir, 100.0, Some(110.0)),
                pipe("p1"),
                source("t", ComponentKind::Tank, 150.0, Some(160.0)),
            ])
            .is_none()
        );
    }

    #[test]
    fn source_without_level_does_not_qualify() {
        assert!(
            compute(&[
                source("r", ComponentKind::Reservoir, 100.0, None),
                pipe("p1"),
                source("pump", ComponentKind::Pump, 100.0, None),
            ])
            .is_none()
        );
    }

    #[test]
    fn elevated_non_source_does_not_qualify() {
        assert!(
            compute(&[
                source("v", ComponentKind::Valve, 100.0, Some(140.0)),
                source("pump", ComponentKind::Pump, 100.0, None),
            ])
            .is_none()
        );
    }

    #[test]
    fn injected_classifier_overrides_kind() {
        let elements = vec![
            source("a", ComponentKind::Other, 10.0, Some(20.0)),
            source("b", ComponentKind::Other, 10.0, None),
        ];
        let cfg = ProfileConfig::default();
        let flat = flatten(&elements);
        let scale = Scale::build(&flat, &elements, &cfg);
        let classifier = FnClassifier::new(|c: &Component| c.id == "a", |c: &Component| c.id == "b");
        let hgl = static_hgl(&flat, &scale, &classifier).unwrap();
        assert_eq!(hgl.upstream_head, 20.0);
        assert_eq!(hgl.pump_x, scale.x(1));
    }
}
