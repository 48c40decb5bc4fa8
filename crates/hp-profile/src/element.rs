//! Profile element records: components and the connections between them.

use hp_core::Real;
use serde::{Deserialize, Serialize};

/// Classification tag for a component, resolved once upstream.
///
/// The engine never inspects names; source and flow-control roles are
/// decided by a [`Classifier`](crate::classify::Classifier) over this tag.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ComponentKind {
    Reservoir,
    Tank,
    Pump,
    /// Pressure reducing / sustaining valve.
    Regulator,
    Valve,
    Junction,
    #[default]
    Other,
}

/// A hydraulic component (reservoir, tank, pump, valve, ...).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Component {
    pub id: String,
    pub name: String,
    pub kind: ComponentKind,
    /// Inlet port elevation.
    pub p1_el: Real,
    /// Outlet port elevation when it differs from the inlet.
    pub p2_el: Option<Real>,
    /// Bottom of the operating band (e.g. tank minimum level).
    pub min_el: Option<Real>,
    /// Top of the operating band (e.g. reservoir / tank overflow level).
    pub max_el: Option<Real>,
    /// Solved head added (pump) or lost when flow passes through.
    pub head_change: Option<Real>,
}

impl Component {
    pub fn new(id: impl Into<String>, name: impl Into<String>, kind: ComponentKind, p1_el: Real) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            kind,
            p1_el,
            p2_el: None,
            min_el: None,
            max_el: None,
            head_change: None,
        }
    }

    /// Elevation flow leaves the component at.
    pub fn outlet_el(&self) -> Real {
        self.p2_el.unwrap_or(self.p1_el)
    }

    /// Elevation flow enters the component at.
    pub fn inlet_el(&self) -> Real {
        self.p1_el
    }
}

/// A pipe piece between components.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Connection {
    pub id: String,
    pub name: String,
    /// Pipe length; missing lengths count as zero along the distance axis.
    pub length: Option<Real>,
    /// Upstream end elevation.
    pub p1_el: Real,
    /// Downstream end elevation; defaults to `p1_el`.
    pub p2_el: Option<Real>,
    /// Low point along the run.
    pub min_el: Option<Real>,
    /// Crest along the run.
    pub max_el: Option<Real>,
    pub head_change: Option<Real>,
}

impl Connection {
    pub fn new(id: impl Into<String>, name: impl Into<String>, length: Option<Real>, p1_el: Real) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            length,
            p1_el,
            p2_el: None,
            min_el: None,
            max_el: None,
            head_change: None,
        }
    }

    pub fn start_el(&self) -> Real {
        self.p1_el
    }

    pub fn end_el(&self) -> Real {
        self.p2_el.unwrap_or(self.p1_el)
    }

    /// Length along the distance axis (missing = 0).
    pub fn axis_length(&self) -> Real {
        self.length.unwrap_or(0.0)
    }

    /// A connection rises when its far end is higher, or when a crest
    /// tops both ends.
    pub fn is_rising(&self) -> bool {
        let (a, b) = (self.start_el(), self.end_el());
        b > a || self.max_el.is_some_and(|crest| crest > a && crest > b)
    }
}

/// One entry of the ordered upstream→downstream chain.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum Element {
    Component(Component),
    Connection(Connection),
}

impl Element {
    pub fn id(&self) -> &str {
        match self {
            Element::Component(c) => &c.id,
            Element::Connection(c) => &c.id,
        }
    }

    pub fn name(&self) -> &str {
        match self {
            Element::Component(c) => &c.name,
            Element::Connection(c) => &c.name,
        }
    }

    pub fn p1_el(&self) -> Real {
        match self {
            Element::Component(c) => c.p1_el,
            Element::Connection(c) => c.p1_el,
        }
    }

    pub fn head_change(&self) -> Option<Real> {
        match self {
            Element::Component(c) => c.head_change,
            Element::Connection(c) => c.head_change,
        }
    }

    /// Every elevation this element defines, in `min, max, p1, p2` order.
    pub fn elevations(&self) -> impl Iterator<Item = Real> {
        let (min_el, max_el, p1_el, p2_el) = match self {
            Element::Component(c) => (c.min_el, c.max_el, c.p1_el, c.p2_el),
            Element::Connection(c) => (c.min_el, c.max_el, c.p1_el, c.p2_el),
        };
        [min_el, max_el, Some(p1_el), p2_el].into_iter().flatten()
    }

    pub fn as_component(&self) -> Option<&Component> {
        match self {
            Element::Component(c) => Some(c),
            Element::Connection(_) => None,
        }
    }

    pub fn as_connection(&self) -> Option<&Connection> {
        match self {
            Element::Connection(c) => Some(c),
            Element::Component(_) => None,
        }
    }
}

impl From<Component> for Element {
    fn from(c: Component) -> Self {
        Element::Component(c)
    }
}

impl From<Connection> for Element {
    fn from(c: Connection) -> Self {
        Element::Connection(c)
    }
}
