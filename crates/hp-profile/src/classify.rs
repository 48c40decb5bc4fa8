//! Source / flow-control classification used by the static HGL.

use crate::element::{Component, ComponentKind};

/// Decides which components set the no-flow grade line.
pub trait Classifier {
    /// Fixed-level supply such as a reservoir or tank.
    fn is_source(&self, component: &Component) -> bool;

    /// Element that breaks the no-flow grade line (pump, regulator).
    fn is_flow_control(&self, component: &Component) -> bool;
}

/// Default classifier over [`ComponentKind`].
#[derive(Debug, Clone, Copy, Default)]
pub struct KindClassifier;

impl Classifier for KindClassifier {
    fn is_source(&self, component: &Component) -> bool {
        matches!(component.kind, ComponentKind::Reservoir | ComponentKind::Tank)
    }

    fn is_flow_control(&self, component: &Component) -> bool {
        matches!(component.kind, ComponentKind::Pump | ComponentKind::Regulator)
    }
}

/// Classifier built from two predicates.
pub struct FnClassifier<S, F> {
    source: S,
    flow_control: F,
}

impl<S, F> FnClassifier<S, F>
where
    S: Fn(&Component) -> bool,
    F: Fn(&Component) -> bool,
{
    pub fn new(source: S, flow_control: F) -> Self {
        Self {
            source,
            flow_control,
        }
    }
}

impl<S, F> Classifier for FnClassifier<S, F>
where
    S: Fn(&Component) -> bool,
    F: Fn(&Component) -> bool,
{
    fn is_source(&self, component: &Component) -> bool {
        (self.source)(component)
    }

    fn is_flow_control(&self, component: &Component) -> bool {
        (self.flow_control)(component)
    }
}

impl<C: Classifier + ?Sized> Classifier for &C {
    fn is_source(&self, component: &Component) -> bool {
        (**self).is_source(component)
    }

    fn is_flow_control(&self, component: &Component) -> bool {
        (**self).is_flow_control(component)
    }
}
