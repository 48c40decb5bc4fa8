//! Incremental chain builder.

use hp_core::Real;

use crate::element::{Component, ComponentKind, Connection, Element};
use crate::error::ProfileResult;
use crate::validate;

/// Builder for an ordered upstream→downstream element chain.
///
/// Use `component` and `connection` to append elements (each returns the
/// element index), the `set_*` methods to fill optional fields, then call
/// `build()` to validate and freeze the chain.
#[derive(Debug, Default)]
pub struct ProfileBuilder {
    elements: Vec<Element>,
}

impl ProfileBuilder {
    /// Create a new empty builder.
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a component and return its element index.
    pub fn component(
        &mut self,
        id: impl Into<String>,
        name: impl Into<String>,
        kind: ComponentKind,
        p1_el: Real,
    ) -> usize {
        self.push(Component::new(id, name, kind, p1_el).into())
    }

    /// Append a connection and return its element index.
    pub fn connection(
        &mut self,
        id: impl Into<String>,
        name: impl Into<String>,
        length: Option<Real>,
        p1_el: Real,
        p2_el: Real,
    ) -> usize {
        let mut conn = Connection::new(id, name, length, p1_el);
        conn.p2_el = Some(p2_el);
        self.push(conn.into())
    }

    /// Append any element and return its index.
    pub fn push(&mut self, element: Element) -> usize {
        self.elements.push(element);
        self.elements.len() - 1
    }

    /// Set the operating band of an element (ignored for out-of-range indices).
    pub fn set_band(&mut self, index: usize, min_el: Option<Real>, max_el: Option<Real>) -> &mut Self {
        match self.elements.get_mut(index) {
            Some(Element::Component(c)) => {
                c.min_el = min_el;
                c.max_el = max_el;
            }
            Some(Element::Connection(c)) => {
                c.min_el = min_el;
                c.max_el = max_el;
            }
            None => {}
        }
        self
    }

    /// Set the solved head change of an element.
    pub fn set_head_change(&mut self, index: usize, head_change: Real) -> &mut Self {
        match self.elements.get_mut(index) {
            Some(Element::Component(c)) => c.head_change = Some(head_change),
            Some(Element::Connection(c)) => c.head_change = Some(head_change),
            None => {}
        }
        self
    }

    /// Set a component's distinct outlet elevation.
    pub fn set_outlet_el(&mut self, index: usize, p2_el: Real) -> &mut Self {
        if let Some(Element::Component(c)) = self.elements.get_mut(index) {
            c.p2_el = Some(p2_el);
        }
        self
    }

    /// Number of elements added so far.
    pub fn len(&self) -> usize {
        self.elements.len()
    }

    pub fn is_empty(&self) -> bool {
        self.elements.is_empty()
    }

    /// Validate and return the chain.
    pub fn build(self) -> ProfileResult<Vec<Element>> {
        validate::validate_elements(&self.elements)?;
        Ok(self.elements)
    }
}
