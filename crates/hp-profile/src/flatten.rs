//! Chain flattening: place each component on the cumulative pipe-length axis.

use hp_core::Real;
use serde::{Deserialize, Serialize};

use crate::element::{Component, Element};

/// A component and the pipe length upstream of it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ComponentPosition {
    /// Index of the component in the original element chain.
    pub element_index: usize,
    pub component: Component,
    /// Sum of the lengths of all preceding connections.
    pub cumulative_length: Real,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct Flattened {
    pub positions: Vec<ComponentPosition>,
    /// Sum of every connection length in the chain.
    pub total_length: Real,
}

/// Fold the chain into component positions.
///
/// Missing connection lengths count as zero, so `cumulative_length` is
/// non-decreasing along the chain.
pub fn flatten(elements: &[Element]) -> Flattened {
    elements
        .iter()
        .enumerate()
        .fold(Flattened::default(), |mut acc, (element_index, element)| {
            match element {
                Element::Component(c) => acc.positions.push(ComponentPosition {
                    element_index,
                    component: c.clone(),
                    cumulative_length: acc.total_length,
                }),
                Element::Connection(c) => acc.total_length += c.axis_length(),
            }
            acc
        })
}
