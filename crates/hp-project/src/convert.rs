//! Document → engine element conversion with unit handling.

use hp_core::{LengthUnit, convert};
use hp_profile::{Component, Connection, Element};

use crate::schema::{ElementDef, ProfileDocument};
use crate::validate::{ValidationError, validate_document};

/// Validate the document and convert its elements into display units.
pub fn to_elements(doc: &ProfileDocument) -> Result<Vec<Element>, ValidationError> {
    validate_document(doc)?;
    let (from, to) = (doc.units.input, doc.units.display);
    doc.elements
        .iter()
        .map(|def| convert_element(def, from, to))
        .collect()
}

fn convert_element(def: &ElementDef, from: LengthUnit, to: LengthUnit) -> Result<Element, ValidationError> {
    let c = |v: f64| convert(v, from, to);
    let opt = |v: Option<f64>| v.map(c);
    let required = |id: &str, v: Option<f64>| {
        v.map(c).ok_or_else(|| ValidationError::MissingField {
            id: id.to_string(),
            field: "p1_el",
        })
    };

    Ok(match def {
        ElementDef::Component(d) => Element::Component(Component {
            id: d.id.clone(),
            name: d.name.clone(),
            kind: d.kind,
            p1_el: required(&d.id, d.p1_el)?,
            p2_el: opt(d.p2_el),
            min_el: opt(d.min_el),
            max_el: opt(d.max_el),
            head_change: opt(d.head_change),
        }),
        ElementDef::Connection(d) => Element::Connection(Connection {
            id: d.id.clone(),
            name: d.name.clone(),
            length: opt(d.length),
            p1_el: required(&d.id, d.p1_el)?,
            p2_el: opt(d.p2_el),
            min_el: opt(d.min_el),
            max_el: opt(d.max_el),
            head_change: opt(d.head_change),
        }),
    })
}
