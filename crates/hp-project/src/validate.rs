//! Document validation logic.

use crate::schema::{ElementDef, ProfileDocument};
use std::collections::HashSet;

pub const LATEST_VERSION: u32 = 1;

#[derive(thiserror::Error, Debug, Clone, PartialEq)]
pub enum ValidationError {
    #[error("Element '{id}' is missing required field {field}")]
    MissingField { id: String, field: &'static str },

    #[error("Duplicate ID: {id} in {context}")]
    DuplicateId { id: String, context: String },

    #[error("Element #{index} has an empty id")]
    EmptyId { index: usize },

    #[error("Invalid value: {field} = {value} ({reason})")]
    InvalidValue {
        field: String,
        value: String,
        reason: String,
    },

    #[error("Unsupported version: {version}")]
    UnsupportedVersion { version: u32 },
}

pub fn validate_document(doc: &ProfileDocument) -> Result<(), ValidationError> {
    if doc.version == 0 || doc.version > LATEST_VERSION {
        return Err(ValidationError::UnsupportedVersion {
            version: doc.version,
        });
    }

    let mut ids = HashSet::new();
    for (index, element) in doc.elements.iter().enumerate() {
        let id = element.id();
        if id.trim().is_empty() {
            return Err(ValidationError::EmptyId { index });
        }
        if !ids.insert(id) {
            return Err(ValidationError::DuplicateId {
                id: id.to_string(),
                context: "elements".to_string(),
            });
        }
        validate_element(element)?;
    }
    Ok(())
}

fn validate_element(element: &ElementDef) -> Result<(), ValidationError> {
    match element {
        ElementDef::Component(c) => {
            if c.p1_el.is_none() {
                return Err(ValidationError::MissingField {
                    id: c.id.clone(),
                    field: "p1_el",
                });
            }
        }
        ElementDef::Connection(c) => {
            if c.p1_el.is_none() {
                return Err(ValidationError::MissingField {
                    id: c.id.clone(),
                    field: "p1_el",
                });
            }
            if let Some(length) = c.length
                && !(length >= 0.0)
            {
                return Err(ValidationError::InvalidValue {
                    field: format!("{}.length", c.id),
                    value: length.to_string(),
                    reason: "must be non-negative".to_string(),
                });
            }
        }
    }
    Ok(())
}
