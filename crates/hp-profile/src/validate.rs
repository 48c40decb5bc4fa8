//! Input validation: required numeric data must be finite, lengths non-negative,
//! and running totals along the chain must stay finite.

use hp_core::{Real, ensure_finite};

use crate::config::ProfileConfig;
use crate::element::Element;
use crate::error::{ProfileError, ProfileResult};
use crate::flowing_hgl::start_head;

fn check_value(id: &str, field: &'static str, value: Real) -> ProfileResult<Real> {
    ensure_finite(value, field).map_err(|e| ProfileError::at(id, e))
}

fn check_optional(id: &str, field: &'static str, value: Option<Real>) -> ProfileResult<()> {
    match value {
        Some(v) => check_value(id, field, v).map(|_| ()),
        None => Ok(()),
    }
}

/// Validate every element of the chain, failing on the first malformed one.
///
/// Cumulative length and the walked head are summed here too, so an overflow
/// to infinity is reported against the element where it happens.
pub(crate) fn validate_elements(elements: &[Element]) -> ProfileResult<()> {
    for element in elements {
        match element {
            Element::Component(c) => {
                check_value(&c.id, "p1_el", c.p1_el)?;
                check_optional(&c.id, "p2_el", c.p2_el)?;
                check_optional(&c.id, "min_el", c.min_el)?;
                check_optional(&c.id, "max_el", c.max_el)?;
                check_optional(&c.id, "head_change", c.head_change)?;
            }
            Element::Connection(c) => {
                check_optional(&c.id, "length", c.length)?;
                if let Some(length) = c.length
                    && length < 0.0
                {
                    return Err(ProfileError::NegativeLength {
                        id: c.id.clone(),
                        length,
                    });
                }
                check_value(&c.id, "p1_el", c.p1_el)?;
                check_optional(&c.id, "p2_el", c.p2_el)?;
                check_optional(&c.id, "min_el", c.min_el)?;
                check_optional(&c.id, "max_el", c.max_el)?;
                check_optional(&c.id, "head_change", c.head_change)?;
            }
        }
    }
    validate_totals(elements)
}

fn validate_totals(elements: &[Element]) -> ProfileResult<()> {
    let mut length: Real = 0.0;
    let mut head = start_head(elements).unwrap_or(0.0);
    for element in elements {
        if let Element::Connection(c) = element {
            length = check_value(&c.id, "length", length + c.axis_length())?;
        }
        if let Some(dh) = element.head_change() {
            head = check_value(element.id(), "head_change", head + dh)?;
        }
    }
    Ok(())
}

fn check_dimension(what: &'static str, value: Real) -> ProfileResult<()> {
    if value.is_finite() && value >= 0.0 {
        Ok(())
    } else {
        Err(ProfileError::InvalidViewport { what, value })
    }
}

/// Validate viewport, margins and scale settings.
pub(crate) fn validate_config(config: &ProfileConfig) -> ProfileResult<()> {
    check_dimension("width", config.viewport.width)?;
    check_dimension("height", config.viewport.height)?;
    check_dimension("margin.top", config.margin.top)?;
    check_dimension("margin.right", config.margin.right)?;
    check_dimension("margin.bottom", config.margin.bottom)?;
    check_dimension("margin.left", config.margin.left)?;
    check_dimension("elevation_padding", config.elevation_padding)?;
    if !(config.tick_step.is_finite() && config.tick_step > 0.0) {
        return Err(ProfileError::InvalidViewport {
            what: "tick_step",
            value: config.tick_step,
        });
    }
    Ok(())
}
