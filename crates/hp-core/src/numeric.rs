use crate::{HpError, HpResult};

/// Floating point type used throughout system
pub type Real = f64;

/// One tolerance for everything
#[derive(Clone, Copy, Debug)]
pub struct Tolerances {
    pub abs: Real,
    pub rel: Real,
}

impl Default for Tolerances {
    fn default() -> Self {
        Self {
            abs: 1e-12,
            rel: 1e-9,
        }
    }
}

pub fn nearly_equal(a: Real, b: Real, tol: Tolerances) -> bool {
    let diff = (a - b).abs();
    if diff <= tol.abs {
        return true;
    }
    diff <= tol.rel * a.abs().max(b.abs())
}

/// `Ok(v)` for finite values, otherwise a [`HpError::NonFinite`] tagged with `what`.
pub fn ensure_finite(v: Real, what: &'static str) -> HpResult<Real> {
    if v.is_finite() {
        Ok(v)
    } else {
        Err(HpError::NonFinite { what, value: v })
    }
}

/// Linear interpolation between `a` and `b`.
///
/// Returns `a` exactly when `a == b`, so vertical edges stay vertical.
#[inline]
pub fn lerp(a: Real, b: Real, t: Real) -> Real {
    if a == b { a } else { a + (b - a) * t }
}
