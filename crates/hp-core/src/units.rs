// hp-core/src/units.rs

use uom::si::f64::Length as UomLength;
use uom::si::length::{foot, meter};

// Public canonical unit types (SI, f64)
pub type Length = UomLength;

#[inline]
pub fn m(v: f64) -> Length {
    Length::new::<meter>(v)
}

#[inline]
pub fn ft(v: f64) -> Length {
    Length::new::<foot>(v)
}

/// Unit that plain numbers in a profile (lengths, elevations, heads) are expressed in.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(rename_all = "lowercase")
)]
pub enum LengthUnit {
    #[default]
    Meters,
    Feet,
}

impl LengthUnit {
    /// Interpret a bare number as a length in this unit.
    #[inline]
    pub fn length(self, v: f64) -> Length {
        match self {
            LengthUnit::Meters => m(v),
            LengthUnit::Feet => ft(v),
        }
    }

    /// Express a length as a bare number in this unit.
    #[inline]
    pub fn value(self, len: Length) -> f64 {
        match self {
            LengthUnit::Meters => len.get::<meter>(),
            LengthUnit::Feet => len.get::<foot>(),
        }
    }

    /// Short axis label ("m", "ft").
    pub fn symbol(self) -> &'static str {
        match self {
            LengthUnit::Meters => "m",
            LengthUnit::Feet => "ft",
        }
    }
}

/// Convert a bare number between length units.
#[inline]
pub fn convert(v: f64, from: LengthUnit, to: LengthUnit) -> f64 {
    if from == to {
        v
    } else {
        to.value(from.length(v))
    }
}
