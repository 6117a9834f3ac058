//! # Unit Types
//!
//! Lightweight f64 newtypes for the SI units ladder calculations pass
//! around. They serialize as plain numbers.
//!
//! Ladder geometry is entered in millimetres. Forces are in newtons, so a
//! bending moment in N·mm divided by a section modulus in mm³ lands directly
//! in N/mm² = MPa.
//!
//! ## Example
//!
//! ```rust
//! use ladder_core::units::{Kilograms, Kilonewtons, Meters, Millimeters};
//!
//! let rail = Millimeters(7100.0);
//! let rail_m: Meters = rail.into();
//! assert_eq!(rail_m.0, 7.1);
//!
//! let weight: Kilonewtons = Kilograms(100.0).into();
//! assert!((weight.0 - 0.981).abs() < 1e-9);
//! ```

use serde::{Deserialize, Serialize};

/// Standard gravity expressed as kN per kg
pub const KN_PER_KG: f64 = 0.00981;

// ============================================================================
// Length Units
// ============================================================================

/// Length in millimetres
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Millimeters(pub f64);

/// Length in metres
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Meters(pub f64);

impl From<Millimeters> for Meters {
    fn from(mm: Millimeters) -> Self {
        Meters(mm.0 / 1000.0)
    }
}

// ============================================================================
// Mass and Force Units
// ============================================================================

/// Mass in kilograms
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Kilograms(pub f64);

/// Force in newtons
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Newtons(pub f64);

/// Force in kilonewtons
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Kilonewtons(pub f64);

/// Static weight of a mass under standard gravity
impl From<Kilograms> for Kilonewtons {
    fn from(kg: Kilograms) -> Self {
        Kilonewtons(kg.0 * KN_PER_KG)
    }
}

// ============================================================================
// Stress Units
// ============================================================================

/// Stress in megapascals (N/mm²)
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Mpa(pub f64);

// ============================================================================
// Rounding
// ============================================================================

/// Round half away from zero to a fixed number of decimals.
///
/// Reported values are rounded once, at the end of a calculation; never feed
/// a rounded value back into further arithmetic.
pub fn round_to(value: f64, decimals: i32) -> f64 {
    let factor = 10f64.powi(decimals);
    (value * factor).round() / factor
}

// ============================================================================
// Raw Access
// ============================================================================

macro_rules! impl_value {
    ($type:ty) => {
        impl $type {
            /// Get the raw f64 value
            pub fn value(self) -> f64 {
                self.0
            }
        }
    };
}

impl_value!(Meters);
impl_value!(Newtons);
impl_value!(Kilonewtons);
impl_value!(Mpa);
