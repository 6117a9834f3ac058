//! # Rung Bending Check
//!
//! Simplified verification of a single rung: a simply-supported solid round
//! bar spanning the clear width, with the normative concentrated load at
//! mid-span.
//!
//! ```text
//! M = P·L/4        I = π·d⁴/64        σ = M·(d/2)/I        SF = Fy/σ
//! ```
//!
//! With P in N and lengths in mm, σ is in MPa directly.

use serde::{Deserialize, Serialize};

use crate::equations::{bending_stress, circular_moment_of_inertia, midspan_point_load_moment};
use crate::errors::{CalcError, CalcResult};
use crate::units::{round_to, Mpa, Newtons};

/// Result of the rung bending check
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct StructuralIntegrity {
    /// Maximum bending stress at rung mid-span (MPa), to 0.01
    pub max_stress_rung_mpa: f64,
    /// Yield strength of the rung material (MPa)
    pub yield_strength_mpa: f64,
    /// Yield strength over working stress, to 0.01
    pub safety_factor: f64,
    /// Safety factor reaches the configured minimum
    pub meets_minimum: bool,
}

/// Reject rung geometry for which the stress is undefined.
///
/// A zero diameter divides by a zero moment of inertia and a zero span
/// divides yield strength by a zero stress. Negative values are left alone:
/// they produce a (meaningless) signed result rather than a division by zero.
pub fn check_rung_section(width: f64, rung_diameter: f64) -> CalcResult<()> {
    if !rung_diameter.is_finite() || rung_diameter == 0.0 {
        return Err(CalcError::invalid_input(
            "rung_diameter",
            rung_diameter.to_string(),
            "Rung diameter must be non-zero to compute bending stress",
        ));
    }
    if !width.is_finite() || width == 0.0 {
        return Err(CalcError::invalid_input(
            "width",
            width.to_string(),
            "Rung span must be non-zero to compute a safety factor",
        ));
    }
    Ok(())
}

/// Bending stress and safety factor of one rung.
///
/// # Arguments
///
/// * `span_mm` - Clear width between stringers
/// * `rung_diameter_mm` - Solid round bar diameter
/// * `load` - Concentrated load at mid-span
/// * `yield_strength` - Material yield strength
/// * `min_safety_factor` - Threshold for `meets_minimum`
pub fn rung_bending_check(
    span_mm: f64,
    rung_diameter_mm: f64,
    load: Newtons,
    yield_strength: Mpa,
    min_safety_factor: f64,
) -> CalcResult<StructuralIntegrity> {
    check_rung_section(span_mm, rung_diameter_mm)?;

    let moment = midspan_point_load_moment(load.value(), span_mm);
    let inertia = circular_moment_of_inertia(rung_diameter_mm);
    let stress = Mpa(bending_stress(moment, rung_diameter_mm / 2.0, inertia));

    let safety_factor = round_to(yield_strength.value() / stress.value(), 2);

    Ok(StructuralIntegrity {
        max_stress_rung_mpa: round_to(stress.value(), 2),
        yield_strength_mpa: yield_strength.value(),
        safety_factor,
        meets_minimum: safety_factor >= min_safety_factor,
    })
}
