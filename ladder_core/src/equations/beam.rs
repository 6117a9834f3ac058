//! # Rung Bending Formulas
//!
//! A rung is treated as a simply-supported beam spanning the clear width
//! between stringers, pinned at one stringer and on a roller at the other.
//!
//! ## Notation
//!
//! - `L` = Span length (clear width between stringers)
//! - `P` = Concentrated load at mid-span
//! - `M` = Bending moment
//! - `I` = Moment of inertia
//! - `c` = Distance from neutral axis to extreme fiber
//! - `σ` = Bending stress
//!
//! ## Units
//!
//! Pass N and mm: the moment comes out in N·mm and the stress in N/mm²,
//! which is MPa.
//!
//! ## References
//!
//! - Roark's Formulas for Stress and Strain, 8th Edition, Table 8.1
//! - Structural Analysis by R.C. Hibbeler

/// Maximum moment for a point load P at mid-span of a simple span L
///
/// ```text
///            P
///            ↓
///    ────────┬────────
///    △                △
///   R1  ←─────L─────→ R2
/// ```
///
/// # Formula (Roark's Table 8.1, Case 1a with a = L/2)
/// M_max = PL/4
///
/// # Example
/// ```rust
/// use ladder_core::equations::beam::midspan_point_load_moment;
///
/// // 1.5 kN on a 450 mm rung
/// let m = midspan_point_load_moment(1500.0, 450.0);
/// assert_eq!(m, 168_750.0);
/// ```
#[inline]
pub fn midspan_point_load_moment(p: f64, l: f64) -> f64 {
    p * l / 4.0
}

/// Extreme-fiber bending stress
///
/// # Formula (flexure formula)
/// σ = M·c / I
///
/// # Arguments
/// * `m` - Bending moment
/// * `c` - Distance from neutral axis to extreme fiber
/// * `i` - Moment of inertia about the bending axis
#[inline]
pub fn bending_stress(m: f64, c: f64, i: f64) -> f64 {
    m * c / i
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_midspan_moment() {
        assert_eq!(midspan_point_load_moment(1500.0, 400.0), 150_000.0);
        assert_eq!(midspan_point_load_moment(1500.0, 0.0), 0.0);
    }

    #[test]
    fn test_bending_stress_rectangle_matches_section_modulus() {
        // 10 x 20 rectangle: I = 10·20³/12, c = 10, S = bd²/6
        let i = 10.0 * 20.0_f64.powi(3) / 12.0;
        let s = 10.0 * 20.0_f64.powi(2) / 6.0;
        assert_relative_eq!(bending_stress(1000.0, 10.0, i), 1000.0 / s, epsilon = 1e-12);
    }
}
