//! # Cross-Section Property Formulas
//!
//! Geometric properties for the two section shapes on a fixed ladder: round
//! bar rungs and flat bar stringers.
//!
//! ## Notation
//!
//! - `A` = Cross-sectional area
//! - `I` = Moment of inertia (second moment of area)
//! - `d` = Diameter of round section
//! - `b`, `t` = Width and thickness of a flat bar
//!
//! ## References
//!
//! - Roark's Formulas for Stress and Strain, 8th Edition, Table A.1

use std::f64::consts::PI;

// =============================================================================
// SOLID CIRCULAR SECTION (round bar rungs)
// =============================================================================

/// Cross-sectional area of a solid round bar
///
/// # Formula
/// A = π(d/2)²
///
/// # Example
/// ```rust
/// use ladder_core::equations::section::circular_area;
///
/// let a = circular_area(25.0);
/// assert!((a - 490.87).abs() < 0.01);
/// ```
#[inline]
pub fn circular_area(d: f64) -> f64 {
    PI * (d / 2.0).powi(2)
}

/// Moment of inertia of a solid round bar about a diameter
///
/// ```text
///       ╭───╮
///      │ ═══ │ ← neutral axis at d/2
///       ╰───╯
///         d
/// ```
///
/// # Formula
/// I = πd⁴/64
///
/// # Example
/// ```rust
/// use ladder_core::equations::section::circular_moment_of_inertia;
///
/// let i = circular_moment_of_inertia(25.0);
/// assert!((i - 19_174.76).abs() < 0.01);
/// ```
#[inline]
pub fn circular_moment_of_inertia(d: f64) -> f64 {
    PI * d.powi(4) / 64.0
}

// =============================================================================
// FLAT BAR (stringers)
// =============================================================================

/// Cross-sectional area of a flat bar
///
/// # Formula
/// A = b × t
#[inline]
pub fn rectangular_area(b: f64, t: f64) -> f64 {
    b * t
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_circular_area() {
        assert_relative_eq!(circular_area(20.0), 100.0 * PI, epsilon = 1e-9);
        assert_eq!(circular_area(0.0), 0.0);
    }

    #[test]
    fn test_circular_moment_of_inertia() {
        assert_relative_eq!(circular_moment_of_inertia(25.0), 19_174.759, epsilon = 1e-3);
    }

    #[test]
    fn test_stringer_area() {
        assert_eq!(rectangular_area(65.0, 10.0), 650.0);
    }
}
