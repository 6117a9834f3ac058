//! # Rung Layout
//!
//! Discretizes the climb height into whole rung intervals and spreads them
//! evenly. The rung at the base is always counted.

use serde::{Deserialize, Serialize};

use crate::units::round_to;

/// Rung count and evened-out pitch for a ladder
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RungLayout {
    /// Whole rung intervals that fit in the height
    pub intervals: u32,
    /// Rungs including the base rung (`intervals + 1`)
    pub total_rungs: u32,
    /// Height divided evenly by the intervals, to 0.1 mm
    pub actual_spacing: f64,
}

/// Largest interval count a layout reports, leaving room for the base rung
pub const MAX_INTERVALS: u32 = u32::MAX - 1;

/// Lay out rungs over `total_height` at a nominal `rung_spacing`.
///
/// A non-positive spacing yields zero intervals and zero actual spacing
/// rather than dividing by zero. Counts beyond [`MAX_INTERVALS`] saturate;
/// the actual spacing is still taken from the unclamped count.
///
/// ```rust
/// use ladder_core::calculations::geometry::rung_layout;
///
/// let layout = rung_layout(6100.0, 300.0);
/// assert_eq!(layout.intervals, 20);
/// assert_eq!(layout.total_rungs, 21);
/// assert_eq!(layout.actual_spacing, 305.0);
/// ```
pub fn rung_layout(total_height: f64, rung_spacing: f64) -> RungLayout {
    let exact = if rung_spacing > 0.0 {
        (total_height / rung_spacing).floor().max(0.0)
    } else {
        0.0
    };

    let actual_spacing = if exact > 0.0 {
        round_to(total_height / exact, 1)
    } else {
        0.0
    };

    // `as` maps NaN to 0 and saturates above the bound
    let intervals = exact.min(MAX_INTERVALS as f64) as u32;

    RungLayout {
        intervals,
        total_rungs: intervals + 1,
        actual_spacing,
    }
}
