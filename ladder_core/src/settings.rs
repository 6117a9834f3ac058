//! # Engine Settings
//!
//! Tunable constants of the calculation engine. The defaults reproduce the
//! reference outputs exactly; callers load a different set from JSON when
//! they need, for example, true SI volume conversion.
//!
//! ```rust
//! use ladder_core::settings::{EngineSettings, VolumeConversion};
//!
//! let settings: EngineSettings =
//!     serde_json::from_str(r#"{ "volume_conversion": "CubicMillimetres" }"#).unwrap();
//! assert_eq!(settings.volume_conversion, VolumeConversion::CubicMillimetres);
//! assert_eq!(settings.rung_test_load_n, 1500.0);
//! ```

use serde::{Deserialize, Serialize};

/// Divisor applied to mm-based volumes in the mass estimate.
///
/// `Legacy` divides by 1e6, the mm²→m² factor, which overstates mass by
/// 1000x relative to a true mm³→m³ conversion. It is the default so mass and
/// reaction figures match reports already issued. `CubicMillimetres` is the
/// dimensionally correct 1e9 and must be selected explicitly.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum VolumeConversion {
    Legacy,
    CubicMillimetres,
}

impl VolumeConversion {
    pub fn divisor(&self) -> f64 {
        match self {
            VolumeConversion::Legacy => 1_000_000.0,
            VolumeConversion::CubicMillimetres => 1_000_000_000.0,
        }
    }
}

impl Default for VolumeConversion {
    fn default() -> Self {
        VolumeConversion::Legacy
    }
}

/// Constants used by the calculation engine.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EngineSettings {
    /// Concentrated normative load at rung mid-span (N)
    pub rung_test_load_n: f64,

    /// Safety factors below this are flagged
    pub min_safety_factor: f64,

    /// Stringer flat bar width (mm)
    pub stringer_width_mm: f64,

    /// Stringer flat bar thickness (mm)
    pub stringer_thickness_mm: f64,

    /// Empirical cage volume per mm of caged height (verticals + hoops)
    pub cage_volume_per_mm: f64,

    pub volume_conversion: VolumeConversion,
}

impl Default for EngineSettings {
    fn default() -> Self {
        EngineSettings {
            rung_test_load_n: 1500.0,
            min_safety_factor: 1.5,
            stringer_width_mm: 65.0,
            stringer_thickness_mm: 10.0,
            cage_volume_per_mm: 0.008,
            volume_conversion: VolumeConversion::Legacy,
        }
    }
}
