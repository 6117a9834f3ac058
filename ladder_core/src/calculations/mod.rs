//! # Ladder Calculations
//!
//! Derived geometry, normative thresholds, mass and the rung bending check
//! for one ladder. Follows the crate's calculation pattern:
//!
//! - [`LadderParameters`] - input (JSON-serializable)
//! - [`CalculationResult`] - output (JSON-serializable)
//! - `calculate(input) -> Result<CalculationResult, CalcError>` - pure function
//!
//! ## Submodules
//!
//! - [`geometry`] - Rung count and evened-out spacing
//! - [`mass`] - Volumetric mass estimate and base reaction
//! - [`structural`] - Rung bending stress and safety factor
//!
//! ## Example
//!
//! ```rust
//! use ladder_core::calculations::calculate;
//! use ladder_core::parameters::LadderParameters;
//!
//! let result = calculate(&LadderParameters::default()).unwrap();
//! assert_eq!(result.total_rungs, 21);
//! assert!(result.cage_mandatory);
//! assert_eq!(result.structural_integrity.safety_factor, 2.27);
//! ```

pub mod geometry;
pub mod mass;
pub mod structural;

use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use crate::errors::CalcResult;
use crate::materials;
use crate::parameters::LadderParameters;
use crate::settings::EngineSettings;
use crate::standards;
use crate::units::{Mpa, Newtons};

pub use geometry::{rung_layout, RungLayout};
pub use mass::{estimate_mass, MassEstimate};
pub use structural::{rung_bending_check, StructuralIntegrity};

/// Results of the ladder calculation.
///
/// `cage_mandatory` and `platform_mandatory` state what the standard
/// requires at this height. They are independent of the declared
/// `has_cage`/`has_platform`; compare the two to find a missing device.
///
/// ## JSON Example
///
/// ```json
/// {
///   "total_rungs": 21,
///   "actual_rung_spacing": 300.0,
///   "max_height_without_cage": 3500.0,
///   "cage_mandatory": true,
///   "platform_mandatory": false,
///   "weight_estimated_kg": 328669.75,
///   "reaction_force_base_kn": 3224.25,
///   "structural_integrity": {
///     "max_stress_rung_mpa": 110.01,
///     "yield_strength_mpa": 250.0,
///     "safety_factor": 2.27,
///     "meets_minimum": true
///   }
/// }
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CalculationResult {
    /// Rungs including the base rung
    pub total_rungs: u32,
    /// Evened-out rung pitch (mm), to 0.1
    pub actual_rung_spacing: f64,
    /// Highest climb the standard allows without a cage (mm)
    pub max_height_without_cage: f64,
    pub cage_mandatory: bool,
    pub platform_mandatory: bool,
    /// Estimated total mass (kg)
    pub weight_estimated_kg: f64,
    /// Static base reaction (kN)
    pub reaction_force_base_kn: f64,
    pub structural_integrity: StructuralIntegrity,
}

impl CalculationResult {
    /// Safety factor is below the configured minimum
    pub fn needs_attention(&self) -> bool {
        !self.structural_integrity.meets_minimum
    }
}

/// Calculate a ladder with the default engine settings.
///
/// # Returns
///
/// * `Ok(CalculationResult)` - Calculation results
/// * `Err(CalcError::InvalidInput)` - Zero rung diameter or zero width, for
///   which the rung stress is undefined
pub fn calculate(params: &LadderParameters) -> CalcResult<CalculationResult> {
    calculate_with(params, &EngineSettings::default())
}

/// Calculate a ladder with explicit engine settings.
pub fn calculate_with(params: &LadderParameters, settings: &EngineSettings) -> CalcResult<CalculationResult> {
    let profile = standards::lookup(params.standard);
    let material = materials::lookup(params.material);

    let structural_integrity = rung_bending_check(
        params.width,
        params.rung_diameter,
        Newtons(settings.rung_test_load_n),
        Mpa(material.yield_strength_mpa),
        settings.min_safety_factor,
    )?;

    let layout = rung_layout(params.total_height, params.rung_spacing);
    let mass = estimate_mass(params, layout.total_rungs, material.density_kg_m3, settings);

    let result = CalculationResult {
        total_rungs: layout.total_rungs,
        actual_rung_spacing: layout.actual_spacing,
        max_height_without_cage: profile.cage_required_above,
        cage_mandatory: params.total_height > profile.cage_required_above,
        platform_mandatory: params.total_height > profile.platform_required_above,
        weight_estimated_kg: mass.weight_kg,
        reaction_force_base_kn: mass.reaction_kn(),
        structural_integrity,
    };

    if result.needs_attention() {
        warn!(
            safety_factor = result.structural_integrity.safety_factor,
            minimum = settings.min_safety_factor,
            material = %params.material,
            "rung safety factor below minimum"
        );
    }
    debug!(
        standard = %params.standard,
        total_rungs = result.total_rungs,
        weight_kg = result.weight_estimated_kg,
        "calculated ladder"
    );

    Ok(result)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::materials::MaterialType;
    use crate::settings::VolumeConversion;
    use crate::standards::TechnicalStandard;
    use approx::assert_relative_eq;

    #[test]
    fn test_default_ladder() {
        let result = calculate(&LadderParameters::default()).unwrap();

        assert_eq!(result.total_rungs, 21);
        assert_eq!(result.actual_rung_spacing, 300.0);
        assert_eq!(result.max_height_without_cage, 3500.0);
        assert!(result.cage_mandatory);
        // 6000 is not above NR-12's 6000 mm platform threshold
        assert!(!result.platform_mandatory);
        assert!(!result.needs_attention());
    }

    #[test]
    fn test_default_ladder_mass_parity() {
        // Rails 14200 × 650 / 1e6 = 9.23, rungs 21 × 450 × 490.87 / 1e6,
        // cage 3500 × 0.008 = 28, all × 7850 kg/m³
        let result = calculate(&LadderParameters::default()).unwrap();
        let rungs = 21.0 * 450.0 * std::f64::consts::PI * 12.5 * 12.5 / 1e6;
        let expected = ((9.23 + rungs + 28.0) * 7850.0 * 100.0).round() / 100.0;
        assert_relative_eq!(result.weight_estimated_kg, expected, epsilon = 0.01);
        assert_relative_eq!(
            result.reaction_force_base_kn,
            (expected * 0.00981 * 100.0).round() / 100.0,
            epsilon = 0.01
        );
    }

    #[test]
    fn test_safety_factor_scenario() {
        let params = LadderParameters {
            material: MaterialType::GalvanizedSteel,
            width: 450.0,
            rung_diameter: 25.0,
            ..Default::default()
        };
        let si = calculate(&params).unwrap().structural_integrity;
        assert_relative_eq!(si.max_stress_rung_mpa, 110.0, epsilon = 0.05);
        assert_relative_eq!(si.safety_factor, 2.27, epsilon = 0.005);
        assert_eq!(si.yield_strength_mpa, 250.0);
    }

    #[test]
    fn test_zero_spacing_guard() {
        let params = LadderParameters {
            rung_spacing: 0.0,
            ..Default::default()
        };
        let result = calculate(&params).unwrap();
        assert_eq!(result.total_rungs, 1);
        assert_eq!(result.actual_rung_spacing, 0.0);
    }

    #[test]
    fn test_extreme_rung_counts_do_not_overflow() {
        let tall = LadderParameters {
            total_height: 1.0e13,
            ..Default::default()
        };
        let result = calculate(&tall).unwrap();
        assert_eq!(result.total_rungs, u32::MAX);
        assert!(result.weight_estimated_kg.is_finite());

        let dense = LadderParameters {
            rung_spacing: 1.0e-7,
            ..Default::default()
        };
        assert_eq!(calculate(&dense).unwrap().total_rungs, u32::MAX);
    }

    #[test]
    fn test_cage_threshold_is_strict() {
        let at = LadderParameters {
            total_height: 3500.0,
            ..Default::default()
        };
        let above = LadderParameters {
            total_height: 3501.0,
            ..Default::default()
        };
        assert!(!calculate(&at).unwrap().cage_mandatory);
        assert!(calculate(&above).unwrap().cage_mandatory);
    }

    #[test]
    fn test_mandatory_flags_ignore_declared_devices() {
        let params = LadderParameters {
            standard: TechnicalStandard::Nbr14718,
            total_height: 4500.0,
            has_cage: false,
            has_platform: false,
            ..Default::default()
        };
        let result = calculate(&params).unwrap();
        assert!(result.cage_mandatory);
        assert!(result.platform_mandatory);
    }

    #[test]
    fn test_total_rungs_monotonic() {
        let mut previous = 0;
        for step in 0..100 {
            let params = LadderParameters {
                total_height: step as f64 * 123.0,
                ..Default::default()
            };
            let rungs = calculate(&params).unwrap().total_rungs;
            assert!(rungs >= previous);
            previous = rungs;
        }
    }

    #[test]
    fn test_calculate_is_pure() {
        let params = LadderParameters {
            material: MaterialType::Aluminum,
            total_height: 8123.0,
            ..Default::default()
        };
        let first = serde_json::to_string(&calculate(&params).unwrap()).unwrap();
        let second = serde_json::to_string(&calculate(&params).unwrap()).unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn test_zero_diameter_is_error() {
        let params = LadderParameters {
            rung_diameter: 0.0,
            ..Default::default()
        };
        assert_eq!(calculate(&params).unwrap_err().error_code(), "INVALID_INPUT");
    }

    #[test]
    fn test_si_volume_setting() {
        let params = LadderParameters::default();
        let legacy = calculate(&params).unwrap();
        let si = calculate_with(
            &params,
            &EngineSettings {
                volume_conversion: VolumeConversion::CubicMillimetres,
                ..Default::default()
            },
        )
        .unwrap();
        assert_relative_eq!(si.weight_estimated_kg * 1000.0, legacy.weight_estimated_kg, epsilon = 10.0);
        assert_eq!(si.structural_integrity, legacy.structural_integrity);
    }

    #[test]
    fn test_custom_minimum_safety_factor() {
        let strict = EngineSettings {
            min_safety_factor: 3.0,
            ..Default::default()
        };
        let result = calculate_with(&LadderParameters::default(), &strict).unwrap();
        assert!(result.needs_attention());
    }
}
