//! # Mass Estimate
//!
//! Volumetric weight estimate for budgeting and support sizing. It is
//! illustrative, not a takeoff:
//!
//! - Stringers: two flat bars (65×10 mm by default) running the climb height
//!   plus the top extension
//! - Rungs: solid round bar, one clear width per rung
//! - Cage: verticals and hoops lumped into an empirical volume per mm of
//!   caged height
//!
//! Volumes are mm-based and scaled by [`VolumeConversion::divisor`]. The
//! cage factor is expressed in the legacy unit, so it is rescaled along with
//! the divisor when the SI conversion is selected.
//!
//! [`VolumeConversion::divisor`]: crate::settings::VolumeConversion::divisor

use serde::{Deserialize, Serialize};

use crate::equations::{circular_area, rectangular_area};
use crate::parameters::LadderParameters;
use crate::settings::{EngineSettings, VolumeConversion};
use crate::units::{round_to, Kilograms, Kilonewtons};

/// Volumes (converted) and resulting mass
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct MassEstimate {
    pub rails_volume: f64,
    pub rungs_volume: f64,
    pub cage_volume: f64,
    /// Total mass (kg), rounded to 0.01
    pub weight_kg: f64,
}

impl MassEstimate {
    pub fn total_volume(&self) -> f64 {
        self.rails_volume + self.rungs_volume + self.cage_volume
    }

    /// Static base reaction (kN), rounded to 0.01
    pub fn reaction_kn(&self) -> f64 {
        let reaction: Kilonewtons = Kilograms(self.weight_kg).into();
        round_to(reaction.value(), 2)
    }
}

/// Estimate ladder mass for `total_rungs` rungs of the given density.
pub fn estimate_mass(
    params: &LadderParameters,
    total_rungs: u32,
    density_kg_m3: f64,
    settings: &EngineSettings,
) -> MassEstimate {
    let divisor = settings.volume_conversion.divisor();

    let stringer_area = rectangular_area(settings.stringer_width_mm, settings.stringer_thickness_mm);
    let rail_length = (params.total_height + params.top_extension) * 2.0;
    let rails_volume = rail_length * stringer_area / divisor;

    let rung_area = circular_area(params.rung_diameter);
    let rungs_volume = params.width * total_rungs as f64 * rung_area / divisor;

    let legacy_scale = VolumeConversion::Legacy.divisor() / divisor;
    let cage_volume = params.caged_height() * settings.cage_volume_per_mm * legacy_scale;

    let weight_kg = round_to((rails_volume + rungs_volume + cage_volume) * density_kg_m3, 2);

    MassEstimate {
        rails_volume,
        rungs_volume,
        cage_volume,
        weight_kg,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    fn bare_ladder() -> LadderParameters {
        LadderParameters {
            total_height: 3000.0,
            top_extension: 1000.0,
            width: 450.0,
            rung_diameter: 20.0,
            has_cage: false,
            ..Default::default()
        }
    }

    #[test]
    fn test_legacy_rail_volume() {
        // (3000 + 1000) × 2 × 650 / 1e6
        let mass = estimate_mass(&bare_ladder(), 11, 7850.0, &EngineSettings::default());
        assert_relative_eq!(mass.rails_volume, 5.2, epsilon = 1e-12);
    }

    #[test]
    fn test_legacy_total() {
        let mass = estimate_mass(&bare_ladder(), 11, 7850.0, &EngineSettings::default());
        let rungs = 450.0 * 11.0 * std::f64::consts::PI * 100.0 / 1e6;
        assert_relative_eq!(mass.rungs_volume, rungs, epsilon = 1e-12);
        assert_eq!(mass.cage_volume, 0.0);
        assert_relative_eq!(mass.weight_kg, round_to((5.2 + rungs) * 7850.0, 2), epsilon = 1e-9);
    }

    #[test]
    fn test_cage_volume_only_when_fitted() {
        let caged = LadderParameters {
            has_cage: true,
            cage_start_height: 2500.0,
            ..bare_ladder()
        };
        let mass = estimate_mass(&caged, 11, 7850.0, &EngineSettings::default());
        assert_relative_eq!(mass.cage_volume, 500.0 * 0.008, epsilon = 1e-12);

        // Cage starting above the landing contributes nothing
        let high_start = LadderParameters {
            cage_start_height: 3200.0,
            ..caged
        };
        let mass = estimate_mass(&high_start, 11, 7850.0, &EngineSettings::default());
        assert_eq!(mass.cage_volume, 0.0);
    }

    #[test]
    fn test_si_conversion_scales_every_component() {
        let caged = LadderParameters {
            has_cage: true,
            cage_start_height: 2500.0,
            ..bare_ladder()
        };
        let legacy = estimate_mass(&caged, 11, 7850.0, &EngineSettings::default());
        let si = estimate_mass(
            &caged,
            11,
            7850.0,
            &EngineSettings {
                volume_conversion: VolumeConversion::CubicMillimetres,
                ..Default::default()
            },
        );
        assert_relative_eq!(si.total_volume() * 1000.0, legacy.total_volume(), epsilon = 1e-9);
    }

    #[test]
    fn test_reaction() {
        let mass = MassEstimate {
            rails_volume: 0.0,
            rungs_volume: 0.0,
            cage_volume: 0.0,
            weight_kg: 100.0,
        };
        assert_eq!(mass.reaction_kn(), 0.98);
    }
}
