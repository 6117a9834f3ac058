//! # Ladder Parameters
//!
//! The input model every engine function reads. All geometry is in
//! millimetres and is taken as given: the engine reports on out-of-range
//! values rather than rejecting them.
//!
//! ## Design vs. Audit
//!
//! In [`AppMode::Design`] the ladder is being sized, so switching standard
//! (or entering Design mode) pulls the standard's default geometry and
//! re-derives `has_cage`/`has_platform` from the height thresholds. In
//! [`AppMode::Audit`] the fields are field measurements of an installed
//! ladder and are never overwritten.
//!
//! ```rust
//! use ladder_core::parameters::{AppMode, LadderParameters};
//! use ladder_core::standards::TechnicalStandard;
//!
//! let mut params = LadderParameters::default();
//! params.set_standard(TechnicalStandard::Osha1910_27);
//! assert_eq!(params.width, 457.0);
//!
//! let mut audit = LadderParameters { mode: AppMode::Audit, ..Default::default() };
//! audit.set_standard(TechnicalStandard::Osha1910_27);
//! assert_eq!(audit.width, 450.0);
//! ```
//!
//! ## JSON Example
//!
//! ```json
//! {
//!   "mode": "design",
//!   "standard": "NR12",
//!   "installation_type": "Parede",
//!   "environment": "Interno",
//!   "total_height": 6000.0,
//!   "width": 450.0,
//!   "rung_spacing": 300.0,
//!   "rung_diameter": 25.0,
//!   "wall_distance": 200.0,
//!   "cage_start_height": 2500.0,
//!   "cage_diameter": 700.0,
//!   "top_extension": 1100.0,
//!   "handrail_height": 1100.0,
//!   "has_cage": true,
//!   "has_platform": false,
//!   "material": "Aço galvanizado"
//! }
//! ```

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::materials::MaterialType;
use crate::standards::{self, TechnicalStandard};

/// Whether the ladder is being designed or audited as built
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum AppMode {
    #[serde(rename = "design", alias = "projeto")]
    Design,
    #[serde(rename = "audit", alias = "auditoria")]
    Audit,
}

impl Default for AppMode {
    fn default() -> Self {
        AppMode::Design
    }
}

impl std::fmt::Display for AppMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            AppMode::Design => write!(f, "design"),
            AppMode::Audit => write!(f, "audit"),
        }
    }
}

/// What the ladder is fixed to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum InstallationType {
    #[serde(rename = "Parede")]
    Wall,
    #[serde(rename = "Estrutura metálica")]
    SteelStructure,
    #[serde(rename = "Torre")]
    Tower,
}

impl InstallationType {
    pub fn label(&self) -> &'static str {
        match self {
            InstallationType::Wall => "Parede",
            InstallationType::SteelStructure => "Estrutura metálica",
            InstallationType::Tower => "Torre",
        }
    }
}

impl Default for InstallationType {
    fn default() -> Self {
        InstallationType::Wall
    }
}

/// Service environment
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Environment {
    #[serde(rename = "Interno")]
    Indoor,
    #[serde(rename = "Externo")]
    Outdoor,
    #[serde(rename = "Corrosivo")]
    Corrosive,
}

impl Environment {
    pub fn label(&self) -> &'static str {
        match self {
            Environment::Indoor => "Interno",
            Environment::Outdoor => "Externo",
            Environment::Corrosive => "Corrosivo",
        }
    }
}

impl Default for Environment {
    fn default() -> Self {
        Environment::Indoor
    }
}

/// Complete description of one fixed ladder.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LadderParameters {
    pub mode: AppMode,
    pub standard: TechnicalStandard,
    pub installation_type: InstallationType,
    pub environment: Environment,

    /// Climb height from base to landing (mm)
    pub total_height: f64,
    /// Clear width between stringers (mm)
    pub width: f64,
    /// Vertical rung pitch (mm)
    pub rung_spacing: f64,
    /// Round rung bar diameter (mm)
    pub rung_diameter: f64,
    /// Rung centreline to the wall or nearest fixed obstacle (mm)
    pub wall_distance: f64,
    /// Height of the lowest cage hoop above the base (mm)
    pub cage_start_height: f64,
    pub cage_diameter: f64,
    /// Stringer extension above the landing (mm)
    pub top_extension: f64,
    pub handrail_height: f64,

    /// A cage is (to be) installed
    pub has_cage: bool,
    /// A rest platform is (to be) installed
    pub has_platform: bool,

    pub material: MaterialType,
}

impl Default for LadderParameters {
    fn default() -> Self {
        LadderParameters {
            mode: AppMode::Design,
            standard: TechnicalStandard::Nr12,
            installation_type: InstallationType::Wall,
            environment: Environment::Indoor,
            total_height: 6000.0,
            width: 450.0,
            rung_spacing: 300.0,
            rung_diameter: 25.0,
            wall_distance: 200.0,
            cage_start_height: 2500.0,
            cage_diameter: 700.0,
            top_extension: 1100.0,
            handrail_height: 1100.0,
            has_cage: true,
            has_platform: false,
            material: MaterialType::GalvanizedSteel,
        }
    }
}

impl LadderParameters {
    /// Apply the active standard's defaults when in Design mode.
    ///
    /// Overwrites width, rung spacing, rung diameter and wall distance, then
    /// re-derives `has_cage` and `has_platform` from the height thresholds.
    /// Audit mode is left untouched.
    pub fn sync_with_standard(&mut self) {
        match self.mode {
            AppMode::Design => {
                let profile = standards::lookup(self.standard);
                self.width = profile.defaults.width;
                self.rung_spacing = profile.defaults.rung_spacing;
                self.rung_diameter = profile.defaults.rung_diameter;
                self.wall_distance = profile.defaults.wall_distance;
                self.has_cage = self.total_height > profile.cage_required_above;
                self.has_platform = self.total_height > profile.platform_required_above;
                debug!(standard = %self.standard, "applied standard defaults");
            }
            AppMode::Audit => {}
        }
    }

    /// Switch standard, re-applying defaults in Design mode.
    pub fn set_standard(&mut self, standard: TechnicalStandard) {
        self.standard = standard;
        self.sync_with_standard();
    }

    /// Switch mode. Entering Design mode applies the standard's defaults.
    pub fn set_mode(&mut self, mode: AppMode) {
        self.mode = mode;
        self.sync_with_standard();
    }

    /// Clear height inside the cage (mm), zero without a cage
    pub fn caged_height(&self) -> f64 {
        if self.has_cage {
            (self.total_height - self.cage_start_height).max(0.0)
        } else {
            0.0
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_design_mode_sync_to_osha() {
        let mut params = LadderParameters::default();
        params.set_standard(TechnicalStandard::Osha1910_27);

        assert_eq!(params.width, 457.0);
        assert_eq!(params.rung_spacing, 305.0);
        assert_eq!(params.rung_diameter, 25.0);
        assert_eq!(params.wall_distance, 178.0);
        // 6000 mm is below OSHA's 7315 mm cage threshold
        assert!(!params.has_cage);
        assert!(!params.has_platform);
    }

    #[test]
    fn test_audit_mode_keeps_measurements() {
        let mut params = LadderParameters {
            mode: AppMode::Audit,
            width: 380.0,
            rung_spacing: 320.0,
            has_cage: false,
            ..Default::default()
        };
        let before = params.clone();
        params.set_standard(TechnicalStandard::Osha1910_27);

        assert_eq!(params.standard, TechnicalStandard::Osha1910_27);
        assert_eq!(params.width, before.width);
        assert_eq!(params.rung_spacing, before.rung_spacing);
        assert_eq!(params.rung_diameter, before.rung_diameter);
        assert_eq!(params.wall_distance, before.wall_distance);
        assert_eq!(params.has_cage, before.has_cage);
    }

    #[test]
    fn test_entering_design_mode_applies_defaults() {
        let mut params = LadderParameters {
            mode: AppMode::Audit,
            standard: TechnicalStandard::Nbr14718,
            width: 700.0,
            total_height: 4500.0,
            has_cage: false,
            ..Default::default()
        };
        params.set_mode(AppMode::Design);

        assert_eq!(params.width, 400.0);
        assert_eq!(params.wall_distance, 150.0);
        assert!(params.has_cage);
        assert!(params.has_platform);
    }

    #[test]
    fn test_caged_height() {
        let params = LadderParameters::default();
        assert_eq!(params.caged_height(), 3500.0);

        let no_cage = LadderParameters {
            has_cage: false,
            ..Default::default()
        };
        assert_eq!(no_cage.caged_height(), 0.0);

        let low = LadderParameters {
            total_height: 2000.0,
            ..Default::default()
        };
        assert_eq!(low.caged_height(), 0.0);
    }

    #[test]
    fn test_legacy_mode_aliases() {
        let mode: AppMode = serde_json::from_str("\"projeto\"").unwrap();
        assert_eq!(mode, AppMode::Design);
        let mode: AppMode = serde_json::from_str("\"auditoria\"").unwrap();
        assert_eq!(mode, AppMode::Audit);
        assert_eq!(serde_json::to_string(&AppMode::Audit).unwrap(), "\"audit\"");
    }

    #[test]
    fn test_parameters_json_roundtrip() {
        let params = LadderParameters {
            installation_type: InstallationType::Tower,
            environment: Environment::Corrosive,
            ..Default::default()
        };
        let json = serde_json::to_string_pretty(&params).unwrap();
        assert!(json.contains("\"Torre\""));
        assert!(json.contains("\"Corrosivo\""));
        assert!(json.contains("\"Aço galvanizado\""));

        let parsed: LadderParameters = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, params);
    }
}
