//! # Standards Registry
//!
//! Normative limits for fixed ladders under each supported regulation.
//! Every bound, threshold and clause citation below is copied from the
//! published text of the standard and is compliance-bearing: changing a
//! number here changes the verdict the engine gives.
//!
//! ## Supported Standards
//!
//! - **NR12**: NR-12 Anexo III (Brazil, machinery safety)
//! - **NBR14718**: ABNT NBR 15708-4 / NBR 14718 equivalent
//! - **ISO14122_4**: ISO 14122-4 Safety of machinery - Fixed ladders
//! - **OSHA1910_27**: OSHA 29 CFR 1910.27 Subpart D
//!
//! ## Example
//!
//! ```rust
//! use ladder_core::standards::{self, ClauseCategory, TechnicalStandard};
//!
//! let nr12 = standards::lookup(TechnicalStandard::Nr12);
//! assert_eq!(nr12.cage_required_above, 3500.0);
//! assert_eq!(nr12.clause(ClauseCategory::Width), "Anexo III - 12.12.1 (a)");
//!
//! let osha = standards::lookup_key("OSHA1910_27").unwrap();
//! assert_eq!(osha.defaults.width, 457.0);
//! ```

use std::str::FromStr;

use chrono::NaiveDate;
use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};

use crate::errors::{CalcError, CalcResult};

/// Regulation a ladder is checked against.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TechnicalStandard {
    /// NR-12 Anexo III
    #[serde(rename = "NR12")]
    Nr12,
    /// ABNT NBR 14718 equivalent
    #[serde(rename = "NBR14718")]
    Nbr14718,
    /// ISO 14122-4
    #[serde(rename = "ISO14122_4")]
    Iso14122_4,
    /// OSHA 1910.27
    #[serde(rename = "OSHA1910_27")]
    Osha1910_27,
}

impl TechnicalStandard {
    /// All standards in registry order
    pub const ALL: [TechnicalStandard; 4] = [
        TechnicalStandard::Nr12,
        TechnicalStandard::Nbr14718,
        TechnicalStandard::Iso14122_4,
        TechnicalStandard::Osha1910_27,
    ];

    /// Registry key, also used as the `standard_code` on findings
    pub fn code(&self) -> &'static str {
        match self {
            TechnicalStandard::Nr12 => "NR12",
            TechnicalStandard::Nbr14718 => "NBR14718",
            TechnicalStandard::Iso14122_4 => "ISO14122_4",
            TechnicalStandard::Osha1910_27 => "OSHA1910_27",
        }
    }

    /// Short label for headings
    pub fn display_name(&self) -> &'static str {
        match self {
            TechnicalStandard::Nr12 => "NR-12",
            TechnicalStandard::Nbr14718 => "ABNT NBR 14718",
            TechnicalStandard::Iso14122_4 => "ISO 14122-4",
            TechnicalStandard::Osha1910_27 => "OSHA 1910.27",
        }
    }

    fn index(&self) -> usize {
        match self {
            TechnicalStandard::Nr12 => 0,
            TechnicalStandard::Nbr14718 => 1,
            TechnicalStandard::Iso14122_4 => 2,
            TechnicalStandard::Osha1910_27 => 3,
        }
    }
}

impl Default for TechnicalStandard {
    fn default() -> Self {
        TechnicalStandard::Nr12
    }
}

impl std::fmt::Display for TechnicalStandard {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.code())
    }
}

impl FromStr for TechnicalStandard {
    type Err = CalcError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        TechnicalStandard::ALL
            .iter()
            .copied()
            .find(|standard| standard.code().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| CalcError::unknown_standard(s))
    }
}

/// Category of requirement a clause citation covers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ClauseCategory {
    Width,
    Rungs,
    Spacing,
    Wall,
    Cage,
    Platform,
}

/// Clause citation for each requirement category.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ClauseTable {
    pub width: &'static str,
    pub rungs: &'static str,
    pub spacing: &'static str,
    pub wall: &'static str,
    pub cage: &'static str,
    pub platform: &'static str,
}

/// Geometry the standard recommends for new designs (mm).
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct StandardDefaults {
    pub width: f64,
    pub rung_spacing: f64,
    pub rung_diameter: f64,
    pub wall_distance: f64,
}

/// Normative profile of one standard. All lengths in millimetres.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct StandardProfile {
    pub standard: TechnicalStandard,
    pub name: &'static str,
    pub version: &'static str,
    pub last_update: NaiveDate,

    pub min_width: f64,
    pub max_width: f64,
    pub min_rung_spacing: f64,
    pub max_rung_spacing: f64,
    pub min_rung_diameter: f64,
    pub min_wall_distance: f64,

    /// Heights above this need a cage (strictly greater than)
    pub cage_required_above: f64,
    /// Heights above this need a rest platform (strictly greater than)
    pub platform_required_above: f64,

    pub cage_start_min: f64,
    pub cage_start_max: f64,
    pub cage_diameter_min: f64,
    pub cage_diameter_max: f64,

    pub defaults: StandardDefaults,
    pub clauses: ClauseTable,
}

impl StandardProfile {
    /// Clause citation for a requirement category
    pub fn clause(&self, category: ClauseCategory) -> &'static str {
        match category {
            ClauseCategory::Width => self.clauses.width,
            ClauseCategory::Rungs => self.clauses.rungs,
            ClauseCategory::Spacing => self.clauses.spacing,
            ClauseCategory::Wall => self.clauses.wall,
            ClauseCategory::Cage => self.clauses.cage,
            ClauseCategory::Platform => self.clauses.platform,
        }
    }
}

fn revision(year: i32, month: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, month, day).unwrap_or_default()
}

static REGISTRY: Lazy<[StandardProfile; 4]> = Lazy::new(|| {
    [
        StandardProfile {
            standard: TechnicalStandard::Nr12,
            name: "NR-12 - Segurança no Trabalho em Máquinas e Equipamentos",
            version: "2019 (Atualizada Portaria SEPRT 916)",
            last_update: revision(2019, 7, 30),
            min_width: 400.0,
            max_width: 600.0,
            min_rung_spacing: 250.0,
            max_rung_spacing: 300.0,
            min_rung_diameter: 25.0,
            min_wall_distance: 150.0,
            cage_required_above: 3500.0,
            platform_required_above: 6000.0,
            cage_start_min: 2200.0,
            cage_start_max: 3000.0,
            cage_diameter_min: 650.0,
            cage_diameter_max: 800.0,
            defaults: StandardDefaults {
                width: 450.0,
                rung_spacing: 300.0,
                rung_diameter: 25.0,
                wall_distance: 200.0,
            },
            clauses: ClauseTable {
                width: "Anexo III - 12.12.1 (a)",
                rungs: "Anexo III - 12.12.1 (b)",
                spacing: "Anexo III - 12.12.1 (c)",
                wall: "Anexo III - 12.12.1 (d)",
                cage: "Anexo III - 12.12.1 (e)",
                platform: "Anexo III - 12.12.1 (h)",
            },
        },
        StandardProfile {
            standard: TechnicalStandard::Nbr14718,
            name: "ABNT NBR 15708-4 / NBR 14718 equivalent",
            version: "2015",
            last_update: revision(2015, 12, 1),
            min_width: 400.0,
            max_width: 500.0,
            min_rung_spacing: 250.0,
            max_rung_spacing: 300.0,
            min_rung_diameter: 25.0,
            min_wall_distance: 150.0,
            cage_required_above: 2000.0,
            platform_required_above: 4000.0,
            cage_start_min: 2100.0,
            cage_start_max: 2400.0,
            cage_diameter_min: 650.0,
            cage_diameter_max: 750.0,
            defaults: StandardDefaults {
                width: 400.0,
                rung_spacing: 300.0,
                rung_diameter: 25.0,
                wall_distance: 150.0,
            },
            clauses: ClauseTable {
                width: "Cláusula 4.2",
                rungs: "Cláusula 4.3",
                spacing: "Cláusula 4.4",
                wall: "Cláusula 4.5",
                cage: "Cláusula 5.1",
                platform: "Cláusula 5.3",
            },
        },
        StandardProfile {
            standard: TechnicalStandard::Iso14122_4,
            name: "ISO 14122-4 - Safety of machinery - Fixed ladders",
            version: "2016",
            last_update: revision(2016, 6, 1),
            min_width: 400.0,
            max_width: 600.0,
            min_rung_spacing: 225.0,
            max_rung_spacing: 300.0,
            min_rung_diameter: 20.0,
            min_wall_distance: 150.0,
            cage_required_above: 3000.0,
            platform_required_above: 6000.0,
            cage_start_min: 2200.0,
            cage_start_max: 3000.0,
            cage_diameter_min: 650.0,
            cage_diameter_max: 800.0,
            defaults: StandardDefaults {
                width: 500.0,
                rung_spacing: 250.0,
                rung_diameter: 30.0,
                wall_distance: 200.0,
            },
            clauses: ClauseTable {
                width: "ISO 14122-4:4.4.1.2",
                rungs: "ISO 14122-4:4.4.1.1",
                spacing: "ISO 14122-4:4.4.1.1",
                wall: "ISO 14122-4:4.4.1.3",
                cage: "ISO 14122-4:4.5",
                platform: "ISO 14122-4:4.6",
            },
        },
        StandardProfile {
            standard: TechnicalStandard::Osha1910_27,
            name: "OSHA 1910.27 - Fixed Ladders",
            version: "1910 Subpart D",
            last_update: revision(2017, 1, 17),
            min_width: 406.0,
            max_width: 610.0,
            min_rung_spacing: 254.0,
            max_rung_spacing: 305.0,
            min_rung_diameter: 19.0,
            min_wall_distance: 178.0,
            cage_required_above: 7315.0,
            platform_required_above: 9144.0,
            cage_start_min: 2133.0,
            cage_start_max: 2438.0,
            cage_diameter_min: 685.0,
            cage_diameter_max: 762.0,
            defaults: StandardDefaults {
                width: 457.0,
                rung_spacing: 305.0,
                rung_diameter: 25.0,
                wall_distance: 178.0,
            },
            clauses: ClauseTable {
                width: "1910.27(b)(1)",
                rungs: "1910.27(b)(1)",
                spacing: "1910.27(b)(1)",
                wall: "1910.27(c)(4)",
                cage: "1910.27(d)(1)",
                platform: "1910.27(d)(2)",
            },
        },
    ]
});

/// Get the profile for a standard.
pub fn lookup(standard: TechnicalStandard) -> &'static StandardProfile {
    &REGISTRY[standard.index()]
}

/// Get the profile for a registry key such as `"NR12"`.
///
/// Unknown keys are an error, never a silent fallback to a default standard.
pub fn lookup_key(key: &str) -> CalcResult<&'static StandardProfile> {
    let standard: TechnicalStandard = key.parse()?;
    Ok(lookup(standard))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_registry_order_matches_keys() {
        for standard in TechnicalStandard::ALL {
            assert_eq!(lookup(standard).standard, standard);
        }
    }

    #[test]
    fn test_nr12_limits() {
        let nr12 = lookup(TechnicalStandard::Nr12);
        assert_eq!(nr12.min_width, 400.0);
        assert_eq!(nr12.max_width, 600.0);
        assert_eq!(nr12.min_rung_spacing, 250.0);
        assert_eq!(nr12.max_rung_spacing, 300.0);
        assert_eq!(nr12.cage_required_above, 3500.0);
        assert_eq!(nr12.platform_required_above, 6000.0);
        assert_eq!(nr12.clause(ClauseCategory::Cage), "Anexo III - 12.12.1 (e)");
        assert_eq!(nr12.last_update, NaiveDate::from_ymd_opt(2019, 7, 30).unwrap());
    }

    #[test]
    fn test_osha_defaults() {
        let osha = lookup(TechnicalStandard::Osha1910_27);
        assert_eq!(osha.defaults.width, 457.0);
        assert_eq!(osha.defaults.rung_spacing, 305.0);
        assert_eq!(osha.defaults.rung_diameter, 25.0);
        assert_eq!(osha.defaults.wall_distance, 178.0);
        assert_eq!(osha.clause(ClauseCategory::Wall), "1910.27(c)(4)");
    }

    #[test]
    fn test_defaults_fit_own_bounds() {
        for standard in TechnicalStandard::ALL {
            let p = lookup(standard);
            assert!(p.defaults.width >= p.min_width && p.defaults.width <= p.max_width);
            assert!(p.defaults.rung_spacing >= p.min_rung_spacing);
            assert!(p.defaults.rung_spacing <= p.max_rung_spacing);
            assert!(p.defaults.rung_diameter >= p.min_rung_diameter);
            assert!(p.defaults.wall_distance >= p.min_wall_distance);
        }
    }

    #[test]
    fn test_lookup_key() {
        assert_eq!(lookup_key("ISO14122_4").unwrap().min_rung_diameter, 20.0);
        assert_eq!(lookup_key("nbr14718").unwrap().max_width, 500.0);

        let err = lookup_key("EN131").unwrap_err();
        assert_eq!(err, CalcError::unknown_standard("EN131"));
    }

    #[test]
    fn test_standard_serialization() {
        let json = serde_json::to_string(&TechnicalStandard::Osha1910_27).unwrap();
        assert_eq!(json, "\"OSHA1910_27\"");

        let parsed: TechnicalStandard = serde_json::from_str("\"ISO14122_4\"").unwrap();
        assert_eq!(parsed, TechnicalStandard::Iso14122_4);
    }

    #[test]
    fn test_display_names() {
        assert_eq!(TechnicalStandard::Nr12.display_name(), "NR-12");
        assert_eq!(TechnicalStandard::Osha1910_27.display_name(), "OSHA 1910.27");
        let names: std::collections::HashSet<_> = TechnicalStandard::ALL.iter().map(|s| s.display_name()).collect();
        assert_eq!(names.len(), 4);
    }
}
