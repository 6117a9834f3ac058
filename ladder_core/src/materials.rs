//! # Materials Database
//!
//! Physical properties of the stock materials fixed ladders are built from.
//! Keys are the Portuguese trade names used on drawings and purchase orders.
//!
//! ## Example
//!
//! ```rust
//! use ladder_core::materials::{self, MaterialType};
//!
//! let galv = materials::lookup(MaterialType::GalvanizedSteel);
//! assert_eq!(galv.yield_strength_mpa, 250.0);
//!
//! let frp = materials::lookup_key("FRP").unwrap();
//! assert_eq!(frp.density_kg_m3, 1800.0);
//! ```

use std::str::FromStr;

use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};

use crate::errors::{CalcError, CalcResult};

/// Ladder construction material
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum MaterialType {
    #[serde(rename = "Aço carbono")]
    CarbonSteel,
    #[serde(rename = "Aço galvanizado")]
    GalvanizedSteel,
    #[serde(rename = "Aço inox")]
    StainlessSteel,
    #[serde(rename = "Alumínio")]
    Aluminum,
    #[serde(rename = "FRP")]
    Frp,
}

impl MaterialType {
    /// All materials in registry order
    pub const ALL: [MaterialType; 5] = [
        MaterialType::CarbonSteel,
        MaterialType::GalvanizedSteel,
        MaterialType::StainlessSteel,
        MaterialType::Aluminum,
        MaterialType::Frp,
    ];

    /// Registry key (trade name)
    pub fn key(&self) -> &'static str {
        match self {
            MaterialType::CarbonSteel => "Aço carbono",
            MaterialType::GalvanizedSteel => "Aço galvanizado",
            MaterialType::StainlessSteel => "Aço inox",
            MaterialType::Aluminum => "Alumínio",
            MaterialType::Frp => "FRP",
        }
    }

    /// Pultruded composites are bought as profiles, not rolled bar
    pub fn is_composite(&self) -> bool {
        matches!(self, MaterialType::Frp)
    }

    fn index(&self) -> usize {
        match self {
            MaterialType::CarbonSteel => 0,
            MaterialType::GalvanizedSteel => 1,
            MaterialType::StainlessSteel => 2,
            MaterialType::Aluminum => 3,
            MaterialType::Frp => 4,
        }
    }
}

impl Default for MaterialType {
    fn default() -> Self {
        MaterialType::GalvanizedSteel
    }
}

impl std::fmt::Display for MaterialType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.key())
    }
}

impl FromStr for MaterialType {
    type Err = CalcError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let key = s.trim();
        MaterialType::ALL
            .iter()
            .copied()
            .find(|material| material.key().to_lowercase() == key.to_lowercase())
            .ok_or_else(|| CalcError::unknown_material(s))
    }
}

/// Physical properties of a material
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct MaterialProfile {
    pub material: MaterialType,
    /// Density (kg/m³)
    pub density_kg_m3: f64,
    /// Yield strength Fy (MPa)
    pub yield_strength_mpa: f64,
    /// Modulus of elasticity E (MPa)
    pub youngs_modulus_mpa: f64,
    /// Linear thermal expansion coefficient (1/K)
    pub thermal_expansion: f64,
}

static REGISTRY: Lazy<[MaterialProfile; 5]> = Lazy::new(|| {
    [
        // ASTM A36 equivalent
        MaterialProfile {
            material: MaterialType::CarbonSteel,
            density_kg_m3: 7850.0,
            yield_strength_mpa: 250.0,
            youngs_modulus_mpa: 210_000.0,
            thermal_expansion: 12e-6,
        },
        MaterialProfile {
            material: MaterialType::GalvanizedSteel,
            density_kg_m3: 7850.0,
            yield_strength_mpa: 250.0,
            youngs_modulus_mpa: 210_000.0,
            thermal_expansion: 12e-6,
        },
        // AISI 304
        MaterialProfile {
            material: MaterialType::StainlessSteel,
            density_kg_m3: 8000.0,
            yield_strength_mpa: 210.0,
            youngs_modulus_mpa: 193_000.0,
            thermal_expansion: 17.3e-6,
        },
        // 6061-T6, approximate
        MaterialProfile {
            material: MaterialType::Aluminum,
            density_kg_m3: 2700.0,
            yield_strength_mpa: 145.0,
            youngs_modulus_mpa: 70_000.0,
            thermal_expansion: 23e-6,
        },
        // Pultruded profile
        MaterialProfile {
            material: MaterialType::Frp,
            density_kg_m3: 1800.0,
            yield_strength_mpa: 150.0,
            youngs_modulus_mpa: 25_000.0,
            thermal_expansion: 8e-6,
        },
    ]
});

/// Get the properties of a material.
pub fn lookup(material: MaterialType) -> &'static MaterialProfile {
    &REGISTRY[material.index()]
}

/// Get the properties for a trade-name key such as `"Aço inox"`.
pub fn lookup_key(key: &str) -> CalcResult<&'static MaterialProfile> {
    let material: MaterialType = key.parse()?;
    Ok(lookup(material))
}
