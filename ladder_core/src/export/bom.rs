//! # Bill of Materials
//!
//! Part list derived from the ladder geometry: stringers, rungs, cage hoops
//! and verticals when a cage is fitted, and wall brackets with anchors.
//! Lengths are cut lengths in metres, with no allowance for waste.

use serde::{Deserialize, Serialize};

use crate::calculations::geometry::rung_layout;
use crate::parameters::LadderParameters;
use crate::units::{Meters, Millimeters};

/// Hoop pitch along the cage (mm)
const HOOP_PITCH_MM: f64 = 1000.0;
/// Cage vertical bars
const CAGE_VERTICALS: u32 = 5;
/// Bracket pair pitch along the stringers (mm)
const BRACKET_PITCH_MM: f64 = 1500.0;

/// One line of the bill of materials
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BomItem {
    pub part: String,
    pub specification: String,
    pub quantity: u32,
    pub unit: String,
    /// Total cut length (m), for linear stock only
    #[serde(skip_serializing_if = "Option::is_none")]
    pub total_length_m: Option<f64>,
}

impl BomItem {
    fn pieces(part: &str, specification: String, quantity: u32, total_length: Option<Millimeters>) -> Self {
        BomItem {
            part: part.to_string(),
            specification,
            quantity,
            unit: "un".to_string(),
            total_length_m: total_length.map(|mm| Meters::from(mm).value()),
        }
    }
}

/// Pieces needed to cover `length` at `pitch`, saturating at `u32::MAX`
fn ceil_count(length: f64, pitch: f64) -> u32 {
    (length / pitch).ceil().max(0.0) as u32
}

/// Derive the bill of materials for a ladder.
///
/// ```rust
/// use ladder_core::export::bom::calculate_bom;
/// use ladder_core::parameters::LadderParameters;
///
/// let bom = calculate_bom(&LadderParameters::default());
/// assert_eq!(bom[1].part, "Degrau");
/// assert_eq!(bom[1].quantity, 21);
/// ```
pub fn calculate_bom(params: &LadderParameters) -> Vec<BomItem> {
    let material = params.material.key();
    let profile_suffix = if params.material.is_composite() {
        " (Perfil Pultrudado)"
    } else {
        " (Perfil Metálico)"
    };

    let mut items = Vec::new();

    let stringer_height = params.total_height + params.top_extension;
    items.push(BomItem::pieces(
        "Montante Lateral",
        format!("Barra chata ou perfil U em {}{}", material, profile_suffix),
        2,
        Some(Millimeters(stringer_height * 2.0)),
    ));

    let rungs = rung_layout(params.total_height, params.rung_spacing).total_rungs;
    items.push(BomItem::pieces(
        "Degrau",
        format!("Barra redonda Ø{}mm em {}", params.rung_diameter, material),
        rungs,
        Some(Millimeters(rungs as f64 * params.width)),
    ));

    if params.has_cage {
        let cage_height = params.caged_height();
        let hoops = ceil_count(cage_height, HOOP_PITCH_MM).saturating_add(1);
        let hoop_circumference = std::f64::consts::PI * params.cage_diameter;

        items.push(BomItem::pieces(
            "Aro da Gaiola",
            format!("Barra chata em {}", material),
            hoops,
            Some(Millimeters(hoops as f64 * hoop_circumference)),
        ));
        items.push(BomItem::pieces(
            "Barra Vertical Gaiola",
            format!("Barra chata ou redonda em {}", material),
            CAGE_VERTICALS,
            Some(Millimeters(CAGE_VERTICALS as f64 * cage_height)),
        ));
    }

    let brackets = ceil_count(params.total_height, BRACKET_PITCH_MM).saturating_mul(2);
    items.push(BomItem::pieces(
        "Suporte de Fixação",
        format!("Cantoneira ou suporte custom {}", params.installation_type.label()),
        brackets,
        None,
    ));
    items.push(BomItem::pieces(
        "Chumbadores / Parafusos",
        "Parabolt ou Parafuso Sextavado Gr.5".to_string(),
        brackets.saturating_mul(2),
        None,
    ));

    items
}
