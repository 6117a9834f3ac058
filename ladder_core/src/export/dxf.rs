//! # DXF Export
//!
//! Minimal ASCII DXF drawing of the ladder: an ENTITIES section containing
//! only LINE entities, readable by any CAD package.
//!
//! - Layer `LADDER_FRONT`: front elevation at the origin (stringers, every
//!   rung at the nominal pitch, and the top of the extension)
//! - Layer `LADDER_SIDE`: side elevation of the cage, offset 500 mm to the
//!   right of the front view, only when a cage is fitted
//!
//! Coordinates are in millimetres. Ladders with more than
//! [`MAX_DRAWN_RUNGS`] rungs are rejected rather than drawn.

use crate::calculations::geometry::rung_layout;
use crate::errors::{CalcError, CalcResult};
use crate::parameters::LadderParameters;

const FRONT_LAYER: &str = "LADDER_FRONT";
const SIDE_LAYER: &str = "LADDER_SIDE";
/// Gap between the front view and the side view (mm)
const SIDE_VIEW_GAP_MM: f64 = 500.0;
/// Most rungs a drawing may contain
pub const MAX_DRAWN_RUNGS: u32 = 10_000;

struct DxfWriter {
    out: String,
}

impl DxfWriter {
    fn new() -> Self {
        DxfWriter {
            out: String::from("0\nSECTION\n2\nENTITIES\n"),
        }
    }

    fn line(&mut self, layer: &str, (x1, y1): (f64, f64), (x2, y2): (f64, f64)) {
        self.out.push_str(&format!(
            "0\nLINE\n8\n{}\n10\n{}\n20\n{}\n11\n{}\n21\n{}\n",
            layer, x1, y1, x2, y2
        ));
    }

    fn finish(mut self) -> String {
        self.out.push_str("0\nENDSEC\n0\nEOF\n");
        self.out
    }
}

/// Render the ladder as DXF text.
///
/// ```rust
/// use ladder_core::export::dxf::generate_dxf;
/// use ladder_core::parameters::LadderParameters;
///
/// let dxf = generate_dxf(&LadderParameters::default()).unwrap();
/// assert!(dxf.starts_with("0\nSECTION\n2\nENTITIES\n"));
/// assert!(dxf.ends_with("0\nEOF\n"));
/// ```
pub fn generate_dxf(params: &LadderParameters) -> CalcResult<String> {
    let layout = rung_layout(params.total_height, params.rung_spacing);
    if layout.total_rungs > MAX_DRAWN_RUNGS {
        return Err(CalcError::invalid_input(
            "total_height",
            params.total_height.to_string(),
            format!(
                "{} rungs at {} mm spacing exceeds the drawing limit of {}",
                layout.total_rungs, params.rung_spacing, MAX_DRAWN_RUNGS
            ),
        ));
    }

    let h = params.total_height;
    let w = params.width;
    let top = h + params.top_extension;

    let mut dxf = DxfWriter::new();

    dxf.line(FRONT_LAYER, (0.0, 0.0), (0.0, top));
    dxf.line(FRONT_LAYER, (w, 0.0), (w, top));

    for i in 0..=layout.intervals {
        let y = i as f64 * params.rung_spacing;
        dxf.line(FRONT_LAYER, (0.0, y), (w, y));
    }

    dxf.line(FRONT_LAYER, (0.0, top), (w, top));

    if params.has_cage {
        let stringer_x = w + SIDE_VIEW_GAP_MM + params.wall_distance;
        let cage_x = stringer_x + params.cage_diameter;

        dxf.line(SIDE_LAYER, (stringer_x, 0.0), (stringer_x, top));
        dxf.line(SIDE_LAYER, (cage_x, params.cage_start_height), (cage_x, h));
        dxf.line(SIDE_LAYER, (stringer_x, h), (cage_x, h));
    }

    Ok(dxf.finish())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn count_lines(dxf: &str, layer: &str) -> usize {
        dxf.matches(&format!("0\nLINE\n8\n{}\n", layer)).count()
    }

    #[test]
    fn test_front_view_line_count() {
        let params = LadderParameters {
            has_cage: false,
            ..Default::default()
        };
        let dxf = generate_dxf(&params).unwrap();
        // 2 stringers + 21 rungs + top
        assert_eq!(count_lines(&dxf, FRONT_LAYER), 24);
        assert_eq!(count_lines(&dxf, SIDE_LAYER), 0);
    }

    #[test]
    fn test_cage_side_view() {
        let dxf = generate_dxf(&LadderParameters::default()).unwrap();
        assert_eq!(count_lines(&dxf, SIDE_LAYER), 3);
        // Stringer side at 450 + 500 + 200
        assert!(dxf.contains("8\nLADDER_SIDE\n10\n1150\n20\n0\n11\n1150\n21\n7100\n"));
        // Outer cage line from cage start to landing at 1150 + 700
        assert!(dxf.contains("8\nLADDER_SIDE\n10\n1850\n20\n2500\n11\n1850\n21\n6000\n"));
    }

    #[test]
    fn test_rungs_at_nominal_pitch() {
        let params = LadderParameters {
            total_height: 1000.0,
            rung_spacing: 300.0,
            has_cage: false,
            ..Default::default()
        };
        let dxf = generate_dxf(&params).unwrap();
        assert!(dxf.contains("10\n0\n20\n900\n11\n450\n21\n900\n"));
        assert!(!dxf.contains("20\n1200\n"));
    }

    #[test]
    fn test_zero_spacing_draws_base_rung_only() {
        let params = LadderParameters {
            rung_spacing: 0.0,
            has_cage: false,
            ..Default::default()
        };
        let dxf = generate_dxf(&params).unwrap();
        assert_eq!(count_lines(&dxf, FRONT_LAYER), 4);
    }

    #[test]
    fn test_rejects_oversized_drawing() {
        let params = LadderParameters {
            rung_spacing: 1.0e-7,
            ..Default::default()
        };
        let err = generate_dxf(&params).unwrap_err();
        assert_eq!(err.error_code(), "INVALID_INPUT");

        let tall = LadderParameters {
            total_height: 1.0e13,
            ..Default::default()
        };
        assert!(generate_dxf(&tall).is_err());
    }

    #[test]
    fn test_drawing_limit_is_inclusive() {
        // 9999 intervals plus the base rung
        let params = LadderParameters {
            total_height: 9999.0,
            rung_spacing: 1.0,
            has_cage: false,
            ..Default::default()
        };
        let dxf = generate_dxf(&params).unwrap();
        assert_eq!(count_lines(&dxf, FRONT_LAYER), MAX_DRAWN_RUNGS as usize + 3);
    }
}
