//! # Export Collaborators
//!
//! Consumers of the engine that turn a ladder into deliverables. They read
//! parameters and findings and never feed anything back into the engine.
//!
//! - [`bom`] - Bill of materials
//! - [`dxf`] - DXF line drawing
//! - [`narrative`] - Prompt and fallback handling for the written technical opinion

pub mod bom;
pub mod dxf;
pub mod narrative;

pub use bom::{calculate_bom, BomItem};
pub use dxf::generate_dxf;
pub use narrative::{build_prompt, technical_advice, NarrativeProvider, FALLBACK_MESSAGE};
