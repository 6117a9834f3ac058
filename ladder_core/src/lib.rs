//! # ladder_core - Fixed-Ladder Standards Engine
//!
//! `ladder_core` is the computational heart of MarinheiroPro. It checks an
//! industrial fixed ladder ("escada marinheiro") against a regional safety
//! standard and runs a simplified structural check of its rungs. All inputs
//! and outputs are JSON-serializable.
//!
//! ## Design Philosophy
//!
//! - **Stateless**: Pure functions over a parameter struct and two static registries
//! - **Report, don't reject**: Out-of-range design values become failing findings
//! - **Rich Errors**: Structured error types for the few truly invalid calls
//! - **JSON-First**: All types implement Serialize
//!
//! ## Quick Start
//!
//! ```rust
//! use ladder_core::parameters::LadderParameters;
//! use ladder_core::standards::TechnicalStandard;
//! use ladder_core::{calculate, validate};
//!
//! let mut params = LadderParameters::default();
//! params.set_standard(TechnicalStandard::Iso14122_4);
//!
//! let findings = validate(&params);
//! let result = calculate(&params).unwrap();
//!
//! assert!(findings.iter().all(|f| f.is_valid));
//! println!("Safety factor: {}", result.structural_integrity.safety_factor);
//! ```
//!
//! ## Modules
//!
//! - [`standards`] - Normative limits and clause citations per standard
//! - [`materials`] - Material properties
//! - [`parameters`] - Ladder input model and Design/Audit reconciliation
//! - [`validation`] - Compliance rules and findings
//! - [`calculations`] - Rung layout, mass, reaction and rung bending check
//! - [`equations`] - Structural mechanics formulas
//! - [`export`] - Bill of materials, DXF drawing, narrative report prompt
//! - [`assessment`] - Combined report
//! - [`settings`] - Engine constants
//! - [`units`] - Type-safe unit wrappers
//! - [`errors`] - Structured error types

pub mod assessment;
pub mod calculations;
pub mod equations;
pub mod errors;
pub mod export;
pub mod materials;
pub mod parameters;
pub mod settings;
pub mod standards;
pub mod units;
pub mod validation;

// Re-export commonly used types at crate root for convenience
pub use assessment::{assess, LadderReport};
pub use calculations::{calculate, calculate_with, CalculationResult};
pub use errors::{CalcError, CalcResult};
pub use parameters::{AppMode, LadderParameters};
pub use settings::EngineSettings;
pub use validation::{validate, Severity, ValidationFinding};
