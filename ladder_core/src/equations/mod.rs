//! # Structural Equations
//!
//! The few mechanics formulas the ladder checks rely on, kept in one place
//! so each can be verified against its reference.
//!
//! ## Modules
//!
//! - [`beam`] - Simply-supported rung bending (moment, stress)
//! - [`section`] - Cross-section properties (A, I)
//!
//! ## Sign Conventions
//!
//! - **Loads**: Positive downward (gravity direction)
//! - **Moment**: Positive causes tension on bottom fiber (sagging)

pub mod beam;
pub mod section;

pub use beam::{bending_stress, midspan_point_load_moment};
pub use section::{circular_area, circular_moment_of_inertia, rectangular_area};
