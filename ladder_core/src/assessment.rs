//! # Ladder Assessment
//!
//! One-call evaluation that bundles everything a report needs: the
//! parameters as evaluated, the compliance findings, the calculation and
//! the bill of materials.
//!
//! ## Structure
//!
//! ```text
//! LadderReport
//! ├── meta: ReportMetadata (id, schema version, timestamp, standard revision)
//! ├── parameters: LadderParameters
//! ├── findings: Vec<ValidationFinding>
//! ├── calculation: CalculationResult
//! └── bom: Vec<BomItem>
//! ```
//!
//! ## Example
//!
//! ```rust
//! use ladder_core::assessment::assess;
//! use ladder_core::parameters::LadderParameters;
//!
//! let report = assess(&LadderParameters::default()).unwrap();
//! assert!(report.passes());
//! assert!(!report.missing_cage());
//!
//! let json = serde_json::to_string_pretty(&report).unwrap();
//! assert!(json.contains("\"findings\""));
//! ```

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::calculations::{calculate_with, CalculationResult};
use crate::errors::CalcResult;
use crate::export::bom::{calculate_bom, BomItem};
use crate::parameters::LadderParameters;
use crate::settings::EngineSettings;
use crate::standards;
use crate::validation::{critical_failures, failures, validate, ValidationFinding};

/// Current schema version for serialized reports
pub const SCHEMA_VERSION: &str = "0.1.0";

/// Report header
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ReportMetadata {
    pub id: Uuid,
    /// Schema version (for consumers parsing stored reports)
    pub version: String,
    pub generated: DateTime<Utc>,
    /// Full name of the standard checked against
    pub standard_name: String,
    pub standard_version: String,
    pub standard_last_update: NaiveDate,
}

/// Complete evaluation of one ladder
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LadderReport {
    pub meta: ReportMetadata,
    pub parameters: LadderParameters,
    pub findings: Vec<ValidationFinding>,
    pub calculation: CalculationResult,
    pub bom: Vec<BomItem>,
}

impl LadderReport {
    /// No critical finding failed and the rung safety factor is adequate
    pub fn passes(&self) -> bool {
        critical_failures(&self.findings).next().is_none() && !self.calculation.needs_attention()
    }

    /// The standard requires a cage at this height but none is declared
    pub fn missing_cage(&self) -> bool {
        self.calculation.cage_mandatory && !self.parameters.has_cage
    }

    /// The standard requires a rest platform but none is declared
    pub fn missing_platform(&self) -> bool {
        self.calculation.platform_mandatory && !self.parameters.has_platform
    }

    pub fn failed_findings(&self) -> Vec<&ValidationFinding> {
        failures(&self.findings).collect()
    }
}

/// Assess a ladder with the default engine settings.
pub fn assess(params: &LadderParameters) -> CalcResult<LadderReport> {
    assess_with(params, &EngineSettings::default())
}

/// Assess a ladder with explicit engine settings.
pub fn assess_with(params: &LadderParameters, settings: &EngineSettings) -> CalcResult<LadderReport> {
    let calculation = calculate_with(params, settings)?;
    let profile = standards::lookup(params.standard);

    Ok(LadderReport {
        meta: ReportMetadata {
            id: Uuid::new_v4(),
            version: SCHEMA_VERSION.to_string(),
            generated: Utc::now(),
            standard_name: profile.name.to_string(),
            standard_version: profile.version.to_string(),
            standard_last_update: profile.last_update,
        },
        parameters: params.clone(),
        findings: validate(params),
        calculation,
        bom: calculate_bom(params),
    })
}
