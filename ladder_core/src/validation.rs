//! # Compliance Validation
//!
//! Checks a ladder against the fixed rule set of its selected standard.
//! Every call evaluates all six rules and returns one finding per rule, in
//! the same order every time, so reports and lists stay stable as
//! parameters change.
//!
//! | Rule | Passes when | Severity |
//! |------|-------------|----------|
//! | `width` | min ≤ width ≤ max | critical |
//! | `rung_spacing` | min ≤ spacing ≤ max | critical |
//! | `wall_dist` | distance ≥ min | critical |
//! | `rung_diameter` | diameter ≥ min | warning |
//! | `cage_requirement` | height ≤ threshold, or a cage is fitted | critical |
//! | `cage_start` | no cage, or start height within bounds | warning |
//!
//! `cage_requirement` reads the declared `has_cage`, not the height-derived
//! `cage_mandatory` of the calculation result.
//!
//! ## Example
//!
//! ```rust
//! use ladder_core::parameters::LadderParameters;
//! use ladder_core::validation::{self, RuleId};
//!
//! let params = LadderParameters { width: 700.0, ..Default::default() };
//! let findings = validation::validate(&params);
//!
//! assert_eq!(findings.len(), 6);
//! assert_eq!(findings[0].id, RuleId::Width);
//! assert!(!findings[0].is_valid);
//! assert_eq!(findings[0].limit, "400-600mm");
//! ```

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::parameters::LadderParameters;
use crate::standards::{self, ClauseCategory, StandardProfile};

/// Identifier of a compliance rule
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RuleId {
    Width,
    RungSpacing,
    #[serde(rename = "wall_dist")]
    WallDistance,
    RungDiameter,
    CageRequirement,
    CageStart,
}

impl RuleId {
    /// All rules in evaluation (and report) order
    pub const ALL: [RuleId; 6] = [
        RuleId::Width,
        RuleId::RungSpacing,
        RuleId::WallDistance,
        RuleId::RungDiameter,
        RuleId::CageRequirement,
        RuleId::CageStart,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            RuleId::Width => "width",
            RuleId::RungSpacing => "rung_spacing",
            RuleId::WallDistance => "wall_dist",
            RuleId::RungDiameter => "rung_diameter",
            RuleId::CageRequirement => "cage_requirement",
            RuleId::CageStart => "cage_start",
        }
    }

    pub fn severity(&self) -> Severity {
        match self {
            RuleId::Width | RuleId::RungSpacing | RuleId::WallDistance | RuleId::CageRequirement => {
                Severity::Critical
            }
            RuleId::RungDiameter | RuleId::CageStart => Severity::Warning,
        }
    }

    /// Which clause of the standard the rule enforces
    pub fn clause_category(&self) -> ClauseCategory {
        match self {
            RuleId::Width => ClauseCategory::Width,
            RuleId::RungSpacing => ClauseCategory::Spacing,
            RuleId::WallDistance => ClauseCategory::Wall,
            RuleId::RungDiameter => ClauseCategory::Rungs,
            RuleId::CageRequirement | RuleId::CageStart => ClauseCategory::Cage,
        }
    }

    pub fn description(&self) -> &'static str {
        match self {
            RuleId::Width => "Largura útil (espaço livre)",
            RuleId::RungSpacing => "Passo vertical constante",
            RuleId::WallDistance => "Afastamento de obstáculos fixos",
            RuleId::RungDiameter => "Seção transversal do degrau",
            RuleId::CageRequirement => "Requisito de Proteção Coletiva",
            RuleId::CageStart => "Altura de início da proteção",
        }
    }

    /// Consequence of failing the rule
    pub fn associated_risk(&self) -> &'static str {
        match self {
            RuleId::Width => "Risco de aprisionamento lateral ou instabilidade por largura excessiva.",
            RuleId::RungSpacing => "Queda em altura por fadiga ou perda de ritmo (tropeço) na ascensão.",
            RuleId::WallDistance => "Apoio plantar incompleto; risco severo de escorregamento do calçado.",
            RuleId::RungDiameter => {
                "Fadiga nas mãos por empunhadura deficiente e risco de flambagem/flexão excessiva."
            }
            RuleId::CageRequirement => "Queda livre desimpedida com impacto direto no solo (fatalidade).",
            RuleId::CageStart => {
                "Altura baixa dificulta acesso; altura elevada permite queda lateral antes da retenção."
            }
        }
    }
}

impl std::fmt::Display for RuleId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// How serious a failed rule is
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    Info,
    Warning,
    Critical,
}

impl std::fmt::Display for Severity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Severity::Info => write!(f, "info"),
            Severity::Warning => write!(f, "warning"),
            Severity::Critical => write!(f, "critical"),
        }
    }
}

/// Observed value a rule was checked against
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum FindingValue {
    /// A measured dimension (mm)
    Millimeters(f64),
    /// A presence/state description
    Text(String),
}

impl std::fmt::Display for FindingValue {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            FindingValue::Millimeters(mm) => write!(f, "{}mm", mm),
            FindingValue::Text(text) => write!(f, "{}", text),
        }
    }
}

/// Outcome of one rule for one evaluation.
///
/// Passing findings still carry value, limit and risk so every row of a
/// report has the same shape; callers show the risk only on failure.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ValidationFinding {
    pub id: RuleId,
    pub standard_code: String,
    pub clause: String,
    pub description: String,
    pub is_valid: bool,
    pub value: FindingValue,
    /// Human-readable limit, e.g. `"400-600mm"` or `"min. 150mm"`
    pub limit: String,
    pub severity: Severity,
    pub associated_risk: String,
}

impl ValidationFinding {
    /// Failed with critical severity
    pub fn is_critical_failure(&self) -> bool {
        !self.is_valid && self.severity == Severity::Critical
    }
}

fn range_limit(min: f64, max: f64) -> String {
    format!("{}-{}mm", min, max)
}

fn min_limit(min: f64) -> String {
    format!("min. {}mm", min)
}

fn within(value: f64, min: f64, max: f64) -> bool {
    value >= min && value <= max
}

fn evaluate(rule: RuleId, params: &LadderParameters, profile: &StandardProfile) -> ValidationFinding {
    let (is_valid, value, limit) = match rule {
        RuleId::Width => (
            within(params.width, profile.min_width, profile.max_width),
            FindingValue::Millimeters(params.width),
            range_limit(profile.min_width, profile.max_width),
        ),
        RuleId::RungSpacing => (
            within(params.rung_spacing, profile.min_rung_spacing, profile.max_rung_spacing),
            FindingValue::Millimeters(params.rung_spacing),
            range_limit(profile.min_rung_spacing, profile.max_rung_spacing),
        ),
        RuleId::WallDistance => (
            params.wall_distance >= profile.min_wall_distance,
            FindingValue::Millimeters(params.wall_distance),
            min_limit(profile.min_wall_distance),
        ),
        RuleId::RungDiameter => (
            params.rung_diameter >= profile.min_rung_diameter,
            FindingValue::Millimeters(params.rung_diameter),
            min_limit(profile.min_rung_diameter),
        ),
        RuleId::CageRequirement => (
            params.total_height <= profile.cage_required_above || params.has_cage,
            FindingValue::Text(if params.has_cage { "Instalada" } else { "Ausente" }.to_string()),
            format!("Obrigatória > {}mm", profile.cage_required_above),
        ),
        RuleId::CageStart => (
            !params.has_cage
                || within(params.cage_start_height, profile.cage_start_min, profile.cage_start_max),
            FindingValue::Millimeters(params.cage_start_height),
            range_limit(profile.cage_start_min, profile.cage_start_max),
        ),
    };

    ValidationFinding {
        id: rule,
        standard_code: profile.standard.code().to_string(),
        clause: profile.clause(rule.clause_category()).to_string(),
        description: rule.description().to_string(),
        is_valid,
        value,
        limit,
        severity: rule.severity(),
        associated_risk: rule.associated_risk().to_string(),
    }
}

/// Evaluate every rule against the ladder's standard.
///
/// Pure: the same parameters always yield the same findings in
/// [`RuleId::ALL`] order.
pub fn validate(params: &LadderParameters) -> Vec<ValidationFinding> {
    let profile = standards::lookup(params.standard);
    let findings: Vec<ValidationFinding> = RuleId::ALL
        .iter()
        .map(|&rule| evaluate(rule, params, profile))
        .collect();

    debug!(
        standard = %params.standard,
        failed = failures(&findings).count(),
        "validated ladder"
    );
    findings
}

/// Findings that did not pass
pub fn failures(findings: &[ValidationFinding]) -> impl Iterator<Item = &ValidationFinding> {
    findings.iter().filter(|f| !f.is_valid)
}

/// Findings that failed with critical severity
pub fn critical_failures(findings: &[ValidationFinding]) -> impl Iterator<Item = &ValidationFinding> {
    findings.iter().filter(|f| f.is_critical_failure())
}
