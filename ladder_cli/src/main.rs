//! # MarinheiroPro CLI
//!
//! Terminal front end for the fixed-ladder engine. Loads a ladder from JSON
//! (or starts from the default ladder), applies command-line overrides,
//! and prints the compliance findings and calculation.
//!
//! ```text
//! ladder_cli --standard OSHA1910_27 --height 8000
//! ladder_cli --params as_built.json --mode audit --bom --dxf ladder.dxf
//! ladder_cli --params design.json --json > report.json
//! ```
//!
//! In design mode, `--standard` and `--mode design` pull the standard's
//! default geometry before any explicit dimension flags are applied.

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::{Parser, ValueEnum};
use serde::de::DeserializeOwned;
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use ladder_core::export::{build_prompt, generate_dxf};
use ladder_core::materials::MaterialType;
use ladder_core::standards::TechnicalStandard;
use ladder_core::{assessment, AppMode, CalcError, CalcResult, EngineSettings, LadderParameters, LadderReport};

#[derive(Debug, Clone, Copy, ValueEnum)]
enum ModeArg {
    Design,
    Audit,
}

impl From<ModeArg> for AppMode {
    fn from(mode: ModeArg) -> Self {
        match mode {
            ModeArg::Design => AppMode::Design,
            ModeArg::Audit => AppMode::Audit,
        }
    }
}

#[derive(Debug, Parser)]
#[command(name = "ladder_cli", version, about = "Fixed-ladder compliance and structural checks")]
struct Args {
    /// Ladder parameters as JSON (defaults to the reference ladder)
    #[arg(long, value_name = "FILE")]
    params: Option<PathBuf>,

    /// Engine settings as JSON
    #[arg(long, value_name = "FILE")]
    settings: Option<PathBuf>,

    /// Standard key: NR12, NBR14718, ISO14122_4, OSHA1910_27
    #[arg(long)]
    standard: Option<String>,

    /// Material key, e.g. "Aço inox"
    #[arg(long)]
    material: Option<String>,

    #[arg(long, value_enum)]
    mode: Option<ModeArg>,

    /// Total climb height (mm)
    #[arg(long)]
    height: Option<f64>,

    /// Clear width between stringers (mm)
    #[arg(long)]
    width: Option<f64>,

    /// Rung pitch (mm)
    #[arg(long)]
    spacing: Option<f64>,

    /// Rung diameter (mm)
    #[arg(long)]
    diameter: Option<f64>,

    /// Distance to wall or nearest obstacle (mm)
    #[arg(long)]
    wall_distance: Option<f64>,

    /// Declare whether a cage is installed
    #[arg(long)]
    cage: Option<bool>,

    /// Print the bill of materials
    #[arg(long)]
    bom: bool,

    /// Write a DXF drawing to this path
    #[arg(long, value_name = "FILE")]
    dxf: Option<PathBuf>,

    /// Print the narrative report prompt
    #[arg(long, conflicts_with = "json")]
    prompt: bool,

    /// Print the full report as JSON instead of text
    #[arg(long)]
    json: bool,
}

fn init_tracing() {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "ladder_cli=info,ladder_core=warn".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();
}

fn read_json<T: DeserializeOwned>(path: &Path) -> CalcResult<T> {
    let text = fs::read_to_string(path)
        .map_err(|e| CalcError::file_error("read", path.display().to_string(), e.to_string()))?;
    Ok(serde_json::from_str(&text)?)
}

/// Build the ladder from the parameter file and flag overrides.
fn build_parameters(args: &Args) -> Result<LadderParameters> {
    let mut params: LadderParameters = match &args.params {
        Some(path) => read_json(path).with_context(|| format!("loading parameters from {}", path.display()))?,
        None => LadderParameters::default(),
    };

    if let Some(height) = args.height {
        params.total_height = height;
    }
    if let Some(material) = &args.material {
        params.material = material.parse::<MaterialType>()?;
    }

    // Mode and standard changes re-apply design defaults, so they come
    // before explicit dimensions.
    if let Some(mode) = args.mode {
        params.mode = mode.into();
    }
    if let Some(standard) = &args.standard {
        params.standard = standard.parse::<TechnicalStandard>()?;
    }
    if args.mode.is_some() || args.standard.is_some() {
        params.sync_with_standard();
    }

    if let Some(width) = args.width {
        params.width = width;
    }
    if let Some(spacing) = args.spacing {
        params.rung_spacing = spacing;
    }
    if let Some(diameter) = args.diameter {
        params.rung_diameter = diameter;
    }
    if let Some(wall_distance) = args.wall_distance {
        params.wall_distance = wall_distance;
    }
    if let Some(cage) = args.cage {
        params.has_cage = cage;
    }

    Ok(params)
}

fn status_icon(pass: bool) -> &'static str {
    if pass { "[OK]" } else { "[FAIL]" }
}

fn print_report(report: &LadderReport, show_bom: bool) {
    let params = &report.parameters;
    let calc = &report.calculation;
    let si = &calc.structural_integrity;

    println!("═══════════════════════════════════════");
    println!("  {} - {}", params.standard.display_name(), params.mode);
    println!("═══════════════════════════════════════");
    println!("  {} ({})", report.meta.standard_name, report.meta.standard_version);
    println!();
    println!("Input:");
    println!("  Height:   {:.0} mm (+{:.0} mm extension)", params.total_height, params.top_extension);
    println!("  Width:    {:.0} mm", params.width);
    println!("  Rungs:    Ø{:.0} mm @ {:.0} mm", params.rung_diameter, params.rung_spacing);
    println!("  Wall:     {:.0} mm", params.wall_distance);
    println!("  Cage:     {}", if params.has_cage { "installed" } else { "none" });
    println!("  Material: {}", params.material);
    println!();
    println!("Compliance:");
    for finding in &report.findings {
        println!(
            "  {:<7} {:<17} {:<10} limit {:<22} {} [{}]",
            status_icon(finding.is_valid),
            finding.id.to_string(),
            finding.value.to_string(),
            finding.limit,
            finding.clause,
            finding.severity
        );
        if !finding.is_valid {
            println!("          risk: {}", finding.associated_risk);
        }
    }
    println!();
    println!("Calculation:");
    println!("  Rungs:          {} @ {:.1} mm", calc.total_rungs, calc.actual_rung_spacing);
    println!(
        "  Cage required:  {} (above {:.0} mm)",
        if calc.cage_mandatory { "yes" } else { "no" },
        calc.max_height_without_cage
    );
    println!("  Platform req.:  {}", if calc.platform_mandatory { "yes" } else { "no" });
    println!("  Weight:         {:.2} kg", calc.weight_estimated_kg);
    println!("  Base reaction:  {:.2} kN", calc.reaction_force_base_kn);
    println!(
        "  Rung stress:    {:.2} / {:.0} MPa, SF = {:.2} {}",
        si.max_stress_rung_mpa,
        si.yield_strength_mpa,
        si.safety_factor,
        status_icon(si.meets_minimum)
    );
    if report.missing_cage() {
        println!("  WARNING: cage required by the standard but not installed");
    }
    if report.missing_platform() {
        println!("  WARNING: rest platform required by the standard but not installed");
    }

    if show_bom {
        println!();
        println!("Bill of materials:");
        for item in &report.bom {
            match item.total_length_m {
                Some(length) => println!(
                    "  {:>3} {} {:<24} {:>7.2} m  {}",
                    item.quantity, item.unit, item.part, length, item.specification
                ),
                None => println!(
                    "  {:>3} {} {:<24} {:>9}  {}",
                    item.quantity, item.unit, item.part, "", item.specification
                ),
            }
        }
    }

    println!();
    println!("═══════════════════════════════════════");
    println!("  RESULT: {}", if report.passes() { "PASS" } else { "FAIL" });
    println!("═══════════════════════════════════════");
}

fn main() -> Result<()> {
    init_tracing();
    let args = Args::parse();

    let settings: EngineSettings = match &args.settings {
        Some(path) => read_json(path).with_context(|| format!("loading settings from {}", path.display()))?,
        None => EngineSettings::default(),
    };
    let params = build_parameters(&args)?;

    let report = assessment::assess_with(&params, &settings)?;
    let drawing = match &args.dxf {
        Some(_) => Some(generate_dxf(&params)?),
        None => None,
    };

    if args.json {
        println!("{}", serde_json::to_string_pretty(&report)?);
    } else {
        print_report(&report, args.bom);
    }

    if let (Some(path), Some(drawing)) = (&args.dxf, drawing) {
        fs::write(path, drawing)
            .map_err(|e| CalcError::file_error("write", path.display().to_string(), e.to_string()))?;
        info!(path = %path.display(), "wrote DXF drawing");
    }

    if args.prompt {
        println!();
        println!("{}", build_prompt(&params, &report.findings)?);
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(argv: &[&str]) -> Args {
        Args::parse_from(std::iter::once("ladder_cli").chain(argv.iter().copied()))
    }

    #[test]
    fn test_defaults_without_flags() {
        let params = build_parameters(&parse(&[])).unwrap();
        assert_eq!(params, LadderParameters::default());
    }

    #[test]
    fn test_standard_flag_applies_design_defaults() {
        let params = build_parameters(&parse(&["--standard", "OSHA1910_27"])).unwrap();
        assert_eq!(params.standard, TechnicalStandard::Osha1910_27);
        assert_eq!(params.width, 457.0);
        assert_eq!(params.wall_distance, 178.0);
    }

    #[test]
    fn test_explicit_dimension_wins_over_defaults() {
        let params = build_parameters(&parse(&["--standard", "ISO14122_4", "--width", "420"])).unwrap();
        assert_eq!(params.width, 420.0);
        assert_eq!(params.rung_diameter, 30.0);
    }

    #[test]
    fn test_audit_mode_keeps_dimensions() {
        let params =
            build_parameters(&parse(&["--mode", "audit", "--standard", "OSHA1910_27", "--cage", "false"])).unwrap();
        assert_eq!(params.mode, AppMode::Audit);
        assert_eq!(params.width, 450.0);
        assert!(!params.has_cage);
    }

    #[test]
    fn test_unknown_standard_is_error() {
        let err = build_parameters(&parse(&["--standard", "EN131"])).unwrap_err();
        assert!(err.to_string().contains("EN131"));
    }

    #[test]
    fn test_prompt_conflicts_with_json() {
        let err = Args::try_parse_from(["ladder_cli", "--json", "--prompt"]).unwrap_err();
        assert_eq!(err.kind(), clap::error::ErrorKind::ArgumentConflict);
        assert!(Args::try_parse_from(["ladder_cli", "--prompt"]).is_ok());
    }

    #[test]
    fn test_missing_params_file() {
        let err = build_parameters(&parse(&["--params", "/nonexistent/ladder.json"])).unwrap_err();
        assert!(format!("{:#}", err).contains("File error"));
    }
}
