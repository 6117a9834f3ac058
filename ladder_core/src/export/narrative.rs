//! # Narrative Technical Report
//!
//! Builds the request sent to an external text-generation service for a
//! written engineering opinion, and turns its answer (or its failure) into
//! display text. The service itself lives behind [`NarrativeProvider`];
//! this crate performs no network I/O.
//!
//! The prompt frames the ladder differently per mode: a design review asks
//! whether the project is ready to fabricate, an audit asks whether the
//! installed ladder may stay in service.
//!
//! ```rust
//! use ladder_core::errors::CalcResult;
//! use ladder_core::export::narrative::{technical_advice, NarrativeProvider, FALLBACK_MESSAGE};
//! use ladder_core::parameters::LadderParameters;
//! use ladder_core::validation::validate;
//!
//! struct Offline;
//!
//! impl NarrativeProvider for Offline {
//!     fn generate(&self, _prompt: &str) -> CalcResult<String> {
//!         Err(ladder_core::CalcError::narrative_unavailable("offline"))
//!     }
//! }
//!
//! let params = LadderParameters::default();
//! let findings = validate(&params);
//! assert_eq!(technical_advice(&Offline, &params, &findings), FALLBACK_MESSAGE);
//! ```

use serde::Serialize;
use tracing::warn;

use crate::errors::CalcResult;
use crate::parameters::{AppMode, LadderParameters};
use crate::standards;
use crate::validation::{failures, FindingValue, ValidationFinding};

/// Shown in place of the report when the service fails
pub const FALLBACK_MESSAGE: &str =
    "Erro no processamento da auditoria assistida. Verifique os dados de entrada.";

/// External text-generation service.
///
/// Implementations own transport, credentials and timeouts.
pub trait NarrativeProvider {
    fn generate(&self, prompt: &str) -> CalcResult<String>;
}

/// Non-conformity entry as presented to the service
#[derive(Serialize)]
struct NonConformity<'a> {
    clause: &'a str,
    erro: &'a str,
    valor_real: &'a FindingValue,
    risco: &'a str,
}

/// Build the prompt for a ladder and its findings.
pub fn build_prompt(params: &LadderParameters, findings: &[ValidationFinding]) -> CalcResult<String> {
    let standard_name = standards::lookup(params.standard).name;
    let geometry = serde_json::to_string(params)?;

    let failed: Vec<NonConformity> = failures(findings)
        .map(|f| NonConformity {
            clause: &f.clause,
            erro: &f.description,
            valor_real: &f.value,
            risco: &f.associated_risk,
        })
        .collect();
    let non_conformities = if failed.is_empty() {
        "Em conformidade com os critérios automáticos.".to_string()
    } else {
        serde_json::to_string(&failed)?
    };

    let (analysis, context, focus, action, conclusion) = match params.mode {
        AppMode::Design => (
            "ANÁLISE DE PROJETO",
            "A escada está em fase de dimensionamento.",
            "Foque na otimização e validação normativa do projeto.",
            "Sugira ajustes nas dimensões para garantir a segurança e economia.",
            "O projeto está apto para fabricação?",
        ),
        AppMode::Audit => (
            "AUDITORIA TÉCNICA (AS-BUILT)",
            "A escada já está instalada e os dados representam a condição real de campo.",
            "Foque no RISCO OPERACIONAL e na RESPONSABILIDADE CIVIL/TRABALHISTA das não-conformidades encontradas.",
            "Sugira MEDIDAS CORRETIVAS para adequação da estrutura existente (ex: instalação de dispositivos antiqueda, sinalização, ou reconstrução).",
            "A escada pode continuar em uso? (Interdição, Uso Restrito ou Liberada)",
        ),
    };

    let mut prompt = String::new();
    prompt.push_str(&format!(
        "Como engenheiro mecânico sênior e especialista em normas de acesso industrial, \
         realize uma {} desta escada marinheiro.\n\n",
        analysis
    ));
    prompt.push_str(&format!("CONTEXTO: {}\n\n", context));
    prompt.push_str("PARAMETROS:\n");
    prompt.push_str(&format!("- Norma de Referência: {}\n", standard_name));
    prompt.push_str(&format!("- Geometria: {}\n", geometry));
    prompt.push_str(&format!("- Ambiente: {}\n\n", params.environment.label()));
    prompt.push_str(&format!("ITENS DE NÃO-CONFORMIDADE:\n{}\n\n", non_conformities));
    prompt.push_str("DIRETRIZES DO PARECER:\n");
    prompt.push_str(&format!("1. {}\n", focus));
    prompt.push_str(&format!("2. Liste as cláusulas da {} que foram violadas.\n", standard_name));
    prompt.push_str(&format!("3. {}\n", action));
    prompt.push_str(&format!(
        "4. Avalie o estado de conservação provável considerando o material ({}) no ambiente ({}).\n",
        params.material,
        params.environment.label()
    ));
    prompt.push_str(&format!("5. Conclusão Técnica: {}\n\n", conclusion));
    prompt.push_str("RESPONDA EM PORTUGUÊS (BR), em formato Markdown técnico e objetivo.\n");

    Ok(prompt)
}

/// Request a written opinion, falling back to [`FALLBACK_MESSAGE`].
///
/// Validation and calculation results are unaffected by a failure here.
pub fn technical_advice(
    provider: &dyn NarrativeProvider,
    params: &LadderParameters,
    findings: &[ValidationFinding],
) -> String {
    let response = build_prompt(params, findings).and_then(|prompt| provider.generate(&prompt));
    match response {
        Ok(text) => text,
        Err(err) => {
            warn!(error = %err, code = err.error_code(), "narrative report failed");
            FALLBACK_MESSAGE.to_string()
        }
    }
}
