use serde::Serialize;

use crate::input::{Dataset, InputError};
use crate::model::domains::ordered_domains;
use crate::model::profile::AnalysisProfile;
use crate::pipeline::stage1_clean::{CleanRequest, SelectionAudit, run_clean};
use crate::stats::correlation::{PearsonResult, pearson};
use crate::stats::interpret::{CorrelationStrength, KappaAgreement};
use crate::stats::kappa::cohen_kappa;

const RELIABILITY_ORDER: &[&str] = &[
    "UWOMSA_A",
    "UWOMSA_B",
    "UWOMSA_C",
    "Instrument",
    "RfT",
    "TnM",
    "Flow",
    "Knowledge",
];

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ReliabilityRow {
    pub domain: String,
    pub primary_column: String,
    pub secondary_column: String,
    pub n: usize,
    pub pearson: Option<PearsonResult>,
    pub strength: Option<CorrelationStrength>,
    pub kappa: Option<f64>,
    pub agreement: Option<KappaAgreement>,
}

#[derive(Debug, Clone)]
pub struct ReliabilityOutput {
    pub rows: Vec<ReliabilityRow>,
    /// One audit per rater pair; rows are dropped pairwise.
    pub audits: Vec<SelectionAudit>,
    pub warnings: Vec<String>,
}

/// Both raters' columns for every domain, in report order.
pub fn reliability_columns(profile: &AnalysisProfile) -> Vec<String> {
    ordered_domains(RELIABILITY_ORDER)
        .into_iter()
        .flat_map(|d| [profile.primary_column(d), profile.secondary_column(d)])
        .collect()
}

pub fn run_reliability(
    dataset: &Dataset,
    profile: &AnalysisProfile,
) -> Result<ReliabilityOutput, InputError> {
    let domains = ordered_domains(RELIABILITY_ORDER);
    let mut rows = Vec::with_capacity(domains.len());
    let mut audits = Vec::with_capacity(domains.len());
    let mut warnings = Vec::new();

    for domain in domains {
        let primary = profile.primary_column(domain);
        let secondary = profile.secondary_column(domain);
        let columns = [primary.clone(), secondary.clone()];
        let scope = format!("reliability:{}", domain.key);
        let selection = run_clean(
            dataset,
            profile,
            &CleanRequest {
                scope: &scope,
                columns: &columns,
                labelled: false,
            },
        )?;
        let a = selection.column(&primary).unwrap_or_default();
        let b = selection.column(&secondary).unwrap_or_default();

        let pearson = match pearson(a, b) {
            Ok(res) => Some(res),
            Err(err) => {
                let msg = format!("{scope}: pearson: {err}");
                tracing::warn!("{msg}");
                warnings.push(msg);
                None
            }
        };
        let kappa = match cohen_kappa(a, b) {
            Ok(k) => Some(k),
            Err(err) => {
                let msg = format!("{scope}: kappa: {err}");
                tracing::warn!("{msg}");
                warnings.push(msg);
                None
            }
        };

        rows.push(ReliabilityRow {
            domain: domain.reliability_label.to_string(),
            primary_column: primary,
            secondary_column: secondary,
            n: selection.len(),
            strength: pearson.map(|p| CorrelationStrength::from_r(p.r)),
            pearson,
            agreement: kappa.map(KappaAgreement::from_kappa),
            kappa,
        });
        audits.push(selection.audit().clone());
    }

    Ok(ReliabilityOutput {
        rows,
        audits,
        warnings,
    })
}

#[cfg(test)]
#[path = "../../tests/src_inline/pipeline/stage3_reliability.rs"]
mod tests;
