use crate::model::domains::{DomainDef, Instrument, Rater, builtin_domains, domains_of};

pub const DEFAULT_INPUT: &str = "Mycrovascular OSATs (Responses).xlsx";

/// Fixed dataset layout and decision constants for one analysis run.
#[derive(Debug, Clone)]
pub struct AnalysisProfile {
    pub group_column: &'static str,
    pub expert_label: &'static str,
    pub operative_time_column: &'static str,
    pub primary_rater: Rater,
    pub secondary_rater: Rater,
    pub p_value_floor: f64,
    pub exact_mwu_max_group: usize,
}

impl AnalysisProfile {
    pub fn default_v1() -> Self {
        Self {
            group_column: "Group",
            expert_label: "expert",
            operative_time_column: "Operative Time (Mins)",
            primary_rater: Rater::Ap,
            secondary_rater: Rater::Sw,
            p_value_floor: 0.001,
            exact_mwu_max_group: 8,
        }
    }

    /// 1 for expert observations, 0 otherwise. Case-insensitive, untrimmed.
    pub fn is_expert(&self, group: &str) -> bool {
        group.to_lowercase() == self.expert_label
    }

    pub fn primary_column(&self, domain: &DomainDef) -> String {
        domain.column(self.primary_rater)
    }

    pub fn secondary_column(&self, domain: &DomainDef) -> String {
        domain.column(self.secondary_rater)
    }

    pub fn primary_columns(&self, instrument: Instrument) -> Vec<String> {
        domains_of(instrument)
            .map(|d| self.primary_column(d))
            .collect()
    }

    /// All primary-rater domain columns (OSATS then UWOMSA) plus operative time.
    pub fn scored_columns(&self) -> Vec<String> {
        let mut cols: Vec<String> = builtin_domains()
            .iter()
            .map(|d| self.primary_column(d))
            .collect();
        cols.push(self.operative_time_column.to_string());
        cols
    }
}
