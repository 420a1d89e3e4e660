use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum Instrument {
    Osats,
    Uwomsa,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum Rater {
    Ap,
    Sw,
}

impl Rater {
    pub fn suffix(self) -> &'static str {
        match self {
            Rater::Ap => "AP",
            Rater::Sw => "SW",
        }
    }
}

/// One scored rubric domain. `key` is the column stem shared by both raters.
#[derive(Debug, Clone, Copy)]
pub struct DomainDef {
    pub key: &'static str,
    pub instrument: Instrument,
    pub summary_label: &'static str,
    pub reliability_label: &'static str,
}

impl DomainDef {
    pub fn column(&self, rater: Rater) -> String {
        format!("{}_{}", self.key, rater.suffix())
    }
}

const BUILTIN_DOMAINS: &[DomainDef] = &[
    DomainDef {
        key: "RfT",
        instrument: Instrument::Osats,
        summary_label: "Respect for Tissue",
        reliability_label: "RESPECT FOR TISSUE",
    },
    DomainDef {
        key: "TnM",
        instrument: Instrument::Osats,
        summary_label: "Time and Motion",
        reliability_label: "TIME AND MOTION",
    },
    DomainDef {
        key: "Instrument",
        instrument: Instrument::Osats,
        summary_label: "Instrument Handling",
        reliability_label: "INSTRUMENT HANDLING",
    },
    DomainDef {
        key: "Flow",
        instrument: Instrument::Osats,
        summary_label: "Flow of Operation",
        reliability_label: "FLOW OF OPERATION",
    },
    DomainDef {
        key: "Knowledge",
        instrument: Instrument::Osats,
        summary_label: "Knowledge of Procedure",
        reliability_label: "KNOWLEDGE OF PROCEDURE",
    },
    DomainDef {
        key: "UWOMSA_A",
        instrument: Instrument::Uwomsa,
        summary_label: "UWOMSA A (Dexterity)",
        reliability_label: "UWOMSA A PREPARATION",
    },
    DomainDef {
        key: "UWOMSA_B",
        instrument: Instrument::Uwomsa,
        summary_label: "UWOMSA B (Patency)",
        reliability_label: "UWOMSA B SUTURING",
    },
    DomainDef {
        key: "UWOMSA_C",
        instrument: Instrument::Uwomsa,
        summary_label: "UWOMSA C (Leak/Flow)",
        reliability_label: "UWOMSA C FINAL PRODUCT",
    },
];

pub fn builtin_domains() -> &'static [DomainDef] {
    BUILTIN_DOMAINS
}

pub fn find_domain(key: &str) -> Option<&'static DomainDef> {
    BUILTIN_DOMAINS.iter().find(|d| d.key == key)
}

pub fn domains_of(instrument: Instrument) -> impl Iterator<Item = &'static DomainDef> {
    BUILTIN_DOMAINS
        .iter()
        .filter(move |d| d.instrument == instrument)
}

/// Resolves domain keys in the given order, skipping unknown keys.
pub fn ordered_domains(keys: &[&str]) -> Vec<&'static DomainDef> {
    keys.iter().filter_map(|k| find_domain(k)).collect()
}

#[cfg(test)]
#[path = "../../tests/src_inline/model/domains.rs"]
mod tests;
