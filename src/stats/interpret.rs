use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum CorrelationStrength {
    High,
    Moderate,
    Low,
    None,
}

impl CorrelationStrength {
    /// Bands on |r|: 0.5, 0.3, 0.1.
    pub fn from_r(r: f64) -> Self {
        let abs_r = r.abs();
        if abs_r >= 0.5 {
            CorrelationStrength::High
        } else if abs_r >= 0.3 {
            CorrelationStrength::Moderate
        } else if abs_r >= 0.1 {
            CorrelationStrength::Low
        } else {
            CorrelationStrength::None
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            CorrelationStrength::High => "High Degree",
            CorrelationStrength::Moderate => "Moderate Degree",
            CorrelationStrength::Low => "Low Degree",
            CorrelationStrength::None => "No Correlation",
        }
    }
}

/// Landis & Koch agreement bands for Cohen's kappa.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum KappaAgreement {
    AlmostPerfect,
    Substantial,
    Moderate,
    Fair,
    Slight,
    Poor,
}

impl KappaAgreement {
    pub fn from_kappa(kappa: f64) -> Self {
        if kappa >= 0.81 {
            KappaAgreement::AlmostPerfect
        } else if kappa >= 0.61 {
            KappaAgreement::Substantial
        } else if kappa >= 0.41 {
            KappaAgreement::Moderate
        } else if kappa >= 0.21 {
            KappaAgreement::Fair
        } else if kappa >= 0.01 {
            KappaAgreement::Slight
        } else {
            KappaAgreement::Poor
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            KappaAgreement::AlmostPerfect => "Almost perfect",
            KappaAgreement::Substantial => "Substantial",
            KappaAgreement::Moderate => "Moderate",
            KappaAgreement::Fair => "Fair",
            KappaAgreement::Slight => "Slight",
            KappaAgreement::Poor => "Poor",
        }
    }
}
