use serde::{Deserialize, Serialize};

/// One validation verdict: the candidate exactly as supplied by the caller
/// (pre-normalization) plus the boolean result.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct IbanOutcome {
    pub iban: String,
    pub valid: bool,
}

/// One batch-input row. The field is optional so that an absent or empty
/// cell flows through as an invalid candidate instead of a parse error.
#[derive(Debug, Clone, Deserialize)]
pub struct IbanCandidate {
    #[serde(default)]
    pub iban: Option<String>,
}
