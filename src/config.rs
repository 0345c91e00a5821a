
use serde::{Deserialize, Serialize};

use crate::chemistry::constants::{CONTAMINANT_MARKER, DEFAULT_SCORE_THRESHOLD, PHOSPHO_TYR_TOKEN};

/// How an accession of the inclusion set is looked up in a protein identifier field.
#[derive(Clone, Copy, Eq, PartialEq, Debug, Serialize, Deserialize, clap::ValueEnum)]
pub enum AccessionMatch {
    /// The identifier contains the accession anywhere ("P1" also matches "P10_HUMAN")
    Substring,
    /// One of the `|` or whitespace separated identifier tokens equals the accession
    ExactToken,
}

impl AccessionMatch {
    pub fn matches(&self, identifier: &str, accession: &str) -> bool {
        match self {
            AccessionMatch::Substring => identifier.contains(accession),
            AccessionMatch::ExactToken => identifier
                .split(|c: char| c == '|' || c.is_whitespace())
                .any(|token| token == accession),
        }
    }
}

#[derive(Clone, PartialEq, Debug, Serialize, Deserialize)]
pub struct RunConfig {
    /// Peptides must score strictly above this value
    pub score_threshold: f64,
    pub modification_token: String,
    pub contaminant_marker: String,
    pub accession_match: AccessionMatch,
}

impl Default for RunConfig {
    fn default() -> Self {
        RunConfig {
            score_threshold: DEFAULT_SCORE_THRESHOLD,
            modification_token: PHOSPHO_TYR_TOKEN.to_string(),
            contaminant_marker: CONTAMINANT_MARKER.to_string(),
            accession_match: AccessionMatch::Substring,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn substring_match_over_matches_prefixes() {
        assert!(AccessionMatch::Substring.matches("P10_HUMAN", "P1"));
        assert!(AccessionMatch::Substring.matches("sp|P12345|KIN_HUMAN", "P12345"));
    }

    #[test]
    fn exact_token_match_compares_whole_tokens() {
        assert!(!AccessionMatch::ExactToken.matches("P10_HUMAN", "P1"));
        assert!(AccessionMatch::ExactToken.matches("sp|P12345|KIN_HUMAN", "P12345"));
        assert!(AccessionMatch::ExactToken.matches("P12345", "P12345"));
    }

    #[test]
    fn defaults_follow_the_phospho_tyrosine_pipeline() {
        let config = RunConfig::default();
        assert_eq!(config.score_threshold, 0.5);
        assert_eq!(config.modification_token, "Phosphorylation of Y");
        assert_eq!(config.contaminant_marker, "RRRRR");
        assert_eq!(config.accession_match, AccessionMatch::Substring);
    }
}
