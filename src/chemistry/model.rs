
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

use crate::chemistry::composition::*;
use crate::chemistry::constants::aa;
use crate::chemistry::table::AminoAcidTable;
use crate::error::{MotifError, Result};

#[derive(Clone, Copy, Eq, PartialEq, Hash, Debug, Serialize, Deserialize)]
pub enum PropertyTag {
    Hydrophobic,
    Polar,
    Small,
    Negative,
    Positive,
    Amide,
    LargeAliphatic,
    SmallAliphatic,
    Aromatic,
    Hydroxy,
}

impl std::fmt::Display for PropertyTag {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {

        use PropertyTag::*;

        match self {
            Hydrophobic    => write!(f, "Hydrophobic"),
            Polar          => write!(f, "Polar"),
            Small          => write!(f, "Small"),
            Negative       => write!(f, "Negative"),
            Positive       => write!(f, "Positive"),
            Amide          => write!(f, "Amide"),
            LargeAliphatic => write!(f, "Large Aliphatic"),
            SmallAliphatic => write!(f, "Small Aliphatic"),
            Aromatic       => write!(f, "Aromatic"),
            Hydroxy        => write!(f, "Hydroxy"),
        }
    }
}

/// A protein of the reference database that at least one qualifying peptide points to.
#[derive(Clone, PartialEq, Debug)]
pub struct ProteinRecord {
    pub accession: String,
    pub sequence: String,
    pub composition: HashMap<char, f64>, // percentage of the full sequence length
    pub property_frequency: HashMap<PropertyTag, f64>,
    pub tyrosine_count: usize,
    pub phospho_observations: usize,
}

impl ProteinRecord {
    pub fn new(accession: &str, sequence: &str, aa_table: &AminoAcidTable) -> Result<ProteinRecord> {

        if sequence.is_empty() {
            return Err(MotifError::invalid_sequence(accession, "protein sequence is empty"));
        }

        let seq_len = sequence.chars().count();
        let aa_count_by_char = count_residues(sequence);

        // Raw count, captured before the percentage conversion
        let tyrosine_count = aa_count_by_char.get(&aa::Y).copied().unwrap_or(0);

        let composition = calc_composition_percentages(&aa_count_by_char, seq_len);
        let property_frequency = calc_property_frequencies(&composition, aa_table);

        Ok(ProteinRecord {
            accession: accession.to_string(),
            sequence: sequence.to_string(),
            composition: composition,
            property_frequency: property_frequency,
            tyrosine_count: tyrosine_count,
            phospho_observations: 0,
        })
    }

    pub fn len(&self) -> usize {
        self.sequence.chars().count()
    }

    pub fn record_phospho_observation(&mut self) {
        self.phospho_observations += 1;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::chemistry::constants::STANDARD_SYMBOLS;
    use crate::chemistry::table::{PROPERTY_TAGS, STANDARD_AMINO_ACID_TABLE};

    const EPS: f64 = 1e-9;

    #[test]
    fn composition_sums_to_standard_residue_share() {
        // 2 of 10 residues are non-standard
        let protein = ProteinRecord::new("P1", "MERTYKXWYB", &STANDARD_AMINO_ACID_TABLE).unwrap();
        let total: f64 = protein.composition.values().sum();

        assert_eq!(protein.composition.len(), STANDARD_SYMBOLS.len());
        assert!((total - 80.0).abs() < EPS);
        assert_eq!(protein.tyrosine_count, 2);
        assert!((protein.composition[&'Y'] - 20.0).abs() < EPS);
        assert_eq!(protein.phospho_observations, 0);
    }

    #[test]
    fn property_frequency_dominates_contributing_symbols() {
        let protein = ProteinRecord::new("P12345", "MERTYKQWYP", &STANDARD_AMINO_ACID_TABLE).unwrap();
        let table = &*STANDARD_AMINO_ACID_TABLE;

        for tag in PROPERTY_TAGS {
            let value = protein.property_frequency[&tag];
            for aa in STANDARD_SYMBOLS.iter().filter(|aa| table.has_tag(**aa, tag)) {
                assert!(value + EPS >= protein.composition[aa], "{} < {} for {}", value, protein.composition[aa], aa);
            }
        }

        // Y, W and M are hydrophobic; Y and W are aromatic
        assert!((protein.property_frequency[&PropertyTag::Hydrophobic] - 40.0).abs() < EPS);
        assert!((protein.property_frequency[&PropertyTag::Aromatic] - 30.0).abs() < EPS);
    }

    #[test]
    fn empty_sequence_is_rejected() {
        let res = ProteinRecord::new("P1", "", &STANDARD_AMINO_ACID_TABLE);
        assert!(matches!(res, Err(MotifError::InvalidSequence { .. })));
    }

    #[test]
    fn property_tags_display_their_report_names() {
        assert_eq!(PropertyTag::LargeAliphatic.to_string(), "Large Aliphatic");
        assert_eq!(PropertyTag::Positive.to_string(), "Positive");
    }
}
