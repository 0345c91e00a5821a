
use itertools::Itertools;

use crate::error::{MotifError, Result};
use crate::phospho::modification::ModificationParser;

// Column layout of the distinct peptide summary
pub const PEPTIDE_ACCESSIONS_COL: usize = 1;
pub const PEPTIDE_SEQUENCE_COL: usize = 2;
pub const PEPTIDE_MODS_COL: usize = 3;
pub const PROTEIN_MODS_COL: usize = 4;
pub const PEPTIDE_SCORE_COL: usize = 9;

// Column layout of the protein database table
pub const PROTEIN_ID_COL: usize = 0;
pub const PROTEIN_SEQUENCE_COL: usize = 2;

/// One line of the peptide report, still as raw text fields.
#[derive(Clone, Default, PartialEq, Debug)]
pub struct PeptideRow {
    pub accessions: String,
    pub sequence: String,
    pub peptide_modifications: String,
    pub protein_modifications: String,
    pub score: String,
}

impl PeptideRow {
    pub fn from_fields(fields: &[&str]) -> Result<PeptideRow> {

        if fields.len() <= PEPTIDE_SCORE_COL {
            return Err(MotifError::MalformedRow(format!(
                "expected at least {} peptide fields, found {}", PEPTIDE_SCORE_COL + 1, fields.len()
            )));
        }

        Ok(PeptideRow {
            accessions: fields[PEPTIDE_ACCESSIONS_COL].to_string(),
            sequence: fields[PEPTIDE_SEQUENCE_COL].trim().to_string(),
            peptide_modifications: fields[PEPTIDE_MODS_COL].to_string(),
            protein_modifications: fields[PROTEIN_MODS_COL].to_string(),
            score: fields[PEPTIDE_SCORE_COL].trim().to_string(),
        })
    }
}

/// One protein of the reference database: identifier field and sequence.
#[derive(Clone, Default, PartialEq, Debug)]
pub struct ProteinRow {
    pub identifier: String,
    pub sequence: String,
}

impl ProteinRow {
    pub fn new(identifier: &str, sequence: &str) -> ProteinRow {
        ProteinRow {
            identifier: identifier.to_string(),
            sequence: sequence.trim().to_string(),
        }
    }

    pub fn from_fields(fields: &[&str]) -> Result<ProteinRow> {

        if fields.len() <= PROTEIN_SEQUENCE_COL {
            return Err(MotifError::MalformedRow(format!(
                "expected at least {} protein fields, found {}", PROTEIN_SEQUENCE_COL + 1, fields.len()
            )));
        }

        Ok(ProteinRow::new(fields[PROTEIN_ID_COL], fields[PROTEIN_SEQUENCE_COL]))
    }
}

/// Split a comma separated accession field into trimmed, unique accessions.
pub fn split_accessions(field: &str) -> Vec<String> {
    field.split(',')
        .map(|acc| acc.trim())
        .filter(|acc| !acc.is_empty())
        .unique()
        .map(|acc| acc.to_string())
        .collect()
}

#[derive(Clone, Default, PartialEq, Debug)]
pub struct PeptideRecord {
    pub sequence: String,
    pub length: usize,
    pub accessions: Vec<String>,
    pub reference: String,
    pub peptide_sites: Vec<usize>, // 1-based
    pub protein_sites: Vec<usize>, // 1-based
}

impl PeptideRecord {
    /// Build the record from a qualifying row.
    ///
    /// Positions that cannot be parsed are left out and handed back next to the record.
    pub fn new(row: &PeptideRow, parser: &ModificationParser) -> Result<(PeptideRecord, Vec<MotifError>)> {

        if row.sequence.is_empty() {
            return Err(MotifError::invalid_sequence(row.accessions.as_str(), "peptide sequence is empty"));
        }

        let mut malformed = Vec::new();
        let mut collect_sites = |annotation: &str| -> Vec<usize> {
            parser.parse_positions(annotation).into_iter().filter_map(|res| match res {
                Ok(site) => Some(site),
                Err(e) => {
                    malformed.push(e);
                    None
                }
            }).collect()
        };

        let peptide_sites = collect_sites(&row.peptide_modifications);
        let protein_sites = collect_sites(&row.protein_modifications);

        let record = PeptideRecord {
            sequence: row.sequence.clone(),
            length: row.sequence.chars().count(),
            accessions: split_accessions(&row.accessions),
            reference: row.accessions.replace(',', ";"),
            peptide_sites: peptide_sites,
            protein_sites: protein_sites,
        };

        Ok((record, malformed))
    }

    pub fn has_accessions(&self) -> bool {
        !self.accessions.is_empty()
    }
}

/// A unique motif window and every accession it was observed on.
#[derive(Clone, Default, PartialEq, Debug)]
pub struct MotifRecord {
    pub sequence: String,
    pub anchor: usize, // 1-based position of the modified residue in `sequence`
    pub merged_reference: Vec<String>,
}

impl MotifRecord {
    pub fn reference(&self) -> String {
        self.merged_reference.join(";")
    }
}
