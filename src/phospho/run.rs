
use indexmap::{IndexMap, IndexSet};
use log::{debug, info, warn};

use crate::chemistry::model::ProteinRecord;
use crate::chemistry::table::AminoAcidTable;
use crate::config::RunConfig;
use crate::error::{MotifError, Result};
use crate::phospho::model::*;
use crate::phospho::modification::ModificationParser;
use crate::phospho::motif::{extract_window, MotifStore};

/// Counters of what was filtered or skipped during a run.
#[derive(Clone, Default, PartialEq, Debug)]
pub struct RunStats {
    pub peptide_rows: usize,
    pub qualifying_peptides: usize,
    pub malformed_rows: usize,
    pub invalid_sequences: usize,
    pub malformed_sites: usize,
    pub unresolved_accessions: Vec<String>,
}

/// Result of a run, read-only input of the reports.
#[derive(Clone, Debug)]
pub struct RunOutput {
    pub peptides: Vec<PeptideRecord>,
    pub proteins: IndexMap<String, ProteinRecord>,
    pub motifs: IndexMap<String, MotifRecord>,
    pub stats: RunStats,
}

pub struct RunEngine<'a> {
    aa_table: &'a AminoAcidTable,
    config: RunConfig,
    parser: ModificationParser,
}

impl<'a> RunEngine<'a> {
    pub fn new(aa_table: &'a AminoAcidTable, config: RunConfig) -> Result<RunEngine<'a>> {

        let parser = ModificationParser::new(&config.modification_token)?;

        Ok(RunEngine {
            aa_table: aa_table,
            config: config,
            parser: parser,
        })
    }

    pub fn config(&self) -> &RunConfig {
        &self.config
    }

    /// Filter peptides, resolve their proteins and merge the motif windows of every site.
    pub fn build(&self, peptide_rows: &[PeptideRow], protein_rows: &[ProteinRow]) -> RunOutput {

        let mut stats = RunStats::default();

        let (peptides, inclusion_set) = self.extract_peptides(peptide_rows, &mut stats);
        info!(
            "{} of {} peptide rows qualify, {} candidate proteins",
            peptides.len(), peptide_rows.len(), inclusion_set.len()
        );

        let mut proteins = self.resolve_proteins(&inclusion_set, protein_rows, &mut stats);
        info!(
            "resolved {} proteins from {} database entries ({} unresolved)",
            proteins.len(), protein_rows.len(), stats.unresolved_accessions.len()
        );

        let motif_store = self.generate_motifs(&peptides, &mut proteins, &mut stats);
        info!("generated {} unique motifs", motif_store.len());

        RunOutput {
            peptides: peptides,
            proteins: proteins,
            motifs: motif_store.into_motifs(),
            stats: stats,
        }
    }

    fn qualifies(&self, row: &PeptideRow) -> Result<bool> {

        let score: f64 = fast_float::parse(row.score.as_str())
            .map_err(|_| MotifError::MalformedRow(format!("invalid score '{}'", row.score)))?;

        Ok(score > self.config.score_threshold
            && !row.accessions.trim().is_empty()
            && self.parser.contains_token(&row.peptide_modifications))
    }

    fn extract_peptides(&self, rows: &[PeptideRow], stats: &mut RunStats) -> (Vec<PeptideRecord>, IndexSet<String>) {

        let mut peptides = Vec::new();
        let mut inclusion_set: IndexSet<String> = IndexSet::new();

        for row in rows {
            stats.peptide_rows += 1;

            match self.qualifies(row) {
                Ok(true) => {}
                Ok(false) => {
                    debug!("peptide {} filtered out", row.sequence);
                    continue;
                }
                Err(e) => {
                    warn!("skipping peptide {}: {}", row.sequence, e);
                    stats.malformed_rows += 1;
                    continue;
                }
            }

            let (peptide, malformed) = match PeptideRecord::new(row, &self.parser) {
                Ok(parsed) => parsed,
                Err(e) => {
                    warn!("skipping peptide row: {}", e);
                    stats.invalid_sequences += 1;
                    continue;
                }
            };

            for e in malformed {
                warn!("{}", e);
                stats.malformed_sites += 1;
            }

            for acc in &peptide.accessions {
                if !acc.contains(self.config.contaminant_marker.as_str()) {
                    inclusion_set.insert(acc.clone());
                }
            }

            stats.qualifying_peptides += 1;
            peptides.push(peptide);
        }

        (peptides, inclusion_set)
    }

    /// Bind each accession of the inclusion set to the last protein row whose identifier matches it.
    fn resolve_proteins(
        &self,
        inclusion_set: &IndexSet<String>,
        rows: &[ProteinRow],
        stats: &mut RunStats,
    ) -> IndexMap<String, ProteinRecord> {

        let mut last_match: Vec<Option<usize>> = vec![None; inclusion_set.len()];

        for (row_idx, row) in rows.iter().enumerate() {

            let matched: Vec<usize> = inclusion_set.iter().enumerate()
                .filter(|(_, acc)| self.config.accession_match.matches(&row.identifier, acc))
                .map(|(acc_idx, _)| acc_idx)
                .collect();

            if matched.is_empty() {
                continue;
            }

            if row.sequence.is_empty() {
                warn!("{}", MotifError::invalid_sequence(row.identifier.as_str(), "protein sequence is empty"));
                stats.invalid_sequences += 1;
                continue;
            }

            for acc_idx in matched {
                last_match[acc_idx] = Some(row_idx);
            }
        }

        let mut proteins = IndexMap::with_capacity(inclusion_set.len());

        for (acc, row_idx_opt) in inclusion_set.iter().zip(last_match) {
            let row_idx = match row_idx_opt {
                Some(row_idx) => row_idx,
                None => {
                    debug!("accession {} not found in the protein database", acc);
                    stats.unresolved_accessions.push(acc.clone());
                    continue;
                }
            };

            match ProteinRecord::new(acc, &rows[row_idx].sequence, self.aa_table) {
                Ok(protein) => {
                    proteins.insert(acc.clone(), protein);
                }
                Err(e) => {
                    warn!("{}", e);
                    stats.invalid_sequences += 1;
                    stats.unresolved_accessions.push(acc.clone());
                }
            }
        }

        proteins
    }

    fn generate_motifs(
        &self,
        peptides: &[PeptideRecord],
        proteins: &mut IndexMap<String, ProteinRecord>,
        stats: &mut RunStats,
    ) -> MotifStore {

        let mut motif_store = MotifStore::new();

        for peptide in peptides.iter().filter(|peptide| peptide.has_accessions()) {
            for &site in &peptide.peptide_sites {

                let window = match extract_window(&peptide.sequence, site) {
                    Ok(window) => window,
                    Err(e) => {
                        warn!("{}", e);
                        stats.malformed_sites += 1;
                        continue;
                    }
                };

                let outcome = motif_store.merge(window, &peptide.accessions);

                // Unresolved accessions stay in the motif reference but are never counted
                for acc in outcome.credited() {
                    if let Some(protein) = proteins.get_mut(acc) {
                        protein.record_phospho_observation();
                    }
                }
            }
        }

        motif_store
    }
}
