//! Phospho-tyrosine motif extraction.
//!
//! Reads the peptide identifications of a search engine report, keeps the confident
//! phospho-tyrosine peptides, cuts a window of up to 15 residues around every site
//! and merges identical windows across peptides. Proteins referenced by the
//! peptides are profiled (amino acid composition, property frequencies and number of
//! observed phospho sites) to serve as background for motif enrichment.

pub mod chemistry;
pub mod config;
pub mod error;
pub mod io;
pub mod phospho;

pub use chemistry::model::{PropertyTag, ProteinRecord};
pub use chemistry::table::{AminoAcidTable, STANDARD_AMINO_ACID_TABLE};
pub use config::{AccessionMatch, RunConfig};
pub use error::MotifError;
pub use phospho::model::{MotifRecord, PeptideRecord, PeptideRow, ProteinRow};
pub use phospho::run::{RunEngine, RunOutput, RunStats};
