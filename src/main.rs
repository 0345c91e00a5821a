
use anyhow::*;
use clap::{Parser, ValueEnum};
use log::info;
use std::path::{Path, PathBuf};

use phospho_motifs::chemistry::constants::DEFAULT_SCORE_THRESHOLD;
use phospho_motifs::io::fasta::read_fasta_proteins;
use phospho_motifs::io::report::write_reports;
use phospho_motifs::io::tabular::{read_peptide_rows, read_protein_rows};
use phospho_motifs::{AccessionMatch, RunConfig, RunEngine, STANDARD_AMINO_ACID_TABLE};

#[derive(Clone, Copy, Eq, PartialEq, Debug, ValueEnum)]
enum ProteinFormat {
    /// FASTA when the file name contains "fasta", tab-delimited otherwise
    Auto,
    Fasta,
    Tabular,
}

/// Extract phospho-tyrosine motifs from a peptide report and profile their proteins.
#[derive(Parser, Debug)]
#[command(version)]
struct Cli {
    /// Tab-delimited distinct peptide summary (first line is a header)
    #[arg(long)]
    peptides: PathBuf,

    /// Protein database, FASTA or tab-delimited (`id \t ... \t sequence`)
    #[arg(long)]
    proteins: PathBuf,

    #[arg(long, value_enum, default_value_t = ProteinFormat::Auto)]
    protein_format: ProteinFormat,

    /// Directory receiving the reports, created if missing
    #[arg(long)]
    out_dir: PathBuf,

    /// Prefix of the report file names
    #[arg(long)]
    group: String,

    /// Peptides must score strictly above this confidence
    #[arg(long, default_value_t = DEFAULT_SCORE_THRESHOLD)]
    score_threshold: f64,

    #[arg(long, value_enum, default_value_t = AccessionMatch::Substring)]
    accession_match: AccessionMatch,
}

fn path_str(path: &Path) -> Result<&str> {
    path.to_str().ok_or_else(|| anyhow!("path {} is not valid UTF-8", path.display()))
}

fn main() -> Result<()> {

    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info"))
        .format_timestamp_millis()
        .init();

    let cli = Cli::parse();

    let config = RunConfig {
        score_threshold: cli.score_threshold,
        accession_match: cli.accession_match,
        ..RunConfig::default()
    };
    info!("{:?}", config);

    let peptide_rows = read_peptide_rows(path_str(&cli.peptides)?)?;

    let proteins_path = path_str(&cli.proteins)?;
    let is_fasta = match cli.protein_format {
        ProteinFormat::Auto => proteins_path.to_lowercase().contains("fasta"),
        ProteinFormat::Fasta => true,
        ProteinFormat::Tabular => false,
    };
    let protein_rows = if is_fasta { read_fasta_proteins(proteins_path)? } else { read_protein_rows(proteins_path)? };
    info!("loaded {} peptide rows and {} protein entries", peptide_rows.len(), protein_rows.len());

    let engine = RunEngine::new(&STANDARD_AMINO_ACID_TABLE, config)?;
    let output = engine.build(&peptide_rows, &protein_rows);

    let stats = &output.stats;
    info!(
        "{} qualifying peptides, {} malformed rows, {} invalid sequences, {} malformed sites",
        stats.qualifying_peptides, stats.malformed_rows, stats.invalid_sequences, stats.malformed_sites
    );

    let (substrates_path, frequencies_path) = write_reports(&output, &cli.out_dir, &cli.group)?;
    println!("{}", substrates_path.display());
    println!("{}", frequencies_path.display());

    Ok(())
}
