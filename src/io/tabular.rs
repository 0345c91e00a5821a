
use anyhow::{bail, Context, Result};
use log::warn;

use crate::io::reader::TextReader;
use crate::phospho::model::{PeptideRow, ProteinRow};

fn split_fields(line: &str) -> Vec<String> {
    line.replace('"', "").split('\t').map(|f| f.to_string()).collect()
}

/// Parse the lines of a peptide report (header already removed).
///
/// Blank lines are ignored; rows without enough columns are logged and skipped.
pub fn parse_peptide_lines<I, S>(lines: I) -> Vec<PeptideRow> where I: IntoIterator<Item = S>, S: AsRef<str> {

    lines.into_iter().enumerate().filter_map(|(line_idx, line)| {
        let line = line.as_ref();
        if line.trim().is_empty() {
            return None;
        }

        let fields = split_fields(line);
        let field_refs: Vec<&str> = fields.iter().map(|f| f.as_str()).collect();

        match PeptideRow::from_fields(&field_refs) {
            Ok(row) => Some(row),
            Err(e) => {
                warn!("peptide line {}: {}", line_idx + 1, e);
                None
            }
        }
    }).collect()
}

/// Parse the lines of a tab-delimited protein database (`id \t ... \t sequence`).
pub fn parse_protein_lines<I, S>(lines: I) -> Vec<ProteinRow> where I: IntoIterator<Item = S>, S: AsRef<str> {

    lines.into_iter().enumerate().filter_map(|(line_idx, line)| {
        let line = line.as_ref();
        if line.trim().is_empty() {
            return None;
        }

        let fields = split_fields(line);
        let field_refs: Vec<&str> = fields.iter().map(|f| f.as_str()).collect();

        match ProteinRow::from_fields(&field_refs) {
            Ok(row) => Some(row),
            Err(e) => {
                warn!("protein line {}: {}", line_idx + 1, e);
                None
            }
        }
    }).collect()
}

fn read_lines(path: &str) -> Result<Vec<String>> {
    let text_reader = TextReader::open(path).with_context(|| format!("cannot open {}", path))?;

    let mut lines = Vec::new();
    for line in text_reader {
        lines.push(line?.to_string());
    }

    Ok(lines)
}

/// Read a distinct peptide summary; the first line is a header and is dropped.
pub fn read_peptide_rows(path: &str) -> Result<Vec<PeptideRow>> {
    let lines = read_lines(path)?;
    if lines.is_empty() {
        bail!("peptide report {} is empty", path);
    }

    Ok(parse_peptide_lines(lines.iter().skip(1)))
}

/// Read a tab-delimited protein database; every line is a protein entry.
pub fn read_protein_rows(path: &str) -> Result<Vec<ProteinRow>> {
    let lines = read_lines(path)?;
    Ok(parse_protein_lines(lines.iter()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    const PEPTIDE_LINE: &str = "1\t\"P12345\"\tTYKQW\tPhosphorylation of Y(2)\tPhosphorylation of Y(5)\t\t\t\t\t0.9";

    #[test]
    fn quotes_are_stripped_from_peptide_fields() {
        let rows = parse_peptide_lines(vec![PEPTIDE_LINE]);

        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0].accessions, "P12345");
        assert_eq!(rows[0].sequence, "TYKQW");
        assert_eq!(rows[0].peptide_modifications, "Phosphorylation of Y(2)");
        assert_eq!(rows[0].protein_modifications, "Phosphorylation of Y(5)");
        assert_eq!(rows[0].score, "0.9");
    }

    #[test]
    fn short_and_blank_lines_are_skipped() {
        let rows = parse_peptide_lines(vec!["", "1\tP1\tTYKQW", PEPTIDE_LINE]);
        assert_eq!(rows.len(), 1);
    }

    #[test]
    fn protein_table_and_normalized_fasta_share_one_shape() {
        let rows = parse_protein_lines(vec!["P12345\tKinase\tMERTYKQWYP", ">sp|Q1|X\t \tAAAY", "broken"]);

        assert_eq!(rows, vec![
            ProteinRow::new("P12345", "MERTYKQWYP"),
            ProteinRow::new(">sp|Q1|X", "AAAY"),
        ]);
    }

    #[test]
    fn peptide_header_is_dropped() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "N\tAccessions\tSequence\tModifications\tProtMods\ta\tb\tc\td\tConf").unwrap();
        writeln!(file, "{}", PEPTIDE_LINE).unwrap();

        let rows = read_peptide_rows(file.path().to_str().unwrap()).unwrap();
        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0].sequence, "TYKQW");
    }
}
