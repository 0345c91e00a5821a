
use anyhow::{Context, Result};
use indexmap::IndexMap;
use log::info;
use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};

use crate::chemistry::constants::{STANDARD_SYMBOLS, WINDOW_ANCHOR, WINDOW_FLANK, WINDOW_WIDTH};
use crate::chemistry::model::ProteinRecord;
use crate::chemistry::table::PROPERTY_TAGS;
use crate::phospho::model::MotifRecord;
use crate::phospho::run::RunOutput;

pub const SUBSTRATES_SUFFIX: &str = "_Substrates.csv";
pub const FREQUENCIES_SUFFIX: &str = "_SubBackFreq.csv";

/// Write the substrate and background frequency reports of a run into `out_dir`.
pub fn write_reports(output: &RunOutput, out_dir: &Path, group: &str) -> Result<(PathBuf, PathBuf)> {

    fs::create_dir_all(out_dir).with_context(|| format!("cannot create output directory {}", out_dir.display()))?;

    let substrates_path = out_dir.join(format!("{}{}", group, SUBSTRATES_SUFFIX));
    let substrates_file = fs::File::create(&substrates_path)
        .with_context(|| format!("cannot create {}", substrates_path.display()))?;
    write_substrates(&output.motifs, substrates_file)?;
    info!("wrote {} motifs to {}", output.motifs.len(), substrates_path.display());

    let frequencies_path = out_dir.join(format!("{}{}", group, FREQUENCIES_SUFFIX));
    let frequencies_file = fs::File::create(&frequencies_path)
        .with_context(|| format!("cannot create {}", frequencies_path.display()))?;
    write_frequencies(&output.proteins, frequencies_file)?;
    info!("wrote {} protein profiles to {}", output.proteins.len(), frequencies_path.display());

    Ok((substrates_path, frequencies_path))
}

/// Spread a motif over the `-7..=7` columns so that its anchor lands in column `0`.
pub fn align_motif(motif: &MotifRecord) -> Vec<String> {

    let left_pad = WINDOW_ANCHOR.saturating_sub(motif.anchor);
    let n_residues = motif.sequence.chars().count();
    let right_pad = WINDOW_WIDTH.saturating_sub(left_pad + n_residues);

    std::iter::repeat(String::new()).take(left_pad)
        .chain(motif.sequence.chars().map(|aa| aa.to_string()))
        .chain(std::iter::repeat(String::new()).take(right_pad))
        .collect()
}

pub fn write_substrates<W: Write>(motifs: &IndexMap<String, MotifRecord>, writer: W) -> Result<()> {

    let mut wtr = csv::Writer::from_writer(writer);

    let flank = WINDOW_FLANK as i64;
    let mut header: Vec<String> = vec!["Substrates".to_string(), "Species".to_string(), "Reference".to_string()];
    header.extend((-flank..=flank).map(|pos| pos.to_string()));
    header.push("Motif".to_string());
    wtr.write_record(&header)?;

    for motif in motifs.values() {
        let mut record: Vec<String> = vec![String::new(), String::new(), motif.reference()];
        record.extend(align_motif(motif));
        record.push(motif.sequence.clone());
        wtr.write_record(&record)?;
    }

    wtr.flush()?;

    Ok(())
}

pub fn write_frequencies<W: Write>(proteins: &IndexMap<String, ProteinRecord>, writer: W) -> Result<()> {

    let mut wtr = csv::WriterBuilder::new().flexible(true).from_writer(writer);

    let mut header = vec!["Amino Acids".to_string()];
    header.extend(proteins.keys().cloned());
    wtr.write_record(&header)?;

    let mut write_row = |label: String, values: Vec<String>| -> Result<()> {
        let mut record = vec![label];
        record.extend(values);
        wtr.write_record(&record)?;
        Ok(())
    };

    for aa in STANDARD_SYMBOLS {
        let values = proteins.values().map(|p| p.composition[&aa].to_string()).collect();
        write_row(aa.to_string(), values)?;
    }

    write_row("Properties".to_string(), vec![])?;

    for tag in PROPERTY_TAGS {
        let values = proteins.values().map(|p| p.property_frequency[&tag].to_string()).collect();
        write_row(tag.to_string(), values)?;
    }

    write_row("X".to_string(), vec![])?;
    write_row("Number of Y".to_string(), proteins.values().map(|p| p.tyrosine_count.to_string()).collect())?;
    write_row("Number of pY".to_string(), proteins.values().map(|p| p.phospho_observations.to_string()).collect())?;
    write_row("Total AAs".to_string(), proteins.values().map(|p| p.len().to_string()).collect())?;

    wtr.flush()?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::chemistry::table::STANDARD_AMINO_ACID_TABLE;

    fn motif(seq: &str, anchor: usize) -> MotifRecord {
        MotifRecord { sequence: seq.to_string(), anchor: anchor, merged_reference: vec!["P1".to_string()] }
    }

    #[test]
    fn anchor_lands_in_center_column() {
        let cells = align_motif(&motif("TYKQW", 2));
        assert_eq!(cells.len(), WINDOW_WIDTH);
        assert_eq!(cells[WINDOW_ANCHOR - 1], "Y");
        assert_eq!(cells[WINDOW_ANCHOR - 2], "T");
        assert!(cells[..WINDOW_ANCHOR - 2].iter().all(|c| c.is_empty()));

        let cells = align_motif(&motif("JKLMNOPQRST", 8));
        assert_eq!(cells.len(), WINDOW_WIDTH);
        assert_eq!(cells[0], "J");
        assert_eq!(cells[WINDOW_ANCHOR - 1], "Q");
        assert_eq!(cells[WINDOW_WIDTH - 1], "");
    }

    #[test]
    fn substrates_report_has_one_line_per_motif() {
        let mut motifs = IndexMap::new();
        motifs.insert("TYKQW".to_string(), motif("TYKQW", 2));

        let mut buf = Vec::new();
        write_substrates(&motifs, &mut buf).unwrap();
        let text = String::from_utf8(buf).unwrap();
        let lines: Vec<&str> = text.lines().collect();

        assert_eq!(lines.len(), 2);
        assert_eq!(lines[0], "Substrates,Species,Reference,-7,-6,-5,-4,-3,-2,-1,0,1,2,3,4,5,6,7,Motif");
        assert_eq!(lines[1], ",,P1,,,,,,,T,Y,K,Q,W,,,,,TYKQW");
    }

    #[test]
    fn frequency_report_lists_every_section() {
        let mut protein = ProteinRecord::new("P12345", "MERTYKQWYP", &STANDARD_AMINO_ACID_TABLE).unwrap();
        protein.phospho_observations = 3;
        let mut proteins = IndexMap::new();
        proteins.insert("P12345".to_string(), protein);

        let mut buf = Vec::new();
        write_frequencies(&proteins, &mut buf).unwrap();
        let text = String::from_utf8(buf).unwrap();
        let lines: Vec<&str> = text.lines().collect();

        assert_eq!(lines[0], "Amino Acids,P12345");
        assert_eq!(lines[1], "A,0");
        assert_eq!(lines[20], "Y,20");
        assert_eq!(lines[21], "Properties");
        assert_eq!(lines[22], "Hydrophobic,40");
        assert_eq!(lines[32], "X");
        assert_eq!(lines[33], "Number of Y,2");
        assert_eq!(lines[34], "Number of pY,3");
        assert_eq!(lines[35], "Total AAs,10");
        assert_eq!(lines.len(), 36);
    }
}
