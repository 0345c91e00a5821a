
use anyhow::*;

use crate::io::reader::TextReader;
use crate::phospho::model::ProteinRow;

/// Call `cb(header, sequence)` for every FASTA entry; sequence lines are concatenated.
pub fn for_each_fasta_entry<F>(path: &str, mut cb: F) -> Result<()> where F: FnMut(&str, &str) -> () {

    let mut header = String::with_capacity(512);
    let mut seq: String = String::with_capacity(100 * 1024);
    let mut in_entry = false;

    let text_reader = TextReader::open(path).with_context(|| format!("cannot open FASTA file {}", path))?;

    for line in text_reader {
        let l = line?;
        let l = l.trim();

        if let Some(header_without_gt_char) = l.strip_prefix('>') {
            if in_entry {
                cb(header.as_str(), seq.as_str());
            }

            header.clear();
            header.push_str(header_without_gt_char);
            seq.clear();
            in_entry = true;
        } else if in_entry {
            seq.push_str(l);
        } else if !l.is_empty() {
            bail!("sequence data found before the first FASTA header in {}", path);
        }
    }

    // Emit last entry
    if in_entry {
        cb(header.as_str(), seq.as_str());
    }

    Ok(())
}

/// Load a FASTA database as protein rows keyed by the first token of each header.
pub fn read_fasta_proteins(path: &str) -> Result<Vec<ProteinRow>> {

    let mut proteins = Vec::new();

    for_each_fasta_entry(path, |header, seq| {
        let identifier = header.split_whitespace().next().unwrap_or("");
        proteins.push(ProteinRow::new(identifier, seq));
    })?;

    Ok(proteins)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn multi_line_entries_are_joined() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, ">sp|P12345|KIN_HUMAN Some kinase\nMERTY\nKQWYP\n>sp|Q1|EMPTY\n>tr|Q2|X desc\r\nAAA\n").unwrap();

        let proteins = read_fasta_proteins(file.path().to_str().unwrap()).unwrap();

        assert_eq!(proteins, vec![
            ProteinRow::new("sp|P12345|KIN_HUMAN", "MERTYKQWYP"),
            ProteinRow::new("sp|Q1|EMPTY", ""),
            ProteinRow::new("tr|Q2|X", "AAA"),
        ]);
    }

    #[test]
    fn sequence_before_header_is_an_error() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, "MERTY\n>P1\nAAA\n").unwrap();

        assert!(read_fasta_proteins(file.path().to_str().unwrap()).is_err());
    }

    #[test]
    fn missing_file_is_an_error() {
        assert!(read_fasta_proteins("/nonexistent/db.fasta").is_err());
    }
}
