
use indexmap::IndexMap;
use itertools::Itertools;

use crate::chemistry::constants::{WINDOW_ANCHOR, WINDOW_FLANK};
use crate::error::{MotifError, Result};
use crate::phospho::model::MotifRecord;

#[derive(Clone, Copy, Eq, PartialEq, Debug)]
pub enum WindowKind {
    Full,
    LeftClipped,
    RightClipped,
    Degenerate, // shorter than a full window on both sides
}

#[derive(Clone, PartialEq, Debug)]
pub struct MotifWindow {
    pub sequence: String,
    pub anchor: usize,
    pub kind: WindowKind,
}

/// Cut the window of up to `2 * WINDOW_FLANK + 1` residues around a 1-based site.
///
/// The anchor is `WINDOW_ANCHOR` whenever the left flank is complete, otherwise the
/// site itself. A site outside `1..=len` does not address a residue and is rejected.
pub fn extract_window(sequence: &str, site: usize) -> Result<MotifWindow> {

    let residues: Vec<char> = sequence.chars().collect();
    let seq_len = residues.len();

    if site == 0 || site > seq_len {
        return Err(MotifError::malformed_modification(
            sequence,
            site.to_string(),
            format!("site outside of a {} residue peptide", seq_len),
        ));
    }

    let has_left_flank = site >= WINDOW_ANCHOR;
    let has_right_flank = site + WINDOW_FLANK <= seq_len;

    use WindowKind::*;
    let (start, end, anchor, kind) = match (has_left_flank, has_right_flank) {
        (true, true) => (site - WINDOW_ANCHOR, site + WINDOW_FLANK, WINDOW_ANCHOR, Full),
        (false, true) => (0, site + WINDOW_FLANK, site, LeftClipped),
        (true, false) => (site - WINDOW_ANCHOR, seq_len, WINDOW_ANCHOR, RightClipped),
        (false, false) => (0, seq_len, site, Degenerate),
    };

    Ok(MotifWindow {
        sequence: residues[start..end].iter().collect(),
        anchor: anchor,
        kind: kind,
    })
}

/// What a merge did to the store, and which accessions gained an observation.
#[derive(Clone, PartialEq, Debug)]
pub enum MergeOutcome {
    Inserted { credited: Vec<String> },
    Extended { credited: Vec<String> },
    Unchanged,
}

impl MergeOutcome {
    pub fn credited(&self) -> &[String] {
        match self {
            MergeOutcome::Inserted { credited } => credited.as_slice(),
            MergeOutcome::Extended { credited } => credited.as_slice(),
            MergeOutcome::Unchanged => &[],
        }
    }
}

/// Unique motif windows, keyed by their exact sequence, in first-seen order.
#[derive(Clone, Default, Debug)]
pub struct MotifStore {
    motifs: IndexMap<String, MotifRecord>,
}

impl MotifStore {
    pub fn new() -> MotifStore {
        MotifStore::default()
    }

    /// Record one sighting of `window` on the given accessions.
    ///
    /// A new window keeps every accession. A known window only gains the accessions
    /// it did not list yet, and only those are credited.
    pub fn merge(&mut self, window: MotifWindow, accessions: &[String]) -> MergeOutcome {

        if let Some(motif) = self.motifs.get_mut(&window.sequence) {

            let new_accessions: Vec<String> = accessions.iter()
                .filter(|acc| !motif.merged_reference.contains(*acc))
                .unique()
                .cloned()
                .collect();

            if new_accessions.is_empty() {
                return MergeOutcome::Unchanged;
            }

            motif.merged_reference.extend(new_accessions.iter().cloned());

            return MergeOutcome::Extended { credited: new_accessions };
        }

        let merged_reference: Vec<String> = accessions.iter().unique().cloned().collect();

        self.motifs.insert(window.sequence.clone(), MotifRecord {
            sequence: window.sequence,
            anchor: window.anchor,
            merged_reference: merged_reference.clone(),
        });

        MergeOutcome::Inserted { credited: merged_reference }
    }

    pub fn get(&self, sequence: &str) -> Option<&MotifRecord> {
        self.motifs.get(sequence)
    }

    pub fn len(&self) -> usize {
        self.motifs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.motifs.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &MotifRecord> {
        self.motifs.values()
    }

    pub fn into_motifs(self) -> IndexMap<String, MotifRecord> {
        self.motifs
    }
}
