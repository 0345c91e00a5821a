
// Residues kept on each side of a modified site in a full motif window
pub const WINDOW_FLANK: usize = 7;
// 1-based position of the modified residue inside a full window
pub const WINDOW_ANCHOR: usize = WINDOW_FLANK + 1;
pub const WINDOW_WIDTH: usize = 2 * WINDOW_FLANK + 1;

pub const DEFAULT_SCORE_THRESHOLD: f64 = 0.5;
pub const PHOSPHO_TYR_TOKEN: &str = "Phosphorylation of Y";
// Decoy/contaminant accessions carry this marker and never enter the protein database
pub const CONTAMINANT_MARKER: &str = "RRRRR";

#[allow(dead_code)]
pub mod aa {
    pub const A: char = 'A';
    pub const C: char = 'C';
    pub const D: char = 'D';
    pub const E: char = 'E';
    pub const F: char = 'F';
    pub const G: char = 'G';
    pub const H: char = 'H';
    pub const I: char = 'I';
    pub const K: char = 'K';
    pub const L: char = 'L';
    pub const M: char = 'M';
    pub const N: char = 'N';
    pub const P: char = 'P';
    pub const Q: char = 'Q';
    pub const R: char = 'R';
    pub const S: char = 'S';
    pub const T: char = 'T';
    pub const V: char = 'V';
    pub const W: char = 'W';
    pub const Y: char = 'Y';
}

pub const STANDARD_SYMBOLS: [char; 20] = [
    aa::A, aa::C, aa::D, aa::E, aa::F, aa::G, aa::H, aa::I, aa::K, aa::L,
    aa::M, aa::N, aa::P, aa::Q, aa::R, aa::S, aa::T, aa::V, aa::W, aa::Y,
];
