
use std::collections::HashMap;

use crate::chemistry::constants::STANDARD_SYMBOLS;
use crate::chemistry::model::PropertyTag;
use crate::chemistry::table::{AminoAcidTable, PROPERTY_TAGS};

/// Count every residue character of the sequence, standard or not.
pub fn count_residues(sequence: &str) -> HashMap<char, usize> {

    let mut aa_count_by_char: HashMap<char, usize> = HashMap::new();

    for aa in sequence.chars() {
        let counter = aa_count_by_char.entry(aa).or_insert(0);
        *counter += 1;
    }

    aa_count_by_char
}

/// Convert raw counts into percentages of `seq_len`.
///
/// Only the 20 standard symbols get an entry (zero when absent). Non-standard
/// residues still count in `seq_len`, so the values may sum to less than 100.
pub fn calc_composition_percentages(aa_count_by_char: &HashMap<char, usize>, seq_len: usize) -> HashMap<char, f64> {

    STANDARD_SYMBOLS.iter().map(|aa| {
        let count = aa_count_by_char.get(aa).copied().unwrap_or(0);
        let percentage = if seq_len == 0 { 0.0 } else { count as f64 / seq_len as f64 * 100.0 };
        (*aa, percentage)
    }).collect()
}

/// Re-aggregate composition percentages per property tag.
///
/// A symbol carrying k tags contributes its percentage to each of the k sums.
pub fn calc_property_frequencies(composition: &HashMap<char, f64>, aa_table: &AminoAcidTable) -> HashMap<PropertyTag, f64> {

    PROPERTY_TAGS.iter().map(|tag| {
        let value: f64 = STANDARD_SYMBOLS.iter()
            .filter(|aa| aa_table.has_tag(**aa, *tag))
            .map(|aa| composition.get(aa).copied().unwrap_or(0.0))
            .sum();
        (*tag, value)
    }).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::chemistry::table::STANDARD_AMINO_ACID_TABLE;

    fn approx_eq(a: f64, b: f64) -> bool {
        (a - b).abs() < 1e-9
    }

    #[test]
    fn counts_include_non_standard_residues() {
        let counts = count_residues("AAXY");
        assert_eq!(counts.get(&'A'), Some(&2));
        assert_eq!(counts.get(&'X'), Some(&1));
        assert_eq!(counts.get(&'Y'), Some(&1));
    }

    #[test]
    fn percentages_use_full_length_as_denominator() {
        let counts = count_residues("AAXY");
        let comp = calc_composition_percentages(&counts, 4);

        assert_eq!(comp.len(), STANDARD_SYMBOLS.len());
        assert!(approx_eq(comp[&'A'], 50.0));
        assert!(approx_eq(comp[&'Y'], 25.0));
        assert!(approx_eq(comp[&'W'], 0.0));
        assert!(!comp.contains_key(&'X'));

        let total: f64 = comp.values().sum();
        assert!(approx_eq(total, 75.0));
    }

    #[test]
    fn multi_tag_symbols_feed_every_tag() {
        // A carries Hydrophobic, Small and Small Aliphatic
        let counts = count_residues("A");
        let comp = calc_composition_percentages(&counts, 1);
        let props = calc_property_frequencies(&comp, &STANDARD_AMINO_ACID_TABLE);

        assert!(approx_eq(props[&PropertyTag::Hydrophobic], 100.0));
        assert!(approx_eq(props[&PropertyTag::Small], 100.0));
        assert!(approx_eq(props[&PropertyTag::SmallAliphatic], 100.0));
        assert!(approx_eq(props[&PropertyTag::Polar], 0.0));

        let n_non_zero = props.values().filter(|v| **v > 0.0).count();
        assert_eq!(n_non_zero, 3);
    }
}
