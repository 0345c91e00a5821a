
use crate::chemistry::constants::aa;
use crate::chemistry::model::PropertyTag;
use crate::error::{MotifError, Result};

use lazy_static::lazy_static;
use std::collections::HashMap;

pub const PROPERTY_TAGS: [PropertyTag; 10] = [
    PropertyTag::Hydrophobic,
    PropertyTag::Polar,
    PropertyTag::Small,
    PropertyTag::Negative,
    PropertyTag::Positive,
    PropertyTag::Amide,
    PropertyTag::LargeAliphatic,
    PropertyTag::SmallAliphatic,
    PropertyTag::Aromatic,
    PropertyTag::Hydroxy,
];

/// Maps each amino acid symbol to the biochemical property tags it carries.
///
/// Tag sets overlap, so summing a composition over all tags does not give 100%.
#[derive(Clone, Default, PartialEq, Debug)]
pub struct AminoAcidTable {
    pub symbols: Vec<char>,
    pub tags_by_symbol: HashMap<char, Vec<PropertyTag>>
}

impl AminoAcidTable {
    pub fn new(
        entries: Vec<(char, Vec<PropertyTag>)>,
    ) -> Result<AminoAcidTable> {

        if entries.is_empty() {
            return Err(MotifError::InvalidTable("no amino acid entries".to_string()));
        }

        let n_aas = entries.len();
        let mut symbols = Vec::with_capacity(n_aas);
        let mut tags_by_symbol = HashMap::with_capacity(n_aas);

        for (symbol, tags) in entries {
            if tags.is_empty() {
                return Err(MotifError::InvalidTable(format!("amino acid '{}' has no property tag", symbol)));
            }
            symbols.push(symbol);
            tags_by_symbol.insert(symbol, tags);
        }

        if tags_by_symbol.len() != n_aas {
            return Err(MotifError::InvalidTable("amino acids contain duplicated entries".to_string()));
        }

        Ok(AminoAcidTable {
            symbols: symbols,
            tags_by_symbol: tags_by_symbol,
        })
    }

    pub fn contains(&self, aa: char) -> bool {
        self.tags_by_symbol.contains_key(&aa)
    }

    pub fn tags(&self, aa: char) -> &[PropertyTag] {
        self.tags_by_symbol.get(&aa).map(|tags| tags.as_slice()).unwrap_or(&[])
    }

    pub fn has_tag(&self, aa: char, tag: PropertyTag) -> bool {
        self.tags(aa).contains(&tag)
    }
}

macro_rules! tags {
    ($($x:ident),*) => {
        vec![ $(PropertyTag::$x),* ]
    }
}

lazy_static! {
    pub static ref STANDARD_AMINO_ACID_TABLE: AminoAcidTable = AminoAcidTable::new(
        vec![
            (aa::A, tags![Hydrophobic, Small, SmallAliphatic]),
            (aa::C, tags![Hydrophobic, Small]),
            (aa::D, tags![Polar, Small, Negative]),
            (aa::E, tags![Polar, Negative]),
            (aa::F, tags![Hydrophobic, Aromatic]),
            (aa::G, tags![Hydrophobic, Small, SmallAliphatic]),
            (aa::H, tags![Polar, Positive]),
            (aa::I, tags![Hydrophobic, LargeAliphatic]),
            (aa::K, tags![Polar, Positive]),
            (aa::L, tags![Hydrophobic, LargeAliphatic]),
            (aa::M, tags![Hydrophobic]),
            (aa::N, tags![Polar, Small, Amide]),
            (aa::P, tags![Small]),
            (aa::Q, tags![Polar, Amide]),
            (aa::R, tags![Polar, Positive]),
            (aa::S, tags![Small, Hydroxy]),
            (aa::T, tags![Small, Hydroxy]),
            (aa::V, tags![Hydrophobic, Small, SmallAliphatic]),
            (aa::W, tags![Hydrophobic, Aromatic]),
            (aa::Y, tags![Hydrophobic, Aromatic]),
        ]
    ).unwrap();
}
