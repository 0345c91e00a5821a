
use lazy_static::lazy_static;
use regex::Regex;

use crate::chemistry::constants::PHOSPHO_TYR_TOKEN;
use crate::error::{MotifError, Result};

/// Extracts residue positions from annotations shaped like `"<token>(p1, p2, ...)"`.
#[derive(Clone, Debug)]
pub struct ModificationParser {
    token: String,
    positions_regex: Regex,
}

impl ModificationParser {
    pub fn new(token: &str) -> Result<ModificationParser> {

        if token.is_empty() {
            return Err(MotifError::malformed_modification("", token, "modification token is empty"));
        }

        let pattern = format!(r"{}\((.*?)\)", regex::escape(token));
        let positions_regex = Regex::new(&pattern)
            .map_err(|e| MotifError::malformed_modification("", token, e.to_string()))?;

        Ok(ModificationParser {
            token: token.to_string(),
            positions_regex: positions_regex,
        })
    }

    pub fn token(&self) -> &str {
        &self.token
    }

    pub fn contains_token(&self, annotation: &str) -> bool {
        annotation.contains(self.token.as_str())
    }

    /// Parse the 1-based positions attached to the token, in source order.
    ///
    /// Only the first `<token>(...)` group is considered. Duplicated positions are kept.
    /// A piece without any digit yields a `MalformedModification` error; the other
    /// pieces are still returned.
    pub fn parse_positions(&self, annotation: &str) -> Vec<Result<usize>> {

        let positions_str = match self.positions_regex.captures(annotation).and_then(|caps| caps.get(1)) {
            Some(m) => m.as_str(),
            None => return Vec::new(),
        };

        positions_str.split(',').map(|piece| {
            let digits: String = piece.trim().chars().filter(|c| c.is_ascii_digit()).collect();

            if digits.is_empty() {
                return Err(MotifError::malformed_modification(annotation, piece, "no residue index"));
            }

            digits.parse::<usize>()
                .map_err(|e| MotifError::malformed_modification(annotation, piece, e.to_string()))
        }).collect()
    }
}

lazy_static! {
    pub static ref PHOSPHO_TYR_PARSER: ModificationParser = ModificationParser::new(PHOSPHO_TYR_TOKEN).unwrap();
}
