//! Prefix-based argument tokenizer
//!
//! `"1 n/Amy Bee t/friend t/colleague"` with prefixes `n/` and `t/` yields
//! the preamble `"1"`, `n/ -> ["Amy Bee"]` and
//! `t/ -> ["friend", "colleague"]`. A prefix only counts when preceded by
//! whitespace, so `pname/` is never read as `n/`.

use std::collections::BTreeMap;

use super::syntax::Prefix;
use crate::errors::{ClienteleError, Result};

/// Values collected per prefix, in input order
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ArgumentMultimap {
    preamble: String,
    values: BTreeMap<Prefix, Vec<String>>,
}

impl ArgumentMultimap {
    /// Text before the first prefix, trimmed
    pub fn preamble(&self) -> &str {
        &self.preamble
    }

    /// Last value given for `prefix`
    pub fn value(&self, prefix: Prefix) -> Option<&str> {
        self.values
            .get(&prefix)
            .and_then(|values| values.last())
            .map(String::as_str)
    }

    /// Every value given for `prefix`
    pub fn all_values(&self, prefix: Prefix) -> Vec<&str> {
        self.values
            .get(&prefix)
            .map(|values| values.iter().map(String::as_str).collect())
            .unwrap_or_default()
    }

    pub fn is_present(&self, prefix: Prefix) -> bool {
        self.values.contains_key(&prefix)
    }

    pub fn are_all_present(&self, prefixes: &[Prefix]) -> bool {
        prefixes.iter().all(|prefix| self.is_present(*prefix))
    }

    /// Reject single-valued prefixes given more than once
    ///
    /// # Errors
    /// `DuplicatePrefixes` naming every offending prefix.
    pub fn verify_no_duplicate_prefixes_for(&self, prefixes: &[Prefix]) -> Result<()> {
        let repeated: Vec<&str> = prefixes
            .iter()
            .filter(|prefix| self.values.get(prefix).is_some_and(|values| values.len() > 1))
            .map(|prefix| prefix.as_str())
            .collect();

        if repeated.is_empty() {
            Ok(())
        } else {
            Err(ClienteleError::DuplicatePrefixes {
                prefixes: repeated.join(" "),
            })
        }
    }
}

/// Split `args` at every whitespace-preceded occurrence of `prefixes`
pub fn tokenize(args: &str, prefixes: &[Prefix]) -> ArgumentMultimap {
    let mut positions: Vec<(usize, Prefix)> = prefixes
        .iter()
        .flat_map(|prefix| {
            args.match_indices(prefix.as_str())
                .filter(|(at, _)| preceded_by_whitespace(args, *at))
                .map(move |(at, _)| (at, *prefix))
        })
        .collect();
    positions.sort_by_key(|(at, _)| *at);

    let preamble_end = positions.first().map_or(args.len(), |(at, _)| *at);
    let mut multimap = ArgumentMultimap {
        preamble: args[..preamble_end].trim().to_string(),
        values: BTreeMap::new(),
    };

    for (i, (at, prefix)) in positions.iter().enumerate() {
        let value_start = at + prefix.as_str().len();
        let value_end = positions.get(i + 1).map_or(args.len(), |(next, _)| *next);
        multimap
            .values
            .entry(*prefix)
            .or_default()
            .push(args[value_start..value_end].trim().to_string());
    }

    multimap
}

fn preceded_by_whitespace(args: &str, at: usize) -> bool {
    args[..at].chars().next_back().is_some_and(char::is_whitespace)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parser::syntax::{PREFIX_NAME, PREFIX_POLICY_NAME, PREFIX_TAG};

    #[test]
    fn test_preamble_and_values() {
        let map = tokenize(" 1 n/Amy Bee t/friend t/colleague", &[PREFIX_NAME, PREFIX_TAG]);
        assert_eq!(map.preamble(), "1");
        assert_eq!(map.value(PREFIX_NAME), Some("Amy Bee"));
        assert_eq!(map.all_values(PREFIX_TAG), vec!["friend", "colleague"]);
    }

    #[test]
    fn test_prefix_inside_word_ignored() {
        let map = tokenize(" pname/LifeShield", &[PREFIX_NAME, PREFIX_POLICY_NAME]);
        assert!(!map.is_present(PREFIX_NAME));
        assert_eq!(map.value(PREFIX_POLICY_NAME), Some("LifeShield"));
    }

    #[test]
    fn test_empty_value_kept() {
        let map = tokenize(" 2 t/", &[PREFIX_TAG]);
        assert_eq!(map.all_values(PREFIX_TAG), vec![""]);
    }

    #[test]
    fn test_duplicate_prefixes_reported() {
        let map = tokenize(" n/Amy n/Bob", &[PREFIX_NAME, PREFIX_TAG]);
        assert_eq!(
            map.verify_no_duplicate_prefixes_for(&[PREFIX_NAME]),
            Err(ClienteleError::DuplicatePrefixes {
                prefixes: "n/".to_string()
            })
        );
    }
}
