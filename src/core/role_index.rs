// --- File: src/core/role_index.rs
use crate::core::types::RoleId;
use std::collections::HashMap;

/// Known words for each role, in construction order.
/// Order matters: a prefix shared by two synonyms belongs to whichever is inserted last.
pub const ROLE_SYNONYMS: &[(RoleId, &[&str])] = &[
    (RoleId::Top, &["top"]),
    (RoleId::Jungle, &["jungle", "jg"]),
    (RoleId::Middle, &["middle"]),
    (RoleId::Adc, &["adc", "bottom"]),
    (RoleId::Support, &["support"]),
];

/// Maps every non-empty prefix of every role synonym to its role, so that
/// "jun", "su" or "b" resolve with a single exact lookup.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RolePrefixIndex {
    prefixes: HashMap<String, RoleId>,
}

impl RolePrefixIndex {
    /// Builds the index from the built-in synonym table.
    pub fn new() -> Self {
        Self::from_synonyms(ROLE_SYNONYMS)
    }

    /// Builds the index from an arbitrary role table.
    /// Roles in table order, then synonyms in list order, then prefix lengths 1..=len.
    /// Each insert overwrites, so the last synonym to claim a prefix wins.
    pub fn from_synonyms(table: &[(RoleId, &[&str])]) -> Self {
        let mut index = Self { prefixes: HashMap::new() };
        for &(role, words) in table {
            for word in words {
                index.insert(word, role);
            }
        }
        index
    }

    /// Inserts all prefixes of `word`. O(k^2) in the word length.
    fn insert(&mut self, word: &str, role: RoleId) {
        let word = word.to_lowercase();
        for (start, ch) in word.char_indices() {
            let end = start + ch.len_utf8();
            self.prefixes.insert(word[..end].to_string(), role);
        }
    }

    /// Case-insensitive exact match against the precomputed prefixes.
    pub fn lookup(&self, text: &str) -> Option<RoleId> {
        if text.is_empty() {
            return None;
        }
        self.prefixes.get(&text.to_lowercase()).copied()
    }

    pub fn len(&self) -> usize {
        self.prefixes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.prefixes.is_empty()
    }
}

impl Default for RolePrefixIndex {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn resolves_every_prefix_of_unshared_words() {
        let index = RolePrefixIndex::new();
        for prefix in ["s", "su", "sup", "supp", "suppo", "suppor", "support"] {
            assert_eq!(index.lookup(prefix), Some(RoleId::Support), "{prefix}");
        }
        for prefix in ["b", "bo", "bott", "bottom"] {
            assert_eq!(index.lookup(prefix), Some(RoleId::Adc), "{prefix}");
        }
    }

    #[test]
    fn jungle_abbreviations() {
        let index = RolePrefixIndex::new();
        assert_eq!(index.lookup("jg"), Some(RoleId::Jungle));
        assert_eq!(index.lookup("j"), Some(RoleId::Jungle));
        assert_eq!(index.lookup("jun"), Some(RoleId::Jungle));
    }

    #[test]
    fn single_letter_a_is_adc() {
        assert_eq!(RolePrefixIndex::new().lookup("a"), Some(RoleId::Adc));
    }

    #[test]
    fn lookup_is_case_insensitive() {
        let index = RolePrefixIndex::new();
        assert_eq!(index.lookup("MID"), Some(RoleId::Middle));
        assert_eq!(index.lookup("Top"), Some(RoleId::Top));
    }

    #[test]
    fn unknown_and_empty_do_not_match() {
        let index = RolePrefixIndex::new();
        assert_eq!(index.lookup(""), None);
        assert_eq!(index.lookup("mid lane"), None);
        assert_eq!(index.lookup("toplane"), None);
        assert_eq!(index.lookup("x"), None);
    }

    #[test]
    fn later_synonym_wins_shared_prefix() {
        let table: &[(RoleId, &[&str])] = &[
            (RoleId::Middle, &["mid"]),
            (RoleId::Support, &["mage"]),
        ];
        let index = RolePrefixIndex::from_synonyms(table);
        assert_eq!(index.lookup("m"), Some(RoleId::Support));
        assert_eq!(index.lookup("mi"), Some(RoleId::Middle));
        assert_eq!(index.lookup("ma"), Some(RoleId::Support));
    }

    #[test]
    fn repeated_role_entries_follow_table_order() {
        let table: &[(RoleId, &[&str])] = &[
            (RoleId::Adc, &["bot"]),
            (RoleId::Top, &["baron"]),
            (RoleId::Adc, &["bottom"]),
        ];
        let index = RolePrefixIndex::from_synonyms(table);
        assert_eq!(index.lookup("b"), Some(RoleId::Adc));
        assert_eq!(index.lookup("ba"), Some(RoleId::Top));
    }

    #[test]
    fn empty_word_list_inserts_nothing() {
        let table: &[(RoleId, &[&str])] = &[(RoleId::Top, &[]), (RoleId::Jungle, &[""])];
        assert!(RolePrefixIndex::from_synonyms(table).is_empty());
    }

    #[test]
    fn construction_is_deterministic() {
        assert_eq!(RolePrefixIndex::new(), RolePrefixIndex::new());
    }

    #[test]
    fn key_count_matches_distinct_prefixes() {
        // top(3) jungle(6) jg(1 new: "jg") middle(6) adc(3) bottom(6) support(7)
        assert_eq!(RolePrefixIndex::new().len(), 3 + 6 + 1 + 6 + 3 + 6 + 7);
    }
}
