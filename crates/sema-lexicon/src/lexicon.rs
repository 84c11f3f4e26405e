// SPDX-License-Identifier: Apache-2.0
//! Synset table and word index.
use rustc_hash::FxHashMap;

/// One concept: the set of words that denote it, plus its gloss.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Synset {
    /// Labels denoting this concept. Order follows the source table.
    pub words: Vec<String>,
    /// Human-readable definition.
    pub gloss: String,
}

impl Synset {
    /// The synset rendered as its space-joined word list, the way source
    /// tables print it.
    #[must_use]
    pub fn label(&self) -> String {
        self.words.join(" ")
    }
}

/// Immutable word ↔ synset-id tables.
///
/// Synset ids are positional: the record at index `i` of the input vector is
/// synset `i`, matching the vertex ids of the hypernym graph built alongside
/// it. A word may denote several synsets; the index keeps those ids
/// ascending and duplicate-free.
#[derive(Debug, Clone)]
pub struct Lexicon {
    synsets: Vec<Synset>,
    index: FxHashMap<String, Vec<usize>>,
}

impl Lexicon {
    /// Builds the word index over `synsets`.
    #[must_use]
    pub fn new(synsets: Vec<Synset>) -> Self {
        let mut index: FxHashMap<String, Vec<usize>> = FxHashMap::default();
        for (id, synset) in synsets.iter().enumerate() {
            for word in &synset.words {
                let ids = index.entry(word.clone()).or_default();
                // Ids arrive in ascending order; only a repeat within the
                // same synset can duplicate the tail.
                if ids.last() != Some(&id) {
                    ids.push(id);
                }
            }
        }
        Self { synsets, index }
    }

    /// Number of synsets (and therefore valid ids `[0, len)`).
    #[must_use]
    pub fn len(&self) -> usize {
        self.synsets.len()
    }

    /// Returns `true` when the lexicon holds no synsets.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.synsets.is_empty()
    }

    /// Is `word` indexed?
    #[must_use]
    pub fn contains(&self, word: &str) -> bool {
        self.index.contains_key(word)
    }

    /// Synset ids denoted by `word`, ascending; `None` if unindexed.
    #[must_use]
    pub fn synset_ids(&self, word: &str) -> Option<&[usize]> {
        self.index.get(word).map(Vec::as_slice)
    }

    /// The synset with id `id`, when in range.
    #[must_use]
    pub fn synset(&self, id: usize) -> Option<&Synset> {
        self.synsets.get(id)
    }

    /// Iterates over every indexed word, in no particular order.
    pub fn words(&self) -> impl Iterator<Item = &str> {
        self.index.keys().map(String::as_str)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn synset(words: &[&str]) -> Synset {
        Synset {
            words: words.iter().map(ToString::to_string).collect(),
            gloss: String::new(),
        }
    }

    #[test]
    fn words_map_to_ascending_ids() {
        let lex = Lexicon::new(vec![
            synset(&["bank"]),
            synset(&["river", "stream"]),
            synset(&["bank", "shore"]),
        ]);
        assert_eq!(lex.synset_ids("bank"), Some(&[0, 2][..]));
        assert_eq!(lex.synset_ids("stream"), Some(&[1][..]));
        assert!(lex.synset_ids("ocean").is_none());
        assert!(lex.contains("shore"));
    }

    #[test]
    fn repeated_word_within_a_synset_indexes_once() {
        let lex = Lexicon::new(vec![synset(&["twin", "twin"])]);
        assert_eq!(lex.synset_ids("twin"), Some(&[0][..]));
    }

    #[test]
    fn label_joins_words_with_spaces() {
        let s = synset(&["a", "b", "c"]);
        assert_eq!(s.label(), "a b c");
    }
}
