//! Frequency tables and the delete-variant inverted index.
//!
//! Opposite to other approximate-matching schemes only deletes are indexed,
//! no transposes + replaces + inserts. Transposes + replaces + inserts of the
//! input term are transformed into deletes of the dictionary term at lookup
//! time, which keeps the index size language independent.

use std::sync::atomic::{AtomicU64, AtomicUsize, Ordering};

use ahash::{AHashSet, RandomState};
use dashmap::mapref::entry::Entry;
use dashmap::DashMap;
use rayon::prelude::*;
use tracing::debug;

use crate::bigram::Bigram;
use crate::chars::{len, remove, slice};

type Map<K, V> = DashMap<K, V, RandomState>;

/// Inverted index mapping a delete variant to the dictionary words that
/// produce it by deleting up to `max_edit_distance` characters within the
/// `prefix_length` window.
///
/// Entries are only ever added; there is no dictionary-word removal.
pub struct DeleteIndex {
    map: Map<Box<str>, Vec<Box<str>>>,
    max_edit_distance: usize,
    prefix_length: usize,
}

impl DeleteIndex {
    fn new(max_edit_distance: usize, prefix_length: usize) -> DeleteIndex {
        DeleteIndex {
            map: DashMap::with_hasher(RandomState::new()),
            max_edit_distance,
            prefix_length,
        }
    }

    pub fn max_edit_distance(&self) -> usize {
        self.max_edit_distance
    }

    pub fn prefix_length(&self) -> usize {
        self.prefix_length
    }

    /// Number of distinct delete variants in the index.
    pub fn variant_count(&self) -> usize {
        self.map.len()
    }

    pub fn contains_variant(&self, variant: &str) -> bool {
        self.map.contains_key(variant)
    }

    /// The dictionary words indexed under `variant`, cloned out for
    /// diagnostics and tests.
    pub fn words_for(&self, variant: &str) -> Vec<String> {
        self.map
            .get(variant)
            .map(|words| words.iter().map(|w| w.to_string()).collect())
            .unwrap_or_default()
    }

    pub(crate) fn get(
        &self,
        variant: &str,
    ) -> Option<dashmap::mapref::one::Ref<'_, Box<str>, Vec<Box<str>>>> {
        self.map.get(variant)
    }

    fn index_word(&self, word: &str) {
        for variant in self.variants_of(word) {
            self.map
                .entry(variant.into_boxed_str())
                .or_default()
                .push(Box::from(word));
        }
    }

    /// All delete variants of `word`: the prefix-truncated word itself, the
    /// empty string when the word is short enough, and every string reachable
    /// by up to `max_edit_distance` single-character deletions.
    fn variants_of(&self, word: &str) -> AHashSet<String> {
        let mut variants = AHashSet::new();
        let word_len = len(word);

        if word_len <= self.max_edit_distance {
            variants.insert(String::new());
        }
        let prefix = if word_len > self.prefix_length {
            slice(word, 0, self.prefix_length)
        } else {
            word.to_string()
        };
        variants.insert(prefix.clone());

        // Explicit work stack with an edit-depth counter instead of
        // recursion; max_edit_distance is small, the stack stays shallow.
        let mut stack: Vec<(String, usize)> = vec![(prefix, 0)];
        while let Some((current, depth)) = stack.pop() {
            let depth = depth + 1;
            if depth > self.max_edit_distance || len(&current) <= 1 {
                continue;
            }
            for i in 0..len(&current) {
                let delete = remove(&current, i);
                if !variants.contains(&delete) {
                    if depth < self.max_edit_distance {
                        stack.push((delete.clone(), depth));
                    }
                    variants.insert(delete);
                }
            }
        }
        variants
    }
}

/// The unigram and bigram frequency tables plus derived aggregate statistics.
/// Owns the delete index and grows monotonically; all growth goes through
/// `&self`, so lookups may run concurrently with it.
pub struct Lexicon {
    unigrams: Map<Box<str>, u64>,
    bigrams: Map<Bigram, u64>,
    deletes: DeleteIndex,
    /// Sum of all unigram counts, the probability normalization base N.
    total_count: AtomicU64,
    /// Running maximum word length over all words ever inserted.
    max_word_length: AtomicUsize,
    /// Smallest bigram count seen; caps the Naive Bayes estimate when a
    /// split pair is missing from the bigram table.
    bigram_min_count: AtomicU64,
}

impl Lexicon {
    pub fn build(
        unigrams: impl IntoIterator<Item = (String, u64)>,
        bigrams: impl IntoIterator<Item = (Bigram, u64)>,
        max_edit_distance: usize,
        prefix_length: usize,
    ) -> Lexicon {
        let lexicon = Lexicon {
            unigrams: DashMap::with_hasher(RandomState::new()),
            bigrams: DashMap::with_hasher(RandomState::new()),
            deletes: DeleteIndex::new(max_edit_distance, prefix_length),
            total_count: AtomicU64::new(0),
            max_word_length: AtomicUsize::new(0),
            bigram_min_count: AtomicU64::new(u64::MAX),
        };
        lexicon.add_unigrams(unigrams);
        lexicon.add_bigrams(bigrams);
        debug!(
            words = lexicon.word_count(),
            variants = lexicon.deletes.variant_count(),
            max_edit_distance,
            prefix_length,
            "built lexicon"
        );
        lexicon
    }

    /// Merge additional word/frequency pairs: counts sum for existing words,
    /// new words are inserted and their delete variants indexed. Variant
    /// generation fans out across cores; only newly inserted words are
    /// indexed, so re-adding a word never duplicates index references.
    pub fn add_unigrams(&self, unigrams: impl IntoIterator<Item = (String, u64)>) {
        let mut fresh: Vec<String> = Vec::new();
        let mut added = 0u64;
        let mut longest = 0usize;

        for (word, count) in unigrams {
            added = added.saturating_add(count);
            longest = longest.max(len(&word));
            match self.unigrams.entry(Box::from(word.as_str())) {
                Entry::Occupied(mut entry) => {
                    let total = entry.get_mut();
                    *total = total.saturating_add(count);
                }
                Entry::Vacant(entry) => {
                    entry.insert(count);
                    fresh.push(word);
                }
            }
        }

        self.total_count.fetch_add(added, Ordering::Relaxed);
        self.max_word_length.fetch_max(longest, Ordering::Relaxed);

        if !fresh.is_empty() {
            fresh.par_iter().for_each(|word| self.deletes.index_word(word));
            debug!(words = fresh.len(), "indexed delete variants for new words");
        }
    }

    /// Merge additional word-pair/frequency entries additively.
    pub fn add_bigrams(&self, bigrams: impl IntoIterator<Item = (Bigram, u64)>) {
        for (bigram, count) in bigrams {
            self.bigrams
                .entry(bigram)
                .and_modify(|total| *total = total.saturating_add(count))
                .or_insert(count);
            self.bigram_min_count.fetch_min(count, Ordering::Relaxed);
        }
    }

    pub fn contains(&self, word: &str) -> bool {
        self.unigrams.contains_key(word)
    }

    pub fn unigram_count(&self, word: &str) -> Option<u64> {
        self.unigrams.get(word).map(|count| *count)
    }

    pub fn bigram_count(&self, bigram: &Bigram) -> Option<u64> {
        self.bigrams.get(bigram).map(|count| *count)
    }

    /// Number of distinct words in the unigram table.
    pub fn word_count(&self) -> usize {
        self.unigrams.len()
    }

    pub fn bigram_entry_count(&self) -> usize {
        self.bigrams.len()
    }

    pub fn is_empty(&self) -> bool {
        self.unigrams.is_empty()
    }

    /// N: the sum of all unigram counts.
    pub fn total_count(&self) -> u64 {
        self.total_count.load(Ordering::Relaxed)
    }

    pub fn max_word_length(&self) -> usize {
        self.max_word_length.load(Ordering::Relaxed)
    }

    pub(crate) fn bigram_min_count(&self) -> u64 {
        self.bigram_min_count.load(Ordering::Relaxed)
    }

    pub fn deletes(&self) -> &DeleteIndex {
        &self.deletes
    }

    pub fn max_edit_distance(&self) -> usize {
        self.deletes.max_edit_distance
    }

    pub fn prefix_length(&self) -> usize {
        self.deletes.prefix_length
    }
}
