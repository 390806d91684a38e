//! Symmetric Delete spelling correction.
//!
//! The Symmetric Delete algorithm reduces the complexity of edit candidate
//! generation and dictionary lookup for a given edit distance. Opposite to
//! other algorithms only deletes are required, no transposes + replaces +
//! inserts. Transposes + replaces + inserts of the input term are transformed
//! into deletes of the dictionary term.
//!
//! Compound correction of multi-word input strings covers three cases:
//! 1. mistakenly inserted space into a correct word led to two incorrect terms
//! 2. mistakenly omitted space between two correct words led to one incorrect
//!    combined term
//! 3. multiple independent input terms with/without spelling errors

use std::cmp::{max, min};

use ahash::AHashSet;

use crate::bigram::Bigram;
use crate::chars::{char_at, len, remove, slice, suffix};
use crate::distance::{DamerauLevenshteinOsa, StringDistance};
use crate::error::{LookupError, Result};
use crate::lexicon::Lexicon;
use crate::suggestion::{Suggestion, Verbosity};

/// Estimated frequency count of an unknown word, C = 10 / 10^len.
/// Formula proposed by Peter Norvig in Natural Language Corpus Data, p. 224,
/// http://norvig.com/ngrams/ch14.pdf
fn estimated_count(word: &str) -> u64 {
    (10f64 / 10f64.powi(len(word) as i32)) as u64
}

/// Dictionary-backed approximate string matcher.
///
/// Constructed from caller-supplied unigram and bigram frequency maps; the
/// lexicon can be grown afterwards through [`SymSpell::add_unigrams`] and
/// [`SymSpell::add_bigrams`], concurrently with lookups.
pub struct SymSpell<D = DamerauLevenshteinOsa> {
    lexicon: Lexicon,
    distance: D,
}

impl SymSpell {
    /// Builds the matcher and its delete index from the supplied frequency
    /// maps.
    ///
    /// `max_dictionary_edit_distance` bounds the edit distance the delete
    /// index is precalculated for; `prefix_length` is the leading-character
    /// window deletes are generated from (5..7, conventionally greater than
    /// the edit distance bound).
    pub fn new(
        unigrams: impl IntoIterator<Item = (String, u64)>,
        bigrams: impl IntoIterator<Item = (Bigram, u64)>,
        max_dictionary_edit_distance: usize,
        prefix_length: usize,
    ) -> SymSpell {
        SymSpell::with_distance(
            unigrams,
            bigrams,
            max_dictionary_edit_distance,
            prefix_length,
            DamerauLevenshteinOsa,
        )
    }
}

impl<D: StringDistance> SymSpell<D> {
    /// Like [`SymSpell::new`], with a substituted distance metric.
    pub fn with_distance(
        unigrams: impl IntoIterator<Item = (String, u64)>,
        bigrams: impl IntoIterator<Item = (Bigram, u64)>,
        max_dictionary_edit_distance: usize,
        prefix_length: usize,
        distance: D,
    ) -> SymSpell<D> {
        SymSpell {
            lexicon: Lexicon::build(
                unigrams,
                bigrams,
                max_dictionary_edit_distance,
                prefix_length,
            ),
            distance,
        }
    }

    pub fn lexicon(&self) -> &Lexicon {
        &self.lexicon
    }

    pub fn max_dictionary_edit_distance(&self) -> usize {
        self.lexicon.max_edit_distance()
    }

    /// Merge additional word/frequency pairs into the lexicon and extend the
    /// delete index incrementally.
    pub fn add_unigrams(&self, unigrams: impl IntoIterator<Item = (String, u64)>) {
        self.lexicon.add_unigrams(unigrams);
    }

    /// Merge additional word-pair/frequency entries into the bigram table.
    pub fn add_bigrams(&self, bigrams: impl IntoIterator<Item = (Bigram, u64)>) {
        self.lexicon.add_bigrams(bigrams);
    }

    /// Find suggested spellings for a single input word, sorted by edit
    /// distance ascending, then by frequency count descending.
    ///
    /// `max_edit_distance` must not exceed the dictionary's configured
    /// maximum: the delete index is only complete up to that bound. With
    /// `include_unknown`, an input with no suggestion in range yields a
    /// synthetic suggestion of the input itself at distance
    /// `max_edit_distance + 1` and count 0 instead of an empty list.
    pub fn lookup(
        &self,
        input: &str,
        verbosity: Verbosity,
        max_edit_distance: usize,
        include_unknown: bool,
    ) -> Result<Vec<Suggestion>> {
        let max_dictionary_edit_distance = self.lexicon.max_edit_distance();
        let prefix_length = self.lexicon.prefix_length();

        if max_edit_distance > max_dictionary_edit_distance {
            return Err(LookupError::DistanceBudget {
                requested: max_edit_distance,
                max: max_dictionary_edit_distance,
            });
        }
        if self.lexicon.is_empty() {
            return Err(LookupError::EmptyLexicon);
        }

        let mut suggestions: Vec<Suggestion> = Vec::new();
        let input_len = len(input);

        // early termination - input is too long to match any word in range
        if input_len.saturating_sub(max_edit_distance) > self.lexicon.max_word_length() {
            if include_unknown {
                suggestions.push(Suggestion::new(input, max_edit_distance + 1, 0));
            }
            return Ok(suggestions);
        }

        if let Some(count) = self.lexicon.unigram_count(input) {
            suggestions.push(Suggestion::new(input, 0, count));
            // early termination - return exact match, unless caller wants all
            if verbosity != Verbosity::All {
                return Ok(suggestions);
            }
        }

        // early termination - distance 0 means dictionary membership only
        if max_edit_distance == 0 {
            if include_unknown && suggestions.is_empty() {
                suggestions.push(Suggestion::new(input, max_edit_distance + 1, 0));
            }
            return Ok(suggestions);
        }

        let mut considered_deletes: AHashSet<String> = AHashSet::new();
        let mut considered_suggestions: AHashSet<String> = AHashSet::new();
        considered_suggestions.insert(input.to_string());

        // shrinks as better suggestions are found, scoped to this call
        let mut max_edit_distance2 = max_edit_distance;

        let input_prefix_len = min(input_len, prefix_length);
        let mut candidates: Vec<String> = Vec::new();
        if input_prefix_len < input_len {
            candidates.push(slice(input, 0, input_prefix_len));
        }
        candidates.push(input.to_string());

        let mut candidate_pointer = 0;
        while candidate_pointer < candidates.len() {
            let candidate = candidates[candidate_pointer].clone();
            candidate_pointer += 1;
            let candidate_len = len(&candidate);
            let length_diff = input_prefix_len as isize - candidate_len as isize;

            // candidates are ordered by delete distance: once the candidate
            // distance exceeds the best suggestion distance, none are closer
            if length_diff > max_edit_distance2 as isize {
                if verbosity == Verbosity::All {
                    continue;
                }
                break;
            }

            // derive one more level of deletes from the candidate before
            // probing the index
            if length_diff < max_edit_distance as isize && candidate_len <= prefix_length {
                // do not create edits with edit distance not smaller than
                // suggestions already found
                if verbosity != Verbosity::All && length_diff >= max_edit_distance2 as isize {
                    continue;
                }
                for i in 0..candidate_len {
                    let delete = remove(&candidate, i);
                    if !considered_deletes.contains(&delete) {
                        considered_deletes.insert(delete.clone());
                        candidates.push(delete);
                    }
                }
            }

            let Some(indexed) = self.lexicon.deletes().get(&candidate) else {
                continue;
            };
            for word in indexed.iter() {
                let sugg: &str = word.as_ref();
                let sugg_len = len(sugg);

                if sugg == input {
                    continue;
                }
                if sugg_len.abs_diff(input_len) > max_edit_distance2
                    || sugg_len < candidate_len
                    || (sugg_len == candidate_len && sugg != candidate)
                {
                    continue;
                }
                let sugg_prefix_len = min(sugg_len, prefix_length);
                if sugg_prefix_len > input_prefix_len
                    && sugg_prefix_len - candidate_len > max_edit_distance2
                {
                    continue;
                }

                // We allow simultaneous edits (deletes) of max_edit_distance
                // on both the dictionary and the input term. For replaces and
                // adjacent transposes the resulting edit distance stays
                // <= max_edit_distance, for inserts and deletes it might
                // exceed it, so the real distance has to be verified.
                let distance;
                if candidate_len == 0 {
                    // no chars in common: both terms fit inside the budget on
                    // their own
                    distance = max(input_len, sugg_len);
                    if distance > max_edit_distance2 || considered_suggestions.contains(sugg) {
                        continue;
                    }
                    considered_suggestions.insert(sugg.to_string());
                } else if sugg_len == 1 {
                    let only_char = sugg.chars().next();
                    distance = if only_char.is_some_and(|ch| input.contains(ch)) {
                        input_len - 1
                    } else {
                        input_len
                    };
                    if distance > max_edit_distance2 || considered_suggestions.contains(sugg) {
                        continue;
                    }
                    considered_suggestions.insert(sugg.to_string());
                } else if self.has_different_suffix(
                    max_edit_distance,
                    input,
                    input_len,
                    candidate_len,
                    sugg,
                    sugg_len,
                ) {
                    // the full edit budget was spent inside the prefix window
                    // and the suffixes diverge, so the real distance must
                    // exceed the budget: skip the DP entirely
                    continue;
                } else {
                    // the subsequence check is somewhat expensive and only
                    // pays off when early termination is possible
                    if verbosity != Verbosity::All
                        && !self.delete_in_suggestion_prefix(
                            &candidate,
                            candidate_len,
                            sugg,
                            sugg_len,
                        )
                    {
                        continue;
                    }
                    if considered_suggestions.contains(sugg) {
                        continue;
                    }
                    considered_suggestions.insert(sugg.to_string());
                    distance = match self.distance.distance_with_early_stop(
                        input,
                        sugg,
                        max_edit_distance2,
                    ) {
                        Some(distance) => distance,
                        None => continue,
                    };
                }

                if distance <= max_edit_distance2 {
                    let count = self.lexicon.unigram_count(sugg).unwrap_or(0);
                    let item = Suggestion::new(sugg, distance, count);

                    if !suggestions.is_empty() {
                        match verbosity {
                            Verbosity::Closest => {
                                // keep only the smallest distance found so far
                                if distance < max_edit_distance2 {
                                    suggestions.clear();
                                }
                            }
                            Verbosity::Top => {
                                if distance < max_edit_distance2 || count > suggestions[0].count {
                                    max_edit_distance2 = distance;
                                    suggestions[0] = item;
                                }
                                continue;
                            }
                            Verbosity::All => {}
                        }
                    }
                    if verbosity != Verbosity::All {
                        max_edit_distance2 = distance;
                    }
                    suggestions.push(item);
                }
            }
        }

        // sort by ascending edit distance, then by descending word frequency
        if suggestions.len() > 1 {
            suggestions.sort_unstable();
        }
        if include_unknown && suggestions.is_empty() {
            suggestions.push(Suggestion::new(input, max_edit_distance + 1, 0));
        }
        Ok(suggestions)
    }

    /// Find the suggested spelling for a multi-word input phrase, with
    /// compound splitting and merging of adjacent tokens.
    ///
    /// Returns a single suggestion for the whole phrase; its count is an
    /// aggregate estimate on the unigram scale and its distance is measured
    /// against the full input.
    pub fn lookup_compound(
        &self,
        input: &str,
        max_edit_distance: usize,
        include_unknown: bool,
    ) -> Result<Suggestion> {
        let terms: Vec<&str> = input.split_whitespace().collect();
        let mut suggestion_parts: Vec<Suggestion> = Vec::new();

        // translate every term to its best suggestion, otherwise it stays
        // unchanged
        let mut last_combination = false;
        for (i, term) in terms.iter().enumerate() {
            let suggestions =
                self.lookup(term, Verbosity::Top, max_edit_distance, include_unknown)?;

            // combination check, always before split
            if i > 0 && !last_combination {
                let previous_best = suggestion_parts.last().cloned();
                if let Some(previous_best) = previous_best {
                    let combined = self.combine_words(
                        max_edit_distance,
                        include_unknown,
                        term,
                        terms[i - 1],
                        &previous_best,
                        suggestions.first(),
                    )?;
                    if let Some(combined) = combined {
                        let last = suggestion_parts.len() - 1;
                        suggestion_parts[last] = combined;
                        last_combination = true;
                        continue;
                    }
                }
            }
            last_combination = false;

            // always split terms without a suggestion, never split terms with
            // a perfect suggestion or single-char terms
            match suggestions.first() {
                Some(first) if first.distance == 0 || len(term) == 1 => {
                    suggestion_parts.push(first.clone());
                }
                _ => {
                    self.split_words(max_edit_distance, term, &suggestions, &mut suggestion_parts)?;
                }
            }
        }

        let n = self.lexicon.total_count() as f64;
        let mut count = n;
        let mut text = String::new();
        for part in &suggestion_parts {
            text.push_str(&part.term);
            text.push(' ');
            count *= part.count as f64 / n;
        }
        let text = text.trim_end().to_string();

        // unbounded here, the distance is purely informational
        let distance = self
            .distance
            .distance_with_early_stop(input, &text, usize::MAX)
            .unwrap_or(0);
        Ok(Suggestion::new(text, distance, count as u64))
    }

    /// Try replacing the previous and current token with a correction of
    /// their concatenation (a mistakenly inserted space).
    fn combine_words(
        &self,
        max_edit_distance: usize,
        include_unknown: bool,
        token: &str,
        previous_token: &str,
        previous_best: &Suggestion,
        current_best: Option<&Suggestion>,
    ) -> Result<Option<Suggestion>> {
        let concatenation = format!("{previous_token}{token}");
        let combined =
            self.lookup(&concatenation, Verbosity::Top, max_edit_distance, include_unknown)?;
        let Some(first) = combined.first() else {
            return Ok(None);
        };

        let best2 = match current_best {
            Some(best2) => best2.clone(),
            None => Suggestion::new(token, max_edit_distance + 1, estimated_count(token)),
        };

        // edit distance of the two split terms with their best corrections,
        // as the comparative value against the combination
        let split_distance = previous_best.distance + best2.distance;
        let n = self.lexicon.total_count() as f64;
        if first.distance + 1 < split_distance
            || (first.distance + 1 == split_distance
                && (first.count as f64) > previous_best.count as f64 / n * best2.count as f64)
        {
            // the swallowed space counts as one more edit
            let mut merged = first.clone();
            merged.distance += 1;
            return Ok(Some(merged));
        }
        Ok(None)
    }

    /// Try every split point inside the token and keep the best-scoring
    /// two-word correction (a mistakenly omitted space), falling back to the
    /// token's own best correction or a synthetic low-confidence suggestion.
    fn split_words(
        &self,
        max_edit_distance: usize,
        term: &str,
        suggestions: &[Suggestion],
        suggestion_parts: &mut Vec<Suggestion>,
    ) -> Result<()> {
        let mut split_best: Option<Suggestion> = suggestions.first().cloned();
        let term_len = len(term);

        if term_len > 1 {
            for j in 1..term_len {
                let part1 = slice(term, 0, j);
                let part2 = slice(term, j, term_len);

                let suggestions1 = self.lookup(&part1, Verbosity::Top, max_edit_distance, false)?;
                let Some(best1) = suggestions1.first() else {
                    continue;
                };
                let suggestions2 = self.lookup(&part2, Verbosity::Top, max_edit_distance, false)?;
                let Some(best2) = suggestions2.first() else {
                    continue;
                };

                let split_term = Bigram::new(best1.term.clone(), best2.term.clone());
                let split_text = split_term.to_string();
                let split_distance = self
                    .distance
                    .distance_with_early_stop(term, &split_text, max_edit_distance)
                    .unwrap_or(max_edit_distance + 1);

                if let Some(ref incumbent) = split_best {
                    if split_distance > incumbent.distance {
                        continue;
                    }
                    if split_distance < incumbent.distance {
                        split_best = None;
                    }
                }

                let count = match self.lexicon.bigram_count(&split_term) {
                    Some(bigram_count) => {
                        // boost the pair above the single-term correction when
                        // its corrections concatenate back to the input or
                        // overlap with the single correction
                        let concatenation = format!("{}{}", best1.term, best2.term);
                        if let Some(single_best) = suggestions.first() {
                            if concatenation == term {
                                max(bigram_count, single_best.count + 2)
                            } else if best1.term == single_best.term
                                || best2.term == single_best.term
                            {
                                max(bigram_count, single_best.count + 1)
                            } else {
                                bigram_count
                            }
                        } else if concatenation == term {
                            max(bigram_count, max(best1.count, best2.count) + 2)
                        } else {
                            bigram_count
                        }
                    }
                    None => {
                        // The Naive Bayes probability of the word combination
                        // is the product of the two word probabilities:
                        // P(AB) = P(A) * P(B). Used as the frequency estimate
                        // of an unknown pair when ranking splitting variants.
                        let n = self.lexicon.total_count() as f64;
                        min(
                            self.lexicon.bigram_min_count(),
                            (best1.count as f64 / n * best2.count as f64) as u64,
                        )
                    }
                };

                let split = Suggestion::new(split_text, split_distance, count);
                if split_best.as_ref().map_or(true, |best| split.count > best.count) {
                    split_best = Some(split);
                }
            }
        }

        match split_best {
            Some(best) if term_len > 1 => suggestion_parts.push(best),
            _ => {
                suggestion_parts.push(Suggestion::new(
                    term,
                    max_edit_distance + 1,
                    estimated_count(term),
                ));
            }
        }
        Ok(())
    }

    // The full edit budget was provably spent inside the prefix window when
    // the candidate length equals prefix_length - max_edit_distance; if on
    // top of that the suffix windows diverge, the real distance exceeds the
    // budget and the DP can be skipped.
    fn has_different_suffix(
        &self,
        max_edit_distance: usize,
        input: &str,
        input_len: usize,
        candidate_len: usize,
        sugg: &str,
        sugg_len: usize,
    ) -> bool {
        let prefix_length = self.lexicon.prefix_length() as isize;
        if prefix_length - max_edit_distance as isize != candidate_len as isize {
            return false;
        }

        let min_distance = min(input_len, sugg_len) as isize - prefix_length;
        if min_distance > 1
            && suffix(input, (input_len as isize + 1 - min_distance) as usize)
                != suffix(sugg, (sugg_len as isize + 1 - min_distance) as usize)
        {
            return true;
        }
        min_distance > 0
            && char_at(input, input_len as isize - min_distance)
                != char_at(sugg, sugg_len as isize - min_distance)
            && (char_at(input, input_len as isize - min_distance - 1)
                != char_at(sugg, sugg_len as isize - min_distance)
                || char_at(input, input_len as isize - min_distance)
                    != char_at(sugg, sugg_len as isize - min_distance - 1))
    }

    // Check whether all delete chars occur in the suggestion prefix in
    // order; otherwise the index entry is an unrelated collision.
    fn delete_in_suggestion_prefix(
        &self,
        delete: &str,
        delete_len: usize,
        sugg: &str,
        sugg_len: usize,
    ) -> bool {
        if delete_len == 0 {
            return true;
        }
        let window = min(self.lexicon.prefix_length(), sugg_len);
        let sugg_chars: Vec<char> = sugg.chars().take(window).collect();
        let mut j = 0;
        for del_char in delete.chars() {
            while j < window && del_char != sugg_chars[j] {
                j += 1;
            }
            if j == window {
                return false;
            }
        }
        true
    }
}
