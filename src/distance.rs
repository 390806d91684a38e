//! Bounded edit-distance computation.
//!
//! This is the single hot inner loop of the engine: `lookup` calls it with a
//! shrinking distance budget as better suggestions are found, so every early
//! exit here pays off across the whole candidate scan.

use std::cmp::min;
use std::mem;

use smallvec::{smallvec, SmallVec};

const VEC_SIZE: usize = 16;
pub(crate) type FastVec<T> = SmallVec<[T; VEC_SIZE]>;

/// A string distance metric with a cooperative early-stop bound.
///
/// The matcher is generic over this trait, so alternative metrics can be
/// substituted without touching the lookup machinery.
pub trait StringDistance {
    /// Distance between `a` and `b`, or `None` if it provably exceeds
    /// `max_distance`. The sentinel lets implementations abort mid-way
    /// instead of computing a full distance that would be discarded anyway.
    fn distance_with_early_stop(&self, a: &str, b: &str, max_distance: usize) -> Option<usize>;
}

/// Damerau-Levenshtein edit distance, like Levenshtein but allows for adjacent
/// transpositions. Optimal string alignment version (OSA): each substring can
/// only be edited once, so e.g. "ca" to "abc" costs 3, not the 2 of full
/// Damerau-Levenshtein.
///
/// Cost is O(shorter_length × band) rather than O(n·m): only a diagonal band
/// of `max_distance` cells per row is evaluated, and a row whose band-boundary
/// cost already exceeds the budget aborts the whole computation.
#[derive(Debug, Default, Clone, Copy)]
pub struct DamerauLevenshteinOsa;

impl StringDistance for DamerauLevenshteinOsa {
    fn distance_with_early_stop(&self, a: &str, b: &str, max_distance: usize) -> Option<usize> {
        if a.is_empty() || b.is_empty() {
            let d = a.chars().count().max(b.chars().count());
            return (d <= max_distance).then_some(d);
        }
        if max_distance == 0 {
            return (a == b).then_some(0);
        }

        let mut s1: FastVec<char> = a.chars().collect();
        let mut s2: FastVec<char> = b.chars().collect();

        // Shorter string first: more time spent spinning just the inner loop.
        if s1.len() > s2.len() {
            mem::swap(&mut s1, &mut s2);
        }

        let mut len1 = s1.len();
        let mut len2 = s2.len();

        // Ignore common suffix, then common prefix.
        while len1 > 0 && s1[len1 - 1] == s2[len2 - 1] {
            len1 -= 1;
            len2 -= 1;
        }
        let mut start = 0;
        while start < len1 && s1[start] == s2[start] {
            start += 1;
        }
        len1 -= start;
        len2 -= start;

        // s1 is a substring of s2: the remainder is pure insertion.
        if len1 == 0 {
            return (len2 <= max_distance).then_some(len2);
        }

        let len_diff = len2 - len1;
        let max_distance = min(max_distance, len2);
        if len_diff > max_distance {
            return None;
        }

        let s1 = &s1[start..start + len1];
        let s2 = &s2[start..start + len2];

        let mut costs: FastVec<usize> = (0..len2)
            .map(|j| if j < max_distance { j + 1 } else { max_distance + 1 })
            .collect();
        let mut prev_costs: FastVec<usize> = smallvec![0; len2];

        // Window of the lower-right diagonal - max_distance cells and the
        // upper-left diagonal + max_distance cells.
        let j_start_offset = max_distance - len_diff;
        let have_max = max_distance < len2;
        let mut j_start = 0;
        let mut j_end = max_distance;

        let mut ch1 = s1[0];
        let mut current = 0;
        for i in 0..len1 {
            let prev_ch1 = ch1;
            ch1 = s1[i];
            let mut ch2 = s2[0];
            let mut left = i;
            current = left + 1;
            let mut next_trans_cost = 0;

            if i > j_start_offset {
                j_start += 1;
            }
            if j_end < len2 {
                j_end += 1;
            }

            for j in j_start..j_end {
                let above = current;
                let this_trans_cost = next_trans_cost;
                next_trans_cost = prev_costs[j];
                current = left; // cost of diagonal (substitution)
                prev_costs[j] = current;
                left = costs[j];
                let prev_ch2 = ch2;
                ch2 = s2[j];

                if ch1 != ch2 {
                    if left < current {
                        current = left; // insertion
                    }
                    if above < current {
                        current = above; // deletion
                    }
                    current += 1;
                    if i != 0 && j != 0 && ch1 == prev_ch2 && prev_ch1 == ch2 {
                        let trans = this_trans_cost + 1;
                        if trans < current {
                            current = trans; // transposition
                        }
                    }
                }
                costs[j] = current;
            }
            if have_max && costs[i + len_diff] > max_distance {
                return None;
            }
        }
        (current <= max_distance).then_some(current)
    }
}
