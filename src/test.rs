#[cfg(test)]
mod tests {
    use crate::{Bigram, LookupError, SymSpell, Verbosity};

    fn unigrams(entries: &[(&str, u64)]) -> Vec<(String, u64)> {
        entries
            .iter()
            .map(|(word, count)| (word.to_string(), *count))
            .collect()
    }

    fn bigrams(entries: &[(&str, &str, u64)]) -> Vec<(Bigram, u64)> {
        entries
            .iter()
            .map(|(word1, word2, count)| (Bigram::new(*word1, *word2), *count))
            .collect()
    }

    #[test]
    fn test_lookup_top() {
        let symspell = SymSpell::new(
            unigrams(&[("book", 100), ("books", 50), ("back", 10)]),
            [],
            2,
            7,
        );

        // "book" is more frequent but two edits away; once the distance-1
        // match shrinks the bound, it is never considered
        let results = symspell.lookup("boks", Verbosity::Top, 2, false).unwrap();
        assert_eq!(1, results.len());
        assert_eq!("books", results[0].term);
        assert_eq!(1, results[0].distance);
        assert_eq!(50, results[0].count);
    }

    #[test]
    fn test_lookup_exact_match_short_circuits() {
        let symspell = SymSpell::new(
            unigrams(&[("book", 200), ("books", 120), ("cook", 100)]),
            [],
            2,
            7,
        );

        let results = symspell.lookup("book", Verbosity::Top, 2, false).unwrap();
        assert_eq!(1, results.len());
        assert_eq!("book", results[0].term);
        assert_eq!(0, results[0].distance);
        assert_eq!(200, results[0].count);
    }

    #[test]
    fn test_lookup_all_includes_exact_match() {
        let symspell = SymSpell::new(
            unigrams(&[("book", 200), ("books", 120), ("cook", 100)]),
            [],
            2,
            7,
        );

        let results = symspell.lookup("book", Verbosity::All, 2, false).unwrap();
        let got: Vec<(&str, usize)> = results
            .iter()
            .map(|s| (s.term.as_str(), s.distance))
            .collect();
        assert_eq!(got, [("book", 0), ("books", 1), ("cook", 1)]);
    }

    #[test]
    fn test_lookup_closest_keeps_all_at_best_distance() {
        let symspell = SymSpell::new(
            unigrams(&[("book", 200), ("look", 150), ("cook", 100)]),
            [],
            2,
            7,
        );

        // all three are one deletion away; Closest keeps them all, ordered
        // by descending count
        let results = symspell.lookup("ook", Verbosity::Closest, 2, false).unwrap();
        let got: Vec<(&str, usize)> = results
            .iter()
            .map(|s| (s.term.as_str(), s.distance))
            .collect();
        assert_eq!(got, [("book", 1), ("look", 1), ("cook", 1)]);
    }

    #[test]
    fn test_lookup_closest_drops_farther_matches() {
        let symspell = SymSpell::new(unigrams(&[("book", 200), ("cook", 100)]), [], 2, 7);

        // book is distance 1, cook is distance 2
        let results = symspell.lookup("bok", Verbosity::Closest, 2, false).unwrap();
        assert_eq!(1, results.len());
        assert_eq!("book", results[0].term);
        assert_eq!(1, results[0].distance);
    }

    #[test]
    fn test_lookup_all_grows_with_budget() {
        let symspell = SymSpell::new(unigrams(&[("book", 200), ("cook", 100)]), [], 2, 7);

        let narrow = symspell.lookup("bok", Verbosity::All, 1, false).unwrap();
        let wide = symspell.lookup("bok", Verbosity::All, 2, false).unwrap();

        assert_eq!(1, narrow.len());
        assert_eq!("book", narrow[0].term);
        // every suggestion of the narrow budget reappears in the wide one
        for suggestion in &narrow {
            assert!(wide.iter().any(|s| s.term == suggestion.term));
        }
        let got: Vec<(&str, usize)> = wide
            .iter()
            .map(|s| (s.term.as_str(), s.distance))
            .collect();
        assert_eq!(got, [("book", 1), ("cook", 2)]);
    }

    #[test]
    fn test_lookup_single_char_dictionary_words() {
        let symspell = SymSpell::new(unigrams(&[("a", 10), ("b", 5)]), [], 1, 7);

        let results = symspell.lookup("ab", Verbosity::All, 1, false).unwrap();
        let got: Vec<(&str, usize, u64)> = results
            .iter()
            .map(|s| (s.term.as_str(), s.distance, s.count))
            .collect();
        assert_eq!(got, [("a", 1, 10), ("b", 1, 5)]);
    }

    #[test]
    fn test_lookup_no_chars_in_common() {
        let symspell = SymSpell::new(unigrams(&[("a", 10)]), [], 2, 7);

        // reached through the empty delete variant; the distance is the
        // longer of the two lengths
        let results = symspell.lookup("bc", Verbosity::All, 2, false).unwrap();
        assert_eq!(1, results.len());
        assert_eq!("a", results[0].term);
        assert_eq!(2, results[0].distance);
    }

    #[test]
    fn test_lookup_unknown_word() {
        let symspell = SymSpell::new(
            unigrams(&[("book", 100), ("books", 50), ("back", 10)]),
            [],
            2,
            7,
        );

        let results = symspell.lookup("xyzxyz", Verbosity::Top, 2, false).unwrap();
        assert!(results.is_empty());

        // include_unknown yields the input itself at distance budget + 1
        let results = symspell.lookup("xyzxyz", Verbosity::Top, 2, true).unwrap();
        assert_eq!(1, results.len());
        assert_eq!("xyzxyz", results[0].term);
        assert_eq!(3, results[0].distance);
        assert_eq!(0, results[0].count);
    }

    #[test]
    fn test_lookup_distance_zero_is_membership() {
        let symspell = SymSpell::new(unigrams(&[("book", 200)]), [], 2, 7);

        let results = symspell.lookup("book", Verbosity::Top, 0, false).unwrap();
        assert_eq!(1, results.len());
        assert_eq!(0, results[0].distance);

        let results = symspell.lookup("bok", Verbosity::Top, 0, false).unwrap();
        assert!(results.is_empty());

        let results = symspell.lookup("bok", Verbosity::Top, 0, true).unwrap();
        assert_eq!(1, results.len());
        assert_eq!("bok", results[0].term);
        assert_eq!(1, results[0].distance);
    }

    #[test]
    fn test_lookup_input_longer_than_any_word() {
        let symspell = SymSpell::new(unigrams(&[("it", 10)]), [], 2, 7);

        let results = symspell
            .lookup("abcdefgh", Verbosity::Top, 2, false)
            .unwrap();
        assert!(results.is_empty());

        let results = symspell.lookup("abcdefgh", Verbosity::Top, 2, true).unwrap();
        assert_eq!(1, results.len());
        assert_eq!("abcdefgh", results[0].term);
        assert_eq!(3, results[0].distance);
    }

    #[test]
    fn test_lookup_budget_above_dictionary_maximum() {
        let symspell = SymSpell::new(unigrams(&[("book", 200)]), [], 2, 7);

        let err = symspell.lookup("bok", Verbosity::Top, 3, false).unwrap_err();
        assert_eq!(
            err,
            LookupError::DistanceBudget {
                requested: 3,
                max: 2
            }
        );
    }

    #[test]
    fn test_lookup_empty_lexicon() {
        let symspell = SymSpell::new([], [], 2, 7);

        let err = symspell.lookup("book", Verbosity::Top, 2, false).unwrap_err();
        assert_eq!(err, LookupError::EmptyLexicon);

        // the budget precondition is checked first
        let err = symspell.lookup("book", Verbosity::Top, 3, false).unwrap_err();
        assert_eq!(
            err,
            LookupError::DistanceBudget {
                requested: 3,
                max: 2
            }
        );
    }

    #[test]
    fn test_growth_makes_new_words_findable() {
        let symspell = SymSpell::new(unigrams(&[("book", 200)]), [], 2, 7);

        let results = symspell.lookup("yelow", Verbosity::Top, 2, false).unwrap();
        assert!(results.is_empty());

        symspell.add_unigrams(unigrams(&[("yellow", 50)]));

        let results = symspell.lookup("yelow", Verbosity::Top, 2, false).unwrap();
        assert_eq!(1, results.len());
        assert_eq!("yellow", results[0].term);
        assert_eq!(1, results[0].distance);
        assert_eq!(50, results[0].count);
    }

    #[test]
    fn test_growth_with_empty_map_changes_nothing() {
        let symspell = SymSpell::new(unigrams(&[("book", 200), ("cook", 100)]), [], 2, 7);
        let words = symspell.lexicon().word_count();
        let variants = symspell.lexicon().deletes().variant_count();
        let total = symspell.lexicon().total_count();

        symspell.add_unigrams([]);
        symspell.add_bigrams([]);

        assert_eq!(words, symspell.lexicon().word_count());
        assert_eq!(variants, symspell.lexicon().deletes().variant_count());
        assert_eq!(total, symspell.lexicon().total_count());
    }

    #[test]
    fn test_growth_merges_counts() {
        let symspell = SymSpell::new(unigrams(&[("book", 200)]), [], 2, 7);
        symspell.add_unigrams(unigrams(&[("book", 50), ("cook", 25)]));

        assert_eq!(Some(250), symspell.lexicon().unigram_count("book"));
        assert_eq!(Some(25), symspell.lexicon().unigram_count("cook"));
        assert_eq!(275, symspell.lexicon().total_count());

        symspell.add_bigrams(bigrams(&[("book", "cook", 5)]));
        symspell.add_bigrams(bigrams(&[("book", "cook", 3)]));
        assert_eq!(
            Some(8),
            symspell.lexicon().bigram_count(&Bigram::new("book", "cook"))
        );
    }

    #[test]
    fn test_growth_extends_length_bound() {
        let symspell = SymSpell::new(unigrams(&[("it", 10)]), [], 2, 7);

        // rejected by the length precheck while the longest word is "it"
        let results = symspell.lookup("yellow", Verbosity::Top, 2, false).unwrap();
        assert!(results.is_empty());

        symspell.add_unigrams(unigrams(&[("yellow", 50)]));
        let results = symspell.lookup("yellow", Verbosity::Top, 2, false).unwrap();
        assert_eq!("yellow", results[0].term);
        assert_eq!(0, results[0].distance);
    }

    #[test]
    fn test_lookup_compound() {
        let symspell = SymSpell::new(
            unigrams(&[("where", 100), ("is", 80), ("the", 200), ("love", 60)]),
            bigrams(&[("where", "is", 30)]),
            2,
            7,
        );

        let result = symspell.lookup_compound("whereis th elove", 2, false).unwrap();
        assert_eq!("where is the love", result.term);
        assert_eq!(2, result.distance);
        // 440 * (102/440) * (200/440) * (60/440), truncated
        assert_eq!(6, result.count);
    }

    #[test]
    fn test_lookup_compound_merges_broken_word() {
        let symspell = SymSpell::new(
            unigrams(&[("in", 50), ("i", 30), ("inspired", 10)]),
            [],
            2,
            7,
        );

        // "ins pired" merges back into the dictionary word, the dropped
        // space counting as one edit
        let result = symspell.lookup_compound("ins pired", 2, false).unwrap();
        assert_eq!("inspired", result.term);
        assert_eq!(1, result.distance);
        assert_eq!(10, result.count);
    }

    #[test]
    fn test_lookup_compound_splits_conjoined_words() {
        let symspell = SymSpell::new(
            unigrams(&[("data", 40), ("base", 30)]),
            bigrams(&[("data", "base", 20)]),
            2,
            7,
        );

        let result = symspell.lookup_compound("databse", 2, false).unwrap();
        assert_eq!("data base", result.term);
        assert_eq!(2, result.distance);
        assert_eq!(20, result.count);
    }

    #[test]
    fn test_lookup_compound_keeps_unknown_token() {
        let symspell = SymSpell::new(unigrams(&[("the", 100)]), [], 2, 7);

        let result = symspell.lookup_compound("the zzzzz", 2, true).unwrap();
        assert_eq!("the zzzzz", result.term);
        assert_eq!(0, result.distance);
        // the unknown token contributes a zero count
        assert_eq!(0, result.count);
    }

    #[test]
    fn test_matcher_is_send_and_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<SymSpell>();
    }

    #[test]
    fn test_concurrent_growth_and_lookup() {
        let symspell = SymSpell::new(unigrams(&[("book", 200)]), [], 2, 7);

        std::thread::scope(|scope| {
            scope.spawn(|| {
                for i in 0..20 {
                    symspell.add_unigrams(unigrams(&[("yellow", 5), ("book", i)]));
                }
            });
            scope.spawn(|| {
                for _ in 0..20 {
                    let results = symspell.lookup("bok", Verbosity::Top, 2, false).unwrap();
                    assert_eq!("book", results[0].term);
                }
            });
        });

        let results = symspell.lookup("yelow", Verbosity::Top, 2, false).unwrap();
        assert_eq!("yellow", results[0].term);
        assert_eq!(Some(100), symspell.lexicon().unigram_count("yellow"));
    }
}
