//! Property tests for insertion and enumeration

use compact_trie::Trie;
use proptest::prelude::*;
use std::collections::BTreeSet;

/// Small alphabet so generated words share prefixes often
fn word() -> impl Strategy<Value = Vec<u8>> {
    prop::collection::vec(0u8..4, 0..8)
}

fn word_set() -> impl Strategy<Value = BTreeSet<Vec<u8>>> {
    prop::collection::btree_set(word(), 0..24)
}

fn stored(trie: &Trie<u8>) -> Vec<Vec<u8>> {
    let mut words = trie.all_words().unwrap();
    words.sort();
    words
}

proptest! {
    #[test]
    fn test_round_trip_membership(words in word_set()) {
        let trie = Trie::from_words(&words).unwrap();
        trie.validate().unwrap();

        let expected: Vec<Vec<u8>> = words.into_iter().collect();
        prop_assert_eq!(stored(&trie), expected);
    }

    #[test]
    fn test_count_preservation(words in word_set()) {
        let trie = Trie::from_words(&words).unwrap();

        prop_assert_eq!(trie.all_words().unwrap().len(), words.len());
        prop_assert_eq!(trie.len(), words.len());
    }

    #[test]
    fn test_order_independence(
        (words, shuffled) in word_set()
            .prop_map(|s| s.into_iter().collect::<Vec<_>>())
            .prop_flat_map(|v| (Just(v.clone()), Just(v).prop_shuffle()))
    ) {
        let a = Trie::from_words(&words).unwrap();
        let b = Trie::from_words(&shuffled).unwrap();
        b.validate().unwrap();

        prop_assert_eq!(stored(&a), stored(&b));
    }

    #[test]
    fn test_reinsert_is_noop(words in word_set(), pick in any::<prop::sample::Index>()) {
        prop_assume!(!words.is_empty());
        let mut trie = Trie::from_words(&words).unwrap();
        let before = trie.clone();

        let again = words.iter().nth(pick.index(words.len())).unwrap();
        trie.add(again).unwrap();

        prop_assert_eq!(trie, before);
    }

    #[test]
    fn test_duplicates_in_input_collapse(words in prop::collection::vec(word(), 0..24)) {
        let trie = Trie::from_words(&words).unwrap();
        trie.validate().unwrap();

        let unique: BTreeSet<Vec<u8>> = words.into_iter().collect();
        prop_assert_eq!(stored(&trie), unique.into_iter().collect::<Vec<_>>());
    }
}

#[test]
fn test_prefix_permutations() {
    let words = ["hi_", "hi_th", "hi_there"];
    let orders = [
        [0, 1, 2],
        [0, 2, 1],
        [1, 0, 2],
        [1, 2, 0],
        [2, 0, 1],
        [2, 1, 0],
    ];

    for order in orders {
        let mut trie = Trie::new();
        for i in order {
            trie.add_str(words[i]).unwrap();
        }
        trie.validate().unwrap();

        let mut found = trie.words().unwrap();
        found.sort();
        assert_eq!(found, vec!["hi_", "hi_th", "hi_there"], "order {:?}", order);
    }
}
