//! Property tests for `Set`.

use std::collections::HashSet;

use proptest::prelude::*;
use set::{Address, Set, Text};

fn words() -> impl Strategy<Value = Vec<String>> {
    proptest::collection::vec("[a-d]{0,2}", 0..24)
}

fn texts(words: &[String]) -> Set<Text> {
    words.iter().cloned().map(Text::from).collect()
}

proptest! {
    #[test]
    fn len_counts_distinct(words in words()) {
        let distinct = words.iter().collect::<HashSet<_>>().len();
        prop_assert_eq!(texts(&words).len(), distinct);

        let mut set = Set::<Text>::default();
        for word in &words {
            set.insert(Text::from(word.as_str()));
        }
        prop_assert_eq!(set.len(), distinct);
    }

    #[test]
    fn insert_twice_is_insert_once(words in words(), x in "[a-d]{0,2}") {
        let mut once = texts(&words);
        once.insert(Text::from(x.as_str()));
        let mut twice = once.clone();
        twice.insert(Text::from(x.as_str()));

        prop_assert_eq!(twice.len(), once.len());
        prop_assert!(twice.contains(x.as_str()));
        prop_assert_eq!(twice, once);
    }

    #[test]
    fn removing_absent_changes_nothing(words in words(), x in "[e-h]{1,2}") {
        let mut set = texts(&words);
        let before = set.clone();
        prop_assert!(!set.remove(x.as_str()));
        prop_assert_eq!(set.len(), before.len());
        prop_assert_eq!(set, before);
    }

    #[test]
    fn insert_then_remove(words in words(), x in "[e-h]{1,2}") {
        let mut set = texts(&words);
        let len = set.len();
        set.insert(Text::from(x.as_str()));
        set.remove(x.as_str());
        prop_assert!(!set.contains(x.as_str()));
        prop_assert_eq!(set.len(), len);
    }

    #[test]
    fn to_vec_matches_contents(words in words()) {
        let set = texts(&words);
        let elements = set.to_vec();
        prop_assert_eq!(elements.len(), set.len());
        prop_assert!(elements.iter().all(|e| set.contains(e)));
        prop_assert_eq!(elements.iter().collect::<HashSet<_>>().len(), elements.len());
    }

    #[test]
    fn rendering_ignores_insertion_order(words in words()) {
        let forward = texts(&words);
        let mut reversed = words.clone();
        reversed.reverse();
        let backward = texts(&reversed);
        prop_assert_eq!(forward.to_string(), backward.to_string());
    }

    #[test]
    fn rendering_is_sorted(words in words()) {
        let rendered = texts(&words).to_string();
        let mut distinct = words.iter().cloned().collect::<HashSet<_>>().into_iter().collect::<Vec<_>>();
        distinct.sort();
        prop_assert_eq!(rendered, distinct.join(", "));
    }

    #[test]
    fn addresses_dedup_by_value(zips in proptest::collection::vec(0i64..4, 0..16)) {
        let set = zips
            .iter()
            .map(|zip| Address::new("Bob", "Main St", *zip))
            .collect::<Set<_>>();
        prop_assert_eq!(set.len(), zips.iter().collect::<HashSet<_>>().len());
    }
}
