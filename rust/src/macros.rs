//! Test-generation macros shared by both balancing strategies.
//!
//! The two tree types present the same ordered-set surface; this macro
//! stamps out one copy of the strategy-independent test suite per type,
//! with `paste` concatenating the type name into the test names.

/// Generate the shared ordered-set test suite for each listed tree type.
macro_rules! strategy_suite {
    ($($tree:ident),+ $(,)?) => {
        $(
            paste::paste! {
                #[test]
                fn [<$tree:snake _iterates_in_sorted_order>]() {
                    let mut tree = $tree::new();
                    for value in [9, 4, 12, 1, 7, 15, 3] {
                        tree.insert(value).unwrap();
                    }
                    let values: Vec<i32> = tree.iter().copied().collect();
                    assert_eq!(values, [1, 3, 4, 7, 9, 12, 15]);
                }

                #[test]
                fn [<$tree:snake _rejects_duplicates_unchanged>]() {
                    let mut tree = $tree::new();
                    for value in [5, 2, 8, 1, 3] {
                        tree.insert(value).unwrap();
                    }
                    let before: Vec<i32> = tree.iter().copied().collect();
                    let size = tree.len();

                    let result = tree.insert(3);
                    assert!(matches!(result.err(), Some(crate::TreeError::DuplicateElement)));

                    let after: Vec<i32> = tree.iter().copied().collect();
                    assert_eq!(before, after);
                    assert_eq!(tree.len(), size);
                    assert!(tree.check_invariants());
                }

                #[test]
                fn [<$tree:snake _round_trips_to_empty>]() {
                    let mut tree = $tree::new();
                    let values = [13, 4, 20, 1, 9, 16, 25, 7];
                    for value in values {
                        tree.insert(value).unwrap();
                    }
                    for value in values {
                        tree.remove(&value);
                        assert!(tree.check_invariants());
                    }
                    assert_eq!(tree.len(), 0);
                    assert!(tree.is_empty());
                    assert!(tree.cursor_front().is_end());
                    assert_eq!(tree.cursor_front(), tree.end());
                }

                #[test]
                fn [<$tree:snake _find_miss_is_end_cursor>]() {
                    let mut tree = $tree::new();
                    tree.insert(10).unwrap();
                    assert!(tree.find(&11).is_end());
                    assert_eq!(tree.find(&11), tree.end());
                    assert_eq!(tree.find(&10).value(), Some(&10));
                }

                #[test]
                fn [<$tree:snake _remove_absent_is_noop>]() {
                    let mut tree = $tree::new();
                    for value in [2, 1, 3] {
                        tree.insert(value).unwrap();
                    }
                    tree.remove(&42);
                    assert_eq!(tree.len(), 3);
                    assert!(tree.check_invariants());

                    let mut empty = $tree::<i32>::new();
                    empty.remove(&1);
                    assert!(empty.is_empty());
                }

                #[test]
                fn [<$tree:snake _first_and_last>]() {
                    let mut tree = $tree::new();
                    assert!(tree.first().unwrap_err().is_tree_empty());
                    assert!(tree.last().unwrap_err().is_tree_empty());
                    for value in [6, 2, 9] {
                        tree.insert(value).unwrap();
                    }
                    assert_eq!(tree.first().unwrap(), &2);
                    assert_eq!(tree.last().unwrap(), &9);
                }

                #[test]
                fn [<$tree:snake _clear_resets>]() {
                    let mut tree = $tree::new();
                    for value in 0..20 {
                        tree.insert(value).unwrap();
                    }
                    tree.clear();
                    assert!(tree.is_empty());
                    tree.insert(7).unwrap();
                    assert_eq!(tree.len(), 1);
                    assert!(tree.check_invariants());
                }
            }
        )+
    };
}

pub(crate) use strategy_suite;
