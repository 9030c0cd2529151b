//! End-to-end scenario: a fixed insertion batch followed by a removal
//! sequence, with invariants and iteration order checked after every step.

use flatbst::{AvlTree, ScapegoatTree};

const VALUES: [i32; 22] = [
    2, 4, 1, 9, 0, 5, 10, 11, 15, 8, 20, 16, 50, 23, 12, 43, 60, 70, 123, 534, 124, 6545,
];
const REMOVALS: [i32; 5] = [6545, 0, 20, 15, 11];

fn sorted_without(removed: &[i32]) -> Vec<i32> {
    let mut values: Vec<i32> = VALUES
        .iter()
        .copied()
        .filter(|value| !removed.contains(value))
        .collect();
    values.sort_unstable();
    values
}

#[test]
fn test_avl_scenario() {
    let mut tree = AvlTree::from_values(VALUES.to_vec()).unwrap();
    tree.check_invariants_detailed().unwrap();
    assert_eq!(tree.iter().copied().collect::<Vec<_>>(), sorted_without(&[]));

    for step in 1..=REMOVALS.len() {
        tree.remove(&REMOVALS[step - 1]);
        tree.check_invariants_detailed().unwrap();
        assert_eq!(
            tree.iter().copied().collect::<Vec<_>>(),
            sorted_without(&REMOVALS[..step]),
            "wrong contents after removing {:?}",
            &REMOVALS[..step]
        );
    }

    // Two in-order steps past 50 in the surviving set lands on 70.
    let cursor = tree.find(&50) + 2;
    assert_eq!(cursor.value(), Some(&70));
    assert_eq!(cursor, tree.find(&70));
}

#[test]
fn test_scapegoat_scenario() {
    for alpha in [0.5, 0.65, 0.75, 1.0] {
        let mut tree = ScapegoatTree::from_values_with_alpha(VALUES.to_vec(), alpha).unwrap();
        tree.check_invariants_detailed().unwrap();
        assert_eq!(tree.iter().copied().collect::<Vec<_>>(), sorted_without(&[]));

        for step in 1..=REMOVALS.len() {
            tree.remove(&REMOVALS[step - 1]);
            tree.check_invariants_detailed().unwrap();
            assert_eq!(
                tree.iter().copied().collect::<Vec<_>>(),
                sorted_without(&REMOVALS[..step]),
                "alpha {}: wrong contents after removing {:?}",
                alpha,
                &REMOVALS[..step]
            );
        }

        let cursor = tree.find(&50) + 2;
        assert_eq!(cursor.value(), Some(&70));
    }
}

#[test]
fn test_scenario_reverse_iteration() {
    let tree = AvlTree::from_values(VALUES.to_vec()).unwrap();
    let mut expected = sorted_without(&[]);
    expected.reverse();
    assert_eq!(tree.iter().rev().copied().collect::<Vec<_>>(), expected);
}

#[test]
fn test_scenario_cursor_walk_matches_iterator() {
    let tree = AvlTree::from_values(VALUES.to_vec()).unwrap();
    let mut cursor = tree.cursor_front();
    let mut walked = Vec::new();
    while !cursor.is_end() {
        walked.push(*cursor.value().unwrap());
        cursor.move_next();
    }
    assert_eq!(walked, tree.iter().copied().collect::<Vec<_>>());
}
