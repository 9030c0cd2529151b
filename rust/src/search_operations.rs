//! Read-only search operations: lookup descent, subtree extrema, and
//! successor/predecessor walks.
//!
//! Everything here is expressed in terms of handles; [`SENTINEL`] is both
//! the "not found" result and the end position, which keeps lookups and
//! cursor comparisons on the same footing.

use std::cmp::Ordering;

use crate::error::{TreeError, TreeResult};
use crate::types::{AvlTree, BstCore, Handle, ScapegoatTree, SENTINEL};

impl<T: Ord + Default> BstCore<T> {
    /// Descend from the root comparing `value`; returns the matching handle
    /// or [`SENTINEL`] when the value is absent (or the tree empty).
    pub(crate) fn lookup(&self, value: &T) -> Handle {
        let mut current = self.root_handle();
        while current != SENTINEL {
            match value.cmp(&self.arena[current].value) {
                Ordering::Equal => return current,
                Ordering::Less => current = self.arena[current].left_index,
                Ordering::Greater => current = self.arena[current].right_index,
            }
        }
        SENTINEL
    }

    /// Leftmost handle of the subtree rooted at `handle`.
    pub(crate) fn min_of_subtree(&self, handle: Handle) -> Handle {
        if handle == SENTINEL {
            return SENTINEL;
        }
        let mut current = handle;
        while self.arena[current].has_left() {
            current = self.arena[current].left_index;
        }
        current
    }

    /// Rightmost handle of the subtree rooted at `handle`.
    pub(crate) fn max_of_subtree(&self, handle: Handle) -> Handle {
        if handle == SENTINEL {
            return SENTINEL;
        }
        let mut current = handle;
        while self.arena[current].has_right() {
            current = self.arena[current].right_index;
        }
        current
    }

    /// Handle of the smallest element, [`SENTINEL`] when empty.
    pub(crate) fn first_handle(&self) -> Handle {
        self.min_of_subtree(self.root_handle())
    }

    /// Handle of the largest element, [`SENTINEL`] when empty.
    pub(crate) fn last_handle(&self) -> Handle {
        self.max_of_subtree(self.root_handle())
    }

    /// In-order successor: right child's subtree minimum when a right child
    /// exists, otherwise the first ancestor reached via a left-child step.
    ///
    /// Applied to the sentinel this returns the sentinel (the end position
    /// saturates), because the sentinel's right link is always absent and
    /// its parent is itself.
    pub(crate) fn successor(&self, handle: Handle) -> Handle {
        let node = &self.arena[handle];
        if node.has_right() {
            return self.min_of_subtree(node.right_index);
        }
        let mut current = handle;
        let mut parent = node.parent_index;
        while parent != SENTINEL && self.arena[parent].right_index == current {
            current = parent;
            parent = self.arena[parent].parent_index;
        }
        parent
    }

    /// In-order predecessor, the mirror of [`successor`](Self::successor).
    ///
    /// Applied to the sentinel this yields the tree maximum: the sentinel's
    /// left link is the root, so "left subtree maximum" falls out of the
    /// uniform walk. Stepping back from the end position therefore lands on
    /// the last element.
    pub(crate) fn predecessor(&self, handle: Handle) -> Handle {
        let node = &self.arena[handle];
        if node.has_left() {
            return self.max_of_subtree(node.left_index);
        }
        let mut current = handle;
        let mut parent = node.parent_index;
        while parent != SENTINEL && self.arena[parent].left_index == current {
            current = parent;
            parent = self.arena[parent].parent_index;
        }
        parent
    }

    /// Reference to the smallest element, or `TreeEmpty`.
    pub(crate) fn first_value(&self) -> TreeResult<&T> {
        if self.is_empty() {
            return Err(TreeError::tree_empty("first"));
        }
        Ok(&self.arena[self.first_handle()].value)
    }

    /// Reference to the largest element, or `TreeEmpty`.
    pub(crate) fn last_value(&self) -> TreeResult<&T> {
        if self.is_empty() {
            return Err(TreeError::tree_empty("last"));
        }
        Ok(&self.arena[self.last_handle()].value)
    }
}

// ============================================================================
// PUBLIC SEARCH API
// ============================================================================

impl<T: Ord + Default> AvlTree<T> {
    /// Returns true when `value` is present.
    pub fn contains(&self, value: &T) -> bool {
        self.core.lookup(value) != SENTINEL
    }

    /// The smallest element.
    ///
    /// Fails with [`TreeError::TreeEmpty`] on an empty tree, a distinct
    /// condition from a missed lookup (which is the end cursor).
    pub fn first(&self) -> TreeResult<&T> {
        self.core.first_value()
    }

    /// The largest element, or [`TreeError::TreeEmpty`].
    pub fn last(&self) -> TreeResult<&T> {
        self.core.last_value()
    }
}

impl<T: Ord + Default> ScapegoatTree<T> {
    /// Returns true when `value` is present.
    pub fn contains(&self, value: &T) -> bool {
        self.core.lookup(value) != SENTINEL
    }

    /// The smallest element, or [`TreeError::TreeEmpty`].
    pub fn first(&self) -> TreeResult<&T> {
        self.core.first_value()
    }

    /// The largest element, or [`TreeError::TreeEmpty`].
    pub fn last(&self) -> TreeResult<&T> {
        self.core.last_value()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_core() -> BstCore<i32> {
        // Built through the insert descent so linkage is realistic.
        let mut core = BstCore::new();
        for value in [8, 3, 10, 1, 6, 14, 4, 7, 13] {
            core.insert_unbalanced(value).unwrap();
        }
        core
    }

    #[test]
    fn test_lookup_hit_and_miss() {
        let core = sample_core();
        let hit = core.lookup(&6);
        assert_ne!(hit, SENTINEL);
        assert_eq!(core.arena[hit].value, 6);
        assert_eq!(core.lookup(&5), SENTINEL);
    }

    #[test]
    fn test_lookup_on_empty_tree_is_not_found() {
        let core: BstCore<i32> = BstCore::new();
        assert_eq!(core.lookup(&1), SENTINEL);
    }

    #[test]
    fn test_successor_walk_is_sorted() {
        let core = sample_core();
        let mut values = Vec::new();
        let mut current = core.first_handle();
        while current != SENTINEL {
            values.push(core.arena[current].value);
            current = core.successor(current);
        }
        assert_eq!(values, [1, 3, 4, 6, 7, 8, 10, 13, 14]);
    }

    #[test]
    fn test_predecessor_from_end_is_maximum() {
        let core = sample_core();
        let last = core.predecessor(SENTINEL);
        assert_eq!(core.arena[last].value, 14);
        // And the end position saturates forward.
        assert_eq!(core.successor(SENTINEL), SENTINEL);
    }

    #[test]
    fn test_first_last_on_empty_tree() {
        let core: BstCore<i32> = BstCore::new();
        assert_eq!(core.first_value(), Err(TreeError::tree_empty("first")));
        assert_eq!(core.last_value(), Err(TreeError::tree_empty("last")));
        assert_eq!(core.predecessor(SENTINEL), SENTINEL);
    }
}
