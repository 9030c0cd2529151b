//! Rotation-balanced strategy: strict height balance maintained by single
//! and double rotations.
//!
//! Every mutation is descend-and-mutate followed by ascend-and-rebalance:
//! the ancestors of the mutation site are walked up to the root, and any
//! ancestor whose balance factor reaches ±2 is fixed by one of the four
//! rotation cases. Subtree heights are recomputed from structure on demand
//! (see `tree_structure`), so compaction renumbering cannot leave a cached
//! height behind.

use crate::error::TreeResult;
use crate::iteration::Cursor;
use crate::types::{AvlTree, Handle, SENTINEL};

impl<T: Ord + Default> AvlTree<T> {
    /// Insert `value`, restore balance, and return a cursor at the new
    /// element.
    ///
    /// Fails with [`TreeError::DuplicateElement`](crate::TreeError) and
    /// leaves the tree untouched when the value is already present.
    ///
    /// # Examples
    ///
    /// ```
    /// use flatbst::AvlTree;
    ///
    /// let mut tree = AvlTree::new();
    /// let cursor = tree.insert(5).unwrap();
    /// assert_eq!(cursor.value(), Some(&5));
    /// assert!(tree.insert(5).is_err());
    /// ```
    pub fn insert(&mut self, value: T) -> TreeResult<Cursor<'_, T>> {
        let (handle, _depth) = self.core.insert_unbalanced(value)?;
        let start = self.core.arena[handle].parent_index;
        self.rebalance_upward(start);
        // Rotations re-link but never renumber, so the handle stays good.
        Ok(Cursor::new(&self.core, handle))
    }

    /// Remove `value` if present and restore balance; absent values are a
    /// no-op.
    ///
    /// The rebalancing ascent starts at the parent of the physically removed
    /// node: unlike insertion, a deletion can under-balance several
    /// ancestors, so the walk always continues to the root.
    pub fn remove(&mut self, value: &T) {
        let handle = self.core.lookup(value);
        if handle == SENTINEL {
            return;
        }
        let parent = self.core.delete_structural(handle);
        self.rebalance_upward(parent);
    }

    // ========================================================================
    // BALANCING
    // ========================================================================

    /// `height(left) - height(right)` at `handle`.
    pub(crate) fn balance_factor(&self, handle: Handle) -> isize {
        let node = &self.core.arena[handle];
        let left = self.core.subtree_height(node.left_index) as isize;
        let right = self.core.subtree_height(node.right_index) as isize;
        left - right
    }

    /// Walk from `start` to the root, fixing every ancestor that reports a
    /// balance factor of ±2.
    fn rebalance_upward(&mut self, start: Handle) {
        let mut current = start;
        while current != SENTINEL {
            // The rotation re-parents `current`; remember where to ascend.
            let parent = self.core.arena[current].parent_index;
            let balance = self.balance_factor(current);
            if balance >= 2 {
                let left = self.core.arena[current].left_index;
                if self.balance_factor(left) >= 0 {
                    // left-left
                    self.rotate_right(current);
                } else {
                    // left-right
                    self.rotate_left(left);
                    self.rotate_right(current);
                }
            } else if balance <= -2 {
                let right = self.core.arena[current].right_index;
                if self.balance_factor(right) <= 0 {
                    // right-right
                    self.rotate_left(current);
                } else {
                    // right-left
                    self.rotate_right(right);
                    self.rotate_left(current);
                }
            }
            current = parent;
        }
    }

    /// Left rotation at `pivot`; the pivot's right child takes its place.
    ///
    /// The parent's child slot is re-linked through the arena like any other
    /// link, so a rotation at the root updates the sentinel's anchor with no
    /// special case.
    fn rotate_left(&mut self, pivot: Handle) {
        let arena = &mut self.core.arena;
        let riser = arena[pivot].right_index;
        let transfer = arena[riser].left_index;
        let parent = arena[pivot].parent_index;

        arena[pivot].right_index = transfer;
        if transfer != SENTINEL {
            arena[transfer].parent_index = pivot;
        }

        arena[riser].left_index = pivot;
        arena[pivot].parent_index = riser;

        arena[riser].parent_index = parent;
        if arena[parent].left_index == pivot {
            arena[parent].left_index = riser;
        } else {
            arena[parent].right_index = riser;
        }
    }

    /// Right rotation at `pivot`, the mirror of [`rotate_left`](Self::rotate_left).
    fn rotate_right(&mut self, pivot: Handle) {
        let arena = &mut self.core.arena;
        let riser = arena[pivot].left_index;
        let transfer = arena[riser].right_index;
        let parent = arena[pivot].parent_index;

        arena[pivot].left_index = transfer;
        if transfer != SENTINEL {
            arena[transfer].parent_index = pivot;
        }

        arena[riser].right_index = pivot;
        arena[pivot].parent_index = riser;

        arena[riser].parent_index = parent;
        if arena[parent].left_index == pivot {
            arena[parent].left_index = riser;
        } else {
            arena[parent].right_index = riser;
        }
    }

    /// Height of the whole tree (0 when empty).
    pub fn height(&self) -> usize {
        self.core.subtree_height(self.core.root_handle())
    }
}
