//! Unbalanced insertion: the descent shared by both balancing strategies.

use std::cmp::Ordering;

use crate::error::{TreeError, TreeResult};
use crate::types::{BstCore, Handle, SENTINEL};

impl<T: Ord + Default> BstCore<T> {
    /// Insert `value` at the BST position without rebalancing.
    ///
    /// Returns the new node's handle and its depth (edge count from the
    /// root). Fails with `DuplicateElement` when an equal value is found
    /// during the descent, before any allocation, so a failed insert leaves
    /// the arena untouched.
    pub(crate) fn insert_unbalanced(&mut self, value: T) -> TreeResult<(Handle, usize)> {
        if self.is_empty() {
            let root = self.arena.allocate(value, SENTINEL, SENTINEL, SENTINEL);
            self.arena[SENTINEL].left_index = root;
            return Ok((root, 0));
        }

        let mut current = self.root_handle();
        let mut depth = 0usize;
        loop {
            depth += 1;
            match value.cmp(&self.arena[current].value) {
                Ordering::Equal => return Err(TreeError::DuplicateElement),
                Ordering::Less => {
                    if self.arena[current].has_left() {
                        current = self.arena[current].left_index;
                    } else {
                        let handle = self.arena.allocate(value, current, SENTINEL, SENTINEL);
                        self.arena[current].left_index = handle;
                        return Ok((handle, depth));
                    }
                }
                Ordering::Greater => {
                    if self.arena[current].has_right() {
                        current = self.arena[current].right_index;
                    } else {
                        let handle = self.arena.allocate(value, current, SENTINEL, SENTINEL);
                        self.arena[current].right_index = handle;
                        return Ok((handle, depth));
                    }
                }
            }
        }
    }
}
