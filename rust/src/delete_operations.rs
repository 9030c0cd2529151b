//! Structural deletion with arena compaction.
//!
//! Deletion reduces every case to detaching a node with at most one child,
//! promoting that child, and compacting the arena. The two-children case is
//! value-copy based: the in-order successor's value moves into the located
//! node, and the successor (which has no left child by construction) is the
//! node physically removed. The located node keeps its handle; only the
//! successor's handle disappears.

use std::mem;

use crate::types::{BstCore, Handle, SENTINEL};

impl<T: Ord + Default> BstCore<T> {
    /// Remove the node at `handle` from the tree and compact the arena.
    ///
    /// Returns the post-compaction handle of the physically removed node's
    /// parent, the origin for a strategy's rebalancing ascent; [`SENTINEL`]
    /// when the root itself was removed. The returned handle accounts for
    /// the compaction swap: if the parent was the node the arena relocated,
    /// its new position is reported.
    pub(crate) fn delete_structural(&mut self, handle: Handle) -> Handle {
        let target = if self.arena[handle].has_left() && self.arena[handle].has_right() {
            // Two children: move the successor's value here, then physically
            // remove the successor instead.
            let successor = self.min_of_subtree(self.arena[handle].right_index);
            let value = mem::take(&mut self.arena[successor].value);
            self.arena[handle].value = value;
            successor
        } else {
            handle
        };

        // `target` has at most one child; promote it (or nothing) into
        // the parent's child slot.
        let (child, parent) = {
            let node = &self.arena[target];
            let child = if node.has_left() {
                node.left_index
            } else {
                node.right_index
            };
            (child, node.parent_index)
        };

        if self.arena[parent].left_index == target {
            self.arena[parent].left_index = child;
        } else {
            self.arena[parent].right_index = child;
        }
        if child != SENTINEL {
            self.arena[child].parent_index = parent;
        }

        // Compaction may relocate the parent itself; re-resolve its handle.
        match self.arena.remove_compacting(target) {
            Some(old_handle) if old_handle == parent => target,
            _ => parent,
        }
    }
}
