//! Rebuild-balanced strategy: bounded imbalance restored by flattening and
//! reassembling whole subtrees.
//!
//! Insertion tracks the depth it reached. A node landing deeper than
//! `floor(log(size) / log(1/alpha)) + 1` proves some ancestor is
//! alpha-weight-imbalanced; the first such ancestor (the scapegoat) is
//! rebuilt into a perfectly balanced subtree in place, reusing its nodes'
//! existing handles. The O(k) rebuild is amortized across the insertions
//! that grew the subtree out of balance.

use crate::error::TreeResult;
use crate::types::{Handle, ScapegoatTree, SENTINEL};

impl<T: Ord + Default> ScapegoatTree<T> {
    /// Insert `value`, rebuilding a subtree when the insertion depth exceeds
    /// the alpha height bound.
    ///
    /// Fails with [`TreeError::DuplicateElement`](crate::TreeError) and
    /// leaves the tree untouched when the value is already present.
    pub fn insert(&mut self, value: T) -> TreeResult<()> {
        let (handle, depth) = self.core.insert_unbalanced(value)?;
        let size = self.core.len();
        self.max_size = self.max_size.max(size);

        // NaN (size 1 at alpha 1.0) and +inf limits both mean "in bounds".
        if depth as f64 > self.depth_limit(size) {
            if let Some(scapegoat) = self.find_scapegoat(handle) {
                self.rebuild_subtree(scapegoat);
            }
        }
        Ok(())
    }

    /// Remove `value` if present; absent values are a no-op.
    ///
    /// Deletion never unbalances a subtree enough to break lookups, but a
    /// long shrink can leave the tree taller than its size justifies. When
    /// the size drops below `alpha * max_size` the whole tree is rebuilt
    /// and the high-water mark reset.
    pub fn remove(&mut self, value: &T) {
        let handle = self.core.lookup(value);
        if handle == SENTINEL {
            return;
        }
        self.core.delete_structural(handle);

        let size = self.core.len();
        if (size as f64) < self.alpha * self.max_size as f64 {
            if !self.core.is_empty() {
                self.rebuild_subtree(self.core.root_handle());
            }
            self.max_size = size;
        }
    }

    /// Height of the whole tree (0 when empty).
    pub fn height(&self) -> usize {
        self.core.subtree_height(self.core.root_handle())
    }

    // ========================================================================
    // SCAPEGOAT SELECTION AND REBUILD
    // ========================================================================

    /// `floor(log(size) / log(1/alpha)) + 1`; +inf at `alpha == 1.0`.
    fn depth_limit(&self, size: usize) -> f64 {
        ((size as f64).ln() / (1.0 / self.alpha).ln()).floor() + 1.0
    }

    /// Walk ancestors from the too-deep node, accumulating subtree sizes,
    /// until one violates the alpha weight bound.
    fn find_scapegoat(&self, from: Handle) -> Option<Handle> {
        let mut child = from;
        let mut child_size = 1usize;
        let mut node = self.core.arena[from].parent_index;

        while node != SENTINEL {
            let sibling = if self.core.arena[node].left_index == child {
                self.core.arena[node].right_index
            } else {
                self.core.arena[node].left_index
            };
            let sibling_size = self.core.subtree_size(sibling);
            let node_size = child_size + sibling_size + 1;

            let bound = self.alpha * node_size as f64;
            if child_size as f64 > bound || sibling_size as f64 > bound {
                return Some(node);
            }

            child = node;
            child_size = node_size;
            node = self.core.arena[node].parent_index;
        }
        None
    }

    /// Flatten the subtree at `scapegoat` in sorted order and reassemble it
    /// as a balanced tree in place, reusing the collected handles in
    /// traversal order. Values never move between nodes; only links are
    /// rewired, so no allocation happens.
    pub(crate) fn rebuild_subtree(&mut self, scapegoat: Handle) {
        let parent = self.core.arena[scapegoat].parent_index;
        let in_left_slot = self.core.arena[parent].left_index == scapegoat;

        let mut order = Vec::new();
        self.core.collect_in_order(scapegoat, &mut order);

        let subtree_root = self.reassemble(&order, 0, order.len(), parent);
        if in_left_slot {
            self.core.arena[parent].left_index = subtree_root;
        } else {
            self.core.arena[parent].right_index = subtree_root;
        }
    }

    /// Recursive midpoint reassembly of `order[lo..hi]`; returns the handle
    /// chosen as the subtree root.
    fn reassemble(&mut self, order: &[Handle], lo: usize, hi: usize, parent: Handle) -> Handle {
        if lo >= hi {
            return SENTINEL;
        }
        let mid = (lo + hi) / 2;
        let handle = order[mid];
        let left = self.reassemble(order, lo, mid, handle);
        let right = self.reassemble(order, mid + 1, hi, handle);

        let node = &mut self.core.arena[handle];
        node.parent_index = parent;
        node.left_index = left;
        node.right_index = right;
        handle
    }
}
