//! Structural queries over subtrees: size, height, and in-order collection.

use crate::types::{BstCore, Handle, SENTINEL};

impl<T: Ord + Default> BstCore<T> {
    /// Number of nodes in the subtree rooted at `handle` (0 for the
    /// sentinel), counted with an explicit stack.
    pub(crate) fn subtree_size(&self, handle: Handle) -> usize {
        if handle == SENTINEL {
            return 0;
        }
        let mut stack = vec![handle];
        let mut count = 0usize;
        while let Some(current) = stack.pop() {
            count += 1;
            let node = &self.arena[current];
            if node.has_left() {
                stack.push(node.left_index);
            }
            if node.has_right() {
                stack.push(node.right_index);
            }
        }
        count
    }

    /// Height of the subtree rooted at `handle`, counted in nodes: 0 for an
    /// absent subtree, 1 for a single node. Recomputed from structure on
    /// every call; no cached height exists to go stale when compaction
    /// renumbers handles.
    pub(crate) fn subtree_height(&self, handle: Handle) -> usize {
        if handle == SENTINEL {
            return 0;
        }
        let node = &self.arena[handle];
        let left = self.subtree_height(node.left_index);
        let right = self.subtree_height(node.right_index);
        1 + left.max(right)
    }

    /// Append the subtree's handles to `out` in in-order (sorted) order.
    pub(crate) fn collect_in_order(&self, root: Handle, out: &mut Vec<Handle>) {
        let mut stack = Vec::new();
        let mut current = root;
        while current != SENTINEL || !stack.is_empty() {
            while current != SENTINEL {
                stack.push(current);
                current = self.arena[current].left_index;
            }
            let handle = stack.pop().expect("stack is non-empty");
            out.push(handle);
            current = self.arena[handle].right_index;
        }
    }
}
