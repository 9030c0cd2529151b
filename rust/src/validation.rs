//! Invariant checking and debugging utilities.
//!
//! Both strategies expose a cheap boolean check and a detailed variant that
//! reports the first violated invariant as a message. The core checks cover
//! the arena (positional handles, sentinel shape), the linkage (mutual
//! parent/child consistency, single root, full reachability), and the BST
//! ordering; the AVL overlay adds the height-balance bound.

use crate::types::{AvlTree, BstCore, Handle, ScapegoatTree, SENTINEL};

impl<T: Ord + Default> BstCore<T> {
    /// Check every structural invariant, reporting the first violation.
    pub(crate) fn check_invariants_detailed(&self) -> Result<(), String> {
        self.check_positions()?;
        self.check_sentinel_shape()?;
        self.check_linkage()?;
        self.check_single_root()?;
        self.check_reachability()?;
        self.check_ordering()?;
        Ok(())
    }

    /// Every node's `self_index` must equal the slot it occupies.
    fn check_positions(&self) -> Result<(), String> {
        for handle in 0..=self.len() as Handle {
            let node = &self.arena[handle];
            if node.self_index != handle {
                return Err(format!(
                    "node at slot {} records handle {}",
                    handle, node.self_index
                ));
            }
        }
        Ok(())
    }

    /// The sentinel never gains a right child or a parent.
    fn check_sentinel_shape(&self) -> Result<(), String> {
        let sentinel = &self.arena[SENTINEL];
        if sentinel.right_index != SENTINEL {
            return Err("sentinel has a right child".to_string());
        }
        if sentinel.parent_index != SENTINEL {
            return Err("sentinel has a parent".to_string());
        }
        Ok(())
    }

    /// Following any parent link and the matching child slot must lead back.
    fn check_linkage(&self) -> Result<(), String> {
        for handle in 1..=self.len() as Handle {
            let node = &self.arena[handle];
            let parent = &self.arena[node.parent_index];
            if parent.left_index != handle && parent.right_index != handle {
                return Err(format!(
                    "node {} claims parent {} but is not among its children",
                    handle, node.parent_index
                ));
            }
            if node.has_left() && self.arena[node.left_index].parent_index != handle {
                return Err(format!("left child of {} has a different parent", handle));
            }
            if node.has_right() && self.arena[node.right_index].parent_index != handle {
                return Err(format!("right child of {} has a different parent", handle));
            }
        }
        Ok(())
    }

    /// Exactly one node (the root) has the sentinel as parent, unless empty.
    fn check_single_root(&self) -> Result<(), String> {
        let mut roots = 0usize;
        for handle in 1..=self.len() as Handle {
            if self.arena[handle].parent_index == SENTINEL {
                roots += 1;
                if self.root_handle() != handle {
                    return Err(format!(
                        "node {} has the sentinel as parent but is not the anchored root",
                        handle
                    ));
                }
            }
        }
        let expected = usize::from(!self.is_empty());
        if roots != expected {
            return Err(format!("{} root nodes, expected {}", roots, expected));
        }
        Ok(())
    }

    /// Every allocated node must be reachable from the root.
    fn check_reachability(&self) -> Result<(), String> {
        let reachable = self.subtree_size(self.root_handle());
        if reachable != self.len() {
            return Err(format!(
                "{} nodes reachable from the root, arena holds {}",
                reachable,
                self.len()
            ));
        }
        Ok(())
    }

    /// The successor walk must produce a strictly increasing sequence.
    fn check_ordering(&self) -> Result<(), String> {
        let mut current = self.first_handle();
        let mut previous: Option<&T> = None;
        let mut count = 0usize;
        while current != SENTINEL {
            count += 1;
            let value = &self.arena[current].value;
            if let Some(prev) = previous {
                if prev >= value {
                    return Err(format!("in-order walk not strictly increasing at step {}", count));
                }
            }
            previous = Some(value);
            current = self.successor(current);
        }
        if count != self.len() {
            return Err(format!(
                "in-order walk visited {} nodes, arena holds {}",
                count,
                self.len()
            ));
        }
        Ok(())
    }
}

// ============================================================================
// PUBLIC VALIDATION API
// ============================================================================

impl<T: Ord + Default> AvlTree<T> {
    /// Returns true when all invariants hold, including the balance bound.
    pub fn check_invariants(&self) -> bool {
        self.check_invariants_detailed().is_ok()
    }

    /// Check invariants with detailed error reporting.
    pub fn check_invariants_detailed(&self) -> Result<(), String> {
        self.core.check_invariants_detailed()?;
        self.check_balance_bound()
    }

    /// `|height(left) - height(right)| <= 1` at every node.
    fn check_balance_bound(&self) -> Result<(), String> {
        for handle in 1..=self.core.len() as Handle {
            let balance = self.balance_factor(handle);
            if balance.abs() > 1 {
                return Err(format!(
                    "node {} has balance factor {}",
                    handle, balance
                ));
            }
        }
        Ok(())
    }
}

impl<T: Ord + Default> ScapegoatTree<T> {
    /// Returns true when all structural invariants hold.
    pub fn check_invariants(&self) -> bool {
        self.check_invariants_detailed().is_ok()
    }

    /// Check invariants with detailed error reporting.
    pub fn check_invariants_detailed(&self) -> Result<(), String> {
        self.core.check_invariants_detailed()
    }
}

// ============================================================================
// DEBUGGING UTILITIES
// ============================================================================

impl<T: Ord + Default> BstCore<T> {
    fn print_node(&self, handle: Handle, depth: usize)
    where
        T: std::fmt::Debug,
    {
        if handle == SENTINEL {
            return;
        }
        let indent = "  ".repeat(depth);
        let node = &self.arena[handle];
        println!("{}[{}] {:?}", indent, handle, node.value);
        self.print_node(node.left_index, depth + 1);
        self.print_node(node.right_index, depth + 1);
    }
}

impl<T: Ord + Default> AvlTree<T> {
    /// Returns all elements as a vector (for testing/debugging).
    pub fn slice(&self) -> Vec<&T> {
        self.iter().collect()
    }

    /// Prints the tree structure for debugging.
    pub fn print_structure(&self)
    where
        T: std::fmt::Debug,
    {
        println!("AvlTree ({} nodes):", self.len());
        self.core.print_node(self.core.root_handle(), 1);
    }
}

impl<T: Ord + Default> ScapegoatTree<T> {
    /// Returns all elements as a vector (for testing/debugging).
    pub fn slice(&self) -> Vec<&T> {
        self.iter().collect()
    }

    /// Prints the tree structure for debugging.
    pub fn print_structure(&self)
    where
        T: std::fmt::Debug,
    {
        println!("ScapegoatTree ({} nodes, alpha {}):", self.len(), self.alpha);
        self.core.print_node(self.core.root_handle(), 1);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_valid_trees_pass() {
        let avl = AvlTree::from_values((0..50).collect()).unwrap();
        avl.check_invariants_detailed().unwrap();

        let scapegoat = ScapegoatTree::from_values((0..50).collect()).unwrap();
        scapegoat.check_invariants_detailed().unwrap();
    }

    #[test]
    fn test_detects_broken_child_link() {
        let mut tree = AvlTree::from_values(vec![2, 1, 3]).unwrap();
        let handle = tree.core.lookup(&1);
        tree.core.arena[handle].parent_index = handle;
        assert!(!tree.check_invariants());
    }

    #[test]
    fn test_detects_wrong_self_index() {
        let mut tree = ScapegoatTree::from_values(vec![2, 1, 3]).unwrap();
        let handle = tree.core.lookup(&3);
        tree.core.arena[handle].self_index = 99;
        let message = tree.check_invariants_detailed().unwrap_err();
        assert!(message.contains("records handle"), "{}", message);
    }

    #[test]
    fn test_detects_ordering_violation() {
        let mut tree = AvlTree::from_values(vec![2, 1, 3]).unwrap();
        let handle = tree.core.lookup(&1);
        tree.core.arena[handle].value = 10;
        assert!(tree.check_invariants_detailed().is_err());
    }

    #[test]
    fn test_detects_unbalanced_avl() {
        // Hand-build a right spine behind the AVL type's back.
        let mut tree: AvlTree<i32> = AvlTree::new();
        for value in [1, 2, 3, 4] {
            tree.core.insert_unbalanced(value).unwrap();
        }
        let message = tree.check_invariants_detailed().unwrap_err();
        assert!(message.contains("balance factor"), "{}", message);
    }

    #[test]
    fn test_slice_matches_iteration() {
        let tree = AvlTree::from_values(vec![5, 2, 8]).unwrap();
        assert_eq!(tree.slice(), [&2, &5, &8]);
    }
}
