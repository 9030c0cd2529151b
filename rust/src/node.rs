//! Node-level accessors and predicates.
//!
//! Nodes carry only their value and link handles; anything that needs to
//! follow a link lives on the core, which owns the arena.

use crate::types::{Handle, Node, SENTINEL};

impl<T> Node<T> {
    /// Create a node with explicit linkage.
    pub(crate) fn new(
        value: T,
        self_index: Handle,
        parent_index: Handle,
        left_index: Handle,
        right_index: Handle,
    ) -> Self {
        Self {
            value,
            self_index,
            left_index,
            right_index,
            parent_index,
        }
    }

    /// The element stored in this node.
    pub fn value(&self) -> &T {
        &self.value
    }

    /// The node's own handle, equal to its arena position.
    pub fn self_handle(&self) -> Handle {
        self.self_index
    }

    /// Left child handle, [`SENTINEL`] when absent.
    pub fn left(&self) -> Handle {
        self.left_index
    }

    /// Right child handle, [`SENTINEL`] when absent.
    pub fn right(&self) -> Handle {
        self.right_index
    }

    /// Parent handle, [`SENTINEL`] for the root.
    pub fn parent(&self) -> Handle {
        self.parent_index
    }

    pub fn has_left(&self) -> bool {
        self.left_index != SENTINEL
    }

    pub fn has_right(&self) -> bool {
        self.right_index != SENTINEL
    }

    /// True for the permanent node at handle 0.
    pub fn is_sentinel(&self) -> bool {
        self.self_index == SENTINEL
    }
}

impl<T: Default> Node<T> {
    /// The permanent slot-0 node: no meaningful value, `left_index` anchors
    /// the root, parent points at itself via [`SENTINEL`].
    pub(crate) fn sentinel() -> Self {
        Self::new(T::default(), SENTINEL, SENTINEL, SENTINEL, SENTINEL)
    }
}
