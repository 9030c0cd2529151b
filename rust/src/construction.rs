//! Construction and initialization logic for both tree strategies.
//!
//! Constructors, the alpha clamp for the scapegoat strategy, and the
//! `Default` implementations live here.

use crate::arena::NodeArena;
use crate::error::InitResult;
use crate::types::{AvlTree, BstCore, ScapegoatTree, DEFAULT_ALPHA, MAX_ALPHA, MIN_ALPHA};

impl<T: Ord + Default> BstCore<T> {
    /// Create an empty core: an arena holding only the sentinel.
    pub(crate) fn new() -> Self {
        Self {
            arena: NodeArena::new(),
        }
    }
}

/// Clamp a requested balance factor into `[0.5, 1.0]`.
///
/// Out-of-range values are silently clamped, not rejected; NaN falls back to
/// the default.
fn clamp_alpha(alpha: f64) -> f64 {
    if alpha.is_nan() {
        DEFAULT_ALPHA
    } else {
        alpha.clamp(MIN_ALPHA, MAX_ALPHA)
    }
}

impl<T: Ord + Default> AvlTree<T> {
    /// Create an empty rotation-balanced tree.
    ///
    /// # Examples
    ///
    /// ```
    /// use flatbst::AvlTree;
    ///
    /// let tree: AvlTree<i32> = AvlTree::new();
    /// assert!(tree.is_empty());
    /// ```
    pub fn new() -> Self {
        Self {
            core: BstCore::new(),
        }
    }

    /// Build a tree from a sequence of values, failing fast with
    /// `DuplicateElement` on the first repeated value.
    ///
    /// # Examples
    ///
    /// ```
    /// use flatbst::AvlTree;
    ///
    /// let tree = AvlTree::from_values(vec![3, 1, 2]).unwrap();
    /// assert_eq!(tree.len(), 3);
    ///
    /// assert!(AvlTree::from_values(vec![1, 1]).is_err());
    /// ```
    pub fn from_values(values: Vec<T>) -> InitResult<Self> {
        let mut tree = Self::new();
        for value in values {
            tree.insert(value)?;
        }
        Ok(tree)
    }
}

impl<T: Ord + Default> Default for AvlTree<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Ord + Default> ScapegoatTree<T> {
    /// Create an empty rebuild-balanced tree with the default balance factor.
    pub fn new() -> Self {
        Self::with_alpha(DEFAULT_ALPHA)
    }

    /// Create an empty tree with the given balance factor.
    ///
    /// `alpha` is silently clamped to `[0.5, 1.0]`. Lower values rebalance
    /// more eagerly; at `1.0` no insertion ever triggers a rebuild.
    ///
    /// # Examples
    ///
    /// ```
    /// use flatbst::ScapegoatTree;
    ///
    /// let tree: ScapegoatTree<i32> = ScapegoatTree::with_alpha(0.3);
    /// assert_eq!(tree.alpha(), 0.5);
    /// ```
    pub fn with_alpha(alpha: f64) -> Self {
        Self {
            core: BstCore::new(),
            alpha: clamp_alpha(alpha),
            max_size: 0,
        }
    }

    /// Build a tree from a sequence of values with the default balance
    /// factor; duplicates fail fast.
    pub fn from_values(values: Vec<T>) -> InitResult<Self> {
        Self::from_values_with_alpha(values, DEFAULT_ALPHA)
    }

    /// Build a tree from a sequence of values with the given balance factor.
    pub fn from_values_with_alpha(values: Vec<T>, alpha: f64) -> InitResult<Self> {
        let mut tree = Self::with_alpha(alpha);
        for value in values {
            tree.insert(value)?;
        }
        Ok(tree)
    }

    /// The balance factor in effect, after clamping.
    pub fn alpha(&self) -> f64 {
        self.alpha
    }
}

impl<T: Ord + Default> Default for ScapegoatTree<T> {
    fn default() -> Self {
        Self::new()
    }
}
