//! Union-find used to pick spanning corridors

use std::fmt;

/// Union-find over room ids
///
/// Uses union by size with path compression. Ids outside `0..len` behave as
/// isolated singletons: they are their own representative and never merge.
#[derive(Clone, Debug)]
pub struct DisjointSet {
    parent: Vec<usize>,
    size: Vec<usize>,
    components: usize,
}

impl DisjointSet {
    /// Create `count` singleton components
    pub fn new(count: usize) -> Self {
        Self {
            parent: (0..count).collect(),
            size: vec![1; count],
            components: count,
        }
    }

    /// Number of tracked ids
    pub const fn len(&self) -> usize {
        self.parent.len()
    }

    /// Test if no ids are tracked
    pub const fn is_empty(&self) -> bool {
        self.parent.is_empty()
    }

    /// Number of disjoint components
    pub const fn component_count(&self) -> usize {
        self.components
    }

    /// Representative of the component containing `id`
    pub fn find(&mut self, id: usize) -> usize {
        let mut root = id;
        while let Some(&parent) = self.parent.get(root) {
            if parent == root {
                break;
            }
            root = parent;
        }

        // Point every node on the path straight at the root
        let mut current = id;
        while current != root {
            let Some(slot) = self.parent.get_mut(current) else {
                break;
            };
            current = std::mem::replace(slot, root);
        }

        root
    }

    /// Merge the components of `a` and `b`
    ///
    /// Returns `false` when they were already joined or either id is unknown.
    pub fn union(&mut self, a: usize, b: usize) -> bool {
        if a >= self.len() || b >= self.len() {
            return false;
        }

        let root_a = self.find(a);
        let root_b = self.find(b);
        if root_a == root_b {
            return false;
        }

        let size_a = self.size.get(root_a).copied().unwrap_or(1);
        let size_b = self.size.get(root_b).copied().unwrap_or(1);
        let (small, large) = if size_a < size_b {
            (root_a, root_b)
        } else {
            (root_b, root_a)
        };

        if let Some(parent) = self.parent.get_mut(small) {
            *parent = large;
        }
        if let Some(size) = self.size.get_mut(large) {
            *size = size_a + size_b;
        }
        self.components -= 1;
        true
    }

    /// Whether `a` and `b` share a component
    pub fn connected(&mut self, a: usize, b: usize) -> bool {
        self.find(a) == self.find(b)
    }
}

impl fmt::Display for DisjointSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "DisjointSet({} ids in {} components)",
            self.len(),
            self.components
        )
    }
}
