//! Disjoint-set (union-find) with path compression and a live component count.

#[derive(Debug, Clone)]
pub struct UnionFind {
    parent: Vec<u32>,
    components: usize,
}

impl UnionFind {
    /// Create `n` singleton components.
    ///
    /// Panics if `n` does not fit in a `u32` index.
    pub fn new(n: usize) -> Self {
        assert!(
            n <= u32::MAX as usize,
            "union-find supports at most {} nodes, got {}",
            u32::MAX,
            n
        );
        Self {
            parent: (0..n as u32).collect(),
            components: n,
        }
    }

    /// Number of nodes tracked.
    #[inline]
    pub fn len(&self) -> usize {
        self.parent.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.parent.is_empty()
    }

    /// Current number of disjoint components.
    #[inline]
    pub fn component_count(&self) -> usize {
        self.components
    }

    #[inline]
    fn check(&self, x: u32) {
        assert!(
            (x as usize) < self.parent.len(),
            "union-find index {} out of range for {} nodes",
            x,
            self.parent.len()
        );
    }

    /// Canonical representative of `x`'s component.
    ///
    /// Every node visited on the way up is rebound directly to the root.
    pub fn find(&mut self, x: u32) -> u32 {
        self.check(x);
        let mut root = x;
        while self.parent[root as usize] != root {
            root = self.parent[root as usize];
        }

        let mut node = x;
        while self.parent[node as usize] != root {
            let next = self.parent[node as usize];
            self.parent[node as usize] = root;
            node = next;
        }

        root
    }

    /// Merge the components of `a` and `b`, attaching `a`'s root under `b`'s.
    /// Returns `true` if `a` and `b` were in different sets.
    pub fn union(&mut self, a: u32, b: u32) -> bool {
        let ra = self.find(a);
        let rb = self.find(b);
        if ra == rb {
            return false;
        }
        self.parent[ra as usize] = rb;
        self.components -= 1;
        true
    }

    /// Returns `true` if `a` and `b` share a component.
    pub fn connected(&mut self, a: u32, b: u32) -> bool {
        self.find(a) == self.find(b)
    }

    /// Sizes of all components, largest first.
    pub fn component_sizes(&mut self) -> Vec<usize> {
        let mut counts = vec![0usize; self.parent.len()];
        for i in 0..self.parent.len() as u32 {
            let root = self.find(i);
            counts[root as usize] += 1;
        }
        let mut sizes: Vec<usize> = counts.into_iter().filter(|&c| c > 0).collect();
        sizes.sort_unstable_by(|a, b| b.cmp(a));
        sizes
    }
}
