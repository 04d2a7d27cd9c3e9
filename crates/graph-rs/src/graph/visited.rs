/// Fixed-size set of visited nodes for a single traversal.
#[derive(Debug, Clone)]
pub struct VisitedSet {
    flags: Vec<bool>,
    len: usize,
}

impl VisitedSet {
    pub fn new(node_count: usize) -> Self {
        Self {
            flags: vec![false; node_count],
            len: 0,
        }
    }

    /// Mark `node` as visited. Returns `true` if it was not visited before.
    ///
    /// # Panics
    /// Panics if `node >= node_count`; callers validate nodes against the
    /// graph first.
    pub fn insert(&mut self, node: usize) -> bool {
        let newly_visited = !std::mem::replace(&mut self.flags[node], true);
        if newly_visited {
            self.len += 1;
        }
        newly_visited
    }

    pub fn contains(&self, node: usize) -> bool {
        self.flags.get(node).copied().unwrap_or(false)
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }
}
