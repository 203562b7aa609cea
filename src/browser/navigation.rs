//! Navigation Stack: current path, depth below the tab root, and the
//! selection remembered at every visited depth.

/// Deepest level the browser descends to below a tab root.
pub const MAX_DEPTH: usize = 32;

/// Path/depth state plus the per-depth selection memory.
///
/// `last_index` is a fixed arena indexed by depth; it never grows.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NavStack {
    path: String,
    depth: usize,
    last_index: [usize; MAX_DEPTH + 1],
}

impl NavStack {
    pub fn new(root: &str) -> Self {
        Self {
            path: root.to_string(),
            depth: 0,
            last_index: [0; MAX_DEPTH + 1],
        }
    }

    pub fn path(&self) -> &str {
        &self.path
    }

    pub fn depth(&self) -> usize {
        self.depth
    }

    /// Selection remembered for `depth`; 0 for levels never written.
    pub fn remembered(&self, depth: usize) -> usize {
        self.last_index.get(depth).copied().unwrap_or(0)
    }

    /// Jump back to a tab root at depth 0. Remembered indices are left as
    /// they are; they are rewritten before being read again.
    pub fn reset(&mut self, root: &str) {
        self.path = root.to_string();
        self.depth = 0;
    }

    /// Replace the path without touching depth or memory.
    pub fn set_path(&mut self, path: &str) {
        self.path = path.to_string();
    }

    /// Descend into `name`, remembering `selected` for the current level.
    /// At `MAX_DEPTH` the depth stays put.
    pub fn push(&mut self, name: &str, selected: usize) {
        self.last_index[self.depth] = selected;
        self.depth = (self.depth + 1).min(MAX_DEPTH);
        self.path.push('/');
        self.path.push_str(name);
    }

    /// Ascend one level and return the selection remembered for it.
    /// Returns `None` at depth 0.
    pub fn pop(&mut self) -> Option<usize> {
        if self.depth == 0 {
            return None;
        }
        if let Some(pos) = self.path.rfind('/') {
            self.path.truncate(pos);
        }
        self.depth -= 1;
        Some(self.last_index[self.depth])
    }
}
