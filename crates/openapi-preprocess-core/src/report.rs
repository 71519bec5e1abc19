//! Rewrite report: where the normalizer collapsed nullable unions.

use serde::{Deserialize, Serialize};

/// A single collapsed `anyOf`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Rewrite {
    /// JSON Pointer to the rewritten object node (e.g. `#/components/schemas/Bank/properties/name`).
    pub path: String,
    /// Index (0 or 1) of the non-null branch that was merged into the node.
    pub real_branch: usize,
}

/// Every rewrite performed by one normalization pass, in traversal order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct NormalizeReport {
    pub rewrites: Vec<Rewrite>,
}

impl NormalizeReport {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.rewrites.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rewrites.is_empty()
    }

    /// Pointer paths of all rewritten nodes.
    pub fn paths(&self) -> impl Iterator<Item = &str> {
        self.rewrites.iter().map(|r| r.path.as_str())
    }

    pub(crate) fn record(&mut self, path: &str, real_branch: usize) {
        self.rewrites.push(Rewrite {
            path: path.to_string(),
            real_branch,
        });
    }
}
