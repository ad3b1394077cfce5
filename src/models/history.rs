use serde::{Deserialize, Serialize};

use crate::pattern::expand_tilde;

/// A file path recorded in the viminfo file-marks history (`> path` lines)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HistoryRecord {
    /// Path exactly as vim wrote it, possibly with an unexpanded `~` prefix
    pub path: String,
}

impl HistoryRecord {
    pub fn new(path: impl Into<String>) -> Self {
        Self { path: path.into() }
    }

    /// The recorded path with any leading `~` or `~user` expanded
    pub fn expanded_path(&self) -> String {
        expand_tilde(&self.path).into_owned()
    }
}
