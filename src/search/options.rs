/// Which query strategies a search runs, beyond history matching
///
/// History matching always runs. The filesystem and new-file strategies only
/// run for path-like searches, and only when enabled here.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SearchOptions {
    /// Match existing paths on disk
    pub include_filesystem: bool,
    /// Propose paths that do not exist yet
    pub include_new_file_suggestions: bool,
    /// Hide NERD tree buffers recorded in the history
    pub exclude_tree_buffers: bool,
}

impl SearchOptions {
    /// History only, as recorded
    pub fn history_only() -> Self {
        Self {
            include_filesystem: false,
            include_new_file_suggestions: false,
            exclude_tree_buffers: false,
        }
    }
}

impl Default for SearchOptions {
    fn default() -> Self {
        Self {
            include_filesystem: true,
            include_new_file_suggestions: true,
            exclude_tree_buffers: true,
        }
    }
}
