use std::collections::BTreeSet;
use std::path::Path;

use anyhow::Result;
use tracing::debug;

use super::expand::expand_glob;
use crate::pattern::translate;

/// Existing filesystem paths matching a search string, sorted
///
/// When the search names a directory (ends with `/` or `/$`) the directory
/// itself is included alongside its matching entries, if it exists.
///
/// The caller decides whether the search is path-like enough to be worth
/// expanding; see [`crate::pattern::is_path_like`].
pub fn query_filesystem(search: &str) -> Result<Vec<String>> {
    let pattern = translate(search);
    debug!("Filesystem query {:?} -> pattern {:?}", search, pattern);

    let mut found: BTreeSet<String> = expand_glob(&pattern)?.into_iter().collect();

    if names_directory(search)
        && let Some(dir) = pattern_directory(&pattern)
        && Path::new(dir).is_dir()
    {
        found.insert(dir.to_string());
    }

    Ok(found.into_iter().collect())
}

fn names_directory(search: &str) -> bool {
    search.ends_with('/') || search.ends_with("/$")
}

/// Everything up to and including the last `/` of the pattern, unexpanded
fn pattern_directory(pattern: &str) -> Option<&str> {
    pattern.rfind('/').map(|i| &pattern[..=i])
}
