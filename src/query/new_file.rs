use std::collections::BTreeSet;
use std::path::Path;

use anyhow::Result;
use tracing::debug;

use super::expand::{expand_glob, join, list_all_matching};
use crate::pattern::{compile_glob, expand_tilde, translate};

/// Paths that do not exist yet but a search could be asking for, sorted
///
/// The directory and base-name parts of the search are globbed separately and
/// recombined, so `/tmp/abc*/newfile` proposes `/tmp/abcdir/newfile` when
/// `/tmp/abcdir` exists. Glob has no escape for wildcard characters, so the
/// literal directory and base name are always candidates too; that is what
/// allows creating a file whose name contains `*` or `?`.
pub fn query_new_files(search: &str) -> Result<Vec<String>> {
    let stripped = strip_trailing_slashes(search);
    let (dir, base) = split_path(stripped);
    if dir.is_empty() {
        debug!("New file query {:?} has no directory part", search);
        return Ok(Vec::new());
    }

    let dir_pattern = translate(&format!("{}$", dir));
    let base_pattern = translate(&format!("^{}", base));
    debug!("New file query {:?} -> dirs {:?}, names {:?}", search, dir_pattern, base_pattern);

    let mut dirs = BTreeSet::new();
    dirs.insert(literal_dir(dir));
    dirs.extend(expand_glob(&dir_pattern)?);

    let base_matcher = compile_glob(&base_pattern)?;
    let include_hidden = base_pattern.starts_with('.');
    let base_literal = literal_base(base);

    let mut candidates: BTreeSet<String> =
        dirs.iter().map(|dir| join(dir, &base_literal)).collect();
    candidates.extend(list_all_matching(&dirs, &base_matcher, include_hidden)?);

    Ok(candidates.into_iter().filter(|c| !Path::new(c).exists()).collect())
}

/// Drop trailing slashes without eating a bare root or anchored root
fn strip_trailing_slashes(search: &str) -> &str {
    match search.trim_end_matches('/') {
        "" if !search.is_empty() => "/",
        "^" if search.len() > 1 => "^/",
        stripped => stripped,
    }
}

/// Split into directory and base name, like a shell `dirname`/`basename` pair
///
/// The directory keeps no trailing slash unless it is the root (`/` or `^/`).
fn split_path(path: &str) -> (&str, &str) {
    let Some(i) = path.rfind('/') else {
        return ("", path);
    };
    let (head, tail) = (&path[..=i], &path[i + 1..]);
    match head.trim_end_matches('/') {
        "" | "^" => (head, tail),
        dir => (dir, tail),
    }
}

/// The directory as the user typed it, minus the start anchor
fn literal_dir(dir: &str) -> String {
    match dir.strip_prefix('^') {
        Some(rest) => rest.to_string(),
        None => expand_tilde(dir).into_owned(),
    }
}

/// The base name as the user typed it, minus the end anchor
fn literal_base(base: &str) -> String {
    if let Some(stem) = base.strip_suffix("\\$") {
        format!("{}$", stem)
    } else {
        base.strip_suffix('$').unwrap_or(base).to_string()
    }
}
