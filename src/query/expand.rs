use std::fs;
use std::io::ErrorKind;
use std::path::Path;

use anyhow::{Context, Result};
use globset::GlobMatcher;
use tracing::debug;

use crate::pattern::{compile_glob, has_magic};

/// Expand a glob pattern against the filesystem
///
/// Works one path component at a time: `*` never crosses a `/`, and names
/// starting with `.` only match a component that itself starts with `.`.
/// A pattern without wildcards yields itself if the path exists. A trailing
/// `/` restricts matches to directories and is kept on the results.
///
/// Results are sorted.
///
/// # Errors
///
/// Missing directories simply produce no matches. A directory that cannot be
/// listed (permission denied, symlink loop) is skipped while other candidates
/// at the same depth can still be listed; the error is only returned when none
/// of them could. Invalid component patterns are returned as errors.
pub fn expand_glob(pattern: &str) -> Result<Vec<String>> {
    if pattern.is_empty() {
        return Ok(Vec::new());
    }

    if !has_magic(pattern) {
        return Ok(if path_exists(pattern) { vec![pattern.to_string()] } else { Vec::new() });
    }

    let (root, body) = match pattern.strip_prefix('/') {
        Some(rest) => ("/", rest),
        None => ("", pattern),
    };
    let dirs_only = body.ends_with('/');

    let mut candidates = vec![root.to_string()];
    for component in body.split('/').filter(|c| !c.is_empty()) {
        let next = if has_magic(component) {
            let matcher = compile_glob(component)?;
            let include_hidden = component.starts_with('.');
            list_all_matching(&candidates, &matcher, include_hidden)?
        } else {
            candidates
                .iter()
                .map(|base| join(base, component))
                .filter(|path| path_exists(path))
                .collect()
        };

        candidates = next;
        if candidates.is_empty() {
            break;
        }
    }

    if dirs_only {
        candidates.retain(|c| Path::new(c).is_dir());
        for candidate in &mut candidates {
            candidate.push('/');
        }
    }

    candidates.sort();
    Ok(candidates)
}

/// Paths of the entries matching a single-component pattern in each of `dirs`
///
/// Listing failures are skipped as long as at least one directory could be
/// listed, otherwise the first failure is returned.
pub(crate) fn list_all_matching<'a, I>(
    dirs: I,
    matcher: &GlobMatcher,
    include_hidden: bool,
) -> Result<Vec<String>>
where
    I: IntoIterator<Item = &'a String>,
{
    let mut found = Vec::new();
    let mut listed_any = false;
    let mut first_error = None;

    for dir in dirs {
        match list_matching(dir, matcher, include_hidden) {
            Ok(names) => {
                listed_any = true;
                found.extend(names.iter().map(|name| join(dir, name)));
            }
            Err(e) => {
                debug!("Skipping unlistable directory: {:#}", e);
                first_error.get_or_insert(e);
            }
        }
    }

    match first_error {
        Some(e) if !listed_any => Err(e),
        _ => Ok(found),
    }
}

/// Names of the entries in `dir` matching a single-component pattern
fn list_matching(
    dir: &str,
    matcher: &GlobMatcher,
    include_hidden: bool,
) -> Result<Vec<String>> {
    let target = if dir.is_empty() { "." } else { dir };

    let entries = match fs::read_dir(target) {
        Ok(entries) => entries,
        Err(e) if matches!(e.kind(), ErrorKind::NotFound | ErrorKind::NotADirectory) => {
            return Ok(Vec::new());
        }
        Err(e) => {
            return Err(e).with_context(|| format!("Failed to read directory: {}", target));
        }
    };

    let mut names = Vec::new();
    for entry in entries {
        let entry = entry.with_context(|| format!("Failed to read directory entry in {}", target))?;
        let file_name = entry.file_name();
        let Some(name) = file_name.to_str() else {
            debug!("Skipping non UTF-8 name in {}: {:?}", target, file_name);
            continue;
        };

        if name.starts_with('.') && !include_hidden {
            continue;
        }
        if matcher.is_match(name) {
            names.push(name.to_string());
        }
    }

    Ok(names)
}

/// Join a directory and a name without doubling the separator
pub(crate) fn join(dir: &str, name: &str) -> String {
    if dir.is_empty() {
        name.to_string()
    } else if dir.ends_with('/') {
        format!("{}{}", dir, name)
    } else {
        format!("{}/{}", dir, name)
    }
}

/// Whether anything (including a dangling symlink) exists at `path`
fn path_exists(path: &str) -> bool {
    fs::symlink_metadata(path).is_ok()
}

#[cfg(test)]
mod tests {
    use std::fs;

    use tempfile::TempDir;

    use super::*;

    fn tree() -> (TempDir, String) {
        let temp = TempDir::new().unwrap();
        let root = temp.path().to_str().unwrap().to_string();
        fs::write(temp.path().join("alpha.txt"), "").unwrap();
        fs::write(temp.path().join("beta.txt"), "").unwrap();
        fs::write(temp.path().join(".hidden"), "").unwrap();
        fs::create_dir(temp.path().join("abcdir")).unwrap();
        fs::write(temp.path().join("abcdir").join("inner.rs"), "").unwrap();
        (temp, root)
    }

    #[test]
    fn test_literal_pattern() {
        let (_temp, root) = tree();
        let existing = format!("{}/alpha.txt", root);
        assert_eq!(expand_glob(&existing).unwrap(), vec![existing.clone()]);
        assert!(expand_glob(&format!("{}/missing", root)).unwrap().is_empty());
    }

    #[test]
    fn test_star_stays_within_component() {
        let (_temp, root) = tree();
        let found = expand_glob(&format!("{}/*", root)).unwrap();
        assert_eq!(
            found,
            vec![
                format!("{}/abcdir", root),
                format!("{}/alpha.txt", root),
                format!("{}/beta.txt", root),
            ]
        );
    }

    #[test]
    fn test_hidden_needs_explicit_dot() {
        let (_temp, root) = tree();
        let found = expand_glob(&format!("{}/.h*", root)).unwrap();
        assert_eq!(found, vec![format!("{}/.hidden", root)]);
    }

    #[test]
    fn test_wildcard_in_middle_component() {
        let (_temp, root) = tree();
        let found = expand_glob(&format!("{}/abc*/*.rs", root)).unwrap();
        assert_eq!(found, vec![format!("{}/abcdir/inner.rs", root)]);
    }

    #[test]
    fn test_trailing_slash_keeps_directories() {
        let (_temp, root) = tree();
        let found = expand_glob(&format!("{}/a*/", root)).unwrap();
        assert_eq!(found, vec![format!("{}/abcdir/", root)]);
    }

    #[test]
    fn test_missing_parent_is_empty() {
        let (_temp, root) = tree();
        assert!(expand_glob(&format!("{}/nope/*", root)).unwrap().is_empty());
        assert!(expand_glob(&format!("{}/alpha.txt/*", root)).unwrap().is_empty());
    }

    #[cfg(unix)]
    #[test]
    fn test_unlistable_directory_keeps_sibling_matches() {
        let (temp, root) = tree();
        fs::write(temp.path().join("abcdir").join("notes.txt"), "").unwrap();
        std::os::unix::fs::symlink(temp.path().join("loop"), temp.path().join("loop")).unwrap();

        let found = expand_glob(&format!("{}/*/*", root)).unwrap();
        assert_eq!(
            found,
            vec![format!("{}/abcdir/inner.rs", root), format!("{}/abcdir/notes.txt", root)]
        );
    }

    #[cfg(unix)]
    #[test]
    fn test_unlistable_only_directory_is_error() {
        let temp = TempDir::new().unwrap();
        let link = temp.path().join("loop");
        std::os::unix::fs::symlink(&link, &link).unwrap();

        let err = expand_glob(&format!("{}/*", link.to_str().unwrap())).unwrap_err();
        assert!(format!("{:#}", err).contains("Failed to read directory"));
    }

    #[test]
    fn test_empty_pattern() {
        assert!(expand_glob("").unwrap().is_empty());
    }

    #[test]
    fn test_join() {
        assert_eq!(join("/", "etc"), "/etc");
        assert_eq!(join("/etc", "hosts"), "/etc/hosts");
        assert_eq!(join("/etc/", "hosts"), "/etc/hosts");
        assert_eq!(join("", "rel"), "rel");
    }
}
