use std::io::ErrorKind;
use std::path::Path;

use anyhow::Result;
use tracing::{debug, warn};

use super::options::SearchOptions;
use crate::models::{Category, HistoryRecord, ResultEntry, SearchResults};
use crate::parsers::{parse_viminfo_file, parse_viminfo_file_without_tree_buffers};
use crate::pattern::{PathMatcher, is_path_like};
use crate::query::{query_filesystem, query_new_files};

/// Run a search and collect categorized results
///
/// History is always searched. Path-like searches (starting with `/`, `~` or
/// `^/`) additionally query the filesystem and propose new files, as enabled
/// by `options`. Results come grouped in display order: history in file order,
/// then filesystem and new-file matches each sorted.
///
/// The viminfo file is re-read on every call so edits made by a running vim
/// show up in the next search.
///
/// # Examples
///
/// ```no_run
/// use std::path::Path;
/// use vim_history_search::{SearchOptions, search};
///
/// let results = search(Path::new("/home/alice/.viminfo"), "~/notes", &SearchOptions::default());
/// for entry in &results.entries {
///     println!("[{}] {}", entry.category, entry.display);
/// }
/// ```
pub fn search(viminfo: &Path, raw: &str, options: &SearchOptions) -> SearchResults {
    let mut results = SearchResults::default();

    results.queried.push(Category::History);
    match search_history(viminfo, raw, options.exclude_tree_buffers) {
        Ok(entries) => results.entries.extend(entries),
        Err(e) => record_failure(&mut results, Category::History, raw, &e),
    }

    if !is_path_like(raw) {
        debug!("Search {:?} is not path-like, skipping filesystem queries", raw);
        return results;
    }

    if options.include_filesystem {
        collect_paths(&mut results, Category::Filesystem, raw, query_filesystem);
    }
    if options.include_new_file_suggestions {
        collect_paths(&mut results, Category::New, raw, query_new_files);
    }

    results
}

/// History entries matching `raw`, in viminfo order
///
/// A missing viminfo file yields no entries rather than an error.
pub fn search_history(
    viminfo: &Path,
    raw: &str,
    exclude_tree_buffers: bool,
) -> Result<Vec<ResultEntry>> {
    let matcher = PathMatcher::new(raw)?;
    debug!("History query {:?} -> pattern {:?}", raw, matcher.pattern());

    let records = match read_records(viminfo, exclude_tree_buffers) {
        Ok(records) => records,
        Err(e) if is_not_found(&e) => {
            debug!("No viminfo file at {}", viminfo.display());
            return Ok(Vec::new());
        }
        Err(e) => return Err(e),
    };

    Ok(records
        .into_iter()
        .filter(|record| matcher.is_match(&record.path))
        .map(|record| {
            let expanded = record.expanded_path();
            ResultEntry::new(Category::History, record.path, expanded)
        })
        .collect())
}

fn read_records(viminfo: &Path, exclude_tree_buffers: bool) -> Result<Vec<HistoryRecord>> {
    if exclude_tree_buffers {
        parse_viminfo_file_without_tree_buffers(viminfo)
    } else {
        parse_viminfo_file(viminfo)
    }
}

fn is_not_found(err: &anyhow::Error) -> bool {
    err.downcast_ref::<std::io::Error>().is_some_and(|e| e.kind() == ErrorKind::NotFound)
}

fn collect_paths(
    results: &mut SearchResults,
    category: Category,
    raw: &str,
    query: fn(&str) -> Result<Vec<String>>,
) {
    results.queried.push(category);
    match query(raw) {
        Ok(paths) => {
            debug!("{} {} matches for {:?}", paths.len(), category, raw);
            results
                .entries
                .extend(paths.into_iter().map(|p| ResultEntry::new(category, p.clone(), p)));
        }
        Err(e) => record_failure(results, category, raw, &e),
    }
}

fn record_failure(
    results: &mut SearchResults,
    category: Category,
    raw: &str,
    err: &anyhow::Error,
) {
    warn!("{} search failed for {:?}: {:#}", category, raw, err);
    results.errors.push((category, format!("{:#}", err)));
}
