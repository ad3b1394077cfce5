//! Vim History Search - find files from vim's edit history and the filesystem
//!
//! This library turns a loosely anchored, shell-like search string into a glob
//! pattern and runs it against:
//!
//! - file paths recorded in `~/.viminfo`
//! - existing paths on disk (for path-like searches)
//! - paths that do not exist yet, to offer creating them
//!
//! # Example
//!
//! ```no_run
//! use vim_history_search::{SearchOptions, get_viminfo_path, search};
//!
//! let viminfo = get_viminfo_path()?;
//! let results = search(&viminfo, "~/src/", &SearchOptions::default());
//! println!("{} matches", results.len());
//! # Ok::<(), anyhow::Error>(())
//! ```

pub mod cli;
pub mod models;
pub mod parsers;
pub mod pattern;
pub mod query;
pub mod search;
pub mod utils;

// Re-export commonly used types
pub use models::{Category, HistoryRecord, ResultEntry, SearchResults};
pub use parsers::parse_viminfo_file;
pub use pattern::{PathMatcher, expand_tilde, translate};
pub use search::{SearchOptions, search};
pub use utils::{file_uri, format_path_with_tilde, get_viminfo_path};
