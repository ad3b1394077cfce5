//! Queries against the live filesystem.
//!
//! Both queries start from the same translated pattern as the history search,
//! so a path shows up under the same search string whether it comes from
//! history or from disk.
//!
//! - [`query_filesystem`] - existing paths matching the search
//! - [`query_new_files`] - paths that do not exist yet but could be created

pub mod expand;
pub mod filesystem;
pub mod new_file;

pub use expand::expand_glob;
pub use filesystem::query_filesystem;
pub use new_file::query_new_files;
