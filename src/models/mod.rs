//! Data models for history search.
//!
//! - [`HistoryRecord`] - a path recorded in the viminfo file
//! - [`ResultEntry`] - one match, tagged with its [`Category`]
//! - [`SearchResults`] - all matches for one search plus per-category failures

pub mod history;
pub mod search;

pub use history::HistoryRecord;
pub use search::{Category, MIME_HINT, ResultEntry, SearchResults};
