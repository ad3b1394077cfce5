//! Search orchestration over editor history and the filesystem
//!
//! # Error Handling Strategy
//!
//! Each result category is produced independently:
//!
//! - **History**: a missing viminfo file means no history yet and yields zero
//!   results silently. Any other read failure is logged as a warning and also
//!   yields zero history results; it is not an error for the end user.
//!
//! - **Filesystem / new files**: I/O errors (e.g. a directory that cannot be
//!   listed) and invalid patterns are logged, recorded in
//!   [`SearchResults::errors`](crate::models::SearchResults) under their
//!   category, and leave every other category untouched.
//!
//! The search itself never fails.

pub mod options;
pub mod orchestrator;

pub use options::SearchOptions;
pub use orchestrator::{search, search_history};
