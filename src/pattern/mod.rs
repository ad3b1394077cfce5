//! Search string to glob pattern translation.
//!
//! A search string is loosely anchored: by default it matches anywhere in a path,
//! and a handful of leading/trailing characters change that.
//!
//! # Syntax
//!
//! ```text
//! foo      -> *foo*        unanchored substring
//! ^foo     -> foo*         anchored at the start
//! foo$     -> *foo         anchored at the end
//! ^foo$    -> foo          anchored at both ends
//! /foo     -> /foo*        absolute paths are anchored at the start
//! ~/foo    -> $HOME/foo*   leading tilde expands to a home directory
//! \^foo    -> *^foo*       escaped caret is a literal caret
//! \~foo    -> *~foo*       escaped tilde is a literal tilde
//! foo\$    -> *foo$*       escaped dollar is a literal dollar
//! ```
//!
//! The resulting pattern is consumed twice: matched in memory against recorded
//! history paths ([`PathMatcher`]) and expanded against the live filesystem
//! (`crate::query::expand`). Both use the same compiled glob semantics.

pub mod matcher;
pub mod tilde;
pub mod translate;

pub use matcher::{PathMatcher, compile_glob, has_magic};
pub use tilde::{expand_tilde, user_home_dir};
pub use translate::{is_path_like, translate};
