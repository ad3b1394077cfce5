//! Parsers for the editor's history file
//!
//! # Error Handling Strategy
//!
//! A missing viminfo file is an ordinary state (never used vim, purged
//! history), so the open error is returned with its [`std::io::Error`] intact
//! and the search layer turns `NotFound` into zero results. Lines that are not
//! file-mark records are skipped without comment: viminfo holds many other
//! sections (registers, command history, jump lists) that are none of our
//! business.

pub mod viminfo;

pub use viminfo::{is_tree_buffer, parse_viminfo_file, parse_viminfo_file_without_tree_buffers};
