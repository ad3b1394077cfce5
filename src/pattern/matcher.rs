use anyhow::{Context, Result};
use globset::{GlobBuilder, GlobMatcher};

use super::tilde::expand_tilde;
use super::translate::translate;

/// Compile a glob pattern with shell wildcard (fnmatch) semantics
///
/// - `*` and `?` match any character, `/` included
/// - backslash is an ordinary character, not an escape
/// - braces are literal characters, not alternation
/// - an unclosed `[` is a literal bracket
/// - `**` is the same as `*`, with no special meaning between separators
///
/// The same compiled form is used for in-memory path matching and for matching
/// single directory entries during filesystem expansion.
pub fn compile_glob(pattern: &str) -> Result<GlobMatcher> {
    let glob = GlobBuilder::new(&fnmatch_form(pattern))
        .literal_separator(false)
        .backslash_escape(false)
        .allow_unclosed_class(true)
        .build()
        .with_context(|| format!("Invalid search pattern: {}", pattern))?;
    Ok(glob.compile_matcher())
}

/// Whether a pattern contains glob wildcard characters
pub fn has_magic(pattern: &str) -> bool {
    pattern.contains(['*', '?', '['])
}

/// Rewrite a pattern so globset reads it the way fnmatch does
///
/// Braces are wrapped in a character class to match literally, and runs of `*`
/// collapse to one so globset never sees a recursive `**`.
fn fnmatch_form(pattern: &str) -> String {
    let mut out = String::with_capacity(pattern.len());
    for ch in pattern.chars() {
        match ch {
            '{' => out.push_str("[{]"),
            '}' => out.push_str("[}]"),
            '*' if out.ends_with('*') => {}
            _ => out.push(ch),
        }
    }
    out
}

/// Matches recorded history paths against a search string
///
/// A path matches if either the path as recorded or its tilde-expanded form
/// matches, since vim can record unexpanded paths such as `~user/notes`.
#[derive(Debug, Clone)]
pub struct PathMatcher {
    pattern: String,
    matcher: GlobMatcher,
}

impl PathMatcher {
    /// Translate `search` and compile the resulting pattern
    pub fn new(search: &str) -> Result<Self> {
        let pattern = translate(search);
        let matcher = compile_glob(&pattern)?;
        Ok(Self { pattern, matcher })
    }

    /// The translated glob pattern
    pub fn pattern(&self) -> &str {
        &self.pattern
    }

    pub fn is_match(&self, path: &str) -> bool {
        if self.matcher.is_match(path) {
            return true;
        }
        let expanded = expand_tilde(path);
        self.matcher.is_match(&*expanded)
    }
}
