use super::tilde::expand_tilde;

/// Translate a raw search string into a glob pattern
///
/// Leading characters are examined first, in this order (first match wins):
///
/// 1. `~` - expand the home directory prefix, no leading wildcard
/// 2. `\~` - drop the backslash, prepend `*` so the tilde is matched literally
/// 3. `^` - drop the caret, no leading wildcard
/// 4. `\^` - drop the backslash, prepend `*` so the caret is matched literally
/// 5. `/` - absolute path, kept as is
/// 6. anything else - prepend `*`
///
/// Then the end of the intermediate pattern:
///
/// 1. `\$` - replaced by `$*` (literal dollar, still unanchored)
/// 2. `$` - dropped, no trailing wildcard
/// 3. anything else - append `*`
///
/// Never fails: every input, including the empty string, yields a pattern.
///
/// # Examples
///
/// ```
/// use vim_history_search::translate;
///
/// assert_eq!(translate("foo"), "*foo*");
/// assert_eq!(translate("^foo$"), "foo");
/// assert_eq!(translate("/foo/"), "/foo/*");
/// assert_eq!(translate("foo\\$"), "*foo$*");
/// ```
pub fn translate(search: &str) -> String {
    let pattern = if search.starts_with('~') {
        expand_tilde(search).into_owned()
    } else if let Some(rest) = search.strip_prefix("\\~") {
        format!("*~{}", rest)
    } else if let Some(rest) = search.strip_prefix('^') {
        rest.to_string()
    } else if let Some(rest) = search.strip_prefix("\\^") {
        format!("*^{}", rest)
    } else if search.starts_with('/') {
        search.to_string()
    } else {
        format!("*{}", search)
    };

    if let Some(stem) = pattern.strip_suffix("\\$") {
        format!("{}$*", stem)
    } else if let Some(stem) = pattern.strip_suffix('$') {
        stem.to_string()
    } else {
        pattern + "*"
    }
}

/// Whether a search string names a filesystem location
///
/// Only these searches are worth expanding against the real filesystem; an
/// unanchored substring search would have to walk everything.
pub fn is_path_like(search: &str) -> bool {
    search.starts_with('/') || search.starts_with('~') || search.starts_with("^/")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unanchored() {
        assert_eq!(translate("foo"), "*foo*");
        assert_eq!(translate("f\\oo"), "*f\\oo*");
    }

    #[test]
    fn test_empty_search_matches_everything() {
        assert_eq!(translate(""), "**");
    }

    #[test]
    fn test_absolute() {
        assert_eq!(translate("/foo"), "/foo*");
        assert_eq!(translate("/foo/"), "/foo/*");
        assert_eq!(translate("/^foo"), "/^foo*");
        assert_eq!(translate("/~root"), "/~root*");
    }

    #[test]
    fn test_caret_and_dollar() {
        assert_eq!(translate("^foo"), "foo*");
        assert_eq!(translate("\\^foo"), "*^foo*");
        assert_eq!(translate("foo$"), "*foo");
        assert_eq!(translate("foo\\$"), "*foo$*");
        assert_eq!(translate("^foo$"), "foo");
        assert_eq!(translate("\\^foo\\$"), "*^foo$*");
    }

    #[test]
    fn test_directory_anchor() {
        assert_eq!(translate("/foo/$"), "/foo/");
        assert_eq!(translate("^/foo/"), "/foo/*");
    }

    #[test]
    fn test_lone_markers() {
        assert_eq!(translate("^"), "*");
        assert_eq!(translate("$"), "*");
        assert_eq!(translate("^$"), "");
        assert_eq!(translate("\\$"), "*$*");
    }

    #[test]
    fn test_tilde_only_expands_in_leading_position() {
        assert_eq!(translate("bar~root/foo"), "*bar~root/foo*");
        assert_eq!(translate("^~root/foo"), "~root/foo*");
        assert_eq!(translate("\\~root"), "*~root*");
    }

    #[test]
    fn test_tilde_unknown_user_left_alone() {
        assert_eq!(translate("~nonexistent"), "~nonexistent*");
    }

    #[cfg(unix)]
    #[test]
    fn test_tilde_named_user() {
        let home = expand_tilde("~root").into_owned();
        assert_ne!(home, "~root");
        assert_eq!(translate("~root"), format!("{}*", home));
        assert_eq!(translate("~root/foo"), format!("{}/foo*", home.trim_end_matches('/')));
        assert_eq!(translate("~root/foo$"), format!("{}/foo", home.trim_end_matches('/')));
    }

    #[test]
    fn test_translate_is_deterministic() {
        for search in ["", "foo", "^a$", "\\", "\\\\$", "~", "/x/y/"] {
            assert_eq!(translate(search), translate(search));
        }
    }

    #[test]
    fn test_is_path_like() {
        assert!(is_path_like("/etc/passwd"));
        assert!(is_path_like("~/notes"));
        assert!(is_path_like("~"));
        assert!(is_path_like("^/etc"));
        assert!(!is_path_like("readme"));
        assert!(!is_path_like("^etc"));
        assert!(!is_path_like("\\~foo"));
        assert!(!is_path_like(""));
    }
}
