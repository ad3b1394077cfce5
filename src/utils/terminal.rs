//! Terminal output sanitization
//!
//! Recorded paths come from a file any program can write, so escape sequences
//! in them must not reach the terminal verbatim.

/// Remove ANSI CSI sequences and control characters from text about to be printed
///
/// # Examples
///
/// ```
/// use vim_history_search::utils::terminal::sanitize_for_terminal;
///
/// assert_eq!(sanitize_for_terminal("/tmp/\x1b[2Jevil"), "/tmp/evil");
/// ```
pub fn sanitize_for_terminal(text: &str) -> String {
    let mut result = String::with_capacity(text.len());
    let mut chars = text.chars().peekable();

    while let Some(ch) = chars.next() {
        if ch == '\x1b' && chars.peek() == Some(&'[') {
            chars.next();
            // CSI ends at the first letter
            for next in chars.by_ref() {
                if next.is_ascii_alphabetic() {
                    break;
                }
            }
            continue;
        }

        if ch.is_control() && ch != '\t' {
            continue;
        }

        result.push(ch);
    }

    result
}
