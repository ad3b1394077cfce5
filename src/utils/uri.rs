//! `file://` URIs for results and the best-effort directory change made
//! before a file is opened.

use std::env;
use std::path::{Path, PathBuf};

use percent_encoding::{AsciiSet, CONTROLS, percent_decode_str, utf8_percent_encode};
use tracing::debug;

const URI_SCHEME: &str = "file://";

// Characters that cannot appear verbatim in a URI path; '/' stays as is
const PATH_ENCODE_SET: &AsciiSet = &CONTROLS
    .add(b' ')
    .add(b'"')
    .add(b'#')
    .add(b'%')
    .add(b'<')
    .add(b'>')
    .add(b'?')
    .add(b'`')
    .add(b'{')
    .add(b'}')
    .add(b'[')
    .add(b']')
    .add(b'\\')
    .add(b'^')
    .add(b'|');

/// Build the `file://` URI for an expanded filesystem path
///
/// # Examples
///
/// ```
/// use vim_history_search::utils::file_uri;
///
/// assert_eq!(file_uri("/etc/hosts"), "file:///etc/hosts");
/// assert_eq!(file_uri("/tmp/my notes.txt"), "file:///tmp/my%20notes.txt");
/// ```
pub fn file_uri(path: &str) -> String {
    format!("{}{}", URI_SCHEME, utf8_percent_encode(path, PATH_ENCODE_SET))
}

/// Recover the filesystem path from a `file://` URI
///
/// Any authority component (`file://host/path`) is dropped. Returns `None` for
/// other schemes.
pub fn path_from_uri(uri: &str) -> Option<PathBuf> {
    let rest = uri.strip_prefix(URI_SCHEME)?;
    let path = &rest[rest.find('/')?..];
    let decoded = percent_decode_str(path).decode_utf8_lossy();
    Some(PathBuf::from(decoded.as_ref()))
}

/// Change the working directory to the parent of `path`, ignoring failure
///
/// If the parent directory cannot be entered the file usually cannot be read
/// either, and the opener reports that better than we could. Returns whether
/// the directory was changed.
pub fn enter_parent_dir(path: &Path) -> bool {
    let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) else {
        return false;
    };

    match env::set_current_dir(parent) {
        Ok(()) => true,
        Err(e) => {
            debug!("Could not enter {}: {}", parent.display(), e);
            false
        }
    }
}
