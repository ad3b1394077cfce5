use std::borrow::Cow;
use std::path::PathBuf;

/// Expand a leading `~` or `~name` prefix to a home directory
///
/// `~` alone resolves to the invoking user's home, `~name` to that user's home
/// from the password database. Anything after the first `/` is kept verbatim.
/// When the home directory cannot be resolved the input is returned untouched,
/// so `~nonexistent/foo` stays `~nonexistent/foo`.
///
/// # Examples
///
/// ```
/// use vim_history_search::expand_tilde;
///
/// assert_eq!(expand_tilde("/etc/hosts"), "/etc/hosts");
/// assert_eq!(expand_tilde("~no-such-user-here/x"), "~no-such-user-here/x");
/// ```
pub fn expand_tilde(path: &str) -> Cow<'_, str> {
    let Some(rest) = path.strip_prefix('~') else {
        return Cow::Borrowed(path);
    };

    let (name, tail) = match rest.find('/') {
        Some(i) => rest.split_at(i),
        None => (rest, ""),
    };

    let home = if name.is_empty() { dirs::home_dir() } else { user_home_dir(name) };
    let Some(home) = home else {
        return Cow::Borrowed(path);
    };

    let home = home.to_string_lossy();
    let home = home.trim_end_matches('/');
    let expanded = format!("{}{}", home, tail);
    if expanded.is_empty() { Cow::Owned("/".to_string()) } else { Cow::Owned(expanded) }
}

/// Look up a named user's home directory
///
/// Returns `None` for unknown users and on platforms without a password database.
#[cfg(unix)]
pub fn user_home_dir(name: &str) -> Option<PathBuf> {
    use std::ffi::{CStr, CString, OsStr};
    use std::os::unix::ffi::OsStrExt;

    // Upper bound for the getpwnam_r scratch buffer
    const MAX_BUFFER: usize = 1 << 20;

    let c_name = CString::new(name).ok()?;
    let mut buffer: Vec<libc::c_char> = vec![0; 1024];

    loop {
        // SAFETY: `passwd` is plain old data that getpwnam_r fills in; all pointers
        // passed are valid for the duration of the call and `buffer.len()` matches
        // the buffer we hand over.
        let mut passwd: libc::passwd = unsafe { std::mem::zeroed() };
        let mut result: *mut libc::passwd = std::ptr::null_mut();
        let rc = unsafe {
            libc::getpwnam_r(
                c_name.as_ptr(),
                &mut passwd,
                buffer.as_mut_ptr(),
                buffer.len(),
                &mut result,
            )
        };

        if rc == libc::ERANGE && buffer.len() < MAX_BUFFER {
            let grown = buffer.len() * 2;
            buffer.resize(grown, 0);
            continue;
        }

        if rc != 0 || result.is_null() || passwd.pw_dir.is_null() {
            return None;
        }

        // SAFETY: pw_dir points into `buffer`, which is still alive, and is
        // NUL-terminated by getpwnam_r.
        let dir = unsafe { CStr::from_ptr(passwd.pw_dir) };
        return Some(PathBuf::from(OsStr::from_bytes(dir.to_bytes())));
    }
}

#[cfg(not(unix))]
pub fn user_home_dir(_name: &str) -> Option<PathBuf> {
    None
}
