use std::env;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};

/// File name of vim's history file in the home directory
pub const VIMINFO_FILE_NAME: &str = ".viminfo";

/// Get the default viminfo path (~/.viminfo)
pub fn get_viminfo_path() -> Result<PathBuf> {
    let home = env::var("HOME").context("HOME environment variable not set")?;
    Ok(viminfo_path_in(Path::new(&home)))
}

/// The viminfo path for a given home directory
pub fn viminfo_path_in(home: &Path) -> PathBuf {
    home.join(VIMINFO_FILE_NAME)
}
