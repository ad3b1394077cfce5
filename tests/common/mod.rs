//! Shared test utilities for integration tests
#![allow(dead_code)]

use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};

use tempfile::TempDir;

/// Builder for a temporary home directory holding a viminfo file and a file tree
pub struct HomeBuilder {
    temp_dir: TempDir,
    records: Vec<String>,
    raw_lines: Vec<String>,
}

impl HomeBuilder {
    /// Create a new builder with an empty home directory
    pub fn new() -> Self {
        let temp_dir = TempDir::new().expect("Failed to create temp dir");
        Self { temp_dir, records: Vec::new(), raw_lines: Vec::new() }
    }

    /// Root of the home directory as a string (tests build search strings from it)
    pub fn root(&self) -> String {
        self.temp_dir.path().to_str().expect("temp dir path is UTF-8").to_string()
    }

    /// Record a file-mark line (`> path`) in the viminfo file
    pub fn with_record(mut self, path: &str) -> Self {
        self.records.push(path.to_string());
        self
    }

    /// Record a path relative to the home root
    pub fn with_record_in_home(self, relative: &str) -> Self {
        let path = format!("{}/{}", self.root(), relative);
        self.with_record(&path)
    }

    /// Add a non-record line (registers, marks, comments) to the viminfo file
    pub fn with_noise(mut self, line: &str) -> Self {
        self.raw_lines.push(line.to_string());
        self
    }

    /// Create a file (and its parent directories) under the home root
    pub fn with_file(self, relative: &str) -> Self {
        let path = self.temp_dir.path().join(relative);
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).expect("Failed to create parent dirs");
        }
        fs::write(&path, "").expect("Failed to create file");
        self
    }

    /// Create a directory under the home root
    pub fn with_dir(self, relative: &str) -> Self {
        fs::create_dir_all(self.temp_dir.path().join(relative)).expect("Failed to create dir");
        self
    }

    /// Write the viminfo file and return the finished home
    pub fn build(self) -> TestHome {
        let viminfo = self.temp_dir.path().join(".viminfo");
        let mut file = fs::File::create(&viminfo).expect("Failed to create .viminfo");

        writeln!(file, "# This viminfo file was generated by Vim 9.1.").unwrap();
        for line in &self.raw_lines {
            writeln!(file, "{}", line).unwrap();
        }
        writeln!(file, "\n# History of marks within files (newest to oldest):").unwrap();
        for record in &self.records {
            writeln!(file, "\n> {}", record).unwrap();
            writeln!(file, "\t\"\t1\t0").unwrap();
        }

        TestHome { temp_dir: self.temp_dir, viminfo }
    }
}

impl Default for HomeBuilder {
    fn default() -> Self {
        Self::new()
    }
}

/// A built home directory; removed when dropped
pub struct TestHome {
    temp_dir: TempDir,
    viminfo: PathBuf,
}

impl TestHome {
    pub fn path(&self) -> &Path {
        self.temp_dir.path()
    }

    pub fn root(&self) -> String {
        self.temp_dir.path().to_str().expect("temp dir path is UTF-8").to_string()
    }

    pub fn viminfo(&self) -> &Path {
        &self.viminfo
    }

    /// Absolute path string for a path relative to the home root
    pub fn join(&self, relative: &str) -> String {
        format!("{}/{}", self.root(), relative)
    }
}
