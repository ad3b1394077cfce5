use std::fmt;

use serde::{Deserialize, Serialize};

use crate::utils::file_uri;

/// MIME type advertised for every result
pub const MIME_HINT: &str = "text/plain";

/// Result group, in display order
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    /// Paths recorded in the editor history
    History,
    /// Existing paths matched on disk
    Filesystem,
    /// Paths that do not exist yet and could be created
    New,
}

impl Category {
    pub const ALL: [Category; 3] = [Category::History, Category::Filesystem, Category::New];

    /// Heading shown above the category's results
    pub fn label(self) -> &'static str {
        match self {
            Category::History => "Vim files",
            Category::Filesystem => "Filesystem",
            Category::New => "New files",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResultEntry {
    pub category: Category,
    /// Text shown to the user (the path as recorded or found)
    pub display: String,
    /// Expanded filesystem path backing the entry
    pub path: String,
    /// `file://` URI handed to the opener
    pub uri: String,
}

impl ResultEntry {
    pub fn new(category: Category, display: impl Into<String>, path: impl Into<String>) -> Self {
        let path = path.into();
        let uri = file_uri(&path);
        Self { category, display: display.into(), path, uri }
    }

    pub fn mime_hint(&self) -> &'static str {
        MIME_HINT
    }
}

/// Outcome of one search, grouped by category
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchResults {
    /// Entries ordered by category (history, filesystem, new)
    pub entries: Vec<ResultEntry>,
    /// Categories whose query strategy actually ran
    pub queried: Vec<Category>,
    /// Failures of individual categories; other categories are unaffected
    pub errors: Vec<(Category, String)>,
}

impl SearchResults {
    pub fn in_category(&self, category: Category) -> impl Iterator<Item = &ResultEntry> {
        self.entries.iter().filter(move |e| e.category == category)
    }

    pub fn was_queried(&self, category: Category) -> bool {
        self.queried.contains(&category)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
