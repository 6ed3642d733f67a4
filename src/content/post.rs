//! Post model

use chrono::NaiveDateTime;
use serde::Serialize;

/// A published blog post entry, built from one content subdirectory
#[derive(Debug, Clone, Serialize)]
pub struct Post {
    /// Post title
    pub title: String,

    /// Published link path, `/<directory-name>/`
    pub url: String,

    /// Publication date used for ordering and display
    pub date: NaiveDateTime,

    /// Short description shown in the index (may be empty)
    pub description: String,

    /// Post tags (empty unless the front-matter value is list-shaped)
    pub tags: Vec<String>,

    /// True when the front-matter date did not parse and the run
    /// timestamp was substituted
    pub date_is_fallback: bool,
}

impl Post {
    /// Create a post with the required fields; description and tags
    /// default to empty
    pub fn new(title: String, url: String, date: NaiveDateTime) -> Self {
        Self {
            title,
            url,
            date,
            description: String::new(),
            tags: Vec::new(),
            date_is_fallback: false,
        }
    }
}
