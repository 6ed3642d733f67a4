//! Content loader - scans the content directory for posts

use anyhow::Result;
use std::fs;
use std::path::Path;
use walkdir::WalkDir;

use super::{FrontMatter, Post};
use crate::helpers::parse_post_date;
use crate::Site;

/// Loads post records from the content directory
pub struct ContentLoader<'a> {
    site: &'a Site,
}

impl<'a> ContentLoader<'a> {
    /// Create a new content loader
    pub fn new(site: &'a Site) -> Self {
        Self { site }
    }

    /// Load all posts from the content directory, sorted by date
    /// descending.
    ///
    /// Each immediate subdirectory holding a post file contributes at
    /// most one record; directories without the file, or whose
    /// front-matter lacks a title or date, are skipped. A missing
    /// content directory is a structural error and aborts the run.
    pub fn load_posts(&self) -> Result<Vec<Post>> {
        let content_dir = &self.site.content_dir;
        if !content_dir.is_dir() {
            anyhow::bail!("Content directory not found: {:?}", content_dir);
        }

        let mut entries: Vec<_> = WalkDir::new(content_dir)
            .min_depth(1)
            .max_depth(1)
            .into_iter()
            .filter_map(|e| e.ok())
            .filter(|e| e.file_type().is_dir())
            .collect();

        // Enumeration order is filesystem-dependent; sort by name so
        // equal-date ordering is reproducible.
        entries.sort_by(|a, b| a.file_name().cmp(b.file_name()));

        let mut posts = Vec::new();
        for entry in entries {
            let post_file = entry.path().join(&self.site.config.post_file);
            if !post_file.is_file() {
                tracing::debug!("Skipping {:?}: no {}", entry.path(), self.site.config.post_file);
                continue;
            }
            if let Some(post) = self.load_post(entry.path(), &post_file) {
                posts.push(post);
            }
        }

        // Sort by date descending (newest first); the sort is stable, so
        // equal dates keep directory-name order
        posts.sort_by(|a, b| b.date.cmp(&a.date));

        Ok(posts)
    }

    /// Build a record from one post file, or `None` if it does not
    /// qualify. Read failures are logged and treated as missing
    /// front-matter; a single bad file never aborts the scan.
    fn load_post(&self, dir: &Path, post_file: &Path) -> Option<Post> {
        let content = match fs::read_to_string(post_file) {
            Ok(content) => content,
            Err(e) => {
                tracing::warn!("Failed to read {:?}: {}", post_file, e);
                return None;
            }
        };

        let fm = FrontMatter::extract(&content)?;

        let title = fm.get_str("title").filter(|t| !t.is_empty())?;
        let raw_date = fm.get("date")?;

        let date = match raw_date.as_str() {
            Some(raw) => {
                let parsed = parse_post_date(raw);
                if parsed.is_fallback() {
                    tracing::warn!(
                        "Date {:?} in {:?} did not parse; substituting the current time",
                        raw,
                        post_file
                    );
                }
                parsed
            }
            // Present but list-shaped; same placeholder path as an
            // unparseable string
            None => {
                tracing::warn!(
                    "Date in {:?} is not a date string; substituting the current time",
                    post_file
                );
                parse_post_date("")
            }
        };

        let dir_name = dir.file_name()?.to_string_lossy();
        let url = format!("/{}/", dir_name);

        let mut post = Post::new(title.to_string(), url, date.value());
        post.date_is_fallback = date.is_fallback();
        post.description = fm.get_str("description").unwrap_or_default().to_string();
        post.tags = fm.get_list("tags").map(|t| t.to_vec()).unwrap_or_default();

        Some(post)
    }
}
