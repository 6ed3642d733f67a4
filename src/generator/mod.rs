//! Generator module - renders the markdown index document
//!
//! The consuming site generator expects the document shape produced here
//! byte for byte; do not reformat the header or the per-post blocks.

use anyhow::Result;
use std::fs;

use crate::content::Post;
use crate::Site;

/// Writes the generated index document into the content directory
pub struct Generator {
    site: Site,
}

impl Generator {
    /// Create a new generator
    pub fn new(site: &Site) -> Self {
        Self { site: site.clone() }
    }

    /// Render the index for the given posts and write it to
    /// `<content_dir>/<index_file>`, replacing any prior content.
    /// Returns the number of posts written.
    pub fn generate(&self, posts: &[Post]) -> Result<usize> {
        let output = self.site.content_dir.join(&self.site.config.index_file);
        fs::write(&output, render_index(posts))?;
        tracing::info!("Wrote {:?}", output);
        Ok(posts.len())
    }
}

/// Render the full index document for a collection of posts.
///
/// The collection is rendered in the order given; callers pass it
/// already sorted newest first.
pub fn render_index(posts: &[Post]) -> String {
    let mut out = String::new();

    out.push_str("---\n");
    out.push_str("type: \"docs\"\n");
    out.push_str("toc: false\n");
    out.push_str("---\n\n");

    for post in posts {
        out.push_str(&format!("### [{}]({})\n\n", post.title, post.url));
        out.push_str(&format!("📅 {}\n\n", post.date.format("%d/%m/%Y")));

        if !post.description.is_empty() {
            out.push_str(&format!("{}\n\n", post.description));
        }

        if !post.tags.is_empty() {
            let tags: Vec<String> = post.tags.iter().map(|tag| format!("`{}`", tag)).collect();
            out.push_str(&format!("Tags: {}\n\n", tags.join(" ")));
        }

        out.push_str(&format!("[Ler mais →]({})\n\n", post.url));
        out.push_str("---\n\n");
    }

    out
}
