//! indice-rs: generates the `content/_index.md` post listing for a
//! markdown blog
//!
//! The crate scans a content directory for post subdirectories, reads
//! each post's front-matter, and writes a single markdown index page
//! listing every post newest first. Rendering the posts themselves is
//! the consuming site generator's job.

pub mod commands;
pub mod config;
pub mod content;
pub mod generator;
pub mod helpers;

use anyhow::Result;
use std::path::Path;

/// The site being indexed
#[derive(Clone)]
pub struct Site {
    /// Site configuration
    pub config: config::SiteConfig,
    /// Base directory
    pub base_dir: std::path::PathBuf,
    /// Content directory holding one subdirectory per post
    pub content_dir: std::path::PathBuf,
}

impl Site {
    /// Create a new site instance from a base directory, loading
    /// `_config.yml` when present
    pub fn new<P: AsRef<Path>>(base_dir: P) -> Result<Self> {
        let base_dir = base_dir.as_ref().to_path_buf();
        let config_path = base_dir.join("_config.yml");

        let config = if config_path.exists() {
            config::SiteConfig::load(&config_path)?
        } else {
            config::SiteConfig::default()
        };

        let content_dir = base_dir.join(&config.content_dir);

        Ok(Self {
            config,
            base_dir,
            content_dir,
        })
    }

    /// Regenerate the index document
    pub fn generate(&self) -> Result<()> {
        commands::generate::run(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    #[test]
    fn test_defaults_without_config_file() {
        let tmp = tempfile::tempdir().unwrap();
        let site = Site::new(tmp.path()).unwrap();
        assert_eq!(site.content_dir, tmp.path().join("content"));
        assert_eq!(site.config.index_file, "_index.md");
    }

    #[test]
    fn test_config_file_overrides_content_dir() {
        let tmp = tempfile::tempdir().unwrap();
        fs::write(tmp.path().join("_config.yml"), "content_dir: posts\n").unwrap();
        let site = Site::new(tmp.path()).unwrap();
        assert_eq!(site.content_dir, tmp.path().join("posts"));
    }
}
