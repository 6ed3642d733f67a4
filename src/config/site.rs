//! Site configuration (_config.yml)

use anyhow::Result;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// Site configuration
///
/// Every field has a default matching the blog's layout, so the config
/// file is optional and normally absent.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct SiteConfig {
    /// Directory scanned for post subdirectories
    pub content_dir: String,

    /// Post file looked up inside each subdirectory
    pub post_file: String,

    /// Generated index file name, written inside the content directory
    pub index_file: String,
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            content_dir: "content".to_string(),
            post_file: "index.md".to_string(),
            index_file: "_index.md".to_string(),
        }
    }
}

impl SiteConfig {
    /// Load configuration from a file
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = fs::read_to_string(path.as_ref())?;
        let config: SiteConfig = serde_yaml::from_str(&content)?;
        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = SiteConfig::default();
        assert_eq!(config.content_dir, "content");
        assert_eq!(config.post_file, "index.md");
        assert_eq!(config.index_file, "_index.md");
    }

    #[test]
    fn test_parse_config() {
        let yaml = r#"
content_dir: posts
"#;
        let config: SiteConfig = serde_yaml::from_str(yaml).unwrap();
        assert_eq!(config.content_dir, "posts");
        assert_eq!(config.index_file, "_index.md");
    }
}
