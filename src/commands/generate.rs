//! Generate the index document

use anyhow::Result;

use crate::content::loader::ContentLoader;
use crate::generator::Generator;
use crate::Site;

/// Scan the content directory and rewrite the index document
pub fn run(site: &Site) -> Result<()> {
    let start = std::time::Instant::now();

    let loader = ContentLoader::new(site);
    let posts = loader.load_posts()?;

    tracing::info!("Loaded {} posts", posts.len());

    let generator = Generator::new(site);
    let count = generator.generate(&posts)?;

    let duration = start.elapsed();
    tracing::info!("Generated in {:.2}s", duration.as_secs_f64());

    println!(
        "Generated {} with {} posts",
        site.content_dir.join(&site.config.index_file).display(),
        count
    );

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use std::path::Path;

    fn write_post(content_dir: &Path, dir: &str, front: &str) {
        let post_dir = content_dir.join(dir);
        fs::create_dir_all(&post_dir).unwrap();
        fs::write(
            post_dir.join("index.md"),
            format!("---\n{}\n---\n\nBody.\n", front),
        )
        .unwrap();
    }

    #[test]
    fn test_generate_writes_index() {
        let tmp = tempfile::tempdir().unwrap();
        fs::create_dir_all(tmp.path().join("content")).unwrap();
        let site = Site::new(tmp.path()).unwrap();
        write_post(
            &site.content_dir,
            "hello",
            "title: Hello\ndate: 2024-03-15\ndescription: Hi\ntags: [rust]",
        );

        run(&site).unwrap();

        let index = fs::read_to_string(site.content_dir.join("_index.md")).unwrap();
        assert!(index.starts_with("---\ntype: \"docs\"\ntoc: false\n---\n\n"));
        assert!(index.contains("### [Hello](/hello/)"));
        assert!(index.contains("📅 15/03/2024"));
        assert!(index.contains("Tags: `rust`"));
    }

    #[test]
    fn test_generate_overwrites_prior_index() {
        let tmp = tempfile::tempdir().unwrap();
        fs::create_dir_all(tmp.path().join("content")).unwrap();
        let site = Site::new(tmp.path()).unwrap();
        fs::write(site.content_dir.join("_index.md"), "stale content").unwrap();

        run(&site).unwrap();

        let index = fs::read_to_string(site.content_dir.join("_index.md")).unwrap();
        assert!(!index.contains("stale"));
    }

    #[test]
    fn test_generate_is_idempotent_for_parsed_dates() {
        let tmp = tempfile::tempdir().unwrap();
        fs::create_dir_all(tmp.path().join("content")).unwrap();
        let site = Site::new(tmp.path()).unwrap();
        write_post(&site.content_dir, "a", "title: A\ndate: 2024-01-01");
        write_post(&site.content_dir, "b", "title: B\ndate: 2024-06-01");

        run(&site).unwrap();
        let first = fs::read_to_string(site.content_dir.join("_index.md")).unwrap();
        run(&site).unwrap();
        let second = fs::read_to_string(site.content_dir.join("_index.md")).unwrap();

        assert_eq!(first, second);
    }

    #[test]
    fn test_generate_fails_without_content_dir() {
        let tmp = tempfile::tempdir().unwrap();
        let site = Site::new(tmp.path()).unwrap();

        assert!(run(&site).is_err());
    }
}
