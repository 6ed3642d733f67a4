//! List indexed posts

use anyhow::Result;

use crate::content::loader::ContentLoader;
use crate::Site;

/// List all posts that would appear in the index
pub fn run(site: &Site, json: bool) -> Result<()> {
    let loader = ContentLoader::new(site);
    let posts = loader.load_posts()?;

    if json {
        println!("{}", serde_json::to_string_pretty(&posts)?);
        return Ok(());
    }

    println!("Posts ({}):", posts.len());
    for post in posts {
        let marker = if post.date_is_fallback { " (date fallback)" } else { "" };
        println!(
            "  {} - {} [{}]{}",
            post.date.format("%Y-%m-%d"),
            post.title,
            post.url,
            marker
        );
    }

    Ok(())
}
