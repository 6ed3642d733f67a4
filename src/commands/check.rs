//! Check post dates
//!
//! A post whose front-matter date does not parse still lands in the
//! index, stamped with the run's timestamp, which silently distorts the
//! ordering. This command makes those posts visible without diffing the
//! generated document.

use anyhow::Result;

use crate::content::loader::ContentLoader;
use crate::Site;

/// Report posts whose date fell back to the run timestamp
pub fn run(site: &Site) -> Result<()> {
    let loader = ContentLoader::new(site);
    let posts = loader.load_posts()?;

    let fallbacks: Vec<_> = posts.iter().filter(|p| p.date_is_fallback).collect();

    if fallbacks.is_empty() {
        println!("All {} posts have parseable dates", posts.len());
        return Ok(());
    }

    println!(
        "{} of {} posts have unparseable dates and will sort by run time:",
        fallbacks.len(),
        posts.len()
    );
    for post in fallbacks {
        println!("  {} [{}]", post.title, post.url);
    }

    Ok(())
}
