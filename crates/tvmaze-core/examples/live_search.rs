use tvmaze_core::TvmazeCatalog;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let catalog = TvmazeCatalog::new()?;

    println!("🔍 Searching for 'bletchley'...\n");

    let shows = catalog.search_shows("bletchley").await?;

    println!("Found {} shows:", shows.len());
    for (i, show) in shows.iter().enumerate() {
        println!("  {}. {} - ID: {}", i + 1, show.name, show.id);
        println!("     image: {}", show.image);
    }

    if let Some(first) = shows.first() {
        println!("\n📺 Episodes of '{}' (ID: {}):\n", first.name, first.id);

        let episodes = catalog.list_episodes(first.id).await?;
        for ep in &episodes {
            println!("  {} (season {}, number {})", ep.name, ep.season, ep.number);
        }

        println!("\n{} episodes total.", episodes.len());
    }

    Ok(())
}
