use anyhow::Result;
use templeguide::app::SearchResponse;
use templeguide::{TempleGuideApp, TempleGuideConfig};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<()> {
    let config = TempleGuideConfig::load()?;

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new(config.logging.level.clone())),
        )
        .init();

    let app = TempleGuideApp::load(config).await?;

    if let Some(banner) = app.todays_festival_banner() {
        println!("🛕 Today: {banner}");
    }

    let query: String = std::env::args().skip(1).collect::<Vec<_>>().join(" ");
    let (title, temples) = match app.search(&query) {
        SearchResponse::Default(temples) => ("Featured temples", temples),
        SearchResponse::Matches(temples) => ("Search results", temples),
    };

    println!("{title} ({} found):", temples.len());
    for temple in &temples {
        let place = temple
            .district
            .as_deref()
            .or(temple.location.as_deref())
            .unwrap_or("-");
        println!("  - {} ({place})", temple.name);
    }

    Ok(())
}
