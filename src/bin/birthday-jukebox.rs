use birthday_jukebox::{clamp_year_to_eighties, JukeboxConfig, TrackResolver};
use chrono::{Datelike, NaiveDate};
use clap::Parser;
use std::sync::Arc;

/// Find an 80s song for a birthday
#[derive(Parser)]
#[command(
    name = "birthday-jukebox",
    about = "Find an 80s song for a birthday",
    long_about = None
)]
struct Cli {
    /// Birthdate in YYYY-MM-DD form
    #[arg(long, conflicts_with = "year")]
    birthdate: Option<NaiveDate>,

    /// Target year (clamped into 1980-1989)
    #[arg(long)]
    year: Option<i32>,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::init();
    let args = Cli::parse();

    let year = match (args.year, args.birthdate) {
        (Some(year), _) => year,
        (None, Some(birthdate)) => birthdate.year(),
        (None, None) => {
            eprintln!("❌ Error: pass either --birthdate YYYY-MM-DD or --year YYYY");
            std::process::exit(1);
        }
    };
    let target_year = clamp_year_to_eighties(year);

    let config = JukeboxConfig::from_env();
    if config.developer_token.is_none() {
        eprintln!("ℹ️  {} not set; searching the public iTunes catalog only", birthday_jukebox::config::TOKEN_ENV_VAR);
    }

    let http_client = http_client::native::NativeClient::new();
    let resolver = TrackResolver::from_config(Arc::new(http_client), &config);

    println!("🔎 Looking for a {target_year} song...");
    let track = resolver.resolve(target_year).await;

    println!();
    println!("🎵 {} — {}", track.title, track.artist);
    if let Some(album) = &track.album {
        println!("💿 {album}");
    }
    println!("📅 {}", track.year);
    if track.has_preview() {
        println!("▶️  {}", track.preview_url);
    } else {
        println!("🔇 No audio preview available");
    }
    if let Some(source_url) = &track.source_url {
        println!("🔗 {source_url}");
    }

    Ok(())
}
