use clap::Parser;
use marquee::core::config;
use simplelog::{ConfigBuilder, LevelFilter, WriteLogger};
use std::fs::File;

#[derive(Parser)]
#[command(name = "marquee", about = "Terminal movie finder")]
struct Args {
    /// Search term used for the first fetch after startup
    #[arg(short, long)]
    search: Option<String>,
}

#[tokio::main]
async fn main() -> std::io::Result<()> {
    let args = Args::parse();
    dotenv::dotenv().ok();

    // Initialize file logger - writes to marquee.log in current directory
    let log_config = ConfigBuilder::new()
        .set_time_format_rfc3339()
        .build();

    if let Ok(log_file) = File::create("marquee.log") {
        let _ = WriteLogger::init(LevelFilter::Debug, log_config, log_file);
    }

    let file_config = config::load_config().unwrap_or_else(|e| {
        log::warn!("Falling back to default config: {}", e);
        config::MarqueeConfig::default()
    });
    let resolved = config::resolve(&file_config, args.search.as_deref());

    log::info!(
        "Marquee starting up with search term {:?}",
        resolved.search_term
    );

    marquee::tui::run(resolved)
}
