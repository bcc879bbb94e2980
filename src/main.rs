use atlas::core::config::{self, CliOverrides};
use clap::Parser;
use simplelog::{ConfigBuilder, LevelFilter, WriteLogger};
use std::fs::File;

#[derive(Parser)]
#[command(name = "atlas", about = "Browse the countries of the world in your terminal")]
struct Args {
    /// REST Countries base URL (default: https://restcountries.com/v3.1)
    #[arg(long)]
    base_url: Option<String>,

    /// Locale used to sort country names, e.g. "en", "sv", "nb-NO"
    #[arg(short, long)]
    locale: Option<String>,

    /// HTTP timeout in seconds
    #[arg(long)]
    timeout_secs: Option<u64>,
}

#[tokio::main]
async fn main() -> std::io::Result<()> {
    let args = Args::parse();
    dotenv::dotenv().ok();

    // Initialize file logger - writes to atlas.log in current directory
    let log_config = ConfigBuilder::new()
        .set_time_format_rfc3339()
        .build();

    if let Ok(log_file) = File::create("atlas.log") {
        let _ = WriteLogger::init(LevelFilter::Debug, log_config, log_file);
    }

    let file_config = config::load_config().unwrap_or_else(|e| {
        log::warn!("{}, using defaults", e);
        config::AtlasConfig::default()
    });
    let resolved = config::resolve(
        &file_config,
        &CliOverrides {
            base_url: args.base_url,
            timeout_secs: args.timeout_secs,
            locale: args.locale,
        },
    );

    log::info!(
        "Atlas starting up: source={}, locale={}, timeout={:?}",
        resolved.base_url,
        resolved.locale,
        resolved.timeout
    );

    atlas::tui::run(resolved)
}
