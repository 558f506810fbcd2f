use clap::Parser;
use purgecache::core::config;
use purgecache::tui;
use simplelog::{ConfigBuilder, LevelFilter, WriteLogger};
use std::fs::File;

#[derive(Parser)]
#[command(name = "purgecache", about = "Terminal worry-purge console")]
struct Args {
    /// Gemini model to use
    #[arg(short, long)]
    model: Option<String>,
}

#[tokio::main]
async fn main() -> std::io::Result<()> {
    let args = Args::parse();
    dotenv::dotenv().ok();

    // Initialize file logger - writes to purgecache.log in current directory
    let log_config = ConfigBuilder::new()
        .set_time_format_rfc3339()
        .build();

    if let Ok(log_file) = File::create("purgecache.log") {
        let _ = WriteLogger::init(LevelFilter::Debug, log_config, log_file);
    }

    let file_config = config::load_config().unwrap_or_else(|e| {
        log::warn!("Config load failed ({e}), falling back to defaults");
        config::PurgeConfig::default()
    });
    let resolved = config::resolve(&file_config, args.model.as_deref());

    log::info!("purgecache starting up with model: {}", resolved.model_name);

    tui::run(resolved)
}
