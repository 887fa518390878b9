use anyhow::{Context, Result};
use clap::Parser;
use std::path::PathBuf;
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::mpsc;

use feedreader::app::App;
use feedreader::config::Config;
use feedreader::feed::HttpTransport;
use feedreader::loader::{LoadEvent, LoadOutcome};
use feedreader::ui;

/// Get the config directory path (~/.config/feedreader/)
fn get_config_dir() -> Result<PathBuf> {
    let home = std::env::var("HOME").context("HOME environment variable not set")?;
    Ok(PathBuf::from(home).join(".config").join("feedreader"))
}

#[derive(Parser, Debug)]
#[command(name = "feedreader", about = "Terminal feed reader")]
struct Args {
    /// Config file (default: ~/.config/feedreader/config.toml)
    #[arg(long, value_name = "FILE")]
    config: Option<PathBuf>,

    /// Feed to show at startup (0-based)
    #[arg(long, value_name = "INDEX")]
    feed: Option<usize>,

    /// Load one feed, print its entries as JSON and exit
    #[arg(long, value_name = "INDEX", conflicts_with = "list")]
    print: Option<usize>,

    /// Print the configured feeds and exit
    #[arg(long)]
    list: bool,
}

#[tokio::main]
async fn main() -> Result<()> {
    // Logs go to stderr; stdout belongs to the terminal UI.
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let args = Args::parse();

    let config_path = match args.config {
        Some(path) => path,
        None => get_config_dir()?.join("config.toml"),
    };
    let config = Config::load(&config_path)
        .with_context(|| format!("Failed to load config from {}", config_path.display()))?;

    let registry = config.registry();

    if args.list {
        for (i, feed) in registry.iter().enumerate() {
            println!("{:>3}  {}  {}", i, feed.name, feed.url);
        }
        return Ok(());
    }

    let transport = HttpTransport::new(Duration::from_secs(config.request_timeout_secs))
        .context("Failed to create HTTP client")?;
    let (event_tx, event_rx) = mpsc::channel::<LoadEvent>(32);
    let start_feed = args.feed.unwrap_or(config.start_feed);

    let mut app = App::new(&config, registry, Arc::new(transport), event_tx);

    if let Some(index) = args.print {
        return print_feed(&mut app, event_rx, index).await;
    }

    if !app.registry.is_empty() {
        let index = if start_feed < app.registry.len() {
            start_feed
        } else {
            tracing::warn!(
                start_feed,
                feeds = app.registry.len(),
                "Start feed out of range, showing the first feed"
            );
            0
        };
        app.load_feed(index, None)?;
    }

    ui::run(&mut app, event_rx).await?;
    Ok(())
}

/// Headless mode: load feed `index` once and write the page to stdout as JSON.
async fn print_feed(
    app: &mut App,
    mut event_rx: mpsc::Receiver<LoadEvent>,
    index: usize,
) -> Result<()> {
    app.load_feed(index, None)?;

    let event = event_rx
        .recv()
        .await
        .context("Feed load task ended without a result")?;

    let outcome = app.handle_load_event(event);
    let failed = matches!(outcome, LoadOutcome::Failed { .. });

    let json = if failed {
        serde_json::json!({
            "feed": app.registry.at(index)?.name,
            "error": app.page.error_text(),
        })
    } else {
        serde_json::json!({
            "feed": app.page.header_title,
            "title": app.page.subtitle,
            "entries": app.page.entries.as_slice(),
        })
    };
    println!("{}", serde_json::to_string_pretty(&json)?);

    if failed {
        std::process::exit(1);
    }
    Ok(())
}
