//! curriculum - inspect a curriculum served as JSON fragments

use std::sync::Arc;

use clap::Parser;
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use curriculum_cli::{commands, config::Args};
use curriculum_client::{FragmentSource, HttpFragmentSource};
use curriculum_sdk::{ChunkedCurriculumStore, CurriculumLoader, CurriculumStore};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load environment variables from .env file if present
    let _ = dotenvy::dotenv();

    let args = Args::parse();

    // Logs go to stderr; stdout carries the report
    let log_level = args.log_level.clone();
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| format!("curriculum={},info", log_level).into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let config = args.curriculum_config()?;
    let source = Arc::new(HttpFragmentSource::new(config.http_source())?);
    info!(source = %source.describe(), chunked = args.chunked, "Curriculum source ready");

    let loader: Arc<dyn CurriculumLoader> = if args.chunked {
        let store = ChunkedCurriculumStore::new(source, config);
        let mut progress = store.subscribe_progress();
        tokio::spawn(async move {
            while progress.changed().await.is_ok() {
                let line = commands::progress_line(&progress.borrow_and_update());
                eprintln!("{}", line);
            }
        });
        Arc::new(store)
    } else {
        Arc::new(CurriculumStore::new(source, config))
    };

    let report = commands::run(loader.as_ref(), &args.command, args.chunked).await?;
    if args.json {
        println!("{}", serde_json::to_string_pretty(&report.json)?);
    } else {
        print!("{}", report.text);
    }

    if !report.success {
        std::process::exit(1);
    }
    Ok(())
}
