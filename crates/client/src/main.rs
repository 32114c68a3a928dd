//! Career build planner binary.
//!
//! Composition root: loads content from the data directory, starts a
//! [`BuildSession`], replays a JSON-lines action stream into it, then prints
//! a text summary and the build JSON to stdout.
//!
//! # Examples
//!
//! ```bash
//! echo '{"type": "career", "payload": "es_huntsman"}' | cargo run -p planner-cli
//!
//! PLANNER_LOCALE=de PLANNER_ACTIONS=actions.jsonl cargo run -p planner-cli
//! ```
mod config;
mod logging;
mod presentation;
mod replay;

use std::fs::File;
use std::io::{self, BufRead, BufReader};
use std::sync::Arc;

use anyhow::{Context, Result};
use config::CliConfig;
use planner_content::ContentFactory;
use planner_session::BuildSession;

fn main() -> Result<()> {
    // Load .env file if it exists (silently ignore if not found)
    let _ = dotenvy::dotenv();

    let config = CliConfig::from_env();
    let _guard = logging::setup_logging(config.log_dir.as_deref())?;

    tracing::info!("Starting planner");
    tracing::info!("Data directory: {}", config.data_dir.display());

    let content = ContentFactory::new(&config.data_dir)
        .load_all(config.locale.as_deref())
        .context("Failed to load planner content")?;
    let mut session = BuildSession::new(
        Arc::new(content.catalog),
        Arc::new(content.locale),
        &content.config,
    )?;
    tracing::debug!(
        careers = session.catalog().careers.len(),
        items = session.catalog().items.len(),
        locale = %content.config.locale,
        "content loaded"
    );

    let reader: Box<dyn BufRead> = match &config.actions {
        Some(path) => Box::new(BufReader::new(File::open(path).with_context(|| {
            format!("Failed to open action file {}", path.display())
        })?)),
        None => Box::new(io::stdin().lock()),
    };
    let stats = replay::replay(&mut session, reader)?;
    tracing::info!(
        applied = stats.applied,
        rejected = stats.rejected,
        "actions replayed"
    );

    let view = session.view()?;
    print!("{}", presentation::render_summary(&view));
    println!("{}", session.export_json()?);

    Ok(())
}
