use anyhow::Result;
use teloxide::prelude::*;

pub mod ai;
pub mod commands;
pub mod config;
pub mod db;
pub mod description;
pub mod handlers;
pub mod lang;
pub mod met;
pub mod search;
pub mod system_info;
pub mod text_utils;
pub mod texts;

pub mod tests;

pub use commands::Command;
pub use config::Config;

// ──────────────────────────────────────────────────────────────
// Main application setup
// ──────────────────────────────────────────────────────────────

pub async fn run() -> Result<()> {
    // Loads .env if present (for local development).
    let config = Config::from_env();

    // Initialize tracing subscriber for logging
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    tracing::info!("Starting art museum bot...");

    let bot = Bot::from_env();

    let db_url = db::prepare_sqlite_url(&config.db_url);
    tracing::info!("Connecting to database at: {}", &db_url);
    let db = db::connect_db(&db_url, 5).await?;
    tracing::info!("Database connection successful.");

    let met = met::MetClient::new(config.met_base_url.clone());
    let ai = config.ai.clone();

    let handler = dptree::entry()
        .branch(Update::filter_callback_query().endpoint(handlers::callback_handler))
        .branch(
            Update::filter_message()
                .branch(dptree::entry().filter_command::<Command>().endpoint(
                    |bot: Bot, msg: Message, cmd: Command, db: db::Database, met: met::MetClient| async move {
                        cmd.dispatch(bot, msg, db, met).await
                    },
                ))
                .branch(dptree::endpoint(handlers::handle_search_text)),
        );

    Dispatcher::builder(bot, handler)
        .dependencies(dptree::deps![db, ai, met])
        .enable_ctrlc_handler()
        .build()
        .dispatch()
        .await;

    Ok(())
}
