//! Scripted console demo for the todo list.
//!
//! Dispatches a fixed sequence of actions and prints the state after each
//! one, as a listing or as JSON depending on `TODO_DEMO_FORMAT`.

use anyhow::Context;
use reflux_runtime::StoreConfig;
use reflux_runtime::metrics::describe_store_metrics;
use todo::render::{render_json, render_listing};
use todo::{AppState, DemoConfig, OutputFormat, demo_script, todo_store_with_config};
use tracing::info;
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

fn init_tracing(filter: &str) -> anyhow::Result<()> {
    let filter = EnvFilter::try_new(filter).context("invalid RUST_LOG filter")?;

    tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .try_init()
        .context("failed to install tracing subscriber")?;

    Ok(())
}

fn print_state(format: OutputFormat, state: &AppState) {
    match format {
        OutputFormat::Text => print!("{}", render_listing(state)),
        OutputFormat::Json => match render_json(state) {
            Ok(json) => println!("{json}"),
            Err(error) => tracing::error!(%error, "Failed to serialize state"),
        },
    }
}

fn main() -> anyhow::Result<()> {
    // Load environment variables from .env file (if present)
    let _ = dotenvy::dotenv();

    let config = DemoConfig::from_env()?;
    init_tracing(&config.log_filter)?;
    describe_store_metrics();

    info!(store = %config.store_name, format = ?config.format, "Starting todo demo");

    let mut store = todo_store_with_config(StoreConfig::default().with_name(&config.store_name));
    let format = config.format;
    store.set_subscriber(move |state: &AppState| print_state(format, state));

    for action in demo_script() {
        store
            .dispatch(action.clone())
            .with_context(|| format!("dispatch of {action:?} failed"))?;
    }

    info!(
        dispatched = store.dispatch_count(),
        records = store.state().count(),
        "Demo finished"
    );

    let mut state = store.into_state();
    state.release();

    Ok(())
}
