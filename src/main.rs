use anyhow::Result;
use clap::{Parser, Subcommand};
use std::sync::Arc;
use tickd::{
    client::{view::TaskView, HttpTaskApi},
    config::Config,
    rest,
    storage::TaskStore,
    AppContext,
};
use tracing::info;

#[derive(Parser)]
#[command(
    name = "tickd",
    about = "Minimal task tracker — HTTP/JSON API with a CLI client",
    version
)]
struct Args {
    #[command(subcommand)]
    command: Option<Command>,

    /// Task API port
    #[arg(long, env = "TICKD_PORT")]
    port: Option<u16>,

    /// Data directory for the SQLite database and config.toml
    #[arg(long, env = "TICKD_DATA_DIR")]
    data_dir: Option<std::path::PathBuf>,

    /// Log level (trace, debug, info, warn, error)
    #[arg(long, env = "TICKD_LOG")]
    log: Option<String>,

    /// Bind address for the API server (default: 127.0.0.1; use 0.0.0.0 for LAN access)
    #[arg(long, env = "TICKD_BIND")]
    bind_address: Option<String>,

    /// Base URL of the task API, for the client subcommands
    #[arg(long, env = "TICKD_API_URL")]
    api_url: Option<String>,
}

#[derive(Subcommand)]
enum Command {
    /// Start the task API server (default when no subcommand given).
    ///
    /// Examples:
    ///   tickd serve
    ///   tickd
    Serve,
    /// List all tasks.
    List,
    /// Add a new task.
    ///
    /// Examples:
    ///   tickd add "buy milk"
    Add {
        /// Task text
        text: String,
    },
    /// Delete a task by id.
    Rm {
        /// Task id (from `tickd list`)
        id: String,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    let args = Args::parse();
    let config = Config::new(
        args.port,
        args.data_dir,
        args.log,
        args.bind_address,
        args.api_url,
    );
    setup_logging(&config.log);

    match args.command.unwrap_or(Command::Serve) {
        Command::Serve => run_serve(config).await,
        Command::List => run_list(&config).await,
        Command::Add { text } => run_add(&config, text).await,
        Command::Rm { id } => run_rm(&config, &id).await,
    }
}

fn setup_logging(log_level: &str) {
    tracing_subscriber::fmt()
        .with_env_filter(log_level)
        .compact()
        .init();
}

async fn run_serve(config: Config) -> Result<()> {
    let store = Arc::new(TaskStore::new(&config.data_dir).await?);
    info!(data_dir = %config.data_dir.display(), "task store opened");

    let ctx = Arc::new(AppContext {
        config: Arc::new(config),
        store,
        started_at: std::time::Instant::now(),
    });

    rest::start_rest_server(ctx).await
}

// ── Client subcommands ────────────────────────────────────────────────────────

async fn run_list(config: &Config) -> Result<()> {
    let api = HttpTaskApi::new(&config.api_url)?;
    let mut view = TaskView::new();
    if !view.refresh(&api).await {
        anyhow::bail!("could not fetch tasks from {}", config.api_url);
    }
    if view.tasks().is_empty() {
        println!("No tasks.");
        return Ok(());
    }
    for task in view.tasks() {
        let mark = if task.completed { "x" } else { " " };
        println!("[{mark}] {}  {}", task.id, task.text);
    }
    Ok(())
}

async fn run_add(config: &Config, text: String) -> Result<()> {
    let api = HttpTaskApi::new(&config.api_url)?;
    let mut view = TaskView::new();
    view.set_pending(text);
    if !view.submit(&api).await {
        anyhow::bail!("could not add task via {}", config.api_url);
    }
    // The confirmed task is the one the server just assigned an id to.
    if let Some(task) = view.tasks().last() {
        println!("Added {}  {}", task.id, task.text);
    }
    Ok(())
}

async fn run_rm(config: &Config, id: &str) -> Result<()> {
    let api = HttpTaskApi::new(&config.api_url)?;
    let mut view = TaskView::new();
    if !view.remove(&api, id).await {
        anyhow::bail!("could not delete task via {}", config.api_url);
    }
    println!("Task deleted");
    Ok(())
}
