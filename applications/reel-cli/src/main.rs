/// Reel - video catalog player
use clap::Parser;
use reel_cli::{config::ReelConfig, library, repl, StdConsole};
use reel_engine::Engine;
use std::io;
use std::path::PathBuf;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

#[derive(Parser)]
#[command(name = "reel")]
#[command(about = "Play, organise and moderate a catalog of videos", long_about = None)]
struct Cli {
    /// Configuration file path
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Catalog file (`Title | video_id | #tag1 , #tag2` per line)
    #[arg(long)]
    catalog: Option<PathBuf>,

    /// Log filter, e.g. `debug` or `reel_engine=debug`
    #[arg(long)]
    log: Option<String>,

    /// Run a single command and exit instead of starting a session
    #[arg(trailing_var_arg = true, allow_hyphen_values = true)]
    command: Vec<String>,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let mut config = ReelConfig::load(cli.config.as_deref())?;
    if let Some(path) = cli.catalog {
        config.catalog.path = Some(path);
    }
    if let Some(filter) = cli.log {
        config.logging.filter = filter;
    }
    config.validate()?;

    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new(&config.logging.filter)),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(io::stderr))
        .init();

    let catalog = library::load_catalog(config.catalog.path.as_deref())?;
    tracing::info!("Loaded {} videos", catalog.len());
    let mut engine = Engine::new(catalog);

    let mut console = StdConsole::new(io::stdin().lock(), io::stdout().lock());

    if cli.command.is_empty() {
        repl::run_session(&mut engine, &mut console, &config.prompt.symbol)?;
    } else {
        repl::run_line(&mut engine, &cli.command.join(" "), &mut console);
    }

    Ok(())
}
