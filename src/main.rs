use anyhow::{bail, Context};
use clap::Parser;

use favmoji::cli::Cli;
use favmoji::config::Config;
use favmoji::favorites::{FileStorage, PersistentFavorites};
use favmoji::logging::init_tracing;
use favmoji::preview::render_query;
use favmoji::ui::runtime;

fn main() {
    if let Err(e) = run() {
        eprintln!("Error: {:#}", e);
        std::process::exit(1);
    }
}

fn run() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let mut config = match &cli.config {
        Some(path) if !path.exists() => bail!("config file '{}' not found", path.display()),
        Some(path) => Config::load_from(path)?,
        None => Config::load()?,
    };
    cli.apply(&mut config);
    config.validate()?;

    let log_file = config.resolved_log_file();
    if let Err(e) = init_tracing(&log_file) {
        eprintln!("Warning: logging disabled ({}): {}", log_file.display(), e);
    }
    tracing::info!(version = env!("CARGO_PKG_VERSION"), "favmoji starting");

    if let Some(query) = &cli.render {
        let storage = FileStorage::new(config.storage.resolved_path());
        let markup = render_query(
            &config.catalog.to_source(),
            PersistentFavorites::new(storage),
            query,
        );
        println!("{}", markup);
        return Ok(());
    }

    runtime::run(&config).context("terminal UI failed")
}
