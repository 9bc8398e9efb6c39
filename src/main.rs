// src/main.rs — tutor entry point

use std::sync::Arc;

use clap::Parser;

use tutor::cli::{Cli, Commands};
use tutor::client::{HttpApi, LearningApi};
use tutor::infra::config::Config;
use tutor::infra::identity::Identity;
use tutor::infra::{logger, paths};

#[tokio::main]
async fn main() {
    // Initialize logging (respects RUST_LOG / TUTOR_LOG)
    logger::init_logging("warn");

    if let Err(e) = run().await {
        eprintln!("error: {e}");
        std::process::exit(1);
    }
}

async fn run() -> anyhow::Result<()> {
    let cli = Cli::parse();

    // Load config (falls back to defaults if no config.toml)
    let mut config = if let Some(ref path) = cli.config {
        Config::load_from(std::path::Path::new(path))?
    } else {
        Config::load()?
    };
    if let Some(base_url) = cli.base_url {
        config.backend.base_url = base_url;
    }

    paths::ensure_dirs()?;
    let identity = Identity::load_or_create()?;
    let api = HttpApi::new(
        &config.backend.base_url,
        identity,
        config.backend.health_timeout_secs,
    );

    match cli.command {
        Some(Commands::Whoami { set }) => {
            if let Some(id) = set {
                api.set_user_id(&id)?;
            }
            println!("{}", api.user_id());
            Ok(())
        }
        Some(Commands::Analytics) => tutor::cli::analytics::run_analytics(&api).await,
        Some(Commands::Problem {
            topic,
            problem_type,
            difficulty,
        }) => tutor::cli::problem::run_problem(&api, &topic, &problem_type, &difficulty).await,
        Some(Commands::Chat) | None => {
            let api: Arc<dyn LearningApi> = Arc::new(api);
            tutor::tui::run_chat(api, &config)
        }
    }
}
