//! services/trivia/src/bin/trivia.rs

use std::process::ExitCode;
use std::sync::Arc;

use tracing::{error, info};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};
use trivia_core::ports::GameNotifier;
use trivia_lib::{
    adapters::{bundled_bank, ChannelLineSource, ConsoleNotifier},
    config::Config,
    error::AppError,
    game::{play, AnswerCoordinator, GameSession},
};

fn main() -> ExitCode {
    match run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            error!("Game loop failed: {}", e);
            eprintln!("An error occurred: {}", e);
            ExitCode::FAILURE
        }
    }
}

fn run() -> Result<(), AppError> {
    // --- 1. Load Configuration & Set Up Logging ---
    let config = Config::from_env()?;
    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(config.log_level.to_string()))
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();
    info!("Configuration loaded. Starting game...");

    // --- 2. One thread of control for the whole game ---
    let runtime = tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()?;
    let result = runtime.block_on(play_game(config));

    // The stdin reader may still be blocked on a read; don't wait for it.
    runtime.shutdown_background();
    result
}

async fn play_game(config: Config) -> Result<(), AppError> {
    // --- 3. Initialize Adapters ---
    let bank = bundled_bank()?;
    let notifier: Arc<dyn GameNotifier> = Arc::new(ConsoleNotifier::stdout());
    let input = ChannelLineSource::stdin();

    // --- 4. Build the Session & Play ---
    let coordinator = AnswerCoordinator::new(Box::new(input), notifier, config.countdown.clone());
    let mut session = GameSession::new(bank, coordinator, config.time_limit);
    play(&mut session).await?;

    info!("Game finished normally.");
    Ok(())
}
