//! services/trivia/src/game/runner.rs
//!
//! The top-level game loop: plays every question, reports, and offers a replay.

use tracing::{info, info_span, Instrument};
use trivia_core::domain::GameReport;

use crate::{error::AppError, game::session::GameSession};

/// Plays until the player declines another round. Returns every round's report.
pub async fn play(session: &mut GameSession) -> Result<Vec<GameReport>, AppError> {
    let mut reports = Vec::new();
    loop {
        session.start();
        let span = info_span!("playthrough", session_id = %session.id());
        let report = play_round(session).instrument(span).await?;
        reports.push(report);

        if !session.ask_play_again().await? {
            info!(rounds = reports.len(), "Player is done.");
            session.farewell();
            return Ok(reports);
        }
        session.reset();
    }
}

async fn play_round(session: &mut GameSession) -> Result<GameReport, AppError> {
    let limit = session.time_limit();
    while !session.is_over() {
        session.present_current();
        let Some(outcome) = session.resolve_current_question(limit).await? else {
            break;
        };
        session.apply_outcome(outcome);
        session.advance();
    }
    Ok(session.end())
}
