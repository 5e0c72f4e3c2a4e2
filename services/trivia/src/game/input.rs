//! services/trivia/src/game/input.rs
//!
//! Reading one valid selection for a question, re-prompting on bad input.

use tokio_util::sync::CancellationToken;
use trivia_core::{
    domain::Question,
    events::GameEvent,
    ports::{GameNotifier, LineSource, PortError, PortResult},
};

/// Maps a typed line to the option it names, if it names one.
pub fn parse_choice<'q>(line: &str, question: &'q Question) -> Option<&'q str> {
    line.trim()
        .parse::<usize>()
        .ok()
        .and_then(|ordinal| question.option_at(ordinal))
}

/// Prompts until the player names one of the question's options and returns
/// its text. Returns `Ok(None)` as soon as `cancel` fires, whether between
/// attempts or while waiting for a line.
pub async fn read_selection(
    input: &mut dyn LineSource,
    question: &Question,
    notifier: &dyn GameNotifier,
    cancel: &CancellationToken,
) -> PortResult<Option<String>> {
    let option_count = question.options().len();
    loop {
        if cancel.is_cancelled() {
            return Ok(None);
        }
        notifier.notify(GameEvent::ChoicePrompt { option_count });

        let line = tokio::select! {
            biased;
            _ = cancel.cancelled() => return Ok(None),
            line = input.next_line() => line?,
        };
        let Some(line) = line else {
            return Err(PortError::InputClosed);
        };

        match parse_choice(&line, question) {
            Some(answer) => return Ok(Some(answer.to_string())),
            None => notifier.notify(GameEvent::InvalidChoice { option_count }),
        }
    }
}
