//! services/trivia/src/game/coordinator.rs
//!
//! This module resolves one question at a time by racing the countdown against
//! the player's input. Exactly one of them decides the outcome; the other is
//! cancelled before `resolve_answer` returns.

use std::sync::Arc;

use tracing::{debug, info};
use trivia_core::{
    domain::{AnswerOutcome, Question},
    events::GameEvent,
    ports::{GameNotifier, LineSource, PortError, PortResult},
};

use crate::game::{
    countdown::{CountdownPolicy, TimerHandle},
    input::read_selection,
};

/// Owns the input source and the (at most one) active countdown.
pub struct AnswerCoordinator {
    input: Box<dyn LineSource>,
    notifier: Arc<dyn GameNotifier>,
    policy: CountdownPolicy,
    timer: Option<TimerHandle>,
    last_remaining: u32,
}

impl AnswerCoordinator {
    pub fn new(
        input: Box<dyn LineSource>,
        notifier: Arc<dyn GameNotifier>,
        policy: CountdownPolicy,
    ) -> Self {
        Self {
            input,
            notifier,
            policy,
            timer: None,
            last_remaining: 0,
        }
    }

    pub fn notifier(&self) -> &Arc<dyn GameNotifier> {
        &self.notifier
    }

    /// Seconds left on the running countdown, or on the last one if none runs.
    pub fn time_remaining(&self) -> u32 {
        self.timer
            .as_ref()
            .map_or(self.last_remaining, TimerHandle::remaining)
    }

    #[cfg(test)]
    fn has_active_timer(&self) -> bool {
        self.timer.is_some()
    }

    /// Cancels a countdown left behind by an abandoned resolution.
    pub fn cancel_timer(&mut self) {
        if let Some(timer) = self.timer.take() {
            self.last_remaining = timer.remaining();
            debug!("Cancelling lingering countdown.");
        }
    }

    /// Throws away input typed while no prompt was open.
    pub fn discard_stale_input(&mut self) -> usize {
        let lines = self.input.discard_pending();
        if lines > 0 {
            info!("Discarded {} stale input line(s).", lines);
            self.notifier
                .notify(GameEvent::StaleInputDiscarded { lines });
        }
        lines
    }

    /// Reads one raw line outside of any question.
    pub async fn read_line(&mut self) -> PortResult<Option<String>> {
        self.input.next_line().await
    }

    /// Runs the countdown and the input read concurrently and returns whichever
    /// settles first. If both are ready at once the countdown wins: an answer
    /// only counts when it arrives before time runs out.
    pub async fn resolve_answer(
        &mut self,
        question: &Question,
        limit_seconds: u32,
    ) -> PortResult<AnswerOutcome> {
        if limit_seconds == 0 {
            return Err(PortError::Unexpected(
                "time limit must be at least one second".to_string(),
            ));
        }

        self.cancel_timer();
        self.discard_stale_input();

        let timer = self.timer.insert(TimerHandle::start(
            limit_seconds,
            self.policy.clone(),
            self.notifier.clone(),
        ));
        let read_cancel = timer.child_token();

        let raced = tokio::select! {
            biased;
            expired = timer.expired() => expired.map(|_| AnswerOutcome::TimedOut),
            answer = read_selection(&mut *self.input, question, &*self.notifier, &read_cancel) => {
                answer.map(|selected| match selected {
                    Some(text) => AnswerOutcome::Answered(text),
                    None => AnswerOutcome::TimedOut,
                })
            }
        };

        // Stop the countdown before surfacing any error.
        self.stop_timer().await?;
        let outcome = raced?;
        if outcome == AnswerOutcome::TimedOut {
            self.notifier.notify(GameEvent::TimeUp);
        }
        info!(
            ?outcome,
            remaining = self.last_remaining,
            "Question resolved."
        );
        Ok(outcome)
    }

    async fn stop_timer(&mut self) -> PortResult<()> {
        if let Some(mut timer) = self.timer.take() {
            self.last_remaining = timer.stop().await?;
        }
        Ok(())
    }
}
