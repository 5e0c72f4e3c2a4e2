//! services/trivia/src/game/session.rs
//!
//! Defines the state of one player's game and the operations that move it
//! through a playthrough. The session never touches a clock itself; timing is
//! delegated to the `AnswerCoordinator` it owns.

use tracing::{info, warn};
use trivia_core::{
    domain::{AnswerFeedback, AnswerOutcome, GameReport, Question, QuestionBank},
    events::GameEvent,
    ports::PortResult,
};
use uuid::Uuid;

use crate::game::coordinator::AnswerCoordinator;

/// Where the session is in its lifecycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionPhase {
    NotStarted,
    InProgress,
    Over,
}

/// A read-only view of the session, as shown by status queries.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SessionSnapshot {
    pub score: u32,
    /// 1-based position; one past the total once every question is done.
    pub current_question: usize,
    pub total_questions: usize,
    pub active: bool,
    pub time_remaining: u32,
}

pub struct GameSession {
    id: Uuid,
    bank: QuestionBank,
    coordinator: AnswerCoordinator,
    time_limit: u32,
    score: u32,
    current_index: usize,
    answered: usize,
    outcome_applied: bool,
    active: bool,
    report: Option<GameReport>,
}

impl GameSession {
    pub fn new(bank: QuestionBank, coordinator: AnswerCoordinator, time_limit: u32) -> Self {
        Self {
            id: Uuid::new_v4(),
            bank,
            coordinator,
            time_limit,
            score: 0,
            current_index: 0,
            answered: 0,
            outcome_applied: false,
            active: false,
            report: None,
        }
    }

    /// Identifies the current playthrough; renewed on every `start`.
    pub fn id(&self) -> Uuid {
        self.id
    }

    pub fn time_limit(&self) -> u32 {
        self.time_limit
    }

    fn notify(&self, event: GameEvent) {
        self.coordinator.notifier().notify(event);
    }

    /// Begins a fresh playthrough from the first question.
    pub fn start(&mut self) {
        self.clear();
        self.id = Uuid::new_v4();
        self.active = true;
        info!(session_id = %self.id, questions = self.bank.len(), "Game started.");

        self.notify(GameEvent::Welcome {
            title: self.bank.title().to_string(),
            tagline: self.bank.tagline().to_string(),
            seconds_per_question: self.time_limit,
        });
    }

    pub fn current_question(&self) -> Option<&Question> {
        self.bank.get(self.current_index)
    }

    /// Shows the current question, or says there is none left.
    pub fn present_current(&self) {
        let Some(question) = self.current_question() else {
            self.notify(GameEvent::NoQuestion);
            return;
        };
        self.notify(GameEvent::QuestionShown {
            number: self.current_index + 1,
            total: self.bank.len(),
            prompt: question.prompt().to_string(),
            options: question.options().to_vec(),
        });
    }

    /// Races the player against the clock for the current question.
    /// Does not touch the score. `None` when there is no current question.
    pub async fn resolve_current_question(
        &mut self,
        limit_seconds: u32,
    ) -> PortResult<Option<AnswerOutcome>> {
        let Some(question) = self.bank.get(self.current_index) else {
            return Ok(None);
        };
        let outcome = self
            .coordinator
            .resolve_answer(question, limit_seconds)
            .await?;
        Ok(Some(outcome))
    }

    /// Scores an outcome against the current question and tells the player.
    ///
    /// Returns `None`, changing nothing, when there is no current question or
    /// its outcome has already been applied.
    pub fn apply_outcome(&mut self, outcome: AnswerOutcome) -> Option<AnswerFeedback> {
        let question = self.bank.get(self.current_index)?;
        if self.outcome_applied {
            warn!(index = self.current_index, "Outcome already applied; ignoring.");
            return None;
        }
        let correct_answer = question.correct_answer().to_string();

        let (is_correct, timed_out) = match &outcome {
            AnswerOutcome::Answered(answer) => (question.is_correct(answer), false),
            AnswerOutcome::TimedOut => (false, true),
        };

        self.outcome_applied = true;
        self.answered += 1;
        if is_correct {
            self.score += 1;
        }

        let event = match outcome {
            AnswerOutcome::Answered(answer) if is_correct => GameEvent::AnswerCorrect { answer },
            AnswerOutcome::Answered(_) => GameEvent::AnswerIncorrect {
                correct_answer: correct_answer.clone(),
            },
            AnswerOutcome::TimedOut => GameEvent::TimeExpired {
                correct_answer: correct_answer.clone(),
            },
        };
        self.notify(event);
        self.notify(GameEvent::ScoreUpdate {
            score: self.score,
            answered: self.answered,
        });

        Some(AnswerFeedback {
            is_correct,
            timed_out,
            correct_answer,
            score: self.score,
        })
    }

    /// Moves to the next question. Returns whether one remains.
    pub fn advance(&mut self) -> bool {
        if self.current_index < self.bank.len() {
            self.current_index += 1;
            self.outcome_applied = false;
        }
        self.current_index < self.bank.len()
    }

    pub fn is_over(&self) -> bool {
        self.current_index >= self.bank.len()
    }

    pub fn phase(&self) -> SessionPhase {
        if self.report.is_some() || self.is_over() {
            SessionPhase::Over
        } else if self.active {
            SessionPhase::InProgress
        } else {
            SessionPhase::NotStarted
        }
    }

    /// Finishes the playthrough and reports the result.
    ///
    /// Calling it again returns the same report without repeating anything.
    pub fn end(&mut self) -> GameReport {
        if let Some(report) = self.report {
            return report;
        }

        self.coordinator.cancel_timer();
        self.active = false;

        let report = GameReport::new(self.score, self.bank.len() as u32);
        self.report = Some(report);
        info!(
            session_id = %self.id,
            score = report.score,
            total = report.total_questions,
            percentage = report.percentage,
            "Game over."
        );

        self.notify(GameEvent::GameOver {
            title: self.bank.title().to_string(),
            report,
        });
        self.notify(GameEvent::Remark(report.performance()));
        report
    }

    /// Returns to the zeroed, not-started state.
    pub fn reset(&mut self) {
        self.clear();
        self.active = false;
    }

    fn clear(&mut self) {
        self.coordinator.cancel_timer();
        self.score = 0;
        self.current_index = 0;
        self.answered = 0;
        self.outcome_applied = false;
        self.report = None;
    }

    pub fn snapshot(&self) -> SessionSnapshot {
        SessionSnapshot {
            score: self.score,
            current_question: self.current_index + 1,
            total_questions: self.bank.len(),
            active: self.active,
            time_remaining: self.coordinator.time_remaining(),
        }
    }

    /// Asks whether to go again. "yes" or "y" in any case means yes; end of
    /// input means no.
    pub async fn ask_play_again(&mut self) -> PortResult<bool> {
        self.coordinator.discard_stale_input();
        self.notify(GameEvent::PlayAgainPrompt);
        let line = self.coordinator.read_line().await?;
        Ok(line.as_deref().is_some_and(is_affirmative))
    }

    pub fn farewell(&self) {
        self.notify(GameEvent::Farewell);
    }
}

fn is_affirmative(answer: &str) -> bool {
    let normalized = answer.trim().to_lowercase();
    normalized == "yes" || normalized == "y"
}
