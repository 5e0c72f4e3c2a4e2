//! crates/trivia_core/src/events.rs
//!
//! Defines the protocol between the game logic and whatever presents it to
//! the player. The game never writes text itself; it emits these events.

use crate::domain::{GameReport, Performance};

/// How urgently a countdown tick should be presented.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TickKind {
    /// The first, most prominent reminder.
    Hurry,
    /// Any later reminder before the final stretch.
    Reminder,
    /// One of the last few seconds.
    Final,
}

/// Everything the game can tell the player.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GameEvent {
    /// Opens a playthrough.
    Welcome {
        title: String,
        tagline: String,
        seconds_per_question: u32,
    },

    /// There is no current question to show.
    NoQuestion,

    /// A question is on screen. `number` is 1-based.
    QuestionShown {
        number: usize,
        total: usize,
        prompt: String,
        options: Vec<String>,
    },

    /// The countdown for the current question has begun.
    CountdownStarted { seconds: u32 },

    /// A threshold notification from a running countdown.
    Tick { remaining: u32, kind: TickKind },

    /// The player is being asked for a selection.
    ChoicePrompt { option_count: usize },

    /// The last line did not name one of the options.
    InvalidChoice { option_count: usize },

    /// The countdown reached zero before an answer arrived.
    TimeUp,

    /// Lines typed before the current prompt opened were thrown away.
    StaleInputDiscarded { lines: usize },

    AnswerCorrect { answer: String },

    AnswerIncorrect { correct_answer: String },

    /// Shown in place of correct/incorrect when the question timed out.
    TimeExpired { correct_answer: String },

    /// Running score after a question, out of the questions answered so far.
    ScoreUpdate { score: u32, answered: usize },

    /// Closes a playthrough. `title` names the bank that was played.
    GameOver { title: String, report: GameReport },

    Remark(Performance),

    PlayAgainPrompt,

    Farewell,
}
