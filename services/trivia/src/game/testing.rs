//! services/trivia/src/game/testing.rs
//!
//! Test doubles shared by the game modules' unit tests.

use std::sync::{Arc, Mutex};

use trivia_core::{
    domain::{Question, QuestionBank},
    events::{GameEvent, TickKind},
    ports::GameNotifier,
};

/// Keeps every event it is told about.
#[derive(Default)]
pub struct RecordingNotifier {
    events: Mutex<Vec<GameEvent>>,
}

impl RecordingNotifier {
    pub fn new() -> Arc<Self> {
        Arc::new(Self::default())
    }

    pub fn events(&self) -> Vec<GameEvent> {
        self.events.lock().unwrap().clone()
    }

    pub fn ticks(&self) -> Vec<(u32, TickKind)> {
        self.events()
            .into_iter()
            .filter_map(|e| match e {
                GameEvent::Tick { remaining, kind } => Some((remaining, kind)),
                _ => None,
            })
            .collect()
    }

    pub fn clear(&self) {
        self.events.lock().unwrap().clear();
    }
}

impl GameNotifier for RecordingNotifier {
    fn notify(&self, event: GameEvent) {
        self.events.lock().unwrap().push(event);
    }
}

pub fn legends_question(correct: &str) -> Question {
    Question::new(
        format!("Who is {}?", correct),
        vec!["Kobe".into(), "Jordan".into(), "Lebron".into()],
        correct,
    )
    .unwrap()
}

/// Jordan, Kobe, Lebron: the bank used throughout the tests.
pub fn legends_bank() -> QuestionBank {
    QuestionBank::new(
        "NBA Trivia",
        "Test your knowledge about NBA legends.",
        vec![
            legends_question("Jordan"),
            legends_question("Kobe"),
            legends_question("Lebron"),
        ],
    )
    .unwrap()
}
