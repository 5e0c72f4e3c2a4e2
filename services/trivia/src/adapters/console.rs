//! services/trivia/src/adapters/console.rs
//!
//! This module contains the adapter that renders game events as plain,
//! line-oriented terminal text. It implements the `GameNotifier` port from the
//! `core` crate.

use std::io::{self, Write};
use std::sync::Mutex;

use tracing::warn;
use trivia_core::{
    domain::Performance,
    events::{GameEvent, TickKind},
    ports::GameNotifier,
};

const SEPARATOR_WIDTH: usize = 50;

//=========================================================================================
// The Main Adapter Struct
//=========================================================================================

/// A `GameNotifier` that writes human-readable text to any writer.
pub struct ConsoleNotifier<W: Write + Send> {
    out: Mutex<W>,
}

impl ConsoleNotifier<io::Stdout> {
    pub fn stdout() -> Self {
        Self::new(io::stdout())
    }
}

impl<W: Write + Send> ConsoleNotifier<W> {
    pub fn new(out: W) -> Self {
        Self {
            out: Mutex::new(out),
        }
    }

    #[cfg(test)]
    fn into_inner(self) -> W {
        match self.out.into_inner() {
            Ok(out) => out,
            Err(poisoned) => poisoned.into_inner(),
        }
    }
}

//=========================================================================================
// `GameNotifier` Trait Implementation
//=========================================================================================

impl<W: Write + Send> GameNotifier for ConsoleNotifier<W> {
    fn notify(&self, event: GameEvent) {
        let text = render(&event);
        let mut out = match self.out.lock() {
            Ok(out) => out,
            Err(poisoned) => poisoned.into_inner(),
        };
        // Prompts stay on the line the player types on.
        let written = if is_prompt(&event) {
            write!(out, "{}", text)
        } else {
            writeln!(out, "{}", text)
        };
        if let Err(e) = written.and_then(|_| out.flush()) {
            warn!("Failed to write to the console: {}", e);
        }
    }
}

fn is_prompt(event: &GameEvent) -> bool {
    matches!(
        event,
        GameEvent::ChoicePrompt { .. } | GameEvent::PlayAgainPrompt
    )
}

fn separator() -> String {
    "=".repeat(SEPARATOR_WIDTH)
}

/// "1, 2, or 3" style list of the valid ordinals.
fn ordinal_list(option_count: usize) -> String {
    let ordinals: Vec<String> = (1..=option_count).map(|n| n.to_string()).collect();
    match ordinals.as_slice() {
        [] => String::new(),
        [only] => only.clone(),
        [first, second] => format!("{} or {}", first, second),
        [init @ .., last] => format!("{}, or {}", init.join(", "), last),
    }
}

/// Renders one event as the text shown to the player.
pub fn render(event: &GameEvent) -> String {
    match event {
        GameEvent::Welcome {
            title,
            tagline,
            seconds_per_question,
        } => format!(
            "Welcome to {}!\n{}\nYou have {} seconds per question!\n{}",
            title,
            tagline,
            seconds_per_question,
            separator()
        ),
        GameEvent::QuestionShown {
            number,
            total,
            prompt,
            options,
        } => {
            let mut text = format!("Question {} of {}:\n{}\nOptions:", number, total, prompt);
            for (i, option) in options.iter().enumerate() {
                text.push_str(&format!("\n{}. {}", i + 1, option));
            }
            text.push_str("\n ");
            text
        }
        GameEvent::NoQuestion => "No more questions available.".to_string(),
        GameEvent::CountdownStarted { seconds } => {
            format!("You have {} seconds remaining", seconds)
        }
        GameEvent::Tick { remaining, kind } => match kind {
            TickKind::Hurry => format!("Timer: {} seconds remaining! Hurry up!", remaining),
            TickKind::Reminder => format!("Timer: {} seconds remaining", remaining),
            TickKind::Final => format!("{}...", remaining),
        },
        GameEvent::ChoicePrompt { option_count } => {
            format!("Enter your choice ({}): ", ordinal_list(*option_count))
        }
        GameEvent::InvalidChoice { option_count } => {
            format!("Invalid choice. Please select {}.", ordinal_list(*option_count))
        }
        GameEvent::TimeUp => "\nTime is up!".to_string(),
        GameEvent::StaleInputDiscarded { lines } => {
            let noun = if *lines == 1 { "line" } else { "lines" };
            format!("(Ignored {} {} typed before this prompt.)", lines, noun)
        }
        GameEvent::AnswerCorrect { answer } => {
            format!("\nCorrect! {} is the right answer.", answer)
        }
        GameEvent::AnswerIncorrect { correct_answer } => {
            format!("\nIncorrect. The correct answer was {}.", correct_answer)
        }
        GameEvent::TimeExpired { correct_answer } => {
            format!("Time expired. The correct answer was {}.", correct_answer)
        }
        GameEvent::ScoreUpdate { score, answered } => {
            format!("Current Score: {}/{}\n{}", score, answered, separator())
        }
        GameEvent::GameOver { title, report } => format!(
            "{}\nGame Over!\nYour final score: {}/{} ({}%)\nThank you for playing {}!",
            separator(),
            report.score,
            report.total_questions,
            report.percentage,
            title
        ),
        GameEvent::Remark(performance) => remark(*performance).to_string(),
        GameEvent::PlayAgainPrompt => "Do you want to play again? (yes/no): ".to_string(),
        GameEvent::Farewell => "\nThanks for playing! See you next time!\n".to_string(),
    }
}

fn remark(performance: Performance) -> &'static str {
    match performance {
        Performance::Outstanding => "Outstanding! You're an NBA genius!",
        Performance::Great => "Great job! You really know your NBA history.",
        Performance::Good => "Good effort! A bit more studying and you'll improve.",
        Performance::KeepTrying => "Keep trying! The NBA world has much to offer.",
    }
}
