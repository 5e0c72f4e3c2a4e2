//! services/trivia/src/adapters/bundled.rs
//!
//! Loads the question bank that ships inside the binary.
//! The JSON records are mapped into validated domain types from the core crate.

use serde::Deserialize;
use trivia_core::domain::{Question, QuestionBank};

use crate::error::AppError;

const BUNDLED_QUESTIONS: &str = include_str!("../../assets/questions.json");

#[derive(Debug, Deserialize)]
struct BankRecord {
    title: String,
    tagline: String,
    questions: Vec<QuestionRecord>,
}

#[derive(Debug, Deserialize)]
struct QuestionRecord {
    question: String,
    options: Vec<String>,
    correct_answer: String,
}

/// The NBA question bank compiled into the game.
pub fn bundled_bank() -> Result<QuestionBank, AppError> {
    parse_bank(BUNDLED_QUESTIONS)
}

fn parse_bank(json: &str) -> Result<QuestionBank, AppError> {
    let record: BankRecord = serde_json::from_str(json)?;
    let questions = record
        .questions
        .into_iter()
        .map(|q| Question::new(q.question, q.options, q.correct_answer))
        .collect::<Result<Vec<_>, _>>()?;
    Ok(QuestionBank::new(record.title, record.tagline, questions)?)
}
