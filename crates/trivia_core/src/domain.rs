//! crates/trivia_core/src/domain.rs
//!
//! Defines the pure, core data structures for the quiz.
//! These structs are independent of any terminal, runtime or serialization format.

/// Errors raised while assembling questions into a bank.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum BankError {
    #[error("Question '{0}' needs at least two options")]
    TooFewOptions(String),
    #[error("Correct answer '{answer}' is not one of the options of '{prompt}'")]
    AnswerNotAnOption { prompt: String, answer: String },
    #[error("A question bank needs at least one question")]
    Empty,
}

/// A single multiple-choice question. Immutable once built.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Question {
    prompt: String,
    options: Vec<String>,
    correct_answer: String,
}

impl Question {
    /// Builds a question, checking that the correct answer is one of the options.
    pub fn new(
        prompt: impl Into<String>,
        options: Vec<String>,
        correct_answer: impl Into<String>,
    ) -> Result<Self, BankError> {
        let prompt = prompt.into();
        let correct_answer = correct_answer.into();

        if options.len() < 2 {
            return Err(BankError::TooFewOptions(prompt));
        }
        if !options.contains(&correct_answer) {
            return Err(BankError::AnswerNotAnOption {
                prompt,
                answer: correct_answer,
            });
        }

        Ok(Self {
            prompt,
            options,
            correct_answer,
        })
    }

    pub fn prompt(&self) -> &str {
        &self.prompt
    }

    pub fn options(&self) -> &[String] {
        &self.options
    }

    pub fn correct_answer(&self) -> &str {
        &self.correct_answer
    }

    /// Resolves a 1-based ordinal to the text of that option.
    pub fn option_at(&self, ordinal: usize) -> Option<&str> {
        ordinal
            .checked_sub(1)
            .and_then(|i| self.options.get(i))
            .map(String::as_str)
    }

    /// Exact, case-sensitive comparison against the canonical answer.
    pub fn is_correct(&self, answer: &str) -> bool {
        self.correct_answer == answer
    }
}

/// The ordered, fixed set of questions played in every round.
#[derive(Debug, Clone)]
pub struct QuestionBank {
    title: String,
    tagline: String,
    questions: Vec<Question>,
}

impl QuestionBank {
    pub fn new(
        title: impl Into<String>,
        tagline: impl Into<String>,
        questions: Vec<Question>,
    ) -> Result<Self, BankError> {
        if questions.is_empty() {
            return Err(BankError::Empty);
        }
        Ok(Self {
            title: title.into(),
            tagline: tagline.into(),
            questions,
        })
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn tagline(&self) -> &str {
        &self.tagline
    }

    pub fn len(&self) -> usize {
        self.questions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.questions.is_empty()
    }

    pub fn questions(&self) -> &[Question] {
        &self.questions
    }

    /// Returns `None` for an index outside the bank rather than failing.
    pub fn get(&self, index: usize) -> Option<&Question> {
        self.questions.get(index)
    }

    pub fn check_answer(&self, index: usize, answer: &str) -> bool {
        self.get(index).is_some_and(|q| q.is_correct(answer))
    }
}

/// The single result of racing the countdown against the player's input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AnswerOutcome {
    Answered(String),
    TimedOut,
}

/// What the session concluded after applying an outcome.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AnswerFeedback {
    pub is_correct: bool,
    pub timed_out: bool,
    pub correct_answer: String,
    pub score: u32,
}

/// Final statistics for one playthrough.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GameReport {
    pub score: u32,
    pub total_questions: u32,
    pub percentage: u32,
}

impl GameReport {
    pub fn new(score: u32, total_questions: u32) -> Self {
        Self {
            score,
            total_questions,
            percentage: percentage(score, total_questions),
        }
    }

    pub fn performance(&self) -> Performance {
        Performance::from_percentage(self.percentage)
    }
}

/// Nearest-integer percentage, halves rounded up. Zero questions yields 0.
pub fn percentage(score: u32, total: u32) -> u32 {
    if total == 0 {
        return 0;
    }
    let (score, total) = (u64::from(score), u64::from(total));
    ((200 * score + total) / (2 * total)) as u32
}

/// Qualitative bucket for the closing remark.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Performance {
    Outstanding,
    Great,
    Good,
    KeepTrying,
}

impl Performance {
    pub fn from_percentage(percentage: u32) -> Self {
        match percentage {
            p if p >= 100 => Performance::Outstanding,
            p if p >= 80 => Performance::Great,
            p if p >= 50 => Performance::Good,
            _ => Performance::KeepTrying,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    fn options() -> Vec<String> {
        vec!["Kobe".into(), "Jordan".into(), "Lebron".into()]
    }

    #[test]
    fn question_rejects_answer_outside_options() {
        let err = Question::new("Who?", options(), "Shaq").unwrap_err();
        assert!(matches!(err, BankError::AnswerNotAnOption { .. }));
    }

    #[test]
    fn question_rejects_single_option() {
        let err = Question::new("Who?", vec!["Kobe".into()], "Kobe").unwrap_err();
        assert_eq!(err, BankError::TooFewOptions("Who?".into()));
    }

    #[test]
    fn option_at_is_one_based() {
        let q = Question::new("Who?", options(), "Jordan").unwrap();
        assert_eq!(q.option_at(0), None);
        assert_eq!(q.option_at(1), Some("Kobe"));
        assert_eq!(q.option_at(3), Some("Lebron"));
        assert_eq!(q.option_at(4), None);
    }

    #[test]
    fn bank_lookup_out_of_range_is_none() {
        let q = Question::new("Who?", options(), "Jordan").unwrap();
        let bank = QuestionBank::new("T", "t", vec![q]).unwrap();
        assert!(bank.get(0).is_some());
        assert!(bank.get(1).is_none());
        assert!(!bank.check_answer(7, "Jordan"));
    }

    #[test]
    fn empty_bank_is_rejected() {
        assert_eq!(QuestionBank::new("T", "t", vec![]).unwrap_err(), BankError::Empty);
    }

    #[test]
    fn answers_are_case_sensitive() {
        let q = Question::new("Who?", options(), "Jordan").unwrap();
        assert!(q.is_correct("Jordan"));
        assert!(!q.is_correct("jordan"));
        assert!(!q.is_correct(" Jordan"));
    }

    #[rstest]
    #[case(0, 3, 0)]
    #[case(1, 3, 33)]
    #[case(2, 3, 67)]
    #[case(3, 3, 100)]
    #[case(1, 2, 50)]
    #[case(1, 8, 13)]
    #[case(0, 0, 0)]
    fn percentage_rounds_to_nearest(#[case] score: u32, #[case] total: u32, #[case] expected: u32) {
        assert_eq!(percentage(score, total), expected);
    }

    #[rstest]
    #[case(100, Performance::Outstanding)]
    #[case(99, Performance::Great)]
    #[case(80, Performance::Great)]
    #[case(67, Performance::Good)]
    #[case(50, Performance::Good)]
    #[case(33, Performance::KeepTrying)]
    fn performance_buckets(#[case] pct: u32, #[case] expected: Performance) {
        assert_eq!(Performance::from_percentage(pct), expected);
    }
}
