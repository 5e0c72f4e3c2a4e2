pub mod domain;
pub mod events;
pub mod ports;

pub use domain::{
    AnswerFeedback, AnswerOutcome, BankError, GameReport, Performance, Question, QuestionBank,
};
pub use events::{GameEvent, TickKind};
pub use ports::{GameNotifier, LineSource, PortError, PortResult};
