pub mod coordinator;
pub mod countdown;
pub mod input;
pub mod runner;
pub mod session;

#[cfg(test)]
pub(crate) mod testing;

pub use coordinator::AnswerCoordinator;
pub use countdown::{CountdownPolicy, TimerHandle};
pub use runner::play;
pub use session::{GameSession, SessionPhase, SessionSnapshot};
