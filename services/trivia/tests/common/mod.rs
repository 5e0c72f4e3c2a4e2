use std::collections::VecDeque;
use std::sync::{Arc, Mutex};
use std::time::Duration;

use tokio::sync::mpsc::UnboundedSender;
use trivia_core::{events::GameEvent, ports::GameNotifier};
use trivia_lib::{
    adapters::{bundled_bank, terminal::LineResult, ChannelLineSource},
    game::{AnswerCoordinator, CountdownPolicy, GameSession},
};

/// What the player does when a prompt appears.
#[allow(dead_code)]
pub enum Reply {
    Type(&'static str),
    TypeAfter(Duration, &'static str),
    Silent,
    CloseInput,
}

/// Watches the game's output and types scripted replies at each prompt.
/// Once the script runs out the input is closed.
pub struct ScriptedPlayer {
    script: Mutex<VecDeque<Reply>>,
    keyboard: Mutex<Option<UnboundedSender<LineResult>>>,
    events: Mutex<Vec<GameEvent>>,
}

impl ScriptedPlayer {
    pub fn events(&self) -> Vec<GameEvent> {
        self.events.lock().unwrap().clone()
    }

    fn reply(&self) {
        let next = self.script.lock().unwrap().pop_front();
        let mut keyboard = self.keyboard.lock().unwrap();
        match next {
            Some(Reply::Type(line)) => {
                if let Some(tx) = keyboard.as_ref() {
                    let _ = tx.send(Ok(line.to_string()));
                }
            }
            Some(Reply::TypeAfter(delay, line)) => {
                if let Some(tx) = keyboard.clone() {
                    tokio::spawn(async move {
                        tokio::time::sleep(delay).await;
                        let _ = tx.send(Ok(line.to_string()));
                    });
                }
            }
            Some(Reply::Silent) => {}
            Some(Reply::CloseInput) | None => {
                keyboard.take();
            }
        }
    }
}

impl GameNotifier for ScriptedPlayer {
    fn notify(&self, event: GameEvent) {
        let is_prompt = matches!(
            event,
            GameEvent::ChoicePrompt { .. } | GameEvent::PlayAgainPrompt
        );
        self.events.lock().unwrap().push(event);
        if is_prompt {
            self.reply();
        }
    }
}

/// A session over the bundled bank, driven by `script`.
pub fn scripted_session(script: Vec<Reply>) -> (GameSession, Arc<ScriptedPlayer>) {
    let (tx, source) = ChannelLineSource::channel();
    let player = Arc::new(ScriptedPlayer {
        script: Mutex::new(script.into()),
        keyboard: Mutex::new(Some(tx)),
        events: Mutex::new(Vec::new()),
    });
    let coordinator =
        AnswerCoordinator::new(Box::new(source), player.clone(), CountdownPolicy::default());
    let bank = bundled_bank().unwrap();
    (GameSession::new(bank, coordinator, 15), player)
}
