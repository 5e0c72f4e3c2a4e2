//! services/trivia/src/game/countdown.rs
//!
//! This module contains the per-question countdown: a background task that
//! ticks once per second, emits threshold notifications and signals expiry.
//! It is driven by a `CancellationToken` so it can be stopped the instant the
//! player answers.

use std::sync::{
    atomic::{AtomicU32, Ordering},
    Arc,
};
use std::time::Duration;

use tokio::{
    sync::oneshot,
    task::JoinHandle,
    time::{interval_at, Instant},
};
use tokio_util::sync::CancellationToken;
use tracing::debug;
use trivia_core::{
    events::{GameEvent, TickKind},
    ports::{GameNotifier, PortError, PortResult},
};

const TICK: Duration = Duration::from_secs(1);

/// Decides which remaining-second values produce a notification.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CountdownPolicy {
    /// Reminder thresholds, largest first.
    pub reminders: Vec<u32>,
    /// Every second at or below this value is announced.
    pub final_stretch: u32,
}

impl Default for CountdownPolicy {
    fn default() -> Self {
        Self::new(vec![10, 5], 3)
    }
}

impl CountdownPolicy {
    pub fn new(mut reminders: Vec<u32>, final_stretch: u32) -> Self {
        reminders.sort_unstable_by(|a, b| b.cmp(a));
        reminders.dedup();
        Self {
            reminders,
            final_stretch,
        }
    }

    /// The notification due with `remaining` seconds left, if any.
    pub fn classify(&self, remaining: u32) -> Option<TickKind> {
        if remaining == 0 {
            None
        } else if remaining <= self.final_stretch {
            Some(TickKind::Final)
        } else if self.reminders.first() == Some(&remaining) {
            Some(TickKind::Hurry)
        } else if self.reminders.contains(&remaining) {
            Some(TickKind::Reminder)
        } else {
            None
        }
    }
}

//=========================================================================================
// TimerHandle
//=========================================================================================

/// One running countdown. Dropping the handle cancels the countdown.
pub struct TimerHandle {
    token: CancellationToken,
    remaining: Arc<AtomicU32>,
    expired: Option<oneshot::Receiver<()>>,
    task: Option<JoinHandle<()>>,
}

impl TimerHandle {
    /// Announces the limit and starts ticking. Must be called within a tokio runtime.
    pub fn start(limit: u32, policy: CountdownPolicy, notifier: Arc<dyn GameNotifier>) -> Self {
        let token = CancellationToken::new();
        let remaining = Arc::new(AtomicU32::new(limit));
        let (expired_tx, expired_rx) = oneshot::channel();

        notifier.notify(GameEvent::CountdownStarted { seconds: limit });

        let task = tokio::spawn(run_countdown(
            policy,
            notifier,
            token.clone(),
            remaining.clone(),
            expired_tx,
        ));

        Self {
            token,
            remaining,
            expired: Some(expired_rx),
            task: Some(task),
        }
    }

    pub fn remaining(&self) -> u32 {
        self.remaining.load(Ordering::SeqCst)
    }

    /// A token that is cancelled as soon as this countdown is stopped.
    pub fn child_token(&self) -> CancellationToken {
        self.token.child_token()
    }

    /// Resolves once the countdown reaches zero.
    ///
    /// Cancel-safe. Fails if the countdown ended any other way.
    pub async fn expired(&mut self) -> PortResult<()> {
        let Some(expired) = self.expired.as_mut() else {
            return Err(PortError::Unexpected(
                "countdown expiry was already consumed".to_string(),
            ));
        };
        let result = expired.await;
        self.expired = None;
        result.map_err(|_| PortError::Unexpected("countdown stopped without expiring".to_string()))
    }

    /// Cancels the countdown and waits until its task has finished, so no
    /// notification can follow. Returns the seconds that were left.
    pub async fn stop(&mut self) -> PortResult<u32> {
        self.token.cancel();
        if let Some(task) = self.task.take() {
            task.await
                .map_err(|e| PortError::Unexpected(format!("countdown task failed: {}", e)))?;
        }
        Ok(self.remaining())
    }
}

impl Drop for TimerHandle {
    fn drop(&mut self) {
        self.token.cancel();
    }
}

async fn run_countdown(
    policy: CountdownPolicy,
    notifier: Arc<dyn GameNotifier>,
    token: CancellationToken,
    remaining: Arc<AtomicU32>,
    expired: oneshot::Sender<()>,
) {
    let mut ticker = interval_at(Instant::now() + TICK, TICK);
    loop {
        tokio::select! {
            biased;
            _ = token.cancelled() => {
                debug!("Countdown cancelled with {} seconds left.", remaining.load(Ordering::SeqCst));
                return;
            }
            _ = ticker.tick() => {}
        }

        let left = remaining.load(Ordering::SeqCst).saturating_sub(1);
        remaining.store(left, Ordering::SeqCst);

        if left == 0 {
            debug!("Countdown expired.");
            let _ = expired.send(());
            return;
        }
        if let Some(kind) = policy.classify(left) {
            notifier.notify(GameEvent::Tick {
                remaining: left,
                kind,
            });
        }
    }
}
