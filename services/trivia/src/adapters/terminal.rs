//! services/trivia/src/adapters/terminal.rs
//!
//! This module contains the adapter that turns the player's keyboard into a
//! `LineSource`. It implements the `LineSource` port from the `core` crate.
//!
//! Stdin is read on a background task that forwards every line into a channel.
//! Receiving from the channel is cancel-safe, so a question that times out while
//! a read is pending never loses or half-consumes a line; whatever arrives late
//! stays buffered until `discard_pending` throws it away.

use async_trait::async_trait;
use tokio::{
    io::{AsyncBufReadExt, BufReader},
    sync::mpsc::{self, error::TryRecvError, UnboundedReceiver, UnboundedSender},
};
use tracing::{debug, error};
use trivia_core::ports::{LineSource, PortError, PortResult};

/// One line, or the reason the input stopped producing them.
pub type LineResult = std::io::Result<String>;

//=========================================================================================
// The Main Adapter Struct
//=========================================================================================

/// A `LineSource` fed by a channel of raw lines.
pub struct ChannelLineSource {
    receiver: UnboundedReceiver<LineResult>,
}

impl ChannelLineSource {
    /// Creates a source along with the sender that feeds it.
    pub fn channel() -> (UnboundedSender<LineResult>, Self) {
        let (sender, receiver) = mpsc::unbounded_channel();
        (sender, Self { receiver })
    }

    /// Starts forwarding the process's standard input into a new source.
    ///
    /// Must be called from within a tokio runtime.
    pub fn stdin() -> Self {
        let (sender, source) = Self::channel();
        tokio::spawn(forward_stdin(sender));
        source
    }
}

async fn forward_stdin(sender: UnboundedSender<LineResult>) {
    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    loop {
        match lines.next_line().await {
            Ok(Some(line)) => {
                if sender.send(Ok(line)).is_err() {
                    break;
                }
            }
            Ok(None) => {
                debug!("Standard input reached end of file.");
                break;
            }
            Err(e) => {
                error!("Failed to read standard input: {}", e);
                let _ = sender.send(Err(e));
                break;
            }
        }
    }
}

//=========================================================================================
// `LineSource` Trait Implementation
//=========================================================================================

#[async_trait]
impl LineSource for ChannelLineSource {
    async fn next_line(&mut self) -> PortResult<Option<String>> {
        match self.receiver.recv().await {
            Some(Ok(line)) => Ok(Some(line)),
            Some(Err(e)) => Err(PortError::Input(e.to_string())),
            None => Ok(None),
        }
    }

    fn discard_pending(&mut self) -> usize {
        let mut dropped = 0;
        loop {
            match self.receiver.try_recv() {
                Ok(Ok(line)) => {
                    debug!("Discarding stale input line: {:?}", line);
                    dropped += 1;
                }
                // Keep read errors for the next real read.
                Ok(Err(e)) => {
                    let (sender, receiver) = mpsc::unbounded_channel();
                    let _ = sender.send(Err(e));
                    // Nothing more can arrive after an error.
                    self.receiver = receiver;
                    break;
                }
                Err(TryRecvError::Empty) | Err(TryRecvError::Disconnected) => break,
            }
        }
        dropped
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;

    #[tokio::test]
    async fn delivers_lines_in_order_then_end_of_input() {
        let (tx, mut source) = ChannelLineSource::channel();
        tx.send(Ok("1".into())).unwrap();
        tx.send(Ok("yes".into())).unwrap();
        drop(tx);

        assert_eq!(source.next_line().await.unwrap().as_deref(), Some("1"));
        assert_eq!(source.next_line().await.unwrap().as_deref(), Some("yes"));
        assert_eq!(source.next_line().await.unwrap(), None);
    }

    #[tokio::test]
    async fn discard_drops_only_what_already_arrived() {
        let (tx, mut source) = ChannelLineSource::channel();
        tx.send(Ok("late".into())).unwrap();
        tx.send(Ok("later".into())).unwrap();

        assert_eq!(source.discard_pending(), 2);
        assert_eq!(source.discard_pending(), 0);

        tx.send(Ok("fresh".into())).unwrap();
        assert_eq!(source.next_line().await.unwrap().as_deref(), Some("fresh"));
    }

    #[tokio::test]
    async fn read_errors_survive_a_discard() {
        let (tx, mut source) = ChannelLineSource::channel();
        tx.send(Ok("stale".into())).unwrap();
        tx.send(Err(std::io::Error::other("broken pipe"))).unwrap();

        assert_eq!(source.discard_pending(), 1);
        assert!(matches!(source.next_line().await, Err(PortError::Input(_))));
    }

    #[tokio::test(start_paused = true)]
    async fn abandoned_read_keeps_the_line() {
        let (tx, mut source) = ChannelLineSource::channel();

        let timed_out = tokio::time::timeout(Duration::from_secs(1), source.next_line()).await;
        assert!(timed_out.is_err());

        tx.send(Ok("2".into())).unwrap();
        assert_eq!(source.next_line().await.unwrap().as_deref(), Some("2"));
    }
}
