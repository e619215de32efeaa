// src/services/reveal.rs
use std::time::Duration;

use tokio::sync::mpsc;
use tokio::task::JoinHandle;

/// Delay between two revealed characters.
pub const DEFAULT_TICK: Duration = Duration::from_millis(15);

/// Typewriter producer: a background task emits one growing prefix of the
/// text per tick. Dropping the handle aborts the task.
#[derive(Debug)]
pub struct Reveal {
    text: String,
    frames: mpsc::Receiver<String>,
    task: JoinHandle<()>,
}

impl Reveal {
    pub fn spawn(text: impl Into<String>, tick: Duration) -> Self {
        let text = text.into();
        let (tx, frames) = mpsc::channel(1);
        let task = tokio::spawn(produce(text.clone(), tick, tx));
        Self { text, frames, task }
    }

    /// Next prefix, or `None` once the full text has been emitted.
    pub async fn next_frame(&mut self) -> Option<String> {
        self.frames.recv().await
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    /// Stop the producer and hand back the full text.
    pub fn cancel(self) -> String {
        self.task.abort();
        // Drop runs too; abort is idempotent.
        self.text.clone()
    }
}

impl Drop for Reveal {
    fn drop(&mut self) {
        self.task.abort();
    }
}

async fn produce(text: String, tick: Duration, tx: mpsc::Sender<String>) {
    let mut shown = String::with_capacity(text.len());
    let mut chars = text.chars().peekable();
    while let Some(ch) = chars.next() {
        shown.push(ch);
        if tx.send(shown.clone()).await.is_err() {
            return;
        }
        if chars.peek().is_some() {
            tokio::time::sleep(tick).await;
        }
    }
}
