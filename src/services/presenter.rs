// src/services/presenter.rs
//! Client-side conversation state: the turn list, the typing flag and the
//! typewriter reveal of each reply.

use std::sync::Arc;
use std::time::Duration;

use tracing::{debug, warn};
use uuid::Uuid;

use super::relay_client::RelayClient;
use super::reveal::{DEFAULT_TICK, Reveal};
use super::transcript::{Role, Transcript, TurnId};
use crate::message::{RelayRequest, RelayResponse};
use crate::profile::{
    APOLOGY, BIO_CONTEXT, GREETING, PREVIEW_CONTEXT, PREVIEW_GREETING, QuickAction,
};

/// Where the presenter draws. Called after every state change.
pub trait TranscriptView: Send {
    fn render(&mut self, transcript: &Transcript, typing: bool);

    /// Bring the given turn into view.
    fn scroll_to(&mut self, _turn: TurnId) {}
}

/// Headless view.
#[derive(Debug, Default)]
pub struct NullView;

impl TranscriptView for NullView {
    fn render(&mut self, _transcript: &Transcript, _typing: bool) {}
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Phase {
    Idle,
    Sending,
    Revealing(TurnId),
    ErrorShown,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SendOutcome {
    /// Blank input; nothing happened.
    Ignored,
    /// Reply arrived and is being revealed into this turn.
    Revealing(TurnId),
    /// Relay answered with an empty reply; no assistant turn was added.
    NoReply,
    /// Relay failed; this turn holds the apology.
    Failed(TurnId),
}

#[derive(Clone, Debug)]
pub struct PresenterOptions {
    pub context: String,
    pub greeting: Option<String>,
    pub tick: Duration,
}

impl Default for PresenterOptions {
    fn default() -> Self {
        Self {
            context: BIO_CONTEXT.to_string(),
            greeting: Some(GREETING.to_string()),
            tick: DEFAULT_TICK,
        }
    }
}

impl PresenterOptions {
    /// Landing-page preview: short greeting, concise answers.
    pub fn preview() -> Self {
        Self {
            context: PREVIEW_CONTEXT.to_string(),
            greeting: Some(PREVIEW_GREETING.to_string()),
            tick: DEFAULT_TICK,
        }
    }
}

pub struct Presenter {
    id: Uuid,
    relay: Arc<dyn RelayClient>,
    view: Box<dyn TranscriptView>,
    options: PresenterOptions,
    transcript: Transcript,
    input: String,
    typing: bool,
    phase: Phase,
    reveal: Option<(TurnId, Reveal)>,
}

impl std::fmt::Debug for Presenter {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Presenter")
            .field("id", &self.id)
            .field("turns", &self.transcript.len())
            .field("typing", &self.typing)
            .field("phase", &self.phase)
            .finish()
    }
}

impl Presenter {
    pub fn new(relay: Arc<dyn RelayClient>) -> Self {
        Self::with_options(relay, PresenterOptions::default())
    }

    pub fn with_options(relay: Arc<dyn RelayClient>, options: PresenterOptions) -> Self {
        let mut transcript = Transcript::new();
        if let Some(greeting) = &options.greeting {
            transcript.push(Role::Assistant, greeting.clone());
        }
        Self {
            id: Uuid::new_v4(),
            relay,
            view: Box::new(NullView),
            options,
            transcript,
            input: String::new(),
            typing: false,
            phase: Phase::Idle,
            reveal: None,
        }
    }

    /// Attach a view and draw the current transcript into it.
    pub fn with_view(mut self, view: impl TranscriptView + 'static) -> Self {
        self.view = Box::new(view);
        self.turns_changed();
        self
    }

    pub fn id(&self) -> Uuid {
        self.id
    }

    pub fn transcript(&self) -> &Transcript {
        &self.transcript
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn is_typing(&self) -> bool {
        self.typing
    }

    /// Mirrors the send control: disabled while a reply is pending or typing.
    pub fn input_enabled(&self) -> bool {
        !self.typing
    }

    pub fn input(&self) -> &str {
        &self.input
    }

    pub fn set_input(&mut self, text: impl Into<String>) {
        self.input = text.into();
    }

    /// Pre-fill the input field. Does not send.
    pub fn quick_action(&mut self, action: QuickAction) {
        self.input = action.prompt();
    }

    /// Send whatever is in the input field.
    pub async fn submit_input(&mut self) -> SendOutcome {
        let text = self.input.clone();
        self.send_message(&text).await
    }

    /// Send and then play the whole reveal.
    pub async fn submit(&mut self, text: &str) -> SendOutcome {
        let outcome = self.send_message(text).await;
        self.finish_reveal().await;
        outcome
    }

    /// Append the user turn, call the relay and start revealing the reply.
    /// The reveal itself is driven by [`Presenter::advance`].
    pub async fn send_message(&mut self, text: &str) -> SendOutcome {
        if text.trim().is_empty() {
            return SendOutcome::Ignored;
        }

        // A new turn tears down any reveal still running.
        self.settle_reveal();

        self.transcript.push(Role::User, text);
        self.input.clear();
        self.typing = true;
        self.set_phase(Phase::Sending);
        self.turns_changed();

        let request = RelayRequest {
            message: text.to_string(),
            context: self.options.context.clone(),
        };

        let reply = self.relay.send(&request).await;
        match reply {
            Ok(RelayResponse::Success { response }) if response.is_empty() => {
                self.typing = false;
                self.set_phase(Phase::Idle);
                self.render();
                SendOutcome::NoReply
            }
            Ok(RelayResponse::Success { response }) => {
                let turn = self.transcript.push(Role::Assistant, "");
                self.reveal = Some((turn, Reveal::spawn(response, self.options.tick)));
                self.set_phase(Phase::Revealing(turn));
                self.turns_changed();
                SendOutcome::Revealing(turn)
            }
            Ok(RelayResponse::Failure { error }) => {
                warn!(conversation = %self.id, %error, "chat relay reported an error");
                self.show_error()
            }
            Err(err) => {
                warn!(conversation = %self.id, error = %err, "chat relay unreachable");
                self.show_error()
            }
        }
    }

    /// Apply the next reveal frame. Returns false once nothing is left to reveal.
    pub async fn advance(&mut self) -> bool {
        let Some((turn, reveal)) = self.reveal.as_mut() else {
            return false;
        };
        let turn = *turn;
        let frame = reveal.next_frame().await;

        match frame {
            Some(frame) => {
                self.transcript.set_content(turn, frame);
                self.turns_changed();
                true
            }
            None => {
                self.reveal = None;
                self.typing = false;
                self.set_phase(Phase::Idle);
                self.render();
                false
            }
        }
    }

    pub async fn finish_reveal(&mut self) {
        while self.advance().await {}
    }

    /// Cancel a running reveal and show its full text at once.
    pub fn settle_reveal(&mut self) {
        let Some((turn, reveal)) = self.reveal.take() else {
            return;
        };
        let full = reveal.cancel();
        debug!(conversation = %self.id, %turn, "reveal cancelled");
        self.transcript.set_content(turn, full);
        self.typing = false;
        self.set_phase(Phase::Idle);
        self.turns_changed();
    }

    fn show_error(&mut self) -> SendOutcome {
        let turn = self.transcript.push(Role::Assistant, APOLOGY);
        self.typing = false;
        self.set_phase(Phase::ErrorShown);
        self.turns_changed();
        self.set_phase(Phase::Idle);
        SendOutcome::Failed(turn)
    }

    fn set_phase(&mut self, next: Phase) {
        debug!(conversation = %self.id, from = ?self.phase, to = ?next, "phase");
        self.phase = next;
    }

    fn render(&mut self) {
        self.view.render(&self.transcript, self.typing);
    }

    fn turns_changed(&mut self) {
        self.render();
        if let Some(last) = self.transcript.last() {
            self.view.scroll_to(last.id);
        }
    }
}
