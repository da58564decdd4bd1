//! The session loop.
//!
//! One tokio task owns the [`RevealController`]. User events arrive on an
//! `mpsc` channel, gesture frames on a `watch` channel (only the latest frame
//! is ever looked at), and fortune completions come back from the spawned
//! request on a private channel, tagged with the generation they were issued
//! for. Everything that touches the controller runs on that one task.
//!
//! The loop polls events before frames, so a `Start` sent ahead of a pinch
//! frame is always applied first.

use std::sync::Arc;

use tokio::sync::{mpsc, watch};
use tokio::task::JoinHandle;
use tracing::debug;

use ch_core::{Card, Language, RandomSource};

use crate::controller::{Reading, RevealController, RevealTicket, Snapshot};
use crate::error::{RevealError, RevealResult};
use crate::gesture::LandmarkFrame;
use crate::phase::Phase;
use crate::transport::FortuneTransport;

/// Input to a running session.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SessionEvent {
    /// The user began a reading.
    Start,
    /// The user clicked the card.
    Click,
    /// Switch the reading language.
    SetLanguage(Language),
    /// Start over ("draw again").
    Reset,
    /// Ask for a [`SessionUpdate::Status`].
    Status,
    /// Stop the session task.
    Shutdown,
}

/// Output of a running session, for the UI to render.
#[derive(Debug, Clone, PartialEq)]
pub enum SessionUpdate {
    /// The phase changed.
    PhaseChanged(Phase),
    /// A card was flipped and its fortune requested.
    Consulting {
        /// The flipped card.
        card: Card,
        /// Language of the request.
        language: Language,
    },
    /// The fortune arrived.
    Revealed(Reading),
    /// A completion for an earlier session was dropped.
    Discarded {
        /// Generation the completion belonged to.
        generation: u64,
    },
    /// The language changed.
    LanguageChanged(Language),
    /// Reply to [`SessionEvent::Status`].
    Status(Snapshot),
}

/// Handle to a session task.
pub struct SessionHandle {
    events: mpsc::Sender<SessionEvent>,
    frames: watch::Sender<LandmarkFrame>,
    updates: mpsc::UnboundedReceiver<SessionUpdate>,
    task: JoinHandle<()>,
}

impl SessionHandle {
    /// Send a user event.
    pub async fn send(&self, event: SessionEvent) -> RevealResult<()> {
        self.events
            .send(event)
            .await
            .map_err(|_| RevealError::SessionClosed)
    }

    /// Publish the latest gesture frame, replacing any unprocessed one.
    pub fn push_frame(&self, frame: LandmarkFrame) {
        self.frames.send_replace(frame);
    }

    /// Wait for the next update. `None` once the session has stopped.
    pub async fn next_update(&mut self) -> Option<SessionUpdate> {
        self.updates.recv().await
    }

    /// Stop the session and wait for its task to finish.
    pub async fn shutdown(self) {
        let _ = self.events.send(SessionEvent::Shutdown).await;
        let _ = self.task.await;
    }
}

/// Spawn a session task for `controller`, issuing requests through `transport`.
///
/// Must be called inside a tokio runtime.
pub fn spawn_session<R, T>(controller: RevealController<R>, transport: T) -> SessionHandle
where
    R: RandomSource + 'static,
    T: FortuneTransport,
{
    let (events_tx, events_rx) = mpsc::channel(32);
    let (frames_tx, frames_rx) = watch::channel(LandmarkFrame::empty());
    let (updates_tx, updates_rx) = mpsc::unbounded_channel();

    let session = Session {
        controller,
        transport: Arc::new(transport),
        updates: updates_tx,
    };
    let task = tokio::spawn(session.run(events_rx, frames_rx));

    SessionHandle {
        events: events_tx,
        frames: frames_tx,
        updates: updates_rx,
        task,
    }
}

type Completion = (u64, RevealResult<String>);

struct Session<R, T> {
    controller: RevealController<R>,
    transport: Arc<T>,
    updates: mpsc::UnboundedSender<SessionUpdate>,
}

impl<R: RandomSource, T: FortuneTransport> Session<R, T> {
    async fn run(
        mut self,
        mut events: mpsc::Receiver<SessionEvent>,
        mut frames: watch::Receiver<LandmarkFrame>,
    ) {
        let (done_tx, mut done_rx) = mpsc::channel::<Completion>(4);
        let mut frames_open = true;

        loop {
            tokio::select! {
                biased;
                event = events.recv() => match event {
                    None | Some(SessionEvent::Shutdown) => break,
                    Some(event) => self.on_event(event, &done_tx),
                },
                changed = frames.changed(), if frames_open => {
                    if changed.is_err() {
                        frames_open = false;
                        continue;
                    }
                    let frame = frames.borrow_and_update().clone();
                    if let Some(ticket) = self.controller.observe_frame(&frame) {
                        self.dispatch(ticket, &done_tx);
                    }
                }
                Some((generation, outcome)) = done_rx.recv() => {
                    self.on_completion(generation, outcome);
                }
            }
        }
        debug!("session loop stopped");
    }

    fn emit(&self, update: SessionUpdate) {
        let _ = self.updates.send(update);
    }

    fn on_event(&mut self, event: SessionEvent, done: &mpsc::Sender<Completion>) {
        match event {
            SessionEvent::Start => {
                if self.controller.start() {
                    self.emit(SessionUpdate::PhaseChanged(Phase::Reading));
                }
            }
            SessionEvent::Click => {
                if let Some(ticket) = self.controller.trigger_reveal() {
                    self.dispatch(ticket, done);
                }
            }
            SessionEvent::SetLanguage(language) => {
                self.controller.set_language(language);
                self.emit(SessionUpdate::LanguageChanged(language));
            }
            SessionEvent::Reset => {
                self.controller.reset();
                self.emit(SessionUpdate::PhaseChanged(Phase::Idle));
            }
            SessionEvent::Status => self.emit(SessionUpdate::Status(self.controller.snapshot())),
            SessionEvent::Shutdown => {}
        }
    }

    fn dispatch(&self, ticket: RevealTicket, done: &mpsc::Sender<Completion>) {
        self.emit(SessionUpdate::Consulting {
            card: ticket.card,
            language: ticket.request.language,
        });
        let transport = Arc::clone(&self.transport);
        let done = done.clone();
        tokio::spawn(async move {
            let outcome = transport.request(&ticket.request).await;
            let _ = done.send((ticket.generation, outcome)).await;
        });
    }

    fn on_completion(&mut self, generation: u64, outcome: RevealResult<String>) {
        match self.controller.complete(generation, outcome) {
            Ok(reading) => {
                let reading = reading.clone();
                self.emit(SessionUpdate::Revealed(reading));
                self.emit(SessionUpdate::PhaseChanged(Phase::Result));
            }
            Err(_) => self.emit(SessionUpdate::Discarded { generation }),
        }
    }
}
