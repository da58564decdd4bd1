//! The reveal state machine.
//!
//! `RevealController` owns all session state: the phase, the one-shot flip
//! guard, the drawn card, the applied reading and the pinch detector. It does
//! no I/O. A reveal hands out a [`RevealTicket`]; the caller performs the
//! fortune request and reports back through [`RevealController::complete`]
//! with the ticket's generation. Resets bump the generation, so completions
//! for an earlier session are rejected as stale.

use chrono::{DateTime, Utc};
use rand::SeedableRng;
use rand::rngs::StdRng;
use tracing::{debug, info, warn};

use ch_core::{Card, FortuneRequest, Language, RandomSource, catalog};

use crate::error::{RevealError, RevealResult};
use crate::gesture::{GestureConfig, GestureState, LandmarkFrame, PinchDetector};
use crate::phase::Phase;

/// Handed out when a card is flipped; identifies the outstanding request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RevealTicket {
    /// Session generation at the time of the flip.
    pub generation: u64,
    /// The drawn card.
    pub card: Card,
    /// The fortune request to issue.
    pub request: FortuneRequest,
}

/// A completed reveal.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Reading {
    /// The revealed card.
    pub card: Card,
    /// Fortune text as displayed.
    pub fortune: String,
    /// Language of the reading.
    pub language: Language,
    /// When the fortune arrived.
    pub revealed_at: DateTime<Utc>,
}

/// Point-in-time view of a session, for display.
#[derive(Debug, Clone, PartialEq)]
pub struct Snapshot {
    /// Current phase.
    pub phase: Phase,
    /// Current language.
    pub language: Language,
    /// Whether the card has been flipped.
    pub flipped: bool,
    /// Whether a fortune request is outstanding.
    pub pending: bool,
    /// The drawn card, once flipped.
    pub card: Option<Card>,
    /// The fortune, once revealed.
    pub fortune: Option<String>,
    /// Session generation.
    pub generation: u64,
}

/// State machine for one reveal session.
pub struct RevealController<R = StdRng> {
    phase: Phase,
    language: Language,
    flipped: bool,
    /// Language of the outstanding request, if any.
    pending: Option<Language>,
    card: Option<Card>,
    reading: Option<Reading>,
    generation: u64,
    pinch: PinchDetector,
    rng: R,
}

impl RevealController<StdRng> {
    /// Create a controller drawing cards with an OS-seeded RNG.
    pub fn new(language: Language) -> Self {
        Self::with_rng(language, StdRng::from_os_rng())
    }

    /// Create a controller with a seeded RNG for reproducible draws.
    pub fn seeded(language: Language, seed: u64) -> Self {
        Self::with_rng(language, StdRng::seed_from_u64(seed))
    }
}

impl<R: RandomSource> RevealController<R> {
    /// Create a controller with the given random source.
    pub fn with_rng(language: Language, rng: R) -> Self {
        Self {
            phase: Phase::Idle,
            language,
            flipped: false,
            pending: None,
            card: None,
            reading: None,
            generation: 0,
            pinch: PinchDetector::default(),
            rng,
        }
    }

    /// Replace the gesture thresholds.
    pub fn with_gesture_config(mut self, config: GestureConfig) -> Self {
        self.pinch = PinchDetector::new(config);
        self
    }

    /// Current phase.
    pub fn phase(&self) -> Phase {
        self.phase
    }

    /// Language used for the next reveal.
    pub fn language(&self) -> Language {
        self.language
    }

    /// Whether the card has been flipped this session.
    pub fn is_flipped(&self) -> bool {
        self.flipped
    }

    /// Whether a fortune request is outstanding.
    pub fn is_pending(&self) -> bool {
        self.pending.is_some()
    }

    /// The drawn card, once flipped.
    pub fn card(&self) -> Option<Card> {
        self.card
    }

    /// The applied reading, in the Result phase.
    pub fn reading(&self) -> Option<&Reading> {
        self.reading.as_ref()
    }

    /// Session generation; changes on every reset.
    pub fn generation(&self) -> u64 {
        self.generation
    }

    /// Readings from the latest gesture frame.
    pub fn gesture(&self) -> GestureState {
        self.pinch.state()
    }

    /// Point-in-time view of the session.
    pub fn snapshot(&self) -> Snapshot {
        Snapshot {
            phase: self.phase,
            language: self.language,
            flipped: self.flipped,
            pending: self.is_pending(),
            card: self.card,
            fortune: self.reading.as_ref().map(|r| r.fortune.clone()),
            generation: self.generation,
        }
    }

    /// Change the language for subsequent reveals.
    pub fn set_language(&mut self, language: Language) {
        self.language = language;
    }

    /// Idle → Reading. Returns whether the phase changed.
    pub fn start(&mut self) -> bool {
        if self.phase != Phase::Idle {
            return false;
        }
        self.phase = Phase::Reading;
        info!(generation = self.generation, "session started");
        true
    }

    /// Flip the card. A no-op unless Reading and not yet flipped.
    pub fn trigger_reveal(&mut self) -> Option<RevealTicket> {
        if self.flipped || self.phase != Phase::Reading {
            return None;
        }
        let card = catalog::draw(&mut self.rng);
        self.flipped = true;
        self.card = Some(card);
        self.pending = Some(self.language);
        info!(card = card.name_en, generation = self.generation, "card flipped");
        Some(RevealTicket {
            generation: self.generation,
            card,
            request: FortuneRequest::new(card.name(self.language), self.language),
        })
    }

    /// Feed a gesture frame; a new pinch while Reading flips the card.
    pub fn observe_frame(&mut self, frame: &LandmarkFrame) -> Option<RevealTicket> {
        let edge = self.pinch.observe(frame);
        if edge && self.phase == Phase::Reading {
            debug!("pinch triggered reveal");
            self.trigger_reveal()
        } else {
            None
        }
    }

    /// Apply the outcome of the request issued for `generation`.
    ///
    /// A transport failure still completes the reveal, with a placeholder
    /// fortune. Completions for another generation, or when nothing is
    /// pending, are rejected with [`RevealError::StaleResponse`] and leave
    /// the state untouched.
    pub fn complete(
        &mut self,
        generation: u64,
        outcome: RevealResult<String>,
    ) -> RevealResult<&Reading> {
        let stale = RevealError::StaleResponse {
            got: generation,
            current: self.generation,
        };
        if generation != self.generation {
            debug!(got = generation, current = self.generation, "discarding stale fortune");
            return Err(stale);
        }
        let (Some(language), Some(card)) = (self.pending, self.card) else {
            return Err(stale);
        };

        let fortune = match outcome {
            Ok(text) => text,
            Err(e) => {
                warn!(error = %e, "fortune request failed, using placeholder");
                language.silent_stars().to_string()
            }
        };

        self.pending = None;
        self.phase = Phase::Result;
        info!(card = card.name_en, "fortune revealed");
        Ok(self.reading.insert(Reading {
            card,
            fortune,
            language,
            revealed_at: Utc::now(),
        }))
    }

    /// Return to Idle, clearing everything except the language.
    pub fn reset(&mut self) {
        self.phase = Phase::Idle;
        self.flipped = false;
        self.pending = None;
        self.card = None;
        self.reading = None;
        self.pinch.reset();
        self.generation += 1;
        info!(generation = self.generation, "session reset");
    }
}
