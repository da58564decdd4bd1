//! Reveal controller for Celestial Hand.
//!
//! A session moves through Idle → Reading → Result. A click or a pinch
//! gesture flips one card, exactly once, and asks the fortune service for a
//! reading. [`RevealController`] is the synchronous state machine;
//! [`driver`] runs it on a single tokio task that serializes user events,
//! gesture frames and fortune completions.

pub mod controller;
pub mod driver;
pub mod error;
pub mod gesture;
pub mod phase;
pub mod transport;

pub use controller::{Reading, RevealController, RevealTicket, Snapshot};
pub use driver::{SessionEvent, SessionHandle, SessionUpdate, spawn_session};
pub use error::{RevealError, RevealResult};
pub use gesture::{GestureConfig, GestureState, Hand, Landmark, LandmarkFrame, PinchDetector};
pub use phase::Phase;
pub use transport::{DirectTransport, FortuneTransport, HttpTransport};
