//! Media widget seam
//!
//! The widget is the opaque third-party component that actually renders a
//! track. `MediaEngine` talks to it only through `MediaWidget`, and the widget
//! talks back only by sending notifications through its `WidgetHandle`.

use tokio::sync::mpsc;

use crate::error::Result;
use crate::types::WidgetState;

/// An opaque media player instance bound to one media id
///
/// Implementors translate these calls to whatever actually plays the media
/// (an embedded web player, an external process, a simulated clock in tests).
/// All calls are fire-and-forget; outcomes are reported asynchronously via
/// the `WidgetHandle` given at creation.
pub trait MediaWidget: Send {
    /// Start or resume playback
    fn play(&mut self);

    /// Pause playback
    fn pause(&mut self);

    /// Jump to `seconds` from the start of the media
    fn seek_to(&mut self, seconds: f64);

    /// Set output volume (0-100)
    fn set_volume(&mut self, level: u8);

    /// Total media length in seconds (0 while unknown)
    fn duration(&self) -> f64;

    /// Current position in seconds
    fn current_time(&self) -> f64;

    /// Release the instance; no notifications may follow
    fn destroy(&mut self);
}

/// Creates widget instances
pub trait MediaWidgetFactory: Send + Sync {
    /// Instantiate a widget for `media_id`
    ///
    /// The widget must report readiness through `handle` before the engine
    /// issues any play or volume command.
    ///
    /// # Errors
    /// Returns an error if the widget backend cannot be loaded
    fn create(&self, media_id: &str, handle: WidgetHandle) -> Result<Box<dyn MediaWidget>>;
}

/// What happened, as seen by the engine
#[derive(Debug, Clone, PartialEq)]
pub enum WidgetEventKind {
    /// Widget finished loading and accepts commands
    Ready,

    /// Widget playback state changed
    StateChange(WidgetState),

    /// Widget failed after creation
    Error(String),

    /// Periodic progress poll (emitted by the engine's own timer)
    ProgressTick,
}

/// A notification tagged with the widget instance it came from
///
/// Events from instances that have since been torn down are discarded by the
/// engine.
#[derive(Debug, Clone, PartialEq)]
pub struct WidgetEvent {
    pub instance: u64,
    pub kind: WidgetEventKind,
}

/// Sending side of the engine's notification channel for one widget instance
#[derive(Debug, Clone)]
pub struct WidgetHandle {
    instance: u64,
    tx: mpsc::UnboundedSender<WidgetEvent>,
}

impl WidgetHandle {
    pub(crate) fn new(instance: u64, tx: mpsc::UnboundedSender<WidgetEvent>) -> Self {
        Self { instance, tx }
    }

    /// Instance number this handle reports for
    pub fn instance(&self) -> u64 {
        self.instance
    }

    /// Send a notification; returns `false` once the engine is gone
    pub fn notify(&self, kind: WidgetEventKind) -> bool {
        self.tx
            .send(WidgetEvent {
                instance: self.instance,
                kind,
            })
            .is_ok()
    }

    pub fn ready(&self) -> bool {
        self.notify(WidgetEventKind::Ready)
    }

    pub fn state_changed(&self, state: WidgetState) -> bool {
        self.notify(WidgetEventKind::StateChange(state))
    }

    pub fn error(&self, message: impl Into<String>) -> bool {
        self.notify(WidgetEventKind::Error(message.into()))
    }
}
