//! Media engine adapter - bridges the playing list and the media widget
//!
//! Owns the single live widget instance and enforces the teardown-then-create
//! discipline: a new instance is only created after the previous one has been
//! destroyed and its polling timer cancelled, so two instances can never emit
//! overlapping progress ticks. Notifications carry the instance number they
//! were issued for and anything from an older instance is dropped.

use std::sync::Arc;
use std::time::Duration;

use tokio::sync::{broadcast, mpsc, watch};
use tokio::time::MissedTickBehavior;
use tracing::{debug, info, warn};
use tunebox_core::{Track, TrackId};

use crate::events::{PlaybackEvent, PlaybackStateEvent};
use crate::schedule::TaskSlot;
use crate::types::{EngineConfig, Progress, WidgetState};
use crate::volume::Volume;
use crate::widget::{MediaWidget, MediaWidgetFactory, WidgetEvent, WidgetEventKind, WidgetHandle};

const EVENT_CAPACITY: usize = 64;

/// What the caller must do after a widget notification
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EngineAction {
    /// Nothing further
    None,

    /// The track ended without repeat: advance the playing list
    Advance,
}

/// Adapter between `PlaybackStateMachine` and an opaque `MediaWidget`
pub struct MediaEngine {
    factory: Arc<dyn MediaWidgetFactory>,
    widget: Option<Box<dyn MediaWidget>>,

    /// Track the current instance was created for (kept even if creation failed)
    loaded: Option<TrackId>,

    /// Monotonic instance counter; only events for this value are honored
    instance: u64,
    events_tx: mpsc::UnboundedSender<WidgetEvent>,

    volume: Volume,
    repeat: bool,
    is_playing: bool,
    ready: bool,

    poll_interval: Duration,
    poll_task: TaskSlot,

    progress_tx: watch::Sender<Progress>,
    event_tx: broadcast::Sender<PlaybackEvent>,
}

impl MediaEngine {
    /// Create an engine with no widget loaded
    ///
    /// The returned receiver carries widget notifications and progress ticks;
    /// the owner must feed each one back through [`MediaEngine::handle`].
    pub fn new(
        factory: Arc<dyn MediaWidgetFactory>,
        config: EngineConfig,
    ) -> (Self, mpsc::UnboundedReceiver<WidgetEvent>) {
        let (events_tx, events_rx) = mpsc::unbounded_channel();
        let (progress_tx, _) = watch::channel(Progress::default());
        let (event_tx, _) = broadcast::channel(EVENT_CAPACITY);

        let engine = Self {
            factory,
            widget: None,
            loaded: None,
            instance: 0,
            events_tx,
            volume: Volume::new(config.volume),
            repeat: config.repeat,
            is_playing: false,
            ready: false,
            poll_interval: config.poll_interval,
            poll_task: TaskSlot::new(),
            progress_tx,
            event_tx,
        };

        (engine, events_rx)
    }

    /// Follow the playing list's current track
    ///
    /// Does nothing if `track` has the identity already loaded. Otherwise the
    /// existing widget is torn down and, for `Some`, a new one is created. Play
    /// and volume commands wait until the new widget reports ready.
    pub fn sync_track(&mut self, track: Option<&Track>) {
        let wanted = track.map(|t| &t.id);
        if wanted == self.loaded.as_ref() {
            return;
        }

        let previous = self.loaded.as_ref().map(|id| id.to_string());
        self.teardown();

        let Some(track) = track else {
            self.emit(PlaybackEvent::TrackChanged {
                track_id: None,
                previous_track_id: previous,
            });
            self.emit_state(PlaybackStateEvent::Stopped);
            return;
        };

        self.instance += 1;
        self.loaded = Some(track.id.clone());
        let handle = WidgetHandle::new(self.instance, self.events_tx.clone());

        self.emit(PlaybackEvent::TrackChanged {
            track_id: Some(track.id.to_string()),
            previous_track_id: previous,
        });

        match self.factory.create(track.id.as_str(), handle) {
            Ok(widget) => {
                info!(track_id = %track.id, title = %track.title, instance = self.instance, "Loading track");
                self.widget = Some(widget);
                self.emit_state(PlaybackStateEvent::Loading);
            }
            Err(e) => {
                // Not retried: the track simply never starts playing
                warn!(track_id = %track.id, error = %e, "Media engine unavailable");
                self.emit(PlaybackEvent::Error {
                    message: e.to_string(),
                });
            }
        }
    }

    /// Apply a notification from the widget channel
    pub fn handle(&mut self, event: WidgetEvent) -> EngineAction {
        if event.instance != self.instance || self.widget.is_none() {
            debug!(instance = event.instance, current = self.instance, kind = ?event.kind, "Dropping stale widget event");
            return EngineAction::None;
        }

        match event.kind {
            WidgetEventKind::Ready => {
                self.on_ready();
                EngineAction::None
            }
            WidgetEventKind::StateChange(WidgetState::Playing) => {
                self.is_playing = true;
                self.poll_progress();
                self.start_polling();
                self.emit_state(PlaybackStateEvent::Playing);
                EngineAction::None
            }
            WidgetEventKind::StateChange(WidgetState::Paused) => {
                self.is_playing = false;
                self.poll_task.cancel();
                self.emit_state(PlaybackStateEvent::Paused);
                EngineAction::None
            }
            WidgetEventKind::StateChange(WidgetState::Ended) => self.on_ended(),
            WidgetEventKind::ProgressTick => {
                self.poll_progress();
                EngineAction::None
            }
            WidgetEventKind::Error(message) => {
                warn!(instance = event.instance, error = %message, "Media widget error");
                self.is_playing = false;
                self.poll_task.cancel();
                self.emit(PlaybackEvent::Error { message });
                EngineAction::None
            }
        }
    }

    fn on_ready(&mut self) {
        let level = self.volume.effective();
        if let Some(widget) = self.widget.as_mut() {
            widget.set_volume(level);
            widget.play();
        }

        debug!(instance = self.instance, "Widget ready");
        self.ready = true;
        self.is_playing = true;
        self.poll_progress();
        self.start_polling();
        self.emit_state(PlaybackStateEvent::Playing);
    }

    fn on_ended(&mut self) -> EngineAction {
        if let Some(id) = &self.loaded {
            self.emit(PlaybackEvent::TrackFinished {
                track_id: id.to_string(),
            });
        }

        if self.repeat {
            self.replay();
            EngineAction::None
        } else {
            self.is_playing = false;
            self.poll_task.cancel();
            EngineAction::Advance
        }
    }

    fn replay(&mut self) {
        if let Some(widget) = self.widget.as_mut() {
            widget.seek_to(0.0);
            widget.play();
            self.is_playing = true;
            self.start_polling();
        }
    }

    /// Toggle between play and pause; no-op until the widget is ready
    ///
    /// Returns the new playing flag.
    pub fn toggle_play_pause(&mut self) -> bool {
        let playing = self.is_playing;
        let Some(widget) = self.ready_widget() else {
            return playing;
        };

        if playing {
            widget.pause();
        } else {
            widget.play();
        }
        self.is_playing = !playing;
        self.is_playing
    }

    /// Jump to `seconds`; no-op until the widget is ready
    pub fn seek_to(&mut self, seconds: f64) {
        if let Some(widget) = self.ready_widget() {
            widget.seek_to(seconds.max(0.0));
        }
    }

    /// Set the volume (clamped to 100)
    ///
    /// The level is remembered and applied to every future widget on ready.
    pub fn set_volume(&mut self, level: u8) {
        self.volume.set_level(level);
        self.apply_volume();
    }

    /// Toggle mute, keeping the level
    pub fn toggle_mute(&mut self) -> bool {
        self.volume.toggle_mute();
        self.apply_volume();
        self.volume.is_muted()
    }

    fn apply_volume(&mut self) {
        let effective = self.volume.effective();
        if let Some(widget) = self.ready_widget() {
            widget.set_volume(effective);
        }
        self.emit(PlaybackEvent::VolumeChanged {
            level: self.volume.level(),
            is_muted: self.volume.is_muted(),
        });
    }

    fn ready_widget(&mut self) -> Option<&mut Box<dyn MediaWidget>> {
        if self.ready {
            self.widget.as_mut()
        } else {
            None
        }
    }

    /// Toggle the repeat flag; returns the new value
    pub fn toggle_repeat(&mut self) -> bool {
        self.repeat = !self.repeat;
        self.emit(PlaybackEvent::RepeatChanged {
            enabled: self.repeat,
        });
        self.repeat
    }

    /// Read duration and position from the widget and republish them
    pub fn poll_progress(&mut self) {
        let Some(widget) = self.widget.as_ref() else {
            return;
        };

        let progress = Progress {
            elapsed: widget.current_time(),
            duration: widget.duration(),
        };
        self.progress_tx.send_replace(progress);
        self.emit(PlaybackEvent::PositionUpdate {
            position_secs: progress.elapsed,
            duration_secs: progress.duration,
        });
    }

    fn start_polling(&mut self) {
        let tx = self.events_tx.clone();
        let instance = self.instance;
        let period = self.poll_interval;

        self.poll_task.spawn(async move {
            let mut ticker = tokio::time::interval_at(tokio::time::Instant::now() + period, period);
            ticker.set_missed_tick_behavior(MissedTickBehavior::Delay);
            loop {
                ticker.tick().await;
                let tick = WidgetEvent {
                    instance,
                    kind: WidgetEventKind::ProgressTick,
                };
                if tx.send(tick).is_err() {
                    break;
                }
            }
        });
    }

    /// Destroy the current widget and stop its timer
    fn teardown(&mut self) {
        self.poll_task.cancel();
        if let Some(mut widget) = self.widget.take() {
            debug!(instance = self.instance, "Destroying widget");
            widget.destroy();
        }
        self.loaded = None;
        self.is_playing = false;
        self.ready = false;
        self.progress_tx.send_replace(Progress::default());
    }

    /// Tear down the widget, if any, without loading another
    pub fn stop(&mut self) {
        self.sync_track(None);
    }

    pub fn is_playing(&self) -> bool {
        self.is_playing
    }

    /// Whether the current widget has reported ready
    pub fn is_ready(&self) -> bool {
        self.ready
    }

    pub fn has_widget(&self) -> bool {
        self.widget.is_some()
    }

    pub fn repeat(&self) -> bool {
        self.repeat
    }

    pub fn volume(&self) -> u8 {
        self.volume.level()
    }

    pub fn is_muted(&self) -> bool {
        self.volume.is_muted()
    }

    /// Identity of the track the current instance was created for
    pub fn loaded_track(&self) -> Option<&TrackId> {
        self.loaded.as_ref()
    }

    /// Whether the progress timer is running
    pub fn is_polling(&self) -> bool {
        self.poll_task.is_active()
    }

    /// Last published progress
    pub fn progress(&self) -> Progress {
        *self.progress_tx.borrow()
    }

    pub fn subscribe_progress(&self) -> watch::Receiver<Progress> {
        self.progress_tx.subscribe()
    }

    pub fn subscribe_events(&self) -> broadcast::Receiver<PlaybackEvent> {
        self.event_tx.subscribe()
    }

    fn emit_state(&self, state: PlaybackStateEvent) {
        self.emit(PlaybackEvent::StateChanged { state });
    }

    fn emit(&self, event: PlaybackEvent) {
        // No subscribers is fine
        let _ = self.event_tx.send(event);
    }
}

impl Drop for MediaEngine {
    fn drop(&mut self) {
        if let Some(mut widget) = self.widget.take() {
            widget.destroy();
        }
    }
}
