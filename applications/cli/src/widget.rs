//! Headless media widget
//!
//! Stands in for the embedded player: it renders nothing, but keeps a clock
//! of elapsed time against a nominal track length and reports ready,
//! playing, paused and ended through its `WidgetHandle` exactly as a real
//! player would.

use std::time::Duration;

use tokio::time::Instant;
use tracing::debug;
use tunebox_playback::{
    MediaWidget, MediaWidgetFactory, Result, TaskSlot, WidgetHandle, WidgetState,
};

/// Creates `HeadlessWidget`s that all share one nominal length
#[derive(Debug, Clone)]
pub struct HeadlessWidgetFactory {
    track_length: Duration,
}

impl HeadlessWidgetFactory {
    pub fn new(track_length: Duration) -> Self {
        Self { track_length }
    }
}

impl MediaWidgetFactory for HeadlessWidgetFactory {
    fn create(&self, media_id: &str, handle: WidgetHandle) -> Result<Box<dyn MediaWidget>> {
        debug!(media_id = %media_id, instance = handle.instance(), "Creating headless widget");

        // Nothing to load: ready as soon as it exists
        handle.ready();

        Ok(Box::new(HeadlessWidget {
            media_id: media_id.to_string(),
            handle,
            length: self.track_length.as_secs_f64(),
            position: 0.0,
            started: None,
            volume: 0,
            end_timer: TaskSlot::new(),
        }))
    }
}

/// Simulated player for one media id
pub struct HeadlessWidget {
    media_id: String,
    handle: WidgetHandle,
    length: f64,

    /// Position when the clock was last (re)started or stopped
    position: f64,
    started: Option<Instant>,
    volume: u8,
    end_timer: TaskSlot,
}

impl HeadlessWidget {
    fn is_running(&self) -> bool {
        self.started.is_some()
    }

    fn schedule_end(&mut self) {
        let remaining = Duration::from_secs_f64((self.length - self.position).max(0.0));
        let handle = self.handle.clone();

        self.end_timer.spawn(async move {
            tokio::time::sleep(remaining).await;
            handle.state_changed(WidgetState::Ended);
        });
    }
}

impl MediaWidget for HeadlessWidget {
    fn play(&mut self) {
        let position = self.current_time();
        if position >= self.length {
            // Finished; only a seek rewinds it
            return;
        }

        self.position = position;
        self.started = Some(Instant::now());
        self.schedule_end();
        debug!(media_id = %self.media_id, position, volume = self.volume, "Headless playback started");
        self.handle.state_changed(WidgetState::Playing);
    }

    fn pause(&mut self) {
        if !self.is_running() {
            return;
        }

        self.position = self.current_time();
        self.started = None;
        self.end_timer.cancel();
        self.handle.state_changed(WidgetState::Paused);
    }

    fn seek_to(&mut self, seconds: f64) {
        self.position = seconds.clamp(0.0, self.length);
        if self.is_running() {
            self.started = Some(Instant::now());
            self.schedule_end();
        }
    }

    fn set_volume(&mut self, level: u8) {
        self.volume = level.min(100);
    }

    fn duration(&self) -> f64 {
        self.length
    }

    fn current_time(&self) -> f64 {
        let running = self
            .started
            .map_or(0.0, |started| started.elapsed().as_secs_f64());
        (self.position + running).min(self.length)
    }

    fn destroy(&mut self) {
        self.end_timer.cancel();
        self.started = None;
    }
}
