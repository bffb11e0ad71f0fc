//! Media engine adapter integration tests
//!
//! Drives `MediaEngine` with a recording mock widget and checks the widget
//! lifecycle: ready gating, teardown before re-creation, stale-event
//! suppression, repeat/advance on end and the progress timer.

use std::sync::{Arc, Mutex};
use std::time::Duration;

use tokio::sync::mpsc;
use tunebox_core::Track;
use tunebox_playback::{
    EngineAction, EngineConfig, MediaEngine, MediaWidget, MediaWidgetFactory, PlaybackError,
    PlaybackEvent, PlaybackStateMachine, Result, WidgetEvent, WidgetEventKind, WidgetHandle,
    WidgetState,
};

// ============================================================================
// Test Utilities
// ============================================================================

#[derive(Debug, Clone, PartialEq)]
enum Call {
    Create(String),
    Play(String),
    Pause(String),
    Seek(String, f64),
    Volume(String, u8),
    Destroy(String),
}

#[derive(Default)]
struct Recorder {
    calls: Mutex<Vec<Call>>,
    handles: Mutex<Vec<WidgetHandle>>,
    position: Mutex<(f64, f64)>,
}

impl Recorder {
    fn calls(&self) -> Vec<Call> {
        self.calls.lock().unwrap().clone()
    }

    fn record(&self, call: Call) {
        self.calls.lock().unwrap().push(call);
    }

    fn handle(&self, n: usize) -> WidgetHandle {
        self.handles.lock().unwrap()[n].clone()
    }

    fn created(&self) -> usize {
        self.handles.lock().unwrap().len()
    }

    fn set_position(&self, elapsed: f64, duration: f64) {
        *self.position.lock().unwrap() = (elapsed, duration);
    }
}

struct MockWidget {
    media_id: String,
    recorder: Arc<Recorder>,
}

impl MediaWidget for MockWidget {
    fn play(&mut self) {
        self.recorder.record(Call::Play(self.media_id.clone()));
    }

    fn pause(&mut self) {
        self.recorder.record(Call::Pause(self.media_id.clone()));
    }

    fn seek_to(&mut self, seconds: f64) {
        self.recorder.record(Call::Seek(self.media_id.clone(), seconds));
    }

    fn set_volume(&mut self, level: u8) {
        self.recorder.record(Call::Volume(self.media_id.clone(), level));
    }

    fn duration(&self) -> f64 {
        self.recorder.position.lock().unwrap().1
    }

    fn current_time(&self) -> f64 {
        self.recorder.position.lock().unwrap().0
    }

    fn destroy(&mut self) {
        self.recorder.record(Call::Destroy(self.media_id.clone()));
    }
}

struct MockFactory {
    recorder: Arc<Recorder>,
    fail: bool,
}

impl MediaWidgetFactory for MockFactory {
    fn create(&self, media_id: &str, handle: WidgetHandle) -> Result<Box<dyn MediaWidget>> {
        self.recorder.record(Call::Create(media_id.to_string()));
        if self.fail {
            return Err(PlaybackError::MediaEngineUnavailable(
                "player script failed to load".to_string(),
            ));
        }

        self.recorder.handles.lock().unwrap().push(handle);
        Ok(Box::new(MockWidget {
            media_id: media_id.to_string(),
            recorder: self.recorder.clone(),
        }))
    }
}

fn engine_with(
    fail: bool,
    config: EngineConfig,
) -> (MediaEngine, mpsc::UnboundedReceiver<WidgetEvent>, Arc<Recorder>) {
    let recorder = Arc::new(Recorder::default());
    let factory = Arc::new(MockFactory {
        recorder: recorder.clone(),
        fail,
    });
    let (engine, rx) = MediaEngine::new(factory, config);
    (engine, rx, recorder)
}

fn engine() -> (MediaEngine, mpsc::UnboundedReceiver<WidgetEvent>, Arc<Recorder>) {
    engine_with(false, EngineConfig::default())
}

/// Feed every queued notification back into the engine
fn pump(engine: &mut MediaEngine, rx: &mut mpsc::UnboundedReceiver<WidgetEvent>) -> Vec<EngineAction> {
    let mut actions = Vec::new();
    while let Ok(event) = rx.try_recv() {
        actions.push(engine.handle(event));
    }
    actions
}

fn track(id: &str) -> Track {
    Track::new(id, format!("Title {id}"), "Artist")
}

// ============================================================================
// Lifecycle
// ============================================================================

#[tokio::test]
async fn commands_wait_for_ready() {
    let (mut engine, mut rx, recorder) = engine();

    engine.sync_track(Some(&track("a")));
    assert_eq!(recorder.calls(), vec![Call::Create("a".into())]);
    assert!(engine.has_widget());
    assert!(!engine.is_playing());

    recorder.handle(0).ready();
    pump(&mut engine, &mut rx);

    assert_eq!(
        recorder.calls(),
        vec![
            Call::Create("a".into()),
            Call::Volume("a".into(), 50),
            Call::Play("a".into()),
        ]
    );
    assert!(engine.is_playing());
    assert!(engine.is_ready());
}

#[tokio::test]
async fn same_track_does_not_recreate_widget() {
    let (mut engine, _rx, recorder) = engine();
    let a = track("a");

    engine.sync_track(Some(&a));
    engine.sync_track(Some(&a));
    engine.sync_track(Some(&a.clone()));

    assert_eq!(recorder.created(), 1);
}

#[tokio::test]
async fn switching_destroys_before_creating() {
    let (mut engine, _rx, recorder) = engine();

    engine.sync_track(Some(&track("a")));
    engine.sync_track(Some(&track("b")));

    assert_eq!(
        recorder.calls(),
        vec![
            Call::Create("a".into()),
            Call::Destroy("a".into()),
            Call::Create("b".into()),
        ]
    );
    assert_eq!(engine.loaded_track().map(|id| id.as_str()), Some("b"));
}

#[tokio::test]
async fn stale_instance_events_are_ignored() {
    let (mut engine, mut rx, recorder) = engine();

    engine.sync_track(Some(&track("a")));
    let old = recorder.handle(0);
    engine.sync_track(Some(&track("b")));

    // The destroyed widget reports late
    old.ready();
    old.state_changed(WidgetState::Ended);
    let actions = pump(&mut engine, &mut rx);

    assert_eq!(actions, vec![EngineAction::None, EngineAction::None]);
    assert!(!engine.is_playing());
    assert!(!recorder.calls().contains(&Call::Play("a".into())));
    assert!(!recorder.calls().contains(&Call::Play("b".into())));
}

#[tokio::test]
async fn clearing_track_tears_down() {
    let (mut engine, mut rx, recorder) = engine();

    engine.sync_track(Some(&track("a")));
    recorder.handle(0).ready();
    pump(&mut engine, &mut rx);

    engine.stop();

    assert!(!engine.has_widget());
    assert!(!engine.is_playing());
    assert!(!engine.is_polling());
    assert_eq!(engine.loaded_track(), None);
    assert_eq!(recorder.calls().last(), Some(&Call::Destroy("a".into())));
}

#[tokio::test]
async fn factory_failure_is_not_retried() {
    let (mut engine, mut events, recorder) = engine_with(true, EngineConfig::default());
    let mut playback_events = engine.subscribe_events();
    let a = track("a");

    engine.sync_track(Some(&a));
    engine.sync_track(Some(&a));

    assert_eq!(recorder.calls(), vec![Call::Create("a".into())]);
    assert!(!engine.has_widget());
    assert_eq!(engine.loaded_track().map(|id| id.as_str()), Some("a"));

    // Controls are no-ops without a widget
    assert!(!engine.toggle_play_pause());
    engine.seek_to(30.0);
    assert!(pump(&mut engine, &mut events).is_empty());

    let mut saw_error = false;
    while let Ok(event) = playback_events.try_recv() {
        if let PlaybackEvent::Error { message } = event {
            assert!(message.contains("player script failed to load"));
            saw_error = true;
        }
    }
    assert!(saw_error);
}

// ============================================================================
// Controls
// ============================================================================

#[tokio::test]
async fn toggle_play_pause_alternates() {
    let (mut engine, mut rx, recorder) = engine();

    engine.sync_track(Some(&track("a")));
    recorder.handle(0).ready();
    pump(&mut engine, &mut rx);

    assert!(!engine.toggle_play_pause());
    assert!(engine.toggle_play_pause());

    let calls = recorder.calls();
    assert_eq!(
        &calls[calls.len() - 2..],
        &[Call::Pause("a".into()), Call::Play("a".into())]
    );
}

#[tokio::test]
async fn volume_is_remembered_across_widgets() {
    let (mut engine, mut rx, recorder) = engine();

    // No widget yet: only remembered
    engine.set_volume(80);
    assert_eq!(engine.volume(), 80);
    assert!(recorder.calls().is_empty());

    engine.sync_track(Some(&track("a")));
    recorder.handle(0).ready();
    pump(&mut engine, &mut rx);
    assert!(recorder.calls().contains(&Call::Volume("a".into(), 80)));

    engine.set_volume(150);
    assert_eq!(engine.volume(), 100);

    engine.sync_track(Some(&track("b")));
    recorder.handle(1).ready();
    pump(&mut engine, &mut rx);
    assert!(recorder.calls().contains(&Call::Volume("b".into(), 100)));
}

#[tokio::test]
async fn mute_sends_zero_and_restores_level() {
    let (mut engine, mut rx, recorder) = engine();
    engine.sync_track(Some(&track("a")));
    recorder.handle(0).ready();
    pump(&mut engine, &mut rx);

    assert!(engine.toggle_mute());
    assert_eq!(recorder.calls().last(), Some(&Call::Volume("a".into(), 0)));
    assert_eq!(engine.volume(), 50);

    assert!(!engine.toggle_mute());
    assert_eq!(recorder.calls().last(), Some(&Call::Volume("a".into(), 50)));
}

#[tokio::test]
async fn controls_before_ready_are_held_back() {
    let (mut engine, mut rx, recorder) = engine();
    engine.sync_track(Some(&track("a")));

    assert!(!engine.toggle_play_pause());
    engine.seek_to(30.0);
    engine.set_volume(70);
    assert_eq!(recorder.calls(), vec![Call::Create("a".into())]);

    // The remembered level is what ready applies
    recorder.handle(0).ready();
    pump(&mut engine, &mut rx);
    assert_eq!(
        recorder.calls(),
        vec![
            Call::Create("a".into()),
            Call::Volume("a".into(), 70),
            Call::Play("a".into()),
        ]
    );
}

#[tokio::test]
async fn seek_clamps_negative_positions() {
    let (mut engine, mut rx, recorder) = engine();
    engine.sync_track(Some(&track("a")));
    recorder.handle(0).ready();
    pump(&mut engine, &mut rx);

    engine.seek_to(-5.0);
    engine.seek_to(42.5);

    let calls = recorder.calls();
    assert!(calls.contains(&Call::Seek("a".into(), 0.0)));
    assert!(calls.contains(&Call::Seek("a".into(), 42.5)));
}

#[tokio::test]
async fn widget_error_stops_playback() {
    let (mut engine, mut rx, recorder) = engine();
    let mut playback_events = engine.subscribe_events();

    engine.sync_track(Some(&track("a")));
    recorder.handle(0).ready();
    recorder.handle(0).error("video unavailable");
    pump(&mut engine, &mut rx);

    assert!(!engine.is_playing());
    assert!(!engine.is_polling());
    // The widget is kept; a new track replaces it as usual
    assert!(engine.has_widget());

    let mut saw_error = false;
    while let Ok(event) = playback_events.try_recv() {
        if let PlaybackEvent::Error { message } = event {
            assert_eq!(message, "video unavailable");
            saw_error = true;
        }
    }
    assert!(saw_error);
}

// ============================================================================
// End of media
// ============================================================================

#[tokio::test]
async fn ended_without_repeat_advances() {
    let (mut engine, mut rx, recorder) = engine();
    let mut player = PlaybackStateMachine::new();
    player.set_playing_list(vec![track("a"), track("b")], Some(0));

    engine.sync_track(player.current_track());
    recorder.handle(0).ready();
    recorder.handle(0).state_changed(WidgetState::Ended);

    let actions = pump(&mut engine, &mut rx);
    assert_eq!(actions.last(), Some(&EngineAction::Advance));

    player.next();
    engine.sync_track(player.current_track());
    assert_eq!(engine.loaded_track().map(|id| id.as_str()), Some("b"));
    assert_eq!(recorder.created(), 2);
}

#[tokio::test]
async fn ended_with_repeat_restarts_same_instance() {
    let config = EngineConfig {
        repeat: true,
        ..EngineConfig::default()
    };
    let (mut engine, mut rx, recorder) = engine_with(false, config);

    engine.sync_track(Some(&track("a")));
    recorder.handle(0).ready();
    recorder.handle(0).state_changed(WidgetState::Ended);

    let actions = pump(&mut engine, &mut rx);
    assert_eq!(actions.last(), Some(&EngineAction::None));

    let calls = recorder.calls();
    assert_eq!(
        &calls[calls.len() - 2..],
        &[Call::Seek("a".into(), 0.0), Call::Play("a".into())]
    );
    assert_eq!(recorder.created(), 1);
    assert!(engine.is_playing());
}

#[tokio::test]
async fn toggle_repeat_flips_flag() {
    let (mut engine, _rx, _recorder) = engine();
    assert!(!engine.repeat());
    assert!(engine.toggle_repeat());
    assert!(!engine.toggle_repeat());
}

// ============================================================================
// Progress polling
// ============================================================================

#[tokio::test(start_paused = true)]
async fn polls_progress_while_playing() {
    let (mut engine, mut rx, recorder) = engine();
    let progress = engine.subscribe_progress();

    engine.sync_track(Some(&track("a")));
    recorder.handle(0).ready();
    pump(&mut engine, &mut rx);
    assert!(engine.is_polling());

    recorder.set_position(12.0, 200.0);
    tokio::time::sleep(Duration::from_millis(3500)).await;

    let ticks: Vec<_> = std::iter::from_fn(|| rx.try_recv().ok()).collect();
    assert!(ticks.len() >= 2);
    assert!(ticks
        .iter()
        .all(|t| t.instance == 1 && t.kind == WidgetEventKind::ProgressTick));

    for tick in ticks {
        engine.handle(tick);
    }
    assert_eq!(progress.borrow().elapsed, 12.0);
    assert_eq!(progress.borrow().duration, 200.0);
}

#[tokio::test(start_paused = true)]
async fn teardown_stops_polling() {
    let (mut engine, mut rx, recorder) = engine();

    engine.sync_track(Some(&track("a")));
    recorder.handle(0).ready();
    pump(&mut engine, &mut rx);
    recorder.set_position(30.0, 100.0);

    engine.sync_track(Some(&track("b")));
    assert!(!engine.is_polling());
    assert_eq!(engine.progress().elapsed, 0.0);

    tokio::time::sleep(Duration::from_secs(5)).await;
    assert!(rx.try_recv().is_err());
}

#[tokio::test(start_paused = true)]
async fn pause_stops_polling() {
    let (mut engine, mut rx, recorder) = engine();

    engine.sync_track(Some(&track("a")));
    recorder.handle(0).ready();
    recorder.handle(0).state_changed(WidgetState::Paused);
    pump(&mut engine, &mut rx);

    assert!(!engine.is_playing());
    assert!(!engine.is_polling());

    tokio::time::sleep(Duration::from_secs(3)).await;
    assert!(rx.try_recv().is_err());
}
