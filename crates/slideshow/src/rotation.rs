use std::{sync::Arc, time::Duration};

use tokio::{
    sync::{broadcast, Mutex},
    task::JoinHandle,
    time::MissedTickBehavior,
};
use tracing::debug;

use crate::{
    controller::{SlideDeck, SlideFrame, SlideshowError},
    input::SlideshowInput,
};

/// Fixed auto-advance cadence: one slide every five seconds.
pub const ROTATION_PERIOD: Duration = Duration::from_millis(5000);

/// Timer-driven slideshow service. Wraps the pure [`SlideDeck`] behind a
/// mutex, publishes every rendered frame to subscribers, and owns the one
/// timer task that auto-advances the deck.
///
/// Invariant: at most one timer task is alive. `start` refuses to spawn a
/// second while one is running, and `pause` aborts before clearing, so two
/// timers can never advance the deck at double speed.
pub struct Slideshow {
    deck: Arc<Mutex<SlideDeck>>,
    frames: broadcast::Sender<SlideFrame>,
    timer: Option<JoinHandle<()>>,
}

impl Slideshow {
    pub fn new(deck: SlideDeck) -> Self {
        let (frames, _) = broadcast::channel(16);
        Self {
            deck: Arc::new(Mutex::new(deck)),
            frames,
            timer: None,
        }
    }

    pub fn subscribe(&self) -> broadcast::Receiver<SlideFrame> {
        self.frames.subscribe()
    }

    pub fn is_running(&self) -> bool {
        self.timer.as_ref().is_some_and(|task| !task.is_finished())
    }

    /// Begins auto-advancing. A no-op while a timer is already live.
    pub fn start(&mut self) {
        if self.is_running() {
            debug!("rotation timer already running; ignoring start");
            return;
        }
        let deck = Arc::clone(&self.deck);
        let frames = self.frames.clone();
        self.timer = Some(tokio::spawn(async move {
            let mut ticker = tokio::time::interval(ROTATION_PERIOD);
            ticker.set_missed_tick_behavior(MissedTickBehavior::Skip);
            // The first tick completes immediately; the first advance must
            // come one full period after start.
            ticker.tick().await;
            loop {
                ticker.tick().await;
                let frame = deck.lock().await.next();
                let _ = frames.send(frame);
            }
        }));
        debug!("rotation timer started");
    }

    /// Stops auto-advancing. A no-op when already paused.
    pub fn pause(&mut self) {
        if let Some(task) = self.timer.take() {
            task.abort();
            debug!("rotation timer paused");
        }
    }

    /// Routes one presentation-layer input: hover events drive the timer,
    /// everything else goes through the deck. Navigation frames are
    /// published to subscribers.
    pub async fn handle_input(
        &mut self,
        input: SlideshowInput,
    ) -> Result<Option<SlideFrame>, SlideshowError> {
        match input {
            SlideshowInput::PauseEnter => {
                self.pause();
                Ok(None)
            }
            SlideshowInput::PauseLeave => {
                self.start();
                Ok(None)
            }
            other => {
                let frame = self.deck.lock().await.navigate(other)?;
                if let Some(frame) = &frame {
                    let _ = self.frames.send(frame.clone());
                }
                Ok(frame)
            }
        }
    }

    pub async fn current_frame(&self) -> SlideFrame {
        self.deck.lock().await.current_frame()
    }
}

impl Drop for Slideshow {
    fn drop(&mut self) {
        self.pause();
    }
}
