//! Timer-driven frame player.
//!
//! A single Tokio task advances the frame cursor one step per interval until
//! it reaches the destination frame. The cursor and the per-frame callback
//! share one mutex, which gives two guarantees:
//!
//! - a destination change while playing is picked up by the next tick, so the
//!   player always moves from where it is toward the newest destination;
//! - once [`KeyframeAnimation::stop`] returns, no callback is running and none
//!   will run later.

use crate::frames::{FRAME_COUNT, FrameIndex};

use std::{
    cmp::Ordering,
    sync::{Arc, Mutex, MutexGuard, PoisonError},
    time::Duration,
};

use tokio::{
    task::JoinHandle,
    time::{self, Instant, MissedTickBehavior},
};
use tracing::{debug, instrument, trace};

/// Time each frame stays on screen unless configured otherwise.
pub const DEFAULT_FRAME_INTERVAL: Duration = Duration::from_millis(100);

/// Shortest time a frame stays on screen. Slower speeds are kept as given.
pub const MIN_FRAME_INTERVAL: Duration = Duration::from_millis(1);

/// Span of a playback request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AnimationRange {
    /// Frame to jump to before playing. `None` continues from the current frame.
    pub start: Option<FrameIndex>,
    /// Frame to stop on.
    pub end: FrameIndex,
}

impl AnimationRange {
    /// Play from wherever the cursor is toward `end`.
    pub const fn to(end: FrameIndex) -> Self {
        Self { start: None, end }
    }

    /// Show `frame` without animating.
    pub const fn hold(frame: FrameIndex) -> Self {
        Self {
            start: Some(frame),
            end: frame,
        }
    }
}

type FrameCallback = Box<dyn FnMut(FrameIndex) + Send>;

struct Cursor {
    current_frame: FrameIndex,
    end: FrameIndex,
    running: bool,
    // Bumped on every start and stop so a stale ticker can tell it lost.
    generation: u64,
    on_frame: FrameCallback,
}

impl Cursor {
    fn render(&mut self) {
        trace!(frame = self.current_frame, "Rendering frame");
        (self.on_frame)(self.current_frame);
    }

    /// Move one frame toward the destination and render it.
    ///
    /// Returns `false` once the destination is reached.
    fn step(&mut self) -> bool {
        match self.current_frame.cmp(&self.end) {
            Ordering::Equal => return false,
            Ordering::Less => self.current_frame += 1,
            Ordering::Greater => self.current_frame -= 1,
        }
        self.render();
        self.current_frame != self.end
    }
}

fn lock(cursor: &Mutex<Cursor>) -> MutexGuard<'_, Cursor> {
    cursor.lock().unwrap_or_else(PoisonError::into_inner)
}

/// Plays the lock animation one frame at a time.
pub struct KeyframeAnimation {
    speed: Duration,
    cursor: Arc<Mutex<Cursor>>,
    ticker: Option<JoinHandle<()>>,
}

impl KeyframeAnimation {
    /// Create an idle player showing frame 0.
    ///
    /// `on_frame` is called with every frame that becomes visible. It runs
    /// while the player's internal lock is held and must not call back into
    /// the player. `speed` is raised to [`MIN_FRAME_INTERVAL`] if shorter.
    pub fn new(speed: Duration, on_frame: impl FnMut(FrameIndex) + Send + 'static) -> Self {
        Self {
            speed: speed.max(MIN_FRAME_INTERVAL),
            cursor: Arc::new(Mutex::new(Cursor {
                current_frame: 0,
                end: 0,
                running: false,
                generation: 0,
                on_frame: Box::new(on_frame),
            })),
            ticker: None,
        }
    }

    /// Time per frame.
    pub fn speed(&self) -> Duration {
        self.speed
    }

    /// Frame currently on screen.
    pub fn current_frame(&self) -> FrameIndex {
        lock(&self.cursor).current_frame
    }

    /// Frame the player is heading to.
    pub fn target_frame(&self) -> FrameIndex {
        lock(&self.cursor).end
    }

    /// Whether the timer is advancing frames.
    pub fn is_running(&self) -> bool {
        lock(&self.cursor).running
    }

    /// Drive the player toward `range.end`.
    ///
    /// A running player only has its destination replaced; `range.start` is
    /// ignored until it comes to rest. An idle player already on the
    /// destination renders that frame once without starting the timer.
    ///
    /// # Panics
    ///
    /// Starting the timer spawns onto the current Tokio runtime, so this must
    /// be called from within one.
    #[instrument(skip(self))]
    pub fn play(&mut self, range: AnimationRange) {
        debug_assert!(range.end < FRAME_COUNT, "end frame out of range");
        debug_assert!(
            range.start.is_none_or(|start| start < FRAME_COUNT),
            "start frame out of range"
        );

        let mut cursor = lock(&self.cursor);
        cursor.end = range.end;

        if cursor.running {
            debug!(
                from = cursor.current_frame,
                to = cursor.end,
                "Retargeting running animation"
            );
            return;
        }

        if let Some(start) = range.start {
            cursor.current_frame = start;
            cursor.render();
        }

        if cursor.current_frame == cursor.end {
            if range.start.is_none() {
                cursor.render();
            }
            return;
        }

        cursor.running = true;
        cursor.generation += 1;
        let generation = cursor.generation;
        debug!(from = cursor.current_frame, to = cursor.end, "Starting animation");
        drop(cursor);

        if let Some(previous) = self.ticker.take() {
            previous.abort();
        }
        self.ticker = Some(tokio::spawn(run_ticker(
            Arc::clone(&self.cursor),
            self.speed,
            generation,
        )));
    }

    /// Halt the timer, leaving the last frame on screen.
    #[instrument(skip(self))]
    pub fn stop(&mut self) {
        {
            let mut cursor = lock(&self.cursor);
            if cursor.running {
                debug!(frame = cursor.current_frame, "Stopping animation");
            }
            cursor.running = false;
            cursor.generation += 1;
        }

        if let Some(ticker) = self.ticker.take() {
            ticker.abort();
        }
    }
}

impl Drop for KeyframeAnimation {
    fn drop(&mut self) {
        self.stop();
    }
}

async fn run_ticker(cursor: Arc<Mutex<Cursor>>, speed: Duration, generation: u64) {
    let mut interval = time::interval_at(Instant::now() + speed, speed);
    interval.set_missed_tick_behavior(MissedTickBehavior::Delay);

    loop {
        interval.tick().await;

        let mut cursor = lock(&cursor);
        if cursor.generation != generation || !cursor.running {
            return;
        }

        if !cursor.step() {
            cursor.running = false;
            debug!(frame = cursor.current_frame, "Animation finished");
            return;
        }
    }
}
