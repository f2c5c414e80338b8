use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::mpsc::Sender;
use std::sync::Arc;
use std::time::Duration;

use crate::runtime::CourtEvent;

/// Period of the game clock
pub const CLOCK_PERIOD: Duration = Duration::from_secs(1);

/// A repeating tick that can be stopped
pub trait TickHandle: Send {
    fn cancel(&mut self);
}

/// Something that can start a repeating one-second tick.
///
/// Every tick produced by a task must carry the `generation` it was started
/// with, so the clock can drop ticks that were already queued when the task
/// was cancelled.
pub trait TickScheduler: Send {
    fn schedule(&mut self, generation: u64) -> Box<dyn TickHandle>;
}

/// Scheduler backed by a sleeping thread that posts `CourtEvent::ClockTick`
/// into the app's event queue
pub struct ThreadTickScheduler {
    tx: Sender<CourtEvent>,
    period: Duration,
}

impl ThreadTickScheduler {
    pub fn new(tx: Sender<CourtEvent>) -> Self {
        Self::with_period(tx, CLOCK_PERIOD)
    }

    pub fn with_period(tx: Sender<CourtEvent>, period: Duration) -> Self {
        Self { tx, period }
    }
}

struct ThreadTickHandle {
    cancelled: Arc<AtomicBool>,
}

impl TickHandle for ThreadTickHandle {
    fn cancel(&mut self) {
        self.cancelled.store(true, Ordering::SeqCst);
    }
}

impl Drop for ThreadTickHandle {
    fn drop(&mut self) {
        self.cancel();
    }
}

impl TickScheduler for ThreadTickScheduler {
    fn schedule(&mut self, generation: u64) -> Box<dyn TickHandle> {
        let cancelled = Arc::new(AtomicBool::new(false));
        let flag = Arc::clone(&cancelled);
        let tx = self.tx.clone();
        let period = self.period;

        std::thread::spawn(move || loop {
            std::thread::sleep(period);
            if flag.load(Ordering::SeqCst) {
                break;
            }
            if tx.send(CourtEvent::ClockTick(generation)).is_err() {
                break;
            }
        });

        Box::new(ThreadTickHandle { cancelled })
    }
}

/// Scheduler that never fires on its own; ticks are delivered by calling
/// `GameClock::on_tick` directly. Used headless and in tests.
#[derive(Debug, Default)]
pub struct ManualTickScheduler;

struct ManualTickHandle;

impl TickHandle for ManualTickHandle {
    fn cancel(&mut self) {}
}

impl TickScheduler for ManualTickScheduler {
    fn schedule(&mut self, _generation: u64) -> Box<dyn TickHandle> {
        Box::new(ManualTickHandle)
    }
}

/// Integer-second game clock. It only advances while a tick task is armed.
pub struct GameClock {
    elapsed_secs: u64,
    generation: u64,
    task: Option<Box<dyn TickHandle>>,
    scheduler: Box<dyn TickScheduler>,
}

impl std::fmt::Debug for GameClock {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("GameClock")
            .field("elapsed_secs", &self.elapsed_secs)
            .field("generation", &self.generation)
            .field("armed", &self.task.is_some())
            .finish()
    }
}

impl Default for GameClock {
    fn default() -> Self {
        Self::new(Box::new(ManualTickScheduler))
    }
}

impl GameClock {
    pub fn new(scheduler: Box<dyn TickScheduler>) -> Self {
        Self {
            elapsed_secs: 0,
            generation: 0,
            task: None,
            scheduler,
        }
    }

    pub fn elapsed_secs(&self) -> u64 {
        self.elapsed_secs
    }

    pub fn is_armed(&self) -> bool {
        self.task.is_some()
    }

    /// Generation of the live tick task, if one is armed
    pub fn active_generation(&self) -> Option<u64> {
        self.task.as_ref().map(|_| self.generation)
    }

    /// Start ticking. Any previous task is cancelled first.
    pub fn arm(&mut self) {
        self.disarm();
        self.generation += 1;
        self.task = Some(self.scheduler.schedule(self.generation));
    }

    /// Stop ticking without touching elapsed time
    pub fn disarm(&mut self) {
        if let Some(mut task) = self.task.take() {
            task.cancel();
        }
    }

    pub fn reset(&mut self) {
        self.elapsed_secs = 0;
    }

    /// Count one second if the tick belongs to the live task. Returns whether it counted.
    pub fn on_tick(&mut self, generation: u64) -> bool {
        if self.active_generation() == Some(generation) {
            self.elapsed_secs += 1;
            true
        } else {
            false
        }
    }
}

/// Format seconds as `m:ss`, or `h:mm:ss` past the hour
pub fn format_clock(secs: u64) -> String {
    let (h, m, s) = (secs / 3600, (secs % 3600) / 60, secs % 60);
    if h > 0 {
        format!("{h}:{m:02}:{s:02}")
    } else {
        format!("{m}:{s:02}")
    }
}
