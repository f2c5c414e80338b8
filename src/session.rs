use chrono::Local;
use tracing::{debug, info};

use crate::archive::{Archive, CompletedGame};
use crate::clock::{GameClock, TickScheduler};
use crate::error::{Result, TrackerError};
use crate::stats::{Counter, FoulKind, GameStats, ShotEvent, ShotKind};

#[derive(Debug, Clone, Copy, PartialEq, Eq, strum_macros::Display)]
pub enum SessionState {
    #[strum(serialize = "no game")]
    NoGame,
    #[strum(serialize = "on court")]
    Running,
    #[strum(serialize = "benched")]
    Benched,
    #[strum(serialize = "game over")]
    Ended,
}

impl SessionState {
    /// A game exists and has not been ended
    pub fn is_active(self) -> bool {
        matches!(self, SessionState::Running | SessionState::Benched)
    }
}

/// The game being tracked plus everything already finished.
///
/// All transitions go through `&mut self`; rejected calls return an error
/// and leave every field as it was.
#[derive(Debug)]
pub struct Session {
    state: SessionState,
    title: String,
    stats: GameStats,
    shots: Vec<ShotEvent>,
    clock: GameClock,
    archive: Archive,
}

impl Default for Session {
    fn default() -> Self {
        Self::with_clock(GameClock::default())
    }
}

impl Session {
    pub fn new(scheduler: Box<dyn TickScheduler>) -> Self {
        Self::with_clock(GameClock::new(scheduler))
    }

    fn with_clock(clock: GameClock) -> Self {
        Self {
            state: SessionState::NoGame,
            title: String::new(),
            stats: GameStats::default(),
            shots: Vec::new(),
            clock,
            archive: Archive::new(),
        }
    }

    pub fn state(&self) -> SessionState {
        self.state
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn stats(&self) -> &GameStats {
        &self.stats
    }

    pub fn shots(&self) -> &[ShotEvent] {
        &self.shots
    }

    pub fn elapsed_secs(&self) -> u64 {
        self.clock.elapsed_secs()
    }

    pub fn clock(&self) -> &GameClock {
        &self.clock
    }

    pub fn archive(&self) -> &Archive {
        &self.archive
    }

    /// Whether ending now would have anything worth archiving
    pub fn has_activity(&self) -> bool {
        self.clock.elapsed_secs() > 0 || !self.shots.is_empty() || self.stats.has_any()
    }

    pub fn start_game(&mut self, title: &str) -> Result<()> {
        let title = title.trim();
        if title.is_empty() {
            return Err(TrackerError::BlankTitle);
        }
        if self.state.is_active() {
            return Err(TrackerError::GameInProgress);
        }

        self.clear_current_game();
        self.title = title.to_string();
        self.state = SessionState::Running;
        self.clock.arm();
        info!(title = %self.title, "game started");
        Ok(())
    }

    /// Put the player back on court. A game that is already running with a
    /// live clock is left as is.
    pub fn resume(&mut self) -> Result<()> {
        match self.state {
            SessionState::Running if self.clock.is_armed() => Ok(()),
            SessionState::Benched => {
                self.state = SessionState::Running;
                self.clock.arm();
                info!(elapsed = self.clock.elapsed_secs(), "back on court");
                Ok(())
            }
            state => Err(TrackerError::InvalidTransition {
                action: "resume",
                state,
            }),
        }
    }

    pub fn bench(&mut self) -> Result<()> {
        match self.state {
            SessionState::Running => {
                self.clock.disarm();
                self.state = SessionState::Benched;
                info!(elapsed = self.clock.elapsed_secs(), "benched");
                Ok(())
            }
            state => Err(TrackerError::InvalidTransition {
                action: "bench",
                state,
            }),
        }
    }

    /// Toggle between on court and benched
    pub fn toggle_bench(&mut self) -> Result<()> {
        match self.state {
            SessionState::Running => self.bench(),
            _ => self.resume(),
        }
    }

    /// Archive the current game and get ready for the next one
    pub fn end_game(&mut self) -> Result<&CompletedGame> {
        if !self.state.is_active() {
            return Err(TrackerError::InvalidTransition {
                action: "end the game",
                state: self.state,
            });
        }
        if !self.has_activity() {
            return Err(TrackerError::NothingToSave);
        }

        self.clock.disarm();
        let title = if self.title.trim().is_empty() {
            self.archive.next_default_title()
        } else {
            std::mem::take(&mut self.title)
        };
        let completed = CompletedGame {
            title,
            stats: self.stats,
            shots: self.shots.clone(),
            duration_secs: self.clock.elapsed_secs(),
            finished_at: Local::now(),
        };

        self.clear_current_game();
        self.state = SessionState::Ended;
        info!(
            title = %completed.title,
            points = completed.stats.points,
            duration = completed.duration_secs,
            "game archived"
        );
        Ok(self.archive.push(completed))
    }

    pub fn reset_clock(&mut self) {
        self.clock.reset();
        debug!("clock reset");
    }

    /// Feed one clock tick. Returns whether it advanced the clock.
    pub fn on_tick(&mut self, generation: u64) -> bool {
        self.state == SessionState::Running && self.clock.on_tick(generation)
    }

    /// Advance the clock by one second through the live tick task, if any
    pub fn tick(&mut self) -> bool {
        match self.clock.active_generation() {
            Some(generation) => self.on_tick(generation),
            None => false,
        }
    }

    pub fn record_shot(&mut self, x: f64, y: f64, kind: ShotKind, made: bool) -> Result<()> {
        if self.state != SessionState::Running {
            return Err(TrackerError::NotOnCourt);
        }
        self.shots.push(ShotEvent { x, y, kind, made });
        self.stats.apply_shot(kind, made);
        debug!(%kind, made, x, y, "shot recorded");
        Ok(())
    }

    pub fn increment_counter(&mut self, counter: Counter) -> Result<()> {
        if !self.state.is_active() {
            return Err(TrackerError::NoActiveGame);
        }
        self.stats.increment(counter);
        debug!(%counter, "counter incremented");
        Ok(())
    }

    pub fn increment_foul(&mut self, kind: FoulKind) -> Result<()> {
        if !self.state.is_active() {
            return Err(TrackerError::NoActiveGame);
        }
        self.stats.increment_foul(kind);
        debug!(%kind, "foul recorded");
        Ok(())
    }

    fn clear_current_game(&mut self) {
        self.title.clear();
        self.stats = GameStats::default();
        self.shots.clear();
        self.clock.reset();
    }
}
