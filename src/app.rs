use std::path::PathBuf;

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use tracing::warn;

use crate::app_dirs::AppDirs;
use crate::chart::{self, ChartSeries, StatKey};
use crate::config::Config;
use crate::court::{CourtCursor, Direction};
use crate::error::TrackerError;
use crate::export;
use crate::profile::{PlayerProfile, ProfileForm, ProfileHolder};
use crate::runtime::CourtEvent;
use crate::session::{Session, SessionState};
use crate::stats::{Counter, FoulKind, ShotKind};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AppState {
    Profile,
    Game,
    Charts,
}

impl AppState {
    fn next(self) -> Self {
        match self {
            AppState::Profile => AppState::Game,
            AppState::Game => AppState::Charts,
            AppState::Charts => AppState::Profile,
        }
    }

    fn prev(self) -> Self {
        match self {
            AppState::Profile => AppState::Charts,
            AppState::Game => AppState::Profile,
            AppState::Charts => AppState::Game,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatusKind {
    Info,
    Error,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Status {
    pub text: String,
    pub kind: StatusKind,
}

/// Whether the loop should keep going after an event
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Flow {
    Continue,
    Quit,
}

#[derive(Debug, Clone)]
pub struct AppOptions {
    pub player: Option<PlayerProfile>,
    pub chart_key: StatKey,
    pub export_dir: PathBuf,
}

impl Default for AppOptions {
    fn default() -> Self {
        Self {
            player: None,
            chart_key: StatKey::Points,
            export_dir: AppDirs::export_dir(),
        }
    }
}

#[derive(Debug)]
pub struct App {
    pub state: AppState,
    pub session: Session,
    pub profile: ProfileHolder,
    pub profile_form: ProfileForm,
    pub cursor: CourtCursor,
    pub chart_key: StatKey,
    /// Game title being typed, when the new-game prompt is open
    pub title_input: Option<String>,
    pub status: Option<Status>,
    export_dir: PathBuf,
}

impl App {
    pub fn new(session: Session, options: AppOptions) -> Self {
        let state = if options.player.is_some() {
            AppState::Game
        } else {
            AppState::Profile
        };
        let profile = ProfileHolder::new(options.player);
        Self {
            state,
            profile_form: ProfileForm::new(profile.get()),
            profile,
            session,
            cursor: CourtCursor::default(),
            chart_key: options.chart_key,
            title_input: None,
            status: None,
            export_dir: options.export_dir,
        }
    }

    /// Settings worth keeping for the next run
    pub fn to_config(&self) -> Config {
        Config {
            player: self.profile.get().cloned(),
            chart_stat: self.chart_key.path().to_string(),
        }
    }

    pub fn chart_series(&self) -> ChartSeries {
        chart::project(self.session.archive().games(), self.chart_key)
    }

    pub fn handle_event(&mut self, event: CourtEvent) -> Flow {
        match event {
            CourtEvent::Key(key) => self.handle_key(key),
            CourtEvent::ClockTick(generation) => {
                self.session.on_tick(generation);
                Flow::Continue
            }
            CourtEvent::Tick | CourtEvent::Resize => Flow::Continue,
        }
    }

    pub fn handle_key(&mut self, key: KeyEvent) -> Flow {
        if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
            return Flow::Quit;
        }

        if self.title_input.is_some() {
            self.handle_title_key(key);
            return Flow::Continue;
        }

        match key.code {
            KeyCode::Esc => return Flow::Quit,
            KeyCode::Tab => {
                self.state = self.state.next();
                return Flow::Continue;
            }
            KeyCode::BackTab => {
                self.state = self.state.prev();
                return Flow::Continue;
            }
            _ => {}
        }

        match self.state {
            AppState::Profile => self.handle_profile_key(key),
            AppState::Game => self.handle_game_key(key),
            AppState::Charts => self.handle_charts_key(key),
        }
        Flow::Continue
    }

    fn handle_title_key(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Esc => self.title_input = None,
            KeyCode::Enter => self.submit_title(),
            KeyCode::Backspace => {
                if let Some(buffer) = self.title_input.as_mut() {
                    buffer.pop();
                }
            }
            KeyCode::Char(c) => {
                if let Some(buffer) = self.title_input.as_mut() {
                    buffer.push(c);
                }
            }
            _ => {}
        }
    }

    fn submit_title(&mut self) {
        let title = self.title_input.clone().unwrap_or_default();
        match self.session.start_game(&title) {
            Ok(()) => {
                self.title_input = None;
                self.info(format!("{} tipped off", self.session.title()));
            }
            Err(e) => self.error(e),
        }
    }

    fn handle_profile_key(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Up => self.profile_form.focus_prev(),
            KeyCode::Down => self.profile_form.focus_next(),
            KeyCode::Backspace => self.profile_form.backspace(),
            KeyCode::Char(c) => self.profile_form.push(c),
            KeyCode::Enter => {
                let created = self.profile.is_created();
                match self.profile.save(&self.profile_form) {
                    Ok(p) => {
                        let msg = if created {
                            format!("Updated {}", p.name)
                        } else {
                            format!("Welcome, {}", p.name)
                        };
                        self.profile_form = ProfileForm::new(self.profile.get());
                        self.info(msg);
                        if !created {
                            self.state = AppState::Game;
                        }
                    }
                    Err(e) => self.error(e),
                }
            }
            _ => {}
        }
    }

    fn handle_game_key(&mut self, key: KeyEvent) {
        let dir = match key.code {
            KeyCode::Left => Some(Direction::Left),
            KeyCode::Right => Some(Direction::Right),
            KeyCode::Up => Some(Direction::Up),
            KeyCode::Down => Some(Direction::Down),
            _ => None,
        };
        if let Some(dir) = dir {
            let coarse = key.modifiers.contains(KeyModifiers::SHIFT);
            self.cursor.nudge(dir, coarse);
            return;
        }
        if let KeyCode::Char(c) = key.code {
            if let Err(e) = self.handle_game_char(c) {
                self.error(e);
            }
        }
    }

    fn handle_game_char(&mut self, c: char) -> Result<(), TrackerError> {
        let attempt = match c {
            't' => Some((ShotKind::Two, true)),
            'T' => Some((ShotKind::Two, false)),
            'h' => Some((ShotKind::Three, true)),
            'H' => Some((ShotKind::Three, false)),
            'f' => Some((ShotKind::FreeThrow, true)),
            'F' => Some((ShotKind::FreeThrow, false)),
            _ => None,
        };
        if let Some((kind, made)) = attempt {
            let CourtCursor { x, y } = self.cursor;
            self.session.record_shot(x, y, kind, made)?;
            self.status = None;
            return Ok(());
        }

        match c {
            'n' => {
                if self.session.state().is_active() {
                    return Err(TrackerError::GameInProgress);
                }
                self.title_input = Some(String::new());
            }
            ' ' => {
                self.session.toggle_bench()?;
                let msg = match self.session.state() {
                    SessionState::Benched => "Benched, clock stopped",
                    _ => "Back on court",
                };
                self.info(msg);
            }
            'e' => {
                let game = self.session.end_game()?;
                let msg = format!("{} saved: {} pts", game.title, game.stats.points);
                self.info(msg);
            }
            '0' => {
                self.session.reset_clock();
                self.info("Clock reset");
            }
            'r' => self.session.increment_counter(Counter::Rebounds)?,
            'a' => self.session.increment_counter(Counter::Assists)?,
            's' => self.session.increment_counter(Counter::Steals)?,
            'b' => self.session.increment_counter(Counter::Blocks)?,
            'o' => self.session.increment_counter(Counter::Turnovers)?,
            '1' => self.session.increment_foul(FoulKind::Shooting)?,
            '2' => self.session.increment_foul(FoulKind::Blocking)?,
            '3' => self.session.increment_foul(FoulKind::Offensive)?,
            '4' => self.session.increment_foul(FoulKind::Reaching)?,
            _ => {}
        }
        Ok(())
    }

    fn handle_charts_key(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Left | KeyCode::Char('h') => self.chart_key = self.chart_key.cycle(false),
            KeyCode::Right | KeyCode::Char('l') => self.chart_key = self.chart_key.cycle(true),
            KeyCode::Char('x') => self.export_archive(),
            _ => {}
        }
    }

    fn export_archive(&mut self) {
        if self.session.archive().is_empty() {
            self.info("No finished games to export");
            return;
        }
        match export::export_timestamped(
            &self.export_dir,
            self.session.archive(),
            self.profile.get(),
        ) {
            Ok(path) => self.info(format!("Exported to {}", path.display())),
            Err(e) => {
                warn!(error = %e, "export failed");
                self.error(e);
            }
        }
    }

    fn info(&mut self, text: impl Into<String>) {
        self.status = Some(Status {
            text: text.into(),
            kind: StatusKind::Info,
        });
    }

    fn error(&mut self, e: TrackerError) {
        self.status = Some(Status {
            text: e.to_string(),
            kind: StatusKind::Error,
        });
    }
}
