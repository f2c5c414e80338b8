use ratatui::{layout::Rect, Frame};

use crate::app::{App, AppState};

/// A UI Screen boundary: responsible for rendering its part of the frame
pub trait Screen {
    fn render(&self, app: &App, f: &mut Frame, area: Rect);
}

/// Player profile form
pub struct ProfileScreen;

impl Screen for ProfileScreen {
    fn render(&self, app: &App, f: &mut Frame, area: Rect) {
        crate::ui::profile::render_profile(app, f, area);
    }
}

/// Live game: court, clock, box score
pub struct GameScreen;

impl Screen for GameScreen {
    fn render(&self, app: &App, f: &mut Frame, area: Rect) {
        crate::ui::court::render_game(app, f, area);
    }
}

/// Archive trends
pub struct ChartsScreen;

impl Screen for ChartsScreen {
    fn render(&self, app: &App, f: &mut Frame, area: Rect) {
        crate::ui::charting::render_charts(app, f, area);
    }
}

/// Helper to construct the appropriate screen for the current state
pub fn current_screen(state: &AppState) -> Box<dyn Screen> {
    match state {
        AppState::Profile => Box::new(ProfileScreen),
        AppState::Game => Box::new(GameScreen),
        AppState::Charts => Box::new(ChartsScreen),
    }
}
