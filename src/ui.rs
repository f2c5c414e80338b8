pub mod box_score;
pub mod charting;
pub mod court;
pub mod profile;
pub mod screen;

use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Tabs},
    Frame,
};

use crate::app::{App, AppState, StatusKind};
use crate::session::SessionState;

const HORIZONTAL_MARGIN: u16 = 1;

/// Draw the whole app: screen tabs, the active screen, then status and key legend
pub fn draw(app: &App, f: &mut Frame) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .horizontal_margin(HORIZONTAL_MARGIN)
        .constraints([
            Constraint::Length(3), // tabs
            Constraint::Min(8),    // screen
            Constraint::Length(1), // status
            Constraint::Length(1), // legend
        ])
        .split(f.area());

    render_tabs(app, f, chunks[0]);
    screen::current_screen(&app.state).render(app, f, chunks[1]);
    render_status(app, f, chunks[2]);

    let legend = Paragraph::new(Span::styled(
        legend_text(app),
        Style::default().add_modifier(Modifier::ITALIC),
    ))
    .alignment(Alignment::Center);
    f.render_widget(legend, chunks[3]);
}

fn render_tabs(app: &App, f: &mut Frame, area: Rect) {
    let selected = match app.state {
        AppState::Profile => 0,
        AppState::Game => 1,
        AppState::Charts => 2,
    };
    let player = app
        .profile
        .get()
        .map(|p| p.name.clone())
        .unwrap_or_else(|| "no player".to_string());

    let tabs = Tabs::new(vec!["Profile", "Game", "Charts"])
        .select(selected)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title(format!(" courtside · {player} ")),
        )
        .highlight_style(
            Style::default()
                .fg(Color::Yellow)
                .add_modifier(Modifier::BOLD),
        );
    f.render_widget(tabs, area);
}

fn render_status(app: &App, f: &mut Frame, area: Rect) {
    let Some(status) = &app.status else {
        return;
    };
    let style = match status.kind {
        StatusKind::Info => Style::default().fg(Color::Cyan),
        StatusKind::Error => Style::default().fg(Color::Red).add_modifier(Modifier::BOLD),
    };
    let widget = Paragraph::new(Line::from(Span::styled(status.text.clone(), style)))
        .alignment(Alignment::Center);
    f.render_widget(widget, area);
}

/// Key help for whatever currently has input focus
pub fn legend_text(app: &App) -> String {
    if app.title_input.is_some() {
        return "type a title  (enter) start  (esc) cancel".to_string();
    }
    match (app.state, app.session.state()) {
        (AppState::Profile, _) => {
            "type to edit  (↑/↓) field  (enter) save  (tab) next screen  (esc) quit"
        }
        (AppState::Game, SessionState::Running) => {
            "(↑↓←→) aim  (t/T) 2pt  (h/H) 3pt  (f/F) ft  (r)eb (a)st (s)tl (b)lk (o) tov  (1-4) fouls  (space) bench  (e)nd  (0) clock  (esc) quit"
        }
        (AppState::Game, SessionState::Benched) => {
            "(r)eb (a)st (s)tl (b)lk (o) tov  (1-4) fouls  (space) resume  (e)nd  (0) clock  (esc) quit"
        }
        (AppState::Game, _) => "(n)ew game  (tab) next screen  (esc) quit",
        (AppState::Charts, _) => "(←/→) stat  (x) export  (tab) next screen  (esc) quit",
    }
    .to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::AppOptions;
    use crate::profile::PlayerProfile;
    use crate::session::Session;
    use crate::stats::ShotKind;
    use ratatui::{backend::TestBackend, Terminal};

    fn buffer_text(terminal: &Terminal<TestBackend>) -> String {
        let buffer = terminal.backend().buffer();
        buffer
            .content
            .iter()
            .map(|cell| cell.symbol())
            .collect::<String>()
    }

    fn app_with_games() -> App {
        let mut session = Session::default();
        for (title, points) in [("Opener", 3), ("Rematch", 1)] {
            session.start_game(title).unwrap();
            for _ in 0..points {
                session.record_shot(25.0, 19.0, ShotKind::FreeThrow, true).unwrap();
            }
            session.end_game().unwrap();
        }
        App::new(
            session,
            AppOptions {
                player: Some(PlayerProfile {
                    name: "Quinn".into(),
                    ..PlayerProfile::default()
                }),
                ..AppOptions::default()
            },
        )
    }

    #[test]
    fn test_draw_every_screen() {
        let mut app = app_with_games();
        for state in [AppState::Profile, AppState::Game, AppState::Charts] {
            app.state = state;
            let mut terminal = Terminal::new(TestBackend::new(120, 40)).unwrap();
            terminal.draw(|f| draw(&app, f)).unwrap();
            assert!(buffer_text(&terminal).contains("Quinn"));
        }
    }

    #[test]
    fn test_draw_small_terminal_does_not_panic() {
        let mut app = app_with_games();
        for state in [AppState::Profile, AppState::Game, AppState::Charts] {
            app.state = state;
            let mut terminal = Terminal::new(TestBackend::new(20, 10)).unwrap();
            terminal.draw(|f| draw(&app, f)).unwrap();
        }
    }

    #[test]
    fn test_status_line_is_rendered() {
        let mut app = app_with_games();
        app.session.start_game("Live").unwrap();
        app.session.end_game().unwrap_err();
        app.status = Some(crate::app::Status {
            text: "nothing to save".into(),
            kind: StatusKind::Error,
        });
        let mut terminal = Terminal::new(TestBackend::new(120, 40)).unwrap();
        terminal.draw(|f| draw(&app, f)).unwrap();
        assert!(buffer_text(&terminal).contains("nothing to save"));
    }

    #[test]
    fn test_legend_follows_focus() {
        let mut app = app_with_games();
        assert!(legend_text(&app).contains("(n)ew game"));
        assert!(!legend_text(&app).contains("aim"));
        app.session.start_game("Live").unwrap();
        assert!(legend_text(&app).contains("(space) bench"));
        assert!(legend_text(&app).contains("(↑↓←→) aim"));
        app.title_input = Some(String::new());
        assert!(legend_text(&app).contains("(enter) start"));
    }

    #[test]
    fn test_scoreboard_shows_last_archived_game() {
        let mut app = app_with_games();
        app.state = AppState::Game;
        let mut terminal = Terminal::new(TestBackend::new(120, 40)).unwrap();
        terminal.draw(|f| draw(&app, f)).unwrap();
        assert!(buffer_text(&terminal).contains("last: Rematch (1 pts)"));
    }

    #[test]
    fn test_benched_legend_offers_no_shots() {
        let mut app = app_with_games();
        app.state = AppState::Game;
        app.session.start_game("Live").unwrap();
        app.session.bench().unwrap();

        let legend = legend_text(&app);
        assert!(!legend.contains("2pt"));
        assert!(!legend.contains("3pt"));
        assert!(!legend.contains("aim"));
        assert!(legend.contains("(space) resume"));
        assert!(legend.contains("(1-4) fouls"));
    }
}
