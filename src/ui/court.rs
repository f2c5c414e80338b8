use std::f64::consts::PI;

use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    symbols::Marker,
    text::{Line, Span},
    widgets::{
        canvas::{Canvas, Circle, Line as CourtLine, Points, Rectangle},
        Block, Borders, Paragraph, Wrap,
    },
    Frame,
};

use crate::app::App;
use crate::clock::format_clock;
use crate::court::{
    BASKET, CORNER_THREE_DEPTH_FT, CORNER_THREE_FT, COURT_LENGTH_FT, COURT_WIDTH_FT,
    FREE_THROW_LINE_FT, THREE_POINT_RADIUS_FT,
};
use crate::session::SessionState;
use crate::ui::box_score::box_score_table;

const LINE_COLOR: Color = Color::Gray;
const ARC_SAMPLES: usize = 64;

pub fn render_game(app: &App, f: &mut Frame, area: Rect) {
    let columns = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(55), Constraint::Percentage(45)])
        .split(area);

    render_court(app, f, columns[0]);

    let side = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(5), Constraint::Min(0)])
        .split(columns[1]);

    render_scoreboard(app, f, side[0]);
    f.render_widget(box_score_table(app.session.stats()), side[1]);
}

/// Points along the three-point arc above the corner lines
fn three_point_arc() -> Vec<(f64, f64)> {
    let start = ((CORNER_THREE_DEPTH_FT - BASKET.1) / THREE_POINT_RADIUS_FT).asin();
    let end = PI - start;
    (0..=ARC_SAMPLES)
        .map(|i| {
            let theta = start + (end - start) * i as f64 / ARC_SAMPLES as f64;
            (
                BASKET.0 + THREE_POINT_RADIUS_FT * theta.cos(),
                BASKET.1 + THREE_POINT_RADIUS_FT * theta.sin(),
            )
        })
        .collect()
}

fn render_court(app: &App, f: &mut Frame, area: Rect) {
    let arc = three_point_arc();
    let shots = app.session.shots();
    let cursor = app.cursor;
    let show_cursor = app.session.state() == SessionState::Running;
    let range = if cursor.is_three_point_range() {
        "3PT range"
    } else {
        "2PT range"
    };

    let canvas = Canvas::default()
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title(format!(" Court ({:.0}, {:.0}) {range} ", cursor.x, cursor.y)),
        )
        .marker(Marker::Braille)
        .x_bounds([0.0, COURT_WIDTH_FT])
        .y_bounds([0.0, COURT_LENGTH_FT])
        .paint(move |ctx| {
            ctx.draw(&Rectangle {
                x: 0.0,
                y: 0.0,
                width: COURT_WIDTH_FT,
                height: COURT_LENGTH_FT,
                color: LINE_COLOR,
            });
            ctx.draw(&Rectangle {
                x: 17.0,
                y: 0.0,
                width: 16.0,
                height: FREE_THROW_LINE_FT,
                color: LINE_COLOR,
            });
            ctx.draw(&Circle {
                x: BASKET.0,
                y: FREE_THROW_LINE_FT,
                radius: 6.0,
                color: LINE_COLOR,
            });
            ctx.draw(&Circle {
                x: BASKET.0,
                y: BASKET.1,
                radius: 0.75,
                color: Color::LightRed,
            });
            ctx.draw(&CourtLine {
                x1: 22.0,
                y1: 4.0,
                x2: 28.0,
                y2: 4.0,
                color: Color::White,
            });
            for x in [CORNER_THREE_FT, COURT_WIDTH_FT - CORNER_THREE_FT] {
                ctx.draw(&CourtLine {
                    x1: x,
                    y1: 0.0,
                    x2: x,
                    y2: CORNER_THREE_DEPTH_FT,
                    color: LINE_COLOR,
                });
            }
            ctx.draw(&Points {
                coords: &arc,
                color: LINE_COLOR,
            });

            ctx.layer();
            for shot in shots {
                let marker = if shot.made {
                    Span::styled("●", Style::default().fg(Color::Green))
                } else {
                    Span::styled("×", Style::default().fg(Color::Red))
                };
                ctx.print(shot.x, shot.y, marker);
            }
            if show_cursor {
                ctx.print(
                    cursor.x,
                    cursor.y,
                    Span::styled(
                        "+",
                        Style::default()
                            .fg(Color::Yellow)
                            .add_modifier(Modifier::BOLD),
                    ),
                );
            }
        });

    f.render_widget(canvas, area);
}

fn render_scoreboard(app: &App, f: &mut Frame, area: Rect) {
    let session = &app.session;
    let bold = Style::default().add_modifier(Modifier::BOLD);

    let lines = if let Some(title) = &app.title_input {
        vec![
            Line::from(Span::styled("New game title:", bold)),
            Line::from(Span::styled(
                format!("{title}▏"),
                Style::default().fg(Color::Yellow),
            )),
        ]
    } else {
        let (state_label, state_color) = match session.state() {
            SessionState::NoGame => ("NO GAME", Color::DarkGray),
            SessionState::Running => ("ON COURT", Color::Green),
            SessionState::Benched => ("BENCHED", Color::Yellow),
            SessionState::Ended => ("FINAL", Color::Magenta),
        };
        let title = if session.state().is_active() {
            session.title().to_string()
        } else {
            session
                .archive()
                .last()
                .map(|g| format!("last: {} ({} pts)", g.title, g.stats.points))
                .unwrap_or_else(|| "press n to start a game".to_string())
        };
        vec![
            Line::from(vec![
                Span::styled(
                    format_clock(session.elapsed_secs()),
                    bold.fg(Color::White),
                ),
                Span::raw("  "),
                Span::styled(state_label, bold.fg(state_color)),
            ]),
            Line::from(Span::raw(title)),
            Line::from(Span::styled(
                format!("{} games archived", session.archive().len()),
                Style::default().add_modifier(Modifier::DIM),
            )),
        ]
    };

    let widget = Paragraph::new(lines)
        .block(Block::default().borders(Borders::ALL).title(" Clock "))
        .alignment(Alignment::Center)
        .wrap(Wrap { trim: true });
    f.render_widget(widget, area);
}
