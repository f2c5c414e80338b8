use ratatui::{
    layout::{Constraint, Rect},
    style::{Color, Modifier, Style},
    widgets::{Block, Borders, Cell, Row, Table},
    Frame,
};

use crate::app::App;
use crate::profile::ProfileField;

const LABEL_WIDTH: u16 = 10;
const MIN_VALUE_WIDTH: u16 = 24;

pub fn render_profile(app: &App, f: &mut Frame, area: Rect) {
    let form = &app.profile_form;
    let rows: Vec<Row> = ProfileField::ALL
        .iter()
        .map(|field| {
            let focused = *field == form.focus();
            let value = if focused {
                format!("{}▏", form.value(*field))
            } else {
                form.value(*field).to_string()
            };
            let style = if focused {
                Style::default()
                    .fg(Color::Yellow)
                    .add_modifier(Modifier::BOLD)
            } else {
                Style::default()
            };
            Row::new(vec![
                Cell::from(field.to_string()),
                Cell::from(value).style(style),
            ])
        })
        .collect();

    let value_width = (form.max_width() as u16 + 2).max(MIN_VALUE_WIDTH);
    let title = if app.profile.is_created() {
        "Edit Player"
    } else {
        "Create Player"
    };
    let table = Table::new(
        rows,
        [Constraint::Length(LABEL_WIDTH), Constraint::Length(value_width)],
    )
    .block(Block::default().borders(Borders::ALL).title(title));

    f.render_widget(table, area);
}
