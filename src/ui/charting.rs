use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    symbols::Marker,
    text::Span,
    widgets::{Axis, BarChart, Block, Borders, Chart, Dataset, GraphType, Paragraph},
    Frame,
};
use unicode_width::UnicodeWidthChar;

use crate::app::App;
use crate::chart::ChartSeries;

const BAR_WIDTH: u16 = 7;
const BAR_GAP: u16 = 1;

/// Compute X (game index) and Y (value) upper bounds for the line chart
pub fn compute_chart_params(series: &ChartSeries) -> (f64, f64) {
    let games = (series.len() as f64).max(1.0);
    let highest = (series.max() as f64).max(1.0);
    (games, highest)
}

/// Format a simple numeric label consistently
pub fn format_label(val: f64) -> String {
    if (val - val.round()).abs() < f64::EPSILON {
        format!("{}", val.round())
    } else {
        format!("{val:.2}")
    }
}

/// Cut `label` to at most `max` terminal columns, marking the cut with `…`
pub fn truncate_label(label: &str, max: usize) -> String {
    let mut width = 0;
    let mut out = String::new();
    let total: usize = label.chars().filter_map(|c| c.width()).sum();
    if total <= max {
        return label.to_string();
    }
    for c in label.chars() {
        let w = c.width().unwrap_or(0);
        if width + w + 1 > max {
            break;
        }
        width += w;
        out.push(c);
    }
    out.push('…');
    out
}

pub fn render_charts(app: &App, f: &mut Frame, area: Rect) {
    let series = app.chart_series();
    let key = app.chart_key;

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1),
            Constraint::Percentage(50),
            Constraint::Min(0),
        ])
        .split(area);

    let summary = series.summary();
    let summary_text = match (&summary.best, summary.average) {
        (Some((title, best)), Some(avg)) => format!(
            "{}  ·  total {}  ·  avg {:.1}  ·  best {} ({})",
            key.label(),
            summary.total,
            avg,
            best,
            title
        ),
        _ => format!("{}  ·  no finished games yet", key.label()),
    };
    f.render_widget(
        Paragraph::new(Span::styled(
            summary_text,
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        ))
        .alignment(Alignment::Center),
        chunks[0],
    );

    render_line_chart(&series, &key.label(), f, chunks[1]);
    render_bar_chart(&series, f, chunks[2]);
}

fn render_line_chart(series: &ChartSeries, y_title: &str, f: &mut Frame, area: Rect) {
    let bold_style = Style::default().add_modifier(Modifier::BOLD);
    let (games, highest) = compute_chart_params(series);
    let points = series.points();

    let datasets = vec![Dataset::default()
        .marker(Marker::Braille)
        .style(Style::default().fg(Color::Magenta))
        .graph_type(GraphType::Line)
        .data(&points)];

    let chart = Chart::new(datasets)
        .block(Block::default().borders(Borders::ALL).title(" Trend "))
        .x_axis(
            Axis::default()
                .title("game")
                .bounds([1.0, games])
                .labels(vec![
                    Span::styled("1", bold_style),
                    Span::styled(format_label(games), bold_style),
                ]),
        )
        .y_axis(
            Axis::default()
                .title(y_title.to_string())
                .bounds([0.0, highest])
                .labels(vec![
                    Span::styled("0", bold_style),
                    Span::styled(format_label(highest), bold_style),
                ]),
        );

    f.render_widget(chart, area);
}

fn render_bar_chart(series: &ChartSeries, f: &mut Frame, area: Rect) {
    let labels: Vec<String> = series
        .labels
        .iter()
        .map(|l| truncate_label(l, BAR_WIDTH as usize))
        .collect();
    let data: Vec<(&str, u64)> = labels
        .iter()
        .map(String::as_str)
        .zip(series.values.iter().copied())
        .collect();

    let chart = BarChart::default()
        .block(Block::default().borders(Borders::ALL).title(" Per Game "))
        .data(data.as_slice())
        .bar_width(BAR_WIDTH)
        .bar_gap(BAR_GAP)
        .bar_style(Style::default().fg(Color::Magenta))
        .value_style(
            Style::default()
                .fg(Color::Black)
                .bg(Color::Magenta)
                .add_modifier(Modifier::BOLD),
        );

    f.render_widget(chart, area);
}
