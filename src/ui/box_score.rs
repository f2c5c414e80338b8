use itertools::Itertools;
use ratatui::{
    layout::Constraint,
    style::{Color, Modifier, Style},
    widgets::{Block, Borders, Cell, Row, Table},
};

use crate::stats::{format_pct, Counter, FoulKind, GameStats};

/// Label/value pairs in box score order
pub fn box_score_lines(stats: &GameStats) -> Vec<(String, String)> {
    let mut lines = vec![
        ("PTS".to_string(), stats.points.to_string()),
        (
            "FG".to_string(),
            format!(
                "{}/{}  {}",
                stats.field_goals_made,
                stats.field_goals_attempted,
                format_pct(stats.field_goal_pct())
            ),
        ),
        (
            "3PT".to_string(),
            format!(
                "{}/{}  {}",
                stats.threes_made,
                stats.threes_attempted,
                format_pct(stats.three_pct())
            ),
        ),
        (
            "FT".to_string(),
            format!(
                "{}/{}  {}",
                stats.free_throws_made,
                stats.free_throws_attempted,
                format_pct(stats.free_throw_pct())
            ),
        ),
    ];
    lines.extend(
        Counter::ALL
            .iter()
            .map(|c| (c.to_string(), stats.counter(*c).to_string())),
    );
    lines.push((
        "Fouls".to_string(),
        FoulKind::ALL
            .iter()
            .map(|k| format!("{}:{}", &k.to_string()[..1], stats.fouls.get(*k)))
            .join(" "),
    ));
    lines
}

pub fn box_score_table(stats: &GameStats) -> Table<'static> {
    let rows: Vec<Row> = box_score_lines(stats)
        .into_iter()
        .enumerate()
        .map(|(i, (label, value))| {
            let style = if i == 0 {
                Style::default()
                    .fg(Color::Yellow)
                    .add_modifier(Modifier::BOLD)
            } else {
                Style::default()
            };
            Row::new(vec![Cell::from(label), Cell::from(value)]).style(style)
        })
        .collect();

    Table::new(rows, [Constraint::Length(10), Constraint::Min(10)])
        .block(Block::default().borders(Borders::ALL).title(" Box Score "))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::stats::ShotKind;

    #[test]
    fn test_box_score_lines() {
        let mut stats = GameStats::default();
        stats.apply_shot(ShotKind::Three, true);
        stats.apply_shot(ShotKind::Two, false);
        stats.increment(Counter::Steals);
        stats.increment_foul(FoulKind::Offensive);

        let lines = box_score_lines(&stats);
        assert_eq!(lines[0], ("PTS".to_string(), "3".to_string()));
        assert_eq!(lines[1].1, "1/2  50.0%");
        assert_eq!(lines[2].1, "1/1  100.0%");
        assert_eq!(lines[3].1, "0/0  -");
        assert!(lines.contains(&("Steals".to_string(), "1".to_string())));
        assert_eq!(lines.last().unwrap().1, "S:0 B:0 O:1 R:0");
    }
}
