//! Projection of the game archive into chart series

use std::fmt;
use std::str::FromStr;

use crate::archive::CompletedGame;
use crate::stats::FoulKind;

/// A stat that can be charted across games
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatKey {
    Points,
    FieldGoalsMade,
    FieldGoalsAttempted,
    ThreesMade,
    ThreesAttempted,
    FreeThrowsMade,
    FreeThrowsAttempted,
    Rebounds,
    Assists,
    Steals,
    Blocks,
    Turnovers,
    Foul(FoulKind),
    TimePlayed,
}

impl StatKey {
    /// Selection order on the charts screen
    pub const ALL: [StatKey; 17] = [
        StatKey::Points,
        StatKey::FieldGoalsMade,
        StatKey::FieldGoalsAttempted,
        StatKey::ThreesMade,
        StatKey::ThreesAttempted,
        StatKey::FreeThrowsMade,
        StatKey::FreeThrowsAttempted,
        StatKey::Rebounds,
        StatKey::Assists,
        StatKey::Steals,
        StatKey::Blocks,
        StatKey::Turnovers,
        StatKey::Foul(FoulKind::Shooting),
        StatKey::Foul(FoulKind::Blocking),
        StatKey::Foul(FoulKind::Offensive),
        StatKey::Foul(FoulKind::Reaching),
        StatKey::TimePlayed,
    ];

    /// Canonical key path, e.g. `fieldGoalsMade` or `fouls.shooting`
    pub fn path(&self) -> &'static str {
        match self {
            StatKey::Points => "points",
            StatKey::FieldGoalsMade => "fieldGoalsMade",
            StatKey::FieldGoalsAttempted => "fieldGoalsAttempted",
            StatKey::ThreesMade => "threesMade",
            StatKey::ThreesAttempted => "threesAttempted",
            StatKey::FreeThrowsMade => "freeThrowsMade",
            StatKey::FreeThrowsAttempted => "freeThrowsAttempted",
            StatKey::Rebounds => "rebounds",
            StatKey::Assists => "assists",
            StatKey::Steals => "steals",
            StatKey::Blocks => "blocks",
            StatKey::Turnovers => "turnovers",
            StatKey::Foul(FoulKind::Shooting) => "fouls.shooting",
            StatKey::Foul(FoulKind::Blocking) => "fouls.blocking",
            StatKey::Foul(FoulKind::Offensive) => "fouls.offensive",
            StatKey::Foul(FoulKind::Reaching) => "fouls.reaching",
            StatKey::TimePlayed => "timePlayed",
        }
    }

    /// Human label for axis titles
    pub fn label(&self) -> String {
        match self {
            StatKey::Points => "Points".into(),
            StatKey::FieldGoalsMade => "FG Made".into(),
            StatKey::FieldGoalsAttempted => "FG Attempted".into(),
            StatKey::ThreesMade => "3PT Made".into(),
            StatKey::ThreesAttempted => "3PT Attempted".into(),
            StatKey::FreeThrowsMade => "FT Made".into(),
            StatKey::FreeThrowsAttempted => "FT Attempted".into(),
            StatKey::Rebounds => "Rebounds".into(),
            StatKey::Assists => "Assists".into(),
            StatKey::Steals => "Steals".into(),
            StatKey::Blocks => "Blocks".into(),
            StatKey::Turnovers => "Turnovers".into(),
            StatKey::Foul(kind) => format!("{kind} Fouls"),
            StatKey::TimePlayed => "Time Played (s)".into(),
        }
    }

    pub fn extract(&self, game: &CompletedGame) -> u64 {
        let s = &game.stats;
        let v = match self {
            StatKey::Points => s.points,
            StatKey::FieldGoalsMade => s.field_goals_made,
            StatKey::FieldGoalsAttempted => s.field_goals_attempted,
            StatKey::ThreesMade => s.threes_made,
            StatKey::ThreesAttempted => s.threes_attempted,
            StatKey::FreeThrowsMade => s.free_throws_made,
            StatKey::FreeThrowsAttempted => s.free_throws_attempted,
            StatKey::Rebounds => s.rebounds,
            StatKey::Assists => s.assists,
            StatKey::Steals => s.steals,
            StatKey::Blocks => s.blocks,
            StatKey::Turnovers => s.turnovers,
            StatKey::Foul(kind) => s.fouls.get(*kind),
            StatKey::TimePlayed => return game.duration_secs,
        };
        v as u64
    }

    /// Step through `ALL`, wrapping at either end
    pub fn cycle(&self, forward: bool) -> StatKey {
        let len = Self::ALL.len();
        let idx = Self::ALL.iter().position(|k| k == self).unwrap_or(0);
        let next = if forward {
            (idx + 1) % len
        } else {
            (idx + len - 1) % len
        };
        Self::ALL[next]
    }
}

impl fmt::Display for StatKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.path())
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnknownStatKey(pub String);

impl fmt::Display for UnknownStatKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "unknown stat key '{}'", self.0)
    }
}

impl std::error::Error for UnknownStatKey {}

impl FromStr for StatKey {
    type Err = UnknownStatKey;

    /// Accepts the canonical camelCase paths and their snake_case spellings
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized = s.trim().replace('_', "").to_ascii_lowercase();
        StatKey::ALL
            .iter()
            .find(|k| k.path().to_ascii_lowercase() == normalized)
            .copied()
            .ok_or_else(|| UnknownStatKey(s.to_string()))
    }
}

/// Parallel label/value sequences, one entry per archived game
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ChartSeries {
    pub labels: Vec<String>,
    pub values: Vec<u64>,
}

impl ChartSeries {
    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    pub fn max(&self) -> u64 {
        self.values.iter().copied().max().unwrap_or(0)
    }

    pub fn summary(&self) -> SeriesSummary {
        let total: u64 = self.values.iter().sum();
        let average = match self.values.len() {
            0 => None,
            n => Some(total as f64 / n as f64),
        };
        let best = self
            .values
            .iter()
            .zip(&self.labels)
            .rev()
            .max_by_key(|(v, _)| **v)
            .map(|(v, label)| (label.clone(), *v));
        SeriesSummary {
            total,
            average,
            best,
        }
    }

    /// `(x, y)` points for a line chart, x counting games from 1
    pub fn points(&self) -> Vec<(f64, f64)> {
        self.values
            .iter()
            .enumerate()
            .map(|(i, v)| ((i + 1) as f64, *v as f64))
            .collect()
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct SeriesSummary {
    pub total: u64,
    pub average: Option<f64>,
    /// Title and value of the highest game; the earliest wins ties
    pub best: Option<(String, u64)>,
}

pub fn project(games: &[CompletedGame], key: StatKey) -> ChartSeries {
    ChartSeries {
        labels: games.iter().map(|g| g.title.clone()).collect(),
        values: games.iter().map(|g| key.extract(g)).collect(),
    }
}

/// Project by key path. Paths that don't name a stat yield zero for every game.
pub fn project_path(games: &[CompletedGame], path: &str) -> ChartSeries {
    match path.parse::<StatKey>() {
        Ok(key) => project(games, key),
        Err(_) => ChartSeries {
            labels: games.iter().map(|g| g.title.clone()).collect(),
            values: vec![0; games.len()],
        },
    }
}
