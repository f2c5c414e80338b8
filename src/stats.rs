use serde::{Deserialize, Serialize};

/// Kind of shot attempt, which decides how the box score moves
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, strum_macros::Display)]
#[serde(rename_all = "snake_case")]
pub enum ShotKind {
    #[strum(serialize = "2PT")]
    Two,
    #[strum(serialize = "3PT")]
    Three,
    #[strum(serialize = "FT")]
    FreeThrow,
}

/// A single shot attempt at a court-relative location (feet from the
/// left sideline and from the baseline)
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ShotEvent {
    pub x: f64,
    pub y: f64,
    pub kind: ShotKind,
    pub made: bool,
}

/// Plain counting stats that move by one per event
#[derive(Debug, Clone, Copy, PartialEq, Eq, strum_macros::Display)]
pub enum Counter {
    Rebounds,
    Assists,
    Steals,
    Blocks,
    Turnovers,
}

impl Counter {
    pub const ALL: [Counter; 5] = [
        Counter::Rebounds,
        Counter::Assists,
        Counter::Steals,
        Counter::Blocks,
        Counter::Turnovers,
    ];
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, strum_macros::Display)]
pub enum FoulKind {
    Shooting,
    Blocking,
    Offensive,
    Reaching,
}

impl FoulKind {
    pub const ALL: [FoulKind; 4] = [
        FoulKind::Shooting,
        FoulKind::Blocking,
        FoulKind::Offensive,
        FoulKind::Reaching,
    ];
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Fouls {
    pub shooting: u32,
    pub blocking: u32,
    pub offensive: u32,
    pub reaching: u32,
}

impl Fouls {
    pub fn get(&self, kind: FoulKind) -> u32 {
        match kind {
            FoulKind::Shooting => self.shooting,
            FoulKind::Blocking => self.blocking,
            FoulKind::Offensive => self.offensive,
            FoulKind::Reaching => self.reaching,
        }
    }

    pub fn total(&self) -> u32 {
        self.shooting + self.blocking + self.offensive + self.reaching
    }
}

/// Box score for one game. Every field only ever grows until the next game
/// starts with a fresh default.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameStats {
    pub points: u32,
    pub field_goals_made: u32,
    pub field_goals_attempted: u32,
    pub threes_made: u32,
    pub threes_attempted: u32,
    pub free_throws_made: u32,
    pub free_throws_attempted: u32,
    pub rebounds: u32,
    pub assists: u32,
    pub steals: u32,
    pub blocks: u32,
    pub turnovers: u32,
    pub fouls: Fouls,
}

impl GameStats {
    /// Apply one shot attempt to the shooting lines and points
    pub fn apply_shot(&mut self, kind: ShotKind, made: bool) {
        match kind {
            ShotKind::Two => {
                self.field_goals_attempted += 1;
                if made {
                    self.field_goals_made += 1;
                    self.points += 2;
                }
            }
            ShotKind::Three => {
                self.field_goals_attempted += 1;
                self.threes_attempted += 1;
                if made {
                    self.field_goals_made += 1;
                    self.threes_made += 1;
                    self.points += 3;
                }
            }
            ShotKind::FreeThrow => {
                self.free_throws_attempted += 1;
                if made {
                    self.free_throws_made += 1;
                    self.points += 1;
                }
            }
        }
    }

    pub fn increment(&mut self, counter: Counter) {
        let field = match counter {
            Counter::Rebounds => &mut self.rebounds,
            Counter::Assists => &mut self.assists,
            Counter::Steals => &mut self.steals,
            Counter::Blocks => &mut self.blocks,
            Counter::Turnovers => &mut self.turnovers,
        };
        *field += 1;
    }

    pub fn increment_foul(&mut self, kind: FoulKind) {
        let field = match kind {
            FoulKind::Shooting => &mut self.fouls.shooting,
            FoulKind::Blocking => &mut self.fouls.blocking,
            FoulKind::Offensive => &mut self.fouls.offensive,
            FoulKind::Reaching => &mut self.fouls.reaching,
        };
        *field += 1;
    }

    pub fn counter(&self, counter: Counter) -> u32 {
        match counter {
            Counter::Rebounds => self.rebounds,
            Counter::Assists => self.assists,
            Counter::Steals => self.steals,
            Counter::Blocks => self.blocks,
            Counter::Turnovers => self.turnovers,
        }
    }

    /// True when any field has moved off zero
    pub fn has_any(&self) -> bool {
        *self != GameStats::default()
    }

    pub fn field_goal_pct(&self) -> Option<f64> {
        percentage(self.field_goals_made, self.field_goals_attempted)
    }

    pub fn three_pct(&self) -> Option<f64> {
        percentage(self.threes_made, self.threes_attempted)
    }

    pub fn free_throw_pct(&self) -> Option<f64> {
        percentage(self.free_throws_made, self.free_throws_attempted)
    }
}

fn percentage(made: u32, attempted: u32) -> Option<f64> {
    match attempted {
        0 => None,
        n => Some(made as f64 / n as f64 * 100.0),
    }
}

/// Format an optional percentage for the box score
pub fn format_pct(pct: Option<f64>) -> String {
    pct.map_or_else(|| "-".to_string(), |p| format!("{p:.1}%"))
}
