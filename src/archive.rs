use chrono::{DateTime, Local};
use serde::{Deserialize, Serialize};

use crate::stats::{GameStats, ShotEvent};

/// A finished game, frozen at the moment it was ended
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CompletedGame {
    pub title: String,
    pub stats: GameStats,
    pub shots: Vec<ShotEvent>,
    pub duration_secs: u64,
    pub finished_at: DateTime<Local>,
}

/// Completed games in the order they were finished. Entries are never
/// removed or edited once pushed.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Archive {
    games: Vec<CompletedGame>,
}

impl Archive {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, game: CompletedGame) -> &CompletedGame {
        self.games.push(game);
        &self.games[self.games.len() - 1]
    }

    pub fn games(&self) -> &[CompletedGame] {
        &self.games
    }

    pub fn len(&self) -> usize {
        self.games.len()
    }

    pub fn is_empty(&self) -> bool {
        self.games.is_empty()
    }

    pub fn last(&self) -> Option<&CompletedGame> {
        self.games.last()
    }

    /// Title for the next game when none was given
    pub fn next_default_title(&self) -> String {
        format!("Game {}", self.games.len() + 1)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn game(title: &str) -> CompletedGame {
        CompletedGame {
            title: title.to_string(),
            stats: GameStats::default(),
            shots: vec![],
            duration_secs: 10,
            finished_at: Local::now(),
        }
    }

    #[test]
    fn test_push_keeps_completion_order() {
        let mut archive = Archive::new();
        assert!(archive.is_empty());

        archive.push(game("opener"));
        let last = archive.push(game("rematch"));
        assert_eq!(last.title, "rematch");

        let titles: Vec<&str> = archive.games().iter().map(|g| g.title.as_str()).collect();
        assert_eq!(titles, vec!["opener", "rematch"]);
        assert_eq!(archive.len(), 2);
    }

    #[test]
    fn test_next_default_title() {
        let mut archive = Archive::new();
        assert_eq!(archive.next_default_title(), "Game 1");
        archive.push(game("x"));
        assert_eq!(archive.next_default_title(), "Game 2");
    }
}
