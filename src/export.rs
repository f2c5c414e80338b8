use std::fs::{self, File};
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};

use chrono::Local;
use serde::Serialize;
use tracing::info;

use crate::archive::{Archive, CompletedGame};
use crate::error::Result;
use crate::profile::PlayerProfile;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExportFormat {
    Json,
    Csv,
}

impl ExportFormat {
    /// `.csv` files get CSV, everything else JSON
    pub fn from_path(path: &Path) -> Self {
        match path.extension().and_then(|e| e.to_str()) {
            Some(ext) if ext.eq_ignore_ascii_case("csv") => ExportFormat::Csv,
            _ => ExportFormat::Json,
        }
    }
}

#[derive(Serialize)]
struct JsonExport<'a> {
    player: Option<&'a PlayerProfile>,
    games: &'a [CompletedGame],
}

const CSV_HEADER: [&str; 21] = [
    "title",
    "finished_at",
    "duration_secs",
    "points",
    "fgm",
    "fga",
    "three_pm",
    "three_pa",
    "ftm",
    "fta",
    "rebounds",
    "assists",
    "steals",
    "blocks",
    "turnovers",
    "fouls_shooting",
    "fouls_blocking",
    "fouls_offensive",
    "fouls_reaching",
    "fouls_total",
    "shots_recorded",
];

/// One flattened line per game, in `CSV_HEADER` order
#[derive(Debug, Serialize, PartialEq)]
struct CsvRow<'a> {
    title: &'a str,
    finished_at: String,
    duration_secs: u64,
    points: u32,
    fgm: u32,
    fga: u32,
    three_pm: u32,
    three_pa: u32,
    ftm: u32,
    fta: u32,
    rebounds: u32,
    assists: u32,
    steals: u32,
    blocks: u32,
    turnovers: u32,
    fouls_shooting: u32,
    fouls_blocking: u32,
    fouls_offensive: u32,
    fouls_reaching: u32,
    fouls_total: u32,
    shots_recorded: usize,
}

impl<'a> From<&'a CompletedGame> for CsvRow<'a> {
    fn from(g: &'a CompletedGame) -> Self {
        let s = &g.stats;
        Self {
            title: &g.title,
            finished_at: g.finished_at.to_rfc3339(),
            duration_secs: g.duration_secs,
            points: s.points,
            fgm: s.field_goals_made,
            fga: s.field_goals_attempted,
            three_pm: s.threes_made,
            three_pa: s.threes_attempted,
            ftm: s.free_throws_made,
            fta: s.free_throws_attempted,
            rebounds: s.rebounds,
            assists: s.assists,
            steals: s.steals,
            blocks: s.blocks,
            turnovers: s.turnovers,
            fouls_shooting: s.fouls.shooting,
            fouls_blocking: s.fouls.blocking,
            fouls_offensive: s.fouls.offensive,
            fouls_reaching: s.fouls.reaching,
            fouls_total: s.fouls.total(),
            shots_recorded: g.shots.len(),
        }
    }
}

pub fn write_json<W: Write>(
    writer: W,
    archive: &Archive,
    player: Option<&PlayerProfile>,
) -> Result<()> {
    let doc = JsonExport {
        player,
        games: archive.games(),
    };
    serde_json::to_writer_pretty(writer, &doc)?;
    Ok(())
}

/// The header row is written even for an empty archive
pub fn write_csv<W: Write>(writer: W, archive: &Archive) -> Result<()> {
    let mut wtr = csv::WriterBuilder::new()
        .has_headers(false)
        .from_writer(writer);
    wtr.write_record(CSV_HEADER)?;
    for game in archive.games() {
        wtr.serialize(CsvRow::from(game))?;
    }
    wtr.flush()?;
    Ok(())
}

/// Write the archive to `path`, picking the format from its extension
pub fn export_to_path(
    path: &Path,
    archive: &Archive,
    player: Option<&PlayerProfile>,
) -> Result<()> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent)?;
    }
    let mut file = BufWriter::new(File::create(path)?);
    match ExportFormat::from_path(path) {
        ExportFormat::Json => write_json(&mut file, archive, player)?,
        ExportFormat::Csv => write_csv(&mut file, archive)?,
    }
    file.flush()?;
    info!(path = %path.display(), games = archive.len(), "archive exported");
    Ok(())
}

/// Timestamped JSON export into `dir`; returns the file written
pub fn export_timestamped(
    dir: &Path,
    archive: &Archive,
    player: Option<&PlayerProfile>,
) -> Result<PathBuf> {
    let name = format!("games-{}.json", Local::now().format("%Y%m%d-%H%M%S"));
    let path = dir.join(name);
    export_to_path(&path, archive, player)?;
    Ok(path)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::stats::{GameStats, ShotEvent, ShotKind};

    fn archive() -> Archive {
        let mut stats = GameStats::default();
        stats.apply_shot(ShotKind::Three, true);
        stats.fouls.reaching = 2;
        let mut archive = Archive::new();
        archive.push(CompletedGame {
            title: "Opener, home".into(),
            stats,
            shots: vec![ShotEvent {
                x: 3.0,
                y: 4.5,
                kind: ShotKind::Three,
                made: true,
            }],
            duration_secs: 95,
            finished_at: Local::now(),
        });
        archive
    }

    #[test]
    fn test_format_from_path() {
        assert_eq!(ExportFormat::from_path(Path::new("a.csv")), ExportFormat::Csv);
        assert_eq!(ExportFormat::from_path(Path::new("a.CSV")), ExportFormat::Csv);
        assert_eq!(ExportFormat::from_path(Path::new("a.json")), ExportFormat::Json);
        assert_eq!(ExportFormat::from_path(Path::new("a")), ExportFormat::Json);
    }

    #[test]
    fn test_csv_has_header_and_one_row_per_game() {
        let mut buf = Vec::new();
        write_csv(&mut buf, &archive()).unwrap();
        let text = String::from_utf8(buf).unwrap();
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines.len(), 2);
        assert!(lines[0].starts_with("title,finished_at,duration_secs,points,"));
        assert!(lines[1].starts_with("\"Opener, home\","));
        assert!(lines[1].ends_with(",0,0,0,2,2,1"));
    }

    #[test]
    fn test_csv_of_empty_archive_is_just_the_header() {
        let mut buf = Vec::new();
        write_csv(&mut buf, &Archive::new()).unwrap();
        let text = String::from_utf8(buf).unwrap();
        assert_eq!(text.lines().count(), 1);
        assert_eq!(text.trim_end(), CSV_HEADER.join(","));
    }

    #[test]
    fn test_export_to_path_writes_both_formats() {
        let dir = tempfile::tempdir().unwrap();
        let games = archive();

        let csv_path = dir.path().join("nested").join("games.csv");
        export_to_path(&csv_path, &games, None).unwrap();
        let text = fs::read_to_string(&csv_path).unwrap();
        assert!(text.starts_with("title,"));
        assert!(text.contains("fouls_total"));
        assert_eq!(text.lines().count(), 2);

        let json_path = dir.path().join("games.json");
        export_to_path(&json_path, &games, None).unwrap();
        let value: serde_json::Value =
            serde_json::from_slice(&fs::read(&json_path).unwrap()).unwrap();
        assert_eq!(value["games"][0]["title"], "Opener, home");
        assert!(value["player"].is_null());
    }

    #[test]
    fn test_json_nests_stats_and_shots() {
        let mut buf = Vec::new();
        let player = PlayerProfile {
            name: "Kai".into(),
            ..PlayerProfile::default()
        };
        write_json(&mut buf, &archive(), Some(&player)).unwrap();
        let value: serde_json::Value = serde_json::from_slice(&buf).unwrap();
        assert_eq!(value["player"]["name"], "Kai");
        assert_eq!(value["games"][0]["stats"]["points"], 3);
        assert_eq!(value["games"][0]["stats"]["fouls"]["reaching"], 2);
        assert_eq!(value["games"][0]["shots"][0]["kind"], "three");
        assert_eq!(value["games"][0]["duration_secs"], 95);
    }

    #[test]
    fn test_json_reads_back_into_games() {
        let original = archive();
        let mut buf = Vec::new();
        write_json(&mut buf, &original, None).unwrap();
        let value: serde_json::Value = serde_json::from_slice(&buf).unwrap();
        let games: Vec<CompletedGame> = serde_json::from_value(value["games"].clone()).unwrap();
        assert_eq!(games, original.games());
    }

    #[test]
    fn test_export_timestamped_creates_dir() {
        let dir = tempfile::tempdir().unwrap();
        let target = dir.path().join("exports");
        let path = export_timestamped(&target, &archive(), None).unwrap();
        assert!(path.exists());
        assert_eq!(path.extension().unwrap(), "json");
    }
}
