use assert_matches::assert_matches;
use courtside::chart::{project, project_path, StatKey};
use courtside::session::{Session, SessionState};
use courtside::stats::{Counter, FoulKind, GameStats, ShotKind};
use courtside::TrackerError;

/// End-to-end flows across several games: state machine, archive, and chart projection

fn play(session: &mut Session, title: &str, seconds: u32, shooting_fouls: u32) {
    session.start_game(title).unwrap();
    for _ in 0..seconds {
        session.tick();
    }
    for _ in 0..shooting_fouls {
        session.increment_foul(FoulKind::Shooting).unwrap();
    }
    session.record_shot(25.0, 10.0, ShotKind::Two, true).unwrap();
    session.end_game().unwrap();
}

#[test]
fn archive_feeds_chart_projection_in_completion_order() {
    let mut session = Session::default();
    play(&mut session, "Game 1", 30, 2);
    play(&mut session, "Game 2", 12, 0);

    let games = session.archive().games();
    let fouls = project_path(games, "fouls.shooting");
    assert_eq!(fouls.labels, vec!["Game 1", "Game 2"]);
    assert_eq!(fouls.values, vec![2, 0]);

    let time = project(games, StatKey::TimePlayed);
    assert_eq!(time.values, vec![30, 12]);

    let missing = project_path(games, "dunks");
    assert_eq!(missing.values, vec![0, 0]);
}

#[test]
fn rejected_operations_leave_everything_unchanged() {
    let mut session = Session::default();
    assert_matches!(session.start_game(""), Err(TrackerError::BlankTitle));
    assert_eq!(session.state(), SessionState::NoGame);

    session.start_game("Live").unwrap();
    session.increment_counter(Counter::Assists).unwrap();
    session.tick();
    let stats_before: GameStats = *session.stats();

    assert_matches!(session.start_game("Other"), Err(TrackerError::GameInProgress));
    session.resume().unwrap();
    assert_matches!(session.bench(), Ok(()));
    assert_matches!(session.bench(), Err(TrackerError::InvalidTransition { .. }));
    assert_eq!(session.state(), SessionState::Benched);
    assert_eq!(*session.stats(), stats_before);
    assert_eq!(session.title(), "Live");
    assert_eq!(session.elapsed_secs(), 1);
    assert!(session.archive().is_empty());
}

#[test]
fn end_game_resets_and_snapshots_are_independent() {
    let mut session = Session::default();
    session.start_game("First").unwrap();
    session.record_shot(5.0, 5.0, ShotKind::Three, true).unwrap();
    session.record_shot(25.0, 15.0, ShotKind::FreeThrow, false).unwrap();
    session.increment_counter(Counter::Rebounds).unwrap();
    for _ in 0..5 {
        session.tick();
    }
    session.bench().unwrap();
    let archived = session.end_game().unwrap().clone();

    assert_eq!(archived.duration_secs, 5);
    assert_eq!(archived.shots.len(), 2);
    assert_eq!(archived.stats.points, 3);
    assert_eq!(session.elapsed_secs(), 0);
    assert!(session.shots().is_empty());
    assert_eq!(*session.stats(), GameStats::default());

    session.start_game("Second").unwrap();
    for _ in 0..4 {
        session.record_shot(1.0, 1.0, ShotKind::Two, true).unwrap();
    }
    assert_eq!(session.archive().games()[0], archived);
}

#[test]
fn points_formula_holds_across_random_looking_sequences() {
    let mut session = Session::default();
    session.start_game("Formula").unwrap();
    let kinds = [ShotKind::Two, ShotKind::Three, ShotKind::FreeThrow];
    for i in 0..97usize {
        let kind = kinds[(i * 7 + 3) % 3];
        let made = (i * 5) % 3 != 0;
        session.record_shot(0.0, 0.0, kind, made).unwrap();
        let s = session.stats();
        assert_eq!(
            s.points,
            2 * (s.field_goals_made - s.threes_made) + 3 * s.threes_made + s.free_throws_made
        );
    }
}
