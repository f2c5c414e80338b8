use std::sync::mpsc;
use std::time::Duration;

use courtside::app::{App, AppOptions, Flow};
use courtside::clock::ThreadTickScheduler;
use courtside::profile::PlayerProfile;
use courtside::runtime::{CourtEvent, FixedTicker, Runner, TestEventSource};
use courtside::session::{Session, SessionState};
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

fn key(c: char) -> CourtEvent {
    CourtEvent::Key(KeyEvent::new(KeyCode::Char(c), KeyModifiers::NONE))
}

fn special(code: KeyCode) -> CourtEvent {
    CourtEvent::Key(KeyEvent::new(code, KeyModifiers::NONE))
}

fn options() -> AppOptions {
    AppOptions {
        player: Some(PlayerProfile {
            name: "Headless".into(),
            ..PlayerProfile::default()
        }),
        ..AppOptions::default()
    }
}

// Headless integration using the internal runtime + App without a TTY
#[test]
fn headless_game_flow_archives_one_game() {
    let (tx, rx) = mpsc::channel();
    let es = TestEventSource::new(rx);
    let ticker = FixedTicker::new(Duration::from_millis(5));
    let runner = Runner::new(es, ticker);
    let mut app = App::new(Session::default(), options());

    // new game "Game 1", three made twos, one missed three, then end
    tx.send(key('n')).unwrap();
    for c in "Game 1".chars() {
        tx.send(key(c)).unwrap();
    }
    tx.send(special(KeyCode::Enter)).unwrap();
    for c in "tttH".chars() {
        tx.send(key(c)).unwrap();
    }
    tx.send(key('e')).unwrap();
    tx.send(special(KeyCode::Esc)).unwrap();

    let mut quit = false;
    for _ in 0..100u32 {
        if app.handle_event(runner.step()) == Flow::Quit {
            quit = true;
            break;
        }
    }

    assert!(quit, "esc should end the loop");
    assert_eq!(app.session.state(), SessionState::Ended);
    let games = app.session.archive().games();
    assert_eq!(games.len(), 1);
    let stats = games[0].stats;
    assert_eq!(games[0].title, "Game 1");
    assert_eq!(stats.points, 6);
    assert_eq!(stats.field_goals_made, 3);
    assert_eq!(stats.field_goals_attempted, 4);
    assert_eq!(stats.threes_attempted, 1);
    assert_eq!(stats.threes_made, 0);
}

#[test]
fn headless_real_clock_advances_only_on_court() {
    let (tx, rx) = mpsc::channel();
    let scheduler = ThreadTickScheduler::with_period(tx.clone(), Duration::from_millis(10));
    let runner = Runner::new(
        TestEventSource::new(rx),
        FixedTicker::new(Duration::from_millis(5)),
    );
    let mut app = App::new(Session::new(Box::new(scheduler)), options());
    app.session.start_game("Timed").unwrap();

    for _ in 0..200u32 {
        app.handle_event(runner.step());
        if app.session.elapsed_secs() >= 3 {
            break;
        }
    }
    assert!(app.session.elapsed_secs() >= 3, "clock should tick while on court");

    app.session.bench().unwrap();
    let frozen = app.session.elapsed_secs();
    // let any ticks that were in flight arrive, then keep pumping
    for _ in 0..20u32 {
        app.handle_event(runner.step());
    }
    assert_eq!(app.session.elapsed_secs(), frozen);

    app.session.resume().unwrap();
    for _ in 0..200u32 {
        app.handle_event(runner.step());
        if app.session.elapsed_secs() > frozen {
            break;
        }
    }
    assert!(app.session.elapsed_secs() > frozen);
}

#[test]
fn headless_empty_game_cannot_be_saved() {
    let mut app = App::new(Session::default(), options());
    app.handle_event(key('n'));
    for c in "Quiet".chars() {
        app.handle_event(key(c));
    }
    app.handle_event(special(KeyCode::Enter));
    app.handle_event(key('e'));

    assert_eq!(app.session.state(), SessionState::Running);
    assert!(app.session.archive().is_empty());
    let status = app.status.expect("status should explain the refusal");
    assert!(status.text.starts_with("nothing to save"));
}
