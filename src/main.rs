use clap::{error::ErrorKind, CommandFactory, Parser};
use courtside::{
    app::{App, AppOptions, Flow},
    app_dirs::AppDirs,
    chart::StatKey,
    clock::ThreadTickScheduler,
    config::{ConfigStore, EphemeralConfigStore, FileConfigStore},
    export, logging,
    profile::PlayerProfile,
    runtime::{CrosstermEventSource, FixedTicker, Runner},
    session::Session,
    ui,
};
use crossterm::{
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
    tty::IsTty,
};
use ratatui::{
    backend::{Backend, CrosstermBackend},
    Terminal,
};
use std::{
    error::Error,
    io::{self, stdin},
    path::PathBuf,
    time::Duration,
};
use tracing::{info, warn};

const TICK_RATE_MS: u64 = 250;

/// basketball stat tracker tui with live box score, shot chart, and per-game trends
#[derive(Parser, Debug, Clone)]
#[clap(
    version,
    about,
    long_about = "Track one player's games from the sideline: run the game clock, mark shots on the court, count rebounds, assists and fouls, then compare finished games in line and bar charts."
)]
pub struct Cli {
    /// player name to use when no profile has been saved yet
    #[clap(short = 'p', long)]
    player: Option<String>,

    /// stat to chart first, e.g. points, fieldGoalsMade, fouls.shooting, timePlayed
    #[clap(short = 's', long)]
    stat: Option<StatKey>,

    /// write finished games here on exit (.csv for CSV, anything else JSON)
    #[clap(short = 'e', long)]
    export: Option<PathBuf>,

    /// tracing output file (filter with COURTSIDE_LOG)
    #[clap(long)]
    log_file: Option<PathBuf>,

    /// neither read nor write the saved config
    #[clap(long)]
    no_config: bool,
}

impl Cli {
    fn config_store(&self) -> Box<dyn ConfigStore> {
        if self.no_config {
            Box::new(EphemeralConfigStore)
        } else {
            Box::new(FileConfigStore::new())
        }
    }

    /// Merge saved config with command line overrides
    fn to_app_options(&self, store: &dyn ConfigStore) -> AppOptions {
        let config = store.load();
        let player = config.player.clone().or_else(|| {
            self.player.as_ref().map(|name| PlayerProfile {
                name: name.trim().to_string(),
                ..PlayerProfile::default()
            })
        });
        AppOptions {
            player: player.filter(|p| !p.name.is_empty()),
            chart_key: self.stat.unwrap_or_else(|| config.chart_key()),
            export_dir: AppDirs::export_dir(),
        }
    }
}

fn main() -> Result<(), Box<dyn Error>> {
    let cli = Cli::parse();

    if !stdin().is_tty() {
        let mut cmd = Cli::command();
        cmd.error(ErrorKind::Io, "stdin must be a tty").exit();
    }

    let log_path = cli.log_file.clone().unwrap_or_else(AppDirs::log_path);
    logging::init(&log_path)?;

    let store = cli.config_store();
    let options = cli.to_app_options(store.as_ref());

    let events = CrosstermEventSource::new();
    let scheduler = ThreadTickScheduler::new(events.sender());
    let mut app = App::new(Session::new(Box::new(scheduler)), options);
    let runner = Runner::new(events, FixedTicker::new(Duration::from_millis(TICK_RATE_MS)));
    info!("courtside started");

    enable_raw_mode()?;

    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let result = start_tui(&mut terminal, &mut app, &runner);

    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen,)?;
    terminal.show_cursor()?;

    result?;

    if let Err(e) = store.save(&app.to_config()) {
        warn!(error = %e, "could not save config");
    }
    if let Some(path) = &cli.export {
        export::export_to_path(path, app.session.archive(), app.profile.get())?;
        println!(
            "wrote {} game(s) to {}",
            app.session.archive().len(),
            path.display()
        );
    }
    info!(games = app.session.archive().len(), "courtside exited");

    Ok(())
}

fn start_tui<B: Backend>(
    terminal: &mut Terminal<B>,
    app: &mut App,
    runner: &Runner<CrosstermEventSource, FixedTicker>,
) -> Result<(), Box<dyn Error>> {
    terminal.draw(|f| ui::draw(app, f))?;

    loop {
        let event = runner.step();
        if app.handle_event(event) == Flow::Quit {
            break;
        }
        terminal.draw(|f| ui::draw(app, f))?;
    }

    Ok(())
}
