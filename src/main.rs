use crossterm::event::{self, Event};
use crossterm::terminal::{
    disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen,
};
use crossterm::ExecutableCommand;
use mastermind::config::{self, Command, GameConfig, USAGE};
use mastermind::constants::{INPUT_POLL_MS, LOG_FILE_NAME};
use mastermind::draw_ui;
use mastermind::game::{RoundController, SequenceOracle};
use mastermind::input::{handle_key, InputResult, LineInput};
use mastermind::logging;
use mastermind::session::Session;
use ratatui::{backend::CrosstermBackend, Terminal};
use std::io;
use std::path::Path;
use std::time::Duration;
use tracing::{error, info};

fn main() -> io::Result<()> {
    // Handle CLI arguments
    let args: Vec<String> = std::env::args().skip(1).collect();

    let game_config = match config::parse_args(&args) {
        Ok(Command::Play(game_config)) => game_config,
        Ok(Command::Version) => {
            println!("mastermind {}", env!("CARGO_PKG_VERSION"));
            std::process::exit(0);
        }
        Ok(Command::Help) => {
            println!("{}", USAGE);
            std::process::exit(0);
        }
        Err(message) => {
            eprintln!("{}", message);
            eprintln!("Run 'mastermind --help' for usage.");
            std::process::exit(1);
        }
    };

    logging::init_file_logging(Path::new(LOG_FILE_NAME))?;
    info!(
        max_attempts = game_config.max_attempts,
        seeded = game_config.seed.is_some(),
        "starting mastermind"
    );

    let mut session = build_session(game_config);

    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    stdout.execute(EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let result = run(&mut terminal, &mut session);

    // Cleanup terminal
    disable_raw_mode()?;
    terminal.backend_mut().execute(LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    if let Err(e) = &result {
        error!(error = %e, "session aborted");
    } else if let Some(message) = session.message() {
        println!("{}", message);
    }

    result
}

fn build_session(game_config: GameConfig) -> Session {
    let oracle = match game_config.seed {
        Some(seed) => SequenceOracle::seeded(seed),
        None => SequenceOracle::from_entropy(),
    };
    Session::new(RoundController::new(oracle, game_config.max_attempts))
}

fn run<B: ratatui::backend::Backend>(
    terminal: &mut Terminal<B>,
    session: &mut Session,
) -> io::Result<()> {
    let mut line = LineInput::new();

    loop {
        terminal.draw(|frame| draw_ui(frame, session, &line))?;

        if !event::poll(Duration::from_millis(INPUT_POLL_MS))? {
            continue;
        }
        if let Event::Key(key_event) = event::read()? {
            match handle_key(key_event, &mut line, session) {
                Ok(InputResult::Continue) => {}
                Ok(InputResult::Quit) => return Ok(()),
                Err(e) => return Err(io::Error::new(io::ErrorKind::Other, e)),
            }
        }
    }
}
