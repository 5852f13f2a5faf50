//! Command-line configuration.

use crate::constants::DEFAULT_MAX_ATTEMPTS;

pub const USAGE: &str = "Mastermind - Terminal Code-Breaking Game

Usage: mastermind [options]

Options:
  --attempts N  Number of guesses allowed per round (default 10)
  --seed N      Seed the sequence generator for a reproducible game
  --version     Show version information
  --help        Show this help message";

/// Settings for a play session.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GameConfig {
    pub max_attempts: usize,
    pub seed: Option<u64>,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            max_attempts: DEFAULT_MAX_ATTEMPTS,
            seed: None,
        }
    }
}

/// What the binary was asked to do.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Play(GameConfig),
    Version,
    Help,
}

/// Parse the arguments after the program name.
pub fn parse_args<S: AsRef<str>>(args: &[S]) -> Result<Command, String> {
    let mut config = GameConfig::default();
    let mut iter = args.iter().map(|a| a.as_ref());

    while let Some(arg) = iter.next() {
        match arg {
            "--version" | "-v" => return Ok(Command::Version),
            "--help" | "-h" => return Ok(Command::Help),
            "--attempts" => {
                let value = iter
                    .next()
                    .ok_or_else(|| "--attempts requires a value".to_string())?;
                config.max_attempts = match value.parse::<usize>() {
                    Ok(n) if n >= 1 => n,
                    _ => return Err(format!("Invalid attempt limit: {}", value)),
                };
            }
            "--seed" => {
                let value = iter
                    .next()
                    .ok_or_else(|| "--seed requires a value".to_string())?;
                config.seed = Some(
                    value
                        .parse::<u64>()
                        .map_err(|_| format!("Invalid seed: {}", value))?,
                );
            }
            other => return Err(format!("Unknown argument: {}", other)),
        }
    }

    Ok(Command::Play(config))
}
