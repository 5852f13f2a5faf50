// Game rules
pub const SEQUENCE_LENGTH: usize = 4;
pub const MIN_SYMBOL: u8 = 1;
pub const MAX_SYMBOL: u8 = 6;
pub const DEFAULT_MAX_ATTEMPTS: usize = 10;

// Session
pub const EXIT_SENTINEL: &str = "exit";
pub const LOG_FILE_NAME: &str = "mastermind.log";

// Terminal
pub const INPUT_POLL_MS: u64 = 100;
