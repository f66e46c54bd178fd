//! Race records, command parsing and command file loading

pub mod parser;
pub mod race;
pub mod reader;

// Re-export commonly used types
pub use parser::{parse_line, Command};
pub use race::{RaceRecord, MIN_RESULTS};
pub use reader::{decode_bytes, read_command_file, DEFAULT_ENCODING};
