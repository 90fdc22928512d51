// Annotation macro wrapping a function's address
pub const MARKER_TOKEN: &str = "ADDR";
pub const STATEMENT_SEPARATOR: &str = ";";
pub const READ_BLOCK_SIZE: usize = 4096;

pub const DEFAULT_INPUT_FILE: &str = "test.cpp";

// Digits allowed after the `0x` prefix
pub const MIN_HEX_DIGITS: usize = 6;
pub const MAX_HEX_DIGITS: usize = 8;
