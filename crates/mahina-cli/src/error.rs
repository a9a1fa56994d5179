//! CLI exit codes.
//!
//! - 0: Success, calendar on stdout
//! - 1: Runtime failure (unknown timezone, nonexistent local noon)
//! - 2: Usage error (missing or malformed arguments), reported by clap itself

use std::process::ExitCode;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(u8)]
pub enum CliExitCode {
    Success = 0,
    Failure = 1,
}

impl From<CliExitCode> for ExitCode {
    fn from(code: CliExitCode) -> Self {
        ExitCode::from(code as u8)
    }
}

impl From<CliExitCode> for i32 {
    fn from(code: CliExitCode) -> Self {
        code as i32
    }
}
