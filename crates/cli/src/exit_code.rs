//! Exit codes for the graphql-fields CLI.
//!
//! Distinct codes let scripts tell a bad config apart from a query path that
//! selects nothing.

/// Exit codes used by the CLI.
///
/// These follow standard Unix conventions where 0 indicates success
/// and non-zero values indicate different types of failures.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(i32)]
pub enum ExitCode {
    /// Success - fields printed
    Success = 0,
    /// Configuration error (missing or invalid config file)
    ConfigError = 2,
    /// I/O error (file read failure)
    IoError = 4,
    /// Parse error (invalid GraphQL syntax, malformed variables or captured context)
    ParseError = 5,
    /// The path selects nothing, or the fragments below it are inconsistent
    ResolutionError = 6,
}

impl ExitCode {
    /// Exit the process with this exit code.
    pub fn exit(self) -> ! {
        std::process::exit(self as i32)
    }

    /// Get the numeric value of this exit code.
    #[must_use]
    pub const fn code(self) -> i32 {
        self as i32
    }
}

impl std::fmt::Display for ExitCode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Success => write!(f, "success"),
            Self::ConfigError => write!(f, "configuration error"),
            Self::IoError => write!(f, "I/O error"),
            Self::ParseError => write!(f, "parse error"),
            Self::ResolutionError => write!(f, "resolution error"),
        }
    }
}
