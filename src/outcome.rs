use std::fmt;
use std::process::Output;

/// Captured result of a completed child process.
///
/// Streams are decoded lossily; dbt's output is UTF-8 in practice.
#[derive(Debug, Clone)]
pub struct InvocationResult {
    pub exit_code: i32,
    pub stdout: String,
    pub stderr: String,
}

impl InvocationResult {
    /// A child killed by a signal has no exit code; report it as -1 so it
    /// still classifies as a non-zero completion.
    pub fn from_output(output: &Output) -> Self {
        Self {
            exit_code: output.status.code().unwrap_or(-1),
            stdout: String::from_utf8_lossy(&output.stdout).into_owned(),
            stderr: String::from_utf8_lossy(&output.stderr).into_owned(),
        }
    }
}

/// Terminal classification of one check invocation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    /// The command completed within the bound with exit code zero.
    Success,
    /// The command completed with the given non-zero exit code.
    Failure(i32),
    /// The wall-clock bound elapsed; the child was abandoned.
    Timeout,
    /// The command could not be located.
    CommandNotFound,
}

impl Outcome {
    #[must_use]
    pub const fn is_success(self) -> bool {
        matches!(self, Self::Success)
    }

    /// Exit code for the check process itself: 0 on success, 1 otherwise.
    #[must_use]
    pub const fn exit_code(self) -> i32 {
        match self {
            Self::Success => 0,
            Self::Failure(_) | Self::Timeout | Self::CommandNotFound => 1,
        }
    }
}

impl fmt::Display for Outcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Success => write!(f, "success"),
            Self::Failure(code) => write!(f, "failed with exit code {code}"),
            Self::Timeout => write!(f, "timed out"),
            Self::CommandNotFound => write!(f, "command not found"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn success_maps_to_exit_zero() {
        assert!(Outcome::Success.is_success());
        assert_eq!(Outcome::Success.exit_code(), 0);
    }

    #[test]
    fn non_success_variants_map_to_exit_one() {
        assert_eq!(Outcome::Failure(2).exit_code(), 1);
        assert_eq!(Outcome::Failure(-1).exit_code(), 1);
        assert_eq!(Outcome::Timeout.exit_code(), 1);
        assert_eq!(Outcome::CommandNotFound.exit_code(), 1);
        assert!(!Outcome::Timeout.is_success());
    }

    #[test]
    fn display_formats_each_variant() {
        assert_eq!(Outcome::Success.to_string(), "success");
        assert_eq!(Outcome::Failure(2).to_string(), "failed with exit code 2");
        assert_eq!(Outcome::Timeout.to_string(), "timed out");
        assert_eq!(Outcome::CommandNotFound.to_string(), "command not found");
    }
}
