use std::io::ErrorKind;
use std::path::PathBuf;
use std::process::Stdio;
use std::time::Duration;

use anyhow::{Context, Result};
use tracing::info;

use crate::env;
use crate::outcome::{InvocationResult, Outcome};

/// Wall-clock bound on one `dbt debug` invocation.
pub const DEBUG_TIMEOUT: Duration = Duration::from_secs(30);

const DBT_PROGRAM: &str = "dbt";
const DEBUG_ARGS: [&str; 3] = ["debug", "--profiles-dir", env::PROFILES_DIR];

/// Runs one `dbt debug` invocation against a scrubbed environment and
/// classifies the result.
///
/// The check contract is fixed: program `dbt`, argv
/// `debug --profiles-dir .`, 30-second bound. `with_command` substitutes the
/// executable and bound so tests can drive the same pipeline through stubs.
#[derive(Debug, Clone)]
pub struct ProcessCheckRunner {
    program: PathBuf,
    timeout: Duration,
}

impl ProcessCheckRunner {
    /// The fixed `dbt debug` contract.
    #[must_use]
    pub fn new() -> Self {
        Self::with_command(DBT_PROGRAM, DEBUG_TIMEOUT)
    }

    /// Same pipeline against a substitute executable and wall-clock bound.
    #[must_use]
    pub fn with_command(program: impl Into<PathBuf>, timeout: Duration) -> Self {
        Self {
            program: program.into(),
            timeout,
        }
    }

    /// Invoke the command once and classify the result.
    ///
    /// Spawns exactly one child, given the scrubbed environment of
    /// [`env::scrub_environment`] and capture of both output streams. On
    /// timeout the pending child is dropped without being killed, so nothing
    /// is captured for it. I/O errors other than the command not resolving
    /// are outside the outcome taxonomy and propagate as errors.
    pub async fn run(&self) -> Result<Outcome> {
        let child_env = env::scrub_environment(&env::ambient_environment());

        info!(
            program = %self.program.display(),
            timeout_secs = self.timeout.as_secs(),
            "running dbt debug"
        );

        let invocation = tokio::process::Command::new(&self.program)
            .args(DEBUG_ARGS)
            .env_clear()
            .envs(&child_env)
            .stdin(Stdio::null())
            .output();

        let output = match tokio::time::timeout(self.timeout, invocation).await {
            Err(_) => return Ok(Outcome::Timeout),
            Ok(Err(e)) if e.kind() == ErrorKind::NotFound => return Ok(Outcome::CommandNotFound),
            Ok(Err(e)) => {
                return Err(e).with_context(|| format!("running {}", self.program.display()));
            }
            Ok(Ok(output)) => output,
        };

        let result = InvocationResult::from_output(&output);
        emit(&result);

        if result.exit_code == 0 {
            Ok(Outcome::Success)
        } else {
            Ok(Outcome::Failure(result.exit_code))
        }
    }
}

impl Default for ProcessCheckRunner {
    fn default() -> Self {
        Self::new()
    }
}

/// Pass the child's captured streams through to the check's own.
fn emit(result: &InvocationResult) {
    print!("{}", result.stdout);
    if !result.stderr.is_empty() {
        eprint!("{}", result.stderr);
    }
}
