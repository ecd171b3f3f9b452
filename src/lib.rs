//! Preflight smoke check for dbt projects.
//!
//! Runs `dbt debug --profiles-dir .` as a child process with the caller's
//! `DBT_*` connection variables scrubbed, so the check proves profiles.yml
//! resolves on its own rather than borrowing credentials from the shell.

pub mod check;
pub mod env;
pub mod outcome;

pub use check::ProcessCheckRunner;
pub use outcome::Outcome;
