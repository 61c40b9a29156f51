//! Configuration resolution from CLI args

use crate::cli::Args;
use crate::error::CliError;
use std::cell::OnceCell;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::debug;
use zeroize::Zeroizing;

const SESSION_ENV: &str = "AOC_SESSION";
const STORE_FILE_NAME: &str = "submissions.json";

/// Resolved runtime configuration
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub year_filter: Option<u16>,
    pub day_filter: Option<u8>,
    pub part_filter: Option<u8>,
    /// Only solvers carrying every one of these tags are registered
    pub tags: Vec<String>,
    pub cache_dir: PathBuf,
    pub store_path: PathBuf,
    /// Submit every selected part, overriding the solvers' opt-in
    pub submit: bool,
    pub auto_retry: bool,
    pub quiet: bool,
    pub verbose: bool,
}

impl Config {
    pub fn from_args(args: Args) -> Self {
        let cache_dir = expand_tilde(&args.cache_dir);
        let store_path = match args.store {
            Some(path) => expand_tilde(&path),
            None => cache_dir.join(STORE_FILE_NAME),
        };

        Config {
            year_filter: args.year,
            day_filter: args.day,
            part_filter: args.part,
            tags: args.tags,
            cache_dir,
            store_path,
            submit: args.submit,
            auto_retry: args.auto_retry,
            quiet: args.quiet,
            verbose: args.verbose,
        }
    }

    /// Default log filter when `RUST_LOG` is not set
    pub fn log_filter(&self) -> &'static str {
        if self.verbose {
            "debug"
        } else if self.quiet {
            "warn"
        } else {
            "info"
        }
    }
}

/// Expand a leading `~` to the home directory
fn expand_tilde(path: &Path) -> PathBuf {
    if let Ok(rest) = path.strip_prefix("~")
        && let Some(home) = dirs::home_dir()
    {
        return home.join(rest);
    }
    path.to_path_buf()
}

/// Token file shared with other Advent of Code tools
fn token_file() -> Option<PathBuf> {
    dirs::home_dir().map(|home| home.join(".config").join("aocd").join("token"))
}

fn non_empty(token: Zeroizing<String>) -> Option<Zeroizing<String>> {
    let trimmed = token.trim();
    (!trimmed.is_empty()).then(|| Zeroizing::new(trimmed.to_string()))
}

/// Session token from the environment value, else from the token file
fn resolve_session(env: Option<String>, token_file: Option<&Path>) -> Option<Zeroizing<String>> {
    if let Some(token) = env.map(Zeroizing::new).and_then(non_empty) {
        debug!("Using session token from {SESSION_ENV}");
        return Some(token);
    }
    let path = token_file?;
    let token = fs::read_to_string(path).ok().map(Zeroizing::new).and_then(non_empty)?;
    debug!("Using session token from {}", path.display());
    Some(token)
}

/// Prompt user for session token
fn prompt_session(reason: &str) -> Result<Zeroizing<String>, CliError> {
    eprintln!("{}", reason);
    let token = rpassword::prompt_password("Enter AOC session key: ")
        .map(Zeroizing::new)
        .map_err(|e| CliError::Config(format!("Failed to read session: {}", e)))?;
    non_empty(token).ok_or_else(|| CliError::Config("Session token is required.".to_string()))
}

/// Session token, resolved on first use
///
/// Runs that find everything they need in the cache never touch the
/// environment, the token file or the terminal.
#[derive(Default)]
pub struct Session {
    token: OnceCell<Zeroizing<String>>,
}

impl Session {
    pub fn new() -> Self {
        Self::default()
    }

    /// Session with an already known token
    #[cfg(test)]
    pub fn from_token(token: Zeroizing<String>) -> Self {
        Self {
            token: OnceCell::from(token),
        }
    }

    pub fn token(&self) -> Result<&str, CliError> {
        if let Some(token) = self.token.get() {
            return Ok(token.as_str());
        }
        let token = match resolve_session(std::env::var(SESSION_ENV).ok(), token_file().as_deref()) {
            Some(token) => token,
            None => prompt_session("Session token required to talk to adventofcode.com")?,
        };
        Ok(self.token.get_or_init(|| token).as_str())
    }
}
