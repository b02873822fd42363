use crate::error::{PlanError, Result};
use regex::Regex;
use std::ffi::OsString;
use std::path::{Component, Path, PathBuf};
use std::sync::OnceLock;

// ---------------------------------------------------------------------------
// Directory constants
// ---------------------------------------------------------------------------

pub const CODEX_HOME_ENV: &str = "CODEX_HOME";
pub const DEFAULT_CODEX_HOME: &str = "~/.codex";
pub const PLANS_DIR: &str = "plans";
pub const PLAN_EXTENSION: &str = "md";

// ---------------------------------------------------------------------------
// PlanStoreConfig
// ---------------------------------------------------------------------------

/// Where the plan store lives.
///
/// Captured once at the process boundary (see [`PlanStoreConfig::from_env`])
/// and passed down, so path resolution never reads the environment itself.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PlanStoreConfig {
    /// Value of `CODEX_HOME`, if set.
    pub codex_home: Option<PathBuf>,
    /// The user's home directory, used to expand a leading `~`.
    pub home_dir: Option<PathBuf>,
}

impl PlanStoreConfig {
    pub fn new(codex_home: Option<PathBuf>, home_dir: Option<PathBuf>) -> Self {
        Self {
            codex_home,
            home_dir,
        }
    }

    pub fn from_env() -> Self {
        Self::from_vars(std::env::var_os(CODEX_HOME_ENV), home::home_dir())
    }

    fn from_vars(codex_home: Option<OsString>, home_dir: Option<PathBuf>) -> Self {
        Self::new(codex_home.map(PathBuf::from), home_dir)
    }

    /// Override the root directory (e.g. from a `--codex-home` flag).
    /// `None` keeps whatever was already configured.
    pub fn with_codex_home(mut self, codex_home: Option<PathBuf>) -> Self {
        if codex_home.is_some() {
            self.codex_home = codex_home;
        }
        self
    }

    /// `CODEX_HOME` if set, else `~/.codex`, with `~` expanded.
    pub fn codex_home(&self) -> PathBuf {
        let raw = self
            .codex_home
            .clone()
            .unwrap_or_else(|| PathBuf::from(DEFAULT_CODEX_HOME));
        expand_home(&raw, self.home_dir.as_deref())
    }

    pub fn plans_dir(&self) -> PathBuf {
        self.codex_home().join(PLANS_DIR)
    }

    /// Expand a leading `~` in a user-supplied path.
    pub fn expand(&self, path: &Path) -> PathBuf {
        expand_home(path, self.home_dir.as_deref())
    }
}

// ---------------------------------------------------------------------------
// Path helpers
// ---------------------------------------------------------------------------

pub fn plan_path(plans_dir: &Path, name: &str) -> PathBuf {
    plans_dir.join(format!("{name}.{PLAN_EXTENSION}"))
}

/// Replace a leading `~` component with `home`. Paths without one, or with
/// no known home directory, come back unchanged.
pub fn expand_home(path: &Path, home: Option<&Path>) -> PathBuf {
    let Some(home) = home else {
        return path.to_path_buf();
    };
    let mut components = path.components();
    match components.next() {
        Some(Component::Normal(first)) if first == "~" => home.join(components.as_path()),
        _ => path.to_path_buf(),
    }
}

// ---------------------------------------------------------------------------
// Name validation
// ---------------------------------------------------------------------------

static NAME_RE: OnceLock<Regex> = OnceLock::new();

fn name_re() -> &'static Regex {
    NAME_RE.get_or_init(|| Regex::new(r"^[a-z0-9]+(-[a-z0-9]+)*$").unwrap())
}

pub fn validate_plan_name(name: &str) -> Result<()> {
    if name.is_empty() || !name_re().is_match(name) {
        return Err(PlanError::InvalidName(name.to_string()));
    }
    Ok(())
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
