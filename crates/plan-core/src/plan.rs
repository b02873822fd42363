use crate::error::{PlanError, Result};
use crate::frontmatter::parse_frontmatter;
use crate::io::{atomic_write, ensure_dir};
use crate::paths::{self, PLAN_EXTENSION};
use serde::Serialize;
use std::path::{Path, PathBuf};

// ---------------------------------------------------------------------------
// PlanSummary
// ---------------------------------------------------------------------------

/// The frontmatter fields of one plan file plus where it lives.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PlanSummary {
    pub name: String,
    pub description: String,
    pub path: PathBuf,
}

impl PlanSummary {
    /// Case-insensitive substring match against `"<name> <description>"`.
    /// An empty query matches everything.
    pub fn matches(&self, query: &str) -> bool {
        if query.is_empty() {
            return true;
        }
        let haystack = format!("{} {}", self.name, self.description).to_lowercase();
        haystack.contains(&query.to_lowercase())
    }
}

// ---------------------------------------------------------------------------
// NewPlan
// ---------------------------------------------------------------------------

/// A plan about to be written. Name and description are trimmed before
/// validation; the body must already be resolved by the caller.
#[derive(Debug, Clone, Default)]
pub struct NewPlan {
    pub name: String,
    pub description: String,
    pub body: Option<String>,
    pub overwrite: bool,
}

impl NewPlan {
    pub fn new(name: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            description: description.into(),
            ..Self::default()
        }
    }

    pub fn with_body(mut self, body: impl Into<String>) -> Self {
        self.body = Some(body.into());
        self
    }

    pub fn with_overwrite(mut self, overwrite: bool) -> Self {
        self.overwrite = overwrite;
        self
    }

    /// Check name and description without looking at the body.
    pub fn validate_header(&self) -> Result<()> {
        paths::validate_plan_name(self.name.trim())?;
        let description = self.description.trim();
        if description.is_empty() {
            return Err(PlanError::EmptyDescription);
        }
        if description.contains('\n') {
            return Err(PlanError::MultilineDescription);
        }
        Ok(())
    }

    /// Validate every field and produce the file content.
    ///
    /// The description is embedded verbatim, without quoting.
    pub fn render(&self) -> Result<String> {
        self.validate_header()?;
        let name = self.name.trim();
        let description = self.description.trim();

        let body = self.body.as_deref().ok_or(PlanError::MissingBody)?.trim();
        if body.is_empty() {
            return Err(PlanError::EmptyBody);
        }
        if body.trim_start().starts_with("---") {
            return Err(PlanError::FrontmatterNotAllowed);
        }

        Ok(format!(
            "---\nname: {name}\ndescription: {description}\n---\n\n{body}\n"
        ))
    }
}

// ---------------------------------------------------------------------------
// Store operations
// ---------------------------------------------------------------------------

/// Write `plan` to `<plans_dir>/<name>.md` and return the path written.
///
/// Nothing touches the filesystem until the plan has validated.
pub fn create_plan(plans_dir: &Path, plan: &NewPlan) -> Result<PathBuf> {
    let content = plan.render()?;

    ensure_dir(plans_dir)?;
    let path = paths::plan_path(plans_dir, plan.name.trim());
    let existed = path.exists();
    if existed && !plan.overwrite {
        return Err(PlanError::AlreadyExists(path));
    }

    atomic_write(&path, content.as_bytes())?;
    tracing::info!(path = %path.display(), replaced = existed, "wrote plan");
    Ok(path)
}

/// Summaries of every parseable plan in `plans_dir`, ordered by file name.
///
/// Files that fail to parse or lack `name`/`description` are skipped so one
/// bad plan never hides the rest.
pub fn list_plans(plans_dir: &Path, query: Option<&str>) -> Result<Vec<PlanSummary>> {
    if !plans_dir.is_dir() {
        return Err(PlanError::DirectoryNotFound(plans_dir.to_path_buf()));
    }

    let suffix = format!(".{PLAN_EXTENSION}");
    let mut candidates = Vec::new();
    for entry in std::fs::read_dir(plans_dir)? {
        let entry = match entry {
            Ok(entry) => entry,
            Err(e) => {
                tracing::debug!(dir = %plans_dir.display(), error = %e, "skipping unreadable entry");
                continue;
            }
        };
        if !entry.file_name().to_string_lossy().ends_with(&suffix) {
            continue;
        }
        // `is_file` follows symlinks.
        let path = entry.path();
        if path.is_file() {
            candidates.push(path);
        }
    }
    candidates.sort_by(|a, b| a.file_name().cmp(&b.file_name()));

    let query = query.unwrap_or_default();
    let mut plans = Vec::new();
    for path in candidates {
        let fm = match parse_frontmatter(&path) {
            Ok(fm) => fm,
            Err(e) => {
                tracing::debug!(path = %path.display(), error = %e, "skipping plan");
                continue;
            }
        };
        let Some((name, description)) = fm.name_and_description() else {
            tracing::debug!(path = %path.display(), "skipping plan without name/description");
            continue;
        };
        let summary = PlanSummary {
            name: name.to_string(),
            description: description.to_string(),
            path,
        };
        if summary.matches(query) {
            plans.push(summary);
        }
    }
    Ok(plans)
}

/// Read the frontmatter of a single plan file, wherever it lives.
///
/// Unlike [`list_plans`], parse failures are returned to the caller.
pub fn read_plan(path: &Path) -> Result<PlanSummary> {
    if !path.exists() {
        return Err(PlanError::PathNotFound(path.to_path_buf()));
    }
    let fm = parse_frontmatter(path)?;
    let (name, description) = fm.name_and_description().ok_or(PlanError::MissingFields)?;
    Ok(PlanSummary {
        name: name.to_string(),
        description: description.to_string(),
        path: path.to_path_buf(),
    })
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
