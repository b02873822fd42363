use std::path::PathBuf;
use thiserror::Error;

/// Reasons a frontmatter block could not be parsed.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FrontmatterError {
    #[error("frontmatter must start with '---'")]
    MissingOpening,

    #[error("invalid frontmatter line: {0}")]
    InvalidLine(String),

    #[error("frontmatter must end with '---'")]
    MissingClosing,
}

#[derive(Debug, Error)]
pub enum PlanError {
    #[error(
        "invalid plan name '{0}': use short, lower-case, hyphen-delimited names \
         (e.g., codex-rate-limit-overview)"
    )]
    InvalidName(String),

    #[error("description must be a single line: it is empty")]
    EmptyDescription,

    #[error("description must be a single line: it contains a newline")]
    MultilineDescription,

    #[error("provide --body-file, stdin, or --template to supply plan content")]
    MissingBody,

    #[error("plan body cannot be empty")]
    EmptyBody,

    #[error("plan body should not include frontmatter")]
    FrontmatterNotAllowed,

    #[error("plan already exists: {}; use --overwrite to replace", .0.display())]
    AlreadyExists(PathBuf),

    #[error("plans directory not found: {}", .0.display())]
    DirectoryNotFound(PathBuf),

    #[error(transparent)]
    MalformedFrontmatter(#[from] FrontmatterError),

    #[error("frontmatter must include name and description")]
    MissingFields,

    #[error("plan not found: {}", .0.display())]
    PathNotFound(PathBuf),

    #[error(transparent)]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, PlanError>;
