use crate::StoreArgs;
use anyhow::Context;
use clap::Parser;
use plan_core::{create_plan, template::DEFAULT_TEMPLATE, NewPlan};
use std::io::{IsTerminal as _, Read as _};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(
    name = "create-plan",
    about = "Create a plan file under $CODEX_HOME/plans or ~/.codex/plans",
    version
)]
pub struct CreateArgs {
    /// Plan name (lower-case, hyphen-delimited)
    #[arg(long)]
    pub name: String,

    /// Short, single-line plan description
    #[arg(long)]
    pub description: String,

    /// Path to markdown body (without frontmatter). If omitted, read from stdin
    #[arg(long, value_name = "PATH")]
    pub body_file: Option<PathBuf>,

    /// Write a template body instead of reading from stdin or --body-file
    #[arg(long)]
    pub template: bool,

    /// Overwrite the plan file if it already exists
    #[arg(long)]
    pub overwrite: bool,

    #[command(flatten)]
    pub store: StoreArgs,
}

pub fn run(args: CreateArgs) -> anyhow::Result<()> {
    let mut plan = NewPlan::new(args.name.as_str(), args.description.as_str())
        .with_overwrite(args.overwrite);
    plan.validate_header()?;
    plan.body = read_body(&args)?;

    let plans_dir = args.store.config().plans_dir();
    tracing::debug!(plans_dir = %plans_dir.display(), "resolved plans directory");

    let path = create_plan(&plans_dir, &plan)?;
    let path = std::path::absolute(&path).unwrap_or(path);
    println!("{}", path.display());
    Ok(())
}

/// Body source precedence: `--template`, then `--body-file`, then piped stdin.
fn read_body(args: &CreateArgs) -> anyhow::Result<Option<String>> {
    if args.template {
        return Ok(Some(DEFAULT_TEMPLATE.to_string()));
    }
    if let Some(path) = &args.body_file {
        let body = std::fs::read_to_string(path)
            .with_context(|| format!("failed to read body file '{}'", path.display()))?;
        return Ok(Some(body));
    }
    let mut stdin = std::io::stdin();
    if stdin.is_terminal() {
        return Ok(None);
    }
    let mut buf = String::new();
    stdin
        .read_to_string(&mut buf)
        .context("failed to read plan body from stdin")?;
    Ok(Some(buf))
}
