use crate::output::{labeled_lines, print_json};
use clap::Parser;
use plan_core::{read_plan, PlanStoreConfig};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(
    name = "read-plan-frontmatter",
    about = "Read name/description from plan frontmatter",
    version
)]
pub struct ReadFrontmatterArgs {
    /// Path to the plan markdown file
    pub plan_path: PathBuf,

    /// Output as JSON
    #[arg(long, short = 'j')]
    pub json: bool,
}

pub fn run(args: ReadFrontmatterArgs) -> anyhow::Result<()> {
    let path = PlanStoreConfig::from_env().expand(&args.plan_path);
    let plan = read_plan(&path)?;

    if args.json {
        return print_json(&plan);
    }
    println!("{}", labeled_lines(&plan));
    Ok(())
}
