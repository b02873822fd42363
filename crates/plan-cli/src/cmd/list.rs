use crate::output::{print_json, tab_line};
use crate::StoreArgs;
use clap::Parser;
use plan_core::list_plans;

#[derive(Parser, Debug)]
#[command(
    name = "list-plans",
    about = "List plan summaries from $CODEX_HOME/plans",
    version
)]
pub struct ListArgs {
    /// Case-insensitive substring to filter name/description
    #[arg(long)]
    pub query: Option<String>,

    /// Output as JSON
    #[arg(long, short = 'j')]
    pub json: bool,

    #[command(flatten)]
    pub store: StoreArgs,
}

pub fn run(args: ListArgs) -> anyhow::Result<()> {
    let plans_dir = args.store.config().plans_dir();
    let plans = list_plans(&plans_dir, args.query.as_deref())?;

    if args.json {
        return print_json(&plans);
    }
    for plan in &plans {
        println!("{}", tab_line(plan));
    }
    Ok(())
}
