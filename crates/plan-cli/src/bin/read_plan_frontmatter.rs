use clap::Parser;
use plan_cli::cmd::read_frontmatter::{self, ReadFrontmatterArgs};

fn main() {
    let args = ReadFrontmatterArgs::parse();
    plan_cli::init_tracing();
    plan_cli::exit_on_error(read_frontmatter::run(args));
}
