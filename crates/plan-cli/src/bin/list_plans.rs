use clap::Parser;
use plan_cli::cmd::list::{self, ListArgs};

fn main() {
    let args = ListArgs::parse();
    plan_cli::init_tracing();
    plan_cli::exit_on_error(list::run(args));
}
