use clap::Parser;
use plan_cli::cmd::create::{self, CreateArgs};

fn main() {
    let args = CreateArgs::parse();
    plan_cli::init_tracing();
    plan_cli::exit_on_error(create::run(args));
}
