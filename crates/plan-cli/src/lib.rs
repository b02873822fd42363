pub mod cmd;
pub mod output;

use clap::Args;
use plan_core::PlanStoreConfig;
use std::path::PathBuf;
use tracing_subscriber::filter::LevelFilter;
use tracing_subscriber::EnvFilter;

/// Options shared by every plan command.
#[derive(Args, Debug, Clone, Default)]
pub struct StoreArgs {
    /// Root directory holding `plans/` (default: ~/.codex)
    #[arg(long, env = "CODEX_HOME", value_name = "DIR")]
    pub codex_home: Option<PathBuf>,
}

impl StoreArgs {
    pub fn config(&self) -> PlanStoreConfig {
        PlanStoreConfig::from_env().with_codex_home(self.codex_home.clone())
    }
}

/// Install the stderr log subscriber. `RUST_LOG` overrides the WARN default.
pub fn init_tracing() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::builder()
                .with_default_directive(LevelFilter::WARN.into())
                .from_env_lossy(),
        )
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();
}

/// Print the error chain and exit non-zero, or return on success.
pub fn exit_on_error(result: anyhow::Result<()>) {
    if let Err(e) = result {
        // Print the full error chain (anyhow's alternate Display)
        eprintln!("error: {e:#}");
        std::process::exit(1);
    }
}
