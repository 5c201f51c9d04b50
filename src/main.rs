use clap::Parser;
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

use probepatch::patcher::{run, RunConfig};
use probepatch::{Platform, ReapplyPolicy};

#[derive(Parser)]
#[command(name = "probepatch")]
#[command(about = "Inject probe object and header into a generated extension Makefile")]
struct Cli {
    /// Generated build descriptor to patch in place
    #[arg(short, long, env = "PROBEPATCH_MAKEFILE", default_value = "Makefile")]
    makefile: PathBuf,
    /// Target platform identifier (e.g. x86_64-linux); defaults to the host OS
    #[arg(short, long, env = "PROBEPATCH_PLATFORM")]
    platform: Option<String>,
    /// Do not insert an artifact into a line that already lists it
    #[arg(long)]
    skip_present: bool,
    /// Print the patched descriptor instead of writing it
    #[arg(long)]
    dry_run: bool,
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    let platform = cli
        .platform
        .as_deref()
        .map(Platform::from_identifier)
        .unwrap_or_else(Platform::current);

    let config = RunConfig {
        descriptor_path: cli.makefile,
        platform,
        policy: if cli.skip_present {
            ReapplyPolicy::SkipPresent
        } else {
            ReapplyPolicy::Always
        },
        dry_run: cli.dry_run,
    };

    if let Err(e) = run(&config) {
        eprintln!("Patch error: {}", e);
        std::process::exit(1);
    }
}
