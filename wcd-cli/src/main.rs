//! WCD CLI - derives the crayfish dashboard view models from the source exports.

use clap::Parser;

#[derive(Parser)]
#[command(
    name = "wcd-cli",
    version,
    about = "Waternet crayfish dashboard data toolkit"
)]
struct Cli {
    #[command(subcommand)]
    command: wcd_cmd::Command,
}

fn main() -> anyhow::Result<()> {
    env_logger::init();
    let cli = Cli::parse();
    wcd_cmd::run(cli.command)
}
