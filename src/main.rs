use clap::Parser;

use commit_guard::cli::{Cli, Commands};
use commit_guard::commands::{run_checks, run_config, run_hook, run_plan};
use commit_guard::logging;

fn main() {
    let cli = Cli::parse();

    if let Err(e) = logging::init(cli.verbose, cli.log_file.as_deref()) {
        eprintln!("Warning: {e}");
    }

    let exit_code = match &cli.command {
        Commands::Run(args) => run_hook(args, &cli),
        Commands::Plan(args) => run_plan(args, &cli),
        Commands::Checks => run_checks(),
        Commands::Config(args) => run_config(args),
    };

    std::process::exit(exit_code);
}
