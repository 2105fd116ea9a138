mod check_cmd;
mod cli;
mod name_checker;
mod shared;

use clap::Parser;
use cli::Cli;

fn main() {
    let cli = Cli::parse();
    shared::init_logging();

    let result = match cli.command {
        cli::Commands::Check(ref args) => check_cmd::run(args),
    };

    if let Err(code) = result {
        std::process::exit(code);
    }
}
