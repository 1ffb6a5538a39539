use clap::Parser;

mod cli;
mod cmd;
mod error;
mod format;
mod io;

use cli::{Cli, Command};

fn main() {
    let cli = Cli::parse();

    let result = match cli.command {
        Command::Run(args) => cmd::run::run(&args),
        Command::Report(args) => cmd::report::run(&args),
        Command::Version => {
            println!("{}", dsulab_core::version());
            Ok(())
        }
    };

    if let Err(err) = result {
        eprintln!("{}", err.message());
        std::process::exit(err.exit_code());
    }
}
