//! mazepath — find the shortest path through a grid maze.

use std::io;
use std::process::ExitCode;

use mazepath_lib::config::{self, Command, USAGE};
use mazepath_lib::{Status, logger, run};

fn main() -> ExitCode {
    let config = match config::parse_args(std::env::args().skip(1)) {
        Ok(Command::Run(config)) => config,
        Ok(Command::Help) => {
            print!("{USAGE}");
            return ExitCode::SUCCESS;
        }
        Err(e) => {
            eprintln!("mazepath: {e}");
            eprintln!("Try 'mazepath --help' for more information.");
            return ExitCode::from(2);
        }
    };

    if let Err(e) = logger::init(config.verbosity) {
        eprintln!("mazepath: logging disabled: {e}");
    }

    let stdout = io::stdout();
    match run::run(&config, io::stdin().lock(), &mut stdout.lock()) {
        Ok(Status::Found) => ExitCode::SUCCESS,
        Ok(Status::NoPath) => ExitCode::from(1),
        Err(e) => {
            eprintln!("mazepath: {e}");
            ExitCode::from(e.exit_code())
        }
    }
}
