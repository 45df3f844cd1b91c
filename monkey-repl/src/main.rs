mod repl;
mod runner;

use std::path::PathBuf;

use clap::Parser;

#[derive(Parser)]
#[command(author, version, about)]
struct Cli {
    /// Script to execute; starts an interactive session when omitted.
    path: Option<PathBuf>,
}

fn main() {
    let cli = Cli::parse();

    match cli.path {
        None => repl::start(),
        Some(path) => {
            let source = std::fs::read_to_string(&path).unwrap_or_else(|err| {
                eprintln!("could not read {}: {}", path.display(), err);
                std::process::exit(1);
            });
            runner::execute(&source);
        }
    }
}
