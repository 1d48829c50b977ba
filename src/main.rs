use clap::Parser;
use focusup::cli::{self, Cli, Command};

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Command::Register(args) => cli::users::register(args),
        Command::Find(args) => cli::users::find(args),
        Command::Users => cli::users::list(),
        Command::Navigate(args) => cli::navigate::run(args),
    }
}
