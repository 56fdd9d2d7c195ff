use clap::Parser;
use vkey_scripts::{cli::Cli, errors::ScriptError};

fn main() -> Result<(), ScriptError> {
    let Cli { command } = Cli::parse();

    tracing_subscriber::fmt().pretty().init();

    command.run()
}
