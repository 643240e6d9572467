// Sourcetable to JSON opmode
use clap::{Arg, ArgAction, Command};

pub fn subcommand() -> Command {
    Command::new("json")
        .short_flag('j')
        .about("Converts the sourcetable to a JSON document")
        .arg(
            Arg::new("compact")
                .long("compact")
                .action(ArgAction::SetTrue)
                .help("Single line document, instead of pretty printing"),
        )
}
