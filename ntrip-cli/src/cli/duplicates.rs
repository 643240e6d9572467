// Duplicate places opmode
use clap::{Arg, ArgAction, Command};

pub fn subcommand() -> Command {
    Command::new("duplicates")
        .short_flag('d')
        .about("Reports places shared by several streams")
        .long_about(
            "Reports places shared by several streams.
Places are not part of sourcetables: input must be a JSON document
enriched with places, otherwise nothing is reported.",
        )
        .arg(
            Arg::new("text")
                .long("text")
                .action(ArgAction::SetTrue)
                .help("Report as plain text instead of JSON"),
        )
}
