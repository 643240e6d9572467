// Distance ranking opmode
use clap::{value_parser, Arg, Command};

pub fn subcommand() -> Command {
    super::position_args(
        Command::new("rank")
            .short_flag('r')
            .arg_required_else_help(true)
            .about("Lists streams by increasing distance to given position")
            .long_about(
                "Lists streams by increasing distance to given position.
Equally distant streams keep their sourcetable order.
Streams with unknown coordinates come last.",
            )
            .arg(
                Arg::new("limit")
                    .long("limit")
                    .short('l')
                    .value_name("N")
                    .value_parser(value_parser!(usize))
                    .help("Only report the N nearest streams"),
            ),
    )
}
