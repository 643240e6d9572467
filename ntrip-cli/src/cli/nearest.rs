// Nearest stream opmode
use clap::Command;

pub fn subcommand() -> Command {
    super::position_args(
        Command::new("nearest")
            .short_flag('n')
            .arg_required_else_help(true)
            .about("Reports the stream nearest to given position")
            .long_about(
                "Reports the stream nearest to given position, with its great circle distance.
Streams with unknown coordinates are never selected.",
            ),
    )
}
