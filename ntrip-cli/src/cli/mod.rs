use std::{path::PathBuf, str::FromStr};

use clap::{value_parser, Arg, ArgAction, ArgMatches, ColorChoice, Command};

use ntrip_sourcetable::prelude::{GeoPosition, Parser, SingletonPolicy};

mod duplicates;
mod json;
mod nearest;
mod rank;

pub struct Cli {
    /// Arguments passed by user
    pub matches: ArgMatches,
}

impl Default for Cli {
    fn default() -> Self {
        Self::new()
    }
}

/// Query point, shared by "nearest" and "rank"
pub(crate) fn position_args(cmd: Command) -> Command {
    cmd.arg(
        Arg::new("lat")
            .long("lat")
            .value_name("DEGREES")
            .required(true)
            .allow_negative_numbers(true)
            .value_parser(value_parser!(f64))
            .help("Latitude of the query point, in decimal degrees (north positive)"),
    )
    .arg(
        Arg::new("lon")
            .long("lon")
            .value_name("DEGREES")
            .required(true)
            .allow_negative_numbers(true)
            .value_parser(value_parser!(f64))
            .help("Longitude of the query point, in decimal degrees (east positive)"),
    )
    .arg(
        Arg::new("json")
            .long("json")
            .action(ArgAction::SetTrue)
            .help("Report as JSON instead of plain text"),
    )
}

impl Cli {
    /// Build new command line interface
    pub fn new() -> Self {
        let cmd = Command::new("ntrip-cli")
            .version(env!("CARGO_PKG_VERSION"))
            .about("NTRIP sourcetable analysis")
            .long_about(
                "ntrip-cli parses NTRIP sourcetables, converts them to JSON,
searches for the streams nearest to a position and reports
places shared by several streams.",
            )
            .arg_required_else_help(true)
            .subcommand_required(true)
            .color(ColorChoice::Always)
            .next_help_heading("Input")
            .arg(
                Arg::new("filepath")
                    .long("fp")
                    .short('f')
                    .value_name("FILE")
                    .required(true)
                    .value_parser(value_parser!(PathBuf))
                    .help("Sourcetable (plain or .gz) or JSON document (.json). See --help.")
                    .long_help(
                        "Sourcetable files are parsed line by line, their HTTP header
and ENDSOURCETABLE marker are ignored.
Files ending with .json are considered to be documents
generated by the json opmode, possibly enriched with places.

Example:
ntrip-cli -f test_resources/SOURCETABLE/asg-eupos.txt json",
                    ),
            )
            .next_help_heading("Parser")
            .arg(
                Arg::new("lenient")
                    .long("lenient")
                    .action(ArgAction::SetTrue)
                    .help("Accept STR lines with fewer than 12 fields."),
            )
            .arg(
                Arg::new("singleton")
                    .long("singleton")
                    .value_name("POLICY")
                    .value_parser(["last", "first", "reject"])
                    .default_value("last")
                    .help("Handling of repeated CAS / NET records."),
            )
            .next_help_heading("Output")
            .arg(
                Arg::new("output")
                    .long("output")
                    .short('o')
                    .value_name("FILE")
                    .value_parser(value_parser!(PathBuf))
                    .help("Write report to FILE instead of stdout."),
            )
            .subcommand(json::subcommand())
            .subcommand(nearest::subcommand())
            .subcommand(rank::subcommand())
            .subcommand(duplicates::subcommand());
        Self {
            matches: cmd.get_matches(),
        }
    }
    /// Input file path
    pub fn input_path(&self) -> Option<&PathBuf> {
        self.matches.get_one::<PathBuf>("filepath")
    }
    /// Custom output file, stdout otherwise
    pub fn output_path(&self) -> Option<&PathBuf> {
        self.matches.get_one::<PathBuf>("output")
    }
    /// Sourcetable parser, as defined by user
    pub fn parser(&self) -> Parser {
        let parser = if self.matches.get_flag("lenient") {
            Parser::lenient()
        } else {
            Parser::default()
        };
        let policy = self
            .matches
            .get_one::<String>("singleton")
            .and_then(|policy| SingletonPolicy::from_str(policy).ok())
            .unwrap_or_default();
        parser.with_singleton_policy(policy)
    }
}

/// Query point defined by user
pub fn query_position(matches: &ArgMatches) -> Option<GeoPosition> {
    let lat = matches.get_one::<f64>("lat")?;
    let lon = matches.get_one::<f64>("lon")?;
    Some(GeoPosition::new(*lat, *lon))
}

/// True when user prefers a JSON report
pub fn json_report(matches: &ArgMatches) -> bool {
    matches.get_flag("json")
}
