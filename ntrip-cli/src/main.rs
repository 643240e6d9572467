//! Command line tool to parse and analyze NTRIP sourcetables.
//! Refer to README for command line arguments.

mod cli; // command line interface
mod opmode;

use std::{
    fs::File,
    io::{BufReader, BufWriter, Write},
    path::Path,
};

use cli::Cli;
use ntrip_sourcetable::prelude::{Parser, SourceTable};

use env_logger::{Builder, Target};

#[macro_use]
extern crate log;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    #[error("i/o error")]
    StdioError(#[from] std::io::Error),
    #[error("sourcetable error")]
    SourceTableError(#[from] ntrip_sourcetable::Error),
    #[error("json error")]
    JsonError(#[from] serde_json::Error),
    #[error("missing input file")]
    MissingInput,
    #[error("missing query position")]
    MissingPosition,
    #[error("no stream with known coordinates")]
    NoStreamFound,
}

/*
 * Loads the input file: JSON document or sourcetable
 */
fn load_input(path: &Path, parser: &Parser) -> Result<SourceTable, Error> {
    let is_json = path
        .extension()
        .map(|ext| ext.eq_ignore_ascii_case("json"))
        .unwrap_or(false);

    let table = if is_json {
        let fd = File::open(path)?;
        serde_json::from_reader(BufReader::new(fd))?
    } else {
        SourceTable::from_file_observed(path, parser, |diagnostic| {
            warn!("{}: {}", path.display(), diagnostic)
        })?
    };

    info!(
        "loaded \"{}\": {} stream(s)",
        path.display(),
        table.streams.len()
    );
    if let Some(caster) = &table.caster {
        debug!("caster: {}", caster.identifier);
    }
    if let Some(network) = &table.network {
        debug!("network: {}", network.identifier);
    }
    Ok(table)
}

/*
 * Report destination: stdout or file defined by user
 */
fn output(cli: &Cli) -> Result<Box<dyn Write>, Error> {
    match cli.output_path() {
        Some(path) => {
            let fd = File::create(path)?;
            info!("writing \"{}\"", path.display());
            Ok(Box::new(BufWriter::new(fd)))
        },
        None => Ok(Box::new(std::io::stdout())),
    }
}

pub fn main() -> Result<(), Error> {
    let mut builder = Builder::from_default_env();
    builder
        .target(Target::Stderr)
        .format_timestamp_secs()
        .format_module_path(false)
        .init();

    let cli = Cli::new();
    let path = cli.input_path().ok_or(Error::MissingInput)?;
    let table = load_input(path, &cli.parser())?;

    let mut writer = output(&cli)?;

    match cli.matches.subcommand() {
        Some(("json", submatches)) => {
            opmode::json(&table, submatches, &mut writer)?;
        },
        Some(("nearest", submatches)) => {
            opmode::nearest(&table, submatches, &mut writer)?;
        },
        Some(("rank", submatches)) => {
            opmode::rank(&table, submatches, &mut writer)?;
        },
        Some(("duplicates", submatches)) => {
            opmode::duplicates(&table, submatches, &mut writer)?;
        },
        _ => error!("no opmode selected"),
    }

    writer.flush()?;
    Ok(())
}
