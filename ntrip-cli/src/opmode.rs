//! Opmodes: one report per subcommand
use std::io::Write;

use clap::ArgMatches;
use itertools::Itertools;
use serde::Serialize;

use ntrip_sourcetable::prelude::{SourceTable, StreamRecord};

use crate::{
    cli::{json_report, query_position},
    Error,
};

/// Stream reported with its distance to the query point
#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct LocatedStream<'a> {
    #[serde(flatten)]
    stream: &'a StreamRecord,
    /// Great circle distance, null when coordinates are unknown
    distance_km: f64,
}

fn describe(stream: &StreamRecord, distance_km: f64) -> String {
    let distance = if distance_km.is_nan() {
        "unknown distance".to_string()
    } else {
        format!("{:.3} km", distance_km)
    };
    format!(
        "{} ({}, {}) {}",
        stream.mount_point,
        stream.identifier,
        [stream.format.as_str(), stream.nav_system.as_str()]
            .iter()
            .filter(|s| !s.is_empty())
            .join(" "),
        distance
    )
}

/// Sourcetable to JSON document
pub fn json<W: Write>(table: &SourceTable, matches: &ArgMatches, w: &mut W) -> Result<(), Error> {
    if matches.get_flag("compact") {
        serde_json::to_writer(&mut *w, table)?;
    } else {
        serde_json::to_writer_pretty(&mut *w, table)?;
    }
    writeln!(w)?;
    Ok(())
}

/// Nearest stream report
pub fn nearest<W: Write>(
    table: &SourceTable,
    matches: &ArgMatches,
    w: &mut W,
) -> Result<(), Error> {
    let position = query_position(matches).ok_or(Error::MissingPosition)?;
    let (stream, distance_km) = table
        .nearest_stream_with_distance(position)
        .ok_or(Error::NoStreamFound)?;

    info!("nearest stream to {}: {}", position, stream.mount_point);

    if json_report(matches) {
        serde_json::to_writer_pretty(
            &mut *w,
            &LocatedStream {
                stream,
                distance_km,
            },
        )?;
        writeln!(w)?;
    } else {
        writeln!(w, "{}", describe(stream, distance_km))?;
    }
    Ok(())
}

/// Distance ranking report
pub fn rank<W: Write>(table: &SourceTable, matches: &ArgMatches, w: &mut W) -> Result<(), Error> {
    let position = query_position(matches).ok_or(Error::MissingPosition)?;
    let limit = matches
        .get_one::<usize>("limit")
        .copied()
        .unwrap_or(table.streams.len());

    let ranked = table
        .ranked_streams(position)
        .into_iter()
        .take(limit)
        .map(|(stream, distance_km)| LocatedStream {
            stream,
            distance_km,
        })
        .collect::<Vec<_>>();

    if json_report(matches) {
        serde_json::to_writer_pretty(&mut *w, &ranked)?;
        writeln!(w)?;
    } else {
        for (nth, located) in ranked.iter().enumerate() {
            writeln!(
                w,
                "{:>4}. {}",
                nth + 1,
                describe(located.stream, located.distance_km)
            )?;
        }
    }
    Ok(())
}

/// Duplicate places report
pub fn duplicates<W: Write>(
    table: &SourceTable,
    matches: &ArgMatches,
    w: &mut W,
) -> Result<(), Error> {
    if table.streams.iter().all(|s| s.place.is_none()) {
        warn!("streams are not enriched with places: nothing to report");
    }

    let duplicates = table.duplicate_places();
    info!("{} place(s) shared by several streams", duplicates.len());

    if matches.get_flag("text") {
        for duplicate in duplicates.iter() {
            writeln!(
                w,
                "{} ({}): {}",
                duplicate.place,
                duplicate.count,
                duplicate.mount_points.iter().join(", ")
            )?;
        }
    } else {
        serde_json::to_writer_pretty(&mut *w, &duplicates)?;
        writeln!(w)?;
    }
    Ok(())
}
