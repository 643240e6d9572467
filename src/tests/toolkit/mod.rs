use crate::prelude::*;
use std::path::PathBuf;

/// Returns path to given test resource
pub fn test_resource(kind: &str, name: &str) -> PathBuf {
    PathBuf::new()
        .join(env!("CARGO_MANIFEST_DIR"))
        .join("test_resources")
        .join(kind)
        .join(name)
}

/// Loads given sourcetable test resource, with given parser
pub fn load_sourcetable(name: &str, parser: &Parser) -> SourceTable {
    let path = test_resource("SOURCETABLE", name);
    let table = SourceTable::from_file_with(&path, parser);
    assert!(
        table.is_ok(),
        "error parsing \"{}\": {:?}",
        path.display(),
        table.err().unwrap()
    );
    table.unwrap()
}

/// Compares two tables, considering NaN coordinates equal
pub fn assert_same_table(lhs: &SourceTable, rhs: &SourceTable) {
    assert_eq!(lhs.streams.len(), rhs.streams.len(), "streams count mismatch");
    for (a, b) in lhs.streams.iter().zip(rhs.streams.iter()) {
        assert_eq!(format!("{:?}", a), format!("{:?}", b));
    }
    assert_eq!(format!("{:?}", lhs.caster), format!("{:?}", rhs.caster));
    assert_eq!(lhs.network, rhs.network);
}

/// Builds a stream located at given coordinates
pub fn located_stream(mount_point: &str, latitude: f64, longitude: f64) -> StreamRecord {
    StreamRecord {
        mount_point: mount_point.to_string(),
        latitude,
        longitude,
        ..Default::default()
    }
}
