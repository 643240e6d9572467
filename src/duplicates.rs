//! Streams sharing the same place
use std::collections::HashMap;

use crate::stream::StreamRecord;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// A place shared by several streams
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
pub struct DuplicatePlace {
    /// Place name
    pub place: String,
    /// Number of streams resolving to this place
    pub count: usize,
    /// Mount points of these streams, in order of appearance
    pub mount_points: Vec<String>,
}

/// [PlaceGroups] groups mount points by place, keeping the
/// order in which places were first encountered. It can be fed
/// incrementally and merged, which allows grouping several tables.
#[derive(Clone, Debug, Default)]
pub struct PlaceGroups {
    index: HashMap<String, usize>,
    groups: Vec<(String, Vec<String>)>,
}

impl PlaceGroups {
    /// Builds an empty [PlaceGroups]
    pub fn new() -> Self {
        Self::default()
    }

    /// Groups given streams
    pub fn from_streams<'a, I>(streams: I) -> Self
    where
        I: IntoIterator<Item = &'a StreamRecord>,
    {
        let mut s = Self::new();
        for stream in streams {
            s.insert(stream);
        }
        s
    }

    /// Registers one stream. Streams without place,
    /// or with an empty place name, are ignored.
    pub fn insert(&mut self, stream: &StreamRecord) {
        let place = match stream.place.as_deref() {
            Some(place) if !place.is_empty() => place,
            _ => return,
        };
        self.push(place, stream.mount_point.clone());
    }

    fn push(&mut self, place: &str, mount_point: String) {
        match self.index.get(place).copied() {
            Some(pos) => self.groups[pos].1.push(mount_point),
            None => {
                self.index.insert(place.to_string(), self.groups.len());
                self.groups.push((place.to_string(), vec![mount_point]));
            },
        }
    }

    /// Merges `rhs` into Self. Places new to Self are
    /// appended in `rhs` order.
    pub fn merge(&mut self, rhs: &Self) {
        for (place, mount_points) in rhs.groups.iter() {
            for mount_point in mount_points {
                self.push(place, mount_point.clone());
            }
        }
    }

    /// Number of distinct places
    pub fn len(&self) -> usize {
        self.groups.len()
    }

    /// True if no place was registered
    pub fn is_empty(&self) -> bool {
        self.groups.is_empty()
    }

    /// Mount points registered for given place
    pub fn mount_points(&self, place: &str) -> Option<&[String]> {
        let pos = self.index.get(place)?;
        Some(&self.groups[*pos].1)
    }

    /// Returns places shared by more than one stream,
    /// in order of first appearance
    pub fn duplicates(&self) -> Vec<DuplicatePlace> {
        self.groups
            .iter()
            .filter(|(_, mount_points)| mount_points.len() > 1)
            .map(|(place, mount_points)| DuplicatePlace {
                place: place.clone(),
                count: mount_points.len(),
                mount_points: mount_points.clone(),
            })
            .collect()
    }
}

/// Returns places shared by more than one stream, in order of
/// first appearance. Mount points are not deduplicated: a mount point
/// published twice under the same place counts twice.
pub fn find_duplicate_places<'a, I>(streams: I) -> Vec<DuplicatePlace>
where
    I: IntoIterator<Item = &'a StreamRecord>,
{
    PlaceGroups::from_streams(streams).duplicates()
}
