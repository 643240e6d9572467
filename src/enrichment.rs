//! Place enrichment.
//!
//! Streams do not carry place names: these are obtained from an external
//! reverse geocoder, abstracted by the [PlaceResolver] trait. Enrichment
//! never mutates its input, it returns enriched copies.
use std::{
    fmt::Display,
    time::{Duration, Instant},
};

use crate::{
    position::{GeoPosition, Positioned},
    stream::StreamRecord,
};

#[cfg(feature = "log")]
use log::{debug, warn};

/// Minimal delay between two requests, as public
/// geocoding services usually require
pub const DEFAULT_PACING: Duration = Duration::from_secs(1);

/// Resolves a position to a place name.
pub trait PlaceResolver {
    /// Resolution error
    type Error: Display;
    /// Returns the place name for given position,
    /// [None] when the position does not resolve to a place.
    fn resolve(&mut self, position: GeoPosition) -> Result<Option<String>, Self::Error>;
}

/// [PlaceResolver] built from a closure, see [from_fn]
#[derive(Clone)]
pub struct FromFn<F> {
    f: F,
}

/// Builds a [PlaceResolver] from given closure
pub fn from_fn<F, E>(f: F) -> FromFn<F>
where
    F: FnMut(GeoPosition) -> Result<Option<String>, E>,
    E: Display,
{
    FromFn { f }
}

impl<F, E> PlaceResolver for FromFn<F>
where
    F: FnMut(GeoPosition) -> Result<Option<String>, E>,
    E: Display,
{
    type Error = E;
    fn resolve(&mut self, position: GeoPosition) -> Result<Option<String>, E> {
        (self.f)(position)
    }
}

/// [Paced] wraps a [PlaceResolver] and guarantees a minimal delay
/// between the start of two successive resolutions.
/// The calling thread sleeps when needed.
pub struct Paced<R> {
    inner: R,
    interval: Duration,
    last: Option<Instant>,
}

impl<R: PlaceResolver> Paced<R> {
    /// Wraps `inner` with [DEFAULT_PACING]
    pub fn new(inner: R) -> Self {
        Self::with_interval(inner, DEFAULT_PACING)
    }
    /// Wraps `inner` with a custom delay
    pub fn with_interval(inner: R, interval: Duration) -> Self {
        Self {
            inner,
            interval,
            last: None,
        }
    }
    /// Returns the minimal delay between two resolutions
    pub fn interval(&self) -> Duration {
        self.interval
    }
    /// Unwraps the inner resolver
    pub fn into_inner(self) -> R {
        self.inner
    }
}

impl<R: PlaceResolver> PlaceResolver for Paced<R> {
    type Error = R::Error;
    fn resolve(&mut self, position: GeoPosition) -> Result<Option<String>, Self::Error> {
        if let Some(last) = self.last {
            let elapsed = last.elapsed();
            if elapsed < self.interval {
                std::thread::sleep(self.interval - elapsed);
            }
        }
        self.last = Some(Instant::now());
        self.inner.resolve(position)
    }
}

/// Returns a copy of each stream carrying the place name returned by
/// `resolver`, in input order. Streams with unknown coordinates are not
/// submitted and get no place. A resolution error leaves the place
/// unset and enrichment carries on with the next stream.
pub fn enrich_streams<'a, I, R>(streams: I, resolver: &mut R) -> Vec<StreamRecord>
where
    I: IntoIterator<Item = &'a StreamRecord>,
    R: PlaceResolver + ?Sized,
{
    streams
        .into_iter()
        .map(|stream| {
            let position = stream.position();
            if !position.is_finite() {
                #[cfg(feature = "log")]
                debug!("{}: unknown position, not resolved", stream.mount_point);
                return stream.with_place(None);
            }
            match resolver.resolve(position) {
                Ok(place) => stream.with_place(place),
                Err(e) => {
                    #[cfg(feature = "log")]
                    warn!("{}: failed to resolve place: {}", stream.mount_point, e);
                    #[cfg(not(feature = "log"))]
                    let _ = e;
                    stream.with_place(None)
                },
            }
        })
        .collect()
}
