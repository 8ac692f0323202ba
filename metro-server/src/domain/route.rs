//! Computed route results.

use super::{CostMetric, DomainError, StationId};

/// A computed route through the metro network.
///
/// Holds the ordered station path from source to destination plus the
/// totals for every cost field along it, regardless of which metric the
/// query optimized. Constructed once per request and immutable afterward.
///
/// # Invariants
///
/// - The path is never empty: length 1 for the trivial same-station
///   case, length ≥ 2 for any real trip.
/// - `stops()` always equals `path().len() - 1`.
/// - `distance()` is rounded to one decimal place; the integer fields
///   are exact sums.
#[derive(Debug, Clone, PartialEq)]
pub struct Route {
    path: Vec<StationId>,
    time: u32,
    distance: f64,
    fare: u32,
    metric: CostMetric,
}

impl Route {
    /// Constructs a route from a path and its cost totals.
    ///
    /// Rounds `distance` to one decimal place.
    ///
    /// # Errors
    ///
    /// Returns `Err` if the path is empty.
    pub fn new(
        path: Vec<StationId>,
        time: u32,
        distance: f64,
        fare: u32,
        metric: CostMetric,
    ) -> Result<Self, DomainError> {
        if path.is_empty() {
            return Err(DomainError::EmptyRoute);
        }

        Ok(Route {
            path,
            time,
            distance: round_tenths(distance),
            fare,
            metric,
        })
    }

    /// The trivial route for a same-station trip: one station, zero cost.
    pub fn trivial(station: StationId, metric: CostMetric) -> Self {
        Route {
            path: vec![station],
            time: 0,
            distance: 0.0,
            fare: 0,
            metric,
        }
    }

    /// The ordered station path, source first.
    pub fn path(&self) -> &[StationId] {
        &self.path
    }

    /// The station the route starts from.
    pub fn source(&self) -> &StationId {
        // Safe: validated non-empty at construction
        self.path.first().unwrap()
    }

    /// The station the route ends at.
    pub fn destination(&self) -> &StationId {
        // Safe: validated non-empty at construction
        self.path.last().unwrap()
    }

    /// Total travel time in minutes.
    pub fn time(&self) -> u32 {
        self.time
    }

    /// Total distance in kilometres, rounded to one decimal place.
    pub fn distance(&self) -> f64 {
        self.distance
    }

    /// Total fare in currency units.
    pub fn fare(&self) -> u32 {
        self.fare
    }

    /// Number of hops: always `path().len() - 1`.
    pub fn stops(&self) -> usize {
        self.path.len() - 1
    }

    /// The metric this route was optimized for.
    pub fn metric(&self) -> CostMetric {
        self.metric
    }

    /// True for a same-station trip (single station, no travel).
    pub fn is_trivial(&self) -> bool {
        self.path.len() == 1
    }
}

/// Round to one decimal place, matching how distances are reported.
fn round_tenths(value: f64) -> f64 {
    (value * 10.0).round() / 10.0
}
