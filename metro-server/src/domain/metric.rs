//! Cost metric selection.

use std::fmt;

/// Error returned when parsing an unknown metric name.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown cost metric: {name}")]
pub struct UnknownMetric {
    name: String,
}

/// The edge-cost field a route query optimizes.
///
/// The planner is metric-agnostic: it minimizes whichever field the
/// request selects, then reports totals for all fields along the chosen
/// path. The web surface currently only exposes `Time` ("fastest"), but
/// the other variants work identically.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum CostMetric {
    /// Minimize total travel time ("fastest").
    #[default]
    Time,
    /// Minimize total distance ("shortest").
    Distance,
    /// Minimize total fare ("cheapest").
    Fare,
}

impl CostMetric {
    /// Parse a metric from its route-type label.
    pub fn parse(s: &str) -> Result<Self, UnknownMetric> {
        match s {
            "fastest" | "time" => Ok(CostMetric::Time),
            "shortest" | "distance" => Ok(CostMetric::Distance),
            "cheapest" | "fare" => Ok(CostMetric::Fare),
            other => Err(UnknownMetric {
                name: other.to_string(),
            }),
        }
    }

    /// The route-type label reported alongside results.
    pub fn label(&self) -> &'static str {
        match self {
            CostMetric::Time => "fastest",
            CostMetric::Distance => "shortest",
            CostMetric::Fare => "cheapest",
        }
    }
}

impl fmt::Display for CostMetric {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}
