//! Domain types for the metro route planner.
//!
//! This module contains the core domain model types that represent
//! validated transit data. All types enforce their invariants at
//! construction time, so code that receives these types can trust
//! their validity.

mod error;
mod metric;
mod route;
mod station;

pub use error::DomainError;
pub use metric::{CostMetric, UnknownMetric};
pub use route::Route;
pub use station::{InvalidStationId, StationId};
