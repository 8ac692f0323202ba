//! Web layer: axum router, handlers, DTOs and shared state.

mod dto;
mod routes;
mod state;

pub use dto::{PlanRouteRequest, RouteResult};
pub use routes::{AppError, create_router};
pub use state::AppState;
