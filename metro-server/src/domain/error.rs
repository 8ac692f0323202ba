//! Domain error types.
//!
//! These errors represent validation failures in the domain layer.
//! They are distinct from planning failures (no route) and web errors.

/// Domain-level errors for validation and data consistency.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum DomainError {
    /// Route has no stations
    #[error("route must contain at least one station")]
    EmptyRoute,
}
