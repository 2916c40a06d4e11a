//! Core types and service wiring for the caneca fleet-operations model.

/// Domain models for crews, trucks, routes, shifts, and ledgers.
pub mod model;
/// Trait seams for collection actions and their quantity sources.
pub mod action;
/// One-slot dispatcher triggering collection actions.
pub mod dispatch;
/// Pure format validators for plates, person ids, and shift date/times.
pub mod validate;
/// Date-scoped aggregation over recorded shifts.
pub mod report;
/// High-level service facade used by clients.
pub mod service;

pub use action::*;
pub use dispatch::*;
pub use model::*;
pub use report::*;
pub use service::*;
pub use validate::*;
