//! Typed domain model for dashboard computations.
//!
//! # Responsibility
//! - Define canonical task/project records used by core business logic.
//! - Keep date handling explicit: proper options internally, sentinel
//!   recognition only at the parsing edge.
//!
//! # Invariants
//! - Every domain object is identified by a stable UUID.
//! - Records are read-only snapshots; lifecycle is owned by the external API.

pub mod dates;
pub mod project;
pub mod task;
