//! Derived progress metrics.
//!
//! # Responsibility
//! - Provide the pure completion, elapsed-time and deadline computations the
//!   dashboard renders.
//!
//! # Invariants
//! - Every function here is a side-effect-free function of its inputs plus an
//!   explicit `today` snapshot; none reads the clock or performs I/O.
//! - Percent outputs are integers in `0..=100`; missing input yields neutral
//!   defaults, never errors.

pub mod deadline;
pub mod progress;
pub mod time_progress;
