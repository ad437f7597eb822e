//! Visual layout geometry.
//!
//! # Responsibility
//! - Compute the percentage and coordinate geometry the UI's timeline and
//!   mountain views render.
//!
//! # Invariants
//! - Layout functions are pure: same inputs, same geometry, no clock reads.
//! - Out-of-window and empty inputs produce "draw nothing" results, never
//!   errors.

pub mod mountain;
pub mod timeline;
