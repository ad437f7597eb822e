//! Core use-case services.
//!
//! # Responsibility
//! - Orchestrate metric and layout computations into screen-level views.
//! - Keep UI/FFI layers decoupled from individual computation modules.

pub mod dashboard_service;
