//! Core library for the document workflow service.
//!
//! The interesting machinery lives under [`workflows`]: a rule-based engine
//! that turns template variable names into typed form-field configurations,
//! and the reversible HIYES document-number codec. Everything here is pure and
//! synchronous; persistence, file storage, and rendering are handled by
//! external collaborators.

pub mod config;
pub mod error;
pub mod telemetry;
pub mod workflows;
