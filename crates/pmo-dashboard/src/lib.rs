//! Core library for the university PMO monitoring dashboard. The only
//! subsystem with real decision logic lives in
//! [`workflows::prioritization`]; everything else here is the ambient
//! configuration, telemetry, and error plumbing shared with the service
//! binary.

pub mod config;
pub mod error;
pub mod telemetry;
pub mod workflows;
