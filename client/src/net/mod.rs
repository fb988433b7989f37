//! Networking modules for the analysis server's HTTP API.
//!
//! SYSTEM CONTEXT
//! ==============
//! `api` handles REST calls and uploads, and `types` defines the wire schema.

pub mod api;
pub mod types;
