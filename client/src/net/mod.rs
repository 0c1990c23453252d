//! Networking modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! `api` handles every REST call against the ATS backend. Wire types live in
//! `ats_core::types` so the CLI shares the same schema.

pub mod api;
