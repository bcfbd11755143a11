//! Providers pluggable through configuration.

pub mod pki_agent;
pub mod signature_store;
