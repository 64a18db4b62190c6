//! Pulsegate Library
//!
//! Message authentication for pulse-counter telemetry over untrusted
//! channels. A constrained sender signs each reading with HMAC-SHA256 over
//! a shared secret; the receiving service recomputes the digest from the
//! same canonical bytes and compares in constant time. Both sides of that
//! agreement — canonical message format, key encoding, signature
//! rendering — live in this crate.

pub mod auth;
pub mod config;
pub mod error;
pub mod protocol;
