//! Authentication core.
//!
//! Canonical message construction, HMAC-SHA256 signing and verification,
//! plus the freshness-window helper and the known-answer backend check.
//! Every operation is a pure function of its inputs and the read-only
//! secret; nothing here holds state between calls.

mod canonical;
mod freshness;
mod secret;
mod selftest;
mod signature;
mod signer;
mod verifier;

pub use canonical::{canonical_message, validate_device_id, FIELD_DELIMITER};
pub use freshness::FreshnessWindow;
pub use secret::SharedSecret;
pub use selftest::verify_hmac_backend;
pub use signature::{Signature, SIGNATURE_HEX_LEN, SIGNATURE_LEN};
pub use signer::Signer;
pub use verifier::Verifier;
