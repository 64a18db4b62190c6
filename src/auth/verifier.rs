//! Signature verification.

use ring::hmac;
use tracing::{debug, warn};

use crate::error::{AuthError, VerificationFailure};
use crate::protocol::SignedReading;

use super::secret::SharedSecret;
use super::signature::Signature;
use super::signer::Signer;

/// Verifies signed readings against a shared secret.
///
/// Stateless across calls: no nonce cache, no counters. A successful
/// verification proves integrity and authenticity of the reading tuple;
/// freshness of the timestamp is the caller's policy (see
/// [`FreshnessWindow`](super::FreshnessWindow)).
pub struct Verifier {
    signer: Signer,
}

impl Verifier {
    /// Create a verifier from shared-secret material.
    pub fn new(secret: &SharedSecret) -> Self {
        Self {
            signer: Signer::new(secret),
        }
    }

    /// Verify a signed reading.
    ///
    /// Validates the fields, recomputes the expected digest over the
    /// canonical bytes, and compares in constant time. The comparison must
    /// not short-circuit on the first mismatching byte: a timing oracle
    /// over partial matches lets an attacker forge signatures one byte at
    /// a time. `ring::hmac::verify` provides the constant-time compare.
    ///
    /// On mismatch the returned failure carries the message fields for
    /// logging, never the expected digest.
    pub fn verify(&self, signed: &SignedReading) -> Result<(), AuthError> {
        let reading = signed.reading()?;
        let message = super::canonical::canonical_message(&reading)?;
        let signature = Signature::parse(&signed.signature)?;

        hmac::verify(self.signer.key(), message.as_bytes(), signature.as_bytes()).map_err(
            |_| {
                warn!(
                    device_id = %reading.device_id,
                    event_count = reading.event_count,
                    timestamp = reading.timestamp,
                    "signature mismatch"
                );
                AuthError::Verification {
                    failure: VerificationFailure {
                        device_id: reading.device_id.clone(),
                        event_count: reading.event_count,
                        timestamp: reading.timestamp,
                    },
                }
            },
        )?;

        debug!(
            device_id = %reading.device_id,
            event_count = reading.event_count,
            timestamp = reading.timestamp,
            "signature verified"
        );

        Ok(())
    }
}
