//! HMAC-SHA256 signing.

use ring::hmac;

use crate::error::AuthError;
use crate::protocol::{Reading, SignedReading};

use super::canonical::canonical_message;
use super::secret::SharedSecret;
use super::signature::Signature;

/// Signs readings with a shared secret.
///
/// Pure computation: each call derives everything from its inputs and the
/// read-only key, so one signer is safely shared across threads.
pub struct Signer {
    key: hmac::Key,
}

impl Signer {
    /// Create a signer from shared-secret material.
    pub fn new(secret: &SharedSecret) -> Self {
        Self {
            key: hmac::Key::new(hmac::HMAC_SHA256, secret.as_bytes()),
        }
    }

    /// Sign a reading, producing its digest.
    ///
    /// The digest is computed in one shot over the canonical bytes; the
    /// input is small and fixed-size, so there is no streaming API.
    pub fn sign(&self, reading: &Reading) -> Result<Signature, AuthError> {
        let message = canonical_message(reading)?;
        let tag = hmac::sign(&self.key, message.as_bytes());
        Signature::from_tag(tag.as_ref())
    }

    /// Sign a reading and produce the wire tuple a sender transmits.
    pub fn sign_reading(&self, reading: &Reading) -> Result<SignedReading, AuthError> {
        let signature = self.sign(reading)?;
        Ok(SignedReading {
            device_id: reading.device_id.clone(),
            event_count: reading.event_count as i64,
            timestamp: reading.timestamp as i64,
            signature: signature.to_hex(),
        })
    }

    pub(super) fn key(&self) -> &hmac::Key {
        &self.key
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::SecretEncoding;

    fn ascii_signer(secret: &str) -> Signer {
        Signer::new(&SharedSecret::decode(secret, SecretEncoding::Ascii).unwrap())
    }

    #[test]
    fn test_sign_is_deterministic() {
        let signer = ascii_signer("b83f29aae116030da1bac6691471c8fa");
        let reading = Reading::new("SITE_001", 1, 11);

        let first = signer.sign(&reading).unwrap();
        let second = signer.sign(&reading).unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn test_sign_known_value() {
        // Pins the full pipeline: canonicalization, ASCII key bytes,
        // lowercase hex rendering.
        let signer = ascii_signer("b83f29aae116030da1bac6691471c8fa");
        let reading = Reading::new("SITE_001", 1, 11);

        assert_eq!(
            signer.sign(&reading).unwrap().to_hex(),
            "107bb32e441fde3da6c5288428effe6ba292c716c1b996fa0de377525b51a606"
        );
    }

    #[test]
    fn test_sign_rejects_malformed_device_id() {
        let signer = ascii_signer("key");
        let reading = Reading::new("SITE:001", 1, 11);
        assert!(matches!(
            signer.sign(&reading),
            Err(AuthError::Format { .. })
        ));
    }

    #[test]
    fn test_sign_reading_produces_wire_tuple() {
        let signer = ascii_signer("key");
        let reading = Reading::new("SITE_001", 10, 16);

        let signed = signer.sign_reading(&reading).unwrap();
        assert_eq!(signed.device_id, "SITE_001");
        assert_eq!(signed.event_count, 10);
        assert_eq!(signed.timestamp, 16);
        assert_eq!(signed.signature.len(), 64);
    }
}
