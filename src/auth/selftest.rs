//! Known-answer validation of the HMAC backend.
//!
//! Recomputes published RFC 4231 HMAC-SHA256 vectors. A failure here means
//! the cryptographic backend itself is broken, which is a different
//! diagnosis from "the two endpoints disagree on canonicalization or key
//! encoding" — the vectors use fixed raw keys, so no application
//! configuration can influence the outcome.

use ring::hmac;

use crate::error::AuthError;

/// One published HMAC-SHA256 test vector.
struct KnownAnswer {
    name: &'static str,
    key: &'static [u8],
    message: &'static [u8],
    digest_hex: &'static str,
}

/// RFC 4231 test cases 1-4.
const RFC4231_VECTORS: &[KnownAnswer] = &[
    KnownAnswer {
        name: "rfc4231-case-1",
        key: &[0x0b; 20],
        message: b"Hi There",
        digest_hex: "b0344c61d8db38535ca8afceaf0bf12b881dc200c9833da726e9376c2e32cff7",
    },
    KnownAnswer {
        name: "rfc4231-case-2",
        key: b"Jefe",
        message: b"what do ya want for nothing?",
        digest_hex: "5bdcc146bf60754e6a042426089575c75a003f089d2739839dec58b964ec3843",
    },
    KnownAnswer {
        name: "rfc4231-case-3",
        key: &[0xaa; 20],
        message: &[0xdd; 50],
        digest_hex: "773ea91e36800e46854db8ebd09181a72959098b3ef8c122d9635514ced565fe",
    },
    KnownAnswer {
        name: "rfc4231-case-4",
        key: &[
            0x01, 0x02, 0x03, 0x04, 0x05, 0x06, 0x07, 0x08, 0x09, 0x0a, 0x0b, 0x0c, 0x0d,
            0x0e, 0x0f, 0x10, 0x11, 0x12, 0x13, 0x14, 0x15, 0x16, 0x17, 0x18, 0x19,
        ],
        message: &[0xcd; 50],
        digest_hex: "82558a389a443c0ea4cc819899f2083a85f0faa3e578f8077a2e3ff46729665b",
    },
];

/// Verify the HMAC-SHA256 backend against the RFC 4231 vectors.
///
/// Intended to run once at process start, before any device traffic is
/// accepted. The error names the failing vector, never key material.
pub fn verify_hmac_backend() -> Result<(), AuthError> {
    for vector in RFC4231_VECTORS {
        let key = hmac::Key::new(hmac::HMAC_SHA256, vector.key);
        let tag = hmac::sign(&key, vector.message);
        let computed = hex::encode(tag.as_ref());

        if computed != vector.digest_hex {
            return Err(AuthError::Config {
                message: format!(
                    "HMAC backend failed known-answer vector '{}'",
                    vector.name
                ),
            });
        }
    }

    Ok(())
}
