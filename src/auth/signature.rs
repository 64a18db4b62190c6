//! Signature value and its transmission encoding.

use std::fmt;

use crate::error::{AuthError, EncodingErrorKind};

/// Digest length in bytes (HMAC-SHA256).
pub const SIGNATURE_LEN: usize = 32;

/// Hex characters in a transmitted signature.
pub const SIGNATURE_HEX_LEN: usize = SIGNATURE_LEN * 2;

/// A 256-bit HMAC-SHA256 signature.
///
/// Rendered for transmission as lowercase hexadecimal, 64 characters, no
/// separators. Signatures are public values bound to exactly one canonical
/// message and one secret; they are safe to display and log.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Signature {
    bytes: [u8; SIGNATURE_LEN],
}

impl Signature {
    /// Wrap a raw digest.
    pub fn from_tag(tag: &[u8]) -> Result<Self, AuthError> {
        let bytes: [u8; SIGNATURE_LEN] =
            tag.try_into().map_err(|_| AuthError::Encoding {
                kind: EncodingErrorKind::SignatureLength {
                    expected: SIGNATURE_HEX_LEN,
                    actual: tag.len() * 2,
                },
            })?;
        Ok(Self { bytes })
    }

    /// Parse a signature received over the wire.
    ///
    /// Constrained senders are known to emit formatting artifacts, so one
    /// explicit normalization step is applied before decoding: strip ASCII
    /// whitespace, fold to lowercase. Anything beyond that — wrong length,
    /// non-hex characters — is rejected as an encoding error.
    pub fn parse(raw: &str) -> Result<Self, AuthError> {
        let normalized: String = raw
            .chars()
            .filter(|c| !c.is_ascii_whitespace())
            .collect::<String>()
            .to_ascii_lowercase();

        if normalized.len() != SIGNATURE_HEX_LEN {
            return Err(AuthError::Encoding {
                kind: EncodingErrorKind::SignatureLength {
                    expected: SIGNATURE_HEX_LEN,
                    actual: normalized.len(),
                },
            });
        }

        let decoded = hex::decode(&normalized).map_err(|e| AuthError::Encoding {
            kind: EncodingErrorKind::SignatureNotHex {
                message: e.to_string(),
            },
        })?;

        Self::from_tag(&decoded)
    }

    /// The transmission encoding: lowercase hex, no separators.
    pub fn to_hex(&self) -> String {
        hex::encode(self.bytes)
    }

    /// Raw digest bytes.
    pub fn as_bytes(&self) -> &[u8] {
        &self.bytes
    }
}

impl fmt::Display for Signature {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_hex())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const SAMPLE_HEX: &str = "107bb32e441fde3da6c5288428effe6ba292c716c1b996fa0de377525b51a606";

    #[test]
    fn test_parse_and_render_round_trip() {
        let sig = Signature::parse(SAMPLE_HEX).unwrap();
        assert_eq!(sig.to_hex(), SAMPLE_HEX);
    }

    #[test]
    fn test_parse_strips_whitespace() {
        // Embedded spaces have been observed in traffic from constrained
        // senders.
        let spaced = format!("{} {}", &SAMPLE_HEX[..24], &SAMPLE_HEX[24..]);
        let sig = Signature::parse(&spaced).unwrap();
        assert_eq!(sig.to_hex(), SAMPLE_HEX);
    }

    #[test]
    fn test_parse_folds_case() {
        let sig = Signature::parse(&SAMPLE_HEX.to_uppercase()).unwrap();
        assert_eq!(sig.to_hex(), SAMPLE_HEX);
    }

    #[test]
    fn test_render_is_lowercase_fixed_length() {
        let sig = Signature::parse(SAMPLE_HEX).unwrap();
        let rendered = sig.to_hex();
        assert_eq!(rendered.len(), SIGNATURE_HEX_LEN);
        assert!(rendered
            .chars()
            .all(|c| c.is_ascii_hexdigit() && !c.is_ascii_uppercase()));
    }

    #[test]
    fn test_truncated_signature_rejected() {
        let result = Signature::parse(&SAMPLE_HEX[..62]);
        assert!(matches!(
            result,
            Err(AuthError::Encoding {
                kind: EncodingErrorKind::SignatureLength {
                    expected: 64,
                    actual: 62
                }
            })
        ));
    }

    #[test]
    fn test_non_hex_signature_rejected() {
        let mut garbled = SAMPLE_HEX.to_string();
        garbled.replace_range(0..2, "zz");
        assert!(matches!(
            Signature::parse(&garbled),
            Err(AuthError::Encoding {
                kind: EncodingErrorKind::SignatureNotHex { .. }
            })
        ));
    }
}
