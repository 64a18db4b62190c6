//! Shared-secret material.

use std::fmt;
use std::path::Path;

use crate::config::{SecretConfig, SecretEncoding};
use crate::error::{AuthError, EncodingErrorKind};

/// The shared secret as raw key bytes.
///
/// Materialized from configuration by applying the *declared* encoding,
/// and only that encoding. The same configured string means different key
/// bytes under `ascii` and `hex`, and a sender/receiver pair that picks
/// different interpretations will each look locally correct while never
/// agreeing on a digest — so decoding never probes or falls back.
pub struct SharedSecret {
    bytes: Vec<u8>,
}

impl SharedSecret {
    /// Build a secret directly from raw key bytes.
    pub fn from_bytes(bytes: impl Into<Vec<u8>>) -> Self {
        Self {
            bytes: bytes.into(),
        }
    }

    /// Materialize the secret from its configuration.
    ///
    /// Reads the secret string from the inline value or the configured
    /// file, then decodes it under the declared encoding.
    pub fn from_config(config: &SecretConfig) -> Result<Self, AuthError> {
        let raw = match (&config.value, &config.file) {
            (Some(value), None) => value.clone(),
            (None, Some(path)) => Self::load_secret_file(path)?,
            _ => {
                return Err(AuthError::Config {
                    message: "Secret configuration must set exactly one of value or file"
                        .to_string(),
                });
            }
        };

        Self::decode(&raw, config.encoding)
    }

    /// Decode a secret string under the declared encoding.
    pub fn decode(raw: &str, encoding: SecretEncoding) -> Result<Self, AuthError> {
        let bytes = match encoding {
            SecretEncoding::Ascii => raw.as_bytes().to_vec(),
            SecretEncoding::Hex => hex::decode(raw).map_err(|e| AuthError::Encoding {
                kind: EncodingErrorKind::SecretNotHex {
                    message: e.to_string(),
                },
            })?,
        };

        Ok(Self { bytes })
    }

    /// Load the secret string from a file.
    ///
    /// Security: Verifies the file has restrictive permissions (0600 or
    /// 0400) before loading to prevent secrets from being readable by
    /// other users. Trailing newlines are stripped so a file written with
    /// a text editor produces the same key as an inline value.
    fn load_secret_file(path: &Path) -> Result<String, AuthError> {
        let metadata = std::fs::metadata(path).map_err(|e| AuthError::Config {
            message: format!(
                "Failed to read secret file metadata from {}: {}",
                path.display(),
                e
            ),
        })?;

        #[cfg(unix)]
        {
            use std::os::unix::fs::PermissionsExt;
            let mode = metadata.permissions().mode();
            // Group and world bits must all be zero (only owner can access)
            if mode & 0o077 != 0 {
                return Err(AuthError::Config {
                    message: format!(
                        "Secret file {} has insecure permissions {:04o}, expected 0600 or 0400",
                        path.display(),
                        mode & 0o777
                    ),
                });
            }
        }

        #[cfg(not(unix))]
        let _ = metadata;

        let content = std::fs::read_to_string(path).map_err(|e| AuthError::Config {
            message: format!("Failed to read secret file {}: {}", path.display(), e),
        })?;

        Ok(content.trim_end_matches(['\r', '\n']).to_string())
    }

    /// Raw key bytes.
    pub fn as_bytes(&self) -> &[u8] {
        &self.bytes
    }
}

impl fmt::Debug for SharedSecret {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SharedSecret")
            .field("bytes", &"[redacted]")
            .field("len", &self.bytes.len())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const SECRET_STRING: &str = "b83f29aae116030da1bac6691471c8fa";

    #[test]
    fn test_ascii_encoding_uses_literal_bytes() {
        let secret = SharedSecret::decode(SECRET_STRING, SecretEncoding::Ascii).unwrap();
        assert_eq!(secret.as_bytes(), SECRET_STRING.as_bytes());
        assert_eq!(secret.as_bytes().len(), 32);
    }

    #[test]
    fn test_hex_encoding_decodes() {
        let secret = SharedSecret::decode(SECRET_STRING, SecretEncoding::Hex).unwrap();
        assert_eq!(secret.as_bytes().len(), 16);
        assert_eq!(secret.as_bytes()[0], 0xb8);
    }

    #[test]
    fn test_same_string_different_encodings_differ() {
        let ascii = SharedSecret::decode(SECRET_STRING, SecretEncoding::Ascii).unwrap();
        let hex = SharedSecret::decode(SECRET_STRING, SecretEncoding::Hex).unwrap();
        assert_ne!(ascii.as_bytes(), hex.as_bytes());
    }

    #[test]
    fn test_invalid_hex_rejected_not_reinterpreted() {
        // Under the hex declaration a non-hex string is an error, never
        // silently retried as ASCII.
        let result = SharedSecret::decode("not-hex-at-all!", SecretEncoding::Hex);
        assert!(matches!(
            result,
            Err(AuthError::Encoding {
                kind: EncodingErrorKind::SecretNotHex { .. }
            })
        ));
    }

    #[test]
    fn test_debug_redacts_bytes() {
        let secret = SharedSecret::decode(SECRET_STRING, SecretEncoding::Ascii).unwrap();
        let rendered = format!("{:?}", secret);
        assert!(rendered.contains("[redacted]"));
        assert!(!rendered.contains(SECRET_STRING));
    }

    #[cfg(unix)]
    #[test]
    fn test_secret_file_permission_check() {
        use std::os::unix::fs::PermissionsExt;

        let dir = tempfile::TempDir::new().unwrap();
        let path = dir.path().join("secret.key");
        std::fs::write(&path, SECRET_STRING).unwrap();

        // World-readable file must be rejected
        std::fs::set_permissions(&path, std::fs::Permissions::from_mode(0o644)).unwrap();
        let config = SecretConfig {
            value: None,
            file: Some(path.clone()),
            encoding: SecretEncoding::Ascii,
        };
        assert!(matches!(
            SharedSecret::from_config(&config),
            Err(AuthError::Config { .. })
        ));

        // Owner-only file loads, and trailing newline handling matches
        // an inline value
        std::fs::write(&path, format!("{}\n", SECRET_STRING)).unwrap();
        std::fs::set_permissions(&path, std::fs::Permissions::from_mode(0o600)).unwrap();
        let secret = SharedSecret::from_config(&config).unwrap();
        assert_eq!(secret.as_bytes(), SECRET_STRING.as_bytes());
    }
}
