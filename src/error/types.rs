//! Error types for the pulsegate authentication core.

use std::fmt;

use thiserror::Error;

/// Main error type for the authentication core.
#[derive(Error, Debug)]
pub enum AuthError {
    /// Malformed or delimiter-colliding field.
    #[error("Format error: {kind}")]
    Format { kind: FormatErrorKind },

    /// Out-of-domain numeric field.
    #[error("Range error: {kind}")]
    Range { kind: RangeErrorKind },

    /// Secret or signature not decodable under the declared encoding.
    #[error("Encoding error: {kind}")]
    Encoding { kind: EncodingErrorKind },

    /// Digest mismatch on an otherwise well-formed reading.
    ///
    /// This is the expected outcome of a correctly functioning verifier
    /// seeing an invalid message, never a fatal condition.
    #[error("Verification failed: {failure}")]
    Verification { failure: VerificationFailure },

    /// Timestamp outside the accepted freshness window.
    #[error("Freshness error: {kind}")]
    Freshness { kind: FreshnessErrorKind },

    /// Configuration-related errors.
    #[error("Configuration error: {message}")]
    Config { message: String },

    /// I/O errors.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Format error kinds.
#[derive(Error, Debug)]
pub enum FormatErrorKind {
    #[error("Device identifier is empty")]
    EmptyDeviceId,

    #[error("Device identifier '{device_id}' contains the field delimiter '{delimiter}'")]
    DelimiterInDeviceId { device_id: String, delimiter: char },
}

/// Range error kinds.
///
/// Negative pulse counts and timestamps have no meaning in this domain and
/// are rejected at the wire boundary, before any cryptographic computation.
#[derive(Error, Debug)]
pub enum RangeErrorKind {
    #[error("Event count {value} is negative")]
    NegativeEventCount { value: i64 },

    #[error("Timestamp {value} is negative")]
    NegativeTimestamp { value: i64 },
}

/// Encoding error kinds.
#[derive(Error, Debug)]
pub enum EncodingErrorKind {
    #[error("Secret is declared as hex but is not valid hex: {message}")]
    SecretNotHex { message: String },

    #[error("Signature is not valid hex: {message}")]
    SignatureNotHex { message: String },

    #[error("Signature has wrong length: expected {expected} hex characters, got {actual}")]
    SignatureLength { expected: usize, actual: usize },
}

/// Freshness error kinds.
///
/// Produced only by the freshness window helper, never by the verifier
/// itself: proving integrity and proving freshness are separate outcomes.
#[derive(Error, Debug)]
pub enum FreshnessErrorKind {
    #[error("Reading is stale: age {age_seconds}s exceeds maximum")]
    Stale { age_seconds: u64 },

    #[error("Reading is from the future: {skew_seconds}s ahead of local clock")]
    FromFuture { skew_seconds: u64 },
}

/// Diagnostic detail for a signature mismatch.
///
/// Carries the fields of the offending reading so the failure can be
/// logged and correlated. It never carries the expected signature value:
/// echoing the expected digest on any observable channel would hand an
/// attacker a signing oracle.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VerificationFailure {
    /// Device that sent the reading.
    pub device_id: String,
    /// Event count carried by the reading.
    pub event_count: u64,
    /// Timestamp carried by the reading.
    pub timestamp: u64,
}

impl fmt::Display for VerificationFailure {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "signature mismatch for device '{}' (event_count={}, timestamp={})",
            self.device_id, self.event_count, self.timestamp
        )
    }
}

/// Result type alias for authentication operations.
pub type AuthResult<T> = Result<T, AuthError>;
