//! Wire-facing reading types.

use serde::{Deserialize, Serialize};

use crate::error::{AuthError, RangeErrorKind};

/// A validated pulse reading.
///
/// The three semantic fields every signature is computed over. Values are
/// unsigned: a reading only exists on this side of the range checks in
/// [`SignedReading::reading`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Reading {
    /// Opaque device identifier (site/machine code).
    pub device_id: String,
    /// Number of pulses observed.
    pub event_count: u64,
    /// Freshness token; both endpoints must agree on the unit out-of-band.
    pub timestamp: u64,
}

impl Reading {
    /// Create a new reading.
    pub fn new(device_id: impl Into<String>, event_count: u64, timestamp: u64) -> Self {
        Self {
            device_id: device_id.into(),
            event_count,
            timestamp,
        }
    }
}

/// A signed reading as carried on the wire.
///
/// The numeric fields are deliberately signed here: a constrained or
/// misbehaving sender that transmits `-1` must surface as a range error,
/// not as an opaque deserialization failure.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SignedReading {
    /// Opaque device identifier (site/machine code).
    pub device_id: String,

    /// Number of pulses observed. Non-negative on any valid reading.
    pub event_count: i64,

    /// Freshness token. Non-negative on any valid reading.
    pub timestamp: i64,

    /// HMAC-SHA256 signature, hex-encoded.
    pub signature: String,
}

impl SignedReading {
    /// Validate the numeric fields and produce a [`Reading`].
    ///
    /// Rejection happens here, before any cryptographic computation.
    pub fn reading(&self) -> Result<Reading, AuthError> {
        if self.event_count < 0 {
            return Err(AuthError::Range {
                kind: RangeErrorKind::NegativeEventCount {
                    value: self.event_count,
                },
            });
        }
        if self.timestamp < 0 {
            return Err(AuthError::Range {
                kind: RangeErrorKind::NegativeTimestamp {
                    value: self.timestamp,
                },
            });
        }

        Ok(Reading {
            device_id: self.device_id.clone(),
            event_count: self.event_count as u64,
            timestamp: self.timestamp as u64,
        })
    }
}
