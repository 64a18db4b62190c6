//! Canonical message construction.
//!
//! Both endpoints must byte-for-byte agree on the exact input to the keyed
//! hash. The canonical form is `{device_id}:{event_count}:{timestamp}`:
//! literal identifier bytes, base-10 integer text, a single colon between
//! fields, UTF-8 throughout.

use crate::error::{AuthError, FormatErrorKind};
use crate::protocol::Reading;

/// Single-byte delimiter between canonical fields.
///
/// Must not appear inside any field value; an identifier containing it is
/// a caller error and is rejected before signing.
pub const FIELD_DELIMITER: char = ':';

/// Validate a device identifier for canonicalization.
pub fn validate_device_id(device_id: &str) -> Result<(), AuthError> {
    if device_id.is_empty() {
        return Err(AuthError::Format {
            kind: FormatErrorKind::EmptyDeviceId,
        });
    }

    if device_id.contains(FIELD_DELIMITER) {
        return Err(AuthError::Format {
            kind: FormatErrorKind::DelimiterInDeviceId {
                device_id: device_id.to_string(),
                delimiter: FIELD_DELIMITER,
            },
        });
    }

    Ok(())
}

/// Build the canonical message for a reading.
///
/// Deterministic: identical inputs yield identical bytes on every
/// platform. Integer rendering is `u64` `Display` — base-10, no leading
/// zeros, no sign, no separators, locale-independent.
pub fn canonical_message(reading: &Reading) -> Result<String, AuthError> {
    validate_device_id(&reading.device_id)?;

    Ok(format!(
        "{}{delim}{}{delim}{}",
        reading.device_id,
        reading.event_count,
        reading.timestamp,
        delim = FIELD_DELIMITER
    ))
}
