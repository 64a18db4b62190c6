//! Wire-facing protocol types.
//!
//! Defines the reading tuple as it travels between sender and verifier.
//! The transport that carries it (HTTP, serial, MQTT) is out of scope;
//! these types only guarantee that the four wire fields serialize
//! losslessly and that out-of-domain values are rejected at the boundary.

mod reading;

pub use reading::{Reading, SignedReading};
