//! Snapshot (de)serialization for the two persisted slices. State lives in
//! the shell's key/value store (local storage in a browser) under one key
//! per logical namespace; the immutable catalog is never persisted.

use serde::{de::DeserializeOwned, Serialize};
use thiserror::Error;

use crate::session::SessionState;
use crate::trips::TripsState;

pub const TRIPS_KEY: &str = "globetrotter:trips";
pub const SESSION_KEY: &str = "globetrotter:session";

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PersistenceError {
    #[error("failed to encode {slice} snapshot: {detail}")]
    Encode { slice: &'static str, detail: String },

    #[error("failed to decode {slice} snapshot: {detail}")]
    Decode { slice: &'static str, detail: String },
}

fn encode<T: Serialize>(slice: &'static str, value: &T) -> Result<Vec<u8>, PersistenceError> {
    serde_json::to_vec(value).map_err(|e| PersistenceError::Encode {
        slice,
        detail: e.to_string(),
    })
}

fn decode<T: DeserializeOwned>(slice: &'static str, bytes: &[u8]) -> Result<T, PersistenceError> {
    serde_json::from_slice(bytes).map_err(|e| PersistenceError::Decode {
        slice,
        detail: e.to_string(),
    })
}

pub fn encode_trips(trips: &TripsState) -> Result<Vec<u8>, PersistenceError> {
    encode("trips", trips)
}

pub fn decode_trips(bytes: &[u8]) -> Result<TripsState, PersistenceError> {
    decode("trips", bytes)
}

/// `SessionState` skips its transient fields during serialization, so this
/// snapshot carries exactly the partialized slice: user + is_authenticated.
pub fn encode_session(session: &SessionState) -> Result<Vec<u8>, PersistenceError> {
    encode("session", session)
}

pub fn decode_session(bytes: &[u8]) -> Result<SessionState, PersistenceError> {
    decode("session", bytes)
}
