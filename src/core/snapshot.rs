//! Compact binary snapshots of a `GameState` for the persistence layer.

use thiserror::Error;

use super::state::GameState;

/// Failure to encode or decode a snapshot.
#[derive(Debug, Error)]
#[error("snapshot codec failed: {0}")]
pub struct SnapshotError(#[from] bincode::Error);

/// Encode a state as bytes.
pub fn encode(state: &GameState) -> Result<Vec<u8>, SnapshotError> {
    Ok(bincode::serialize(state)?)
}

/// Decode a state previously produced by `encode`.
pub fn decode(bytes: &[u8]) -> Result<GameState, SnapshotError> {
    Ok(bincode::deserialize(bytes)?)
}
