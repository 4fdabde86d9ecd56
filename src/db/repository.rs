//! Whole-document persistence for the tournament state.
//!
//! The state is the single unit of persistence: it is read wholesale at
//! session start and rewritten wholesale after every mutating action.
//! Saves go through a temp file plus rename so a crash mid-write leaves
//! either the old document or the new one, never a torn file. Loading a
//! document written by an older version backfills missing keys from the
//! defaults.

use log::{debug, info};
use std::fs;
use thiserror::Error;

use crate::db::config::StoreConfig;
use crate::tournament::models::TournamentState;

/// Store errors
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("i/o error: {0}")]
    Io(#[from] std::io::Error),

    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

pub type StoreResult<T> = Result<T, StoreError>;

/// File-backed store for the tournament document
#[derive(Clone, Debug, Default)]
pub struct StateStore {
    config: StoreConfig,
}

impl StateStore {
    pub fn new(config: StoreConfig) -> Self {
        Self { config }
    }

    /// Load the tournament document, or a fresh default state when no
    /// document exists yet.
    pub fn load(&self) -> StoreResult<TournamentState> {
        let path = &self.config.data_file;
        if !path.exists() {
            info!("no document at {}, starting fresh", path.display());
            return Ok(TournamentState::default());
        }
        let data = fs::read_to_string(path)?;
        let state = serde_json::from_str(&data)?;
        debug!("loaded document from {}", path.display());
        Ok(state)
    }

    /// Overwrite the whole document atomically.
    pub fn save(&self, state: &TournamentState) -> StoreResult<()> {
        let path = &self.config.data_file;
        let json = serde_json::to_string_pretty(state)?;
        let temp_path = path.with_extension("tmp");
        fs::write(&temp_path, json)?;
        fs::rename(&temp_path, path)?;
        debug!("saved document to {}", path.display());
        Ok(())
    }
}
