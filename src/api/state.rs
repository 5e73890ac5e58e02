//! Application state for the shift board API.
//!
//! This module defines the shared application state that is available
//! to all request handlers.

use std::sync::Arc;

use crate::board::BoardService;
use crate::config::BoardMetadata;
use crate::store::InMemoryStore;

/// Shared application state.
///
/// Contains resources that are shared across all request handlers: the
/// board service over the record store and the unit metadata.
#[derive(Clone)]
pub struct AppState {
    service: BoardService<InMemoryStore>,
    metadata: Arc<BoardMetadata>,
}

impl AppState {
    /// Creates a new application state over `store`.
    pub fn new(store: InMemoryStore, metadata: BoardMetadata) -> Self {
        Self {
            service: BoardService::new(store),
            metadata: Arc::new(metadata),
        }
    }

    /// Returns the board service.
    pub fn service(&self) -> &BoardService<InMemoryStore> {
        &self.service
    }

    /// Returns the unit metadata.
    pub fn metadata(&self) -> &BoardMetadata {
        &self.metadata
    }
}
