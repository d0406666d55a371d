//! Session Store
//!
//! Seam between session finalization and whatever persists results. Each
//! finished session is written exactly once under its unique id, so
//! implementations never need read-modify-write.

use std::sync::Mutex;

use async_trait::async_trait;

use intervue_core::{CoreError, CoreResult};

use crate::models::SessionResult;

/// Sink for finished sessions
#[async_trait]
pub trait SessionStore: Send + Sync {
    /// Persist one finished session
    async fn put(&self, result: &SessionResult) -> CoreResult<()>;
}

/// Store that keeps results in memory; backs tests and local runs
#[derive(Debug, Default)]
pub struct InMemorySessionStore {
    results: Mutex<Vec<SessionResult>>,
}

impl InMemorySessionStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Snapshot of everything stored so far, in write order
    pub fn results(&self) -> Vec<SessionResult> {
        match self.results.lock() {
            Ok(guard) => guard.clone(),
            Err(poisoned) => poisoned.into_inner().clone(),
        }
    }

    pub fn len(&self) -> usize {
        self.results().len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

#[async_trait]
impl SessionStore for InMemorySessionStore {
    async fn put(&self, result: &SessionResult) -> CoreResult<()> {
        let mut results = self
            .results
            .lock()
            .map_err(|_| CoreError::internal("session store lock poisoned"))?;
        results.push(result.clone());
        Ok(())
    }
}
