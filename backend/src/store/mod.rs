//! In-memory repository backing all services
//!
//! Replaces ad-hoc module-scope arrays with one injected store. All state
//! sits behind a single `RwLock`, so every service operation that takes the
//! write guard mutates atomically; readers see either the old or the new
//! state, never a partial write.

mod seed;

use std::collections::HashMap;
use std::sync::Arc;

use tokio::sync::{RwLock, RwLockReadGuard, RwLockWriteGuard};
use uuid::Uuid;

use shared::{format_request_id, MaterialStock, Product, ProductionBatch, QcInspection, Request};

/// Mutable state owned by the store
#[derive(Debug, Default)]
pub struct StoreInner {
    pub materials: HashMap<Uuid, MaterialStock>,
    pub requests: HashMap<String, Request>,
    pub products: HashMap<Uuid, Product>,
    pub batches: HashMap<Uuid, ProductionBatch>,
    pub inspections: HashMap<Uuid, QcInspection>,
    next_request_seq: u32,
}

impl StoreInner {
    /// Allocate the next "R-####" display id
    pub fn allocate_request_id(&mut self) -> String {
        self.next_request_seq += 1;
        format_request_id(self.next_request_seq)
    }

    /// Move the sequence past an externally assigned id, used by seeding
    fn reserve_request_seq(&mut self, sequence: u32) {
        self.next_request_seq = self.next_request_seq.max(sequence);
    }
}

/// Shared handle to the in-memory repository
#[derive(Clone, Default)]
pub struct Store {
    inner: Arc<RwLock<StoreInner>>,
}

impl Store {
    /// Create an empty store
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a store pre-loaded with the sample data set
    pub async fn seeded() -> Self {
        let store = Self::new();
        seed::load(&mut *store.write().await);
        store
    }

    pub async fn read(&self) -> RwLockReadGuard<'_, StoreInner> {
        self.inner.read().await
    }

    pub async fn write(&self) -> RwLockWriteGuard<'_, StoreInner> {
        self.inner.write().await
    }
}
