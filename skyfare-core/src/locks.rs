use std::collections::HashMap;
use std::sync::Arc;

use tokio::sync::{Mutex, OwnedMutexGuard};
use uuid::Uuid;

/// Per-inventory-item locks serializing the read-check-write booking unit.
///
/// Locks are created lazily, one per item id, and stay registered for the
/// process lifetime. Bookings against different items never contend; two
/// bookings against the same item run strictly one after the other.
#[derive(Default)]
pub struct ItemLockMap {
    locks: Mutex<HashMap<Uuid, Arc<Mutex<()>>>>,
}

impl ItemLockMap {
    pub fn new() -> Self {
        Self::default()
    }

    /// Take the lock for `id`, waiting behind any in-flight booking of the
    /// same item. The registry lock is released before waiting.
    pub async fn acquire(&self, id: Uuid) -> OwnedMutexGuard<()> {
        let lock = {
            let mut locks = self.locks.lock().await;
            locks.entry(id).or_default().clone()
        };
        lock.lock_owned().await
    }
}
