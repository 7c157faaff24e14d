// src/exec/slot_pool.rs

//! Fixed-capacity admission gate for running commands.

use std::sync::Arc;

use tokio::sync::{OwnedSemaphorePermit, Semaphore};

use crate::errors::{Result, RunlistError};

/// Counting gate that bounds how many commands run at once.
///
/// Capacity is fixed at construction. Waiters are admitted in FIFO order
/// (tokio's semaphore is fair), which is stronger than we need.
#[derive(Debug, Clone)]
pub struct SlotPool {
    semaphore: Arc<Semaphore>,
    capacity: usize,
}

/// One occupied slot. Dropping it frees the slot and wakes at most one waiter.
#[derive(Debug)]
pub struct Slot {
    _permit: OwnedSemaphorePermit,
}

impl Slot {
    /// Give the slot back explicitly. Equivalent to dropping it.
    pub fn release(self) {}
}

impl SlotPool {
    pub fn new(capacity: usize) -> Result<Self> {
        if capacity == 0 {
            return Err(RunlistError::ConfigError(
                "slot pool capacity must be >= 1".to_string(),
            ));
        }
        Ok(Self {
            semaphore: Arc::new(Semaphore::new(capacity)),
            capacity,
        })
    }

    /// Wait until a slot is free and take it.
    pub async fn acquire(&self) -> Result<Slot> {
        let permit = Arc::clone(&self.semaphore)
            .acquire_owned()
            .await
            .map_err(|e| RunlistError::Other(e.into()))?;
        Ok(Slot { _permit: permit })
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// Slots currently free.
    pub fn available(&self) -> usize {
        self.semaphore.available_permits()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;

    #[test]
    fn zero_capacity_is_rejected() {
        assert!(SlotPool::new(0).is_err());
    }

    #[tokio::test]
    async fn acquire_and_release_track_availability() {
        let pool = SlotPool::new(2).unwrap();
        let a = pool.acquire().await.unwrap();
        let b = pool.acquire().await.unwrap();
        assert_eq!(pool.available(), 0);
        a.release();
        assert_eq!(pool.available(), 1);
        drop(b);
        assert_eq!(pool.available(), pool.capacity());
    }

    #[tokio::test]
    async fn acquire_blocks_while_full() {
        let pool = SlotPool::new(1).unwrap();
        let held = pool.acquire().await.unwrap();

        let waiting = tokio::time::timeout(Duration::from_millis(50), pool.acquire()).await;
        assert!(waiting.is_err(), "second acquire should block while the pool is full");

        held.release();
        let admitted = tokio::time::timeout(Duration::from_secs(1), pool.acquire()).await;
        assert!(admitted.is_ok());
    }
}
