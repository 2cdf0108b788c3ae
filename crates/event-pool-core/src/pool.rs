//! Generic free-list pool for mutable payload objects.
//!
//! A [`Pool<T>`] hands out boxed `T` instances and takes them back once the
//! caller is done. Released instances are reset through [`Poolable::reset`]
//! and pushed onto a LIFO free list, so the steady state of a
//! take/populate/dispatch/release loop performs no allocation.
//!
//! # Example
//!
//! ```
//! use event_pool_core::{Pool, Poolable};
//!
//! #[derive(Default)]
//! struct Click {
//!     handled: bool,
//!     x: f32,
//! }
//!
//! impl Poolable for Click {
//!     fn reset(&mut self) {
//!         self.handled = false;
//!         self.x = 0.0;
//!     }
//! }
//!
//! let pool = Pool::<Click>::new();
//!
//! let mut click = pool.take();
//! click.x = 12.0;
//! click.handled = true;
//! pool.release(click);
//!
//! let click = pool.take();
//! assert_eq!(click.x, 0.0);
//! assert!(!click.handled);
//! ```
//!
//! # Ownership contract
//!
//! `release` moves the box into the pool. From that point the pool owns the
//! instance and may hand the same allocation to any later, unrelated `take`
//! caller. Code that smuggles a pointer out of a released instance (through
//! `unsafe` or `Box::into_raw`) and touches it afterwards will observe or
//! corrupt another event. The pool does not guard against this at runtime;
//! doing so would cost the hot path the allocation it exists to avoid.
//!
//! # Locking
//!
//! Each pool has exactly one mutex around its free list, held only for a
//! single push or pop. `take` first reads an atomic mirror of the free-list
//! length and skips the lock entirely when the pool looks empty. That read
//! may race; the pop under the lock is what decides.

use std::fmt;
use std::ops::{Deref, DerefMut};
use std::sync::atomic::{AtomicU64, AtomicUsize, Ordering};

use parking_lot::Mutex;

use crate::config::PoolConfig;
use crate::error::Result;

/// A type that can be recycled by a [`Pool`].
///
/// `Default` builds a fresh instance on a pool miss; `reset` restores a used
/// instance to that same default state before it goes back on the free list.
pub trait Poolable: Default + Send + 'static {
    /// Restore every field to its default value.
    fn reset(&mut self);
}

/// Snapshot of a pool's counters.
///
/// Counters are updated with relaxed ordering, so a snapshot taken while
/// other threads are working is approximate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct PoolStats {
    /// Instances currently on the free list.
    pub available: usize,
    /// Instances allocated so far (misses plus prefill).
    pub created: u64,
    /// `take` calls that found the free list empty and allocated.
    pub misses: u64,
    /// `take` calls served from the free list.
    pub reused: u64,
    /// Instances handed back through `release`.
    pub released: u64,
    /// Released instances dropped because the free list was at its cap.
    pub discarded: u64,
}

impl PoolStats {
    /// Instances currently held by callers.
    pub fn outstanding(&self) -> u64 {
        self.created
            .saturating_sub(self.discarded)
            .saturating_sub(self.available as u64)
    }

    /// Fraction of `take` calls that were served without allocating.
    pub fn hit_rate(&self) -> f64 {
        let total = self.reused + self.misses;
        if total == 0 {
            0.0
        } else {
            self.reused as f64 / total as f64
        }
    }
}

/// A thread-safe free list of reusable `T` instances.
pub struct Pool<T: Poolable> {
    free: Mutex<Vec<Box<T>>>,
    /// Mirror of `free.len()`, written only while the lock is held.
    available: AtomicUsize,
    config: PoolConfig,
    created: AtomicU64,
    misses: AtomicU64,
    reused: AtomicU64,
    released: AtomicU64,
    discarded: AtomicU64,
}

impl<T: Poolable> Pool<T> {
    /// Create an empty pool with the default configuration.
    pub fn new() -> Self {
        Self::build(PoolConfig::default())
    }

    /// Create a pool from a validated configuration.
    ///
    /// Prefills the free list when `config.prefill` is non-zero.
    pub fn with_config(config: PoolConfig) -> Result<Self> {
        config.validate()?;
        let prefill = config.prefill;
        let pool = Self::build(config);
        if prefill > 0 {
            pool.prefill(prefill);
        }
        Ok(pool)
    }

    fn build(config: PoolConfig) -> Self {
        crate::pool_debug!(
            type_name = std::any::type_name::<T>(),
            initial_capacity = config.initial_capacity,
            max_retained = ?config.max_retained,
            "creating pool"
        );
        Self {
            free: Mutex::new(Vec::with_capacity(config.initial_capacity)),
            available: AtomicUsize::new(0),
            config,
            created: AtomicU64::new(0),
            misses: AtomicU64::new(0),
            reused: AtomicU64::new(0),
            released: AtomicU64::new(0),
            discarded: AtomicU64::new(0),
        }
    }

    /// Take an instance in its default state.
    ///
    /// Pops a recycled instance when one is available, otherwise allocates a
    /// new `T::default()`. Never fails.
    pub fn take(&self) -> Box<T> {
        if self.available.load(Ordering::Acquire) > 0 {
            let mut free = self.free.lock();
            if let Some(instance) = free.pop() {
                self.available.store(free.len(), Ordering::Release);
                drop(free);
                self.reused.fetch_add(1, Ordering::Relaxed);
                return instance;
            }
        }

        self.created.fetch_add(1, Ordering::Relaxed);
        self.misses.fetch_add(1, Ordering::Relaxed);
        crate::pool_trace!(type_name = std::any::type_name::<T>(), "pool miss, allocating");
        Box::new(T::default())
    }

    /// Take an instance wrapped in a guard that releases it on drop.
    pub fn take_guard(&self) -> PoolGuard<'_, T> {
        PoolGuard {
            pool: self,
            instance: Some(self.take()),
        }
    }

    /// Return an instance to the pool.
    ///
    /// The instance is reset before it becomes visible to other callers. If
    /// the free list is already at `max_retained`, the instance is dropped.
    ///
    /// The caller must not keep any pointer into the instance: the same
    /// allocation may be handed to an unrelated `take` immediately.
    pub fn release(&self, mut instance: Box<T>) {
        instance.reset();
        self.released.fetch_add(1, Ordering::Relaxed);

        let mut free = self.free.lock();
        let at_cap = match self.config.max_retained {
            Some(max) => free.len() >= max,
            None => false,
        };
        if at_cap {
            drop(free);
            self.discarded.fetch_add(1, Ordering::Relaxed);
            crate::pool_trace!(
                type_name = std::any::type_name::<T>(),
                "free list at capacity, discarding instance"
            );
            return;
        }
        free.push(instance);
        self.available.store(free.len(), Ordering::Release);
    }

    /// Return an instance if there is one. `None` is a no-op.
    pub fn release_opt(&self, instance: Option<Box<T>>) {
        if let Some(instance) = instance {
            self.release(instance);
        }
    }

    /// Allocate up to `count` default instances onto the free list.
    ///
    /// Stops at `max_retained`. Returns the number of instances added.
    ///
    /// Instances are allocated outside the lock against an estimate of the
    /// free room; whatever no longer fits once the lock is held is dropped
    /// and counted as discarded.
    pub fn prefill(&self, count: usize) -> usize {
        let count = match self.config.max_retained {
            Some(max) => count.min(max.saturating_sub(self.available())),
            None => count,
        };
        if count == 0 {
            return 0;
        }
        let mut fresh: Vec<Box<T>> = (0..count).map(|_| Box::new(T::default())).collect();
        self.created.fetch_add(count as u64, Ordering::Relaxed);

        let mut free = self.free.lock();
        let surplus = match self.config.max_retained {
            Some(max) => {
                let room = max.saturating_sub(free.len());
                fresh.split_off(room.min(fresh.len()))
            }
            None => Vec::new(),
        };
        let added = fresh.len();
        free.extend(fresh);
        self.available.store(free.len(), Ordering::Release);
        drop(free);

        if !surplus.is_empty() {
            self.discarded.fetch_add(surplus.len() as u64, Ordering::Relaxed);
            drop(surplus);
        }
        crate::pool_debug!(type_name = std::any::type_name::<T>(), added, "prefilled pool");
        added
    }

    /// Drop every instance on the free list. Returns how many were dropped.
    pub fn clear(&self) -> usize {
        let drained = {
            let mut free = self.free.lock();
            let drained = std::mem::take(&mut *free);
            free.reserve(self.config.initial_capacity);
            self.available.store(0, Ordering::Release);
            drained
        };
        let count = drained.len();
        self.discarded.fetch_add(count as u64, Ordering::Relaxed);
        crate::pool_debug!(type_name = std::any::type_name::<T>(), count, "cleared pool");
        count
    }

    /// Number of instances currently on the free list.
    pub fn available(&self) -> usize {
        self.available.load(Ordering::Acquire)
    }

    /// The configuration this pool was built with.
    pub fn config(&self) -> &PoolConfig {
        &self.config
    }

    /// Snapshot the pool counters.
    pub fn stats(&self) -> PoolStats {
        PoolStats {
            available: self.available(),
            created: self.created.load(Ordering::Relaxed),
            misses: self.misses.load(Ordering::Relaxed),
            reused: self.reused.load(Ordering::Relaxed),
            released: self.released.load(Ordering::Relaxed),
            discarded: self.discarded.load(Ordering::Relaxed),
        }
    }
}

impl<T: Poolable> Default for Pool<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Poolable> fmt::Debug for Pool<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Pool")
            .field("type", &std::any::type_name::<T>())
            .field("available", &self.available())
            .field("config", &self.config)
            .finish()
    }
}

/// An instance borrowed from a [`Pool`] that goes back when dropped.
pub struct PoolGuard<'a, T: Poolable> {
    pool: &'a Pool<T>,
    /// Always `Some` until the guard is dropped or detached.
    instance: Option<Box<T>>,
}

impl<T: Poolable> PoolGuard<'_, T> {
    /// Detach the instance from the guard without releasing it.
    pub fn into_inner(mut self) -> Box<T> {
        self.instance
            .take()
            .expect("guard holds its instance until dropped")
    }
}

impl<T: Poolable> Deref for PoolGuard<'_, T> {
    type Target = T;

    fn deref(&self) -> &T {
        self.instance
            .as_deref()
            .expect("guard holds its instance until dropped")
    }
}

impl<T: Poolable> DerefMut for PoolGuard<'_, T> {
    fn deref_mut(&mut self) -> &mut T {
        self.instance
            .as_deref_mut()
            .expect("guard holds its instance until dropped")
    }
}

impl<T: Poolable> Drop for PoolGuard<'_, T> {
    fn drop(&mut self) {
        self.pool.release_opt(self.instance.take());
    }
}

impl<T: Poolable + fmt::Debug> fmt::Debug for PoolGuard<'_, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("PoolGuard").field(&self.instance).finish()
    }
}
