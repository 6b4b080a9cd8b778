use std::sync::{Arc, Mutex};
use std::time::{Duration, SystemTime, UNIX_EPOCH};

/// Injectable time source so cache expiry is testable.
pub trait Clock: Send + Sync {
    fn now_millis(&self) -> u64;
}

/// Wall-clock time.
#[derive(Debug, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now_millis(&self) -> u64 {
        SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .map(|d| d.as_millis() as u64)
            .unwrap_or(0)
    }
}

struct CacheSlot<T> {
    value: T,
    stored_at: u64,
}

/// Single-slot cache with a fixed freshness window. Writers overwrite;
/// readers choose between fresh-only and any-age reads (the latter backs
/// stale-serving when a revalidation fetch fails).
pub struct TimedCache<T> {
    slot: Mutex<Option<CacheSlot<T>>>,
    ttl: Duration,
    clock: Arc<dyn Clock>,
}

impl<T: Clone> TimedCache<T> {
    pub fn new(ttl: Duration) -> Self {
        Self::with_clock(ttl, Arc::new(SystemClock))
    }

    pub fn with_clock(ttl: Duration, clock: Arc<dyn Clock>) -> Self {
        Self {
            slot: Mutex::new(None),
            ttl,
            clock,
        }
    }

    /// Value stored within the freshness window, if any.
    pub fn fresh(&self) -> Option<T> {
        let slot = self.slot.lock().ok()?;
        let entry = slot.as_ref()?;
        let age = self.clock.now_millis().saturating_sub(entry.stored_at);
        if age < self.ttl.as_millis() as u64 {
            Some(entry.value.clone())
        } else {
            None
        }
    }

    /// Last stored value regardless of age.
    pub fn any(&self) -> Option<T> {
        let slot = self.slot.lock().ok()?;
        slot.as_ref().map(|entry| entry.value.clone())
    }

    pub fn store(&self, value: T) {
        if let Ok(mut slot) = self.slot.lock() {
            *slot = Some(CacheSlot {
                value,
                stored_at: self.clock.now_millis(),
            });
        }
    }
}

/// Test-only clock, exported so integration tests can drive expiry.
pub mod testing {
    use super::Clock;
    use std::sync::atomic::{AtomicU64, Ordering};

    /// Manually advanced clock for expiry tests.
    #[derive(Default)]
    pub struct FakeClock {
        now: AtomicU64,
    }

    impl FakeClock {
        pub fn advance(&self, millis: u64) {
            self.now.fetch_add(millis, Ordering::SeqCst);
        }
    }

    impl Clock for FakeClock {
        fn now_millis(&self) -> u64 {
            self.now.load(Ordering::SeqCst)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::testing::FakeClock;
    use super::*;

    #[test]
    fn fresh_expires_after_the_window() {
        let clock = Arc::new(FakeClock::default());
        let cache = TimedCache::with_clock(Duration::from_secs(300), clock.clone());

        assert!(cache.fresh().is_none());
        cache.store(vec!["a".to_string()]);
        assert_eq!(cache.fresh().unwrap(), vec!["a".to_string()]);

        clock.advance(299_999);
        assert!(cache.fresh().is_some());
        clock.advance(1);
        assert!(cache.fresh().is_none());
        assert_eq!(cache.any().unwrap(), vec!["a".to_string()]);
    }

    #[test]
    fn store_overwrites() {
        let cache = TimedCache::new(Duration::from_secs(300));
        cache.store(1);
        cache.store(2);
        assert_eq!(cache.fresh().unwrap(), 2);
    }
}
