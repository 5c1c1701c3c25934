use std::sync::atomic::{AtomicBool, Ordering};

/// Admits one operation at a time until explicitly reset
#[derive(Debug, Default)]
pub struct SingleFlight {
    held: AtomicBool,
}

impl SingleFlight {
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns true if the caller now holds the lock
    pub fn try_acquire(&self) -> bool {
        self.held
            .compare_exchange(false, true, Ordering::AcqRel, Ordering::Acquire)
            .is_ok()
    }

    pub fn reset(&self) {
        self.held.store(false, Ordering::Release);
    }

    #[cfg(test)]
    pub fn is_held(&self) -> bool {
        self.held.load(Ordering::Acquire)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_second_acquire_is_refused_until_reset() {
        let lock = SingleFlight::new();
        assert!(lock.try_acquire());
        assert!(!lock.try_acquire());
        assert!(lock.is_held());

        lock.reset();
        assert!(!lock.is_held());
        assert!(lock.try_acquire());
    }
}
