use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

/// Allows at most one odds fetch in flight at a time.
///
/// The "loading" state lives in the returned guard and is cleared when the
/// guard drops, on success, error, or panic alike.
#[derive(Debug, Clone, Default)]
pub struct FetchGate {
    loading: Arc<AtomicBool>,
}

#[derive(Debug)]
pub struct FetchGuard {
    loading: Arc<AtomicBool>,
}

impl FetchGate {
    pub fn new() -> Self {
        Self::default()
    }

    /// Mark a fetch as started, or `None` if one is already running
    pub fn try_acquire(&self) -> Option<FetchGuard> {
        self.loading
            .compare_exchange(false, true, Ordering::AcqRel, Ordering::Acquire)
            .ok()
            .map(|_| FetchGuard {
                loading: Arc::clone(&self.loading),
            })
    }

    pub fn is_loading(&self) -> bool {
        self.loading.load(Ordering::Acquire)
    }
}

impl Drop for FetchGuard {
    fn drop(&mut self) {
        self.loading.store(false, Ordering::Release);
    }
}
