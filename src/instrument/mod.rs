//! Times and memory-profiles a single cracker invocation, without
//! touching the invocation's result.
//!
//! Timing is wall-clock via `Instant`. Peak memory comes from a counting
//! wrapper around the system allocator that tracks live heap bytes and a
//! resettable high-water mark; [`measure`] brackets exactly the call, so
//! unrelated allocations are not attributed to it.

use std::alloc::{GlobalAlloc, Layout, System};
use std::sync::atomic::{AtomicUsize, Ordering::Relaxed};
use std::time::{Duration, Instant};

/// Counting wrapper around the system allocator.
pub struct TrackingAllocator;

/// Live heap bytes allocated through the wrapper.
static LIVE: AtomicUsize = AtomicUsize::new(0);
/// High-water mark of `LIVE` since the last reset.
static PEAK: AtomicUsize = AtomicUsize::new(0);

unsafe impl GlobalAlloc for TrackingAllocator {
    unsafe fn alloc(&self, layout: Layout) -> *mut u8 {
        let ptr = System.alloc(layout);
        if !ptr.is_null() {
            let live = LIVE.fetch_add(layout.size(), Relaxed) + layout.size();
            PEAK.fetch_max(live, Relaxed);
        }
        ptr
    }

    unsafe fn dealloc(&self, ptr: *mut u8, layout: Layout) {
        System.dealloc(ptr, layout);
        LIVE.fetch_sub(layout.size(), Relaxed);
    }
}

/// The process allocator. Registering it here means every consumer of the
/// crate measures through the same counters.
#[global_allocator]
static GLOBAL: TrackingAllocator = TrackingAllocator;

/// Elapsed time and peak heap growth for one measured call.
#[derive(Debug, Clone, Copy)]
pub struct Measurement {
    /// Wall-clock duration of the call.
    pub elapsed: Duration,
    /// Peak bytes allocated above the pre-call baseline.
    pub peak_bytes: usize,
}

impl Measurement {
    /// Elapsed nanoseconds, the unit the presentation layer reports.
    pub fn elapsed_nanos(&self) -> u128 {
        self.elapsed.as_nanos()
    }
}

/// Run `f`, returning its result untouched together with its measurement.
pub fn measure<T>(f: impl FnOnce() -> T) -> (T, Measurement) {
    let baseline = LIVE.load(Relaxed);
    PEAK.store(baseline, Relaxed);
    let start = Instant::now();
    let value = f();
    let elapsed = start.elapsed();
    let peak = PEAK.load(Relaxed);
    (
        value,
        Measurement {
            elapsed,
            peak_bytes: peak.saturating_sub(baseline),
        },
    )
}
