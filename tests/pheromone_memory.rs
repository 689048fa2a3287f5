//! Peak allocation of the pheromone update.
//!
//! Lives in its own test binary because it installs a counting global
//! allocator.

use std::alloc::{GlobalAlloc, Layout, System};
use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};
use u_aco::aco::PheromoneMatrix;

struct Counting;

static TRACKING: AtomicBool = AtomicBool::new(false);
static LARGEST: AtomicUsize = AtomicUsize::new(0);

unsafe impl GlobalAlloc for Counting {
    unsafe fn alloc(&self, layout: Layout) -> *mut u8 {
        if TRACKING.load(Ordering::Relaxed) {
            LARGEST.fetch_max(layout.size(), Ordering::Relaxed);
        }
        System.alloc(layout)
    }

    unsafe fn alloc_zeroed(&self, layout: Layout) -> *mut u8 {
        if TRACKING.load(Ordering::Relaxed) {
            LARGEST.fetch_max(layout.size(), Ordering::Relaxed);
        }
        System.alloc_zeroed(layout)
    }

    unsafe fn dealloc(&self, ptr: *mut u8, layout: Layout) {
        System.dealloc(ptr, layout)
    }
}

#[global_allocator]
static ALLOCATOR: Counting = Counting;

#[test]
fn test_update_does_not_allocate_matrix_sized_buffer() {
    let n = 2000;
    let matrix_bytes = n * n * std::mem::size_of::<f64>();
    let mut m = PheromoneMatrix::new(n, 1.0);
    let tour: Vec<usize> = (0..n).collect();

    // Warm up rayon's global pool outside the measured window.
    m.evaporate(0.5);

    TRACKING.store(true, Ordering::Relaxed);
    m.update(0.5, [(tour.as_slice(), 10.0)]);
    TRACKING.store(false, Ordering::Relaxed);

    let largest = LARGEST.load(Ordering::Relaxed);
    assert!(
        largest < matrix_bytes / 100,
        "update allocated {largest} bytes at once (matrix is {matrix_bytes} bytes)"
    );
    assert!((m.get(0, 1) - (0.25 + 0.1)).abs() < 1e-12);
    assert!((m.get(n - 1, 0) - (0.25 + 0.1)).abs() < 1e-12);
    assert!((m.get(1, 0) - 0.25).abs() < 1e-12);
}
