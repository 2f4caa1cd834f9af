// SPDX-License-Identifier: Apache-2.0
// Copyright 2025 Ankit Kumar Pandey

//! Allocation counting for [`Bench`](crate::bench::Bench).
//!
//! Install [`CountingAllocator`] as the global allocator to make memory
//! figures available:
//!
//! ```ignore
//! #[global_allocator]
//! static ALLOC: testmark_core::CountingAllocator = testmark_core::CountingAllocator;
//! ```
//!
//! Without it the counters stay at zero.

use std::alloc::{GlobalAlloc, Layout, System};
use std::sync::atomic::{AtomicU64, Ordering};

static ALLOCATED_BYTES: AtomicU64 = AtomicU64::new(0);
static ALLOCATION_COUNT: AtomicU64 = AtomicU64::new(0);

/// Global allocator wrapper over [`System`] that counts every allocation
/// process-wide. Deallocations are not subtracted: the counters are
/// cumulative totals, like a garbage-collected runtime's total-alloc figure.
#[derive(Debug, Default, Clone, Copy)]
pub struct CountingAllocator;

#[inline]
fn track_allocation(bytes: usize) {
    // Relaxed is sufficient: only atomicity is needed, not ordering.
    ALLOCATED_BYTES.fetch_add(bytes as u64, Ordering::Relaxed);
    ALLOCATION_COUNT.fetch_add(1, Ordering::Relaxed);
}

// SAFETY: every call is forwarded unchanged to the system allocator.
unsafe impl GlobalAlloc for CountingAllocator {
    #[inline]
    unsafe fn alloc(&self, layout: Layout) -> *mut u8 {
        track_allocation(layout.size());
        // SAFETY: the caller upholds the GlobalAlloc contract for `layout`.
        unsafe { System.alloc(layout) }
    }

    #[inline]
    unsafe fn dealloc(&self, ptr: *mut u8, layout: Layout) {
        // SAFETY: `ptr` was allocated by `System` with this `layout`.
        unsafe { System.dealloc(ptr, layout) }
    }

    #[inline]
    unsafe fn alloc_zeroed(&self, layout: Layout) -> *mut u8 {
        track_allocation(layout.size());
        // SAFETY: the caller upholds the GlobalAlloc contract for `layout`.
        unsafe { System.alloc_zeroed(layout) }
    }

    #[inline]
    unsafe fn realloc(&self, ptr: *mut u8, layout: Layout, new_size: usize) -> *mut u8 {
        track_allocation(new_size);
        // SAFETY: `ptr` was allocated by `System` with this `layout`.
        unsafe { System.realloc(ptr, layout, new_size) }
    }
}

/// Total bytes allocated through [`CountingAllocator`] so far.
pub fn allocated_bytes() -> u64 {
    ALLOCATED_BYTES.load(Ordering::Relaxed)
}

/// Total number of allocations made through [`CountingAllocator`] so far.
pub fn allocation_count() -> u64 {
    ALLOCATION_COUNT.load(Ordering::Relaxed)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_allocator_forwards_and_counts() {
        let alloc = CountingAllocator;
        let layout = Layout::from_size_align(4096, 8).unwrap();
        let before = allocated_bytes();

        // SAFETY: layout is non-zero sized; the pointer is freed with the same layout.
        unsafe {
            let ptr = alloc.alloc_zeroed(layout);
            assert!(!ptr.is_null());
            assert_eq!(*ptr, 0);
            alloc.dealloc(ptr, layout);
        }

        assert!(allocated_bytes() >= before + 4096);
        assert!(allocation_count() >= 1);
    }
}
