// Copyright 2025 Lars Brubaker
// License: MIT
//
// Record arena for the quad-edge mesh.
//
// Records are handed out in buckets of four consecutive slots, one bucket
// per undirected edge. Freed buckets go on a free list and are reused by
// later allocations. The arena is owned by a single mesh and dropped with
// it, so every record is released in bulk when a triangulation returns.

use core::ops::{Index, IndexMut};

/// Number of records per bucket.
pub const BUCKET_SIZE: u32 = 4;

/// A Vec-backed arena allocating fixed-size buckets of `T`.
pub struct BucketAlloc<T> {
    items: Vec<T>,
    free_list: Vec<u32>,
    /// One flag per bucket, set while the bucket sits on the free list.
    freed: Vec<bool>,
    recycled: usize,
}

impl<T: Default> BucketAlloc<T> {
    pub fn new() -> Self {
        Self {
            items: Vec::new(),
            free_list: Vec::new(),
            freed: Vec::new(),
            recycled: 0,
        }
    }

    /// Arena with room for `buckets` buckets before it has to grow.
    pub fn with_capacity(buckets: usize) -> Self {
        Self {
            items: Vec::with_capacity(buckets * BUCKET_SIZE as usize),
            free_list: Vec::new(),
            freed: Vec::with_capacity(buckets),
            recycled: 0,
        }
    }

    /// Allocate a bucket of default records, returning the index of its first slot.
    pub fn alloc(&mut self) -> u32 {
        if let Some(base) = self.free_list.pop() {
            self.recycled += 1;
            self.freed[(base / BUCKET_SIZE) as usize] = false;
            for slot in base..base + BUCKET_SIZE {
                self.items[slot as usize] = T::default();
            }
            base
        } else {
            let base = self.items.len() as u32;
            self.items.extend((0..BUCKET_SIZE).map(|_| T::default()));
            self.freed.push(false);
            base
        }
    }

    /// Return the bucket containing `idx` to the free list.
    pub fn free(&mut self, idx: u32) {
        let base = idx & !(BUCKET_SIZE - 1);
        let freed = &mut self.freed[(base / BUCKET_SIZE) as usize];
        debug_assert!(!*freed, "bucket {} freed twice", base);
        *freed = true;
        self.free_list.push(base);
    }

    /// Number of buckets ever carved out of the backing storage.
    pub fn len(&self) -> usize {
        self.items.len() / BUCKET_SIZE as usize
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Number of buckets currently in use.
    pub fn live(&self) -> usize {
        self.len() - self.free_list.len()
    }

    /// How many allocations were served from the free list.
    pub fn recycled(&self) -> usize {
        self.recycled
    }
}

impl<T: Default> Default for BucketAlloc<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Index<u32> for BucketAlloc<T> {
    type Output = T;

    #[inline]
    fn index(&self, idx: u32) -> &T {
        &self.items[idx as usize]
    }
}

impl<T> IndexMut<u32> for BucketAlloc<T> {
    #[inline]
    fn index_mut(&mut self, idx: u32) -> &mut T {
        &mut self.items[idx as usize]
    }
}
