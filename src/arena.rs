//! The bulk-lifetime memory source for everything the merge core builds.
//!
//! A `Pool` wraps a `bumpalo::Bump`. Buffers handed out by the pool are
//! `ArenaVec`s: length-tracked, growable, and backed by the bump arena. A
//! buffer that outgrows its chunk moves to a fresh one, the old space is simply
//! abandoned. Nothing is freed individually; all storage is reclaimed together
//! when the `Pool` is dropped, so a block can never outlive the pool it was
//! built in.
//!
//! `Bump` is `!Sync`, which makes the single-threaded discipline of the append
//! family a compile-time property rather than a convention.

use bumpalo::Bump;

use crate::config::ZebraConfig;

/// A growable buffer allocated in a `Pool`.
pub type ArenaVec<'a, T> = bumpalo::collections::Vec<'a, T>;

/// The arena that owns every table, attribute and block built by the core.
#[derive(Debug, Default)]
pub struct Pool {
    bump: Bump,
    config: ZebraConfig,
}

impl Pool {
    /// Creates a pool with the default configuration.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a pool that applies `config` to every growth it performs.
    pub fn with_config(config: ZebraConfig) -> Self {
        Self {
            bump: Bump::new(),
            config,
        }
    }

    pub fn config(&self) -> &ZebraConfig {
        &self.config
    }

    /// The underlying bump arena.
    pub fn bump(&self) -> &Bump {
        &self.bump
    }

    /// An empty buffer. Allocates nothing until the first growth.
    pub fn vec<T>(&self) -> ArenaVec<'_, T> {
        ArenaVec::new_in(&self.bump)
    }

    pub fn vec_with_capacity<T>(&self, capacity: usize) -> ArenaVec<'_, T> {
        ArenaVec::with_capacity_in(capacity, &self.bump)
    }

    /// A buffer of `count` default (zero) values.
    pub fn vec_zeroed<T: Clone + Default>(&self, count: usize) -> ArenaVec<'_, T> {
        let mut buf = ArenaVec::with_capacity_in(count, &self.bump);
        buf.resize(count, T::default());
        buf
    }

    /// A buffer holding a copy of `values`, sized exactly.
    pub fn vec_from_slice<T: Clone>(&self, values: &[T]) -> ArenaVec<'_, T> {
        let mut buf = ArenaVec::with_capacity_in(values.len(), &self.bump);
        buf.extend_from_slice(values);
        buf
    }

    /// A fixed-size arena copy of `values`.
    pub fn alloc_slice_copy<T: Copy>(&self, values: &[T]) -> &[T] {
        self.bump.alloc_slice_copy(values)
    }

    /// Total bytes the arena has reserved from the system so far.
    pub fn allocated_bytes(&self) -> usize {
        self.bump.allocated_bytes()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_vec_zeroed() {
        let pool = Pool::new();
        let buf: ArenaVec<i64> = pool.vec_zeroed(5);
        assert_eq!(buf.as_slice(), &[0, 0, 0, 0, 0]);
    }

    #[test]
    fn test_slice_copies_are_independent() {
        let pool = Pool::new();
        let mut source = vec![1u8, 2, 3];
        let copy = pool.alloc_slice_copy(&source);
        source[0] = 9;
        assert_eq!(copy, &[1, 2, 3]);
    }

    #[test]
    fn test_allocations_are_accounted() {
        let pool = Pool::new();
        let before = pool.allocated_bytes();
        let _buf: ArenaVec<u64> = pool.vec_from_slice(&[7u64; 4096]);
        assert!(pool.allocated_bytes() > before);
    }
}
