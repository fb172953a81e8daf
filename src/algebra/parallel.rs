//! Bucketed parallel loops with feature-gated implementations.
//!
//! Every helper here hands each closure invocation exclusive access to one
//! element (or one bucket) of a mutable slice, so no synchronization is
//! needed beyond the implicit join at the end of the loop.  With the
//! `rayon` feature disabled the same loops run sequentially.

cfg_if::cfg_if! {
    if #[cfg(feature = "rayon")] {
        use rayon::prelude::*;

        // below this many items the loops stay sequential
        pub(crate) const PARALLEL_MIN_ITEMS: usize = 256;

        /// Indexed for_each over a mutable slice
        pub(crate) fn for_each_indexed_mut<U, F>(data: &mut [U], f: F)
        where
            U: Send,
            F: Fn(usize, &mut U) + Sync + Send,
        {
            if data.len() < PARALLEL_MIN_ITEMS {
                data.iter_mut().enumerate().for_each(|(i, x)| f(i, x));
            } else {
                data.par_iter_mut().enumerate().for_each(|(i, x)| f(i, x));
            }
        }

        /// for_each over paired fixed size chunks of `data` and single
        /// elements of `tags`.  Trailing elements of `data` that do not
        /// fill a whole chunk are not visited.
        pub(crate) fn for_each_chunk_mut<U, V, F>(data: &mut [U], size: usize, tags: &mut [V], f: F)
        where
            U: Send,
            V: Send,
            F: Fn(&mut [U], &mut V) + Sync + Send,
        {
            if tags.len() < PARALLEL_MIN_ITEMS {
                data.chunks_exact_mut(size)
                    .zip(tags.iter_mut())
                    .for_each(|(c, t)| f(c, t));
            } else {
                data.par_chunks_exact_mut(size)
                    .zip(tags.par_iter_mut())
                    .for_each(|(c, t)| f(c, t));
            }
        }

        /// Same as `for_each_chunk_mut`, with read-only tags
        pub(crate) fn for_each_chunk_mut_with<U, V, F>(data: &mut [U], size: usize, tags: &[V], f: F)
        where
            U: Send,
            V: Sync,
            F: Fn(&mut [U], &V) + Sync + Send,
        {
            if tags.len() < PARALLEL_MIN_ITEMS {
                data.chunks_exact_mut(size)
                    .zip(tags.iter())
                    .for_each(|(c, t)| f(c, t));
            } else {
                data.par_chunks_exact_mut(size)
                    .zip(tags.par_iter())
                    .for_each(|(c, t)| f(c, t));
            }
        }
    } else {
        /// Indexed for_each over a mutable slice (sequential fallback)
        pub(crate) fn for_each_indexed_mut<U, F>(data: &mut [U], f: F)
        where
            F: Fn(usize, &mut U),
        {
            data.iter_mut().enumerate().for_each(|(i, x)| f(i, x));
        }

        /// for_each over paired chunks and tags (sequential fallback)
        pub(crate) fn for_each_chunk_mut<U, V, F>(data: &mut [U], size: usize, tags: &mut [V], f: F)
        where
            F: Fn(&mut [U], &mut V),
        {
            data.chunks_exact_mut(size)
                .zip(tags.iter_mut())
                .for_each(|(c, t)| f(c, t));
        }

        /// for_each over paired chunks and read-only tags (sequential fallback)
        pub(crate) fn for_each_chunk_mut_with<U, V, F>(data: &mut [U], size: usize, tags: &[V], f: F)
        where
            F: Fn(&mut [U], &V),
        {
            data.chunks_exact_mut(size)
                .zip(tags.iter())
                .for_each(|(c, t)| f(c, t));
        }
    }
}
