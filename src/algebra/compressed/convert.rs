//---------------------------------------------------------
// conversion between compressed row and compressed column
// layouts of the same logical matrix
//---------------------------------------------------------

use crate::algebra::{CompressedView, FloatT};
use std::iter::zip;

impl<T> CompressedView<'_, T>
where
    T: FloatT,
{
    /// Copy this view verbatim into destination buffers of the same layout.
    ///
    /// # Panics
    /// Panics if the destination lengths differ from the source lengths.
    pub fn copy_into(&self, offsets: &mut [usize], indices: &mut [usize], values: &mut [T]) {
        offsets.copy_from_slice(self.offsets);
        indices.copy_from_slice(self.indices);
        values.copy_from_slice(self.values);
    }

    /// Write the opposite compression order of this view into the
    /// destination buffers, i.e. a sparse transpose of the storage.
    ///
    /// This is a stable counting sort on the secondary index, so if
    /// the source is traversed in increasing bucket order then entries within
    /// each destination bucket appear in increasing index order.
    ///
    /// `offsets` must have length `secondary_dim + 1`, and `indices` and
    /// `values` length `nnz`.
    ///
    /// # Panics
    /// Panics if the destination lengths are incompatible with the source.
    pub fn transpose_into(&self, offsets: &mut [usize], indices: &mut [usize], values: &mut [T]) {
        assert_eq!(offsets.len(), self.secondary_dim() + 1);
        assert_eq!(indices.len(), self.nnz());
        assert_eq!(values.len(), self.nnz());

        // count the entries in each destination bucket
        offsets.fill(0);
        for &j in self.indices {
            offsets[j] += 1;
        }
        counts_to_offsets(offsets);

        // scatter entries, using offsets[j] as the next
        // fill location in destination bucket j
        for k in 0..self.nbuckets() {
            let rng = self.bucket_range(k);
            for (&j, &v) in zip(&self.indices[rng.clone()], &self.values[rng]) {
                let dest = offsets[j];
                indices[dest] = k;
                values[dest] = v;
                offsets[j] += 1;
            }
        }

        // every offsets[j] now points at the start of bucket j+1
        backshift_offsets(offsets);
    }
}

// in place exclusive prefix sum of bucket counts
fn counts_to_offsets(offsets: &mut [usize]) {
    let mut currentptr = 0;
    for p in offsets.iter_mut() {
        let count = *p;
        *p = currentptr;
        currentptr += count;
    }
}

fn backshift_offsets(offsets: &mut [usize]) {
    offsets.rotate_right(1);
    offsets[0] = 0;
}
