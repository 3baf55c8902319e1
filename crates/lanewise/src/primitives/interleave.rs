//! Flat views of interleaved 2- and 3-field records.
//!
//! ## Purpose
//!
//! Geometry-style callers store points as `[T; 2]` or `[T; 3]` records. This
//! module reinterprets such arrays as flat scalar buffers (and back) so they can
//! be passed to the pair and triplet operations without copying.
//!
//! ## Design notes
//!
//! * **Layout**: `[T; N]` has no padding and fields in declaration order, so the
//!   flat buffer holds `x0, y0, x1, y1, ...`. The casts go through `bytemuck`.
//! * **Shape checks**: Flat-to-record conversions report `ArgumentShape` when the
//!   length is not a multiple of the record width.

// External dependencies
use bytemuck::Pod;

// Internal dependencies
use crate::primitives::errors::TensorError;

/// View 2-field records as a flat buffer of `2 * records.len()` elements.
#[inline]
pub fn flatten_pairs<T: Pod>(records: &[[T; 2]]) -> &[T] {
    bytemuck::cast_slice(records)
}

/// Mutable form of [`flatten_pairs`].
#[inline]
pub fn flatten_pairs_mut<T: Pod>(records: &mut [[T; 2]]) -> &mut [T] {
    bytemuck::cast_slice_mut(records)
}

/// View 3-field records as a flat buffer of `3 * records.len()` elements.
#[inline]
pub fn flatten_triplets<T: Pod>(records: &[[T; 3]]) -> &[T] {
    bytemuck::cast_slice(records)
}

/// Mutable form of [`flatten_triplets`].
#[inline]
pub fn flatten_triplets_mut<T: Pod>(records: &mut [[T; 3]]) -> &mut [T] {
    bytemuck::cast_slice_mut(records)
}

/// View a flat buffer as 2-field records.
pub fn as_pairs<T: Pod>(flat: &[T]) -> Result<&[[T; 2]], TensorError> {
    if flat.len() % 2 != 0 {
        return Err(TensorError::ArgumentShape {
            len: flat.len(),
            stride: 2,
        });
    }
    Ok(bytemuck::cast_slice(flat))
}

/// View a flat buffer as 3-field records.
pub fn as_triplets<T: Pod>(flat: &[T]) -> Result<&[[T; 3]], TensorError> {
    if flat.len() % 3 != 0 {
        return Err(TensorError::ArgumentShape {
            len: flat.len(),
            stride: 3,
        });
    }
    Ok(bytemuck::cast_slice(flat))
}
