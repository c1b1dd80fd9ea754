//! Circular shifting of `ndarray` buffers

use ndarray::{Array, ArrayView, Axis, Dimension, Slice};

/// Shift elements forward along `axis`, wrapping the overflow to the front
///
/// Matches `out[i] = in[(i - shift) mod len]`, so a shift equal to the axis
/// length (or any multiple) is the identity.
pub fn roll<A: Clone, D: Dimension>(
    array: ArrayView<'_, A, D>,
    shift: usize,
    axis: Axis,
) -> Array<A, D> {
    let mut rolled = array.to_owned();
    let len = array.len_of(axis);
    if len == 0 {
        return rolled;
    }

    let shift = shift % len;
    if shift == 0 {
        return rolled;
    }

    rolled
        .slice_axis_mut(axis, Slice::from(shift..))
        .assign(&array.slice_axis(axis, Slice::from(..len - shift)));
    rolled
        .slice_axis_mut(axis, Slice::from(..shift))
        .assign(&array.slice_axis(axis, Slice::from(len - shift..)));
    rolled
}
