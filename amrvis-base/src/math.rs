//! Index-space geometry: axes, integer boxes, and rotations.

mod axis;
pub use axis::*;
mod coord;
pub use coord::*;
mod index_box;
pub use index_box::*;
mod index_rect;
pub use index_rect::*;
mod quaternion;
pub use quaternion::*;
#[cfg(feature = "serde")]
mod serde_impls;

// Index arithmetic widens `i32` coordinates into `i64` and `u32` lengths into `usize`.
#[cfg(target_pointer_width = "16")]
compile_error!("amrvis does not support platforms with less than 32-bit `usize`");

/// Floor division of an index coordinate by a positive ratio, as used when coarsening.
///
/// Rounds toward negative infinity, so that cell `-1` at a fine level belongs to cell `-1`
/// at the coarse level rather than cell `0`.
#[inline]
#[doc(hidden)]
pub const fn coarsen_coordinate(coordinate: IndexCoordinate, ratio: u32) -> IndexCoordinate {
    let ratio = ratio as i64;
    (coordinate as i64).div_euclid(ratio) as IndexCoordinate
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn coarsen_coordinate_floors() {
        assert_eq!(coarsen_coordinate(7, 2), 3);
        assert_eq!(coarsen_coordinate(8, 2), 4);
        assert_eq!(coarsen_coordinate(-1, 2), -1);
        assert_eq!(coarsen_coordinate(-2, 2), -1);
        assert_eq!(coarsen_coordinate(-3, 2), -2);
        assert_eq!(coarsen_coordinate(5, 1), 5);
    }
}
