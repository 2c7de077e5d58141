//! Picture-space coordinates and the scaling from index space into them.

use core::num::NonZeroU32;

use amrvis_base::math::IndexLength;

/// Unit of measure for picture space: one screen pixel.
#[allow(clippy::exhaustive_enums)]
#[derive(Debug)]
pub enum Pixel {}

/// Pixel extents. Width is horizontal, height is vertical.
pub type PixelSize = euclid::Size2D<u32, Pixel>;

/// Pixel positions, with the origin at the top left corner of the picture and
/// vertical coordinates increasing downward.
pub type PixelPoint = euclid::Point2D<i32, Pixel>;

/// Pixel rectangles, with exclusive `max` as is usual for `euclid` boxes.
pub type PixelRect = euclid::Box2D<i32, Pixel>;

/// Number of pixels that `cells` cells of a level with refinement ratio `ref_ratio` occupy at
/// zoom `scale`.
///
/// The product is taken before the division, and the division truncates. Boxes of one level
/// tile their index space exactly, so truncating the *product* keeps adjacent boxes from
/// overlapping in pixel space; the price is an occasional one-pixel gap when `ref_ratio` does
/// not divide `cells * scale`.
pub(crate) fn scaled_length(cells: IndexLength, scale: NonZeroU32, ref_ratio: NonZeroU32) -> u32 {
    let pixels = u64::from(cells) * u64::from(scale.get()) / u64::from(ref_ratio.get());
    debug_assert!(
        pixels <= u64::from(u32::MAX),
        "{cells} cells at scale {scale}/{ref_ratio} do not fit in a pixel extent"
    );
    u32::try_from(pixels).unwrap_or(u32::MAX)
}

/// Pixel offset of a position `cells` cells away from the picture origin, using the same
/// factor as [`scaled_length()`] but rounding toward negative infinity so that negative
/// offsets stay consistent with positive ones.
pub(crate) fn scaled_offset(cells: i64, scale: NonZeroU32, ref_ratio: NonZeroU32) -> i64 {
    (cells * i64::from(scale.get())).div_euclid(i64::from(ref_ratio.get()))
}

/// Converts a picture coordinate computed in `i64` to [`PixelPoint`]'s coordinate type,
/// saturating at the ends of the range.
pub(crate) fn saturate_coordinate(value: i64) -> i32 {
    value.clamp(i64::from(i32::MIN), i64::from(i32::MAX)) as i32
}
