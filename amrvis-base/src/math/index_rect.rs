use core::fmt;
use core::num::NonZeroU32;
use core::ops::RangeInclusive;

use crate::math::index_box::{
    RangeWithLength, big_end_for_size, check_span, refine_span, span_length,
};
use crate::math::{
    IndexBoxError, IndexCoordinate, IndexLength, IndexPoint2, IndexSize2, coarsen_coordinate,
};

/// An axis-aligned rectangle of cells in a two-dimensional index plane.
///
/// This is the planar counterpart of [`IndexBox`](crate::math::IndexBox): either the native
/// index space of two-dimensional data, or a slice of three-dimensional index space produced
/// by [`IndexBox::project()`](crate::math::IndexBox::project). Its axes are called
/// *horizontal* and *vertical* rather than X and Y, since after slicing they may be any two of
/// the three spatial axes.
///
/// Like [`IndexBox`](crate::math::IndexBox), both corners are inclusive.
#[derive(Clone, Copy, Eq, Hash, PartialEq)]
pub struct IndexRect {
    small_end: IndexPoint2,
    /// Constructor checks ensure this is not smaller than `small_end` on either axis.
    big_end: IndexPoint2,
}

impl IndexRect {
    /// Constructs an [`IndexRect`] from its inclusive lowest and highest cells.
    ///
    /// Panics if any of `big_end` is less than `small_end`.
    /// Use [`IndexRect::checked_from_corners()`] to avoid panics.
    #[track_caller]
    #[allow(clippy::missing_inline_in_public_items, reason = "is generic already")]
    pub fn from_corners(
        small_end: impl Into<IndexPoint2>,
        big_end: impl Into<IndexPoint2>,
    ) -> Self {
        Self::checked_from_corners(small_end, big_end).expect("IndexRect::from_corners")
    }

    /// Constructs an [`IndexRect`] from its inclusive lowest and highest cells.
    ///
    /// Returns [`Err`] if any of `big_end` is less than `small_end`.
    #[allow(clippy::missing_inline_in_public_items, reason = "is generic already")]
    pub fn checked_from_corners(
        small_end: impl Into<IndexPoint2>,
        big_end: impl Into<IndexPoint2>,
    ) -> Result<Self, IndexBoxError> {
        let small_end = small_end.into();
        let big_end = big_end.into();
        check_span("horizontal", small_end.x, big_end.x)?;
        check_span("vertical", small_end.y, big_end.y)?;
        Ok(IndexRect { small_end, big_end })
    }

    /// Constructs an [`IndexRect`] from its lowest cell and its lengths.
    ///
    /// Returns [`Err`] if any length is zero or the rectangle would extend past
    /// [`IndexCoordinate::MAX`].
    #[allow(clippy::missing_inline_in_public_items, reason = "is generic already")]
    pub fn from_small_end_size(
        small_end: impl Into<IndexPoint2>,
        size: impl Into<IndexSize2>,
    ) -> Result<Self, IndexBoxError> {
        let small_end = small_end.into();
        let size = size.into();
        let big_end = IndexPoint2::new(
            big_end_for_size("horizontal", small_end.x, size.width)?,
            big_end_for_size("vertical", small_end.y, size.height)?,
        );
        Self::checked_from_corners(small_end, big_end)
    }

    /// For corners taken from an already-valid box.
    pub(crate) fn from_valid_corners(small_end: IndexPoint2, big_end: IndexPoint2) -> Self {
        debug_assert!(check_span("horizontal", small_end.x, big_end.x).is_ok());
        debug_assert!(check_span("vertical", small_end.y, big_end.y).is_ok());
        IndexRect { small_end, big_end }
    }

    /// The lowest cell of the rectangle (inclusive).
    #[inline]
    pub fn small_end(&self) -> IndexPoint2 {
        self.small_end
    }

    /// The highest cell of the rectangle (inclusive).
    #[inline]
    pub fn big_end(&self) -> IndexPoint2 {
        self.big_end
    }

    /// Number of cells spanned horizontally; always at least 1.
    #[inline]
    pub fn length_h(&self) -> IndexLength {
        span_length(self.small_end.x, self.big_end.x)
    }

    /// Number of cells spanned vertically; always at least 1.
    #[inline]
    pub fn length_v(&self) -> IndexLength {
        span_length(self.small_end.y, self.big_end.y)
    }

    /// Number of cells spanned along each axis.
    #[inline]
    pub fn size(&self) -> IndexSize2 {
        IndexSize2::new(self.length_h(), self.length_v())
    }

    /// The inclusive range of horizontal coordinates.
    #[inline]
    pub fn h_range(&self) -> RangeInclusive<IndexCoordinate> {
        self.small_end.x..=self.big_end.x
    }

    /// The inclusive range of vertical coordinates.
    #[inline]
    pub fn v_range(&self) -> RangeInclusive<IndexCoordinate> {
        self.small_end.y..=self.big_end.y
    }

    /// Returns whether this rectangle includes every cell of `other`.
    #[inline]
    pub fn contains_rect(&self, other: IndexRect) -> bool {
        other.small_end.x >= self.small_end.x
            && other.small_end.y >= self.small_end.y
            && other.big_end.x <= self.big_end.x
            && other.big_end.y <= self.big_end.y
    }

    /// Returns the rectangle of cells that both `self` and `other` contain, or [`None`] if
    /// they are disjoint.
    #[inline]
    #[must_use]
    pub fn intersection(self, other: IndexRect) -> Option<IndexRect> {
        IndexRect::checked_from_corners(
            self.small_end.max(other.small_end),
            self.big_end.min(other.big_end),
        )
        .ok()
    }

    /// Converts this rectangle to the index space of a level `ratio` times coarser.
    ///
    /// See [`IndexBox::coarsen()`](crate::math::IndexBox::coarsen).
    #[inline]
    #[must_use]
    pub fn coarsen(self, ratio: NonZeroU32) -> Self {
        let ratio = ratio.get();
        IndexRect {
            small_end: self.small_end.map(|c| coarsen_coordinate(c, ratio)),
            big_end: self.big_end.map(|c| coarsen_coordinate(c, ratio)),
        }
    }

    /// Converts this rectangle to the index space of a level `ratio` times finer.
    ///
    /// See [`IndexBox::refine()`](crate::math::IndexBox::refine).
    #[inline]
    pub fn refine(self, ratio: NonZeroU32) -> Result<Self, IndexBoxError> {
        let (small_h, big_h) =
            refine_span("horizontal", self.small_end.x, self.big_end.x, ratio)?;
        let (small_v, big_v) = refine_span("vertical", self.small_end.y, self.big_end.y, ratio)?;
        Self::checked_from_corners(
            IndexPoint2::new(small_h, small_v),
            IndexPoint2::new(big_h, big_v),
        )
    }
}

impl fmt::Debug for IndexRect {
    #[mutants::skip]
    #[allow(clippy::missing_inline_in_public_items)]
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("IndexRect")
            .field(&RangeWithLength(self.h_range()))
            .field(&RangeWithLength(self.v_range()))
            .finish()
    }
}

impl From<IndexRect> for euclid::Box2D<IndexCoordinate, crate::math::Cell> {
    /// Converts to a `Box2D` whose `max` is the (inclusive) big end.
    #[inline]
    fn from(value: IndexRect) -> Self {
        euclid::Box2D::new(value.small_end, value.big_end)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use std::string::ToString as _;

    #[test]
    fn four_by_four() {
        let r = IndexRect::from_corners([0, 0], [3, 3]);
        assert_eq!(r.size(), IndexSize2::new(4, 4));
        assert_eq!(r.length_h(), 4);
        assert_eq!(r.length_v(), 4);
    }

    #[test]
    fn from_small_end_size() {
        assert_eq!(
            IndexRect::from_small_end_size([-2, 5], [3, 1]),
            Ok(IndexRect::from_corners([-2, 5], [0, 5]))
        );
        assert_eq!(
            IndexRect::from_small_end_size([0, 0], [0, 1])
                .unwrap_err()
                .to_string(),
            "index box length on the horizontal axis must be at least 1"
        );
    }

    #[test]
    fn inverted_names_plane_axis() {
        assert_eq!(
            IndexRect::checked_from_corners([0, 3], [1, 2])
                .unwrap_err()
                .to_string(),
            "index box small end 3 is greater than big end 2 on the vertical axis"
        );
    }

    #[test]
    fn contains_and_intersect() {
        let outer = IndexRect::from_corners([0, 0], [7, 7]);
        let inner = IndexRect::from_corners([2, 4], [3, 7]);
        assert!(outer.contains_rect(inner));
        assert!(!inner.contains_rect(outer));
        assert_eq!(outer.intersection(inner), Some(inner));
        assert_eq!(
            outer.intersection(IndexRect::from_corners([8, 0], [9, 9])),
            None
        );
    }

    #[test]
    fn coarsen_refine() {
        let two = NonZeroU32::new(2).unwrap();
        let r = IndexRect::from_corners([0, 0], [3, 3]);
        assert_eq!(r.refine(two), Ok(IndexRect::from_corners([0, 0], [7, 7])));
        assert_eq!(r.refine(two).unwrap().coarsen(two), r);
        assert_eq!(
            IndexRect::from_corners([1, -1], [4, 2]).coarsen(two),
            IndexRect::from_corners([0, -1], [2, 1])
        );
    }

    #[test]
    fn debug() {
        let r = IndexRect::from_corners([0, -4], [3, 3]);
        assert_eq!(format!("{r:?}"), "IndexRect(0..=3, -4..=3)");
        assert_eq!(
            format!("{r:#?}"),
            "IndexRect(\n    0..=3 (4),\n    -4..=3 (8),\n)"
        );
    }
}
