//! Axis-aligned integer-coordinate boxes in three-dimensional index space ([`IndexBox`]).

use core::fmt;
use core::num::NonZeroU32;
use core::ops::RangeInclusive;

use crate::math::{
    Axis, IndexCoordinate, IndexLength, IndexPoint, IndexPoint2, IndexRect, IndexSize,
    coarsen_coordinate,
};

/// An axis-aligned box of cells in one AMR level's index space.
///
/// Both corners are *inclusive*: a box from `[0, 0, 0]` to `[3, 3, 3]` contains 4 cells along
/// each axis. Consequently an [`IndexBox`] always contains at least one cell; boxes of an AMR
/// hierarchy are never empty, and “no overlap” is expressed as [`None`] from
/// [`IndexBox::intersection()`].
#[derive(Clone, Copy, Eq, Hash, PartialEq)]
pub struct IndexBox {
    small_end: IndexPoint,
    /// Constructor checks ensure this is not smaller than `small_end` on any axis, and that
    /// every length fits in an [`IndexLength`].
    big_end: IndexPoint,
}

impl IndexBox {
    /// Constructs an [`IndexBox`] from its inclusive lowest and highest cells.
    ///
    /// For example, if on one axis the small end is 5 and the big end is 9,
    /// then the box contains cells 5 through 9 on that axis, a length of 5.
    ///
    /// Panics if any of `big_end` is less than `small_end`.
    /// Use [`IndexBox::checked_from_corners()`] to avoid panics.
    #[track_caller]
    #[allow(clippy::missing_inline_in_public_items, reason = "is generic already")]
    pub fn from_corners(small_end: impl Into<IndexPoint>, big_end: impl Into<IndexPoint>) -> Self {
        Self::checked_from_corners(small_end, big_end).expect("IndexBox::from_corners")
    }

    /// Constructs an [`IndexBox`] from its inclusive lowest and highest cells.
    ///
    /// Returns [`Err`] if any of `big_end` is less than `small_end`, or if the box would span
    /// the entire coordinate range so that its length cannot be represented.
    #[allow(clippy::missing_inline_in_public_items, reason = "is generic already")]
    pub fn checked_from_corners(
        small_end: impl Into<IndexPoint>,
        big_end: impl Into<IndexPoint>,
    ) -> Result<Self, IndexBoxError> {
        let small_end = small_end.into();
        let big_end = big_end.into();
        for axis in Axis::ALL {
            check_span(axis_name(axis), small_end[axis], big_end[axis])?;
        }
        Ok(IndexBox { small_end, big_end })
    }

    /// Constructs an [`IndexBox`] from its lowest cell and its length along each axis.
    ///
    /// Returns [`Err`] if any length is zero or the box would extend past
    /// [`IndexCoordinate::MAX`].
    #[allow(clippy::missing_inline_in_public_items, reason = "is generic already")]
    pub fn from_small_end_size(
        small_end: impl Into<IndexPoint>,
        size: impl Into<IndexSize>,
    ) -> Result<Self, IndexBoxError> {
        let small_end = small_end.into();
        let size = size.into();
        let mut big_end = small_end;
        for axis in Axis::ALL {
            big_end[axis] = big_end_for_size(axis_name(axis), small_end[axis], size[axis])?;
        }
        Self::checked_from_corners(small_end, big_end)
    }

    /// Constructs an [`IndexBox`] containing exactly one cell.
    #[inline]
    pub fn single_cell(cell: impl Into<IndexPoint>) -> Self {
        let cell = cell.into();
        IndexBox {
            small_end: cell,
            big_end: cell,
        }
    }

    /// The lowest cell of the box (inclusive on every axis).
    #[inline]
    pub fn small_end(&self) -> IndexPoint {
        self.small_end
    }

    /// The highest cell of the box (inclusive on every axis).
    #[inline]
    pub fn big_end(&self) -> IndexPoint {
        self.big_end
    }

    /// Number of cells the box spans along `axis`; always at least 1.
    #[inline]
    pub fn length(&self, axis: Axis) -> IndexLength {
        span_length(self.small_end[axis], self.big_end[axis])
    }

    /// Number of cells the box spans along each axis.
    #[inline]
    pub fn size(&self) -> IndexSize {
        IndexSize::new(
            self.length(Axis::X),
            self.length(Axis::Y),
            self.length(Axis::Z),
        )
    }

    /// The inclusive range of coordinates the box covers along `axis`.
    #[inline]
    pub fn axis_range(&self, axis: Axis) -> RangeInclusive<IndexCoordinate> {
        self.small_end[axis]..=self.big_end[axis]
    }

    /// Returns whether the box includes the given cell.
    ///
    /// ```
    /// use amrvis_base::math::IndexBox;
    ///
    /// let b = IndexBox::from_corners([4, 4, 4], [9, 9, 9]);
    /// assert!(!b.contains_cell([3, 5, 5]));
    /// assert!(b.contains_cell([4, 5, 5]));
    /// assert!(b.contains_cell([9, 5, 5]));
    /// assert!(!b.contains_cell([10, 5, 5]));
    /// ```
    #[inline]
    pub fn contains_cell(&self, cell: impl Into<IndexPoint>) -> bool {
        let cell = cell.into();
        Axis::ALL
            .into_iter()
            .all(|axis| self.axis_range(axis).contains(&cell[axis]))
    }

    /// Returns whether this box includes every cell of `other`.
    #[inline]
    pub fn contains_box(&self, other: IndexBox) -> bool {
        Axis::ALL.into_iter().all(|axis| {
            other.small_end[axis] >= self.small_end[axis] && other.big_end[axis] <= self.big_end[axis]
        })
    }

    /// Returns the box of cells that both `self` and `other` contain, or [`None`] if they
    /// are disjoint.
    ///
    /// ```
    /// use amrvis_base::math::IndexBox;
    ///
    /// let a = IndexBox::from_corners([0, 0, 0], [7, 7, 7]);
    /// let b = IndexBox::from_corners([4, -2, 6], [12, 3, 6]);
    /// assert_eq!(a.intersection(b), Some(IndexBox::from_corners([4, 0, 6], [7, 3, 6])));
    /// assert_eq!(a.intersection(IndexBox::single_cell([8, 0, 0])), None);
    /// ```
    #[inline]
    #[must_use]
    pub fn intersection(self, other: IndexBox) -> Option<IndexBox> {
        let small_end = self.small_end.max(other.small_end);
        let big_end = self.big_end.min(other.big_end);
        IndexBox::checked_from_corners(small_end, big_end).ok()
    }

    /// Converts this box to the index space of a level `ratio` times coarser, yielding the
    /// smallest coarse box that covers every cell of `self`.
    ///
    /// Coordinates are divided rounding toward negative infinity, so negative boxes coarsen
    /// consistently with positive ones.
    ///
    /// ```
    /// use core::num::NonZeroU32;
    /// use amrvis_base::math::IndexBox;
    ///
    /// let two = NonZeroU32::new(2).unwrap();
    /// assert_eq!(
    ///     IndexBox::from_corners([-3, 0, 5], [3, 7, 5]).coarsen(two),
    ///     IndexBox::from_corners([-2, 0, 2], [1, 3, 2]),
    /// );
    /// ```
    #[inline]
    #[must_use]
    pub fn coarsen(self, ratio: NonZeroU32) -> Self {
        let ratio = ratio.get();
        IndexBox {
            small_end: self.small_end.map(|c| coarsen_coordinate(c, ratio)),
            big_end: self.big_end.map(|c| coarsen_coordinate(c, ratio)),
        }
    }

    /// Converts this box to the index space of a level `ratio` times finer, yielding the box
    /// of fine cells that exactly tiles `self`.
    ///
    /// Returns [`Err`] if the refined box would not fit in the coordinate range.
    #[inline]
    pub fn refine(self, ratio: NonZeroU32) -> Result<Self, IndexBoxError> {
        let mut small_end = self.small_end;
        let mut big_end = self.big_end;
        for axis in Axis::ALL {
            let (small, big) = refine_span(
                axis_name(axis),
                self.small_end[axis],
                self.big_end[axis],
                ratio,
            )?;
            small_end[axis] = small;
            big_end[axis] = big;
        }
        Self::checked_from_corners(small_end, big_end)
    }

    /// Drops the coordinate pair of the `slice` axis, producing the planar rectangle seen
    /// when looking along that axis.
    ///
    /// The remaining axes keep ascending order, as given by [`Axis::plane_axes()`].
    ///
    /// ```
    /// use amrvis_base::math::{Axis, IndexBox, IndexRect};
    ///
    /// let b = IndexBox::from_corners([0, 0, 2], [3, 3, 2]);
    /// assert_eq!(b.project(Axis::Z), IndexRect::from_corners([0, 0], [3, 3]));
    /// ```
    #[inline]
    pub fn project(&self, slice: Axis) -> IndexRect {
        let (h, v) = slice.plane_axes();
        IndexRect::from_valid_corners(
            IndexPoint2::new(self.small_end[h], self.small_end[v]),
            IndexPoint2::new(self.big_end[h], self.big_end[v]),
        )
    }
}

impl fmt::Debug for IndexBox {
    #[mutants::skip]
    #[allow(clippy::missing_inline_in_public_items)]
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("IndexBox")
            .field(&RangeWithLength(self.axis_range(Axis::X)))
            .field(&RangeWithLength(self.axis_range(Axis::Y)))
            .field(&RangeWithLength(self.axis_range(Axis::Z)))
            .finish()
    }
}

impl From<IndexBox> for euclid::Box3D<IndexCoordinate, crate::math::Cell> {
    /// Converts to a `Box3D` whose `max` is the (inclusive) big end.
    #[inline]
    fn from(value: IndexBox) -> Self {
        euclid::Box3D::new(value.small_end, value.big_end)
    }
}

fn axis_name(axis: Axis) -> &'static str {
    match axis {
        Axis::X => "x",
        Axis::Y => "y",
        Axis::Z => "z",
    }
}

/// Length of an inclusive span whose validity was already checked by [`check_span`].
pub(crate) fn span_length(small: IndexCoordinate, big: IndexCoordinate) -> IndexLength {
    (i64::from(big) - i64::from(small) + 1) as IndexLength
}

pub(crate) fn check_span(
    axis: &'static str,
    small: IndexCoordinate,
    big: IndexCoordinate,
) -> Result<(), IndexBoxError> {
    if big < small {
        Err(IndexBoxError(ErrorKind::Inverted { axis, small, big }))
    } else if i64::from(big) - i64::from(small) >= i64::from(IndexLength::MAX) {
        Err(IndexBoxError(ErrorKind::TooLong { axis, small, big }))
    } else {
        Ok(())
    }
}

pub(crate) fn big_end_for_size(
    axis: &'static str,
    small: IndexCoordinate,
    length: IndexLength,
) -> Result<IndexCoordinate, IndexBoxError> {
    if length == 0 {
        return Err(IndexBoxError(ErrorKind::ZeroLength { axis }));
    }
    IndexCoordinate::try_from(i64::from(small) + i64::from(length) - 1).map_err(|_| {
        IndexBoxError(ErrorKind::SizeOverflow {
            axis,
            small,
            length,
        })
    })
}

pub(crate) fn refine_span(
    axis: &'static str,
    small: IndexCoordinate,
    big: IndexCoordinate,
    ratio: NonZeroU32,
) -> Result<(IndexCoordinate, IndexCoordinate), IndexBoxError> {
    let r = i64::from(ratio.get());
    let overflow = |_| {
        IndexBoxError(ErrorKind::RefineOverflow {
            axis,
            ratio: ratio.get(),
        })
    };
    let small = IndexCoordinate::try_from(i64::from(small) * r).map_err(overflow)?;
    let big = IndexCoordinate::try_from((i64::from(big) + 1) * r - 1).map_err(overflow)?;
    Ok((small, big))
}

/// Error when an [`IndexBox`] or [`IndexRect`] cannot be constructed from the given input.
#[derive(Clone, Copy, Debug, displaydoc::Display, Eq, PartialEq)]
#[displaydoc("{0}")]
pub struct IndexBoxError(ErrorKind);

/// Error details for [`IndexBoxError`].
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
enum ErrorKind {
    Inverted {
        axis: &'static str,
        small: IndexCoordinate,
        big: IndexCoordinate,
    },
    TooLong {
        axis: &'static str,
        small: IndexCoordinate,
        big: IndexCoordinate,
    },
    ZeroLength {
        axis: &'static str,
    },
    SizeOverflow {
        axis: &'static str,
        small: IndexCoordinate,
        length: IndexLength,
    },
    RefineOverflow {
        axis: &'static str,
        ratio: u32,
    },
}

impl fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match *self {
            ErrorKind::Inverted { axis, small, big } => write!(
                f,
                "index box small end {small} is greater than big end {big} on the {axis} axis"
            ),
            ErrorKind::TooLong { axis, small, big } => write!(
                f,
                "index box spanning {small}..={big} on the {axis} axis is too long to measure"
            ),
            ErrorKind::ZeroLength { axis } => {
                write!(f, "index box length on the {axis} axis must be at least 1")
            }
            ErrorKind::SizeOverflow {
                axis,
                small,
                length,
            } => write!(
                f,
                "index box starting at {small} with length {length} \
                    overflows on the {axis} axis"
            ),
            ErrorKind::RefineOverflow { axis, ratio } => write!(
                f,
                "refining index box by {ratio} overflowed on the {axis} axis"
            ),
        }
    }
}

impl core::error::Error for IndexBoxError {}

/// `Debug`-formatting helper
pub(crate) struct RangeWithLength(pub(crate) RangeInclusive<IndexCoordinate>);
impl fmt::Debug for RangeWithLength {
    #[allow(clippy::missing_inline_in_public_items)]
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let range = &self.0;
        if f.alternate() {
            write!(
                f,
                "{range:?} ({len})",
                len = span_length(*range.start(), *range.end())
            )
        } else {
            range.fmt(f)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use indoc::indoc;
    use pretty_assertions::assert_eq;
    use std::string::ToString as _;

    fn nz(value: u32) -> NonZeroU32 {
        NonZeroU32::new(value).unwrap()
    }

    #[test]
    fn lengths_are_inclusive() {
        let b = IndexBox::from_corners([0, 0, 0], [3, 3, 3]);
        assert_eq!(b.size(), IndexSize::new(4, 4, 4));
        assert_eq!(IndexBox::single_cell([5, -5, 0]).size(), IndexSize::new(1, 1, 1));
    }

    #[test]
    fn from_small_end_size() {
        assert_eq!(
            IndexBox::from_small_end_size([1, 2, 3], [10, 20, 30]),
            Ok(IndexBox::from_corners([1, 2, 3], [10, 21, 32]))
        );
        assert_eq!(
            IndexBox::from_small_end_size([1, 2, 3], [10, 0, 30])
                .unwrap_err()
                .to_string(),
            "index box length on the y axis must be at least 1"
        );
        assert_eq!(
            IndexBox::from_small_end_size([IndexCoordinate::MAX, 0, 0], [2, 1, 1])
                .unwrap_err()
                .to_string(),
            "index box starting at 2147483647 with length 2 overflows on the x axis"
        );
    }

    #[test]
    fn inverted_error() {
        assert_eq!(
            IndexBox::checked_from_corners([0, 5, 0], [3, 4, 3])
                .unwrap_err()
                .to_string(),
            "index box small end 5 is greater than big end 4 on the y axis"
        );
    }

    #[test]
    #[should_panic(expected = "IndexBox::from_corners")]
    fn inverted_panic() {
        let _ = IndexBox::from_corners([0, 0, 9], [0, 0, 8]);
    }

    #[test]
    fn too_long_error() {
        let err = IndexBox::checked_from_corners(
            [IndexCoordinate::MIN, 0, 0],
            [IndexCoordinate::MAX, 0, 0],
        )
        .unwrap_err();
        assert_eq!(
            err.to_string(),
            "index box spanning -2147483648..=2147483647 on the x axis is too long to measure"
        );

        // One cell shorter is fine.
        let b =
            IndexBox::from_corners([IndexCoordinate::MIN, 0, 0], [IndexCoordinate::MAX - 1, 0, 0]);
        assert_eq!(b.length(Axis::X), IndexLength::MAX);
    }

    #[test]
    fn contains_box() {
        let outer = IndexBox::from_corners([0, 0, 0], [7, 7, 7]);
        assert!(outer.contains_box(outer));
        assert!(outer.contains_box(IndexBox::from_corners([2, 2, 2], [7, 3, 4])));
        assert!(!outer.contains_box(IndexBox::from_corners([2, 2, 2], [8, 3, 4])));
        assert!(!outer.contains_box(IndexBox::from_corners([-1, 2, 2], [3, 3, 4])));
    }

    #[test]
    fn intersection_is_commutative() {
        let a = IndexBox::from_corners([0, 0, 0], [7, 7, 7]);
        let b = IndexBox::from_corners([5, -3, 2], [9, 2, 2]);
        assert_eq!(a.intersection(b), b.intersection(a));
        assert_eq!(
            a.intersection(b),
            Some(IndexBox::from_corners([5, 0, 2], [7, 2, 2]))
        );
    }

    #[test]
    fn refine_then_coarsen() {
        let b = IndexBox::from_corners([-3, 0, 5], [3, 7, 5]);
        for ratio in [1, 2, 3, 4, 16] {
            let fine = b.refine(nz(ratio)).unwrap();
            assert_eq!(fine.length(Axis::X), 7 * ratio);
            assert_eq!(fine.coarsen(nz(ratio)), b, "ratio {ratio}");
        }
    }

    #[test]
    fn refine_exact_tiling() {
        assert_eq!(
            IndexBox::from_corners([0, 1, -1], [3, 1, -1]).refine(nz(2)),
            Ok(IndexBox::from_corners([0, 2, -2], [7, 3, -1]))
        );
    }

    #[test]
    fn refine_overflow() {
        let b = IndexBox::from_corners([0, 0, 0], [IndexCoordinate::MAX / 2, 0, 0]);
        assert_eq!(
            b.refine(nz(4)).unwrap_err().to_string(),
            "refining index box by 4 overflowed on the x axis"
        );
    }

    #[test]
    fn project_each_axis() {
        let b = IndexBox::from_corners([1, 2, 3], [4, 5, 6]);
        assert_eq!(b.project(Axis::X), IndexRect::from_corners([2, 3], [5, 6]));
        assert_eq!(b.project(Axis::Y), IndexRect::from_corners([1, 3], [4, 6]));
        assert_eq!(b.project(Axis::Z), IndexRect::from_corners([1, 2], [4, 5]));
    }

    #[test]
    fn debug() {
        let b = IndexBox::from_corners([1, 2, 3], [10, 21, 32]);
        assert_eq!(format!("{b:?}"), "IndexBox(1..=10, 2..=21, 3..=32)");
        assert_eq!(
            format!("{b:#?}\n"),
            indoc! {"
                IndexBox(
                    1..=10 (10),
                    2..=21 (20),
                    3..=32 (30),
                )
            "}
        );
    }
}
