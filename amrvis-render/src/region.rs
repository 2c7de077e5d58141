use amrvis_base::math::{Axis, IndexBox, IndexRect};

/// The index-space input of a [`GridPicture`](crate::GridPicture): the part of one level
/// that overlaps the visible region, and the part of that which holds data.
///
/// The two variants keep planar data and slices of volume data statically apart, so a
/// three-dimensional box can never be mistaken for a planar one or vice versa.
///
/// In valid AMR usage `data` lies within `overlap`. This is not checked; if it does not hold,
/// the data extent may exceed the overlap extent and its placement may fall outside the
/// overlap's part of the picture.
#[expect(clippy::exhaustive_enums)]
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub enum PictureRegion {
    /// Natively two-dimensional data; the rectangles are used as they are.
    Planar {
        /// Cells of this level within the visible region.
        overlap: IndexRect,
        /// Cells which hold data to be drawn.
        data: IndexRect,
    },
    /// A slice through three-dimensional data, looking along `slice`.
    ///
    /// The coordinates along `slice` are dropped; the remaining axes, in ascending order,
    /// become the picture's horizontal and vertical axes.
    Sliced {
        /// Cells of this level within the visible region.
        overlap: IndexBox,
        /// Cells which hold data to be drawn.
        data: IndexBox,
        /// The axis held fixed.
        slice: Axis,
    },
}

impl PictureRegion {
    /// The overlap region as seen in the picture plane.
    pub fn overlap_rect(&self) -> IndexRect {
        match *self {
            PictureRegion::Planar { overlap, .. } => overlap,
            PictureRegion::Sliced { overlap, slice, .. } => overlap.project(slice),
        }
    }

    /// The data region as seen in the picture plane.
    pub fn data_rect(&self) -> IndexRect {
        match *self {
            PictureRegion::Planar { data, .. } => data,
            PictureRegion::Sliced { data, slice, .. } => data.project(slice),
        }
    }

    /// The slice axis, or [`None`] for planar data.
    pub fn slice(&self) -> Option<Axis> {
        match *self {
            PictureRegion::Planar { .. } => None,
            PictureRegion::Sliced { slice, .. } => Some(slice),
        }
    }
}
