//! Numeric types used for index-space coordinates and related quantities.

use euclid::{Point2D, Point3D, Size2D, Size3D};

/// Unit of measure for index space: one cell of some AMR level.
///
/// Which level is meant is not tracked by the type system; code that mixes levels must
/// convert explicitly with [`IndexBox::coarsen()`] or [`IndexBox::refine()`].
#[allow(clippy::exhaustive_enums)]
#[derive(Debug)]
pub enum Cell {}

/// Coordinates of cells in a level's index space.
pub type IndexCoordinate = i32;

/// Numeric type of box lengths in index space.
pub type IndexLength = u32;

/// Positions of cells in three-dimensional index space.
pub type IndexPoint = Point3D<IndexCoordinate, Cell>;

/// Positions of cells in a two-dimensional (possibly sliced) index plane.
pub type IndexPoint2 = Point2D<IndexCoordinate, Cell>;

/// Lengths of an [`IndexBox`], counted in cells.
pub type IndexSize = Size3D<IndexLength, Cell>;

/// Lengths of an [`IndexRect`], counted in cells.
pub type IndexSize2 = Size2D<IndexLength, Cell>;

#[cfg(doc)]
use crate::math::{IndexBox, IndexRect};
