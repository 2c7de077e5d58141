use core::num::NonZeroU32;

use amrvis_base::math::{Axis, IndexRect};
use amrvis_base::util::ConciseDebug;
use amrvis_base::util::log::GRID_PICTURE_TARGET;
use manyfmt::Refmt as _;

use crate::pixel::{saturate_coordinate, scaled_length, scaled_offset};
use crate::{PictureRegion, PixelPoint, PixelRect, PixelSize};

/// Maps the part of one AMR level that overlaps the visible region onto picture pixels.
///
/// A [`GridPicture`] is built by the traversal that discovers which boxes of which levels
/// intersect the view, one per level/box pairing, and is then read by the rasterizer that
/// paints each level's contribution.
///
/// # Scaling
///
/// `scale` is the zoom: the number of pixels per cell of the *reference* level, the level
/// whose `ref_ratio` is 1. A level whose cells are `ref_ratio` times smaller than the
/// reference level's gets `scale / ref_ratio` pixels per cell. Every pixel extent is computed
/// as `(cells * scale) / ref_ratio` with truncating division; see [`GridPicture::image_size()`].
///
/// # Placement
///
/// The picture's origin in index space is the small end of the overlap rectangle. Horizontal
/// pixel coordinates increase with the index. Vertical pixel coordinates are flipped: index
/// space increases upward, the picture downward, and the bottom row of the overlap rectangle
/// rests on the bottom edge of the picture. Every [`GridPicture`] of one picture uses this
/// convention, so when the overlap rectangles of different levels cover the same region,
/// their data lines up pixel for pixel.
///
/// # State
///
/// The sizes are cached, but always derived from the stored rectangles: after
/// [`GridPicture::change_scale()`] they are exactly what a new [`GridPicture`] at the new
/// scale would have.
#[derive(Clone, Debug, Eq, Hash, PartialEq)]
pub struct GridPicture {
    level: usize,
    ref_ratio: NonZeroU32,
    scale: NonZeroU32,
    picture_size: PixelSize,
    slice: Option<Axis>,
    overlap_rect: IndexRect,
    /// The data box after projection into the picture plane.
    image_rect: IndexRect,

    // Derived from the above by `recompute_sizes()`.
    data_size: PixelSize,
    image_size: PixelSize,
}

impl GridPicture {
    /// Constructs the mapping for one level/box pairing.
    ///
    /// * `level` is the AMR level number, kept for diagnostics.
    /// * `ref_ratio` is how many of this level's cells span one cell of the reference level.
    /// * `scale` is the number of pixels per reference-level cell.
    /// * `picture_size` is the current size of the enclosing picture.
    /// * `region` gives the overlap and data boxes, and the slice axis if the data is
    ///   three-dimensional.
    pub fn new(
        level: usize,
        ref_ratio: NonZeroU32,
        scale: NonZeroU32,
        picture_size: PixelSize,
        region: PictureRegion,
    ) -> Self {
        let mut this = GridPicture {
            level,
            ref_ratio,
            scale,
            picture_size,
            slice: region.slice(),
            overlap_rect: region.overlap_rect(),
            image_rect: region.data_rect(),
            data_size: PixelSize::zero(),
            image_size: PixelSize::zero(),
        };
        this.recompute_sizes();
        log::trace!(
            target: GRID_PICTURE_TARGET,
            "level {level} ratio {ref_ratio}: data {data} in overlap {overlap} \
                is {data_size} of {image_size} px at scale {scale}",
            data = this.image_rect.refmt(&ConciseDebug),
            overlap = this.overlap_rect.refmt(&ConciseDebug),
            data_size = this.data_size.refmt(&ConciseDebug),
            image_size = this.image_size.refmt(&ConciseDebug),
        );
        this
    }

    /// Changes the zoom and the enclosing picture's size.
    ///
    /// Sizes are recomputed from the stored rectangles, so the result depends only on the
    /// latest `new_scale`, never on the scales used before.
    ///
    /// Every [`GridPicture`] of a picture must be given the same values before any of their
    /// placements is used again; [`Picture::change_scale()`](crate::Picture::change_scale)
    /// takes care of that.
    pub fn change_scale(&mut self, new_scale: NonZeroU32, new_picture_size: PixelSize) {
        self.scale = new_scale;
        self.picture_size = new_picture_size;
        self.recompute_sizes();
        log::trace!(
            target: GRID_PICTURE_TARGET,
            "level {level} rescaled to {new_scale}: {image_size} px",
            level = self.level,
            image_size = self.image_size.refmt(&ConciseDebug),
        );
    }

    fn recompute_sizes(&mut self) {
        let Self {
            ref_ratio,
            scale,
            overlap_rect,
            image_rect,
            ..
        } = *self;
        self.data_size = PixelSize::new(
            scaled_length(image_rect.length_h(), scale, ref_ratio),
            scaled_length(image_rect.length_v(), scale, ref_ratio),
        );
        self.image_size = PixelSize::new(
            scaled_length(overlap_rect.length_h(), scale, ref_ratio),
            scaled_length(overlap_rect.length_v(), scale, ref_ratio),
        );
    }

    /// The AMR level number this mapping was built for.
    pub fn level(&self) -> usize {
        self.level
    }

    /// How many of this level's cells span one reference-level cell.
    pub fn ref_ratio(&self) -> NonZeroU32 {
        self.ref_ratio
    }

    /// Current zoom, in pixels per reference-level cell.
    pub fn scale(&self) -> NonZeroU32 {
        self.scale
    }

    /// The enclosing picture's size as of the last construction or rescale.
    pub fn picture_size(&self) -> PixelSize {
        self.picture_size
    }

    /// The slice axis, or [`None`] if the data is natively planar.
    pub fn slice(&self) -> Option<Axis> {
        self.slice
    }

    /// The overlap box, projected into the picture plane.
    pub fn overlap_box(&self) -> IndexRect {
        self.overlap_rect
    }

    /// The data box, projected into the picture plane.
    pub fn image_box(&self) -> IndexRect {
        self.image_rect
    }

    /// Pixel extent of the data box.
    pub fn data_size(&self) -> PixelSize {
        self.data_size
    }

    /// Pixel extent of the whole overlap box.
    ///
    /// ```
    /// use core::num::NonZeroU32;
    /// use amrvis_base::math::IndexRect;
    /// use amrvis_render::{GridPicture, PictureRegion, PixelSize};
    ///
    /// let rect = IndexRect::from_corners([0, 0], [3, 3]);
    /// let picture = GridPicture::new(
    ///     0,
    ///     NonZeroU32::new(2).unwrap(),
    ///     NonZeroU32::new(10).unwrap(),
    ///     PixelSize::new(40, 40),
    ///     PictureRegion::Planar { overlap: rect, data: rect },
    /// );
    /// // 4 cells × 10 pixels per reference cell ÷ 2 cells per reference cell
    /// assert_eq!(picture.image_size(), PixelSize::new(20, 20));
    /// ```
    pub fn image_size(&self) -> PixelSize {
        self.image_size
    }

    /// Horizontal pixel extent of the whole overlap box.
    pub fn image_size_h(&self) -> u32 {
        self.image_size.width
    }

    /// Vertical pixel extent of the whole overlap box.
    pub fn image_size_v(&self) -> u32 {
        self.image_size.height
    }

    /// Pixel column of the left edge of the data box, relative to the picture's left edge.
    pub fn h_position_in_picture(&self) -> i32 {
        let cells = i64::from(self.image_rect.small_end().x)
            - i64::from(self.overlap_rect.small_end().x);
        saturate_coordinate(scaled_offset(cells, self.scale, self.ref_ratio))
    }

    /// Pixel row of the top edge of the data box, relative to the picture's top edge.
    ///
    /// The top edge of the data box is the upper side of its highest row of cells; it is
    /// measured from the bottom of the picture and then flipped.
    pub fn v_position_in_picture(&self) -> i32 {
        let cells_above_origin = i64::from(self.image_rect.big_end().y) + 1
            - i64::from(self.overlap_rect.small_end().y);
        saturate_coordinate(
            i64::from(self.picture_size.height)
                - scaled_offset(cells_above_origin, self.scale, self.ref_ratio),
        )
    }

    /// Pixel position of the top left corner of the data box.
    pub fn position_in_picture(&self) -> PixelPoint {
        PixelPoint::new(self.h_position_in_picture(), self.v_position_in_picture())
    }

    /// Pixel rectangle which the data box occupies in the picture.
    pub fn data_rect_in_picture(&self) -> PixelRect {
        let origin = self.position_in_picture();
        PixelRect::new(
            origin,
            PixelPoint::new(
                saturate_coordinate(i64::from(origin.x) + i64::from(self.data_size.width)),
                saturate_coordinate(i64::from(origin.y) + i64::from(self.data_size.height)),
            ),
        )
    }

    /// The exact number of pixels per cell of this level, as the fraction
    /// `(scale, ref_ratio)`. Pixel extents are this fraction times a cell count, truncated.
    pub fn pixels_per_cell(&self) -> (u32, u32) {
        (self.scale.get(), self.ref_ratio.get())
    }
}
