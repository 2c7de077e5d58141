use alloc::vec::Vec;
use core::num::NonZeroU32;
use core::slice;

use amrvis_base::util::ConciseDebug;
use manyfmt::Refmt as _;

use crate::{GridPicture, PictureRegion, PixelSize};

/// One picture of a slice through AMR data: its zoom, its size, and the [`GridPicture`] of
/// every level/box pairing that contributes to it.
///
/// All of the [`GridPicture`]s are kept at the picture's scale and size. Changing them
/// together through [`Picture::change_scale()`] is what keeps the levels aligned with each
/// other after a zoom.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Picture {
    scale: NonZeroU32,
    size: PixelSize,
    grids: Vec<GridPicture>,
}

impl Picture {
    /// Constructs an empty picture with the given zoom and pixel size.
    pub fn new(scale: NonZeroU32, size: PixelSize) -> Self {
        Self {
            scale,
            size,
            grids: Vec::new(),
        }
    }

    /// Adds the mapping of one level/box pairing, at the picture's current scale and size,
    /// and returns it.
    pub fn add(
        &mut self,
        level: usize,
        ref_ratio: NonZeroU32,
        region: PictureRegion,
    ) -> &GridPicture {
        let index = self.grids.len();
        self.grids.push(GridPicture::new(
            level,
            ref_ratio,
            self.scale,
            self.size,
            region,
        ));
        &self.grids[index]
    }

    /// Changes the zoom and size of the picture and every [`GridPicture`] in it.
    pub fn change_scale(&mut self, new_scale: NonZeroU32, new_size: PixelSize) {
        log::debug!(
            "rescaling {count} grid pictures from {old_scale} to {new_scale}, {new_size}",
            count = self.grids.len(),
            old_scale = self.scale,
            new_size = new_size.refmt(&ConciseDebug),
        );
        self.scale = new_scale;
        self.size = new_size;
        for grid in &mut self.grids {
            grid.change_scale(new_scale, new_size);
        }
    }

    /// Removes every [`GridPicture`], keeping the scale and size.
    ///
    /// Used when the visible region changes and the traversal must run again.
    pub fn clear(&mut self) {
        self.grids.clear();
    }

    /// Current zoom, in pixels per reference-level cell.
    pub fn scale(&self) -> NonZeroU32 {
        self.scale
    }

    /// Current size of the picture in pixels.
    pub fn size(&self) -> PixelSize {
        self.size
    }

    /// Iterates over the [`GridPicture`]s in the order they were added.
    pub fn iter(&self) -> slice::Iter<'_, GridPicture> {
        self.grids.iter()
    }

    /// Iterates over the [`GridPicture`]s of one level.
    pub fn grids_at_level(&self, level: usize) -> impl Iterator<Item = &GridPicture> + '_ {
        self.grids.iter().filter(move |grid| grid.level() == level)
    }

    /// Number of [`GridPicture`]s.
    pub fn len(&self) -> usize {
        self.grids.len()
    }

    /// Returns whether there are no [`GridPicture`]s.
    pub fn is_empty(&self) -> bool {
        self.grids.is_empty()
    }
}

impl<'a> IntoIterator for &'a Picture {
    type Item = &'a GridPicture;
    type IntoIter = slice::Iter<'a, GridPicture>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
