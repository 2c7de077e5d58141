//! Mapping of adaptive mesh refinement (AMR) data onto the pixels of a 2-D picture.
//!
//! An AMR hierarchy is a stack of levels, each a union of integer [`IndexBox`]es, where every
//! level refines the one below it by an integer ratio. To draw a slice of such data, a
//! traversal finds, level by level, the boxes that intersect the visible region, and builds a
//! [`GridPicture`] for each. The [`GridPicture`] answers the only questions a rasterizer needs
//! about geometry: how many pixels the data occupies and where in the picture it goes.
//! When the user zooms, [`Picture::change_scale()`] updates every [`GridPicture`] of the
//! picture at once, without the traversal having to run again.
//!
//! Pixel *contents* are out of scope; [`PixelFormat`] only describes the layout a rasterizer
//! must produce.
//!
//! ## Package features
//!
//! * `std` (default): adds the [`logging`] module.
//! * `serde`: implements serialization for [`PixelFormat`] and the `amrvis-base` box types.
//!
//! [`IndexBox`]: amrvis_base::math::IndexBox

#![no_std]

extern crate alloc;

#[cfg(any(feature = "std", test))]
#[cfg_attr(test, macro_use)]
extern crate std;

mod grid_picture;
pub use grid_picture::*;

#[cfg(feature = "std")]
pub mod logging;

mod picture;
pub use picture::*;

mod pixel;
pub use pixel::*;

mod pixel_format;
pub use pixel_format::*;

mod region;
pub use region::*;
