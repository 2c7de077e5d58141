//! Index-space geometry shared by the AMR visualization crates.
//!
//! This library defines the integer boxes that adaptive mesh refinement levels are made of
//! ([`math::IndexBox`] and its planar counterpart [`math::IndexRect`]), the spatial
//! [`math::Axis`] used to pick a slice plane, and the [`math::Quaternion`] used to rotate
//! derived isosurfaces. Pixel-space mapping lives in `amrvis-render`.

#![no_std]
// Crate-specific lint settings. (General settings can be found in the workspace manifest.)
#![cfg_attr(
    not(test),
    warn(clippy::std_instead_of_core, clippy::std_instead_of_alloc)
)]
#![warn(clippy::missing_inline_in_public_items)]

#[cfg(any(feature = "std", test))]
#[cfg_attr(test, macro_use)]
extern crate std;
#[cfg(any(feature = "std", test))]
extern crate alloc;

pub mod math;

pub mod util;

// reexport for convenience of dependents and our tests
#[doc(hidden)]
pub use euclid;
