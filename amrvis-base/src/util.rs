//! Tools that we could imagine being in the Rust standard library, but aren't.

mod custom_format;
pub use custom_format::*;

pub mod log;

#[cfg(any(feature = "std", test))]
mod multi_failure;
#[doc(hidden)] // experimental, may become a library
#[cfg(any(feature = "std", test))]
pub use multi_failure::MultiFailure;
