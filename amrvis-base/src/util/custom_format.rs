#![allow(clippy::missing_inline_in_public_items)]

use core::fmt;

use manyfmt::{Fmt, Refmt as _};

use crate::math::{IndexBox, IndexRect};

/// Format type for [`manyfmt::Fmt`] which is similar to [`fmt::Debug`], but uses an
/// alternate concise format.
///
/// This format is always on one line despite the pretty-printing option, which makes it
/// suitable for log messages. Index boxes are written in the `(small)-(big)` corner notation
/// customary for AMR boxes.
#[expect(clippy::exhaustive_structs)]
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub struct ConciseDebug;

impl<T: Fmt<ConciseDebug>, const N: usize> Fmt<ConciseDebug> for [T; N] {
    fn fmt(&self, fmt: &mut fmt::Formatter<'_>, fopt: &ConciseDebug) -> fmt::Result {
        fmt.debug_list()
            .entries(self.iter().map(|item| item.refmt(fopt)))
            .finish()
    }
}

impl<T: fmt::Debug, U> Fmt<ConciseDebug> for euclid::Point2D<T, U> {
    fn fmt(&self, fmt: &mut fmt::Formatter<'_>, _: &ConciseDebug) -> fmt::Result {
        write!(fmt, "({:?},{:?})", self.x, self.y)
    }
}
impl<T: fmt::Debug, U> Fmt<ConciseDebug> for euclid::Point3D<T, U> {
    fn fmt(&self, fmt: &mut fmt::Formatter<'_>, _: &ConciseDebug) -> fmt::Result {
        write!(fmt, "({:?},{:?},{:?})", self.x, self.y, self.z)
    }
}
impl<T: fmt::Debug, U> Fmt<ConciseDebug> for euclid::Size2D<T, U> {
    fn fmt(&self, fmt: &mut fmt::Formatter<'_>, _: &ConciseDebug) -> fmt::Result {
        write!(fmt, "{:?}×{:?}", self.width, self.height)
    }
}
impl<T: fmt::Debug, U> Fmt<ConciseDebug> for euclid::Size3D<T, U> {
    fn fmt(&self, fmt: &mut fmt::Formatter<'_>, _: &ConciseDebug) -> fmt::Result {
        write!(fmt, "{:?}×{:?}×{:?}", self.width, self.height, self.depth)
    }
}

impl Fmt<ConciseDebug> for IndexBox {
    fn fmt(&self, fmt: &mut fmt::Formatter<'_>, fopt: &ConciseDebug) -> fmt::Result {
        write!(
            fmt,
            "{}-{}",
            self.small_end().refmt(fopt),
            self.big_end().refmt(fopt)
        )
    }
}
impl Fmt<ConciseDebug> for IndexRect {
    fn fmt(&self, fmt: &mut fmt::Formatter<'_>, fopt: &ConciseDebug) -> fmt::Result {
        write!(
            fmt,
            "{}-{}",
            self.small_end().refmt(fopt),
            self.big_end().refmt(fopt)
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::math::IndexSize2;
    use std::string::ToString as _;

    #[test]
    fn boxes() {
        assert_eq!(
            IndexBox::from_corners([0, 0, 2], [3, 3, 2])
                .refmt(&ConciseDebug)
                .to_string(),
            "(0,0,2)-(3,3,2)"
        );
        assert_eq!(
            format!(
                "{:#}",
                IndexRect::from_corners([-1, 0], [3, 7]).refmt(&ConciseDebug)
            ),
            "(-1,0)-(3,7)"
        );
    }

    #[test]
    fn sizes() {
        assert_eq!(
            IndexSize2::new(40, 20).refmt(&ConciseDebug).to_string(),
            "40×20"
        );
    }
}
