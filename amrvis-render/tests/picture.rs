//! Placement of several levels in one picture.

use core::fmt::Write as _;
use core::num::NonZeroU32;

use amrvis_base::math::{Axis, IndexBox, IndexRect};
use amrvis_base::util::ConciseDebug;
use amrvis_render::{GridPicture, Picture, PictureRegion, PixelRect, PixelSize};
use indoc::indoc;
use manyfmt::Refmt as _;
use pretty_assertions::assert_eq;
use rstest::rstest;

fn nz(value: u32) -> NonZeroU32 {
    NonZeroU32::new(value).unwrap()
}

fn planar(overlap: IndexRect, data: IndexRect) -> PictureRegion {
    PictureRegion::Planar { overlap, data }
}

/// Lists the placement of every grid, one per line.
fn layout(picture: &Picture) -> String {
    let mut out = String::new();
    for grid in picture {
        writeln!(
            out,
            "L{level} {rect} at {pos} size {size}",
            level = grid.level(),
            rect = grid.image_box().refmt(&ConciseDebug),
            pos = grid.position_in_picture().refmt(&ConciseDebug),
            size = grid.data_size().refmt(&ConciseDebug),
        )
        .unwrap();
    }
    out
}

#[test]
fn refined_data_covers_same_pixels() {
    let coarse_overlap = IndexRect::from_corners([0, 0], [3, 3]);
    let fine_overlap = coarse_overlap.refine(nz(2)).unwrap();
    let mut picture = Picture::new(nz(10), PixelSize::new(40, 40));
    picture.add(0, nz(1), planar(coarse_overlap, coarse_overlap));
    picture.add(
        1,
        nz(2),
        planar(fine_overlap, IndexRect::from_corners([4, 4], [7, 7])),
    );
    picture.add(
        0,
        nz(1),
        planar(coarse_overlap, IndexRect::from_corners([2, 2], [3, 3])),
    );

    assert_eq!(
        layout(&picture),
        indoc! {"
            L0 (0,0)-(3,3) at (0,0) size 40×40
            L1 (4,4)-(7,7) at (20,0) size 20×20
            L0 (2,2)-(3,3) at (20,0) size 20×20
        "}
    );

    picture.change_scale(nz(3), PixelSize::new(12, 12));
    assert_eq!(
        layout(&picture),
        indoc! {"
            L0 (0,0)-(3,3) at (0,0) size 12×12
            L1 (4,4)-(7,7) at (6,0) size 6×6
            L0 (2,2)-(3,3) at (6,0) size 6×6
        "}
    );
}

/// A fine box and the coarse box it refines occupy exactly the same pixels, for any scale.
#[rstest]
fn alignment_across_levels(
    #[values(1, 2, 3, 7, 10, 64)] scale: u32,
    #[values(2, 4)] ratio: u32,
    #[values([0, 0, 0, 0], [1, 2, 1, 3], [-3, -1, 0, 0], [2, 0, 3, 3])] corners: [i32; 4],
) {
    let [h0, v0, h1, v1] = corners;
    let coarse_overlap = IndexRect::from_corners([-3, -1], [3, 3]);
    let coarse_data = IndexRect::from_corners([h0, v0], [h1, v1]);
    let size = PixelSize::new(7 * scale, 5 * scale);

    let coarse = GridPicture::new(
        0,
        nz(1),
        nz(scale),
        size,
        planar(coarse_overlap, coarse_data),
    );
    let fine = GridPicture::new(
        1,
        nz(ratio),
        nz(scale),
        size,
        planar(
            coarse_overlap.refine(nz(ratio)).unwrap(),
            coarse_data.refine(nz(ratio)).unwrap(),
        ),
    );

    assert_eq!(fine.image_size(), coarse.image_size());
    assert_eq!(fine.data_rect_in_picture(), coarse.data_rect_in_picture());
}

#[rstest]
#[case(Axis::X, PixelSize::new(32, 48), PixelRect::new([8, 16].into(), [24, 40].into()))]
#[case(Axis::Y, PixelSize::new(16, 48), PixelRect::new([8, 16].into(), [16, 40].into()))]
#[case(Axis::Z, PixelSize::new(16, 32), PixelRect::new([8, 8].into(), [16, 24].into()))]
fn slices_of_one_volume(
    #[case] slice: Axis,
    #[case] expected_image: PixelSize,
    #[case] expected_rect: PixelRect,
) {
    // Overlap spans 4 × 8 × 12 cells; data is a 2 × 4 × 6 block in the middle.
    let gp = GridPicture::new(
        0,
        nz(1),
        nz(4),
        expected_image,
        PictureRegion::Sliced {
            overlap: IndexBox::from_corners([0, 0, 0], [3, 7, 11]),
            data: IndexBox::from_corners([2, 2, 2], [3, 5, 7]),
            slice,
        },
    );
    assert_eq!(gp.image_size(), expected_image);
    assert_eq!(gp.data_rect_in_picture(), expected_rect);
}

#[test]
fn zoom_sequence_is_path_independent() {
    let overlap = IndexRect::from_corners([0, 0], [15, 15]);
    let region = planar(overlap, IndexRect::from_corners([3, 5], [9, 14]));

    let mut zoomed = Picture::new(nz(1), PixelSize::new(4, 4));
    zoomed.add(2, nz(4), region);
    for scale in [2, 8, 5, 33, 16] {
        zoomed.change_scale(nz(scale), PixelSize::new(4 * scale, 4 * scale));
    }

    let mut direct = Picture::new(nz(16), PixelSize::new(64, 64));
    direct.add(2, nz(4), region);
    assert_eq!(zoomed, direct);
}
