//! Description of the pixel layout a rasterizer must produce for a display.

use core::fmt;

/// The X11 visual classes, which describe how a pixel value becomes a color.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Deserialize, serde::Serialize))]
#[non_exhaustive]
pub enum VisualClass {
    /// Fixed gray levels.
    StaticGray,
    /// Gray levels from a writable colormap.
    GrayScale,
    /// Fixed colormap.
    StaticColor,
    /// Writable colormap indexed by the pixel value.
    PseudoColor,
    /// Pixel value holds the red, green and blue intensities directly.
    TrueColor,
    /// Like `TrueColor`, but each channel goes through its own writable colormap.
    DirectColor,
}

/// Bit masks selecting the red, green and blue fields of a pixel value.
///
/// All zero for visual classes that index a colormap instead.
#[expect(clippy::exhaustive_structs)]
#[derive(Clone, Copy, Debug, Default, Eq, Hash, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Deserialize, serde::Serialize))]
pub struct ChannelMasks {
    /// Red field.
    pub red: u32,
    /// Green field.
    pub green: u32,
    /// Blue field.
    pub blue: u32,
}

impl ChannelMasks {
    fn named(self) -> [(&'static str, u32); 3] {
        [("red", self.red), ("green", self.green), ("blue", self.blue)]
    }
}

/// The pixel format of a display: everything about the display that affects the bytes of
/// an image drawn for it.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub struct PixelFormat {
    depth: u8,
    bits_per_rgb: u8,
    visual_class: VisualClass,
    masks: ChannelMasks,
    scanline_pad: u8,
}

impl PixelFormat {
    /// 24-bit true color with 8 bits per channel, stored in 32-bit words.
    pub const TRUE_COLOR_24: Self = Self {
        depth: 24,
        bits_per_rgb: 8,
        visual_class: VisualClass::TrueColor,
        masks: ChannelMasks {
            red: 0xff_0000,
            green: 0x00_ff00,
            blue: 0x00_00ff,
        },
        scanline_pad: 32,
    };

    /// 8-bit colormap-indexed color.
    pub const PSEUDO_COLOR_8: Self = Self {
        depth: 8,
        bits_per_rgb: 8,
        visual_class: VisualClass::PseudoColor,
        masks: ChannelMasks {
            red: 0,
            green: 0,
            blue: 0,
        },
        scanline_pad: 32,
    };

    /// Validates and constructs a [`PixelFormat`].
    ///
    /// * `depth` is the number of significant bits per pixel, from 1 to 32.
    /// * `bits_per_rgb` is the number of significant bits per color channel, from 1 to 16.
    /// * `masks` must be zero for colormap-indexed visual classes, and otherwise each be a
    ///   nonzero run of contiguous bits, not overlapping the others, within `depth` bits.
    /// * `scanline_pad` is the number of bits each scanline is padded to: 8, 16 or 32.
    pub fn new(
        depth: u8,
        bits_per_rgb: u8,
        visual_class: VisualClass,
        masks: ChannelMasks,
        scanline_pad: u8,
    ) -> Result<Self, PixelFormatError> {
        if !(1..=32).contains(&depth) {
            return Err(PixelFormatError(ErrorKind::Depth { depth }));
        }
        if !(1..=16).contains(&bits_per_rgb) {
            return Err(PixelFormatError(ErrorKind::BitsPerRgb { bits_per_rgb }));
        }
        if !matches!(scanline_pad, 8 | 16 | 32) {
            return Err(PixelFormatError(ErrorKind::ScanlinePad { scanline_pad }));
        }

        let uses_masks = matches!(
            visual_class,
            VisualClass::TrueColor | VisualClass::DirectColor
        );
        if uses_masks {
            let depth_bits = u32::MAX >> (32 - u32::from(depth));
            let mut seen = 0u32;
            for (channel, mask) in masks.named() {
                let contiguous = mask != 0 && (mask >> mask.trailing_zeros()).trailing_ones()
                    == mask.count_ones();
                if !contiguous || mask & !depth_bits != 0 {
                    return Err(PixelFormatError(ErrorKind::Mask {
                        channel,
                        mask,
                        depth,
                    }));
                }
                if seen & mask != 0 {
                    return Err(PixelFormatError(ErrorKind::Overlap { channel, mask }));
                }
                seen |= mask;
            }
        } else if masks != ChannelMasks::default() {
            return Err(PixelFormatError(ErrorKind::UnusedMasks { visual_class }));
        }

        Ok(Self {
            depth,
            bits_per_rgb,
            visual_class,
            masks,
            scanline_pad,
        })
    }

    /// Number of significant bits per pixel.
    pub fn depth(&self) -> u8 {
        self.depth
    }

    /// Number of significant bits per color channel.
    pub fn bits_per_rgb(&self) -> u8 {
        self.bits_per_rgb
    }

    /// How pixel values become colors.
    pub fn visual_class(&self) -> VisualClass {
        self.visual_class
    }

    /// Channel masks; all zero unless the visual class is `TrueColor` or `DirectColor`.
    pub fn masks(&self) -> ChannelMasks {
        self.masks
    }

    /// Number of bits each scanline is padded to.
    pub fn scanline_pad(&self) -> u8 {
        self.scanline_pad
    }

    /// Number of bytes one pixel occupies in an image.
    ///
    /// Depths above 16 bits are stored in 32-bit words; 24-bit pixels are not packed.
    pub fn bytes_per_pixel(&self) -> u8 {
        match self.depth {
            0..=8 => 1,
            9..=16 => 2,
            _ => 4,
        }
    }

    /// Whether pixel values are colors rather than colormap indices.
    pub fn is_true_color(&self) -> bool {
        self.visual_class == VisualClass::TrueColor
    }

    /// Positions of the lowest bit of the red, green and blue masks.
    ///
    /// Zero for channels whose mask is zero.
    pub fn shifts(&self) -> [u32; 3] {
        self.masks.named().map(|(_, mask)| shift_of(mask))
    }

    /// Returns the smallest width, no less than `width` pixels, whose scanline is a whole
    /// number of `scanline_pad` units.
    ///
    /// Returns [`None`] if that width does not fit in `u32`.
    pub fn bitmap_padded_width(&self, width: u32) -> Option<u32> {
        let pixel_bits = u32::from(self.bytes_per_pixel()) * 8;
        let pad = u32::from(self.scanline_pad);
        // Both are powers of two, so one divides the other.
        let step = pad / gcd(pad, pixel_bits);
        width.checked_next_multiple_of(step)
    }

    /// Packs 8-bit color channels into a pixel value, scaling each to its mask's width.
    ///
    /// Returns [`None`] for colormap-indexed visual classes, which have no masks.
    pub fn pack_rgb(&self, red: u8, green: u8, blue: u8) -> Option<u32> {
        if !matches!(
            self.visual_class,
            VisualClass::TrueColor | VisualClass::DirectColor
        ) {
            return None;
        }
        let ChannelMasks {
            red: red_mask,
            green: green_mask,
            blue: blue_mask,
        } = self.masks;
        Some(
            pack_channel(red, red_mask)
                | pack_channel(green, green_mask)
                | pack_channel(blue, blue_mask),
        )
    }
}

impl fmt::Display for PixelFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let Self {
            depth,
            bits_per_rgb,
            visual_class,
            masks: ChannelMasks { red, green, blue },
            scanline_pad,
        } = *self;
        write!(
            f,
            "{visual_class:?} depth {depth} ({bytes} bytes/pixel, {bits_per_rgb} bits/channel), \
                masks {red:#x}/{green:#x}/{blue:#x}, scanline pad {scanline_pad}",
            bytes = self.bytes_per_pixel(),
        )
    }
}

fn shift_of(mask: u32) -> u32 {
    if mask == 0 { 0 } else { mask.trailing_zeros() }
}

fn pack_channel(value: u8, mask: u32) -> u32 {
    if mask == 0 {
        return 0;
    }
    let shift = mask.trailing_zeros();
    let max = u64::from(mask >> shift);
    // Round to nearest, so that 255 maps to all ones for any width.
    let scaled = (u64::from(value) * max + 127) / 255;
    // `scaled <= max`, which came from a `u32`.
    u32::try_from(scaled).unwrap_or(u32::MAX) << shift
}

fn gcd(mut a: u32, mut b: u32) -> u32 {
    while b != 0 {
        (a, b) = (b, a % b);
    }
    a
}

/// Error when a [`PixelFormat`] is not self-consistent.
#[derive(Clone, Copy, Debug, displaydoc::Display, Eq, PartialEq)]
#[displaydoc("{0}")]
pub struct PixelFormatError(ErrorKind);

/// Error details for [`PixelFormatError`].
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
enum ErrorKind {
    Depth {
        depth: u8,
    },
    BitsPerRgb {
        bits_per_rgb: u8,
    },
    ScanlinePad {
        scanline_pad: u8,
    },
    Mask {
        channel: &'static str,
        mask: u32,
        depth: u8,
    },
    Overlap {
        channel: &'static str,
        mask: u32,
    },
    UnusedMasks {
        visual_class: VisualClass,
    },
}

impl fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match *self {
            ErrorKind::Depth { depth } => {
                write!(f, "pixel depth {depth} is not between 1 and 32 bits")
            }
            ErrorKind::BitsPerRgb { bits_per_rgb } => write!(
                f,
                "{bits_per_rgb} bits per channel is not between 1 and 16"
            ),
            ErrorKind::ScanlinePad { scanline_pad } => write!(
                f,
                "scanline pad of {scanline_pad} bits is not 8, 16 or 32"
            ),
            ErrorKind::Mask {
                channel,
                mask,
                depth,
            } => write!(
                f,
                "{channel} mask {mask:#x} is not a contiguous run of bits within depth {depth}"
            ),
            ErrorKind::Overlap { channel, mask } => {
                write!(f, "{channel} mask {mask:#x} overlaps another channel")
            }
            ErrorKind::UnusedMasks { visual_class } => {
                write!(f, "channel masks must be zero for {visual_class:?}")
            }
        }
    }
}

impl core::error::Error for PixelFormatError {}

#[cfg(feature = "serde")]
mod serde_impls {
    use super::*;
    use serde::{Deserialize, Deserializer, Serialize, Serializer};

    #[derive(Debug, Deserialize, Serialize)]
    struct PixelFormatSer {
        depth: u8,
        bits_per_rgb: u8,
        visual_class: VisualClass,
        masks: ChannelMasks,
        scanline_pad: u8,
    }

    impl Serialize for PixelFormat {
        fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
        where
            S: Serializer,
        {
            let &PixelFormat {
                depth,
                bits_per_rgb,
                visual_class,
                masks,
                scanline_pad,
            } = self;
            PixelFormatSer {
                depth,
                bits_per_rgb,
                visual_class,
                masks,
                scanline_pad,
            }
            .serialize(serializer)
        }
    }

    impl<'de> Deserialize<'de> for PixelFormat {
        fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
        where
            D: Deserializer<'de>,
        {
            let PixelFormatSer {
                depth,
                bits_per_rgb,
                visual_class,
                masks,
                scanline_pad,
            } = PixelFormatSer::deserialize(deserializer)?;
            PixelFormat::new(depth, bits_per_rgb, visual_class, masks, scanline_pad)
                .map_err(serde::de::Error::custom)
        }
    }
}
